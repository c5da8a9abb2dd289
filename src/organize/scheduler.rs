use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

/// Process every item on a fixed pool of `concurrency` worker threads.
///
/// Workers claim items through a shared atomic cursor. Each finished item is
/// sent back to the calling thread, which invokes `on_done` exactly once per
/// item and is the only thread to do so. Returns once all items are done,
/// with results in input order.
pub fn run_pool<T, R, F, P>(items: &[T], concurrency: usize, process: F, mut on_done: P) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
    P: FnMut(&R),
{
    let workers = concurrency.clamp(1, items.len().max(1));
    let cursor = AtomicUsize::new(0);
    let mut slots: Vec<Option<R>> = (0..items.len()).map(|_| None).collect();

    thread::scope(|s| {
        let (tx, rx) = mpsc::channel::<(usize, R)>();

        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            let process = &process;
            s.spawn(move || {
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(item) = items.get(index) else {
                        break;
                    };
                    if tx.send((index, process(item))).is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold the remaining senders; the loop below ends when they exit.
        drop(tx);

        for (index, result) in rx {
            on_done(&result);
            slots[index] = Some(result);
        }
    });

    slots.into_iter().flatten().collect()
}
