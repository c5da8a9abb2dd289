//! Progress reporting for a run.
//!
//! Reporters only observe; nothing they do feeds back into the pipeline.
//! Log output shares the terminal with the bar, so it is routed through
//! [`BarAwareWriter`], which hides the bars while a line is written.

use std::io::{self, Write};

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use tracing_subscriber::fmt::MakeWriter;

const BAR_TEMPLATE: &str = "Progress |{bar:40}| {percent}% || {pos}/{len} files";

pub trait ProgressReporter {
    fn start(&mut self, total: u64);
    fn increment(&mut self);
    fn stop(&mut self);
}

/// Terminal progress bar, drawn through a shared [`MultiProgress`].
pub struct BarReporter {
    bars: MultiProgress,
    bar: Option<ProgressBar>,
}

impl BarReporter {
    pub fn new(bars: MultiProgress) -> Self {
        Self { bars, bar: None }
    }
}

impl ProgressReporter for BarReporter {
    fn start(&mut self, total: u64) {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░");
        let bar = self.bars.add(ProgressBar::new(total));
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn increment(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

/// Reporter for `--no-progress`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn start(&mut self, _total: u64) {}
    fn increment(&mut self) {}
    fn stop(&mut self) {}
}

/// `MakeWriter` for the tracing fmt layer that clears the bars before each
/// write and redraws them after, so log lines and the bar never interleave.
pub struct BarAwareWriter<M> {
    bars: MultiProgress,
    inner: M,
}

impl<M> BarAwareWriter<M> {
    pub fn new(bars: MultiProgress, inner: M) -> Self {
        Self { bars, inner }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for BarAwareWriter<M> {
    type Writer = Suspended<'a, M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Suspended {
            bars: &self.bars,
            inner: self.inner.make_writer(),
        }
    }
}

pub struct Suspended<'a, W> {
    bars: &'a MultiProgress,
    inner: W,
}

impl<W: Write> Write for Suspended<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.bars.suspend(|| inner.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let inner = &mut self.inner;
        self.bars.suspend(|| inner.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        let inner = &mut self.inner;
        self.bars.suspend(|| inner.flush())
    }
}
