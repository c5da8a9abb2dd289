//! Placing files into the genre tree.
//!
//! `place` handles one file; `run_pool` fans a whole list out over a fixed
//! number of worker threads and funnels their completions back to the
//! caller for progress reporting.

mod model;
mod place;
mod scheduler;

pub use model::{PlacementResult, Summary};
pub use place::{ensure_dir, place};
pub use scheduler::run_pool;
