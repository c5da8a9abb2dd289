//! Configuration loader and schema types.
//!
//! Settings come from struct defaults, an optional TOML file and
//! `GENRE_SORTER__*` environment variables. Command-line flags are applied
//! on top by the runtime.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
