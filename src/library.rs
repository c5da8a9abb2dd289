//! Source library: discovering audio files and reading their tags.
//!
//! `scan` walks the source tree, `metadata` decodes tags through a
//! pluggable [`MetadataDecoder`], and `sanitize` turns a genre into a
//! folder name that is safe on every platform we write to.

mod metadata;
mod model;
mod sanitize;
mod scan;

pub use metadata::{LoftyDecoder, MetadataDecoder};
pub use model::{AudioFile, TrackMetadata};
pub use sanitize::sanitize_genre;
pub use scan::scan;
