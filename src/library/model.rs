use std::path::{Path, PathBuf};

/// Genre used when a decodable file carries no usable genre tag.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// A supported file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AudioFile {
    pub path: PathBuf,
}

impl AudioFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercased extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Genre values in tag order; the first one wins.
    pub genres: Vec<String>,
    /// Whole seconds, rounded.
    pub duration_secs: Option<u64>,
}

impl TrackMetadata {
    /// The genre a file is filed under. Never empty.
    pub fn genre(&self) -> &str {
        self.genres
            .first()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .unwrap_or(UNKNOWN_GENRE)
    }
}
