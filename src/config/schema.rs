use std::path::PathBuf;

use serde::Deserialize;

/// Extensions eligible for organizing, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "aiff", "aif", "flac", "wav", "m4a", "ogg", "opus"];

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/genre-sorter/config.toml` or
/// `~/.config/genre-sorter/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `GENRE_SORTER__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub organize: OrganizeSettings,
    pub logging: LoggingSettings,
    pub progress: ProgressSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned for audio files.
    pub source_dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, dot optional).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./music"),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrganizeSettings {
    /// Root of the genre tree. Created if missing.
    pub output_dir: PathBuf,
    /// Number of files processed at once.
    pub concurrency: usize,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./organized-by-genre"),
            concurrency: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is unset, e.g. `"info"` or
    /// `"genre_sorter=debug"`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Draw a progress bar while files are processed.
    pub enabled: bool,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}
