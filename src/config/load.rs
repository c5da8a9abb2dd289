use std::{env, path::Path, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment
/// variables (prefix `GENRE_SORTER__`), and falls back to struct defaults.
impl Settings {
    /// Load settings. An `explicit` path must exist; a discovered one may not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = explicit {
            builder = builder.add_source(::config::File::from(path).required(true));
        } else if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("GENRE_SORTER")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.organize.concurrency == 0 {
            return Err("organize.concurrency must be >= 1".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().trim_start_matches('.').is_empty()) {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path: `GENRE_SORTER_CONFIG_PATH` if set, else
/// `$XDG_CONFIG_HOME/genre-sorter/config.toml`, else
/// `~/.config/genre-sorter/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("GENRE_SORTER_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }

    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("genre-sorter").join("config.toml"))
}
