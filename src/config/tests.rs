use super::load::resolve_config_path;
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

/// Strip variables from the real environment that would leak into a test.
fn clean_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::remove("GENRE_SORTER__ORGANIZE__CONCURRENCY"),
        EnvGuard::remove("GENRE_SORTER__ORGANIZE__OUTPUT_DIR"),
        EnvGuard::remove("GENRE_SORTER__LIBRARY__SOURCE_DIR"),
        EnvGuard::remove("GENRE_SORTER__LOGGING__LEVEL"),
        EnvGuard::remove("GENRE_SORTER__PROGRESS__ENABLED"),
    ]
}

#[test]
fn defaults_match_documented_values() {
    let s = Settings::default();
    assert_eq!(s.library.source_dir, PathBuf::from("./music"));
    assert_eq!(s.organize.output_dir, PathBuf::from("./organized-by-genre"));
    assert!((5..=20).contains(&s.organize.concurrency));
    assert_eq!(
        s.library.extensions,
        vec!["mp3", "aiff", "aif", "flac", "wav", "m4a", "ogg", "opus"]
    );
    assert!(!s.library.follow_links);
    assert!(s.library.include_hidden);
    assert_eq!(s.logging.level, "info");
    assert!(s.progress.enabled);
    assert!(s.validate().is_ok());
}

#[test]
fn validate_rejects_zero_concurrency_and_empty_extensions() {
    let mut s = Settings::default();
    s.organize.concurrency = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.library.extensions = vec![" ".into(), ".".into()];
    assert!(s.validate().is_err());
}

#[test]
fn resolve_config_path_prefers_explicit_env_var() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("GENRE_SORTER_CONFIG_PATH", "/tmp/genre-sorter-test.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/genre-sorter-test.toml")
    );
}

#[test]
fn resolve_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g0 = EnvGuard::remove("GENRE_SORTER_CONFIG_PATH");
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("genre-sorter")
            .join("config.toml")
    );
}

#[test]
fn resolve_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g0 = EnvGuard::remove("GENRE_SORTER_CONFIG_PATH");
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("genre-sorter")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();
    let _clean = clean_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
source_dir = "/srv/music"
extensions = ["mp3", "flac"]
include_hidden = false
follow_links = true

[organize]
output_dir = "/srv/by-genre"
concurrency = 12

[logging]
level = "debug"

[progress]
enabled = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("GENRE_SORTER_CONFIG_PATH", cfg_path.to_str().unwrap());

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.source_dir, PathBuf::from("/srv/music"));
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
    assert!(!s.library.include_hidden);
    assert!(s.library.follow_links);
    assert_eq!(s.organize.output_dir, PathBuf::from("/srv/by-genre"));
    assert_eq!(s.organize.concurrency, 12);
    assert_eq!(s.logging.level, "debug");
    assert!(!s.progress.enabled);
}

#[test]
fn settings_partial_file_keeps_defaults_for_the_rest() {
    let _lock = env_lock();
    let _clean = clean_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[organize]\nconcurrency = 3\n").unwrap();

    let s = Settings::load(Some(cfg_path.as_path())).unwrap();
    assert_eq!(s.organize.concurrency, 3);
    assert_eq!(s.organize.output_dir, PathBuf::from("./organized-by-genre"));
    assert_eq!(s.library.extensions.len(), 8);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();
    let _clean = clean_env();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[organize]\nconcurrency = 4\n").unwrap();

    let _g1 = EnvGuard::set("GENRE_SORTER_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("GENRE_SORTER__ORGANIZE__CONCURRENCY", "16");

    let s = Settings::load(None).unwrap();
    assert_eq!(s.organize.concurrency, 16);
}

#[test]
fn missing_discovered_config_is_fine_but_missing_explicit_is_not() {
    let _lock = env_lock();
    let _clean = clean_env();

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let _g1 = EnvGuard::set("GENRE_SORTER_CONFIG_PATH", missing.to_str().unwrap());

    let s = Settings::load(None).unwrap();
    assert_eq!(s.organize.concurrency, 8);

    assert!(Settings::load(Some(missing.as_path())).is_err());
}
