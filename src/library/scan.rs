use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::ScanError;

use super::model::AudioFile;

/// Configured extensions, lowercased and without dots.
fn allowed_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn is_audio_file(file: &AudioFile, allowed: &[String]) -> bool {
    file.extension()
        .map(|ext| allowed.contains(&ext))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn root_error(dir: &Path, source: io::Error) -> ScanError {
    ScanError::RootUnreadable {
        path: dir.to_path_buf(),
        source,
    }
}

/// Recursively collect every supported file below `dir`.
///
/// The result holds absolute paths, sorted, each exactly once. Failing to
/// list `dir` itself is an error; failing to list anything beneath it is
/// logged and that entry is skipped.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<AudioFile>, ScanError> {
    let root = fs::canonicalize(dir).map_err(|e| root_error(dir, e))?;
    // Surfaces permission problems and "root is a file" before walking.
    fs::read_dir(&root).map_err(|e| root_error(dir, e))?;

    let allowed = allowed_extensions(settings);
    let walker = WalkDir::new(&root).follow_links(settings.follow_links);

    let mut files: Vec<AudioFile> = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string()).unwrap_or_default();
                warn!(%path, error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let file = AudioFile::new(entry.into_path());
        if is_audio_file(&file, &allowed) {
            files.push(file);
        }
    }

    files.sort();
    files.dedup();
    debug!(root = %root.display(), count = files.len(), "scan finished");
    Ok(files)
}
