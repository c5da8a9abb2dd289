use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::PlacementError;
use crate::library::sanitize_genre;

use super::model::{PlacementResult, SkipReason};

/// Create `dir` and its parents. A directory that already exists, or that
/// another worker creates concurrently, counts as success.
pub fn ensure_dir(dir: &Path) -> Result<(), PlacementError> {
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(source) => Err(PlacementError::CreateDir {
            path: dir.to_path_buf(),
            source,
        }),
    }
}

/// Remove a half-written destination so the next run copies it again.
/// Returns whether the file is gone.
fn discard_partial(target: &Path) -> bool {
    match fs::remove_file(target) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::NotFound => true,
        Err(e) => {
            warn!(
                path = %target.display(),
                error = %e,
                "cannot remove partial copy; later runs will skip it"
            );
            false
        }
    }
}

fn copy_error(from: &Path, to: &Path, source: io::Error) -> PlacementError {
    PlacementError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    }
}

/// Copy `source` into `dest_root/<sanitized genre>/<file name>`.
///
/// An existing destination file is never touched; the call reports it as
/// skipped. The source is only ever read.
pub fn place(source: &Path, genre: &str, dest_root: &Path) -> PlacementResult {
    let target_dir = dest_root.join(sanitize_genre(genre));

    let fail = |error: PlacementError| PlacementResult::Failed {
        source: source.to_path_buf(),
        error: error.into(),
    };

    if let Err(e) = ensure_dir(&target_dir) {
        return fail(e);
    }

    let Some(file_name) = source.file_name() else {
        return fail(copy_error(
            source,
            &target_dir,
            io::Error::new(ErrorKind::InvalidInput, "source path has no file name"),
        ));
    };
    let target = target_dir.join(file_name);

    let mut reader = match File::open(source) {
        Ok(f) => f,
        Err(e) => return fail(copy_error(source, &target, e)),
    };

    // create_new makes the existence check and the creation one step, so two
    // workers racing on the same name cannot both copy.
    let mut writer = match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %target.display(), "destination exists, skipping");
            return PlacementResult::Skipped(target, SkipReason::AlreadyExists);
        }
        Err(e) => return fail(copy_error(source, &target, e)),
    };

    if let Err(e) = io::copy(&mut reader, &mut writer) {
        drop(writer);
        discard_partial(&target);
        return fail(copy_error(source, &target, e));
    }

    PlacementResult::Copied(target)
}
