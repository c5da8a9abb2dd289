use std::path::Path;
use std::time::Duration;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;

use crate::error::MetadataError;

use super::model::TrackMetadata;

/// Anything that can turn a path into tag metadata.
///
/// Shared by every worker of the pool, hence `Sync`.
pub trait MetadataDecoder: Sync {
    fn decode(&self, path: &Path) -> Result<TrackMetadata, MetadataError>;
}

/// Tag decoding backed by `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyDecoder;

impl MetadataDecoder for LoftyDecoder {
    fn decode(&self, path: &Path) -> Result<TrackMetadata, MetadataError> {
        read_metadata(path)
    }
}

fn non_blank(value: Option<impl AsRef<str>>) -> Option<String> {
    value
        .map(|v| v.as_ref().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Flatten raw genre values into an ordered list.
///
/// ID3v2 stores several genres in one frame separated by NUL, so each value
/// is split before trimming. Blank entries are dropped.
fn normalize_genres<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .flat_map(|v| v.split('\0'))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

fn round_secs(duration: Duration) -> u64 {
    (duration.as_millis() as u64 + 500) / 1000
}

/// Decode the tags of a single file.
///
/// A file that decodes but has no tag at all yields an empty
/// [`TrackMetadata`], which resolves to the `Unknown` genre. Only a file
/// lofty cannot parse is an error.
pub fn read_metadata(path: &Path) -> Result<TrackMetadata, MetadataError> {
    let tagged = lofty::read_from_path(path).map_err(|e| MetadataError {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })?;

    let mut meta = TrackMetadata {
        duration_secs: Some(round_secs(tagged.properties().duration())),
        ..TrackMetadata::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        meta.title = non_blank(tag.title());
        meta.artist = non_blank(tag.artist());
        meta.album = non_blank(tag.album());
        meta.genres = normalize_genres(
            tag.items()
                .filter(|item| matches!(item.key(), ItemKey::Genre))
                .filter_map(|item| item.value().text()),
        );
    }

    Ok(meta)
}
