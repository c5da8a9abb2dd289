use super::model::UNKNOWN_GENRE;

/// Characters that cannot appear in a path segment on Windows, macOS or Linux.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c) || (c as u32) < 0x20
}

/// Map a raw genre string to a single, safe directory name.
///
/// Reserved and control characters are dropped (not replaced), then
/// surrounding whitespace is trimmed. Anything that would be empty, or
/// would name the current or parent directory, becomes `"Unknown"`.
///
/// Distinct genres can collapse to the same name (`"R&B/Soul"` and
/// `"R&BSoul"`); those files intentionally share one folder.
pub fn sanitize_genre(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|&c| !is_reserved(c)).collect();
    let trimmed = cleaned.trim();

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        UNKNOWN_GENRE.to_string()
    } else {
        trimmed.to_string()
    }
}
