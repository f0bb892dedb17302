//! Validation and normalization of untrusted request fields.
//!
//! Truncation is silent and counts characters, not bytes; emptiness is checked
//! after truncation by the callers that require a field.

/// Field length limits for stored documents.
pub const TITLE_MAX_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 300;
pub const USER_ID_MAX_CHARS: usize = 80;
pub const AUTHOR_NAME_MAX_CHARS: usize = 40;
pub const COMMENT_TEXT_MAX_CHARS: usize = 800;

/// Display label used when a comment arrives without an author name.
pub const DEFAULT_AUTHOR_NAME: &str = "Anonymous";

/// Truncate to at most `max_chars` characters, on a character boundary.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => input[..idx].to_string(),
        None => input.to_string(),
    }
}

/// Lowercased extension of an uploaded filename; `mp4` when the name has none.
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "mp4".to_string())
}

/// Whether a declared content type is a video media type.
pub fn is_video_content_type(content_type: &str) -> bool {
    content_type.to_lowercase().starts_with("video/")
}

/// Strict identifier check for the configurable videos table name, which is
/// interpolated into SQL and must never carry quoting or injection characters.
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
