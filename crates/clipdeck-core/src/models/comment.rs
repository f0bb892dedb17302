use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation::{
    truncate_chars, AUTHOR_NAME_MAX_CHARS, COMMENT_TEXT_MAX_CHARS, DEFAULT_AUTHOR_NAME,
    USER_ID_MAX_CHARS,
};

/// A comment embedded in exactly one video document. Comments have no
/// independent storage: they are created and destroyed only through a replace
/// of the parent document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    /// Caller-supplied identifier; the sole deletion authorization token,
    /// compared by exact string equality.
    pub user_id: String,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment from untrusted input, applying silent truncation and
    /// the author-name placeholder. Emptiness of `user_id`/`text` is the
    /// caller's check.
    pub fn new(user_id: &str, author_name: Option<&str>, text: &str) -> Self {
        let author_name = match author_name.map(str::trim) {
            Some(name) if !name.is_empty() => truncate_chars(name, AUTHOR_NAME_MAX_CHARS),
            _ => DEFAULT_AUTHOR_NAME.to_string(),
        };

        Comment {
            id: Uuid::new_v4(),
            user_id: truncate_chars(user_id, USER_ID_MAX_CHARS),
            author_name,
            text: truncate_chars(text, COMMENT_TEXT_MAX_CHARS),
            created_at: Utc::now(),
        }
    }
}
