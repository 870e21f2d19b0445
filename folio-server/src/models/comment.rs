//! Comment input validation

use super::ValidationError;

/// Maximum length for a commenter's display name
const MAX_USER_NAME_LEN: usize = 64;

/// Maximum length for comment text
const MAX_COMMENT_LEN: usize = 2000;

/// Validated commenter display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Create a user name from raw input.
    ///
    /// Surrounding whitespace is trimmed; the result must be non-empty and
    /// at most 64 characters.
    ///
    /// ```
    /// use folio_server::models::UserName;
    ///
    /// assert_eq!(UserName::new("  ana ").unwrap().as_str(), "ana");
    /// assert!(UserName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "user_name" });
        }
        if s.chars().count() > MAX_USER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "user_name",
                max: MAX_USER_NAME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated comment body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentText(String);

impl CommentText {
    /// Create comment text. Blank comments are rejected.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "comment" });
        }
        if s.chars().count() > MAX_COMMENT_LEN {
            return Err(ValidationError::TooLong {
                field: "comment",
                max: MAX_COMMENT_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
