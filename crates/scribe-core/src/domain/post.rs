use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{required, sanitize};
use super::{PostId, UserId};
use crate::DomainError;

/// Post entity - an article owned by its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned; zero until the post has been persisted.
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Owning identity. Set at creation and never changed.
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(author_id: UserId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite title and content. The author is left untouched.
    pub fn apply(mut self, input: PostInput) -> Self {
        self.title = input.title;
        self.content = input.content;
        self.updated_at = Utc::now();
        self
    }
}

/// Client-supplied post fields.
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    /// Payload-claimed author. Zero or absent means "not supplied".
    pub author_id: Option<UserId>,
}

impl PostInput {
    pub fn new(title: String, content: String, author_id: Option<UserId>) -> Self {
        Self {
            title: sanitize(&title),
            content: sanitize(&content),
            author_id: author_id.filter(|id| *id != 0),
        }
    }

    /// Title and content rules, shared by create and update.
    pub fn validate_fields(&self) -> Result<(), DomainError> {
        required(&self.title, "Title")?;
        required(&self.content, "Content")?;
        Ok(())
    }

    /// Full create rules: fields plus a claimed author.
    pub fn validate(&self) -> Result<UserId, DomainError> {
        self.validate_fields()?;
        self.author_id
            .ok_or_else(|| DomainError::validation("Required Author"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_reports_first_missing_field() {
        let input = PostInput::new("".into(), "".into(), None);
        assert_eq!(input.validate().unwrap_err().to_string(), "Required Title");

        let input = PostInput::new("The title".into(), "".into(), Some(1));
        assert_eq!(input.validate().unwrap_err().to_string(), "Required Content");
    }

    #[test]
    fn test_zero_author_counts_as_missing() {
        let input = PostInput::new("The title".into(), "the content".into(), Some(0));
        assert_eq!(input.validate().unwrap_err().to_string(), "Required Author");
        assert!(input.validate_fields().is_ok());
    }

    #[test]
    fn test_negative_author_is_kept_as_a_claim() {
        let input = PostInput::new("The title".into(), "the content".into(), Some(-5));
        assert_eq!(input.author_id, Some(-5));
        assert_eq!(input.validate().unwrap(), -5);
    }

    #[test]
    fn test_apply_keeps_author() {
        let mut post = Post::new(1, "Title 1".into(), "Hello".into());
        post.id = 9;
        let updated = post.apply(PostInput::new("New".into(), "Body".into(), Some(2)));

        assert_eq!(updated.id, 9);
        assert_eq!(updated.author_id, 1);
        assert_eq!(updated.title, "New");
    }
}
