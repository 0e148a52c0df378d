//! Domain entities - the core business objects.

mod post;
mod user;

pub mod ownership;
pub mod validation;

pub use ownership::{Authorized, Decision, Owned};
pub use post::{Post, PostInput};
pub use user::{Credentials, User, UserInput};

/// Numeric identifier of an authenticated principal.
pub type UserId = i64;

/// Numeric identifier of a post.
pub type PostId = i64;

/// Parse a path segment into a numeric identifier.
pub fn parse_id(raw: &str) -> Result<i64, crate::DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| crate::DomainError::MalformedIdentifier(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(
            parse_id("unknown"),
            Err(crate::DomainError::MalformedIdentifier(_))
        ));
        assert!(parse_id("").is_err());
    }
}
