//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields default when absent so that a missing field reaches
//! validation as empty and is reported as `Required <Field>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signup and profile update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Post create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
}

/// A user's public information. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub nickname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: UserRequest = serde_json::from_str(r#"{"nickname": "Kan"}"#).unwrap();
        assert_eq!(req.nickname, "Kan");
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_post_author_optional() {
        let req: PostRequest =
            serde_json::from_str(r#"{"title": "The title", "content": "the content"}"#).unwrap();
        assert_eq!(req.author_id, None);

        let req: PostRequest =
            serde_json::from_str(r#"{"title": "t", "content": "c", "author_id": 1}"#).unwrap();
        assert_eq!(req.author_id, Some(1));
    }
}
