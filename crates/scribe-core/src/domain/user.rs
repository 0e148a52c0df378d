use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;
use super::validation::{is_valid_email, required, sanitize};
use crate::DomainError;

/// User entity - represents a user in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned; zero until the user has been persisted.
    pub id: UserId,
    pub nickname: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not yet persisted user.
    pub fn new(nickname: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            nickname,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable profile fields, keeping identity and creation time.
    pub fn apply(mut self, input: UserInput, password_hash: String) -> Self {
        self.nickname = input.nickname;
        self.email = input.email;
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
        self
    }
}

/// Client-supplied user fields for signup and profile updates.
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub nickname: String,
    pub email: String,
    pub password: String,
}

impl UserInput {
    pub fn new(nickname: String, email: String, password: String) -> Self {
        Self {
            nickname,
            email,
            password,
        }
        .prepare()
    }

    fn prepare(mut self) -> Self {
        self.nickname = sanitize(&self.nickname);
        self.email = self.email.trim().to_string();
        self
    }

    /// Report the first failing field rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.nickname, "Nickname")?;
        required(&self.password, "Password")?;
        required(&self.email, "Email")?;
        if !is_valid_email(&self.email) {
            return Err(DomainError::validation("Invalid Email"));
        }
        Ok(())
    }
}

/// Sign-in credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email: email.trim().to_string(),
            password,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        required(&self.password, "Password")?;
        required(&self.email, "Email")?;
        if !is_valid_email(&self.email) {
            return Err(DomainError::validation("Invalid Email"));
        }
        Ok(())
    }
}
