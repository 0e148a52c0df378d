use std::sync::Arc;

use crate::DomainError;
use crate::domain::Credentials;
use crate::ports::{AuthError, Identity, PasswordService, TokenService, UserRepository};

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Sign-in and bearer authentication.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }

    /// Check credentials against the stored hash and issue a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<IssuedToken, DomainError> {
        credentials.validate()?;

        let user = self
            .users
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .passwords
            .verify(&credentials.password, &user.password_hash)?
        {
            tracing::debug!(user_id = user.id, "Password mismatch on sign-in");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.generate_token(user.id)?;
        tracing::info!(user_id = user.id, "User signed in");

        Ok(IssuedToken {
            token,
            expires_in: self.tokens.expiration_seconds(),
        })
    }

    /// Resolve a raw bearer value to the caller's identity.
    ///
    /// `None` and blank values are treated as a missing token.
    pub fn authenticate(&self, bearer: Option<&str>) -> Result<Identity, DomainError> {
        let token = bearer.map(str::trim).unwrap_or_default();

        self.tokens
            .validate_token(token)
            .map(Identity::from)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Bearer authentication failed");
                e.into()
            })
    }
}
