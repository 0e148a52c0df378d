//! Authentication ports.

use crate::domain::UserId;

/// Claims carried by a credential token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: UserId,
    pub issued_at: i64,
    pub exp: i64,
}

/// An authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// Stateless bearer token issuance and verification.
///
/// Validity is purely a function of the signature and the expiry embedded
/// in the token; implementations keep no record of issued tokens.
pub trait TokenService: Send + Sync {
    /// Issue a signed token for an already authenticated identity.
    fn generate_token(&self, user_id: UserId) -> Result<String, AuthError>;

    /// Verify signature and expiry and recover the identity.
    ///
    /// An empty string is `MissingAuth`, anything else that fails is
    /// `InvalidToken` or `TokenExpired`.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Validity window of issued tokens.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
