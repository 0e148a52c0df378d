//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::{PasswordService, PostRepository, TokenService, UserRepository};
use scribe_core::services::{AuthService, PostService, UserService};
use scribe_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtTokenService,
};

use crate::config::AppConfig;

/// Shared application state. Built once at startup; every field is a cheap
/// handle over `Arc`ed ports.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub users: UserService,
    pub posts: PostService,
}

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (users, posts) = repositories(config).await;
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

        tracing::info!("Application state initialized");
        Self::with_repositories(users, posts, tokens, passwords)
    }

    pub fn with_repositories(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            auth: AuthService::new(users.clone(), tokens, passwords.clone()),
            users: UserService::new(users.clone(), posts.clone(), passwords),
            posts: PostService::new(posts, users),
        }
    }
}

fn in_memory() -> Repositories {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryPostRepository::new()),
    )
}

#[cfg(feature = "postgres")]
async fn repositories(config: &AppConfig) -> Repositories {
    use scribe_infra::database::connect;
    use scribe_infra::{PostgresPostRepository, PostgresUserRepository};

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory();
    };

    match connect(db_config).await {
        Ok(conn) => (
            Arc::new(PostgresUserRepository::new(conn.clone())),
            Arc::new(PostgresPostRepository::new(conn)),
        ),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_config: &AppConfig) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory()
}
