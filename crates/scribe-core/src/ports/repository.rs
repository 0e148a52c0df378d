use async_trait::async_trait;

use crate::domain::{Post, PostId, User, UserId};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List up to `limit` entities in id order.
    async fn find_all(&self, limit: u64) -> Result<Vec<T>, RepoError>;

    /// Save an entity: insert when its id is zero, update otherwise.
    ///
    /// Unique-field collisions are `RepoError::Duplicate`; updating a
    /// missing row is `RepoError::NotFound`.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, UserId> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// Remove every post by `author_id`, returning how many went.
    async fn delete_by_author(&self, author_id: UserId) -> Result<u64, RepoError>;
}
