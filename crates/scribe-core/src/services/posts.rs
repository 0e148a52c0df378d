use std::sync::Arc;

use super::LIST_LIMIT;
use crate::DomainError;
use crate::domain::ownership::{self, Authorized};
use crate::domain::{Post, PostId, PostInput};
use crate::ports::{Identity, PostRepository, UserRepository};

/// Post resource flows.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Publish a post as `caller`.
    ///
    /// The payload must name an author, and that author must be the caller.
    pub async fn create(&self, caller: Identity, input: PostInput) -> Result<Post, DomainError> {
        let author_id = input.validate()?;
        ownership::guard(caller.user_id, author_id)?;

        // A valid token can outlive its account.
        if self.users.find_by_id(caller.user_id).await?.is_none() {
            tracing::warn!(caller = caller.user_id, "Token for deleted account");
            return Err(DomainError::Unauthorized);
        }

        let post = self
            .posts
            .save(Post::new(author_id, input.title, input.content))
            .await?;

        tracing::info!(post_id = post.id, author_id, "Post created");
        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all(LIST_LIMIT).await?)
    }

    pub async fn get(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Resolve the stored post and check the caller against its author.
    pub async fn authorize(
        &self,
        caller: Identity,
        id: PostId,
    ) -> Result<Authorized<Post>, DomainError> {
        let post = self.get(id).await?;
        ownership::guard(caller.user_id, post)
    }

    /// Update title and content.
    ///
    /// A payload `author_id`, when present, must also be the caller. The
    /// stored author is kept either way.
    pub async fn update(
        &self,
        target: Authorized<Post>,
        input: PostInput,
    ) -> Result<Post, DomainError> {
        if let Some(claimed) = input.author_id {
            if !ownership::authorize(target.caller(), claimed).is_allowed() {
                tracing::warn!(
                    caller = target.caller(),
                    claimed,
                    "Payload author does not match caller"
                );
                return Err(DomainError::Unauthorized);
            }
        }

        input.validate_fields()?;

        let post = target.into_target();
        let id = post.id;
        let post = self
            .posts
            .save(post.apply(input))
            .await
            .map_err(|e| e.into_domain("Post", id))?;

        tracing::info!(post_id = id, "Post updated");
        Ok(post)
    }

    pub async fn delete(&self, target: Authorized<Post>) -> Result<(), DomainError> {
        let id = target.target().id;
        self.posts
            .delete(id)
            .await
            .map_err(|e| e.into_domain("Post", id))?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(())
    }
}
