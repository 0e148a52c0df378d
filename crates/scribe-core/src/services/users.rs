use std::sync::Arc;

use super::LIST_LIMIT;
use crate::DomainError;
use crate::domain::ownership::{self, Authorized};
use crate::domain::{User, UserId, UserInput};
use crate::ports::{Identity, PasswordService, PostRepository, UserRepository};

/// User resource flows.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            users,
            posts,
            passwords,
        }
    }

    /// Sign up. No authentication involved.
    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        input.validate()?;

        let password_hash = self.passwords.hash(&input.password)?;
        let user = self
            .users
            .save(User::new(input.nickname, input.email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.find_all(LIST_LIMIT).await?)
    }

    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "User",
                id,
            })
    }

    /// A user record is self-owned: the path id is the owner.
    ///
    /// Does not touch the store, so it holds for ids with no record.
    pub fn authorize(
        &self,
        caller: Identity,
        target: UserId,
    ) -> Result<Authorized<UserId>, DomainError> {
        ownership::guard(caller.user_id, target)
    }

    pub async fn update(
        &self,
        target: Authorized<UserId>,
        input: UserInput,
    ) -> Result<User, DomainError> {
        input.validate()?;

        let id = target.into_target();
        let existing = self.get(id).await?;
        let password_hash = self.passwords.hash(&input.password)?;

        let user = self
            .users
            .save(existing.apply(input, password_hash))
            .await
            .map_err(|e| e.into_domain("User", id))?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Delete the account and everything it authored.
    pub async fn delete(&self, target: Authorized<UserId>) -> Result<(), DomainError> {
        let id = target.into_target();

        self.users
            .delete(id)
            .await
            .map_err(|e| e.into_domain("User", id))?;
        // The posts FK already cascades in Postgres; the in-memory store
        // needs the sweep.
        let removed_posts = self.posts.delete_by_author(id).await?;

        tracing::info!(user_id = id, removed_posts, "User deleted");
        Ok(())
    }
}
