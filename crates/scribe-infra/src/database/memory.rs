//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Unique fields are checked and rows written under one write lock, so two
//! concurrent saves with the same unique value cannot both succeed.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use scribe_core::domain::{Post, User, UserId};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository, UserRepository};

/// A row that can live in an [`InMemoryRepository`].
pub trait MemoryRow: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    /// `(field label, value)` pairs that must be unique across the table.
    fn unique_fields(&self) -> Vec<(&'static str, &str)>;
}

impl MemoryRow for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Nickname", self.nickname.as_str()), ("Email", self.email.as_str())]
    }
}

impl MemoryRow for Post {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("Title", self.title.as_str())]
    }
}

struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: MemoryRow> Table<T> {
    fn check_unique(&self, candidate: &T) -> Result<(), RepoError> {
        for (field, value) in candidate.unique_fields() {
            let taken = self.rows.values().any(|row| {
                row.id() != candidate.id()
                    && row
                        .unique_fields()
                        .iter()
                        .any(|(other, existing)| *other == field && *existing == value)
            });
            if taken {
                return Err(RepoError::Duplicate {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Id-ordered table behind an async RwLock. Data is lost on restart.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

impl<T: MemoryRow> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<T: MemoryRow> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: MemoryRow> BaseRepository<T, i64> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self, limit: u64) -> Result<Vec<T>, RepoError> {
        let table = self.table.read().await;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(table.rows.values().take(limit).cloned().collect())
    }

    async fn save(&self, mut entity: T) -> Result<T, RepoError> {
        let mut table = self.table.write().await;

        if entity.id() != 0 && !table.rows.contains_key(&entity.id()) {
            return Err(RepoError::NotFound);
        }
        table.check_unique(&entity)?;

        if entity.id() == 0 {
            table.last_id += 1;
            entity.set_id(table.last_id);
        }
        table.rows.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<User>;

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn delete_by_author(&self, author_id: UserId) -> Result<u64, RepoError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|_, p| p.author_id != author_id);
        Ok((before - table.rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(nickname: &str, email: &str) -> User {
        User::new(nickname.into(), email.into(), "hash".into())
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(user("Pet", "pet@gmail.com")).await.unwrap();
        let second = repo.save(user("Kenny", "kenny@gmail.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all(100).await.unwrap().len(), 2);
    }

    #[rstest]
    #[case::email("Frank", "pet@gmail.com", "Email")]
    #[case::nickname("Pet", "grand@gmail.com", "Nickname")]
    #[tokio::test]
    async fn test_duplicate_fields_rejected(
        #[case] nickname: &str,
        #[case] email: &str,
        #[case] expected: &str,
    ) {
        let repo = InMemoryUserRepository::new();
        repo.save(user("Pet", "pet@gmail.com")).await.unwrap();

        let err = repo.save(user(nickname, email)).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate { ref field } if field == expected));
    }

    #[tokio::test]
    async fn test_update_may_keep_own_unique_values() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(user("Pet", "pet@gmail.com")).await.unwrap();

        saved.password_hash = "other".into();
        let updated = repo.save(saved).await.unwrap();
        assert_eq!(updated.password_hash, "other");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut ghost = user("Ghost", "ghost@gmail.com");
        ghost.id = 9;

        assert!(matches!(repo.save(ghost).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(9).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_all_respects_limit() {
        let repo = InMemoryPostRepository::new();
        for i in 0..5 {
            repo.save(Post::new(1, format!("Title {}", i), "Hello".into()))
                .await
                .unwrap();
        }

        let page = repo.find_all(3).await.unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].title, "Title 0");
    }

    #[tokio::test]
    async fn test_delete_by_author() {
        let repo = InMemoryPostRepository::new();
        repo.save(Post::new(1, "Title 1".into(), "Hello".into()))
            .await
            .unwrap();
        repo.save(Post::new(2, "Title 2".into(), "Hello".into()))
            .await
            .unwrap();
        repo.save(Post::new(1, "Title 3".into(), "Hello".into()))
            .await
            .unwrap();

        assert_eq!(repo.delete_by_author(1).await.unwrap(), 2);
        let remaining = repo.find_all(100).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].author_id, 2);
    }
}
