use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use scribe_core::domain::{Post, User};
use scribe_core::error::RepoError;
use scribe_core::ports::{BaseRepository, PostRepository, UserRepository};

use crate::database::entity::{post, user};
use crate::database::postgres_base::{duplicate_field, map_write_error};
use crate::database::postgres_repo::{
    PostgresPostRepository, PostgresUserRepository, mask_email,
};

fn post_model(id: i64, author_id: i64, title: &str) -> post::Model {
    let now = Utc::now();
    post::Model {
        id,
        title: title.to_owned(),
        content: "Hello world".to_owned(),
        author_id,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn user_model(id: i64, nickname: &str, email: &str) -> user::Model {
    let now = Utc::now();
    user::Model {
        id,
        nickname: nickname.to_owned(),
        email: email.to_owned(),
        password_hash: "hash".to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(1, 1, "Title 1")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Title 1");
    assert_eq!(post.author_id, 1);
}

#[tokio::test]
async fn test_find_all_users() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            user_model(1, "Steven victor", "steven@gmail.com"),
            user_model(2, "Kenny Morris", "kenny@gmail.com"),
        ]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let users: Vec<User> = repo.find_all(100).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].nickname, "Kenny Morris");
}

#[tokio::test]
async fn test_find_user_by_email() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(1, "Pet", "pet@gmail.com")]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let user = repo.find_by_email("pet@gmail.com").await.unwrap().unwrap();

    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn test_insert_post_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(5, 1, "The title")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let saved: Post = repo
        .save(Post::new(1, "The title".into(), "Hello world".into()))
        .await
        .unwrap();

    assert_eq!(saved.id, 5);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = BaseRepository::<Post, i64>::delete(&repo, 99).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_by_author_counts_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert_eq!(repo.delete_by_author(1).await.unwrap(), 3);
}

#[test]
fn test_duplicate_field_from_constraint_name() {
    assert_eq!(
        duplicate_field(r#"duplicate key value violates unique constraint "users_email_key""#),
        "Email"
    );
    assert_eq!(
        duplicate_field(r#"duplicate key value violates unique constraint "users_nickname_key""#),
        "Nickname"
    );
    assert_eq!(
        duplicate_field(r#"duplicate key value violates unique constraint "posts_title_key""#),
        "Title"
    );
    assert_eq!(duplicate_field("something else"), "Record");
}

#[test]
fn test_record_not_updated_is_not_found() {
    assert!(matches!(
        map_write_error(sea_orm::DbErr::RecordNotUpdated),
        RepoError::NotFound
    ));
}

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("pet@gmail.com"), "p***@gmail.com");
    assert_eq!(mask_email("p@gmail.com"), "***@gmail.com");
    assert_eq!(mask_email("nonsense"), "***");
}
