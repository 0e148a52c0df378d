//! Post handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::{Post, PostInput, parse_id};
use scribe_shared::dto::{PostRequest, PostResponse};

use crate::middleware::auth::BearerToken;
use crate::middleware::error::{AppResult, parse_json};
use crate::state::AppState;

fn post_body(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author_id: post.author_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn post_input(req: PostRequest) -> PostInput {
    PostInput::new(req.title, req.content, req.author_id)
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    bearer: BearerToken,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let caller = state.auth.authenticate(bearer.as_deref())?;

    let req: PostRequest = parse_json(&body)?;
    let post = state.posts.create(caller, post_input(req)).await?;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/posts/{}", post.id)))
        .json(post_body(post)))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(post_body)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(post_body(post)))
}

/// PUT|POST /posts/{id} - author only
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    bearer: BearerToken,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let caller = state.auth.authenticate(bearer.as_deref())?;
    let target = state.posts.authorize(caller, id).await?;

    let req: PostRequest = parse_json(&body)?;
    let post = state.posts.update(target, post_input(req)).await?;

    Ok(HttpResponse::Ok().json(post_body(post)))
}

/// DELETE /posts/{id} - author only
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    bearer: BearerToken,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let caller = state.auth.authenticate(bearer.as_deref())?;
    let target = state.posts.authorize(caller, id).await?;

    state.posts.delete(target).await?;

    Ok(HttpResponse::NoContent().finish())
}
