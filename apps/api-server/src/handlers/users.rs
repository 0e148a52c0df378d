//! User account handlers.

use actix_web::{HttpResponse, web};

use scribe_core::domain::{User, UserInput, parse_id};
use scribe_shared::dto::{UserRequest, UserResponse};

use crate::middleware::auth::BearerToken;
use crate::middleware::error::{AppResult, parse_json};
use crate::state::AppState;

fn user_body(user: User) -> UserResponse {
    UserResponse {
        id: user.id,
        nickname: user.nickname,
        email: user.email,
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

fn user_input(req: UserRequest) -> UserInput {
    UserInput::new(req.nickname, req.email, req.password)
}

/// POST /users
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req: UserRequest = parse_json(&body)?;
    let user = state.users.create(user_input(req)).await?;

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/users/{}", user.id)))
        .json(user_body(user)))
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users: Vec<UserResponse> = state
        .users
        .list()
        .await?
        .into_iter()
        .map(user_body)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// GET /users/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let user = state.users.get(id).await?;

    Ok(HttpResponse::Ok().json(user_body(user)))
}

/// PUT|POST /users/{id} - owner only
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    bearer: BearerToken,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let caller = state.auth.authenticate(bearer.as_deref())?;
    let target = state.users.authorize(caller, id)?;

    let req: UserRequest = parse_json(&body)?;
    let user = state.users.update(target, user_input(req)).await?;

    Ok(HttpResponse::Ok().json(user_body(user)))
}

/// DELETE /users/{id} - owner only; removes the user's posts too
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    bearer: BearerToken,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let caller = state.auth.authenticate(bearer.as_deref())?;
    let target = state.users.authorize(caller, id)?;

    state.users.delete(target).await?;

    Ok(HttpResponse::NoContent().finish())
}
