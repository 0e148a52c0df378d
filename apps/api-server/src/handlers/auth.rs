//! Sign-in handler.

use actix_web::{HttpResponse, web};

use scribe_core::domain::Credentials;
use scribe_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::error::{AppResult, parse_json};
use crate::state::AppState;

/// POST /login
pub async fn login(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req: LoginRequest = parse_json(&body)?;

    let issued = state
        .auth
        .sign_in(Credentials::new(req.email, req.password))
        .await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: u64::try_from(issued.expires_in).unwrap_or_default(),
    }))
}
