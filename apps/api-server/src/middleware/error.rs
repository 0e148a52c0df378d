//! Error handling middleware - `{"error": "..."}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web::Bytes};
use serde::de::DeserializeOwned;
use std::fmt;

use scribe_core::DomainError;
use scribe_shared::ErrorResponse;

/// Application-level error type rendered as a single-field JSON body.
#[derive(Debug)]
pub enum AppError {
    BadRequest,
    Unauthorized,
    NotFound(&'static str),
    Conflict(String),
    Unprocessable(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest => write!(f, "Malformed identifier"),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::NotFound(entity) => write!(f, "{} not found", entity),
            AppError::Conflict(field) => write!(f, "{} already taken", field),
            AppError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Existing clients expect 500 on a uniqueness collision.
            AppError::Conflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest => ErrorResponse::malformed_identifier(),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::NotFound(entity) => ErrorResponse::not_found(entity),
            AppError::Conflict(field) => ErrorResponse::already_taken(field),
            AppError::Unprocessable(msg) => ErrorResponse::new(msg.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedIdentifier(_) => AppError::BadRequest,
            DomainError::NotFound { entity_type, .. } => AppError::NotFound(entity_type),
            DomainError::Validation(msg) => AppError::Unprocessable(msg),
            DomainError::Conflict { field } => AppError::Conflict(field),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::InvalidCredentials => {
                AppError::Unprocessable(DomainError::InvalidCredentials.to_string())
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Decode a JSON request body. Undecodable bodies are a 422, like any other
/// unusable input.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::Unprocessable(e.to_string())
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(DomainError::MalformedIdentifier("x".into()), 400, "Malformed Identifier")]
    #[case(DomainError::Unauthorized, 401, "Unauthorized")]
    #[case(DomainError::InvalidCredentials, 422, "Incorrect Details")]
    #[case(DomainError::validation("Required Title"), 422, "Required Title")]
    #[case(DomainError::NotFound { entity_type: "Post", id: 3 }, 404, "Post Not Found")]
    #[case(DomainError::Conflict { field: "Email".into() }, 500, "Email Already Taken")]
    #[case(DomainError::Internal("pool closed".into()), 500, "Internal Server Error")]
    #[actix_web::test]
    async fn test_domain_error_mapping(
        #[case] err: DomainError,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        let (actual, body) = body_of(err.into()).await;
        assert_eq!(actual.as_u16(), status);
        assert_eq!(body, serde_json::json!({ "error": message }));
    }

    #[test]
    fn test_parse_json_rejects_garbage() {
        let result: AppResult<serde_json::Value> = parse_json(&Bytes::from_static(b"{nope"));
        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }
}
