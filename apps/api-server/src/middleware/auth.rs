//! Bearer token extraction.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};
use std::convert::Infallible;
use std::future::{Ready, ready};

/// Raw bearer token from the `Authorization` header.
///
/// Extraction never fails: a missing or malformed header yields `None` and
/// the handler decides when to reject, so that a bad path id is reported
/// before missing credentials.
/// ```ignore
/// async fn protected_route(state: web::Data<AppState>, bearer: BearerToken) -> AppResult<..> {
///     let caller = state.auth.authenticate(bearer.as_deref())?;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    fn from_header(value: &str) -> Option<String> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

impl FromRequest for BearerToken {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_header);

        ready(Ok(BearerToken(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer abc.def.ghi", Some("abc.def.ghi"))]
    #[case("bearer abc", Some("abc"))]
    #[case("  Bearer   abc  ", Some("abc"))]
    #[case("Bearer ", None)]
    #[case("Bearer", None)]
    #[case("Basic dXNlcjpwYXNz", None)]
    #[case("", None)]
    fn test_from_header(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(BearerToken::from_header(header).as_deref(), expected);
    }

    #[actix_web::test]
    async fn test_missing_header_is_none() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let token = BearerToken::extract(&req).await.unwrap();
        assert!(token.0.is_none());
    }
}
