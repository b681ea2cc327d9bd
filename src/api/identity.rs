//! Request-scoped user identity
//!
//! Identity is resolved per request from the `X-User-Id` header set by the
//! authenticating gateway in front of this service. There is no ambient
//! session state; handlers that need an identity take it as an extractor.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use uuid::Uuid;

use crate::api::error::ApiError;

const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user for the current request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdentity(pub Uuid);

impl FromRequest for UserIdentity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok());

        ready(match parsed {
            Some(user_id) => Ok(UserIdentity(user_id)),
            None => Err(ApiError::Unauthorized(
                "Missing or invalid X-User-Id header".to_string(),
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_valid_header_is_extracted() {
        let user_id = Uuid::new_v4();
        let req = TestRequest::default()
            .insert_header(("X-User-Id", user_id.to_string()))
            .to_http_request();

        let identity = UserIdentity::extract(&req).await.unwrap();
        assert_eq!(identity.0, user_id);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = UserIdentity::extract(&req).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[actix_web::test]
    async fn test_malformed_uuid_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header(("X-User-Id", "not-a-uuid"))
            .to_http_request();

        let result = UserIdentity::extract(&req).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
