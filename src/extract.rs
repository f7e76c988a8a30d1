//! Request extractors that reject through [`ApiError`], so a malformed body
//! or query string renders the same `{"message": ...}` shape as every other
//! validation failure instead of axum's plain-text default.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Debug)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(Debug)]
pub struct Query<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Query(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    use crate::dogs::{DogListQuery, StatusFilter};
    use crate::users::UpdateProfileRequest;

    fn parts_for(uri: &str) -> Parts {
        let (parts, _) = HttpRequest::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn unrecognized_status_value_is_a_validation_error() {
        let mut parts = parts_for("/api/admin/dogs?status=banana");
        let err = Query::<DogListQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn known_status_value_parses() {
        let mut parts = parts_for("/api/admin/dogs?status=pending");
        let Query(q) = Query::<DogListQuery>::from_request_parts(&mut parts, &())
            .await
            .expect("known status");
        assert_eq!(q.status, Some(StatusFilter::Pending));
    }

    #[tokio::test]
    async fn unknown_body_field_is_a_validation_error() {
        let req = HttpRequest::builder()
            .method("PUT")
            .uri("/api/users/profile")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"x","role":"admin"}"#))
            .unwrap();
        let err = Json::<UpdateProfileRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_validation_error() {
        let req = HttpRequest::builder()
            .method("PUT")
            .uri("/api/users/profile")
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let err = Json::<UpdateProfileRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
