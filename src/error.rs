use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::state::AppState;

/// Unified request error. Every handler returns `ApiResult<T>` and the
/// conversion to an HTTP response happens in one place.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed or expired credential (401).
    #[error("{0}")]
    Unauthenticated(String),

    /// Valid credential, insufficient role (403).
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity absent (404).
    #[error("{0}")]
    NotFound(String),

    /// Malformed or missing input field (400).
    #[error("{0}")]
    Validation(String),

    /// Duplicate unique field, e.g. email already registered (409).
    #[error("{0}")]
    Conflict(String),

    /// Unexpected store/runtime failure (500). Detail goes to the server
    /// log only, unless the process runs in development mode.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Full internal-error detail, attached to 500 responses as an extension.
/// The body stays generic; [`echo_internal_detail`] swaps the detail in when
/// the configured environment is development.
#[derive(Debug, Clone)]
pub struct InternalDetail(pub String);

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        // Unique violation on users.email surfaces as a clean conflict
        // instead of a 500 when two writers race past the pre-check.
        if let Some(db) = e.as_database_error() {
            if db.code().as_deref() == Some("23505") {
                return ApiError::Conflict("Email already registered".into());
            }
        }
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                let mut res = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server Error" })),
                )
                    .into_response();
                res.extensions_mut().insert(InternalDetail(e.to_string()));
                return res;
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Response-path half of the development-mode contract. The flag travels in
/// `AppState` rather than any process-global; outside development the
/// generic 500 body stands as rendered.
pub async fn echo_internal_detail(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let res = next.run(req).await;
    if !state.config.dev_mode {
        return res;
    }
    let status = res.status();
    match res.extensions().get::<InternalDetail>() {
        Some(InternalDetail(detail)) => {
            (status, Json(json!({ "message": detail }))).into_response()
        }
        None => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::Request as HttpRequest, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn variants_map_to_expected_status_codes() {
        assert_eq!(
            status_of(ApiError::Unauthenticated("no token".into())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::Forbidden("admins only".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(ApiError::NotFound("gone".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::Validation("bad field".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Conflict("taken".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApiError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_is_not_a_conflict() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn internal_response_records_detail_as_an_extension() {
        let res = ApiError::Internal(anyhow::anyhow!("kaboom")).into_response();
        let detail = res.extensions().get::<InternalDetail>();
        assert_eq!(detail.map(|d| d.0.as_str()), Some("kaboom"));
    }

    fn state_with_dev_mode(dev_mode: bool) -> AppState {
        let base = AppState::fake();
        let mut config = (*base.config).clone();
        config.dev_mode = dev_mode;
        AppState::from_parts(base.db, Arc::new(config), base.revenue)
    }

    async fn boom() -> ApiResult<()> {
        Err(ApiError::Internal(anyhow::anyhow!("kaboom")))
    }

    fn test_app(dev_mode: bool) -> Router {
        let state = state_with_dev_mode(dev_mode);
        Router::new()
            .route("/boom", get(boom))
            .layer(middleware::from_fn_with_state(state, echo_internal_detail))
    }

    async fn body_of(app: Router) -> (StatusCode, String) {
        let res = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/boom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn internal_detail_hidden_outside_dev_mode() {
        let (status, body) = body_of(test_app(false)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Server Error"));
        assert!(!body.contains("kaboom"));
    }

    #[tokio::test]
    async fn internal_detail_echoed_in_dev_mode() {
        let (status, body) = body_of(test_app(true)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("kaboom"));
    }
}
