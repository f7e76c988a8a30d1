use axum::{extract::State, routing::get, Router};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::handlers::{is_valid_email, MIN_PASSWORD_LEN},
    auth::password::hash_password,
    auth::{AdminUser, AuthUser},
    error::{ApiError, ApiResult},
    extract::{Json, Query},
    state::AppState,
    users::dto::{UpdateProfileRequest, UserListQuery, UserSummary, UserView},
    users::repo::ProfilePatch,
    users::repo_types::User,
};

pub fn self_routes() -> Router<AppState> {
    Router::new().route("/users/profile", get(get_profile).put(update_profile))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/profile",
            get(get_admin_profile).put(update_admin_profile),
        )
        .route("/admin/users", get(list_users))
}

/// Resolve the authenticated identity to a live record. The credential was
/// already accepted by the gate, so a missing row here is a NotFound, not an
/// auth failure.
async fn load_profile(state: &AppState, user_id: Uuid) -> ApiResult<UserView> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    let dogs = User::dog_ids(&state.db, user_id).await?;
    Ok(UserView::from_user(user, dogs))
}

async fn apply_profile_patch(
    state: &AppState,
    user_id: Uuid,
    mut req: UpdateProfileRequest,
) -> ApiResult<UserView> {
    if let Some(email) = &req.email {
        let email = email.trim().to_string();
        if !is_valid_email(&email) {
            return Err(ApiError::Validation("Invalid email".into()));
        }
        req.email = Some(email);
    }
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name must not be empty".into()));
        }
    }

    // Re-hash only when a password change is requested.
    let password_hash = match req.password.as_deref() {
        Some(pw) if pw.len() < MIN_PASSWORD_LEN => {
            return Err(ApiError::Validation("Password too short".into()))
        }
        Some(pw) => Some(hash_password(pw)?),
        None => None,
    };

    let patch = ProfilePatch {
        name: req.name,
        email: req.email,
        phone: req.phone,
        password_hash,
    };
    let user = User::update_profile(&state.db, user_id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(user_id = %user.id, "profile updated");
    let dogs = User::dog_ids(&state.db, user_id).await?;
    Ok(UserView::from_user(user, dogs))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<UserView>> {
    Ok(Json(load_profile(&state, user.id).await?))
}

#[instrument(skip(state, req))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserView>> {
    Ok(Json(apply_profile_patch(&state, user.id, req).await?))
}

#[instrument(skip(state))]
pub async fn get_admin_profile(
    State(state): State<AppState>,
    AdminUser(user_id): AdminUser,
) -> ApiResult<Json<UserView>> {
    Ok(Json(load_profile(&state, user_id).await?))
}

#[instrument(skip(state, req))]
pub async fn update_admin_profile(
    State(state): State<AppState>,
    AdminUser(user_id): AdminUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserView>> {
    Ok(Json(apply_profile_patch(&state, user_id, req).await?))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(q): Query<UserListQuery>,
) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = User::list(&state.db, q.role, q.status).await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
