use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::{auth::AdminUser, error::ApiResult, state::AppState};

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    /// End-user accounts only; admins are excluded.
    pub total_users: i64,
    /// All dog profiles regardless of moderation status.
    pub total_dogs: i64,
    pub pending_dogs: i64,
    pub revenue: i64,
}

#[instrument(skip(state))]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> ApiResult<Json<DashboardStats>> {
    let total_users: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'user'")
            .fetch_one(&state.db)
            .await?;
    let total_dogs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dogs")
        .fetch_one(&state.db)
        .await?;
    let pending_dogs: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM dogs WHERE status = 'pending'")
            .fetch_one(&state.db)
            .await?;

    Ok(Json(DashboardStats {
        total_users,
        total_dogs,
        pending_dogs,
        revenue: state.revenue.current_revenue(),
    }))
}
