use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub use dto::{UpdateProfileRequest, UserListQuery, UserSummary, UserView};
pub use repo::ProfilePatch;
pub use repo_types::{Plan, Role, User, UserStatus};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::self_routes())
        .merge(handlers::admin_routes())
}
