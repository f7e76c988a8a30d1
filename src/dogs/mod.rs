use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub use dto::{CreateDogRequest, DogListQuery, DogView, DogWithOwner, StatusFilter};
pub use repo::NewDog;
pub use repo_types::{Dog, DogStatus};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::owner_routes())
        .merge(handlers::admin_routes())
}
