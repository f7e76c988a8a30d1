use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{AdminUser, AuthUser},
    dogs::dto::{CreateDogRequest, DogListQuery, DogView, DogWithOwner, ModerationResponse},
    dogs::repo::NewDog,
    dogs::repo_types::{Dog, DogStatus},
    error::{ApiError, ApiResult},
    extract::{Json, Query},
    state::AppState,
};

pub fn owner_routes() -> Router<AppState> {
    Router::new().route("/dogs", post(create_dog))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dogs", get(list_dogs))
        .route("/admin/dogs/:id/approve", put(approve_dog))
        .route("/admin/dogs/:id/reject", put(reject_dog))
}

pub(crate) fn validate_new_dog(payload: &CreateDogRequest) -> Result<(), ApiError> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::Validation("Name is required".into()));
    }
    if payload.breed.trim().is_empty() {
        return Err(ApiError::Validation("Breed is required".into()));
    }
    if payload.age < 0 {
        return Err(ApiError::Validation("Age must not be negative".into()));
    }
    if payload.images.is_empty() {
        return Err(ApiError::Validation(
            "At least one image is required".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn create_dog(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateDogRequest>,
) -> ApiResult<(StatusCode, Json<DogView>)> {
    validate_new_dog(&payload)?;

    // Ownership comes from the credential, never from the body; the store
    // forces status to pending.
    let attrs = NewDog {
        name: payload.name,
        breed: payload.breed,
        age: payload.age,
        gender: payload.gender,
        images: payload.images,
    };
    let dog = Dog::create(&state.db, user.id, &attrs).await?;

    info!(dog_id = %dog.id, owner_id = %user.id, "dog profile created");
    Ok((StatusCode::CREATED, Json(dog.into())))
}

#[instrument(skip(state))]
pub async fn list_dogs(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(q): Query<DogListQuery>,
) -> ApiResult<Json<Vec<DogWithOwner>>> {
    let filter = q.status.and_then(|s| s.as_status());
    let rows = Dog::list_with_owner(&state.db, filter).await?;
    Ok(Json(rows.into_iter().map(DogWithOwner::from).collect()))
}

async fn moderate(
    state: &AppState,
    id: Uuid,
    status: DogStatus,
    message: &str,
) -> ApiResult<Json<ModerationResponse>> {
    let dog = Dog::set_status(&state.db, id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound("Dog not found".into()))?;
    info!(dog_id = %dog.id, status = ?dog.status, "dog moderated");
    Ok(Json(ModerationResponse {
        message: message.into(),
        dog: dog.into(),
    }))
}

#[instrument(skip(state))]
pub async fn approve_dog(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ModerationResponse>> {
    moderate(&state, id, DogStatus::Approved, "Dog profile approved").await
}

#[instrument(skip(state))]
pub async fn reject_dog(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ModerationResponse>> {
    moderate(&state, id, DogStatus::Rejected, "Dog profile rejected").await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateDogRequest {
        CreateDogRequest {
            name: "Rex".into(),
            breed: "Border Collie".into(),
            age: 3,
            gender: "male".into(),
            images: vec!["rex.jpg".into()],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate_new_dog(&valid_request()).is_ok());
    }

    #[test]
    fn empty_images_rejected() {
        let mut req = valid_request();
        req.images.clear();
        assert!(matches!(
            validate_new_dog(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn blank_name_rejected() {
        let mut req = valid_request();
        req.name = "   ".into();
        assert!(matches!(
            validate_new_dog(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn blank_breed_rejected() {
        let mut req = valid_request();
        req.breed = String::new();
        assert!(matches!(
            validate_new_dog(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn negative_age_rejected() {
        let mut req = valid_request();
        req.age = -1;
        assert!(matches!(
            validate_new_dog(&req),
            Err(ApiError::Validation(_))
        ));
    }
}
