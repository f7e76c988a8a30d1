use sqlx::PgPool;
use uuid::Uuid;

use crate::dogs::repo_types::{Dog, DogStatus, DogWithOwnerRow};

const DOG_COLUMNS: &str =
    "id, owner_id, name, breed, age, gender, images, status, created_at, updated_at";

/// Descriptive attributes accepted at creation. Ownership and status are
/// never part of this set: both are forced by the handler.
#[derive(Debug)]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub images: Vec<String>,
}

impl Dog {
    /// Insert with status defaulting to `pending` at the store level.
    pub async fn create(db: &PgPool, owner_id: Uuid, attrs: &NewDog) -> sqlx::Result<Dog> {
        sqlx::query_as::<_, Dog>(&format!(
            "INSERT INTO dogs (owner_id, name, breed, age, gender, images) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {DOG_COLUMNS}"
        ))
        .bind(owner_id)
        .bind(&attrs.name)
        .bind(&attrs.breed)
        .bind(attrs.age)
        .bind(&attrs.gender)
        .bind(&attrs.images)
        .fetch_one(db)
        .await
    }

    /// Unconditional status write. Idempotent: re-setting the current status
    /// is a no-op state-wise. Returns `None` for an unknown id.
    pub async fn set_status(
        db: &PgPool,
        id: Uuid,
        status: DogStatus,
    ) -> sqlx::Result<Option<Dog>> {
        sqlx::query_as::<_, Dog>(&format!(
            "UPDATE dogs SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {DOG_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await
    }

    /// All dogs, optionally filtered by status, each joined with a shallow
    /// owner projection. A dangling owner yields NULL projection columns.
    pub async fn list_with_owner(
        db: &PgPool,
        status: Option<DogStatus>,
    ) -> sqlx::Result<Vec<DogWithOwnerRow>> {
        sqlx::query_as::<_, DogWithOwnerRow>(
            "SELECT d.id, d.owner_id, d.name, d.breed, d.age, d.gender, d.images, \
                    d.status, d.created_at, d.updated_at, \
                    u.name AS owner_name, u.email AS owner_email, u.avatar AS owner_avatar \
             FROM dogs d \
             LEFT JOIN users u ON u.id = d.owner_id \
             WHERE ($1::dog_status IS NULL OR d.status = $1) \
             ORDER BY d.created_at DESC",
        )
        .bind(status)
        .fetch_all(db)
        .await
    }
}
