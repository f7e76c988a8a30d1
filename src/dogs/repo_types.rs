use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Moderation status of a dog profile. Transitioned only by admin action;
/// every status is reachable from every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "dog_status", rename_all = "lowercase")]
pub enum DogStatus {
    Pending,
    Approved,
    Rejected,
}

/// Dog record in the database. `owner_id` is a reference, not an embed, and
/// may dangle if the owner was removed out-of-band.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dog {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub images: Vec<String>,
    pub status: DogStatus,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Admin-listing row: dog plus a shallow projection of its owner.
#[derive(Debug, FromRow)]
pub struct DogWithOwnerRow {
    #[sqlx(flatten)]
    pub dog: Dog,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_avatar: Option<String>,
}
