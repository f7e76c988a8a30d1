use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::dogs::repo_types::{Dog, DogStatus, DogWithOwnerRow};

/// Creation request. Status and ownership are deliberately absent: both are
/// forced server-side, and unknown fields (including attempts to smuggle
/// them in) are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDogRequest {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub gender: String,
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DogView {
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

impl From<Dog> for DogView {
    fn from(d: Dog) -> Self {
        Self {
            id: d.id,
            owner_id: d.owner_id,
            name: d.name,
            breed: d.breed,
            age: d.age,
            gender: d.gender,
            images: d.images,
            status: d.status,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Shallow owner projection attached to admin listings.
#[derive(Debug, Serialize)]
pub struct OwnerSummary {
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DogWithOwner {
    #[serde(flatten)]
    pub dog: DogView,
    pub owner: OwnerSummary,
}

impl From<DogWithOwnerRow> for DogWithOwner {
    fn from(row: DogWithOwnerRow) -> Self {
        let owner = OwnerSummary {
            // dangling owner reference degrades to a display value
            name: row.owner_name.unwrap_or_else(|| "Unknown".into()),
            email: row.owner_email,
            avatar: row.owner_avatar,
        };
        Self {
            dog: row.dog.into(),
            owner,
        }
    }
}

/// `?status=` query: `all` and omission both mean "no filter"; anything that
/// is not a known status is a validation error at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub fn as_status(self) -> Option<DogStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(DogStatus::Pending),
            StatusFilter::Approved => Some(DogStatus::Approved),
            StatusFilter::Rejected => Some(DogStatus::Rejected),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DogListQuery {
    pub status: Option<StatusFilter>,
}

/// Moderation response mirrors the admin console contract: a message plus
/// the updated profile.
#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    pub message: String,
    pub dog: DogView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_status_injection() {
        let res = serde_json::from_str::<CreateDogRequest>(
            r#"{"name":"Rex","breed":"Mix","age":3,"gender":"male",
                "images":["a.jpg"],"status":"approved"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn create_request_rejects_owner_injection() {
        let res = serde_json::from_str::<CreateDogRequest>(
            r#"{"name":"Rex","breed":"Mix","age":3,"gender":"male",
                "images":["a.jpg"],"owner_id":"2f6c1cbe-7a71-4b55-b2e1-000000000000"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn status_filter_sentinel_and_exact_values() {
        assert_eq!(StatusFilter::All.as_status(), None);
        assert_eq!(
            StatusFilter::Pending.as_status(),
            Some(DogStatus::Pending)
        );
        assert_eq!(
            StatusFilter::Rejected.as_status(),
            Some(DogStatus::Rejected)
        );
    }

    #[test]
    fn status_filter_rejects_unknown_values() {
        assert!(serde_json::from_str::<StatusFilter>("\"all\"").is_ok());
        assert!(serde_json::from_str::<StatusFilter>("\"banana\"").is_err());
    }

    #[test]
    fn dangling_owner_degrades_to_unknown() {
        use time::OffsetDateTime;
        let row = DogWithOwnerRow {
            dog: Dog {
                id: Uuid::new_v4(),
                owner_id: Uuid::new_v4(),
                name: "Rex".into(),
                breed: "Mix".into(),
                age: 3,
                gender: "male".into(),
                images: vec!["a.jpg".into()],
                status: DogStatus::Pending,
                created_at: OffsetDateTime::now_utc(),
                updated_at: OffsetDateTime::now_utc(),
            },
            owner_name: None,
            owner_email: None,
            owner_avatar: None,
        };
        let enriched = DogWithOwner::from(row);
        assert_eq!(enriched.owner.name, "Unknown");
        assert!(enriched.owner.email.is_none());
    }
}
