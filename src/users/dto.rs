use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo_types::{Plan, Role, User, UserStatus};

#[derive(Debug, Serialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
}

#[derive(Debug, Serialize)]
pub struct Subscription {
    pub plan: Plan,
    pub expires_at: Option<OffsetDateTime>,
}

/// Full profile projection returned to the account owner. The digest never
/// appears here; owned dogs are attached by reference.
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub dogs: Vec<Uuid>,
    pub notification_preferences: NotificationPreferences,
    pub subscription: Subscription,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl UserView {
    pub fn from_user(user: User, dogs: Vec<Uuid>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            avatar: user.avatar,
            role: user.role,
            status: user.status,
            dogs,
            notification_preferences: NotificationPreferences {
                email: user.notify_email,
                push: user.notify_push,
            },
            subscription: Subscription {
                plan: user.plan,
                expires_at: user.plan_expires_at,
            },
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Row projection for the admin list/search view.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub plan: Plan,
    pub created_at: OffsetDateTime,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone: u.phone,
            avatar: u.avatar,
            role: u.role,
            status: u.status,
            plan: u.plan,
            created_at: u.created_at,
        }
    }
}

/// Partial self-update. Unknown fields are rejected at the boundary rather
/// than silently dropped.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_accepts_a_subset_of_fields() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"password":"newpw12"}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert!(req.phone.is_none());
        assert_eq!(req.password.as_deref(), Some("newpw12"));
    }

    #[test]
    fn update_request_rejects_unknown_fields() {
        let res = serde_json::from_str::<UpdateProfileRequest>(
            r#"{"name":"x","role":"admin"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn user_view_never_contains_a_digest() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Demo".into(),
            email: "demo@pawmate.com".into(),
            password_hash: "$argon2id$secret".into(),
            phone: Some("0712345678".into()),
            avatar: None,
            role: Role::Admin,
            status: UserStatus::Active,
            notify_email: true,
            notify_push: false,
            plan: Plan::Premium,
            plan_expires_at: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let view = UserView::from_user(user, vec![]);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "admin");
        assert_eq!(json["notification_preferences"]["push"], false);
        assert_eq!(json["subscription"]["plan"], "premium");
    }
}
