use sqlx::PgPool;
use uuid::Uuid;

use crate::users::repo_types::{Role, User, UserStatus};

const USER_COLUMNS: &str = "id, name, email, password_hash, phone, avatar, role, status, \
     notify_email, notify_push, plan, plan_expires_at, created_at, updated_at";

/// Partial update over the self-editable profile fields. `None` leaves the
/// stored value untouched; the password arrives already hashed.
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
}

impl User {
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        phone: Option<&str>,
        role: Role,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, email, password_hash, phone, role) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(phone)
        .bind(role)
        .fetch_one(db)
        .await
    }

    /// Field-patch update: absent fields keep their stored values.
    /// Returns `None` when the id no longer resolves.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        patch: &ProfilePatch,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                password_hash = COALESCE($5, password_hash), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.phone.as_deref())
        .bind(patch.password_hash.as_deref())
        .fetch_optional(db)
        .await
    }

    pub async fn list(
        db: &PgPool,
        role: Option<Role>,
        status: Option<UserStatus>,
    ) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE ($1::user_role IS NULL OR role = $1) \
               AND ($2::user_status IS NULL OR status = $2) \
             ORDER BY created_at DESC"
        ))
        .bind(role)
        .bind(status)
        .fetch_all(db)
        .await
    }

    /// Ids of the dogs owned by this user, newest first.
    pub async fn dog_ids(db: &PgPool, id: Uuid) -> sqlx::Result<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM dogs WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(id)
        .fetch_all(db)
        .await
    }
}
