//! Seeds the two demo accounts, deleting any previous copies first. Only the
//! demo emails are touched; real accounts are never hard-deleted.

use sqlx::postgres::PgPoolOptions;

use pawmate::auth::password::hash_password;
use pawmate::config::AppConfig;
use pawmate::users::{Role, User};

const DEMO_ADMIN_EMAIL: &str = "admin@pawmate.com";
const DEMO_USER_EMAIL: &str = "user@pawmate.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pawmate=info,seed=info".to_string()),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(uri = %config.redacted_database_url(), "connecting for seeding");

    let db = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&db).await?;

    sqlx::query("DELETE FROM users WHERE email = ANY($1)")
        .bind(vec![DEMO_ADMIN_EMAIL, DEMO_USER_EMAIL])
        .execute(&db)
        .await?;

    let admin_hash = hash_password("admin123")?;
    let user_hash = hash_password("user123")?;

    let admin = User::create(
        &db,
        "Demo Admin",
        DEMO_ADMIN_EMAIL,
        &admin_hash,
        Some("0712345678"),
        Role::Admin,
    )
    .await?;
    let user = User::create(
        &db,
        "Demo User",
        DEMO_USER_EMAIL,
        &user_hash,
        Some("0712345679"),
        Role::User,
    )
    .await?;

    tracing::info!(admin_id = %admin.id, user_id = %user.id, "seeding successful");
    tracing::info!("Admin: {} / admin123", DEMO_ADMIN_EMAIL);
    tracing::info!("User: {} / user123", DEMO_USER_EMAIL);
    Ok(())
}
