use pawmate::{app, config::AppConfig, state::AppState};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "pawmate=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    tracing::info!(port = config.port, "server startup");
    tracing::info!(uri = %config.redacted_database_url(), "connecting to database");
    if config.database_url_defaulted {
        tracing::warn!(
            "DATABASE_URL not set, using the localhost default; \
             check the environment if this is a deployed instance"
        );
    }

    // A store that cannot be reached at startup is fatal: the error
    // propagates out of main and the process exits with code 1.
    let state = AppState::init(config).await?;
    tracing::info!("connected to database");

    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let config = state.config.clone();
    let app = app::build_app(state);
    app::serve(app, &config).await
}
