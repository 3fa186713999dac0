use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::{path::PathBuf, sync::Arc};

use http_rest_api::{
    app_state::AppState,
    get_postgres_pool,
    services::data_stores::{CookieSessionStore, PostgresUserStore},
    utils::{config::Config, constants::DEFAULT_CONFIG_PATH, tracing::init_tracing},
    Application,
};

#[derive(Parser)]
#[command(version, about = "User registration and session API server")]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config = Config::load(&args.config_path)?;
    init_tracing(&config.log_level)?;

    let pg_pool = get_postgres_pool(&config.database_url)
        .await
        .wrap_err("failed to connect to PostgreSQL")?;
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("failed to run database migrations")?;

    let app_state = AppState::new(
        Arc::new(PostgresUserStore::new(pg_pool)),
        Arc::new(CookieSessionStore::default()),
        config.session_key(),
    );

    tracing::info!("starting api server");
    let app =
        Application::build(app_state, &config.bind_addr, config.request_timeout)
            .await
            .map_err(|e| eyre!("failed to build app: {e}"))?;

    app.run().await.wrap_err("server error")
}
