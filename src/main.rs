use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    bootstrap::{BootstrapEvent, init_db, on_after_bootstrap},
    config::{AppConfig, dotenv_warning},
};

mod auth;
mod bootstrap;
mod config;
mod errors;
mod models;
mod repositories;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_bootstrap=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    // the process environment still applies when .env can't be used
    if let Some(warning) = dotenv_warning(&dotenv) {
        tracing::warn!("{}", warning);
    }

    let config = AppConfig::from_env();
    let pool = match init_db(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(code = %e.code(), "failed to open database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let event = BootstrapEvent::now();
    let result = on_after_bootstrap(&event, &pool, &config.admin).await;
    pool.close().await;
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = %e.code(), "after bootstrap hook failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
