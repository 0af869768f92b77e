use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    auth::admin::{Provisioned, create_administrator},
    config::AdminCredentials,
    errors::AppError,
    repositories::admin_repo::AdminStore,
};

/// Raised once the startup sequence has a ready store.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapEvent {
    pub completed_at: DateTime<Utc>,
}

impl BootstrapEvent {
    pub fn now() -> Self {
        Self {
            completed_at: Utc::now(),
        }
    }
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(pool)
}

/// Runs the after-bootstrap steps. Called exactly once per process by `main`.
pub async fn on_after_bootstrap<S: AdminStore>(
    event: &BootstrapEvent,
    store: &S,
    credentials: &AdminCredentials,
) -> Result<Provisioned, AppError> {
    tracing::debug!("after bootstrap hook, bootstrap completed at {}", event.completed_at);
    create_administrator(store, credentials).await
}
