use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::config::Config;
use crate::profiles::{InMemoryProfileStore, PgProfileStore, ProfileStore};

/// Picks the profile store: PostgreSQL when `DATABASE_URL` is set, otherwise an
/// in-memory store that forgets everything on restart.
pub async fn create_store(config: &Config) -> Result<Arc<dyn ProfileStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set; profiles are kept in memory only");
        return Ok(Arc::new(InMemoryProfileStore::new()));
    };

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!("PostgreSQL connection pool established");

    let store = PgProfileStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("failed to prepare user_profiles table")?;
    Ok(Arc::new(store))
}
