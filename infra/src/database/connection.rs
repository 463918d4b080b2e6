//! Database connection pool management

use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    MySqlPool,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

use taskhub_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Shared MySQL pool backing the user and session repositories
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Opens the pool and verifies one connection can be established
    ///
    /// # Arguments
    /// * `config` - Database configuration settings
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "Connecting to credential store"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to open credential store pool");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trips `SELECT 1`
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Credential store health check failed");
                InfrastructureError::Database(e)
            })?;

        Ok(value == 1)
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        info!("Closing credential store pool");
        self.pool.close().await;
    }
}
