use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use taskhub_api::app::create_app;
use taskhub_api::routes::auth::AppState;
use taskhub_api::telemetry::init_tracing;
use taskhub_core::services::{
    AuthService, AuthServiceConfig, SessionService, TokenService, TokenServiceConfig,
};
use taskhub_infra::cache::{RedisClient, RedisRevocationStore};
use taskhub_infra::database::{DatabasePool, MySqlSessionRepository, MySqlUserRepository};
use taskhub_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // per-environment file first, then the plain .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting TaskHub auth service");
    if config.is_insecure() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }
    let token_config =
        TokenServiceConfig::try_from(&config.auth).context("Invalid token configuration")?;

    let db_pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    let redis_client = RedisClient::new(config.cache.clone())
        .await
        .context("Failed to connect to Redis")?;

    db_pool
        .health_check()
        .await
        .context("Credential store health check failed")?;
    redis_client
        .health_check()
        .await
        .context("Revocation store health check failed")?;

    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.get_pool().clone()));
    let session_repository = MySqlSessionRepository::new(db_pool.get_pool().clone());
    let revocation_store = RedisRevocationStore::new(redis_client);

    let token_service = Arc::new(TokenService::new(revocation_store, token_config));
    let session_service = Arc::new(SessionService::new(session_repository, token_service.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_service,
        token_service,
        AuthServiceConfig::from(&config.auth),
    ));

    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.run().await?;

    db_pool.close().await;
    info!("Server stopped");
    Ok(())
}
