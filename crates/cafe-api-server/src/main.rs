use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use cafe_api_server::config::Settings;
use cafe_api_server::{build_router, security::AccessPolicy};
use cafe_core::services::{ContactService, MenuService};
use cafe_infrastructure::{create_pool, PgContactStore, PgKvStore, MIGRATOR};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,cafe_api_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting café API server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("Configuration loaded");

    // Database pool + migrations
    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    MIGRATOR.run(&pool).await?;
    info!("Database ready");

    // Services
    let menu_service = Arc::new(MenuService::new(Arc::new(PgKvStore::new(pool.clone()))));
    let contact_service = Arc::new(ContactService::new(Arc::new(PgContactStore::new(pool))));
    let access_policy = Arc::new(AccessPolicy::new(settings.security.admin_token.clone()));

    let app = build_router(menu_service, contact_service, access_policy);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
