//! Server mode
//!
//! Loads the persisted table, builds the shared state and starts the HTTP
//! server with CORS and the request-rate quota wired upstream of all
//! routes.

use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::AppConfig;
use crate::registry::UrlRegistry;
use crate::runtime::sweeper;
use crate::services::qr::QrEncoder;
use crate::services::{AppState, HealthService, RedirectService, ShortenService, StatsService};
use crate::storage::JsonStore;

/// Register the public surface.
///
/// The tail route must stay last: everything that is not the JSON API is
/// treated as a short id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/shorten",
        web::post().to(ShortenService::handle_shorten),
    )
    .route(
        "/api/stats/{short_id}",
        web::get().to(StatsService::handle_stats),
    )
    .route("/api/health", web::get().to(HealthService::health_check))
    .route(
        "/{path:.*}",
        web::get().to(RedirectService::handle_redirect),
    )
    .route(
        "/{path:.*}",
        web::head().to(RedirectService::handle_redirect),
    );
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: AppConfig) -> Result<()> {
    // 启动时一次性加载整张表；损坏的文件在这里直接让进程退出
    let store = JsonStore::new(&config.storage.data_file);
    let loaded = store
        .load()
        .context("Failed to initialize persistence store")?;

    let mut registry = UrlRegistry::new(config.server.public_base_url.clone(), QrEncoder::new());
    registry.restore(loaded);

    let state = web::Data::new(AppState {
        registry: RwLock::new(registry),
        store,
        default_url: config.server.default_url.clone(),
    });

    sweeper::spawn_sweeper(
        state.clone(),
        Duration::from_secs(config.storage.sweep_interval_secs),
    );

    // 请求配额：令牌桶按秒补充，键为对端 IP
    let governor_config = GovernorConfigBuilder::default()
        .seconds_per_request(config.server.rate_limit_replenish_secs)
        .burst_size(config.server.rate_limit_burst)
        .finish()
        .context("Invalid rate limit config")?;

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);
    info!(
        "Short links served under {}",
        config.server.public_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_config))
            .wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header())
            .wrap(Compress::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(64 * 1024))
            .configure(configure_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    Ok(())
}
