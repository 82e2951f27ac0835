//! Server mode
//!
//! Prepares the shared state, then runs the HTTP server until it stops or a
//! shutdown signal arrives.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, PAYLOAD_LIMIT, configure};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// 工作线程上限
const MAX_WORKERS: usize = 32;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: Arc<StaticConfig>) -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let startup = lifetime::startup::prepare_server_startup(config.clone()).map_err(|e| {
        tracing::error!("Server startup failed: {}", e);
        e
    })?;
    let state = web::Data::new(startup.state);

    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    info!("Using {} worker(s) for the server", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware) // 最外层，记录请求延迟
            .wrap(RequestIdMiddleware) // 为每个请求生成 request_id
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
                    .add(("Cache-Control", "no-cache")),
            )
            .app_data(state.clone())
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
            .configure(configure)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    warn!("Starting server at http://{}", bind_address);

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(config.site.environment) => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
