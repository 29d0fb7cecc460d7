//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::configure_routes;
use crate::api::middleware::RequestTrace;
use crate::api::services::AppStartTime;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Prepares server components (declaration, store, schema, routes)
/// 3. Configures and starts the HTTP server
/// 4. Listens for graceful shutdown signals
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config).map_err(|e| {
        tracing::error!("Server startup failed: {:#}", e);
        e
    })?;

    let store = startup.store.clone();
    let link_service = startup.link_service.clone();
    let schema = startup.schema.clone();
    let route = startup.route_config.clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    info!("Using {} worker(s) for the server", cpu_count);

    let server = HttpServer::new(move || {
        let route = route.clone();
        App::new()
            .wrap(RequestTrace)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(|cfg| configure_routes(cfg, &route))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .client_disconnect_timeout(std::time::Duration::from_millis(1000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    // Bind to Unix socket or TCP address
    #[cfg(unix)]
    let server = match config.server.unix_socket {
        Some(ref socket_path) => {
            warn!("Starting server on Unix socket: {}", socket_path);
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)
                    .with_context(|| format!("Failed to remove stale socket {}", socket_path))?;
            }
            server
                .bind_uds(socket_path)
                .with_context(|| format!("Failed to bind Unix socket {}", socket_path))?
        }
        None => {
            info!("Server is running on http://{}", bind_address);
            server
                .bind(bind_address.as_str())
                .with_context(|| format!("Failed to bind {}", bind_address))?
        }
    };

    #[cfg(not(unix))]
    let server = {
        info!("Server is running on http://{}", bind_address);
        server
            .bind(bind_address.as_str())
            .with_context(|| format!("Failed to bind {}", bind_address))?
    };

    let server = server.run();

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&store) => {
            info!("Graceful shutdown complete");
        }
    }

    Ok(())
}
