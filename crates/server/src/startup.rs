use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::ensure_parent_dir;
use configs::{AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::report::{ReportService, SeaOrmReportRepository};

/// Connect storage, create the table if missing, and wire the report service.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<ServerState> {
    if let Some(path) = cfg.file_path() {
        ensure_parent_dir(&path).await?;
    }
    let db = models::db::connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;
    models::db::init_schema(&db)
        .await
        .map_err(|e| StartupError::Storage(e.to_string()))?;

    let repo = Arc::new(SeaOrmReportRepository::new(db));
    Ok(ServerState::new(ReportService::new(repo)))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app from `cfg` and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.database).await?;
    let app = routes::build_router(state, routes::build_cors());

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "report store listening");
    serve(listener, app, ctrl_c()).await
}
