//! Web server using Axum.

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::ServerSettings;
use crate::core::{MemoryRepository, QueueRepository};
use crate::error::Result;

use super::router::{create_app_router, AppState};

/// Bind the configured address and serve a fresh in-memory repository until
/// Ctrl-C or SIGTERM.
pub async fn run_server(settings: &ServerSettings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    let repo: Arc<dyn QueueRepository> = Arc::new(MemoryRepository::new());
    let shutdown = CancellationToken::new();

    let signal = shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        tracing::info!("Shutdown requested, releasing waiting requests");
        signal.cancel();
    });

    serve(listener, repo, shutdown).await
}

/// Serve `repo` on an already bound listener until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    repo: Arc<dyn QueueRepository>,
    shutdown: CancellationToken,
) -> Result<()> {
    let app = create_app_router(AppState::new(repo, shutdown.clone()));

    tracing::info!("Starting queue server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Queue server stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
