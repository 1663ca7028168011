use std::future::Future;

use tokio::net::TcpListener;

use crate::app::router::create_router;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DiagramError, Result};

/// 依設定綁定位址並啟動服務，收到 Ctrl-C / SIGTERM 時結束
pub async fn serve<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve_with_shutdown(listener, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}", local_addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| DiagramError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("❌ Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("❌ Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("🛑 Shutdown signal received");
}
