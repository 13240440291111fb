//! cinerelay gateway
//!
//! - Relay: `/?path=/movie/550` -> `GET {upstream.base_url}/movie/550`
//! - Credential read once from the environment, held server-side
//! - Ops: /healthz, /readyz, /metrics
//! - Graceful shutdown (readiness flips to draining first)

use tracing_subscriber::{fmt, EnvFilter};

use cinerelay_core::error::{RelayError, Result};
use cinerelay_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = config::load_for_process()?;
    let listen = cfg.gateway.listen_addr()?;
    let credential = config::credential_from_env(&cfg.upstream);

    let state = AppState::new(cfg, credential)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, upstream = %state.cfg().upstream.base_url, "cinerelay starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RelayError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| RelayError::Internal(format!("server failed: {e}")))?;

    tracing::info!("cinerelay stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
