//! HTTP server for SymptomBuddy
//!
//! axum router over an immutable [`AppState`].

mod error;
pub mod routes;
pub mod state;

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

pub use routes::router;
pub use state::AppState;

/// Serve until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, ready = state.is_ready(), "Listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Serve until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    serve_with_shutdown(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    })
    .await
}
