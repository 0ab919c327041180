//! Server lifecycle
//!
//! Runs the router until a shutdown signal arrives, then gives in-flight
//! requests a bounded time to finish.

use std::{future::Future, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` until `signal` completes, then drain for at most `drain_timeout`
///
/// Connections still open when the timeout elapses are dropped.
pub async fn serve_with_graceful_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let shutdown = Arc::new(Notify::new());

    let mut server = tokio::spawn({
        let shutdown = Arc::clone(&shutdown);
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.notified().await })
                .await
        }
    });

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        () = signal => {}
    }

    // notify_one keeps a permit if the server has not started waiting yet
    shutdown.notify_one();
    info!("⏳ Waiting up to {:?} for connections to close...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, &mut server).await {
        result??;
    } else {
        warn!(
            timeout = ?drain_timeout,
            "Shutdown timeout elapsed, dropping remaining connections"
        );
        server.abort();
    }

    Ok(())
}
