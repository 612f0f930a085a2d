use std::future::Future;

/// Resolves when `signal` fires. If the signal handler could not be installed the
/// future never resolves, so the server keeps running instead of exiting at once.
pub async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for shutdown signal, graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}
