// Signal handling module
//
// Supported signals:
// - SIGTERM: graceful shutdown
// - SIGINT:  graceful shutdown (Ctrl+C)
//
// There is no reload or restart signal: configuration is fixed for the
// process lifetime.

use crate::logger;

/// Wait until a shutdown signal arrives.
///
/// Resolving this future means the accept loop should stop and the
/// process exit with code 0.
#[cfg(unix)]
pub async fn wait_for_shutdown() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => logger::log_shutdown("SIGTERM"),
        _ = sigint.recv() => logger::log_shutdown("SIGINT"),
    }
    Ok(())
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn wait_for_shutdown() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    logger::log_shutdown("Ctrl+C");
    Ok(())
}
