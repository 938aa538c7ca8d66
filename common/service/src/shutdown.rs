use tokio::signal;

/// Resolves on the first SIGTERM or SIGINT. Unix only.
pub async fn graceful_shutdown() {
    let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("failed to register SIGTERM handler");

    let mut interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .expect("failed to register SIGINT handler");

    let received = tokio::select! {
        _ = term.recv() => "SIGTERM",
        _ = interrupt.recv() => "SIGINT",
    };

    tracing::info!(signal = received, "draining connections before exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn waits_for_a_signal() {
        let result = timeout(Duration::from_millis(100), graceful_shutdown()).await;
        assert!(result.is_err(), "shutdown resolved without a signal");
    }
}
