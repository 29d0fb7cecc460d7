use tokio::signal;
use tracing::{info, warn};

use crate::storage::LinkStore;

/// Resolve once Ctrl+C is received
///
/// Nothing is persisted, so shutdown only reports what is being dropped.
pub async fn listen_for_shutdown(store: &LinkStore) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    info!(
        "Discarding {} in-memory link(s), shutting down...",
        store.len()
    );
}
