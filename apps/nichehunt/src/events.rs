//! Store change logging.

use app_store::StoreEvent;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

/// Logs store events until the store is dropped, returning how many were seen.
///
/// A lagging receiver skips the overwritten events and keeps going.
pub async fn log_store_events(mut events: broadcast::Receiver<StoreEvent>) -> usize {
    let mut seen = 0;
    loop {
        match events.recv().await {
            Ok(event) => {
                seen += 1;
                info!(event = ?event, "Store changed");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Store event logger lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
    seen
}
