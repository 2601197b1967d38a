//! Cache Cleanup Task
//!
//! Background task that periodically drops expired cached outcomes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::checker::Checker;

/// Spawns a background task that periodically removes expired cache entries.
///
/// Reads never return stale outcomes anyway; this only bounds memory held by
/// entries nobody asks for again. The lock is taken once per run.
///
/// Abort the returned handle during shutdown.
pub fn spawn_cleanup_task(
    checker: Arc<Mutex<Checker>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = checker.lock().await.clear_expired_cache();

            if removed > 0 {
                info!("Cache cleanup: removed {} expired outcomes", removed);
            } else {
                debug!("Cache cleanup: no expired outcomes found");
            }
        }
    })
}
