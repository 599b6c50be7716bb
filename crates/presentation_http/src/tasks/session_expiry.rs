//! Idle session expiry task
//!
//! Periodically tears down page sessions that have not been used for the
//! configured idle period, e.g. tabs that closed without deleting their session.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::state::SessionRegistry;

/// Spawn a background task that expires idle sessions every `interval`
///
/// Returns a `JoinHandle` that can be used to abort the task when shutting down.
pub fn spawn_session_expiry_task(
    sessions: Arc<SessionRegistry>,
    max_idle: Duration,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        max_idle_secs = max_idle.as_secs(),
        interval_secs = interval.as_secs(),
        "Starting session expiry task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't run immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let expired = sessions.expire_idle(max_idle);
            if expired > 0 {
                info!(expired_count = expired, remaining = sessions.len(), "Expired idle sessions");
            } else {
                debug!(remaining = sessions.len(), "No idle sessions to expire");
            }
        }
    })
}
