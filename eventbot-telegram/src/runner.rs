//! Polling loop: fetch a batch of updates after the last-seen id, pass each to the HandlerChain in
//! arrival order, sleep, repeat. The loop owns the offset exclusively; it lives only in memory.

use eventbot_core::UpdateSource;
use handler_chain::HandlerChain;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

/// Attempts per update before it is skipped.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Loop tuning.
#[derive(Debug, Clone)]
pub struct PollingOptions {
    /// Delay after each batch, including empty ones.
    pub interval: Duration,
    /// How many times one update is handled before the loop gives up on it and moves past it.
    pub max_attempts: u32,
}

impl Default for PollingOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Loop progress: the next offset to request plus the failure count of the update at that offset.
#[derive(Debug, Clone)]
pub struct PollCursor {
    offset: i64,
    max_attempts: u32,
    /// `(update_id, failed attempts)` of the update currently being retried.
    failing: Option<(i64, u32)>,
}

impl PollCursor {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            offset: 0,
            max_attempts: max_attempts.max(1),
            failing: None,
        }
    }

    /// Starts from a known offset.
    pub fn at(offset: i64, max_attempts: u32) -> Self {
        Self {
            offset,
            ..Self::new(max_attempts)
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    fn handled(&mut self, update_id: i64) {
        self.offset = update_id + 1;
        self.failing = None;
    }

    /// Records a failure; returns true when the update has used up its attempts.
    fn failed(&mut self, update_id: i64) -> bool {
        let attempts = match self.failing {
            Some((id, n)) if id == update_id => n + 1,
            _ => 1,
        };
        if attempts >= self.max_attempts {
            self.handled(update_id);
            true
        } else {
            self.failing = Some((update_id, attempts));
            false
        }
    }
}

/// Runs one cycle, advancing `cursor`.
///
/// The offset advances to `update.id + 1` after each update that was handled. When handling fails
/// the error is logged and the rest of the batch is left for the next cycle, which re-fetches the
/// failed update. After `max_attempts` failures of the same update it is skipped and the batch
/// continues. A failed fetch leaves the offset unchanged.
pub async fn poll_once(source: &dyn UpdateSource, chain: &HandlerChain, cursor: &mut PollCursor) {
    let updates = match source.get_updates(cursor.offset).await {
        Ok(updates) => updates,
        Err(e) => {
            warn!(error = %e, offset = cursor.offset, "Failed to fetch updates");
            return;
        }
    };

    for update in updates {
        info!(
            update_id = update.id,
            kind = update.kind_name(),
            user_id = ?update.user_id(),
            "Received update"
        );

        match chain.handle(&update).await {
            Ok(_) => cursor.handled(update.id),
            Err(e) => {
                if cursor.failed(update.id) {
                    error!(
                        error = %e,
                        update_id = update.id,
                        user_id = ?update.user_id(),
                        attempts = cursor.max_attempts,
                        "Update failed repeatedly, skipping it"
                    );
                } else {
                    warn!(error = %e, update_id = update.id, user_id = ?update.user_id(), "Update processing failed, will retry");
                    break;
                }
            }
        }
    }
}

/// Polls until `shutdown` turns true (or its sender is dropped). Shutdown is observed between
/// cycles; an update that is being handled is always finished first.
#[instrument(skip_all, fields(interval_ms = options.interval.as_millis() as u64))]
pub async fn run_polling(
    source: Arc<dyn UpdateSource>,
    chain: HandlerChain,
    options: PollingOptions,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut cursor = PollCursor::new(options.max_attempts);
    info!("Polling started");

    loop {
        if *shutdown.borrow() {
            break;
        }

        poll_once(source.as_ref(), &chain, &mut cursor).await;

        tokio::select! {
            _ = tokio::time::sleep(options.interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    info!(offset = cursor.offset, "Polling stopped");
}
