//! Clock ticker driving the "last updated" display

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat, Utc};
use device_model::advance;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Periodically re-samples the wall clock and publishes it.
///
/// The published value never decreases. The background task ends when
/// [`ClockTicker::stop`] is called, when the ticker is dropped, or when the
/// parent cancellation token fires.
#[derive(Debug)]
pub struct ClockTicker {
    receiver: watch::Receiver<u64>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    pub fn spawn(interval: Duration, parent: &CancellationToken) -> Self {
        Self::spawn_with(interval, parent, current_epoch_ms)
    }

    /// Spawn with a custom time source
    pub fn spawn_with<F>(interval: Duration, parent: &CancellationToken, now: F) -> Self
    where
        F: Fn() -> u64 + Send + 'static,
    {
        let cancel = parent.child_token();
        let (sender, receiver) = watch::channel(now());
        let task_cancel = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick resolves immediately
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => {
                        tracing::debug!("Clock ticker stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let sampled = now();
                        sender.send_modify(|current| *current = advance(*current, sampled));
                    }
                }
            }
        });

        tracing::debug!("Clock ticker started with {:?} interval", interval);

        Self {
            receiver,
            cancel,
            handle: Some(handle),
        }
    }

    /// Latest published timestamp in epoch milliseconds
    pub fn now_ms(&self) -> u64 {
        *self.receiver.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }

    /// Cancel the ticker and wait for its task to finish
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Clock ticker task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

pub fn current_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// RFC 3339 UTC timestamp with second precision, e.g. `2023-10-01T12:00:00Z`
pub fn format_rfc3339(epoch_ms: u64) -> String {
    to_datetime(epoch_ms).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Human-readable timestamp for the dashboard pages
pub fn format_display(epoch_ms: u64) -> String {
    to_datetime(epoch_ms)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn to_datetime(epoch_ms: u64) -> DateTime<Utc> {
    i64::try_from(epoch_ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or_default()
}
