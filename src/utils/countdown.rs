use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

/// Formats the time left until `target` as `{d}d {h}h {m}m {s}s`.
///
/// Once `now` reaches the target every component stays at zero.
pub fn format_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = (target - now).num_seconds().max(0);
    let days = remaining / 86_400;
    let hours = (remaining % 86_400) / 3_600;
    let minutes = (remaining % 3_600) / 60;
    let seconds = remaining % 60;
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}

/// Background task refreshing the countdown string once per second.
///
/// The task is aborted when the ticker is shut down or dropped.
pub struct CountdownTicker {
    target: DateTime<Utc>,
    receiver: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Must be called from inside a tokio runtime.
    pub fn spawn(target: DateTime<Utc>) -> Self {
        let (sender, receiver) = watch::channel(format_remaining(target, Utc::now()));
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            loop {
                interval.tick().await;
                let text = format_remaining(target, Utc::now());
                if sender.send(text).is_err() {
                    debug!("Countdown has no readers left, stopping");
                    break;
                }
            }
        });
        Self {
            target,
            receiver,
            task,
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn current(&self) -> String {
        self.receiver.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn subscribe(&self) -> watch::Receiver<String> {
        self.receiver.clone()
    }

    pub fn shutdown(&self) {
        if !self.task.is_finished() {
            self.task.abort();
            debug!("Countdown ticker stopped");
        }
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 17, 0, 0).unwrap()
    }

    #[test]
    fn test_format_breaks_down_components() {
        let now = target() - chrono::Duration::seconds(2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert_eq!(format_remaining(target(), now), "2d 3h 4m 5s");
    }

    #[test]
    fn test_format_clamps_to_zero() {
        assert_eq!(format_remaining(target(), target()), "0d 0h 0m 0s");
        let later = target() + chrono::Duration::days(30);
        assert_eq!(format_remaining(target(), later), "0d 0h 0m 0s");
    }

    #[test]
    fn test_sub_second_remainder_is_truncated() {
        let now = target() - chrono::Duration::milliseconds(999);
        assert_eq!(format_remaining(target(), now), "0d 0h 0m 0s");
    }

    #[tokio::test]
    async fn test_ticker_publishes_immediately() {
        let ticker = CountdownTicker::spawn(target());
        assert_eq!(ticker.current(), "0d 0h 0m 0s");
        assert_eq!(ticker.target(), target());
    }

    #[tokio::test]
    async fn test_ticker_republishes_every_second() {
        let ticker = CountdownTicker::spawn(Utc::now() + chrono::Duration::hours(1));
        let mut rx = ticker.subscribe();
        rx.borrow_and_update();
        for _ in 0..2 {
            let changed = tokio::time::timeout(Duration::from_secs(3), rx.changed()).await;
            assert!(matches!(changed, Ok(Ok(()))), "ticker should publish a fresh value");
            rx.borrow_and_update();
        }
        assert!(ticker.is_running());
    }

    #[tokio::test]
    async fn test_shutdown_stops_the_task() {
        let ticker = CountdownTicker::spawn(Utc::now() + chrono::Duration::hours(1));
        assert!(ticker.is_running());
        ticker.shutdown();
        let stopped = tokio::time::timeout(Duration::from_secs(5), async {
            while ticker.is_running() {
                tokio::task::yield_now().await;
            }
        })
        .await;
        assert!(stopped.is_ok());
    }

    #[tokio::test]
    async fn test_dropping_ticker_stops_the_task() {
        let ticker = CountdownTicker::spawn(Utc::now() + chrono::Duration::hours(1));
        let mut rx = ticker.subscribe();
        drop(ticker);
        let closed = tokio::time::timeout(Duration::from_secs(5), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(closed.is_ok(), "sender should be dropped once the task is aborted");
    }
}
