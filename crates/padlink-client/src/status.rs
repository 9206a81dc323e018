//! The observable connection status record and its publisher.
//!
//! Status is written only by the processor's consumer task and observed by
//! any number of `watch` receivers. A `watch` channel keeps exactly the
//! latest value, so a slow observer can never apply backpressure to the
//! consumer – it just sees the newest snapshot of the record when it next
//! looks.

use tokio::sync::watch;

/// Current state of the link as observed by presentation code.
///
/// In steady state exactly one of `connected`, `connecting`, or
/// `last_error.is_some()` holds; brief overlaps during transitions are
/// tolerated by observers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkStatus {
    pub connected: bool,
    pub connecting: bool,
    /// Peer host of the current or most recent connection attempt.
    pub host: String,
    /// Peer port of the current or most recent connection attempt.
    pub port: u16,
    /// Human-readable description of the most recent failure, cleared on
    /// the next connect attempt and on disconnect.
    pub last_error: Option<String>,
}

impl LinkStatus {
    /// Status while a connect attempt to `host:port` is in flight.
    pub(crate) fn connecting(host: &str, port: u16) -> Self {
        Self {
            connecting: true,
            host: host.to_string(),
            port,
            ..Self::default()
        }
    }

    /// Status after a successful connect to `host:port`.
    pub(crate) fn connected(host: &str, port: u16) -> Self {
        Self {
            connected: true,
            host: host.to_string(),
            port,
            ..Self::default()
        }
    }

    /// Status after a failed connect or a broken link.
    pub(crate) fn failed(host: &str, port: u16, error: String) -> Self {
        Self {
            host: host.to_string(),
            port,
            last_error: Some(error),
            ..Self::default()
        }
    }
}

/// Creates the status channel seeded with the default (disconnected) record.
pub(crate) fn channel() -> (watch::Sender<LinkStatus>, watch::Receiver<LinkStatus>) {
    watch::channel(LinkStatus::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_disconnected_with_no_error() {
        let s = LinkStatus::default();
        assert!(!s.connected);
        assert!(!s.connecting);
        assert!(s.last_error.is_none());
        assert!(s.host.is_empty());
        assert_eq!(s.port, 0);
    }

    #[test]
    fn test_connecting_status_clears_prior_error() {
        let s = LinkStatus::connecting("10.0.0.5", 7777);
        assert!(s.connecting);
        assert!(!s.connected);
        assert_eq!(s.host, "10.0.0.5");
        assert_eq!(s.port, 7777);
        assert!(s.last_error.is_none());
    }

    #[test]
    fn test_failed_status_carries_message_and_is_disconnected() {
        let s = LinkStatus::failed("10.0.0.5", 7777, "connection refused".to_string());
        assert!(!s.connected);
        assert!(!s.connecting);
        assert_eq!(s.last_error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_watch_receiver_sees_latest_value_only() {
        // Arrange
        let (tx, mut rx) = channel();

        // Act – two rapid updates; the observer only ever sees the latest.
        tx.send(LinkStatus::connecting("h", 1)).unwrap();
        tx.send(LinkStatus::connected("h", 1)).unwrap();
        rx.changed().await.unwrap();

        // Assert
        assert!(rx.borrow().connected);
    }
}
