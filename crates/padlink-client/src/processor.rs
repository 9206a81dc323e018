//! The command processor: a single-consumer queue serializing every
//! network operation against the one link socket.
//!
//! Any number of producer tasks/threads enqueue [`LinkCommand`]s through a
//! [`PadLink`] handle; exactly one consumer task dequeues and executes
//! them to completion, one at a time. That single decision buys all the
//! ordering guarantees the link needs:
//!
//! - side effects reach the peer in strict FIFO enqueue order,
//! - at most one socket operation is ever in flight,
//! - a `Disconnect` enqueued after N `SendState`s runs only after all N
//!   have been attempted.
//!
//! Failure handling is purely local: every socket error is caught here,
//! translated into a [`LinkStatus`] update, and never re-raised toward a
//! producer. A connect failure is not retried – retry is an explicit new
//! `Connect` from the caller.

use std::time::Duration;

use padlink_core::{encode_snapshot, PadSnapshot};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tracing::{info, trace, warn};

use crate::command::LinkCommand;
use crate::config::LinkConfig;
use crate::connection;
use crate::status::{self, LinkStatus};

/// Public handle to the link: the producer side of the command queue plus
/// the status observer.
///
/// Cloning is cheap; clones share the same queue and worker. Every
/// `enqueue_*` method is non-blocking and infallible from the caller's
/// perspective – once the worker has shut down, enqueued commands are
/// logged and dropped rather than surfaced as errors into input handling.
#[derive(Clone)]
pub struct PadLink {
    commands: mpsc::UnboundedSender<LinkCommand>,
    status_rx: watch::Receiver<LinkStatus>,
}

impl PadLink {
    /// Creates the processor pair: spawns the consumer task on the current
    /// Tokio runtime and returns the handle producers use.
    pub fn spawn(config: LinkConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = status::channel();
        let worker = Processor {
            socket: None,
            status: status_tx,
            connect_timeout: config.connect_timeout(),
        };
        tokio::spawn(worker.run(rx));
        Self {
            commands: tx,
            status_rx,
        }
    }

    /// Enqueues a connect (or reconnect) to `host:port`.
    pub fn enqueue_connect(&self, host: impl Into<String>, port: u16) {
        self.enqueue(LinkCommand::Connect {
            host: host.into(),
            port,
        });
    }

    /// Enqueues one snapshot for transmission. Safe to call at input-frame
    /// rate regardless of link state; frames sent while disconnected are
    /// dropped silently.
    pub fn enqueue_state(&self, snapshot: PadSnapshot) {
        self.enqueue(LinkCommand::SendState(snapshot));
    }

    /// Enqueues pre-encoded bytes (diagnostic path).
    pub fn enqueue_raw(&self, bytes: Vec<u8>) {
        self.enqueue(LinkCommand::SendRaw(bytes));
    }

    /// Enqueues a disconnect. Idempotent: disconnecting an already-closed
    /// link is a no-op.
    pub fn enqueue_disconnect(&self) {
        self.enqueue(LinkCommand::Disconnect);
    }

    /// Returns a fresh observer of the connection status. Receivers see
    /// the latest [`LinkStatus`] and never block the processor.
    pub fn observe_status(&self) -> watch::Receiver<LinkStatus> {
        self.status_rx.clone()
    }

    /// Returns the current status record.
    pub fn status(&self) -> LinkStatus {
        self.status_rx.borrow().clone()
    }

    fn enqueue(&self, cmd: LinkCommand) {
        if self.commands.send(cmd).is_err() {
            // Worker already gone (runtime shutting down); dropping the
            // command is the contract, raising is not.
            warn!("link worker is gone; dropping command");
        }
    }
}

/// The consumer-side state: the one live socket and the status publisher.
struct Processor {
    socket: Option<TcpStream>,
    status: watch::Sender<LinkStatus>,
    connect_timeout: Duration,
}

impl Processor {
    /// Drains the queue until every [`PadLink`] handle is dropped, then
    /// closes whatever socket is still open.
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<LinkCommand>) {
        while let Some(cmd) = commands.recv().await {
            self.execute(cmd).await;
        }
        if let Some(stream) = self.socket.take() {
            connection::close(stream).await;
        }
        trace!("link worker stopped");
    }

    async fn execute(&mut self, cmd: LinkCommand) {
        match cmd {
            LinkCommand::Connect { host, port } => self.connect(&host, port).await,
            LinkCommand::SendState(snapshot) => {
                self.send_bytes(&encode_snapshot(&snapshot)).await
            }
            LinkCommand::SendRaw(bytes) => self.send_bytes(&bytes).await,
            LinkCommand::Disconnect => self.disconnect().await,
        }
    }

    async fn connect(&mut self, host: &str, port: u16) {
        // Reconnect semantics: an existing socket is closed first, so a
        // second Connect while connected behaves like disconnect+connect.
        if let Some(old) = self.socket.take() {
            connection::close(old).await;
        }

        self.status.send_replace(LinkStatus::connecting(host, port));
        match connection::open(host, port, self.connect_timeout).await {
            Ok(stream) => {
                info!("link up: {host}:{port}");
                self.socket = Some(stream);
                self.status.send_replace(LinkStatus::connected(host, port));
            }
            Err(e) => {
                warn!("connect to {host}:{port} failed: {e}");
                self.status
                    .send_replace(LinkStatus::failed(host, port, e.to_string()));
            }
        }
    }

    async fn send_bytes(&mut self, bytes: &[u8]) {
        // Not connected: defined as a silent no-op. Presentation code
        // streams state continuously without tracking link status.
        let Some(stream) = self.socket.as_mut() else {
            trace!("link down; dropping {} byte frame", bytes.len());
            return;
        };

        if let Err(e) = connection::write_frame(stream, bytes).await {
            warn!("write failed, taking link down: {e}");
            let current = self.status.borrow().clone();
            if let Some(broken) = self.socket.take() {
                connection::close(broken).await;
            }
            self.status.send_replace(LinkStatus::failed(
                &current.host,
                current.port,
                e.to_string(),
            ));
        }
    }

    async fn disconnect(&mut self) {
        if let Some(stream) = self.socket.take() {
            info!("link closed by request");
            connection::close(stream).await;
        }
        self.status.send_replace(LinkStatus::default());
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use padlink_core::buttons;

    fn test_config() -> LinkConfig {
        LinkConfig {
            connect_timeout_ms: 300,
            ..LinkConfig::default()
        }
    }

    #[tokio::test]
    async fn test_enqueue_state_without_connect_leaves_status_untouched() {
        // Arrange
        let link = PadLink::spawn(test_config());

        // Act – stream frames with no link up.
        for _ in 0..10 {
            link.enqueue_state(PadSnapshot::neutral().with_pressed(buttons::FACE_A));
        }
        link.enqueue_raw(vec![0u8; 4]);
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Assert – still the pristine default record.
        assert_eq!(link.status(), LinkStatus::default());
    }

    #[tokio::test]
    async fn test_disconnect_without_connection_is_a_no_op() {
        let link = PadLink::spawn(test_config());

        link.enqueue_disconnect();
        link.enqueue_disconnect();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let status = link.status();
        assert!(!status.connected);
        assert!(status.last_error.is_none());
    }

    #[tokio::test]
    async fn test_failed_connect_publishes_error_and_stays_disconnected() {
        // Arrange – known-free local port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let link = PadLink::spawn(test_config());
        let mut rx = link.observe_status();

        // Act
        link.enqueue_connect("127.0.0.1", port);

        // Assert – walk the status transitions until the failure lands.
        let status = loop {
            rx.changed().await.unwrap();
            let s = rx.borrow().clone();
            if !s.connecting {
                break s;
            }
        };
        assert!(!status.connected);
        assert!(status.last_error.is_some(), "failure must carry a message");
        assert_eq!(status.port, port);
    }

    #[tokio::test]
    async fn test_clone_shares_the_same_queue_and_status() {
        let link = PadLink::spawn(test_config());
        let clone = link.clone();

        clone.enqueue_disconnect();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(link.status(), clone.status());
    }
}
