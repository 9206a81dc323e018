//! The connection resource: ownership and tuning of the one live socket.
//!
//! Exactly one `TcpStream` exists at a time and it is owned by the
//! processor's consumer task; this module only provides the open/write/
//! close primitives and the latency tuning applied at connect time. Retry
//! policy deliberately lives elsewhere (a fresh `Connect` command), never
//! here.
//!
//! Tuning applied on every successful connect:
//! - `TCP_NODELAY` on – one snapshot is one 32-byte write and must not sit
//!   in a coalescing buffer.
//! - An `IPTOS_LOWDELAY` traffic-class hint where the platform exposes one
//!   (Unix, via `socket2`). Best-effort: a refusal is logged, not fatal.

use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time;
use tracing::{debug, warn};

/// IP_TOS value requesting low-delay handling for outgoing packets.
#[cfg(unix)]
const IPTOS_LOWDELAY: u32 = 0x10;

/// Errors that can occur while opening the link socket.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The connect attempt did not complete within the configured timeout.
    #[error("connect to {host}:{port} timed out after {timeout_ms} ms")]
    Timeout {
        host: String,
        port: u16,
        timeout_ms: u64,
    },

    /// The peer actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    Refused { host: String, port: u16 },

    /// Any other connect-time I/O failure, including address resolution.
    #[error("failed to connect to {host}:{port}: {source}")]
    Io {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while writing a frame on the link socket.
#[derive(Debug, Error)]
pub enum WriteError {
    /// There is no live socket to write to.
    #[error("not connected")]
    NotConnected,

    /// An I/O error occurred on the established connection.
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Opens a TCP connection to `host:port` with a bounded timeout and applies
/// the low-latency socket tuning.
///
/// # Errors
///
/// Returns [`ConnectError::Timeout`] when `timeout` elapses first,
/// [`ConnectError::Refused`] when the peer rejects the connection, and
/// [`ConnectError::Io`] for resolution or other connect failures.
pub async fn open(host: &str, port: u16, timeout: Duration) -> Result<TcpStream, ConnectError> {
    let attempt = TcpStream::connect((host, port));
    let stream = match time::timeout(timeout, attempt).await {
        Err(_elapsed) => {
            return Err(ConnectError::Timeout {
                host: host.to_string(),
                port,
                timeout_ms: timeout.as_millis() as u64,
            })
        }
        Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => {
            return Err(ConnectError::Refused {
                host: host.to_string(),
                port,
            })
        }
        Ok(Err(e)) => {
            return Err(ConnectError::Io {
                host: host.to_string(),
                port,
                source: e,
            })
        }
        Ok(Ok(stream)) => stream,
    };

    tune(&stream);
    debug!("opened link socket to {host}:{port}");
    Ok(stream)
}

/// Writes one complete frame to the socket.
///
/// # Errors
///
/// Returns [`WriteError::Io`] when the underlying write fails (broken
/// pipe, reset, etc.). The caller decides whether that tears the link down.
pub async fn write_frame(stream: &mut TcpStream, bytes: &[u8]) -> Result<(), WriteError> {
    stream.write_all(bytes).await?;
    Ok(())
}

/// Closes the socket, flushing pending data where possible.
///
/// Shutdown errors are ignored: the peer may already be gone, and close
/// must stay idempotent from the processor's point of view.
pub async fn close(mut stream: TcpStream) {
    let _ = stream.shutdown().await;
    debug!("link socket closed");
}

/// Applies latency-oriented options to a freshly connected socket.
///
/// Both options are advisory. The send path works without them, just with
/// worse latency, so refusals downgrade to a warning instead of failing
/// the connect.
fn tune(stream: &TcpStream) {
    if let Err(e) = stream.set_nodelay(true) {
        warn!("could not enable TCP_NODELAY: {e}");
    }

    #[cfg(unix)]
    {
        let sock = socket2::SockRef::from(stream);
        if let Err(e) = sock.set_tos(IPTOS_LOWDELAY) {
            warn!("could not set low-delay traffic class: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
