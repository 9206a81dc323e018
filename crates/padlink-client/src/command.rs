//! The closed set of operations the link processor can execute.
//!
//! A command owns its payload outright: [`PadSnapshot`] is a `Copy` value
//! and `SendRaw` takes an owned `Vec<u8>`, so nothing reachable from a
//! queued command aliases presentation-side state. This is the property
//! that lets the UI keep mutating its working snapshot every input frame
//! while earlier frames sit in the queue untouched.
//!
//! Constructing a command never performs I/O; execution happens only on
//! the processor's consumer task.

use padlink_core::PadSnapshot;

/// One queued unit of network work.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkCommand {
    /// Open (or replace) the connection to `host:port`.
    Connect { host: String, port: u16 },
    /// Encode and send one snapshot record. Silently dropped when the
    /// link is down.
    SendState(PadSnapshot),
    /// Send pre-encoded bytes as-is. Diagnostic/testing path; silently
    /// dropped when the link is down.
    SendRaw(Vec<u8>),
    /// Close the socket if open and reset status to defaults. Idempotent.
    Disconnect,
}
