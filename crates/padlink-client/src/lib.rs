//! # padlink-client
//!
//! The connection and command-queue subsystem of padlink: everything
//! between "presentation code produced a snapshot" and "32 bytes left on
//! the TCP socket".
//!
//! # Architecture
//!
//! ```text
//! producers (UI / input threads)          single consumer task
//! ───────────────────────────────         ─────────────────────────────
//! PadLink::enqueue_connect  ──┐
//! PadLink::enqueue_state    ──┤  mpsc    ┌ dequeue one LinkCommand
//! PadLink::enqueue_raw      ──┼────────► ┤ execute against the socket
//! PadLink::enqueue_disconnect ┘          └ publish LinkStatus (watch)
//! ```
//!
//! Every network operation runs on the one consumer task, in strict FIFO
//! order, so the remote peer observes commands exactly as they were
//! enqueued and there is never more than one in-flight socket operation.
//! Producers never block and never see a socket error; failures surface
//! only as [`LinkStatus`] updates on the watch channel.

pub mod command;
pub mod config;
pub mod connection;
pub mod processor;
pub mod status;

pub use command::LinkCommand;
pub use config::{LinkConfig, ConfigError};
pub use connection::{ConnectError, WriteError};
pub use processor::PadLink;
pub use status::LinkStatus;
