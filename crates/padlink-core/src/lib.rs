//! # padlink-core
//!
//! Shared library for padlink containing the binary wire codec and the
//! snapshot data model for one reading of a gamepad-style input device.
//!
//! This crate is used by both the sending client and any receiving peer.
//! It has zero dependencies on sockets, OS APIs, or UI frameworks: every
//! function in here is pure and deterministic, which is what makes the
//! wire format testable down to the byte.
//!
//! - **`protocol::snapshot`** – the [`PadSnapshot`] value type (two button
//!   bitmasks, four stick axes, two triggers) and the shared button-bit
//!   enumeration both peers must agree on out-of-band.
//! - **`protocol::codec`** – the fixed 32-byte little-endian record format.
//!   One TCP write carries exactly one record; there is no length prefix
//!   and no delimiter.

pub mod protocol;

// Re-export the most-used items at the crate root so callers can write
// `padlink_core::PadSnapshot` instead of the full module path.
pub use protocol::codec::{decode_snapshot, encode_snapshot, ProtocolError, SNAPSHOT_LEN};
pub use protocol::snapshot::{buttons, PadSnapshot};
