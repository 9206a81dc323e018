//! Protocol module containing the snapshot model and the binary codec.

pub mod codec;
pub mod snapshot;

pub use codec::{decode_snapshot, encode_snapshot, ProtocolError, SNAPSHOT_LEN};
pub use snapshot::{buttons, PadSnapshot};
