//! Binary codec for the fixed-length snapshot record.
//!
//! Wire format, all fields little-endian, total length 32 bytes:
//! ```text
//! offset  0 : u32  buttons_pressed   (bitmask)
//! offset  4 : u32  buttons_released  (bitmask)
//! offset  8 : f32  left_stick_x      [-1.0, 1.0]
//! offset 12 : f32  left_stick_y      [-1.0, 1.0]
//! offset 16 : f32  right_stick_x     [-1.0, 1.0]
//! offset 20 : f32  right_stick_y     [-1.0, 1.0]
//! offset 24 : f32  left_trigger      [0.0, 1.0]
//! offset 28 : f32  right_trigger     [0.0, 1.0]
//! ```
//! There is no header, length prefix, or delimiter: one TCP write carries
//! exactly one record and the peer reads in 32-byte frames.
//!
//! Encoding does not validate axis ranges (callers clamp first, see
//! [`PadSnapshot::clamped`]) and decoding does not reject out-of-range
//! values – a non-conforming peer's floats are handed to the caller as-is.

use crate::protocol::snapshot::PadSnapshot;
use thiserror::Error;

/// Length in bytes of one encoded [`PadSnapshot`] record.
pub const SNAPSHOT_LEN: usize = 32;

/// Errors that can occur while decoding a snapshot record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The buffer does not contain a full 32-byte record at the given offset.
    #[error("malformed payload: need {needed} bytes at offset {offset}, buffer has {available}")]
    MalformedPayload {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// Encodes a [`PadSnapshot`] into its 32-byte wire record.
///
/// Side-effect-free and infallible: every snapshot value has exactly one
/// encoding.
///
/// # Examples
///
/// ```rust
/// use padlink_core::{decode_snapshot, encode_snapshot, PadSnapshot, SNAPSHOT_LEN};
///
/// let s = PadSnapshot::neutral().with_pressed(0x1);
/// let bytes = encode_snapshot(&s);
/// assert_eq!(bytes.len(), SNAPSHOT_LEN);
/// assert_eq!(decode_snapshot(&bytes, 0).unwrap(), s);
/// ```
pub fn encode_snapshot(snapshot: &PadSnapshot) -> [u8; SNAPSHOT_LEN] {
    let mut buf = [0u8; SNAPSHOT_LEN];
    buf[0..4].copy_from_slice(&snapshot.buttons_pressed.to_le_bytes());
    buf[4..8].copy_from_slice(&snapshot.buttons_released.to_le_bytes());
    buf[8..12].copy_from_slice(&snapshot.left_stick_x.to_le_bytes());
    buf[12..16].copy_from_slice(&snapshot.left_stick_y.to_le_bytes());
    buf[16..20].copy_from_slice(&snapshot.right_stick_x.to_le_bytes());
    buf[20..24].copy_from_slice(&snapshot.right_stick_y.to_le_bytes());
    buf[24..28].copy_from_slice(&snapshot.left_trigger.to_le_bytes());
    buf[28..32].copy_from_slice(&snapshot.right_trigger.to_le_bytes());
    buf
}

/// Decodes one [`PadSnapshot`] from `bytes` starting at `offset`.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedPayload`] when fewer than
/// [`SNAPSHOT_LEN`] bytes remain at `offset`, including the case where
/// `offset` itself lies beyond the end of the buffer.
pub fn decode_snapshot(bytes: &[u8], offset: usize) -> Result<PadSnapshot, ProtocolError> {
    let end = offset.checked_add(SNAPSHOT_LEN).ok_or(ProtocolError::MalformedPayload {
        offset,
        needed: SNAPSHOT_LEN,
        available: bytes.len().saturating_sub(offset),
    })?;
    if end > bytes.len() {
        return Err(ProtocolError::MalformedPayload {
            offset,
            needed: SNAPSHOT_LEN,
            available: bytes.len().saturating_sub(offset),
        });
    }

    let p = &bytes[offset..end];
    Ok(PadSnapshot {
        buttons_pressed: read_u32(p, 0),
        buttons_released: read_u32(p, 4),
        left_stick_x: read_f32(p, 8),
        left_stick_y: read_f32(p, 12),
        right_stick_x: read_f32(p, 16),
        right_stick_y: read_f32(p, 20),
        left_trigger: read_f32(p, 24),
        right_trigger: read_f32(p, 28),
    })
}

// ── Utility helpers ───────────────────────────────────────────────────────────

// Both helpers are only ever called with offsets inside the bounds-checked
// 32-byte slice, so the try_into cannot fail.
fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
}

fn read_f32(buf: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
