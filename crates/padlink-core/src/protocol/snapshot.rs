//! The snapshot data model: one point-in-time reading of the input device.
//!
//! A [`PadSnapshot`] is a plain `Copy` value. Presentation code builds a
//! fresh one every input frame and hands it to the link layer *by value*,
//! so the queued copy can never be reached by later mutation of the
//! caller's working snapshot – the isolation guarantee falls out of
//! ownership rather than an explicit deep copy.
//!
//! Axis conventions:
//! - stick axes are in `[-1.0, 1.0]` (x: right positive, y: up positive)
//! - trigger axes are in `[0.0, 1.0]` (fully released to fully pulled)
//!
//! Callers are expected to clamp before encoding (use [`PadSnapshot::clamped`]);
//! the encoder does not re-validate, and the decoder deliberately preserves
//! out-of-range values sent by a non-conforming peer so that receiving code
//! can decide how to handle them.

use serde::{Deserialize, Serialize};

/// Bit assignments for [`PadSnapshot::buttons_pressed`] /
/// [`PadSnapshot::buttons_released`].
///
/// This enumeration is fixed out-of-band: both peers must share the exact
/// same layout or button events will be misinterpreted. Treat it as a
/// protocol constant, not something to compute.
pub mod buttons {
    pub const DPAD_UP: u32 = 1 << 0;
    pub const DPAD_DOWN: u32 = 1 << 1;
    pub const DPAD_LEFT: u32 = 1 << 2;
    pub const DPAD_RIGHT: u32 = 1 << 3;
    pub const FACE_A: u32 = 1 << 4;
    pub const FACE_B: u32 = 1 << 5;
    pub const FACE_X: u32 = 1 << 6;
    pub const FACE_Y: u32 = 1 << 7;
    pub const SHOULDER_LEFT: u32 = 1 << 8;
    pub const SHOULDER_RIGHT: u32 = 1 << 9;
    pub const MENU: u32 = 1 << 10;
    pub const VIEW: u32 = 1 << 11;
    pub const STICK_LEFT: u32 = 1 << 12;
    pub const STICK_RIGHT: u32 = 1 << 13;
}

/// One reading of the full input-device state.
///
/// All fields are fixed-width so the type maps 1:1 onto the 32-byte wire
/// record (see [`crate::protocol::codec`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PadSnapshot {
    /// Bitmask of buttons that transitioned to pressed this frame.
    pub buttons_pressed: u32,
    /// Bitmask of buttons that transitioned to released this frame.
    pub buttons_released: u32,
    pub left_stick_x: f32,
    pub left_stick_y: f32,
    pub right_stick_x: f32,
    pub right_stick_y: f32,
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl PadSnapshot {
    /// A snapshot with no buttons and all axes at rest.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Returns a copy with every axis clamped to its documented range:
    /// sticks to `[-1.0, 1.0]`, triggers to `[0.0, 1.0]`.
    ///
    /// NaN axis values are coerced to `0.0` rather than propagated onto
    /// the wire.
    pub fn clamped(self) -> Self {
        Self {
            buttons_pressed: self.buttons_pressed,
            buttons_released: self.buttons_released,
            left_stick_x: clamp_stick(self.left_stick_x),
            left_stick_y: clamp_stick(self.left_stick_y),
            right_stick_x: clamp_stick(self.right_stick_x),
            right_stick_y: clamp_stick(self.right_stick_y),
            left_trigger: clamp_trigger(self.left_trigger),
            right_trigger: clamp_trigger(self.right_trigger),
        }
    }

    /// Returns a copy with the pressed-buttons mask replaced.
    pub fn with_pressed(mut self, mask: u32) -> Self {
        self.buttons_pressed = mask;
        self
    }

    /// Returns a copy with the released-buttons mask replaced.
    pub fn with_released(mut self, mask: u32) -> Self {
        self.buttons_released = mask;
        self
    }
}

fn clamp_stick(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

fn clamp_trigger(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_snapshot_is_all_zero() {
        let s = PadSnapshot::neutral();
        assert_eq!(s.buttons_pressed, 0);
        assert_eq!(s.buttons_released, 0);
        assert_eq!(s.left_stick_x, 0.0);
        assert_eq!(s.right_trigger, 0.0);
    }

    #[test]
    fn test_clamped_limits_stick_axes_to_unit_range() {
        // Arrange
        let s = PadSnapshot {
            left_stick_x: 3.5,
            left_stick_y: -7.0,
            ..PadSnapshot::neutral()
        };

        // Act
        let c = s.clamped();

        // Assert
        assert_eq!(c.left_stick_x, 1.0);
        assert_eq!(c.left_stick_y, -1.0);
    }

    #[test]
    fn test_clamped_limits_triggers_to_zero_one_range() {
        let s = PadSnapshot {
            left_trigger: -0.25,
            right_trigger: 1.75,
            ..PadSnapshot::neutral()
        };
        let c = s.clamped();
        assert_eq!(c.left_trigger, 0.0);
        assert_eq!(c.right_trigger, 1.0);
    }

    #[test]
    fn test_clamped_coerces_nan_to_zero() {
        let s = PadSnapshot {
            right_stick_x: f32::NAN,
            left_trigger: f32::NAN,
            ..PadSnapshot::neutral()
        };
        let c = s.clamped();
        assert_eq!(c.right_stick_x, 0.0);
        assert_eq!(c.left_trigger, 0.0);
    }

    #[test]
    fn test_clamped_leaves_in_range_values_untouched() {
        let s = PadSnapshot {
            buttons_pressed: buttons::FACE_A,
            left_stick_x: -0.5,
            right_stick_y: 0.25,
            left_trigger: 0.9,
            ..PadSnapshot::neutral()
        };
        assert_eq!(s.clamped(), s);
    }

    #[test]
    fn test_button_bits_are_distinct() {
        // Every constant must occupy its own bit.
        let all = [
            buttons::DPAD_UP,
            buttons::DPAD_DOWN,
            buttons::DPAD_LEFT,
            buttons::DPAD_RIGHT,
            buttons::FACE_A,
            buttons::FACE_B,
            buttons::FACE_X,
            buttons::FACE_Y,
            buttons::SHOULDER_LEFT,
            buttons::SHOULDER_RIGHT,
            buttons::MENU,
            buttons::VIEW,
            buttons::STICK_LEFT,
            buttons::STICK_RIGHT,
        ];
        let mut seen = 0u32;
        for bit in all {
            assert_eq!(bit.count_ones(), 1, "each button is a single bit");
            assert_eq!(seen & bit, 0, "bit {bit:#x} assigned twice");
            seen |= bit;
        }
    }

    #[test]
    fn test_with_pressed_replaces_only_the_pressed_mask() {
        let s = PadSnapshot::neutral()
            .with_pressed(buttons::FACE_A | buttons::MENU)
            .with_released(buttons::FACE_B);
        assert_eq!(s.buttons_pressed, buttons::FACE_A | buttons::MENU);
        assert_eq!(s.buttons_released, buttons::FACE_B);
        assert_eq!(s.left_stick_x, 0.0);
    }
}
