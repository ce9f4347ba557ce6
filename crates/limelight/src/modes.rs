//! LED and camera modes.
//!
//! The camera reads both as small integers stored in a table number. Every
//! write goes through [`LedMode::as_number`] / [`CamMode::as_number`] and every
//! read-back through the `TryFrom<f64>` impls, so the integer encoding lives
//! in exactly one place per mode.
//!
//! | Mode | Variant | Code |
//! |------|---------|------|
//! | LED | `Pipeline` | 0 |
//! | LED | `Off` | 1 |
//! | LED | `Blink` | 2 |
//! | LED | `On` | 3 |
//! | Camera | `Vision` | 0 |
//! | Camera | `Driver` | 1 |

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModeDecodeError;

/// LED state requested from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedMode {
    /// Use the LED state configured in the active pipeline.
    #[default]
    Pipeline,
    /// Force off.
    Off,
    /// Force blink.
    Blink,
    /// Force on.
    On,
}

impl LedMode {
    /// Every mode in wire order.
    pub const ALL: [Self; 4] = [Self::Pipeline, Self::Off, Self::Blink, Self::On];

    /// Integer code written to the table.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Pipeline => 0,
            Self::Off => 1,
            Self::Blink => 2,
            Self::On => 3,
        }
    }

    /// Table representation of [`Self::code`].
    #[must_use]
    pub fn as_number(self) -> f64 {
        f64::from(self.code())
    }

    /// Mode for an integer code, `None` if unknown.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Pipeline),
            1 => Some(Self::Off),
            2 => Some(Self::Blink),
            3 => Some(Self::On),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Pipeline => "pipeline",
            Self::Off => "off",
            Self::Blink => "blink",
            Self::On => "on",
        }
    }
}

impl fmt::Display for LedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<f64> for LedMode {
    type Error = ModeDecodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        decode(value, "LED mode", 3, Self::from_code)
    }
}

/// Camera operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CamMode {
    /// Run the vision pipeline.
    #[default]
    Vision,
    /// Raise exposure, disable processing; use as a driver camera.
    Driver,
}

impl CamMode {
    /// Every mode in wire order.
    pub const ALL: [Self; 2] = [Self::Vision, Self::Driver];

    /// Integer code written to the table.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Vision => 0,
            Self::Driver => 1,
        }
    }

    /// Table representation of [`Self::code`].
    #[must_use]
    pub fn as_number(self) -> f64 {
        f64::from(self.code())
    }

    /// Mode for an integer code, `None` if unknown.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Vision),
            1 => Some(Self::Driver),
            _ => None,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Vision => "vision",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for CamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<f64> for CamMode {
    type Error = ModeDecodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        decode(value, "camera mode", 1, Self::from_code)
    }
}

/// Integral `i32` held by a table number, `None` for NaN, infinities,
/// fractional values or anything outside `i32`.
pub(crate) fn integral_i32(value: f64) -> Option<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if !in_range || value.fract() != 0.0 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is integral and within i32 bounds"
    )]
    let code = value as i32;
    Some(code)
}

fn decode<M>(
    value: f64,
    kind: &'static str,
    max: u8,
    from_code: fn(u8) -> Option<M>,
) -> Result<M, ModeDecodeError> {
    let code = integral_i32(value).ok_or(ModeDecodeError::NotIntegral { kind, value })?;
    u8::try_from(code)
        .ok()
        .and_then(from_code)
        .ok_or(ModeDecodeError::OutOfDomain { kind, code, max })
}
