//! Inbound mode command parsing
//!
//! The host drives the acquisition lifecycle with a 2-byte binary command:
//! `[sensor index][mode]`. Parsing is strict; the pipeline applies a parsed
//! command with `ModeChangeOrigin::HostCommand` so the resulting mode-change
//! event is not echoed back to the sender.

use core::fmt;

use super::protocol::MOTION_SENSOR_INDEX;
use crate::motion::mode::MotionMode;

/// Command parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub enum CommandError {
    /// Payload does not match the fixed 2-byte command layout
    BadLength,
    /// Sensor index does not exist on this device
    BadSensor,
    /// Mode value outside the two-state lifecycle
    BadMode,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::BadLength => write!(f, "command payload length incorrect"),
            CommandError::BadSensor => write!(f, "unknown sensor index"),
            CommandError::BadMode => write!(f, "unknown mode value"),
        }
    }
}

/// Parsed host mode command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "rp2350", derive(defmt::Format))]
pub struct ModeCommand {
    /// Target sensor index (always 0 on this device)
    pub sensor: u8,
    /// Requested mode
    pub mode: MotionMode,
}

impl ModeCommand {
    /// Parse the 2-byte `[sensor][mode]` payload
    pub fn parse(payload: &[u8]) -> Result<Self, CommandError> {
        let [sensor, mode] = payload else {
            return Err(CommandError::BadLength);
        };
        if *sensor != MOTION_SENSOR_INDEX {
            return Err(CommandError::BadSensor);
        }
        let mode = MotionMode::from_wire(*mode).ok_or(CommandError::BadMode)?;

        Ok(Self {
            sensor: *sensor,
            mode,
        })
    }
}
