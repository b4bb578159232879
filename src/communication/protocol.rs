//! Host protocol constants
//!
//! Packet class and event identifiers for the motion class of the wearable's
//! framed host protocol, plus the payload layout constants. The transport
//! collaborator owns the surrounding packet header; these values ride inside
//! it and are a wire contract with the host.

/// Packet type: asynchronous event (device → host)
pub const PACKET_TYPE_EVENT: u8 = 0x80;

/// Packet class: motion
pub const PACKET_CLASS_MOTION: u8 = 0x03;

/// Event id: motion mode changed
pub const EVT_MOTION_MODE: u8 = 0x01;

/// Event id: motion data
pub const EVT_MOTION_DATA: u8 = 0x02;

/// Channel mask bit: acceleration present
pub const CHANNEL_ACCEL: u8 = 0x01;

/// Channel mask bit: angular rate present
pub const CHANNEL_GYRO: u8 = 0x02;

/// The single combined accel + gyro sensor on this device
pub const MOTION_SENSOR_INDEX: u8 = 0x00;

/// Data bytes in a motion-data payload: 6 axes × 2 bytes
pub const MOTION_DATA_BYTES: usize = 12;

/// Motion-data payload: index + mask + count + data
pub const MOTION_DATA_EVENT_LEN: usize = 3 + MOTION_DATA_BYTES;

/// Mode-change payload: index + mode
pub const MODE_EVENT_LEN: usize = 2;
