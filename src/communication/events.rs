//! Binary event payload encoding
//!
//! Fixed-layout payloads, little-endian 16-bit words. Byte and field order
//! must match the host decoder exactly.

use super::protocol::{
    CHANNEL_ACCEL, CHANNEL_GYRO, MODE_EVENT_LEN, MOTION_DATA_BYTES, MOTION_DATA_EVENT_LEN,
};
use crate::devices::traits::Vector3i16;
use crate::motion::mode::MotionMode;

/// Encode a motion-data event payload
///
/// Layout: `[sensor][channel mask][data byte count][ax][ay][az][gx][gy][gz]`
/// with each axis value little-endian. Both channel groups are always
/// present on this device, so the mask is fixed at accel | gyro.
pub fn encode_motion_data(
    sensor: u8,
    accel: &Vector3i16,
    gyro: &Vector3i16,
) -> [u8; MOTION_DATA_EVENT_LEN] {
    let mut payload = [0u8; MOTION_DATA_EVENT_LEN];
    payload[0] = sensor;
    payload[1] = CHANNEL_ACCEL | CHANNEL_GYRO;
    payload[2] = MOTION_DATA_BYTES as u8;

    let axes = [accel.x, accel.y, accel.z, gyro.x, gyro.y, gyro.z];
    for (i, value) in axes.into_iter().enumerate() {
        let [lo, hi] = value.to_le_bytes();
        payload[3 + 2 * i] = lo;
        payload[4 + 2 * i] = hi;
    }

    payload
}

/// Encode a mode-change event payload: `[sensor][mode]`
pub fn encode_mode_change(sensor: u8, mode: MotionMode) -> [u8; MODE_EVENT_LEN] {
    [sensor, mode.as_wire()]
}
