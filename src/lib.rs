#![cfg_attr(not(test), no_std)]

//! motionband - motion acquisition firmware for a wearable 6-axis sensor node
//!
//! This library bridges the data-ready interrupt of a hand/wrist-mounted
//! MPU-6050 to smoothed, encoded telemetry events on the host link: a latched
//! interrupt flag, a six-channel burst read, a per-axis exponential smoothing
//! filter, and a fixed-layout binary event payload offered to an optional
//! veto observer before transmission.

// Platform isolation: mock collaborators for host tests, RP2350 glue for hardware
pub mod platform;

// Device drivers and device-independent sensor traits
pub mod devices;

// Core support (logging)
pub mod core;

// Acquisition pipeline: latch, state, filter, mode lifecycle
pub mod motion;

// Host link: event encoding, transport seam, observer gate, mode commands
pub mod communication;
