//! TeraRanger Evo Mini UART Protocol
//!
//! This crate defines the wire protocol spoken by the Terabee TeraRanger
//! Evo Mini, a 4-pixel time-of-flight distance sensor on an asynchronous
//! serial link (115200 baud, 8N1).
//!
//! # Protocol Overview
//!
//! The host configures the sensor with fixed 4-byte command frames:
//! ```text
//! ┌──────┬───────┬───────┬───────┐
//! │ 0x00 │ CMD   │ PARAM │ CRC-8 │
//! │ 1B   │ 1B    │ 1B    │ 1B    │
//! └──────┴───────┴───────┴───────┘
//! ```
//!
//! In binary output mode the sensor streams fixed-length response frames,
//! one per measurement cycle:
//! ```text
//! ┌──────┬──────────────────────┬───────┐
//! │ 0x54 │ DISTANCES            │ CRC-8 │
//! │ 1B   │ 2B big-endian × N    │ 1B    │
//! └──────┴──────────────────────┴───────┘
//! ```
//!
//! N is the configured pixel count (1, 2 or 4). Three 16-bit codes are
//! reserved as sentinels instead of distances; see [`frame`].
//!
//! The protocol defines no acknowledgment for commands: a dropped or
//! misapplied command surfaces only as persistently malformed or
//! default-mode response frames.

#![no_std]
#![deny(unsafe_code)]

pub mod checksum;
pub mod command;
pub mod frame;

pub use checksum::crc8;
pub use command::{setup_sequence, Command, OutputFormat, PixelCount, RangeMode};
pub use frame::{
    decode, validate, verify_checksum, FrameError, Readings, DIST_ABOVE_MAX, DIST_BELOW_MIN,
    DIST_INVALID, FRAME_START, MAX_CHANNELS, MAX_FRAME_LEN,
};
