//! TeraRanger Evo Mini driver
//!
//! Poll-driven driver for the Terabee TeraRanger Evo Mini 4-pixel
//! time-of-flight distance sensor, speaking the binary UART protocol
//! defined in `evomini-protocol`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Caller (polls update(), reads cache)    │
//! └──────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  EvoMini facade                          │
//! │   FrameReader → decode → ValidityTracker │
//! └──────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌────────────────┐      ┌─────────────────┐
//! │ EventTransport │      │ PolledTransport │
//! │ (wait-based)   │      │ (queue depth)   │
//! └────────────────┘      └─────────────────┘
//! ```
//!
//! There is no background task: the caller invokes
//! [`EvoMini::update`](driver::EvoMini::update) at its own cadence and
//! each call is one bounded, non-blocking poll. Missing or malformed
//! frames leave the per-channel cache holding the last known values.

#![no_std]
#![deny(unsafe_code)]

pub mod driver;
pub mod reader;
pub mod status;
pub mod tracker;
pub mod transport;

// Re-export key types at crate root for convenience
pub use driver::{EvoMini, SensorConfig, UpdateMode, CMD_SETTLE_MS};
pub use reader::{FrameReader, POLL_WAIT_MS};
pub use status::{NullStatus, StatusSink};
pub use tracker::ValidityTracker;
pub use transport::{
    EventTransport, PolledTransport, RxAvailable, SerialLink, Transport, WaitReadable,
};
