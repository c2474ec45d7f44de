//! Driver facade: configuration handshake, polling, cached state.

use embedded_hal::delay::DelayNs;
use evomini_protocol::{frame, setup_sequence, PixelCount, RangeMode};

use crate::reader::FrameReader;
use crate::status::{NullStatus, StatusSink};
use crate::tracker::ValidityTracker;
use crate::transport::Transport;

/// Firmware settle time after each configuration command
pub const CMD_SETTLE_MS: u32 = 10;

/// Sensor operating configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Number of ranging zones per frame
    pub pixels: PixelCount,
    /// Short range (fast) or long range
    pub range: RangeMode,
    /// Verify the trailing CRC-8 of every response frame and discard
    /// mismatches. Off by default: the sensor's stock host drivers never
    /// check the trailing byte, so enabling this is a documented
    /// deviation from their behavior.
    pub strict_checksum: bool,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            pixels: PixelCount::Four,
            range: RangeMode::Short,
            strict_checksum: false,
        }
    }
}

impl SensorConfig {
    /// Configuration from raw constructor arguments: a requested pixel
    /// count (unsupported counts fall back to 1-pixel mode) and a
    /// short-range flag.
    pub fn from_requested(pixel_count: u8, short_range: bool) -> Self {
        Self {
            pixels: PixelCount::from_requested(pixel_count),
            range: if short_range {
                RangeMode::Short
            } else {
                RangeMode::Long
            },
            strict_checksum: false,
        }
    }
}

/// Cache update policy for [`EvoMini::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateMode {
    /// Overwrite every channel with the latest frame, sentinels included
    Raw,
    /// Hold the last valid distance across invalid readings and track the
    /// run length per channel
    Filtered,
}

/// TeraRanger Evo Mini driver.
///
/// Owns the serial transport exclusively. Construction sends the
/// three-command configuration handshake; afterwards the caller polls
/// [`update`](Self::update) at or above the sensor's output rate and
/// reads the cached values through [`distances`](Self::distances) and
/// [`invalid_runs`](Self::invalid_runs). A missed poll only means the
/// cache stays stale until the next successful decode.
///
/// Single-owner, single-caller: the driver has no interior locking and
/// must not be polled from two execution contexts at once.
pub struct EvoMini<T, S = NullStatus> {
    transport: Option<T>,
    status: S,
    config: SensorConfig,
    reader: FrameReader,
    tracker: ValidityTracker,
    ready: bool,
}

impl<T> EvoMini<T>
where
    T: Transport,
{
    /// Create the driver and run the configuration handshake, discarding
    /// status notifications. The delay provider is only needed for the
    /// handshake settle times and is not retained.
    pub fn new(transport: T, delay: impl DelayNs, config: SensorConfig) -> Self {
        Self::with_status(transport, delay, config, NullStatus)
    }
}

impl<T, S> EvoMini<T, S>
where
    T: Transport,
    S: StatusSink,
{
    /// Create the driver, run the configuration handshake, and report the
    /// outcome to `status`.
    ///
    /// The handshake fires pixel-count, binary-output and range-mode
    /// commands in order, with a settle delay after each write. The
    /// protocol has no acknowledgment, so a command the sensor dropped or
    /// misapplied cannot be detected here; it shows up later as
    /// persistently discarded response frames. A failed *write* is
    /// detected: the transport is released, the driver stays constructed
    /// but not ready, and every `update` becomes a no-op.
    pub fn with_status(
        mut transport: T,
        delay: impl DelayNs,
        config: SensorConfig,
        mut status: S,
    ) -> Self {
        let ready = Self::configure(&mut transport, delay, &config).is_ok();
        status.ready_changed(ready);
        Self {
            transport: ready.then_some(transport),
            status,
            reader: FrameReader::new(config.pixels),
            tracker: ValidityTracker::new(config.pixels.channels()),
            config,
            ready,
        }
    }

    fn configure(
        transport: &mut T,
        mut delay: impl DelayNs,
        config: &SensorConfig,
    ) -> Result<(), T::Error> {
        for command in setup_sequence(config.pixels, config.range) {
            transport.write_all(&command.encode())?;
            delay.delay_ms(CMD_SETTLE_MS);
        }
        Ok(())
    }

    /// Poll the transport once and fold any fresh frame into the cache.
    ///
    /// Never blocks beyond the bounded poll wait and never fails: no
    /// data, a malformed frame, or a link read error all leave the cached
    /// values exactly as they were.
    pub fn update(&mut self, mode: UpdateMode) {
        let Some(transport) = self.transport.as_mut() else {
            return;
        };

        let bytes = match self.reader.try_read(transport) {
            Ok(Some(bytes)) => bytes,
            Ok(None) | Err(_) => return,
        };
        if self.config.strict_checksum && frame::verify_checksum(bytes).is_err() {
            return;
        }
        let Ok(readings) = frame::decode(bytes, self.config.pixels) else {
            return;
        };

        match mode {
            UpdateMode::Raw => self.tracker.apply_raw(&readings),
            UpdateMode::Filtered => self.tracker.apply_filtered(&readings),
        }
    }

    /// Cached distance per channel, in sensor-native units.
    ///
    /// Length always equals the configured pixel count. Sentinel codes
    /// appear here verbatim; see the protocol crate's `DIST_*` constants.
    pub fn distances(&self) -> &[u16] {
        self.tracker.distances()
    }

    /// Consecutive invalid readings per channel, parallel to
    /// [`distances`](Self::distances). Only maintained by filtered
    /// updates.
    pub fn invalid_runs(&self) -> &[u32] {
        self.tracker.invalid_runs()
    }

    /// Whether the handshake succeeded and the transport is still held
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Release the serial transport and retire the driver.
    ///
    /// Terminal: afterwards `update` does nothing and the cached values
    /// freeze at their last state. Returns the transport on the first
    /// call, `None` on any later one.
    pub fn release(&mut self) -> Option<T> {
        let transport = self.transport.take();
        if transport.is_some() {
            self.ready = false;
            self.status.ready_changed(false);
        }
        transport
    }
}
