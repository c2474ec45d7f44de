//! Non-blocking response frame acquisition.

use evomini_protocol::{frame, PixelCount, MAX_FRAME_LEN};

use crate::transport::Transport;

/// Bounded wait for readability on event-capable transports
pub const POLL_WAIT_MS: u32 = 10;

/// Pulls single response frames off a [`Transport`] without blocking
/// beyond the bounded poll wait.
pub struct FrameReader {
    buf: [u8; MAX_FRAME_LEN],
    pixels: PixelCount,
}

impl FrameReader {
    pub fn new(pixels: PixelCount) -> Self {
        Self {
            buf: [0; MAX_FRAME_LEN],
            pixels,
        }
    }

    /// Try to acquire one response frame.
    ///
    /// `Ok(None)` covers two cases: the transport had no complete frame
    /// yet (nothing was consumed), or the bytes read were not a valid
    /// frame (wrong length or start byte) and were dropped. No partial
    /// buffering or resynchronization is attempted; the stream re-aligns
    /// on a later poll.
    pub fn try_read<T: Transport>(&mut self, transport: &mut T) -> Result<Option<&[u8]>, T::Error> {
        let frame_len = self.pixels.frame_len();
        if !transport.frame_ready(frame_len, POLL_WAIT_MS) {
            return Ok(None);
        }

        let count = transport.read_frame(&mut self.buf[..frame_len])?;
        if count != frame_len || frame::validate(&self.buf[..frame_len], self.pixels).is_err() {
            return Ok(None);
        }
        Ok(Some(&self.buf[..frame_len]))
    }
}
