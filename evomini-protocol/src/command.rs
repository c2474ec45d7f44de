//! Command frames for sensor configuration.
//!
//! Every command is one of six fixed 4-byte sequences
//! `[0x00, cmd, param, crc8]`. The sensor sends no acknowledgment, so the
//! host fires each command and allows the firmware a short settle time
//! before the next one.

/// Select 1-pixel output (single merged ranging zone)
pub const CMD_PIXEL_MODE_1: [u8; 4] = [0x00, 0x21, 0x01, 0xBC];
/// Select 2-pixel output
pub const CMD_PIXEL_MODE_2: [u8; 4] = [0x00, 0x21, 0x03, 0xB2];
/// Select 4-pixel output
pub const CMD_PIXEL_MODE_4: [u8; 4] = [0x00, 0x21, 0x02, 0xB5];
/// Select human-readable text output
pub const CMD_OUTPUT_TEXT: [u8; 4] = [0x00, 0x11, 0x01, 0x45];
/// Select binary output (fixed-length frames)
pub const CMD_OUTPUT_BINARY: [u8; 4] = [0x00, 0x11, 0x02, 0x4C];
/// Select short-range mode (higher update rate)
pub const CMD_RANGE_SHORT: [u8; 4] = [0x00, 0x61, 0x01, 0xE7];
/// Select long-range mode
pub const CMD_RANGE_LONG: [u8; 4] = [0x00, 0x61, 0x03, 0xE9];

/// Number of independent ranging zones reported per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelCount {
    One = 1,
    Two = 2,
    #[default]
    Four = 4,
}

impl PixelCount {
    /// Number of channels in each response frame
    pub const fn channels(self) -> usize {
        self as usize
    }

    /// Expected response frame length: start byte + 2 bytes per channel
    /// + trailing checksum byte
    pub const fn frame_len(self) -> usize {
        2 * self.channels() + 2
    }

    /// Map a requested pixel count to a supported mode.
    ///
    /// The sensor supports 1, 2 and 4 pixels; anything else selects
    /// 1-pixel mode.
    pub fn from_requested(count: u8) -> Self {
        match count {
            2 => PixelCount::Two,
            4 => PixelCount::Four,
            _ => PixelCount::One,
        }
    }
}

/// Ranging mode trade-off: short range updates faster, long range sees
/// farther
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeMode {
    #[default]
    Short,
    Long,
}

/// Measurement output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputFormat {
    /// ASCII lines, one reading per line
    Text,
    /// Fixed-length binary frames
    Binary,
}

/// A configuration command addressed to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    PixelMode(PixelCount),
    Output(OutputFormat),
    Range(RangeMode),
}

impl Command {
    /// Wire encoding of this command
    pub const fn encode(self) -> [u8; 4] {
        match self {
            Command::PixelMode(PixelCount::One) => CMD_PIXEL_MODE_1,
            Command::PixelMode(PixelCount::Two) => CMD_PIXEL_MODE_2,
            Command::PixelMode(PixelCount::Four) => CMD_PIXEL_MODE_4,
            Command::Output(OutputFormat::Text) => CMD_OUTPUT_TEXT,
            Command::Output(OutputFormat::Binary) => CMD_OUTPUT_BINARY,
            Command::Range(RangeMode::Short) => CMD_RANGE_SHORT,
            Command::Range(RangeMode::Long) => CMD_RANGE_LONG,
        }
    }
}

/// Commands sent at driver construction, in the order the sensor expects:
/// pixel count first, then binary output, then range mode.
pub const fn setup_sequence(pixels: PixelCount, range: RangeMode) -> [Command; 3] {
    [
        Command::PixelMode(pixels),
        Command::Output(OutputFormat::Binary),
        Command::Range(range),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::crc8;

    #[test]
    fn test_encode_matches_tables() {
        assert_eq!(Command::PixelMode(PixelCount::Four).encode(), CMD_PIXEL_MODE_4);
        assert_eq!(Command::Output(OutputFormat::Binary).encode(), CMD_OUTPUT_BINARY);
        assert_eq!(Command::Range(RangeMode::Long).encode(), CMD_RANGE_LONG);
    }

    #[test]
    fn test_command_checksums_consistent() {
        let all = [
            CMD_PIXEL_MODE_1,
            CMD_PIXEL_MODE_2,
            CMD_PIXEL_MODE_4,
            CMD_OUTPUT_TEXT,
            CMD_OUTPUT_BINARY,
            CMD_RANGE_SHORT,
            CMD_RANGE_LONG,
        ];
        for cmd in all {
            assert_eq!(cmd[3], crc8(&cmd[..3]), "bad trailing byte in {:02X?}", cmd);
        }
    }

    #[test]
    fn test_from_requested_fallback() {
        assert_eq!(PixelCount::from_requested(4), PixelCount::Four);
        assert_eq!(PixelCount::from_requested(2), PixelCount::Two);
        assert_eq!(PixelCount::from_requested(1), PixelCount::One);
        // Unsupported counts fall back to single pixel
        assert_eq!(PixelCount::from_requested(0), PixelCount::One);
        assert_eq!(PixelCount::from_requested(3), PixelCount::One);
        assert_eq!(PixelCount::from_requested(255), PixelCount::One);
    }

    #[test]
    fn test_frame_len() {
        assert_eq!(PixelCount::One.frame_len(), 4);
        assert_eq!(PixelCount::Two.frame_len(), 6);
        assert_eq!(PixelCount::Four.frame_len(), 10);
    }

    #[test]
    fn test_setup_sequence_order() {
        let seq = setup_sequence(PixelCount::Four, RangeMode::Short);
        assert_eq!(seq[0], Command::PixelMode(PixelCount::Four));
        assert_eq!(seq[1], Command::Output(OutputFormat::Binary));
        assert_eq!(seq[2], Command::Range(RangeMode::Short));
    }
}
