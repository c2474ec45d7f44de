//! Decoder robustness properties.

use evomini_protocol::{decode, PixelCount, FRAME_START};
use proptest::prelude::*;

proptest! {
    /// Arbitrary input never panics, and only frames with the exact
    /// length and start byte decode.
    #[test]
    fn decode_accepts_only_well_formed(bytes in proptest::collection::vec(any::<u8>(), 0..24)) {
        for pixels in [PixelCount::One, PixelCount::Two, PixelCount::Four] {
            let well_formed =
                bytes.len() == pixels.frame_len() && bytes.first() == Some(&FRAME_START);
            prop_assert_eq!(decode(&bytes, pixels).is_ok(), well_formed);
        }
    }

    /// Whatever the payload bytes, a well-formed 4-pixel frame decodes to
    /// its four big-endian channel values.
    #[test]
    fn decode_extracts_big_endian_channels(payload in proptest::array::uniform8(any::<u8>()), tail: u8) {
        let mut frame = [0u8; 10];
        frame[0] = FRAME_START;
        frame[1..9].copy_from_slice(&payload);
        frame[9] = tail;

        let readings = decode(&frame, PixelCount::Four).unwrap();
        prop_assert_eq!(readings.len(), 4);
        for ch in 0..4 {
            let expected = u16::from_be_bytes([payload[2 * ch], payload[2 * ch + 1]]);
            prop_assert_eq!(readings[ch], expected);
        }
    }
}
