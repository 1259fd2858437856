//! Notification payload decoding.
//!
//! Firmware revisions disagree on the payload format: some send the reading
//! as ASCII digits, others as a little-endian `u16`. Text wins when it parses.

use super::PressureReading;
use crate::error::{PlantarError, Result};

/// Decode a characteristic notification into a reading.
pub fn decode_payload(payload: &[u8]) -> Result<PressureReading> {
    if let Some(value) = parse_text(payload) {
        return value;
    }

    match payload {
        [lo, hi, ..] => Ok(u16::from_le_bytes([*lo, *hi]) as PressureReading),
        [] => Err(PlantarError::decode("empty payload")),
        [_] => Err(PlantarError::decode("single byte payload")),
    }
}

/// Leading-integer text parse. `None` means "not text, try binary".
fn parse_text(payload: &[u8]) -> Option<Result<PressureReading>> {
    let text = std::str::from_utf8(payload).ok()?.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative && digits.bytes().any(|b| b != b'0') {
        return Some(Err(PlantarError::decode(format!("negative reading -{}", digits))));
    }

    Some(
        digits
            .parse::<PressureReading>()
            .map_err(|_| PlantarError::decode(format!("reading out of range: {}", digits))),
    )
}
