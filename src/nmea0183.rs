//! # NMEA 0183 Framing
//!
//! Primitives shared by the receive and transmit paths of the standard NMEA 0183 format:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! The checksum `CC` is the XOR of every byte between `$` and `*`, written as two
//! hexadecimal digits. The same routine validates incoming sentences and stamps
//! outgoing ones.

use nom::number::complete::hex_u32;

/// Smallest candidate that can hold `$`, `*`, two checksum digits and `\r\n`.
pub const MIN_SENTENCE_LEN: usize = 6;

/// Defines how the receiver reacts to a structurally malformed candidate sentence.
///
/// Each structural check (start delimiter, CR, LF, checksum delimiter) that fails is
/// reported through [`NmeaHandler::on_dropped`](crate::NmeaHandler::on_dropped).
/// The mode only decides what happens afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FramingMode {
    /// Every structural check runs and the checksum is always attempted.
    ///
    /// A candidate with a bad delimiter can therefore be reported as dropped and then
    /// still fail, or even pass, checksum validation. Receivers with sloppy firmware
    /// rely on this, and some test suites expect checksum failures to be reported
    /// alongside framing drops for the same input.
    #[default]
    CheckAll,

    /// Processing stops after the first failed structural check.
    ///
    /// Remaining checks and the checksum step are skipped, so a malformed candidate
    /// produces exactly one drop notification.
    Strict,
}

/// A structural problem with a candidate sentence.
///
/// The [`Display`](core::fmt::Display) text is the reason passed to
/// [`NmeaHandler::on_dropped`](crate::NmeaHandler::on_dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameViolation {
    /// Shorter than [`MIN_SENTENCE_LEN`]
    #[error("Insufficient number of bytes")]
    InsufficientBytes,
    /// First byte is not `$`
    #[error("Invalid start of message")]
    InvalidStart,
    /// Second to last byte is not `\r`
    #[error("Invalid end of message delimiter (no CR)")]
    MissingCr,
    /// Last byte is not `\n`
    #[error("Invalid end of message delimiter (no LF)")]
    MissingLf,
    /// No `*` before the checksum digits
    #[error("Invalid checksum delimiter")]
    InvalidChecksumDelimiter,
    /// The two checksum characters are not hexadecimal, reported under [`FramingMode::Strict`]
    #[error("Invalid checksum digits")]
    InvalidChecksumDigits,
    /// The payload contains bytes outside ASCII
    #[error("Non-ASCII payload")]
    NonAscii,
}

/// Runs the four independent structural checks over a candidate of at least
/// [`MIN_SENTENCE_LEN`] bytes, in wire order.
pub(crate) fn structural_violations(raw: &[u8]) -> heapless::Vec<FrameViolation, 4> {
    let len = raw.len();
    let checks = [
        (raw[0] == b'$', FrameViolation::InvalidStart),
        (raw[len - 2] == b'\r', FrameViolation::MissingCr),
        (raw[len - 1] == b'\n', FrameViolation::MissingLf),
        (raw[len - 5] == b'*', FrameViolation::InvalidChecksumDelimiter),
    ];

    checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, violation)| violation)
        .collect()
}

/// Calculates the NMEA 0183 checksum of a payload.
///
/// The payload is everything between `$` and `*`, exclusive.
///
/// ```rust
/// use nmea0183_receiver::checksum;
///
/// assert_eq!(checksum(b"GPHDT,75.5664,T"), 0x36);
/// assert_eq!(checksum(b""), 0);
/// ```
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |acc, b| acc ^ b)
}

/// Formats a checksum as two uppercase hexadecimal digits.
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Reads the two checksum digits that follow `*`, in either letter case.
///
/// Returns [`None`] unless `digits` is exactly two hexadecimal characters.
pub fn parse_checksum(digits: &[u8]) -> Option<u8> {
    if digits.len() != 2 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    hex_u32::<_, nom::error::Error<&[u8]>>(digits)
        .ok()
        .map(|(_, value)| value as u8)
}

/// Reads two checksum characters without rejecting anything.
///
/// A character that is not a hex digit counts as the nibble `-1`, and the sum
/// `(high << 4) + low` is truncated to a byte, so `*2` reads as `0xF2`. Only used when
/// [`FramingMode::CheckAll`] must still report a checksum failure for mangled digits.
pub(crate) fn read_checksum_lossy(digits: [u8; 2]) -> u8 {
    let nibble = |digit: u8| (digit as char).to_digit(16).map_or(-1, |value| value as i32);
    ((nibble(digits[0]) << 4) + nibble(digits[1])) as u8
}

/// Wraps a comma-joined payload into a complete wire sentence.
///
/// ```rust
/// use nmea0183_receiver::to_sentence;
///
/// assert_eq!(to_sentence("GPHDT,75.5664,T"), "$GPHDT,75.5664,T*36\r\n");
/// ```
pub fn to_sentence(payload: &str) -> String {
    format!(
        "${payload}*{}\r\n",
        format_checksum(checksum(payload.as_bytes()))
    )
}
