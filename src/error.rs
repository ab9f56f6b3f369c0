//! # Error Types
//!
//! This module defines the error type shared by the angle codec and the sentence model.
//!
//! Framing and checksum problems found by the [`Receiver`](crate::Receiver) are not errors
//! in this sense: they are reported through the [`NmeaHandler`](crate::NmeaHandler)
//! diagnostic callbacks and the stream keeps going.

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Represents every failure that decoding, parsing or range-checking can produce.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A DDD, DMM or DMS angle string could not be parsed.
    ///
    /// Raised for a wrong number of tokens, an unknown hemisphere letter, or a
    /// numeric component that is not a number. Carries the offending input.
    #[error("malformed geographic angle {0:?}")]
    GeoAngleFormat(String),

    /// An angle fell outside the range allowed for its axis.
    #[error("{degrees} degrees is outside the range [{min}, {max}]")]
    Range {
        /// The rejected value, in decimal degrees
        degrees: f64,
        /// Lower bound of the axis, in decimal degrees
        min: f64,
        /// Upper bound of the axis, in decimal degrees
        max: f64,
    },

    /// An enumerated field carried a code with no table entry.
    #[error("unsupported {kind} value {value:?}")]
    UnsupportedEnumValue {
        /// Name of the enumeration
        kind: &'static str,
        /// The code as it appeared on the wire
        value: String,
    },

    /// The sentence ended before a required field.
    #[error("field {index} is missing")]
    MissingField {
        /// Token index of the missing field (the tag is index 0)
        index: usize,
    },

    /// A field was present but could not be parsed.
    #[error("field {index} is malformed: {value:?}")]
    InvalidField {
        /// Token index of the field
        index: usize,
        /// The raw token
        value: String,
    },

    /// The tag in token 0 does not end in a supported sentence type.
    #[error("unrecognized sentence tag {0:?}")]
    UnrecognizedSentence(String),

    /// The tag in token 0 does not name the sentence type being decoded.
    #[error("expected a {expected} sentence, found tag {found:?}")]
    UnexpectedSentence {
        /// Sentence type the decoder handles
        expected: &'static str,
        /// Token 0 as received
        found: String,
    },
}
