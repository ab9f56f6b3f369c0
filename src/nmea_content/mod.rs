//! # NMEA Content
//!
//! Strongly-typed sentence structs and the field-level helpers they are built from.
//!
//! Each sentence decodes from the comma-separated tokens of a checksum-validated
//! payload and encodes back into the same token layout. See [`NmeaSentence`] for the
//! list of supported types.

mod parse;
mod sentences;

pub use sentences::*;

/// Maps a three-letter sentence type (`"GGA"`, `"RMC"`, ...) to a human-readable,
/// possibly localized, description.
///
/// Any `Fn(&str) -> String` is a lookup, so an application can plug in its own
/// resource table:
///
/// ```rust
/// use nmea0183_receiver::{HDT, NmeaMessage};
///
/// let lookup = |tag: &str| format!("sentence {tag}");
/// assert_eq!(HDT::default().description(&lookup), "sentence HDT");
/// ```
pub trait DescriptionLookup {
    fn describe(&self, tag: &str) -> String;
}

impl<F> DescriptionLookup for F
where
    F: Fn(&str) -> String,
{
    fn describe(&self, tag: &str) -> String {
        self(tag)
    }
}

/// English sentence names.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishDescriptions;

impl DescriptionLookup for EnglishDescriptions {
    fn describe(&self, tag: &str) -> String {
        let description = match SentenceKind::from_tag(tag) {
            Some(SentenceKind::GGA) => "Global Positioning System Fix Data",
            Some(SentenceKind::GSA) => "GNSS DOP and Active Satellites",
            Some(SentenceKind::GST) => "GNSS Pseudorange Noise Statistics",
            Some(SentenceKind::GSV) => "GNSS Satellites in View",
            Some(SentenceKind::HDT) => "Heading, True",
            Some(SentenceKind::RMC) => "Recommended Minimum Navigation Information",
            Some(SentenceKind::VTG) => "Track Made Good and Ground Speed",
            None => return format!("Unknown sentence {tag}"),
        };

        description.to_owned()
    }
}
