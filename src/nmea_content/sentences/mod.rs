mod gga;
mod gsa;
mod gst;
mod gsv;
mod hdt;
mod rmc;
mod vtg;

pub use gga::GGA;
pub use gsa::{GSA, GSA_PRN_SLOTS};
pub use gst::GST;
pub use gsv::{GSV, GSV_SATELLITE_SLOTS};
pub use hdt::HDT;
pub use rmc::RMC;
pub use vtg::VTG;

use core::fmt;

use crate::{
    Error, Result,
    nmea_content::{DescriptionLookup, parse::optional_field},
    nmea0183,
};

/// The sentence types this crate decodes, keyed by the last three characters of the tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    GGA,
    GSA,
    GST,
    GSV,
    HDT,
    RMC,
    VTG,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 7] = [
        SentenceKind::GGA,
        SentenceKind::GSA,
        SentenceKind::GST,
        SentenceKind::GSV,
        SentenceKind::HDT,
        SentenceKind::RMC,
        SentenceKind::VTG,
    ];

    /// The three-letter sentence type.
    pub const fn as_str(self) -> &'static str {
        match self {
            SentenceKind::GGA => "GGA",
            SentenceKind::GSA => "GSA",
            SentenceKind::GST => "GST",
            SentenceKind::GSV => "GSV",
            SentenceKind::HDT => "HDT",
            SentenceKind::RMC => "RMC",
            SentenceKind::VTG => "VTG",
        }
    }

    /// Tag given to freshly created sentences, with the GPS talker id.
    pub const fn default_tag(self) -> &'static str {
        match self {
            SentenceKind::GGA => "GPGGA",
            SentenceKind::GSA => "GPGSA",
            SentenceKind::GST => "GPGST",
            SentenceKind::GSV => "GPGSV",
            SentenceKind::HDT => "GPHDT",
            SentenceKind::RMC => "GPRMC",
            SentenceKind::VTG => "GPVTG",
        }
    }

    /// Classifies a tag by its last three characters, ignoring case and the talker id.
    ///
    /// ```rust
    /// use nmea0183_receiver::SentenceKind;
    ///
    /// assert_eq!(SentenceKind::from_tag("GNgga"), Some(SentenceKind::GGA));
    /// assert_eq!(SentenceKind::from_tag("HDT"), Some(SentenceKind::HDT));
    /// assert_eq!(SentenceKind::from_tag("XXZZZ"), None);
    /// assert_eq!(SentenceKind::from_tag("VT"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        let suffix = tag.get(tag.len().checked_sub(3)?..)?;
        Self::ALL
            .into_iter()
            .find(|kind| suffix.eq_ignore_ascii_case(kind.as_str()))
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour shared by every strongly-typed sentence struct.
///
/// A sentence converts between itself and its comma-separated fields. Token 0 is
/// always the tag (e.g. `GPGGA`), which the struct keeps in its `data_type` field so
/// that talker ids other than `GP` survive a decode/encode cycle.
///
/// # Example
///
/// ```rust
/// use nmea0183_receiver::{HDT, NmeaMessage};
///
/// let hdt = HDT::decode(&["GNHDT", "75.5554", "T"])?;
/// assert_eq!(hdt.heading, 75.5554);
/// assert_eq!(hdt.to_sentence(), "$GNHDT,75.5554,T*28\r\n");
/// # Ok::<(), nmea0183_receiver::Error>(())
/// ```
pub trait NmeaMessage: Sized {
    /// Sentence type handled by the implementation
    const KIND: SentenceKind;

    /// The tag this sentence was decoded from or will be encoded with.
    fn data_type(&self) -> &str;

    /// Builds a sentence from its fields, tag included.
    ///
    /// Fails if the tag names another sentence type, if a required field is
    /// missing or malformed, or if an enumerated field carries an unknown code.
    fn decode(tokens: &[&str]) -> Result<Self>;

    /// Produces the fields of the sentence, tag first.
    fn encode(&self) -> Vec<String>;

    /// The text between `$` and `*`.
    fn payload(&self) -> String {
        self.encode().join(",")
    }

    fn checksum(&self) -> u8 {
        nmea0183::checksum(self.payload().as_bytes())
    }

    /// The complete wire sentence, `$` through `\r\n`.
    fn to_sentence(&self) -> String {
        nmea0183::to_sentence(&self.payload())
    }

    /// Human-readable name of the sentence type.
    fn description(&self, lookup: &impl DescriptionLookup) -> String {
        lookup.describe(Self::KIND.as_str())
    }
}

/// A decoded sentence of any supported type.
///
/// | Variant      | Sentence Type                                 |
/// |--------------|-----------------------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data            |
/// | GSA([`GSA`]) | GNSS DOP and Active Satellites                |
/// | GST([`GST`]) | GNSS Pseudorange Noise Statistics             |
/// | GSV([`GSV`]) | GNSS Satellites in View                       |
/// | HDT([`HDT`]) | Heading, True                                 |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information    |
/// | VTG([`VTG`]) | Track Made Good and Ground Speed              |
///
/// ```rust
/// use nmea0183_receiver::NmeaSentence;
///
/// let tokens = ["GPGSV", "3", "3", "11", "29", "09", "301", "24", "16", "09", "020", ""];
/// match NmeaSentence::decode(&tokens)? {
///     NmeaSentence::GSV(gsv) => {
///         assert_eq!(gsv.satellites.len(), 2);
///         assert_eq!(gsv.satellites[1].snr, None);
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// # Ok::<(), nmea0183_receiver::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// GNSS DOP and Active Satellites
    GSA(GSA),
    /// GNSS Pseudorange Noise Statistics
    GST(GST),
    /// GNSS Satellites in View
    GSV(GSV),
    /// Heading, True
    HDT(HDT),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
    /// Track Made Good and Ground Speed
    VTG(VTG),
}

impl NmeaSentence {
    /// Decodes fields by the sentence type named in token 0.
    pub fn decode(tokens: &[&str]) -> Result<Self> {
        let tag = tokens.first().copied().unwrap_or_default();
        let kind =
            SentenceKind::from_tag(tag).ok_or_else(|| Error::UnrecognizedSentence(tag.into()))?;

        Self::decode_as(kind, tokens)
    }

    /// Decodes fields as a given sentence type.
    pub fn decode_as(kind: SentenceKind, tokens: &[&str]) -> Result<Self> {
        Ok(match kind {
            SentenceKind::GGA => Self::GGA(GGA::decode(tokens)?),
            SentenceKind::GSA => Self::GSA(GSA::decode(tokens)?),
            SentenceKind::GST => Self::GST(GST::decode(tokens)?),
            SentenceKind::GSV => Self::GSV(GSV::decode(tokens)?),
            SentenceKind::HDT => Self::HDT(HDT::decode(tokens)?),
            SentenceKind::RMC => Self::RMC(RMC::decode(tokens)?),
            SentenceKind::VTG => Self::VTG(VTG::decode(tokens)?),
        })
    }

    pub fn kind(&self) -> SentenceKind {
        match self {
            Self::GGA(_) => SentenceKind::GGA,
            Self::GSA(_) => SentenceKind::GSA,
            Self::GST(_) => SentenceKind::GST,
            Self::GSV(_) => SentenceKind::GSV,
            Self::HDT(_) => SentenceKind::HDT,
            Self::RMC(_) => SentenceKind::RMC,
            Self::VTG(_) => SentenceKind::VTG,
        }
    }

    pub fn data_type(&self) -> &str {
        match self {
            Self::GGA(s) => s.data_type(),
            Self::GSA(s) => s.data_type(),
            Self::GST(s) => s.data_type(),
            Self::GSV(s) => s.data_type(),
            Self::HDT(s) => s.data_type(),
            Self::RMC(s) => s.data_type(),
            Self::VTG(s) => s.data_type(),
        }
    }

    pub fn encode(&self) -> Vec<String> {
        match self {
            Self::GGA(s) => s.encode(),
            Self::GSA(s) => s.encode(),
            Self::GST(s) => s.encode(),
            Self::GSV(s) => s.encode(),
            Self::HDT(s) => s.encode(),
            Self::RMC(s) => s.encode(),
            Self::VTG(s) => s.encode(),
        }
    }

    pub fn to_sentence(&self) -> String {
        nmea0183::to_sentence(&self.encode().join(","))
    }

    pub fn description(&self, lookup: &impl DescriptionLookup) -> String {
        lookup.describe(self.kind().as_str())
    }
}

macro_rules! impl_sentence_display {
    ($($name:ident),*) => ($(
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_sentence())
            }
        }

        impl From<$name> for NmeaSentence {
            fn from(sentence: $name) -> Self {
                Self::$name(sentence)
            }
        }
    )*)
}

impl_sentence_display!(GGA, GSA, GST, GSV, HDT, RMC, VTG);

impl fmt::Display for NmeaSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sentence())
    }
}

macro_rules! nmea_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// The code written on the wire.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Looks up a wire code, ignoring surrounding whitespace and letter case.
            pub fn from_code(code: &str) -> Result<Self> {
                let trimmed = code.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($code) {
                        return Ok(Self::$variant);
                    }
                )*

                Err(Error::UnsupportedEnumValue {
                    kind: stringify!($name),
                    value: code.to_owned(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

nmea_enum! {
    /// Status of a position fix
    pub enum Status {
        /// A - Data valid
        "A" => Active,
        /// V - Navigation receiver warning
        #[default]
        "V" => Void,
    }
}

nmea_enum! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        /// 0 - Fix not available
        #[default]
        "0" => Invalid,
        /// 1 - GPS fix
        "1" => Gps,
        /// 2 - Differential GPS fix
        "2" => Dgps,
        /// 3 - PPS fix
        "3" => Pps,
        /// 4 - Real Time Kinematic
        "4" => Rtk,
        /// 5 - Float RTK
        "5" => FloatRtk,
        /// 6 - Estimated (dead reckoning)
        "6" => Estimated,
        /// 7 - Manual input mode
        "7" => Manual,
        /// 8 - Simulation mode
        "8" => Simulation,
    }
}

nmea_enum! {
    /// Selection Mode
    pub enum SelectionMode {
        /// A - Automatic, 2D/3D
        #[default]
        "A" => Automatic,
        /// M - Manual, forced to operate in 2D or 3D
        "M" => Manual,
    }
}

nmea_enum! {
    /// Fix Mode
    pub enum FixMode {
        /// 1 - No fix
        #[default]
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

/// Satellite information used in [`GSV`] sentences
///
/// Every field is optional; receivers leave any of them empty for satellites they
/// are not tracking.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Satellite {
    /// Satellite ID, above 255 for the extended ranges of newer constellations
    pub prn: Option<u16>,
    /// Elevation in degrees, 0-90
    pub elevation: Option<u8>,
    /// Azimuth in degrees from true north, 0-359
    pub azimuth: Option<u16>,
    /// Signal to noise ratio in dB-Hz, 0-99
    pub snr: Option<u8>,
}

impl Satellite {
    /// Reads the four fields starting at `offset`.
    pub(crate) fn decode(tokens: &[&str], offset: usize) -> Result<Self> {
        Ok(Self {
            prn: optional_field(tokens, offset)?,
            elevation: optional_field(tokens, offset + 1)?,
            azimuth: optional_field(tokens, offset + 2)?,
            snr: optional_field(tokens, offset + 3)?,
        })
    }

    pub(crate) fn encode(&self, fields: &mut Vec<String>) {
        fields.push(self.prn.map_or_else(String::new, |prn| format!("{prn:02}")));
        fields.push(self.elevation.map_or_else(String::new, |e| format!("{e:02}")));
        fields.push(self.azimuth.map_or_else(String::new, |a| format!("{a:03}")));
        fields.push(self.snr.map_or_else(String::new, |snr| format!("{snr:02}")));
    }
}
