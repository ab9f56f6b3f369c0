//! # NMEA 0183 Receiver
//!
//! This library decodes a raw NMEA 0183 byte stream into strongly-typed sentences:
//! `$HHH,D1,D2,...,Dn*CC\r\n`
//!
//! The work is split in layers that can also be used on their own:
//! - [`Framer`] cuts candidate sentences out of arbitrarily chunked input
//! - [`Receiver`] validates framing and checksums, then dispatches to an [`NmeaHandler`]
//! - [`NmeaMessage`] types decode and encode the fields of GGA, GSA, GST, GSV, HDT, RMC
//!   and VTG sentences
//! - [`GeoAngle`] converts latitudes and longitudes between decimal degrees and the
//!   DMM/DMS notations
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_receiver::{GGA, NmeaHandler, RMC, Receiver};
//!
//! #[derive(Default)]
//! struct Navigator {
//!     altitude: Option<f32>,
//!     speed: Option<f32>,
//! }
//!
//! impl NmeaHandler for Navigator {
//!     fn on_gga(&mut self, sentence: GGA) {
//!         self.altitude = sentence.altitude;
//!     }
//!
//!     fn on_rmc(&mut self, sentence: RMC) {
//!         self.speed = sentence.speed_over_ground;
//!     }
//! }
//!
//! let mut receiver = Receiver::new(Navigator::default());
//!
//! // Chunks do not need to line up with sentences.
//! receiver.receive(b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n$GPR");
//! receiver.receive(b"MC,092750.000,A,5321.6802,N,00630.3372,W,0.02,31.66,280511,,,A*43\r\n");
//!
//! let navigator = receiver.handler();
//! assert_eq!(navigator.altitude, Some(61.7));
//! assert_eq!(navigator.speed, Some(0.02));
//! ```
//!
//! Sentences are encoded back to the wire with [`NmeaMessage::to_sentence`]:
//!
//! ```rust
//! use nmea0183_receiver::{HDT, NmeaMessage};
//!
//! let hdt = HDT {
//!     heading: 75.5664,
//!     ..HDT::default()
//! };
//! assert_eq!(hdt.to_sentence(), "$GPHDT,75.5664,T*36\r\n");
//! ```

pub mod error;
pub mod geo;
mod nmea0183;
mod nmea_content;
mod parse;
mod receiver;
mod stream;

pub use error::{Error, Result};
pub use geo::{
    AngleFormat, Axis, DmmComponents, DmsComponents, FormatStyle, GeoAngle, Latitude, Longitude,
};
pub use nmea_content::*;
pub use nmea0183::{
    FrameViolation, FramingMode, MIN_SENTENCE_LEN, checksum, format_checksum, parse_checksum,
    to_sentence,
};
pub use parse::NmeaParse;
pub use receiver::{CallbackHandler, NmeaHandler, Receiver, ReceiverBuilder};
pub use stream::{DEFAULT_CAPACITY, Framer, FramerState};
