#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        NmeaMessage, SentenceKind,
        parse::{data_type, field, format_time, optional_field},
    },
};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///         1         2 3 4 5 6 7 8
///         |         | | | | | | |
///  $--GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Standard deviations are in meters, the orientation in degrees from true north.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GST {
    pub data_type: String,
    /// UTC time of the associated position fix
    pub fix_time: Option<time::Time>,
    /// RMS value of the standard deviation of the range inputs
    pub rms_deviation: f32,
    pub semi_major_deviation: f32,
    pub semi_minor_deviation: f32,
    /// Orientation of the semi-major axis of the error ellipse
    pub semi_major_orientation: f32,
    pub latitude_error_deviation: f32,
    pub longitude_error_deviation: f32,
    pub altitude_error_deviation: f32,
}

impl Default for GST {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::GST.default_tag().to_owned(),
            fix_time: None,
            rms_deviation: 0.0,
            semi_major_deviation: 0.0,
            semi_minor_deviation: 0.0,
            semi_major_orientation: 0.0,
            latitude_error_deviation: 0.0,
            longitude_error_deviation: 0.0,
            altitude_error_deviation: 0.0,
        }
    }
}

impl NmeaMessage for GST {
    const KIND: SentenceKind = SentenceKind::GST;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            fix_time: optional_field(tokens, 1)?,
            rms_deviation: field(tokens, 2)?,
            semi_major_deviation: field(tokens, 3)?,
            semi_minor_deviation: field(tokens, 4)?,
            semi_major_orientation: field(tokens, 5)?,
            latitude_error_deviation: field(tokens, 6)?,
            longitude_error_deviation: field(tokens, 7)?,
            altitude_error_deviation: field(tokens, 8)?,
        })
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.data_type.clone(),
            format_time(self.fix_time),
            format!("{:.2}", self.rms_deviation),
            format!("{:.2}", self.semi_major_deviation),
            format!("{:.2}", self.semi_minor_deviation),
            format!("{:.4}", self.semi_major_orientation),
            format!("{:.2}", self.latitude_error_deviation),
            format!("{:.2}", self.longitude_error_deviation),
            format!("{:.2}", self.altitude_error_deviation),
        ]
    }
}
