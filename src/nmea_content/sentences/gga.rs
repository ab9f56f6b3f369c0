#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    geo::{Latitude, Longitude},
    nmea_content::{
        FixQuality, NmeaMessage, SentenceKind,
        parse::{
            code_field, data_type, field, format_optional, format_time, nullable_field,
            optional_field, position, push_position,
        },
    },
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GGA {
    /// Talker and sentence type, `GPGGA` unless decoded from another talker
    pub data_type: String,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    pub latitude: Option<Latitude>,
    pub longitude: Option<Longitude>,
    /// GPS Quality Indicator
    pub fix_quality: FixQuality,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal Dilution of Precision
    pub hdop: f32,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// Geoidal separation in meters, negative when the geoid is below the WGS-84 ellipsoid
    pub geoidal_separation: Option<f32>,
    /// Age of differential GPS data in seconds, absent when DGPS is not used
    pub dgps_age: Option<f32>,
    /// Differential reference station ID
    pub dgps_station_id: Option<u16>,
}

impl Default for GGA {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::GGA.default_tag().to_owned(),
            fix_time: None,
            latitude: None,
            longitude: None,
            fix_quality: FixQuality::Invalid,
            satellite_count: 0,
            hdop: 99.0,
            altitude: None,
            geoidal_separation: None,
            dgps_age: None,
            dgps_station_id: None,
        }
    }
}

impl NmeaMessage for GGA {
    const KIND: SentenceKind = SentenceKind::GGA;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            fix_time: optional_field(tokens, 1)?,
            latitude: position(tokens, 2)?,
            longitude: position(tokens, 4)?,
            fix_quality: code_field(tokens, 6, FixQuality::from_code)?,
            satellite_count: field(tokens, 7)?,
            hdop: field(tokens, 8)?,
            altitude: nullable_field(tokens, 9)?,
            geoidal_separation: nullable_field(tokens, 11)?,
            dgps_age: optional_field(tokens, 13)?,
            dgps_station_id: optional_field(tokens, 14)?,
        })
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![self.data_type.clone(), format_time(self.fix_time)];
        push_position(&mut fields, self.latitude.as_ref());
        push_position(&mut fields, self.longitude.as_ref());
        fields.extend([
            self.fix_quality.code().to_owned(),
            self.satellite_count.to_string(),
            format!("{:.2}", self.hdop),
            format_optional(self.altitude, |altitude| format!("{altitude:.1}")),
            "M".to_owned(),
            format_optional(self.geoidal_separation, |separation| format!("{separation:.1}")),
            "M".to_owned(),
            format_optional(self.dgps_age, |age| format!("{age:.1}")),
            format_optional(self.dgps_station_id, |id| format!("{id:04}")),
        ]);
        fields
    }
}
