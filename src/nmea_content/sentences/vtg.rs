#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        NmeaMessage, SentenceKind,
        parse::{data_type, format_optional, nullable_field, text_field},
    },
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///         1  2  3  4  5  6  7  8 9
///         |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct VTG {
    pub data_type: String,
    /// Course over ground, degrees true
    pub true_track: Option<f32>,
    /// Course over ground, degrees magnetic
    pub magnetic_track: Option<f32>,
    pub speed_knots: Option<f32>,
    pub speed_kph: Option<f32>,
    /// Field 9 as received, the NMEA 2.3 mode indicator
    pub extra_field: Option<String>,
}

impl Default for VTG {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::VTG.default_tag().to_owned(),
            true_track: None,
            magnetic_track: None,
            speed_knots: None,
            speed_kph: None,
            extra_field: None,
        }
    }
}

impl NmeaMessage for VTG {
    const KIND: SentenceKind = SentenceKind::VTG;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            true_track: nullable_field(tokens, 1)?,
            magnetic_track: nullable_field(tokens, 3)?,
            speed_knots: nullable_field(tokens, 5)?,
            speed_kph: nullable_field(tokens, 7)?,
            extra_field: text_field(tokens, 9),
        })
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![
            self.data_type.clone(),
            format_optional(self.true_track, |track| track.to_string()),
            "T".to_owned(),
            format_optional(self.magnetic_track, |track| track.to_string()),
            "M".to_owned(),
            format_optional(self.speed_knots, |speed| speed.to_string()),
            "N".to_owned(),
            format_optional(self.speed_kph, |speed| speed.to_string()),
            "K".to_owned(),
        ];
        fields.extend(self.extra_field.clone());
        fields
    }
}
