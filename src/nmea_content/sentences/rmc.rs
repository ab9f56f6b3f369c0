#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    geo::{Latitude, Longitude},
    nmea_content::{
        NmeaMessage, SentenceKind, Status,
        parse::{
            code_field, data_type, format_date, format_optional, format_time, nullable_field,
            optional_field, position, push_position, text_field, token,
        },
    },
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 appends a mode indicator, kept verbatim in [`RMC::extra_field`]:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct RMC {
    pub data_type: String,
    /// Fix time in UTC
    pub fix_time: Option<time::Time>,
    /// Fix date in UTC
    pub fix_date: Option<time::Date>,
    /// Status Mode Indicator
    pub status: Status,
    pub latitude: Option<Latitude>,
    pub longitude: Option<Longitude>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f32>,
    /// Course over ground in degrees, true
    pub course_over_ground: Option<f32>,
    /// Magnetic variation in degrees, negative to the west
    pub magnetic_variation: Option<f32>,
    /// Field 12 as received, usually the FAA mode indicator
    pub extra_field: Option<String>,
}

impl Default for RMC {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::RMC.default_tag().to_owned(),
            fix_time: None,
            fix_date: None,
            status: Status::default(),
            latitude: None,
            longitude: None,
            speed_over_ground: None,
            course_over_ground: None,
            magnetic_variation: None,
            extra_field: None,
        }
    }
}

impl RMC {
    /// Fix date and time combined, when both are present.
    pub fn date_time(&self) -> Option<time::PrimitiveDateTime> {
        Some(time::PrimitiveDateTime::new(self.fix_date?, self.fix_time?))
    }
}

fn magnetic_variation(tokens: &[&str]) -> Result<Option<f32>> {
    let Some(value) = optional_field::<f32>(tokens, 10)? else {
        return Ok(None);
    };

    match tokens.get(11).map(|direction| direction.trim()) {
        Some("W" | "w") => Ok(Some(-value)),
        Some("E" | "e" | "") | None => Ok(Some(value)),
        Some(_) => Err(Error::InvalidField {
            index: 11,
            value: token(tokens, 11)?.to_owned(),
        }),
    }
}

impl NmeaMessage for RMC {
    const KIND: SentenceKind = SentenceKind::RMC;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            fix_time: optional_field(tokens, 1)?,
            status: code_field(tokens, 2, Status::from_code)?,
            latitude: position(tokens, 3)?,
            longitude: position(tokens, 5)?,
            speed_over_ground: nullable_field(tokens, 7)?,
            course_over_ground: nullable_field(tokens, 8)?,
            fix_date: optional_field(tokens, 9)?,
            magnetic_variation: magnetic_variation(tokens)?,
            extra_field: text_field(tokens, 12),
        })
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![
            self.data_type.clone(),
            format_time(self.fix_time),
            self.status.code().to_owned(),
        ];
        push_position(&mut fields, self.latitude.as_ref());
        push_position(&mut fields, self.longitude.as_ref());
        fields.extend([
            format_optional(self.speed_over_ground, |speed| format!("{speed:.2}")),
            format_optional(self.course_over_ground, |course| format!("{course:.2}")),
            format_date(self.fix_date),
        ]);

        match self.magnetic_variation {
            Some(variation) => fields.extend([
                format!("{:.1}", variation.abs()),
                if variation < 0.0 { "W" } else { "E" }.to_owned(),
            ]),
            None => fields.extend([String::new(), String::new()]),
        }

        if let Some(extra) = &self.extra_field {
            fields.push(extra.clone());
        }

        fields
    }
}
