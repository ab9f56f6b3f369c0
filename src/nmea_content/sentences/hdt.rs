#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        NmeaMessage, SentenceKind,
        parse::{data_type, field},
    },
};

/// HDT - Heading - True
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdt_heading_true>
///
/// ```text
///         1   2
///         |   |
///  $--HDT,x.x,T*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HDT {
    pub data_type: String,
    /// Heading in degrees, true
    pub heading: f32,
}

impl Default for HDT {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::HDT.default_tag().to_owned(),
            heading: 0.0,
        }
    }
}

impl NmeaMessage for HDT {
    const KIND: SentenceKind = SentenceKind::HDT;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            heading: field(tokens, 1)?,
        })
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.data_type.clone(),
            self.heading.to_string(),
            "T".to_owned(),
        ]
    }
}
