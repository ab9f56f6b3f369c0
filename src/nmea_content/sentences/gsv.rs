#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    nmea_content::{
        NmeaMessage, Satellite, SentenceKind,
        parse::{data_type, field, token},
    },
};

/// Satellites carried by a single GSV sentence.
pub const GSV_SATELLITE_SLOTS: usize = 4;

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Each sentence is decoded on its own; a group of `total_messages` sentences is
/// not reassembled.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSV {
    pub data_type: String,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_messages: u8,
    /// Sentence number of this GSV message within current group
    pub message_number: u8,
    /// Total number of satellites in view
    pub satellites_in_view: u8,
    /// Satellite information
    pub satellites: heapless::Vec<Satellite, GSV_SATELLITE_SLOTS>,
    /// NMEA 4.11 signal ID, a single hex digit after the last satellite
    pub signal_id: Option<u8>,
}

impl Default for GSV {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::GSV.default_tag().to_owned(),
            total_messages: 0,
            message_number: 0,
            satellites_in_view: 0,
            satellites: heapless::Vec::new(),
            signal_id: None,
        }
    }
}

impl NmeaMessage for GSV {
    const KIND: SentenceKind = SentenceKind::GSV;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        let mut gsv = Self {
            data_type: data_type(Self::KIND, tokens)?,
            total_messages: field(tokens, 1)?,
            message_number: field(tokens, 2)?,
            satellites_in_view: field(tokens, 3)?,
            ..Self::default()
        };

        let mut offset = 4;
        while offset + 4 <= tokens.len() && !gsv.satellites.is_full() {
            // capacity checked by the loop condition
            let _ = gsv.satellites.push(Satellite::decode(tokens, offset)?);
            offset += 4;
        }

        if tokens.len() == offset + 1 {
            let id = token(tokens, offset)?;
            gsv.signal_id = match id.trim() {
                "" => None,
                digit => Some(parse_signal_id(digit).ok_or_else(|| Error::InvalidField {
                    index: offset,
                    value: id.to_owned(),
                })?),
            };
        }

        Ok(gsv)
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![
            self.data_type.clone(),
            self.total_messages.to_string(),
            self.message_number.to_string(),
            self.satellites_in_view.to_string(),
        ];
        for satellite in &self.satellites {
            satellite.encode(&mut fields);
        }
        if let Some(id) = self.signal_id {
            fields.push(format!("{id:X}"));
        }
        fields
    }
}

fn parse_signal_id(digit: &str) -> Option<u8> {
    match digit.as_bytes() {
        [b] if b.is_ascii_hexdigit() => (*b as char).to_digit(16).map(|id| id as u8),
        _ => None,
    }
}
