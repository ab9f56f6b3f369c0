#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    nmea_content::{
        FixMode, NmeaMessage, SelectionMode, SentenceKind,
        parse::{code_field, data_type, field, format_optional, optional_field},
    },
};

/// Number of PRN slots in every GSA sentence.
pub const GSA_PRN_SLOTS: usize = 12;

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GSA {
    /// Talker and sentence type, `GPGSA` unless decoded from another talker
    pub data_type: String,
    /// Selection mode
    pub selection_mode: SelectionMode,
    /// Fix mode
    pub fix_mode: FixMode,
    /// PRNs of the satellites used for the fix, one per slot
    pub fix_sats_prn: [Option<u16>; GSA_PRN_SLOTS],
    /// Dilution of precision
    pub pdop: f32,
    /// Horizontal dilution of precision
    pub hdop: f32,
    /// Vertical dilution of precision
    pub vdop: f32,
}

impl Default for GSA {
    fn default() -> Self {
        Self {
            data_type: SentenceKind::GSA.default_tag().to_owned(),
            selection_mode: SelectionMode::default(),
            fix_mode: FixMode::default(),
            fix_sats_prn: [None; GSA_PRN_SLOTS],
            pdop: 99.0,
            hdop: 99.0,
            vdop: 99.0,
        }
    }
}

impl GSA {
    /// PRNs of the occupied slots, in slot order.
    pub fn active_prns(&self) -> impl Iterator<Item = u16> + '_ {
        self.fix_sats_prn.iter().flatten().copied()
    }
}

impl NmeaMessage for GSA {
    const KIND: SentenceKind = SentenceKind::GSA;

    fn data_type(&self) -> &str {
        &self.data_type
    }

    fn decode(tokens: &[&str]) -> Result<Self> {
        let mut fix_sats_prn = [None; GSA_PRN_SLOTS];
        for (slot, prn) in fix_sats_prn.iter_mut().enumerate() {
            *prn = optional_field(tokens, 3 + slot)?;
        }

        Ok(Self {
            data_type: data_type(Self::KIND, tokens)?,
            selection_mode: code_field(tokens, 1, SelectionMode::from_code)?,
            fix_mode: code_field(tokens, 2, FixMode::from_code)?,
            fix_sats_prn,
            pdop: field(tokens, 15)?,
            hdop: field(tokens, 16)?,
            vdop: field(tokens, 17)?,
        })
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![
            self.data_type.clone(),
            self.selection_mode.code().to_owned(),
            self.fix_mode.code().to_owned(),
        ];
        fields.extend(
            self.fix_sats_prn
                .iter()
                .map(|prn| format_optional(*prn, |prn| format!("{prn:02}"))),
        );
        fields.extend([
            format!("{:.2}", self.pdop),
            format!("{:.2}", self.hdop),
            format!("{:.2}", self.vdop),
        ]);
        fields
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::Error;

    #[test]
    fn test_gsa_decode() {
        let payload = "GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38";
        let tokens: Vec<_> = payload.split(',').collect();
        let gsa = GSA::decode(&tokens).unwrap();

        assert_eq!(gsa.selection_mode, SelectionMode::Automatic);
        assert_eq!(gsa.fix_mode, FixMode::Fix3D);
        assert_eq!(
            gsa.active_prns().collect::<Vec<_>>(),
            [10, 7, 5, 2, 29, 4, 8, 13]
        );
        assert_eq!(gsa.fix_sats_prn[8], None);
        assert_eq!((gsa.pdop, gsa.hdop, gsa.vdop), (1.72, 1.03, 1.38));

        assert_eq!(gsa.payload(), payload);
        assert_eq!(gsa.checksum(), 0x0A);
    }

    #[test]
    fn test_gsa_trailing_system_id() {
        let payload = "GNGSA,M,2,,,,,,,,,,,,,2.5,1.3,2.1,1";
        let tokens: Vec<_> = payload.split(',').collect();
        let gsa = GSA::decode(&tokens).unwrap();

        assert_eq!(gsa.data_type, "GNGSA");
        assert_eq!(gsa.selection_mode, SelectionMode::Manual);
        assert_eq!(gsa.fix_mode, FixMode::Fix2D);
        assert_eq!(gsa.active_prns().count(), 0);
        assert_eq!(gsa.payload(), "GNGSA,M,2,,,,,,,,,,,,,2.50,1.30,2.10");
    }

    #[test]
    fn test_gsa_errors() {
        let decode = |payload: &str| GSA::decode(&payload.split(',').collect::<Vec<_>>());

        assert_matches!(
            decode("GPGSA,X,3,10,,,,,,,,,,,,1.72,1.03,1.38"),
            Err(Error::UnsupportedEnumValue { kind: "SelectionMode", .. })
        );
        assert_matches!(
            decode("GPGSA,A,4,10,,,,,,,,,,,,1.72,1.03,1.38"),
            Err(Error::UnsupportedEnumValue { kind: "FixMode", .. })
        );
        assert_matches!(
            decode("GPGSA,A,3,10,,,,,,,,,,,,1.72,1.03"),
            Err(Error::MissingField { index: 17 })
        );
        assert_matches!(
            decode("GPGSA,A,3,1O,,,,,,,,,,,,1.72,1.03,1.38"),
            Err(Error::InvalidField { index: 3, .. })
        );
    }

    #[test]
    fn test_gsa_default() {
        let gsa = GSA::default();
        assert_eq!(gsa.payload(), "GPGSA,A,1,,,,,,,,,,,,,99.00,99.00,99.00");
    }
}
