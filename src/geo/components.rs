use crate::{Error, NmeaParse, Result, geo::FormatStyle};

/// Separators between the numeric parts of a ShowUnits angle.
const DELIMITERS: [char; 5] = [',', ' ', '\'', '"', '°'];

fn format_error(input: &str) -> Error {
    Error::GeoAngleFormat(input.to_owned())
}

/// Sign of a decimal-degree value, with zero mapping to 0.
fn signum(degrees: f64) -> i8 {
    if degrees > 0.0 {
        1
    } else if degrees < 0.0 {
        -1
    } else {
        0
    }
}

fn hemisphere_sign(token: &str, input: &str) -> Result<i8> {
    match token.trim() {
        "N" | "n" | "E" | "e" => Ok(1),
        "S" | "s" | "W" | "w" => Ok(-1),
        _ => Err(format_error(input)),
    }
}

/// Splits a Compact `value,hemisphere` pair into the unsigned value and the sign.
fn split_compact(input: &str) -> Result<(f64, i8)> {
    let (value, hemisphere) = input.split_once(',').ok_or_else(|| format_error(input))?;
    let value = f64::from_token(value.trim())
        .filter(|value| value.is_sign_positive())
        .ok_or_else(|| format_error(input))?;

    Ok((value, hemisphere_sign(hemisphere, input)?))
}

fn split_show_units(input: &str) -> Vec<&str> {
    input
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Signed whole degrees of a ShowUnits angle. A leading minus carries the sign,
/// so `-0` is still negative.
fn signed_degrees(token: &str, input: &str) -> Result<(i8, u32)> {
    let degrees = i32::from_token(token).ok_or_else(|| format_error(input))?;
    let sign = if token.starts_with('-') { -1 } else { 1 };
    Ok((sign, degrees.unsigned_abs()))
}

/// Degrees and decimal minutes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DmmComponents {
    /// -1, 0 or 1
    pub sign: i8,
    pub whole_degrees: u32,
    /// In `[0, 60)`
    pub decimal_minutes: f64,
}

impl DmmComponents {
    pub fn from_degrees(degrees: f64) -> Self {
        let magnitude = degrees.abs();
        let whole = magnitude.floor();

        Self {
            sign: signum(degrees),
            whole_degrees: whole as u32,
            decimal_minutes: (magnitude - whole) * 60.0,
        }
    }

    pub fn to_degrees(&self) -> f64 {
        f64::from(self.sign) * (f64::from(self.whole_degrees) + self.decimal_minutes / 60.0)
    }

    /// Parses `dddmm.mmmm,H` (Compact) or `-ddd° mm.mmmm'` (ShowUnits).
    pub fn parse(input: &str, style: FormatStyle) -> Result<Self> {
        match style {
            FormatStyle::Compact => {
                let (value, sign) = split_compact(input)?;
                let whole = (value / 100.0).floor();

                Ok(Self {
                    sign,
                    whole_degrees: whole as u32,
                    decimal_minutes: value - whole * 100.0,
                })
            }
            FormatStyle::ShowUnits => {
                let [degrees, minutes] = split_show_units(input)[..] else {
                    return Err(format_error(input));
                };
                let (sign, whole_degrees) = signed_degrees(degrees, input)?;
                let decimal_minutes = f64::from_token(minutes).ok_or_else(|| format_error(input))?;

                Ok(Self {
                    sign,
                    whole_degrees,
                    decimal_minutes,
                })
            }
        }
    }
}

/// Degrees, whole minutes and decimal seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DmsComponents {
    /// -1, 0 or 1
    pub sign: i8,
    pub whole_degrees: u32,
    /// In `[0, 60)`
    pub whole_minutes: u32,
    /// In `[0, 60)`
    pub decimal_seconds: f64,
}

impl DmsComponents {
    pub fn from_degrees(degrees: f64) -> Self {
        DmmComponents::from_degrees(degrees).into()
    }

    pub fn to_degrees(&self) -> f64 {
        f64::from(self.sign)
            * (f64::from(self.whole_degrees)
                + f64::from(self.whole_minutes) / 60.0
                + self.decimal_seconds / 3600.0)
    }

    /// Parses `dddmmss.ssss,H` (Compact), or `ddd° mm' ss.ssss" H` (ShowUnits)
    /// where the trailing hemisphere letter may be replaced by a minus on the degrees.
    pub fn parse(input: &str, style: FormatStyle) -> Result<Self> {
        match style {
            FormatStyle::Compact => {
                let (value, sign) = split_compact(input)?;
                let whole_degrees = (value / 10_000.0).floor();
                let minutes = value - whole_degrees * 10_000.0;
                let whole_minutes = (minutes / 100.0).floor();

                Ok(Self {
                    sign,
                    whole_degrees: whole_degrees as u32,
                    whole_minutes: whole_minutes as u32,
                    decimal_seconds: minutes - whole_minutes * 100.0,
                })
            }
            FormatStyle::ShowUnits => {
                let tokens = split_show_units(input);
                let (degrees, minutes, seconds, hemisphere) = match tokens[..] {
                    [d, m, s] => (d, m, s, None),
                    [d, m, s, h] => (d, m, s, Some(h)),
                    _ => return Err(format_error(input)),
                };

                let (mut sign, whole_degrees) = signed_degrees(degrees, input)?;
                if let Some(hemisphere) = hemisphere {
                    sign = hemisphere_sign(hemisphere, input)?;
                }

                Ok(Self {
                    sign,
                    whole_degrees,
                    whole_minutes: u32::from_token(minutes).ok_or_else(|| format_error(input))?,
                    decimal_seconds: f64::from_token(seconds).ok_or_else(|| format_error(input))?,
                })
            }
        }
    }
}

impl From<DmmComponents> for DmsComponents {
    fn from(dmm: DmmComponents) -> Self {
        let whole_minutes = dmm.decimal_minutes.floor();

        Self {
            sign: dmm.sign,
            whole_degrees: dmm.whole_degrees,
            whole_minutes: whole_minutes as u32,
            decimal_seconds: (dmm.decimal_minutes - whole_minutes) * 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_dmm_from_degrees() {
        let dmm = DmmComponents::from_degrees(-149.9002778);
        assert_eq!(dmm.sign, -1);
        assert_eq!(dmm.whole_degrees, 149);
        assert!((dmm.decimal_minutes - 54.016668).abs() < 1e-6);

        assert_eq!(DmmComponents::from_degrees(0.0).sign, 0);
        assert_eq!(DmmComponents::default().sign, 0);
    }

    #[test]
    fn test_dmm_round_trip() {
        let mut degrees = -89.99;
        while degrees <= 90.0 {
            let back = DmmComponents::from_degrees(degrees).to_degrees();
            assert!((back - degrees).abs() < 1e-6, "{degrees} -> {back}");
            degrees += 0.737;
        }
    }

    #[test]
    fn test_dms_round_trip() {
        let mut degrees = -179.99;
        while degrees <= 180.0 {
            let back = DmsComponents::from_degrees(degrees).to_degrees();
            assert!((back - degrees).abs() < 1e-4, "{degrees} -> {back}");
            degrees += 1.113;
        }
    }

    #[test]
    fn test_dmm_parse() {
        let dmm = DmmComponents::parse("6113.083336,N", FormatStyle::Compact).unwrap();
        assert!((dmm.to_degrees() - 61.2180556).abs() < 1e-6);

        let dmm = DmmComponents::parse("5708.849490,n", FormatStyle::Compact).unwrap();
        assert!((dmm.to_degrees() - 57.1474915).abs() < 1e-6);

        let dmm = DmmComponents::parse("-31° 34.3101'", FormatStyle::ShowUnits).unwrap();
        assert_eq!((dmm.sign, dmm.whole_degrees), (-1, 31));

        let dmm = DmmComponents::parse("-0° 30.0000'", FormatStyle::ShowUnits).unwrap();
        assert_eq!(dmm.to_degrees(), -0.5);
    }

    #[test]
    fn test_dms_parse() {
        let dms = DmsComponents::parse("611305.0002,N", FormatStyle::Compact).unwrap();
        assert_eq!((dms.whole_degrees, dms.whole_minutes), (61, 13));
        assert!((dms.decimal_seconds - 5.0002).abs() < 1e-6);

        let dms = DmsComponents::parse("149° 54' 1.0001\" W", FormatStyle::ShowUnits).unwrap();
        assert_eq!(dms.sign, -1);
        assert!((dms.to_degrees() + 149.9002778).abs() < 1e-4);

        let dms = DmsComponents::parse("-4° 4' 58.5120\"", FormatStyle::ShowUnits).unwrap();
        assert_eq!(dms.sign, -1);
    }

    #[test]
    fn test_malformed_angles() {
        let cases = [
            ("61x13.083336;N", FormatStyle::Compact),
            ("6113.083336,X", FormatStyle::Compact),
            ("6113.083336", FormatStyle::Compact),
            ("-6113.083336,N", FormatStyle::Compact),
            ("61° 61° 13;083336'", FormatStyle::ShowUnits),
            ("61°", FormatStyle::ShowUnits),
        ];

        for (input, style) in cases {
            assert_matches!(
                DmmComponents::parse(input, style),
                Err(Error::GeoAngleFormat(s)) if s == input
            );
        }

        let cases = [
            ("611c305.0002;N", FormatStyle::Compact),
            ("61° 13' 13' 5.0002\" N", FormatStyle::ShowUnits),
            ("61° 13' 5.0002\" Q", FormatStyle::ShowUnits),
            ("61° 13'", FormatStyle::ShowUnits),
        ];

        for (input, style) in cases {
            assert_matches!(
                DmsComponents::parse(input, style),
                Err(Error::GeoAngleFormat(s)) if s == input
            );
        }
    }
}
