//! # Geographic Angles
//!
//! Latitude and longitude values stored as signed decimal degrees, with textual
//! conversion to and from the three forms found in NMEA sentences and user interfaces:
//!
//! | Form  | Compact (wire)   | ShowUnits (human)     |
//! |-------|------------------|-----------------------|
//! | DDD   | `-149.9002778`   | `-149.9002778°`       |
//! | DMM   | `14954.0167,W`   | `-149° 54.0167'`      |
//! | DMS   | `1495401.0001,W` | `149° 54' 1.0001" W`  |
//!
//! Compact forms carry the sign in a hemisphere letter. ShowUnits DMM carries it as a
//! minus on the degrees, while ShowUnits DMS uses a trailing letter again.

mod components;

use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

pub use components::{DmmComponents, DmsComponents};

use crate::{Error, NmeaParse, Result};

/// Textual representation of an angle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleFormat {
    /// Decimal degrees
    Ddd,
    /// Degrees and decimal minutes
    Dmm,
    /// Degrees, minutes and decimal seconds
    Dms,
}

/// Whether an angle is written for the wire or for a person.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Zero-padded digits with a hemisphere letter, as in NMEA fields
    #[default]
    Compact,
    /// Degree, minute and second symbols
    ShowUnits,
}

/// The axis an angle measures, which fixes its range, degree field width and
/// hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub const fn max_degrees(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    pub const fn max_radians(self) -> f64 {
        match self {
            Axis::Latitude => FRAC_PI_2,
            Axis::Longitude => PI,
        }
    }

    /// Digits of zero-padded whole degrees in Compact DMM and DMS.
    pub const fn degree_width(self) -> usize {
        match self {
            Axis::Latitude => 2,
            Axis::Longitude => 3,
        }
    }

    /// Letter for a sign of `-1`, or `0`/`1`.
    pub const fn hemisphere(self, sign: i8) -> char {
        match (self, sign < 0) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }

    fn range_error(self, degrees: f64) -> Error {
        Error::Range {
            degrees,
            min: -self.max_degrees(),
            max: self.max_degrees(),
        }
    }

    fn check_degrees(self, degrees: f64) -> Result<f64> {
        let max = self.max_degrees();
        if (-max..=max).contains(&degrees) {
            Ok(degrees)
        } else {
            Err(self.range_error(degrees))
        }
    }

    fn check_radians(self, radians: f64) -> Result<f64> {
        let max = self.max_radians();
        if (-max..=max).contains(&radians) {
            let limit = self.max_degrees();
            Ok(radians.to_degrees().clamp(-limit, limit))
        } else {
            Err(self.range_error(radians.to_degrees()))
        }
    }
}

/// Formats signed decimal degrees in any form and style.
///
/// No range check is applied; `axis` only selects the field width and hemisphere letters.
///
/// ```rust
/// use nmea0183_receiver::geo::{AngleFormat, Axis, FormatStyle, format_degrees};
///
/// let lat = format_degrees(-31.5718352, Axis::Latitude, AngleFormat::Dmm, FormatStyle::Compact);
/// assert_eq!(lat, "3134.3101,S");
/// ```
pub fn format_degrees(degrees: f64, axis: Axis, format: AngleFormat, style: FormatStyle) -> String {
    let width = axis.degree_width();

    match (format, style) {
        (AngleFormat::Ddd, FormatStyle::Compact) => format!("{degrees:.7}"),
        (AngleFormat::Ddd, FormatStyle::ShowUnits) => format!("{degrees:.7}°"),
        (AngleFormat::Dmm, FormatStyle::Compact) => {
            let dmm = DmmComponents::from_degrees(degrees);
            format!(
                "{:0width$}{:07.4},{}",
                dmm.whole_degrees,
                dmm.decimal_minutes,
                axis.hemisphere(dmm.sign),
            )
        }
        (AngleFormat::Dmm, FormatStyle::ShowUnits) => {
            let dmm = DmmComponents::from_degrees(degrees);
            let minus = if dmm.sign < 0 { "-" } else { "" };
            format!("{minus}{}° {:.4}'", dmm.whole_degrees, dmm.decimal_minutes)
        }
        (AngleFormat::Dms, FormatStyle::Compact) => {
            let dms = DmsComponents::from_degrees(degrees);
            format!(
                "{:0width$}{:02}{:07.4},{}",
                dms.whole_degrees,
                dms.whole_minutes,
                dms.decimal_seconds,
                axis.hemisphere(dms.sign),
            )
        }
        (AngleFormat::Dms, FormatStyle::ShowUnits) => {
            let dms = DmsComponents::from_degrees(degrees);
            format!(
                "{}° {}' {:.4}\" {}",
                dms.whole_degrees,
                dms.whole_minutes,
                dms.decimal_seconds,
                axis.hemisphere(dms.sign),
            )
        }
    }
}

/// Parses text produced by [`format_degrees`] back into signed decimal degrees.
///
/// Hemisphere letters are accepted in either case, and for either axis.
pub fn parse_degrees(input: &str, format: AngleFormat, style: FormatStyle) -> Result<f64> {
    match format {
        AngleFormat::Ddd => {
            let value = input.trim();
            let value = match style {
                FormatStyle::Compact => value,
                FormatStyle::ShowUnits => value.strip_suffix('°').unwrap_or(value).trim_end(),
            };
            f64::from_token(value).ok_or_else(|| Error::GeoAngleFormat(input.to_owned()))
        }
        AngleFormat::Dmm => DmmComponents::parse(input, style).map(|dmm| dmm.to_degrees()),
        AngleFormat::Dms => DmsComponents::parse(input, style).map(|dms| dms.to_degrees()),
    }
}

/// A range-checked angle on one [`Axis`].
///
/// Implemented by [`Latitude`] and [`Longitude`]. The value is always held in
/// decimal degrees, and every constructor or setter rejects values outside the
/// axis range with [`Error::Range`].
pub trait GeoAngle: Sized + Copy {
    /// The axis this angle measures
    const AXIS: Axis;

    /// Signed decimal degrees
    fn degrees(&self) -> f64;

    /// Builds an angle from decimal degrees.
    fn from_degrees(degrees: f64) -> Result<Self>;

    /// Builds an angle from radians.
    fn from_radians(radians: f64) -> Result<Self> {
        Self::from_degrees(Self::AXIS.check_radians(radians)?)
    }

    fn radians(&self) -> f64 {
        self.degrees().to_radians()
    }

    /// Replaces the value, leaving it untouched on error.
    fn set_degrees(&mut self, degrees: f64) -> Result<()> {
        *self = Self::from_degrees(degrees)?;
        Ok(())
    }

    /// Replaces the value, leaving it untouched on error.
    fn set_radians(&mut self, radians: f64) -> Result<()> {
        *self = Self::from_radians(radians)?;
        Ok(())
    }

    fn to_dmm(&self) -> DmmComponents {
        DmmComponents::from_degrees(self.degrees())
    }

    fn to_dms(&self) -> DmsComponents {
        DmsComponents::from_degrees(self.degrees())
    }

    fn format(&self, format: AngleFormat, style: FormatStyle) -> String {
        format_degrees(self.degrees(), Self::AXIS, format, style)
    }

    /// Parses and range-checks an angle.
    fn parse(input: &str, format: AngleFormat, style: FormatStyle) -> Result<Self> {
        Self::from_degrees(parse_degrees(input, format, style)?)
    }
}

macro_rules! geo_angle {
    (
        $(#[$meta:meta])*
        $name:ident => $axis:expr
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            /// Creates an angle from decimal degrees, rejecting out-of-range values.
            pub fn new(degrees: f64) -> Result<Self> {
                <Self as GeoAngle>::from_degrees(degrees)
            }
        }

        impl GeoAngle for $name {
            const AXIS: Axis = $axis;

            fn degrees(&self) -> f64 {
                self.0
            }

            fn from_degrees(degrees: f64) -> Result<Self> {
                Self::AXIS.check_degrees(degrees).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.format(AngleFormat::Ddd, FormatStyle::ShowUnits))
            }
        }
    };
}

geo_angle! {
    /// Latitude in decimal degrees, within `[-90, 90]`.
    ///
    /// ```rust
    /// use nmea0183_receiver::{AngleFormat, FormatStyle, GeoAngle, Latitude};
    ///
    /// let lat = Latitude::parse("6113.083336,N", AngleFormat::Dmm, FormatStyle::Compact)?;
    /// assert!((lat.degrees() - 61.2180556).abs() < 1e-6);
    /// assert_eq!(lat.format(AngleFormat::Dms, FormatStyle::ShowUnits), "61° 13' 5.0002\" N");
    ///
    /// assert!(Latitude::new(90.5).is_err());
    /// # Ok::<(), nmea0183_receiver::Error>(())
    /// ```
    Latitude => Axis::Latitude
}

geo_angle! {
    /// Longitude in decimal degrees, within `[-180, 180]`.
    Longitude => Axis::Longitude
}
