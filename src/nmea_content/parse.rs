use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    combinator::map_res,
    error::{ErrorKind, make_error},
};

use crate::{
    Error, NmeaParse, Result,
    geo::{AngleFormat, FormatStyle, GeoAngle},
    nmea_content::SentenceKind,
};

/// Returns token 0 if it names `kind`.
pub(crate) fn data_type(kind: SentenceKind, tokens: &[&str]) -> Result<String> {
    let tag = token(tokens, 0)?;
    match SentenceKind::from_tag(tag) {
        Some(found) if found == kind => Ok(tag.to_owned()),
        _ => Err(Error::UnexpectedSentence {
            expected: kind.as_str(),
            found: tag.to_owned(),
        }),
    }
}

pub(crate) fn token<'a>(tokens: &[&'a str], index: usize) -> Result<&'a str> {
    tokens
        .get(index)
        .copied()
        .ok_or(Error::MissingField { index })
}

fn invalid(index: usize, token: &str) -> Error {
    Error::InvalidField {
        index,
        value: token.to_owned(),
    }
}

/// A field that must be present and non-empty.
pub(crate) fn field<T: NmeaParse>(tokens: &[&str], index: usize) -> Result<T> {
    let token = token(tokens, index)?;
    T::from_token(token.trim()).ok_or_else(|| invalid(index, token))
}

/// A field that may be empty or missing altogether.
pub(crate) fn optional_field<T: NmeaParse>(tokens: &[&str], index: usize) -> Result<Option<T>> {
    match tokens.get(index).map(|token| token.trim()) {
        None | Some("") => Ok(None),
        Some(token) => T::from_token(token)
            .map(Some)
            .ok_or_else(|| invalid(index, token)),
    }
}

/// A field that must be present but may be empty, as receivers without a fix send it.
pub(crate) fn nullable_field<T: NmeaParse>(tokens: &[&str], index: usize) -> Result<Option<T>> {
    token(tokens, index)?;
    optional_field(tokens, index)
}

/// An enumerated field, looked up through its code table.
pub(crate) fn code_field<T>(
    tokens: &[&str],
    index: usize,
    from_code: impl FnOnce(&str) -> Result<T>,
) -> Result<T> {
    from_code(token(tokens, index)?)
}

/// Free text, empty meaning absent.
pub(crate) fn text_field(tokens: &[&str], index: usize) -> Option<String> {
    tokens
        .get(index)
        .filter(|token| !token.is_empty())
        .map(|token| (*token).to_owned())
}

/// A Compact DMM value at `index` with its hemisphere letter at `index + 1`.
///
/// Both empty means no fix.
pub(crate) fn position<A: GeoAngle>(tokens: &[&str], index: usize) -> Result<Option<A>> {
    let value = token(tokens, index)?.trim();
    let hemisphere = token(tokens, index + 1)?.trim();

    if value.is_empty() && hemisphere.is_empty() {
        return Ok(None);
    }

    A::parse(
        &format!("{value},{hemisphere}"),
        AngleFormat::Dmm,
        FormatStyle::Compact,
    )
    .map(Some)
}

pub(crate) fn push_position<A: GeoAngle>(fields: &mut Vec<String>, angle: Option<&A>) {
    let text = angle.map(|angle| angle.format(AngleFormat::Dmm, FormatStyle::Compact));
    match text.as_deref().and_then(|text| text.split_once(',')) {
        Some((value, hemisphere)) => {
            fields.push(value.to_owned());
            fields.push(hemisphere.to_owned());
        }
        None => {
            fields.push(String::new());
            fields.push(String::new());
        }
    }
}

pub(crate) fn format_time(time: Option<time::Time>) -> String {
    time.map_or_else(String::new, |time| {
        format!(
            "{:02}{:02}{:02}.{:03}",
            time.hour(),
            time.minute(),
            time.second(),
            time.millisecond()
        )
    })
}

pub(crate) fn format_date(date: Option<time::Date>) -> String {
    date.map_or_else(String::new, |date| {
        format!(
            "{:02}{:02}{:02}",
            date.day(),
            u8::from(date.month()),
            date.year().rem_euclid(100)
        )
    })
}

/// Formats an optional value, empty when absent.
pub(crate) fn format_optional<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map_or_else(String::new, format)
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        str::parse::<u8>,
    )
    .parse(i)
}

/// `hhmmss` with optional fractional seconds, rounded to the millisecond.
impl NmeaParse for time::Time {
    fn parse(i: &str) -> IResult<&str, Self> {
        let start = i;
        let (i, hour) = two_digits(i)?;
        let (i, minute) = two_digits(i)?;
        let (i, second) = f64::parse(i)?;

        if !(0.0..60.0).contains(&second) {
            return Err(nom::Err::Error(make_error(start, ErrorKind::Verify)));
        }

        let whole = second.trunc();
        let milliseconds = ((second - whole) * 1000.0).round().min(999.0);

        let time = time::Time::from_hms_milli(hour, minute, whole as u8, milliseconds as u16)
            .or(Err(nom::Err::Error(make_error(start, ErrorKind::Verify))))?;

        Ok((i, time))
    }
}

/// `ddmmyy`. Years 83 to 99 fall in the 1900s, everything else in the 2000s.
impl NmeaParse for time::Date {
    fn parse(i: &str) -> IResult<&str, Self> {
        let start = i;
        let (i, day) = two_digits(i)?;
        let (i, month) = two_digits(i)?;
        let (i, year) = two_digits(i)?;

        let month = time::Month::try_from(month)
            .or(Err(nom::Err::Error(make_error(start, ErrorKind::Verify))))?;

        let year = match year {
            83..=99 => 1900 + i32::from(year),
            _ => 2000 + i32::from(year),
        };

        let date = time::Date::from_calendar_date(year, month, day)
            .or(Err(nom::Err::Error(make_error(start, ErrorKind::Verify))))?;

        Ok((i, date))
    }
}
