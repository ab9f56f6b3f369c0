use nom::{IResult, Parser, combinator::all_consuming};

/// Trait for parsing values out of a single NMEA 0183 field.
///
/// Fields arrive already split on commas, so an implementation only has to
/// recognize one value. [`NmeaParse::from_token`] runs the parser over a whole
/// token and rejects anything left over, which is how the sentence decoders
/// call it.
///
/// # Examples
///
/// ```rust
/// use nmea0183_receiver::NmeaParse;
/// use nom::IResult;
///
/// let result: IResult<_, _> = u8::parse("42,");
/// assert_eq!(result, Ok((",", 42)));
///
/// assert_eq!(u8::from_token("42"), Some(42));
/// assert_eq!(u8::from_token("42x"), None);
/// assert_eq!(f32::from_token("1.03"), Some(1.03));
/// ```
///
/// # Implementing for Custom Types
///
/// ```rust
/// use nmea0183_receiver::NmeaParse;
/// use nom::{IResult, Parser, character::complete::char};
///
/// struct Unit(char);
///
/// impl NmeaParse for Unit {
///     fn parse(i: &str) -> IResult<&str, Self> {
///         char('M').map(Unit).parse(i)
///     }
/// }
///
/// assert!(Unit::from_token("M").is_some());
/// assert!(Unit::from_token("K").is_none());
/// ```
pub trait NmeaParse: Sized {
    /// Parses a value from the start of `i`, returning the rest of the input.
    fn parse(i: &str) -> IResult<&str, Self>;

    /// Parses a complete token, failing if any input remains.
    fn from_token(token: &str) -> Option<Self> {
        all_consuming(Self::parse)
            .parse(token)
            .ok()
            .map(|(_, value)| value)
    }
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl NmeaParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::character::complete::$t(i)
            }
        }
    )*)
}

impl_ints_type!(u8, u16, u32, i32);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl NmeaParse for $t {
            fn parse(i: &str) -> IResult<&str, Self> {
                nom::number::complete::$p(i)
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);
