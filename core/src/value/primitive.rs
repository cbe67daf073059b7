//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use crate::header::{Tag, VR};
use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;
use num_traits::NumCast;
use smallvec::SmallVec;
use snafu::{OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The kind of a primitive value, as reported in conversion errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// No data.
    Empty,
    /// One or more strings.
    Strs,
    /// A single string.
    Str,
    /// Attribute tags.
    Tags,
    /// Bytes.
    U8,
    /// Signed 16-bit integers.
    I16,
    /// Unsigned 16-bit integers.
    U16,
    /// Signed 32-bit integers.
    I32,
    /// Unsigned 32-bit integers.
    U32,
    /// Signed 64-bit integers.
    I64,
    /// Unsigned 64-bit integers.
    U64,
    /// Single precision floats.
    F32,
    /// Double precision floats.
    F64,
    /// A nested data set sequence.
    DataSetSequence,
    /// Encapsulated pixel data fragments.
    PixelSequence,
}

/// An error when converting a value into the requested form.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value is a sequence, not a primitive value.
    #[snafu(display("Cannot convert a non-primitive value into {}", requested))]
    NonPrimitive { requested: &'static str },
    /// The value kind cannot be converted into the requested form.
    #[snafu(display("Cannot convert {:?} value into {}", original, requested))]
    NotConvertible {
        requested: &'static str,
        original: ValueType,
    },
    /// The value holds no elements.
    #[snafu(display("Cannot convert an empty value into {}", requested))]
    EmptyValue { requested: &'static str },
    /// The integer string could not be parsed.
    #[snafu(display("Invalid integer `{}`", value))]
    ParseInteger {
        value: String,
        source: ParseIntError,
    },
    /// The decimal string could not be parsed.
    #[snafu(display("Invalid decimal `{}`", value))]
    ParseDecimal {
        value: String,
        source: ParseFloatError,
    },
    /// The number does not fit in the requested type.
    #[snafu(display("Number {} out of range for the requested type", value))]
    OutOfRange { value: String },
    /// The date string is not in the form `YYYYMMDD`.
    #[snafu(display("Invalid date `{}`", value))]
    ParseDate { value: String },
    /// The time string is not in the form `HH[MM[SS[.FFFFFF]]]`.
    #[snafu(display("Invalid time `{}`", value))]
    ParseTime { value: String },
}

impl ConvertValueError {
    /// Error for conversion attempts on sequence values.
    pub fn non_primitive(requested: &'static str) -> Self {
        ConvertValueError::NonPrimitive { requested }
    }
}

type Result<T, E = ConvertValueError> = std::result::Result<T, E>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// Textual values keep their individual components
/// (split at the backslash separator)
/// so that they can be re-encoded without loss.
///
/// # Example
///
/// ```
/// # use dicomkit_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Str("Smith^John".to_string()));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-lengthed values.
    Empty,

    /// A sequence of strings.
    /// Used for the multi-valued textual representations,
    /// such as AE, AS, CS, DA, DS, DT, IS, LO, PN, SH, TM, UC and UI.
    Strs(C<String>),

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// The value is a sequence of bytes.
    /// Used for OB and UN.
    U8(C<u8>),

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD and FD.
    F64(C<f64>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

/// Characters which are not significant at either end of a textual value.
fn is_padding(c: char) -> bool {
    c == ' ' || c == '\0'
}

fn int_from_str<T>(s: &str) -> Result<T>
where
    T: NumCast + FromStr<Err = ParseIntError>,
{
    let s = s.trim_matches(is_padding);
    // IS may carry an explicit plus sign, which `FromStr` does not accept
    // for unsigned targets
    let digits = s.strip_prefix('+').unwrap_or(s);
    digits.parse().context(ParseIntegerSnafu { value: s })
}

fn cast_num<N, T>(n: N) -> Result<T>
where
    N: NumCast + fmt::Display + Copy,
    T: NumCast,
{
    T::from(n).context(OutOfRangeSnafu {
        value: n.to_string(),
    })
}

fn float_from_str(s: &str) -> Result<f64> {
    let s = s.trim_matches(is_padding);
    s.parse().context(ParseDecimalSnafu { value: s })
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim_matches(is_padding);
    // legacy form YYYY.MM.DD is also accepted
    let digits: String = s.chars().filter(|c| *c != '.').collect();
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ParseDateSnafu { value: s }.fail();
    }
    let year: i32 = digits[0..4].parse().ok().context(ParseDateSnafu { value: s })?;
    let month: u32 = digits[4..6].parse().ok().context(ParseDateSnafu { value: s })?;
    let day: u32 = digits[6..8].parse().ok().context(ParseDateSnafu { value: s })?;
    NaiveDate::from_ymd_opt(year, month, day).context(ParseDateSnafu { value: s })
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim_matches(is_padding);
    let (main, frac) = match s.split_once('.') {
        Some((main, frac)) => (main, Some(frac)),
        None => (s, None),
    };
    let main: String = main.chars().filter(|c| *c != ':').collect();
    if main.is_empty() || main.len() % 2 == 1 || main.len() > 6 {
        return ParseTimeSnafu { value: s }.fail();
    }
    if !main.bytes().all(|b| b.is_ascii_digit()) {
        return ParseTimeSnafu { value: s }.fail();
    }
    let part = |i: usize| -> u32 {
        main.get(i..i + 2)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    };
    let micro = match frac {
        Some(f) if f.len() <= 6 && !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
            let padded = format!("{:0<6}", f);
            padded.parse::<u32>().ok().context(ParseTimeSnafu { value: s })?
        }
        Some(_) => return ParseTimeSnafu { value: s }.fail(),
        None => 0,
    };
    NaiveTime::from_hms_micro_opt(part(0), part(2), part(4), micro)
        .context(ParseTimeSnafu { value: s })
}

impl PrimitiveValue {
    /// Create a single unsigned 16-bit value.
    pub fn new_u16(value: u16) -> Self {
        PrimitiveValue::U16(C::from_elem(value, 1))
    }

    /// Create a single unsigned 32-bit value.
    pub fn new_u32(value: u32) -> Self {
        PrimitiveValue::U32(C::from_elem(value, 1))
    }

    /// Create a multi-valued string from its components.
    pub fn strs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PrimitiveValue::Strs(values.into_iter().map(Into::into).collect())
    }

    /// Create a textual value for the given value representation.
    ///
    /// Multi-valued representations are split at the backslash separator
    /// into [`Strs`](PrimitiveValue::Strs),
    /// LT, ST, UT and UR keep the whole text as a single [`Str`](PrimitiveValue::Str).
    /// An empty text is an [`Empty`](PrimitiveValue::Empty) value.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicomkit_core::{PrimitiveValue, VR};
    /// let value = PrimitiveValue::from_text(VR::CS, "ORIGINAL\\PRIMARY");
    /// assert_eq!(value, PrimitiveValue::strs(["ORIGINAL", "PRIMARY"]));
    /// let value = PrimitiveValue::from_text(VR::ST, "a\\b");
    /// assert_eq!(value, PrimitiveValue::from("a\\b"));
    /// ```
    pub fn from_text(vr: VR, text: &str) -> Self {
        if text.is_empty() {
            PrimitiveValue::Empty
        } else if vr.is_multi_valued_text() {
            PrimitiveValue::Strs(text.split('\\').map(str::to_owned).collect())
        } else {
            PrimitiveValue::Str(text.to_owned())
        }
    }

    /// Retrieve the kind of value held.
    pub fn value_type(&self) -> ValueType {
        use self::PrimitiveValue::*;
        match self {
            Empty => ValueType::Empty,
            Strs(_) => ValueType::Strs,
            Str(_) => ValueType::Str,
            Tags(_) => ValueType::Tags,
            U8(_) => ValueType::U8,
            I16(_) => ValueType::I16,
            U16(_) => ValueType::U16,
            I32(_) => ValueType::I32,
            U32(_) => ValueType::U32,
            I64(_) => ValueType::I64,
            U64(_) => ValueType::U64,
            F32(_) => ValueType::F32,
            F64(_) => ValueType::F64,
        }
    }

    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
        }
    }

    /// Determine the number of bytes that this value occupies
    /// when encoded, without the header.
    /// As mandated by the standard, it is always even.
    pub fn calculate_byte_len(&self) -> usize {
        use self::PrimitiveValue::*;
        let len = match self {
            Empty => 0,
            U8(c) => c.len(),
            I16(c) => c.len() * 2,
            U16(c) => c.len() * 2,
            U32(c) => c.len() * 4,
            I32(c) => c.len() * 4,
            U64(c) => c.len() * 8,
            I64(c) => c.len() * 8,
            F32(c) => c.len() * 4,
            F64(c) => c.len() * 8,
            Tags(c) => c.len() * 4,
            Str(s) => s.len(),
            Strs(c) if c.is_empty() => 0,
            Strs(c) => c.iter().map(|s| s.len()).sum::<usize>() + c.len() - 1,
        };
        (len + 1) & !1
    }

    /// Convert the primitive value into a clean string representation.
    ///
    /// Padding characters (spaces and null bytes) are removed
    /// from both ends of every component.
    /// Multiple components are joined together with a backslash (`'\\'`).
    /// Binary values are first converted to their decimal text form.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dicomkit_core::PrimitiveValue;
    /// assert_eq!(PrimitiveValue::from("Smith^John ").to_str(), "Smith^John");
    /// assert_eq!(
    ///     PrimitiveValue::strs(["DERIVED", "PRIMARY "]).to_str(),
    ///     "DERIVED\\PRIMARY",
    /// );
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(value) => Cow::from(value.trim_matches(is_padding)),
            PrimitiveValue::Strs(values) if values.len() == 1 => {
                Cow::from(values[0].trim_matches(is_padding))
            }
            PrimitiveValue::Strs(values) => Cow::from(
                values
                    .iter()
                    .map(|s| s.trim_matches(is_padding))
                    .join("\\"),
            ),
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Convert the primitive value into a string
    /// exactly as it was stored, padding included.
    pub fn to_raw_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(value) => Cow::from(value.as_str()),
            PrimitiveValue::Strs(values) if values.len() == 1 => Cow::from(values[0].as_str()),
            PrimitiveValue::Strs(values) => Cow::from(values.iter().join("\\")),
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Retrieve every component of this value as a clean string.
    pub fn to_multi_str(&self) -> Vec<String> {
        fn seq<T: fmt::Display>(c: &[T]) -> Vec<String> {
            c.iter().map(|v| v.to_string()).collect()
        }
        match self {
            PrimitiveValue::Empty => Vec::new(),
            PrimitiveValue::Str(value) => vec![value.trim_matches(is_padding).to_owned()],
            PrimitiveValue::Strs(values) => values
                .iter()
                .map(|s| s.trim_matches(is_padding).to_owned())
                .collect(),
            PrimitiveValue::Tags(c) => seq(c),
            PrimitiveValue::U8(c) => seq(c),
            PrimitiveValue::I16(c) => seq(c),
            PrimitiveValue::U16(c) => seq(c),
            PrimitiveValue::I32(c) => seq(c),
            PrimitiveValue::U32(c) => seq(c),
            PrimitiveValue::I64(c) => seq(c),
            PrimitiveValue::U64(c) => seq(c),
            PrimitiveValue::F32(c) => seq(c),
            PrimitiveValue::F64(c) => seq(c),
        }
    }

    /// Retrieve this DICOM value as raw bytes.
    ///
    /// Byte values are borrowed as is.
    /// Binary numbers are laid out in little endian order.
    /// Textual values are provided as their bytes,
    /// with multiple components joined by a backslash.
    pub fn to_bytes(&self) -> Cow<[u8]> {
        fn le<T, const N: usize>(c: &[T], f: impl Fn(&T) -> [u8; N]) -> Cow<'static, [u8]> {
            Cow::Owned(c.iter().flat_map(f).collect())
        }
        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::U8(c) => Cow::from(&c[..]),
            PrimitiveValue::Str(s) => Cow::from(s.as_bytes()),
            PrimitiveValue::Strs(c) if c.len() == 1 => Cow::from(c[0].as_bytes()),
            PrimitiveValue::Strs(c) => Cow::Owned(c.iter().join("\\").into_bytes()),
            PrimitiveValue::Tags(c) => le(&c[..], |t| {
                let [g0, g1] = t.0.to_le_bytes();
                let [e0, e1] = t.1.to_le_bytes();
                [g0, g1, e0, e1]
            }),
            PrimitiveValue::I16(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::U16(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::I32(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::U32(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::I64(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::U64(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::F32(c) => le(&c[..], |v| v.to_le_bytes()),
            PrimitiveValue::F64(c) => le(&c[..], |v| v.to_le_bytes()),
        }
    }

    /// Retrieve a single integer of type `T` from this value.
    ///
    /// If the value contains multiple integers,
    /// only the first one is returned.
    /// Integer strings (IS) are parsed after trimming their padding.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicomkit_core::PrimitiveValue;
    /// assert_eq!(PrimitiveValue::from(" 12 ").to_int::<u32>().unwrap(), 12);
    /// assert_eq!(PrimitiveValue::from(4096_u16).to_int::<i64>().unwrap(), 4096);
    /// ```
    pub fn to_int<T>(&self) -> Result<T>
    where
        T: NumCast + FromStr<Err = ParseIntError>,
    {
        self.to_multi_int()?
            .into_iter()
            .next()
            .context(EmptyValueSnafu {
                requested: "integer",
            })
    }

    /// Retrieve all integers of type `T` from this value.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>>
    where
        T: NumCast + FromStr<Err = ParseIntError>,
    {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                if s.trim_matches(is_padding).is_empty() {
                    Ok(Vec::new())
                } else {
                    Ok(vec![int_from_str(s)?])
                }
            }
            PrimitiveValue::Strs(c) => c
                .iter()
                .filter(|s| !s.trim_matches(is_padding).is_empty())
                .map(|s| int_from_str(s))
                .collect(),
            PrimitiveValue::U8(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I16(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U16(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I32(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U32(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I64(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U64(c) => c.iter().map(|v| cast_num(*v)).collect(),
            _ => NotConvertibleSnafu {
                requested: "integer",
                original: self.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve a single double precision float from this value.
    ///
    /// Decimal strings (DS) are parsed after trimming their padding.
    pub fn to_float64(&self) -> Result<f64> {
        self.to_multi_float64()?
            .into_iter()
            .next()
            .context(EmptyValueSnafu {
                requested: "float64",
            })
    }

    /// Retrieve all values as double precision floats.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>> {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                if s.trim_matches(is_padding).is_empty() {
                    Ok(Vec::new())
                } else {
                    Ok(vec![float_from_str(s)?])
                }
            }
            PrimitiveValue::Strs(c) => c
                .iter()
                .filter(|s| !s.trim_matches(is_padding).is_empty())
                .map(|s| float_from_str(s))
                .collect(),
            PrimitiveValue::F32(c) => Ok(c
                .iter()
                .map(|v| <f64 as From<f32>>::from(*v))
                .collect()),
            PrimitiveValue::F64(c) => Ok(c.to_vec()),
            PrimitiveValue::U8(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I16(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U16(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I32(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U32(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::I64(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::U64(c) => c.iter().map(|v| cast_num(*v)).collect(),
            PrimitiveValue::Tags(_) => NotConvertibleSnafu {
                requested: "float64",
                original: self.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve a single date from a DA value (`YYYYMMDD`).
    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            PrimitiveValue::Str(s) => parse_date(s),
            PrimitiveValue::Strs(c) => {
                let first = c.first().context(EmptyValueSnafu { requested: "date" })?;
                parse_date(first)
            }
            PrimitiveValue::Empty => EmptyValueSnafu { requested: "date" }.fail(),
            _ => NotConvertibleSnafu {
                requested: "date",
                original: self.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve a single time from a TM value (`HHMMSS.FFFFFF`).
    pub fn to_time(&self) -> Result<NaiveTime> {
        match self {
            PrimitiveValue::Str(s) => parse_time(s),
            PrimitiveValue::Strs(c) => {
                let first = c.first().context(EmptyValueSnafu { requested: "time" })?;
                parse_time(first)
            }
            PrimitiveValue::Empty => EmptyValueSnafu { requested: "time" }.fail(),
            _ => NotConvertibleSnafu {
                requested: "time",
                original: self.value_type(),
            }
            .fail(),
        }
    }

    /// Retrieve a single attribute tag from an AT value.
    pub fn to_tag(&self) -> Result<Tag> {
        match self {
            PrimitiveValue::Tags(c) => c
                .first()
                .copied()
                .context(EmptyValueSnafu { requested: "tag" }),
            _ => NotConvertibleSnafu {
                requested: "tag",
                original: self.value_type(),
            }
            .fail(),
        }
    }

    /// Get a single string value, without conversion.
    ///
    /// Returns `None` if the value is not textual.
    pub fn string(&self) -> Option<&str> {
        match self {
            PrimitiveValue::Str(s) => Some(s),
            PrimitiveValue::Strs(c) => c.first().map(String::as_str),
            _ => None,
        }
    }

    /// Get the unsigned 32-bit integers of a UL value, without conversion.
    pub fn uint32_slice(&self) -> Option<&[u32]> {
        match self {
            PrimitiveValue::U32(c) => Some(c),
            _ => None,
        }
    }
}

/// The output of this method is equivalent to calling the method `to_str`
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        /// Auxiliary function for turning a sequence of values
        /// into a backslash-delimited string.
        fn seq_to_str<I>(iter: I) -> String
        where
            I: IntoIterator,
            I::Item: fmt::Display,
        {
            iter.into_iter().map(|x| x.to_string()).join("\\")
        }

        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Str(value) => f.write_str(value.trim_matches(is_padding)),
            PrimitiveValue::Strs(values) => f.write_str(
                &values
                    .iter()
                    .map(|s| s.trim_matches(is_padding))
                    .join("\\"),
            ),
            PrimitiveValue::Tags(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U8(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F64(values) => f.write_str(&seq_to_str(values)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn to_str_trims_padding() {
        assert_eq!(PrimitiveValue::from("1.2.840.10008.1.2\0").to_str(), "1.2.840.10008.1.2");
        assert_eq!(PrimitiveValue::from("  CT ").to_str(), "CT");
        assert_eq!(PrimitiveValue::from("CT ").to_raw_str(), "CT ");
        assert_eq!(
            PrimitiveValue::strs(["ORIGINAL", "PRIMARY "]).to_multi_str(),
            vec!["ORIGINAL".to_string(), "PRIMARY".to_string()],
        );
    }

    #[test]
    fn integer_strings() {
        let value = PrimitiveValue::strs(["12", " -5", "+7 "]);
        assert_eq!(value.to_multi_int::<i32>().unwrap(), vec![12, -5, 7]);
        assert_eq!(value.to_int::<i32>().unwrap(), 12);
        assert!(PrimitiveValue::from("1x").to_int::<i32>().is_err());
        assert!(matches!(
            PrimitiveValue::from(-3_i32).to_int::<u32>(),
            Err(ConvertValueError::OutOfRange { .. })
        ));
        assert!(matches!(
            PrimitiveValue::Empty.to_int::<u32>(),
            Err(ConvertValueError::EmptyValue { .. })
        ));
    }

    #[test]
    fn decimal_strings() {
        let value = PrimitiveValue::strs(["0.5", "-1.25E2"]);
        assert_eq!(value.to_multi_float64().unwrap(), vec![0.5, -125.0]);
        assert_eq!(PrimitiveValue::from(2.5_f32).to_float64().unwrap(), 2.5);
        let value = PrimitiveValue::F32(smallvec![0.25, -8.0]);
        assert_eq!(value.to_multi_float64().unwrap(), vec![0.25, -8.0]);
    }

    #[test]
    fn dates_and_times() {
        assert_eq!(
            PrimitiveValue::from("20200229").to_date().unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
        );
        assert!(PrimitiveValue::from("20190229").to_date().is_err());
        assert!(PrimitiveValue::from("2019").to_date().is_err());
        assert_eq!(
            PrimitiveValue::from("101530.25").to_time().unwrap(),
            NaiveTime::from_hms_micro_opt(10, 15, 30, 250_000).unwrap()
        );
        assert_eq!(
            PrimitiveValue::from("08").to_time().unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        let err = PrimitiveValue::from("10153.5").to_time().unwrap_err();
        assert!(matches!(err, ConvertValueError::ParseTime { .. }));
        assert_eq!(err.to_string(), "Invalid time `10153.5`");
    }

    #[test]
    fn bytes_are_little_endian() {
        let value = PrimitiveValue::U16(smallvec![0x0102, 0x0304]);
        assert_eq!(&*value.to_bytes(), &[0x02, 0x01, 0x04, 0x03]);
        let value = PrimitiveValue::Tags(smallvec![Tag(0x0010, 0x0020)]);
        assert_eq!(&*value.to_bytes(), &[0x10, 0x00, 0x20, 0x00]);
    }

    #[test]
    fn byte_length_is_even() {
        assert_eq!(PrimitiveValue::from("ABC").calculate_byte_len(), 4);
        assert_eq!(PrimitiveValue::strs(["A", "BC"]).calculate_byte_len(), 4);
        assert_eq!(PrimitiveValue::strs(["AB", "CD"]).calculate_byte_len(), 6);
        assert_eq!(PrimitiveValue::U8(smallvec![1, 2, 3]).calculate_byte_len(), 4);
        assert_eq!(PrimitiveValue::new_u32(5).calculate_byte_len(), 4);
        assert_eq!(PrimitiveValue::Empty.calculate_byte_len(), 0);
    }
}
