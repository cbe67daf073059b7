//! This modules contains an assortment of types required for interpreting DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute tag, the
//! element header, and element composite types.

use crate::value::{ConvertValueError, PrimitiveValue, Value};
use chrono::{NaiveDate, NaiveTime};
use num_traits::NumCast;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// The two-character code did not name a known value representation.
#[derive(Debug, Snafu)]
#[snafu(display("Unknown value representation `{}`", code))]
pub struct UnknownVrError {
    code: String,
}

impl UnknownVrError {
    /// The code which failed to resolve.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// It is named `length` to make it distinct from the conventional method
    /// signature `len(&self) -> usize` for the number of elements of a
    /// collection.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or specific primitive
    /// values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }
}

/// Stub type representing a non-existing DICOM object.
///
/// This type implements `HasLength`, but cannot be instantiated.
/// This makes it so that `Value<EmptyObject>` is sure to be either a primitive
/// value or a sequence with no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmptyObject {}

impl HasLength for EmptyObject {
    fn length(&self) -> Length {
        match *self {}
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// The type parameter `I` is the type of the nested data set items,
/// which is the containing data set type for in-memory objects.
#[derive(Debug, Clone)]
pub struct DataElement<I = EmptyObject> {
    header: DataElementHeader,
    value: Value<I>,
}

/// Two data elements are equal when their tags, value representations
/// and values are equal.
/// The recorded length is not compared,
/// since it only reflects how the element was last encoded.
impl<I> PartialEq for DataElement<I>
where
    I: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.header.tag == other.header.tag
            && self.header.vr == other.header.vr
            && self.value == other.value
    }
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Create a data element from the given parts,
    /// where the length is inferred from the value's byte length.
    ///
    /// The inferred length is an estimate, rounded up to an even number.
    /// Text is measured in UTF-8,
    /// which differs from the encoded length
    /// when the data set declares another character set.
    /// Data set writers always derive the length from the encoded value.
    ///
    /// The length of sequences and encapsulated pixel data
    /// is only known at encoding time,
    /// so it is recorded as defined (but zero) for data set sequences
    /// and undefined for pixel data fragments.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        let len = match &value {
            Value::Primitive(v) => Length(v.calculate_byte_len() as u32),
            Value::Sequence(seq) => seq.length(),
            Value::PixelSequence(_) => Length::UNDEFINED,
        };
        DataElement {
            header: DataElementHeader { tag, vr, len },
            value,
        }
    }

    /// Create a data element from the given parts, with an explicit length.
    ///
    /// This is used by decoders, which know the length recorded in the source.
    pub fn new_with_len<T>(tag: Tag, vr: VR, length: Length, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: length,
            },
            value: value.into(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation, which may be unknown or not
    /// applicable.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Retrieve a mutable reference to the data value.
    pub fn value_mut(&mut self) -> &mut Value<I> {
        &mut self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Split the element into its header and value.
    pub fn into_parts(self) -> (DataElementHeader, Value<I>) {
        (self.header, self.value)
    }

    /// Retrieve the items of a data set sequence element.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    fn primitive_or_err(&self, requested: &'static str) -> Result<&PrimitiveValue, ConvertValueError> {
        self.value
            .primitive()
            .ok_or_else(|| ConvertValueError::non_primitive(requested))
    }

    /// Retrieve the element's value as a single clean string,
    /// with trailing padding and surrounding whitespace removed.
    pub fn to_str(&self) -> Result<Cow<str>, ConvertValueError> {
        Ok(self.primitive_or_err("string")?.to_str())
    }

    /// Retrieve the element's value as a string,
    /// exactly as it was stored.
    pub fn to_raw_str(&self) -> Result<Cow<str>, ConvertValueError> {
        Ok(self.primitive_or_err("string")?.to_raw_str())
    }

    /// Retrieve all of the element's values as clean strings.
    pub fn to_multi_str(&self) -> Result<Vec<String>, ConvertValueError> {
        Ok(self.primitive_or_err("strings")?.to_multi_str())
    }

    /// Retrieve the element's value as raw bytes.
    ///
    /// Binary numbers are laid out in little endian.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, ConvertValueError> {
        Ok(self.primitive_or_err("bytes")?.to_bytes())
    }

    /// Retrieve and convert the primitive value into an integer.
    ///
    /// Both binary integers and integer strings (IS) are supported.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        self.primitive_or_err("integer")?.to_int()
    }

    /// Retrieve and convert all values into integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        self.primitive_or_err("integer")?.to_multi_int()
    }

    /// Retrieve and convert the primitive value into a double precision
    /// float. Decimal strings (DS) are parsed.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.primitive_or_err("float64")?.to_float64()
    }

    /// Retrieve and convert all values into double precision floats.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.primitive_or_err("float64")?.to_multi_float64()
    }

    /// Retrieve and convert the primitive value into a date.
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        self.primitive_or_err("date")?.to_date()
    }

    /// Retrieve and convert the primitive value into a time.
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        self.primitive_or_err("time")?.to_time()
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }

    /// Check whether this is the header of an encapsulated pixel data element.
    #[inline]
    pub fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag == Tag::PIXEL_DATA && self.len.is_undefined()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

/// The family of a value representation,
/// describing how the value bytes are interpreted.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum ValueFamily {
    /// Fixed-width binary numbers (US, SS, UL, SL, UV, SV, FL, FD)
    /// and attribute tags (AT).
    Numeric,
    /// Character strings padded with spaces.
    Textual,
    /// Unique identifiers, padded with a null byte.
    Uid,
    /// Dates, times and date-times in their textual form.
    DateTime,
    /// Opaque binary data (OB, OD, OF, OL, OV, OW, UN),
    /// which may have an undefined length.
    Binary,
    /// A sequence of nested data sets.
    Sequence,
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Retrieve the value family of this VR.
    pub fn family(self) -> ValueFamily {
        use VR::*;
        match self {
            AT | FL | FD | SL | SS | SV | UL | US | UV => ValueFamily::Numeric,
            AE | AS | CS | DS | IS | LO | LT | PN | SH | ST | UC | UR | UT => ValueFamily::Textual,
            UI => ValueFamily::Uid,
            DA | DT | TM => ValueFamily::DateTime,
            OB | OD | OF | OL | OV | OW | UN => ValueFamily::Binary,
            SQ => ValueFamily::Sequence,
        }
    }

    /// Whether the value length of this VR is a 32-bit field
    /// preceded by two reserved bytes under explicit VR encoding.
    ///
    /// PS3.5 7.1.2: AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO, LT, PN,
    /// SH, SL, SS, ST, TM, UI, UL and US have a 16-bit length field.
    pub fn has_long_length(self) -> bool {
        use VR::*;
        !matches!(
            self,
            AE | AS | AT | CS | DA | DS | DT | FL | FD | IS | LO | LT | PN | SH | SL | SS | ST
                | TM | UI | UL | US
        )
    }

    /// The byte used to pad values of this VR to an even length.
    pub fn padding(self) -> u8 {
        match self.family() {
            ValueFamily::Textual | ValueFamily::DateTime => b' ',
            _ => 0,
        }
    }

    /// Whether values of this VR are character strings.
    pub fn is_text(self) -> bool {
        matches!(
            self.family(),
            ValueFamily::Textual | ValueFamily::Uid | ValueFamily::DateTime
        )
    }

    /// Whether multiple values of this VR are packed into one string
    /// separated by a backslash.
    ///
    /// LT, ST, UT and UR are always single-valued,
    /// so a backslash is part of their content.
    pub fn is_multi_valued_text(self) -> bool {
        self.is_text() && !matches!(self, VR::LT | VR::ST | VR::UT | VR::UR)
    }

    /// The number of bytes of each value in a binary VR,
    /// or `None` for text, sequences and byte-sized data.
    pub fn value_width(self) -> Option<usize> {
        use VR::*;
        match self {
            US | SS | OW => Some(2),
            UL | SL | FL | OL | OF | AT => Some(4),
            UV | SV | FD | OV | OD => Some(8),
            _ => None,
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = UnknownVrError;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => UnknownVrSnafu { code: string }.fail(),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group, then by element,
/// which is also the order in which elements are encoded in a data set.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1
    }

    /// Whether this tag refers to a group length element `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether this is one of the item or delimiter tags of group `FFFE`.
    #[inline]
    pub fn is_delimitation(self) -> bool {
        self.0 == 0xFFFE
    }

    /// Build a tag from four bytes in little endian order.
    pub fn from_le_bytes(bytes: [u8; 4]) -> Tag {
        Tag(
            u16::from_le_bytes([bytes[0], bytes[1]]),
            u16::from_le_bytes([bytes[2], bytes[3]]),
        )
    }

    /// Build a tag from four bytes in big endian order.
    pub fn from_be_bytes(bytes: [u8; 4]) -> Tag {
        Tag(
            u16::from_be_bytes([bytes[0], bytes[1]]),
            u16::from_be_bytes([bytes[2], bytes[3]]),
        )
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that numeric comparisons and arithmetic
/// do not function the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dicomkit_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
///
/// Any addition with at least one undefined
/// length results in an undefined length.
///
/// ```
/// # use dicomkit_core::Length;
/// assert!((Length::defined(64) + Length::UNDEFINED).is_undefined());
/// ```
///
/// Comparing between at least one undefined length is always `false`.
///
/// ```
/// # use dicomkit_core::Length;
/// assert!(Length::defined(16) < Length::defined(64));
/// assert!(!(Length::UNDEFINED < Length::defined(64)));
/// assert!(!(Length::UNDEFINED > Length::defined(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panic
    ///
    /// This function will panic if `len` represents an undefined length.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally specified as another length.
    /// Unlike the implemented `PartialEq`, two undefined lengths are
    /// considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl std::ops::Add<Length> for Length {
    type Output = Self;

    fn add(self, rhs: Length) -> Self::Output {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => Length::UNDEFINED,
            (l1, l2) => {
                let o = l1 + l2;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PrimitiveValue;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_bytes() {
        assert_eq!(Tag::from_le_bytes([0x10, 0x00, 0x20, 0x00]), Tag(0x0010, 0x0020));
        assert_eq!(Tag::from_be_bytes([0x7F, 0xE0, 0x00, 0x10]), Tag::PIXEL_DATA);
    }

    #[test]
    fn private_tags_have_odd_groups() {
        assert!(Tag(0x0001, 0x0010).is_private());
        assert!(Tag(0x0009, 0x1000).is_private());
        assert!(Tag(0xFFFF, 0x0000).is_private());
        assert!(!Tag(0x7FE0, 0x0010).is_private());
        assert!(!Tag(0x0000, 0x0000).is_private());
        for group in 0..=u16::MAX {
            assert_eq!(Tag(group, 0).is_private(), group % 2 == 1);
        }
    }

    #[test]
    fn tags_sort_by_group_then_element() {
        let mut tags = vec![Tag(0x0010, 0x0020), Tag(0x0008, 0x0060), Tag(0x0010, 0x0010)];
        tags.sort();
        assert_eq!(
            tags,
            vec![Tag(0x0008, 0x0060), Tag(0x0010, 0x0010), Tag(0x0010, 0x0020)]
        );
    }

    #[test]
    fn vr_codes_round_trip() {
        for code in ["AE", "OB", "SQ", "UI", "UV"] {
            let vr: VR = code.parse().unwrap();
            assert_eq!(vr.to_string(), code);
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(vr));
        }
    }

    #[test]
    fn unknown_vr_code_fails() {
        let err = "ZZ".parse::<VR>().unwrap_err();
        assert_eq!(err.code(), "ZZ");
        assert_eq!(VR::from_binary([b'x', b'1']), None);
    }

    #[test]
    fn vr_length_fields() {
        assert!(!VR::UI.has_long_length());
        assert!(!VR::US.has_long_length());
        assert!(VR::OB.has_long_length());
        assert!(VR::SQ.has_long_length());
        assert!(VR::UT.has_long_length());
        assert!(VR::UN.has_long_length());
    }

    #[test]
    fn vr_padding() {
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::OB.padding(), 0);
        assert_eq!(VR::CS.padding(), b' ');
        assert_eq!(VR::DA.padding(), b' ');
        assert_eq!(VR::PN.padding(), b' ');
    }

    #[test]
    fn sequence_item_headers() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(12)).unwrap(),
            SequenceItemHeader::Item { len: Length(12) }
        );
        assert!(SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(4)).is_err());
        assert!(SequenceItemHeader::new(Tag(0x0010, 0x0010), Length(0)).is_err());
    }

    #[test]
    fn get_date_value() {
        let data_element: DataElement = DataElement::new(
            Tag(0x0010, 0x0030),
            VR::DA,
            PrimitiveValue::from("19941012"),
        );

        assert_eq!(
            data_element.to_date().unwrap(),
            NaiveDate::from_ymd_opt(1994, 10, 12).unwrap(),
        );
    }

    #[test]
    fn element_length_is_padded() {
        let elem: DataElement = DataElement::new(
            Tag(0x0020, 0x000D),
            VR::UI,
            PrimitiveValue::from("1.2.3"),
        );
        assert_eq!(elem.length(), Length(6));
    }
}
