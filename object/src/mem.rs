//! This module contains the implementation for an in-memory DICOM object.
//!
//! An [`InMemDicomObject`] maps tags to data elements,
//! always presenting them in ascending tag order.
//! Sequence elements hold further in-memory objects as their items.
//!
//! # Example
//!
//! ```
//! # use dicomkit_object::InMemDicomObject;
//! # use dicomkit_core::VR;
//! # use dicomkit_dictionary_std::tags;
//! let mut obj = InMemDicomObject::new_empty();
//! obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
//! obj.put_u16(tags::ROWS, 512);
//!
//! assert_eq!(obj.get_str(tags::PATIENT_NAME)?, "Doe^John");
//! assert_eq!(obj.get_int::<u32>(tags::ROWS)?, 512);
//! # Ok::<_, dicomkit_object::AccessError>(())
//! ```

use crate::{AccessError, ConvertValueSnafu, NoSuchDataElementTagSnafu};
use dicomkit_core::header::{HasLength, Header};
use dicomkit_core::value::{DataSetSequence, PixelFragmentSequence, PrimitiveValue, Value, C};
use dicomkit_core::{DataElement, Length, Tag, VR};
use dicomkit_encoding::byteordered::Endianness;
use dicomkit_encoding::decode::primitive_value::{decode_primitive, DecodeValueError, TextPadding};
use dicomkit_encoding::text::SpecificCharacterSet;
use num_traits::NumCast;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A full in-memory DICOM data element.
pub type InMemElement = DataElement<InMemDicomObject>;

/// An error which may occur when assigning a value through a typed setter.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum PutValueError {
    /// The number does not fit in the binary type of the value representation.
    #[snafu(display("Value {} is out of range for VR {}", value, vr))]
    OutOfRange {
        vr: VR,
        value: String,
        backtrace: Backtrace,
    },
    /// The value representation cannot hold a number.
    #[snafu(display("VR {} cannot hold a number", vr))]
    NotNumeric { vr: VR, backtrace: Backtrace },
    /// The raw bytes do not form a valid value.
    #[snafu(display("Invalid raw value"))]
    InvalidBytes {
        #[snafu(backtrace)]
        source: DecodeValueError,
    },
}

/** A DICOM object that is fully contained in memory.
 */
#[derive(Debug, Clone)]
pub struct InMemDicomObject {
    /// the element map
    entries: BTreeMap<Tag, InMemElement>,
    /// The length of the DICOM object in bytes.
    /// It is usually undefined, unless it is part of an item
    /// in a sequence with a specified length in its item header.
    len: Length,
}

impl PartialEq for InMemDicomObject {
    // the recorded item length is not part of the content
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Default for InMemDicomObject {
    fn default() -> Self {
        InMemDicomObject::new_empty()
    }
}

impl HasLength for InMemDicomObject {
    fn length(&self) -> Length {
        self.len
    }
}

impl InMemDicomObject {
    /// Create a new empty DICOM object.
    pub fn new_empty() -> Self {
        InMemDicomObject {
            entries: BTreeMap::new(),
            len: Length::UNDEFINED,
        }
    }

    /// Create a new empty DICOM object
    /// which records the given item length.
    pub(crate) fn new_with_len(len: Length) -> Self {
        InMemDicomObject {
            entries: BTreeMap::new(),
            len,
        }
    }

    /// Construct a DICOM object from a non-fallible source of structured elements.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        let mut obj = InMemDicomObject::new_empty();
        obj.extend(iter);
        obj
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its tag,
    /// if it is present.
    pub fn get(&self, tag: Tag) -> Option<&InMemElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a mutable reference to a DICOM element, if it is present.
    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut InMemElement> {
        self.entries.get_mut(&tag)
    }

    /// Whether the object holds an element with the given tag.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Insert a data element to the object, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: InMemElement) -> Option<InMemElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove a DICOM element by its tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove a DICOM element by its tag,
    /// retrieving it if present.
    pub fn take_element(&mut self, tag: Tag) -> Result<InMemElement, AccessError> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retain only the elements for which the predicate holds.
    pub fn retain(&mut self, mut f: impl FnMut(&InMemElement) -> bool) {
        self.entries.retain(|_, e| f(e));
    }

    /// Obtain an iterator over the tags of the object, in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// Obtain an iterator over the elements of the object,
    /// in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &InMemElement> + '_ {
        self.entries.values()
    }

    /// The number of elements in the object.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Obtain the specific character set declared by this object.
    ///
    /// `None` is returned when the object does not declare one,
    /// or the declared one is not supported.
    pub fn charset(&self) -> Option<SpecificCharacterSet> {
        let code = self
            .get(dicomkit_dictionary_std::tags::SPECIFIC_CHARACTER_SET)?
            .to_raw_str()
            .ok()?;
        SpecificCharacterSet::from_code(&code)
    }

    // --- typed getters ---

    /// Retrieve the value of an element as a single clean string,
    /// with padding and surrounding whitespace removed.
    pub fn get_str(&self, tag: Tag) -> Result<Cow<'_, str>, AccessError> {
        self.element(tag)?
            .to_str()
            .context(ConvertValueSnafu { tag })
    }

    /// Retrieve all values of an element as clean strings.
    pub fn get_strs(&self, tag: Tag) -> Result<Vec<String>, AccessError> {
        self.element(tag)?
            .to_multi_str()
            .context(ConvertValueSnafu { tag })
    }

    /// Retrieve the value of an element as an integer.
    ///
    /// Binary integers and integer strings (IS) are both accepted.
    pub fn get_int<T>(&self, tag: Tag) -> Result<T, AccessError>
    where
        T: NumCast + FromStr<Err = std::num::ParseIntError>,
    {
        self.element(tag)?
            .to_int()
            .context(ConvertValueSnafu { tag })
    }

    /// Retrieve the value of an element as a double precision float.
    ///
    /// Binary floats, integers and decimal strings (DS) are accepted.
    pub fn get_decimal(&self, tag: Tag) -> Result<f64, AccessError> {
        self.element(tag)?
            .to_float64()
            .context(ConvertValueSnafu { tag })
    }

    /// Retrieve the items of a sequence element.
    pub fn get_sequence(&self, tag: Tag) -> Option<&[InMemDicomObject]> {
        self.get(tag)?.items()
    }

    /// Retrieve the value of an element as raw bytes,
    /// with binary numbers laid out in little endian.
    pub fn get_bytes(&self, tag: Tag) -> Result<Cow<'_, [u8]>, AccessError> {
        self.element(tag)?
            .to_bytes()
            .context(ConvertValueSnafu { tag })
    }

    // --- typed setters ---

    /// Assign a textual value.
    ///
    /// For multi-valued representations,
    /// backslashes in `value` separate the individual values.
    /// Trailing padding (spaces and nulls) is not significant in text
    /// and is removed, so the stored value is the one read back after encoding.
    pub fn put_str(&mut self, tag: Tag, vr: VR, value: impl AsRef<str>) -> Option<InMemElement> {
        self.put(DataElement::new(
            tag,
            vr,
            PrimitiveValue::from_text(vr, trim_text_padding(vr, value.as_ref())),
        ))
    }

    /// Assign multiple textual values.
    pub fn put_strs<I, S>(&mut self, tag: Tag, vr: VR, values: I) -> Option<InMemElement>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: C<String> = values.into_iter().map(Into::into).collect();
        // only the end of the whole packed string is padded
        if let Some(last) = values.last_mut() {
            let len = trim_text_padding(vr, last).len();
            last.truncate(len);
        }
        let value = if values.is_empty() || (values.len() == 1 && values[0].is_empty()) {
            PrimitiveValue::Empty
        } else if vr.is_multi_valued_text() {
            PrimitiveValue::Strs(values)
        } else {
            PrimitiveValue::Str(values.join("\\"))
        };
        self.put(DataElement::new(tag, vr, value))
    }

    /// Assign an integer value.
    ///
    /// Binary integer representations (US, SS, UL, SL, UV, SV)
    /// receive the number in their own width,
    /// integer strings (IS) receive its decimal form.
    pub fn put_int(&mut self, tag: Tag, vr: VR, value: i64) -> Result<(), PutValueError> {
        fn narrow<T: TryFrom<i64>>(vr: VR, value: i64) -> Result<T, PutValueError> {
            T::try_from(value).ok().context(OutOfRangeSnafu {
                vr,
                value: value.to_string(),
            })
        }
        let value = match vr {
            VR::US => PrimitiveValue::from(narrow::<u16>(vr, value)?),
            VR::SS => PrimitiveValue::from(narrow::<i16>(vr, value)?),
            VR::UL => PrimitiveValue::from(narrow::<u32>(vr, value)?),
            VR::SL => PrimitiveValue::from(narrow::<i32>(vr, value)?),
            VR::UV => PrimitiveValue::from(narrow::<u64>(vr, value)?),
            VR::SV => PrimitiveValue::from(value),
            VR::IS | VR::DS | VR::LO | VR::SH | VR::CS => {
                PrimitiveValue::from_text(vr, &value.to_string())
            }
            _ => return NotNumericSnafu { vr }.fail(),
        };
        self.put(DataElement::new(tag, vr, value));
        Ok(())
    }

    /// Assign a decimal value.
    ///
    /// FL and FD receive a binary float,
    /// decimal strings (DS) receive the shortest decimal form.
    pub fn put_decimal(&mut self, tag: Tag, vr: VR, value: f64) -> Result<(), PutValueError> {
        let value = match vr {
            VR::FL => PrimitiveValue::from(value as f32),
            VR::FD => PrimitiveValue::from(value),
            VR::DS => PrimitiveValue::from_text(vr, &value.to_string()),
            _ => return NotNumericSnafu { vr }.fail(),
        };
        self.put(DataElement::new(tag, vr, value));
        Ok(())
    }

    /// Assign a single unsigned short (US) value.
    pub fn put_u16(&mut self, tag: Tag, value: u16) -> Option<InMemElement> {
        self.put(DataElement::new(tag, VR::US, PrimitiveValue::new_u16(value)))
    }

    /// Assign a single unsigned long (UL) value.
    pub fn put_u32(&mut self, tag: Tag, value: u32) -> Option<InMemElement> {
        self.put(DataElement::new(tag, VR::UL, PrimitiveValue::new_u32(value)))
    }

    /// Assign a value from its raw bytes,
    /// with binary numbers laid out in little endian.
    ///
    /// The bytes are interpreted as they would be when read from a data set,
    /// so OW data becomes a sequence of 16-bit words.
    pub fn put_bytes(&mut self, tag: Tag, vr: VR, bytes: &[u8]) -> Result<(), PutValueError> {
        let value = decode_primitive(
            vr,
            bytes,
            Endianness::Little,
            SpecificCharacterSet::Default,
            TextPadding::Preserve,
        )
        .context(InvalidBytesSnafu)?;
        self.put(DataElement::new(tag, vr, value));
        Ok(())
    }

    /// Assign a sequence of items,
    /// to be encoded with a defined length by default.
    pub fn put_sequence<I>(&mut self, tag: Tag, items: I) -> Option<InMemElement>
    where
        I: IntoIterator<Item = InMemDicomObject>,
    {
        let items: Vec<_> = items.into_iter().collect();
        self.put(DataElement::new(tag, VR::SQ, DataSetSequence::defined(items)))
    }

    /// Assign encapsulated pixel data fragments.
    pub fn put_pixel_sequence(
        &mut self,
        tag: Tag,
        vr: VR,
        sequence: PixelFragmentSequence,
    ) -> Option<InMemElement> {
        self.put(DataElement::new(tag, vr, Value::PixelSequence(sequence)))
    }
}

impl<'a> IntoIterator for &'a InMemDicomObject {
    type Item = &'a InMemElement;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for InMemDicomObject {
    type Item = InMemElement;
    type IntoIter = std::collections::btree_map::IntoValues<Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl Extend<InMemElement> for InMemDicomObject {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = InMemElement>,
    {
        self.entries.extend(iter.into_iter().map(|e| (e.tag(), e)));
    }
}

impl FromIterator<InMemElement> for InMemDicomObject {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        InMemDicomObject::from_element_iter(iter)
    }
}

/// Remove trailing padding from a textual value.
/// Values of other representations are left untouched.
fn trim_text_padding(vr: VR, text: &str) -> &str {
    if vr.is_text() {
        text.trim_end_matches([' ', '\0'])
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomkit_core::dicom_value;
    use dicomkit_dictionary_std::tags;

    #[test]
    fn put_and_get_text() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        obj.put_str(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY");

        assert_eq!(obj.get_str(tags::PATIENT_NAME).unwrap(), "Doe^John");
        assert_eq!(
            obj.get_strs(tags::IMAGE_TYPE).unwrap(),
            vec!["ORIGINAL".to_string(), "PRIMARY".to_string()]
        );
        assert_eq!(
            obj.element(tags::IMAGE_TYPE).unwrap().value(),
            &Value::Primitive(dicom_value!(Strs, ["ORIGINAL", "PRIMARY"]))
        );
    }

    #[test]
    fn replacing_an_element_returns_the_old_one() {
        let mut obj = InMemDicomObject::new_empty();
        assert!(obj.put_str(tags::MODALITY, VR::CS, "CT").is_none());
        let old = obj.put_str(tags::MODALITY, VR::CS, "MR").unwrap();
        assert_eq!(old.to_str().unwrap(), "CT");
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.get_str(tags::MODALITY).unwrap(), "MR");
    }

    #[test]
    fn numbers() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_u16(tags::ROWS, 256);
        obj.put_int(tags::SERIES_NUMBER, VR::IS, 42).unwrap();
        obj.put_int(tags::COLUMNS, VR::US, 128).unwrap();
        obj.put_decimal(tags::SLICE_THICKNESS, VR::DS, 2.5).unwrap();

        assert_eq!(obj.get_int::<u16>(tags::ROWS).unwrap(), 256);
        assert_eq!(obj.get_int::<i32>(tags::SERIES_NUMBER).unwrap(), 42);
        assert_eq!(obj.get_int::<u32>(tags::COLUMNS).unwrap(), 128);
        assert_eq!(obj.get_decimal(tags::SLICE_THICKNESS).unwrap(), 2.5);

        assert!(matches!(
            obj.put_int(tags::ROWS, VR::US, 70_000),
            Err(PutValueError::OutOfRange { vr: VR::US, .. })
        ));
        assert!(matches!(
            obj.put_int(tags::ROWS, VR::OB, 1),
            Err(PutValueError::NotNumeric { vr: VR::OB, .. })
        ));
        // failed assignments leave the previous value
        assert_eq!(obj.get_int::<u16>(tags::ROWS).unwrap(), 256);
    }

    #[test]
    fn raw_bytes_follow_the_value_representation() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_bytes(tags::PIXEL_DATA, VR::OW, &[1, 0, 2, 0]).unwrap();
        assert_eq!(
            obj.element(tags::PIXEL_DATA).unwrap().value(),
            &Value::Primitive(dicom_value!(U16, [1, 2]))
        );
        assert_eq!(obj.get_bytes(tags::PIXEL_DATA).unwrap().as_ref(), &[1, 0, 2, 0]);
        assert!(obj.put_bytes(tags::PIXEL_DATA, VR::OW, &[1, 2, 3]).is_err());
    }

    #[test]
    fn missing_elements() {
        let obj = InMemDicomObject::new_empty();
        assert!(matches!(
            obj.get_str(tags::PATIENT_ID),
            Err(AccessError::NoSuchDataElementTag { tag, .. }) if tag == tags::PATIENT_ID
        ));
    }

    #[test]
    fn sequences_and_ordering() {
        let mut item = InMemDicomObject::new_empty();
        item.put_str(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "1.2.3");
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::PATIENT_ID, VR::LO, "ID1");
        obj.put_sequence(tags::REFERENCED_IMAGE_SEQUENCE, vec![item.clone()]);
        obj.put_str(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192");

        let items = obj.get_sequence(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
        assert_eq!(items, &[item]);
        assert_eq!(
            obj.tags().collect::<Vec<_>>(),
            vec![
                tags::SPECIFIC_CHARACTER_SET,
                tags::REFERENCED_IMAGE_SEQUENCE,
                tags::PATIENT_ID
            ]
        );
        assert_eq!(obj.charset(), Some(SpecificCharacterSet::IsoIr192));

        assert!(obj.remove_element(tags::PATIENT_ID));
        assert!(!obj.remove_element(tags::PATIENT_ID));
        assert_eq!(obj.len(), 2);
    }
}
