//! This module includes a high level abstraction over a DICOM data element's value.

use crate::header::{EmptyObject, HasLength, Length};

mod primitive;

pub use self::primitive::{ConvertValueError, PrimitiveValue, ValueType, C};

/// Type alias for the in-memory pixel data fragment data.
pub type InMemFragment = Vec<u8>;

/// Representation of a full DICOM value, which may be either primitive or
/// another DICOM object.
///
/// `I` is the complex type for nest data set items, which should usually
/// implement [`HasLength`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I = EmptyObject> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence(DataSetSequence<I>),
    /// An encapsulated pixel data sequence.
    PixelSequence(PixelFragmentSequence),
}

impl<I> Value<I> {
    /// Obtain the number of individual values.
    /// In a primitive, this is the number of individual elements in the value.
    /// In a sequence item, this is the number of items.
    /// In a pixel sequence, this is currently set to 1
    /// regardless of the number of compressed fragments or frames.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(v) => v.multiplicity(),
            Value::PixelSequence(..) => 1,
        }
    }

    /// The kind of value held.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence(..) => ValueType::DataSetSequence,
            Value::PixelSequence(..) => ValueType::PixelSequence,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence(v) => Some(v.items()),
            _ => None,
        }
    }

    /// Gets a mutable reference to the items of a sequence.
    pub fn items_mut(&mut self) -> Option<&mut C<I>> {
        match self {
            Value::Sequence(v) => Some(v.items_mut()),
            _ => None,
        }
    }

    /// Retrieves the primitive value, discarding anything else.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the items of a sequence, discarding anything else.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence(v) => Some(v.into_items()),
            _ => None,
        }
    }

    /// Gets a reference to the encapsulated pixel data fragments.
    pub fn fragments(&self) -> Option<&[InMemFragment]> {
        match self {
            Value::PixelSequence(v) => Some(v.fragments()),
            _ => None,
        }
    }

    /// Gets a reference to the pixel fragment sequence.
    pub fn pixel_sequence(&self) -> Option<&PixelFragmentSequence> {
        match self {
            Value::PixelSequence(v) => Some(v),
            _ => None,
        }
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    #[inline]
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<DataSetSequence<I>> for Value<I> {
    #[inline]
    fn from(value: DataSetSequence<I>) -> Self {
        Value::Sequence(value)
    }
}

impl<I> From<PixelFragmentSequence> for Value<I> {
    #[inline]
    fn from(value: PixelFragmentSequence) -> Self {
        Value::PixelSequence(value)
    }
}

/// A sequence of complex data set items of type `I`.
///
/// The recorded length tells whether the sequence was (or should be)
/// encoded with a defined length or with a sequence delimiter.
/// Equality only considers the items.
#[derive(Debug, Clone)]
pub struct DataSetSequence<I> {
    /// The item sequence.
    items: C<I>,
    /// The sequence length in bytes.
    ///
    /// The value may be [`UNDEFINED`](Length::UNDEFINED)
    /// if the length is implicitly defined,
    /// otherwise it should match the full byte length of all items.
    length: Length,
}

impl<I> DataSetSequence<I> {
    /// Construct a DICOM data sequence
    /// using a sequence of items and a length.
    #[inline]
    pub fn new(items: impl Into<C<I>>, length: Length) -> Self {
        DataSetSequence {
            items: items.into(),
            length,
        }
    }

    /// Construct an empty DICOM data sequence,
    /// with a length of 0.
    #[inline]
    pub fn empty() -> Self {
        DataSetSequence {
            items: Default::default(),
            length: Length(0),
        }
    }

    /// Construct a DICOM data sequence to be encoded with a defined length.
    ///
    /// The concrete length is only known once the items are encoded.
    #[inline]
    pub fn defined(items: impl Into<C<I>>) -> Self {
        DataSetSequence::new(items, Length(0))
    }

    /// Construct a DICOM data sequence
    /// to be encoded with a sequence delimiter.
    #[inline]
    pub fn undefined(items: impl Into<C<I>>) -> Self {
        DataSetSequence::new(items, Length::UNDEFINED)
    }

    /// Gets a reference to the items of a sequence.
    #[inline]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Gets a mutable reference to the items of a sequence.
    #[inline]
    pub fn items_mut(&mut self) -> &mut C<I> {
        &mut self.items
    }

    /// Obtain the items in the sequence.
    #[inline]
    pub fn into_items(self) -> C<I> {
        self.items
    }

    /// Get the number of items in the sequence.
    #[inline]
    pub fn multiplicity(&self) -> u32 {
        self.items.len() as u32
    }
}

impl<I> HasLength for DataSetSequence<I> {
    #[inline]
    fn length(&self) -> Length {
        self.length
    }
}

impl<I: PartialEq> PartialEq for DataSetSequence<I> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<I> From<Vec<I>> for DataSetSequence<I> {
    /// Converts a vector of items
    /// into a data set sequence with a defined length.
    fn from(items: Vec<I>) -> Self {
        DataSetSequence::defined(items)
    }
}

/// A sequence of pixel data fragments.
///
/// Each fragment (of data type `P`) is
/// an even-lengthed sequence of bytes
/// representing the encoded pixel data.
/// The first item of the sequence is interpreted as a basic offset table,
/// which is defined separately.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFragmentSequence {
    /// The value contents of the basic offset table.
    offset_table: C<u32>,
    /// The sequence of pixel data fragments.
    fragments: C<InMemFragment>,
}

impl PixelFragmentSequence {
    /// Construct a DICOM pixel sequence sequence value
    /// from a basic offset table and a list of fragments.
    ///
    /// **Note:** This function does not validate the offset table
    /// against the given fragments.
    #[inline]
    pub fn new(
        offset_table: impl Into<C<u32>>,
        fragments: impl Into<C<InMemFragment>>,
    ) -> Self {
        PixelFragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into(),
        }
    }

    /// Construct a DICOM pixel sequence sequence value
    /// from a list of fragments,
    /// with an empty basic offset table.
    #[inline]
    pub fn new_fragments(fragments: impl Into<C<InMemFragment>>) -> Self {
        PixelFragmentSequence {
            offset_table: Default::default(),
            fragments: fragments.into(),
        }
    }

    /// Gets a reference to the pixel data fragments.
    ///
    /// This sequence does not include the offset table.
    #[inline]
    pub fn fragments(&self) -> &[InMemFragment] {
        &self.fragments
    }

    /// Gets a mutable reference to the pixel data fragments.
    ///
    /// This sequence does not include the offset table.
    #[inline]
    pub fn fragments_mut(&mut self) -> &mut C<InMemFragment> {
        &mut self.fragments
    }

    /// Get a reference to the basic offset table.
    #[inline]
    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    /// Decompose the sequence into its constituent parts:
    /// the basic offset table and the pixel data fragments.
    pub fn into_parts(self) -> (C<u32>, C<InMemFragment>) {
        (self.offset_table, self.fragments)
    }
}

impl<T, F> From<(T, F)> for PixelFragmentSequence
where
    T: Into<C<u32>>,
    F: Into<C<InMemFragment>>,
{
    /// Construct a pixel data fragment sequence,
    /// interpreting the first tuple element as a basic offset table
    /// and the second element as the vector of fragments.
    fn from((offset_table, fragments): (T, F)) -> Self {
        PixelFragmentSequence::new(offset_table, fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn sequence_equality_ignores_length() {
        let a: DataSetSequence<u8> = DataSetSequence::defined(vec![1, 2]);
        let b: DataSetSequence<u8> = DataSetSequence::undefined(vec![1, 2]);
        assert_eq!(a, b);
        assert!(b.length().is_undefined());
        assert_eq!(a.multiplicity(), 2);
    }

    #[test]
    fn value_accessors() {
        let v: Value<EmptyObject> = PrimitiveValue::from("CT").into();
        assert!(v.primitive().is_some());
        assert!(v.items().is_none());
        assert_eq!(v.value_type(), ValueType::Str);

        let p: Value<EmptyObject> =
            PixelFragmentSequence::new(smallvec![0u32], vec![vec![0xFF_u8, 0xD8]]).into();
        assert_eq!(p.fragments().map(|f| f.len()), Some(1));
        assert_eq!(p.multiplicity(), 1);
    }
}
