//! Encoding of complete data sets into bytes.
//!
//! Elements are written in ascending tag order.
//! Value lengths are always derived from the encoded value,
//! never from the length recorded in the element,
//! and group length elements are recomputed from the encoded group.

use crate::mem::{InMemDicomObject, InMemElement};
use dicomkit_core::header::{DataElementHeader, HasLength, Header, Length};
use dicomkit_core::value::{DataSetSequence, PixelFragmentSequence, PrimitiveValue, Value};
use dicomkit_core::{Tag, VR};
use dicomkit_dictionary_std::tags;
use dicomkit_encoding::encode::{self, encode_primitive, BasicEncode, Encode};
use dicomkit_encoding::text::SpecificCharacterSet;
use dicomkit_encoding::transfer_syntax::DataSetEncoder;
use dicomkit_encoding::TransferSyntax;
use itertools::Itertools;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use tracing::warn;

/// An error which may occur when encoding a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not encode the header of {}", tag))]
    EncodeHeader {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not encode the value of {}", tag))]
    EncodeValue {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not encode an item of {}", tag))]
    EncodeItem {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },
    #[snafu(display("Could not write the offset table of {}", tag))]
    WriteOffsetTable {
        tag: Tag,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Encoded length of {} ({} bytes) does not fit in 32 bits", tag, len))]
    LengthOverflow {
        tag: Tag,
        len: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How sequences and their items are delimited on writing.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SequenceLength {
    /// Write sequences and items with their defined length.
    #[default]
    Defined,
    /// Write sequences and items with undefined length and delimiters.
    Undefined,
    /// Keep the kind of length recorded in each sequence and item.
    Preserve,
}

/// The set of options for writing a data set.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct WriteOptions {
    /// how sequences and items are delimited
    pub sequence_length: SequenceLength,
    /// the character set assumed until the data set declares one
    pub charset: SpecificCharacterSet,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence length strategy.
    pub fn sequence_length(mut self, sequence_length: SequenceLength) -> Self {
        self.sequence_length = sequence_length;
        self
    }

    /// Replace the initial character set.
    pub fn charset(mut self, charset: SpecificCharacterSet) -> Self {
        self.charset = charset;
        self
    }
}

/// A writer of complete data sets in a given transfer syntax.
#[derive(Debug, Clone)]
pub struct DataSetWriter<'a> {
    ts: &'a TransferSyntax,
    encoder: DataSetEncoder,
    options: WriteOptions,
}

impl<'a> DataSetWriter<'a> {
    /// Create a writer for the given transfer syntax with default options.
    pub fn new(ts: &'a TransferSyntax) -> Self {
        Self::with_options(ts, WriteOptions::default())
    }

    /// Create a writer for the given transfer syntax and options.
    pub fn with_options(ts: &'a TransferSyntax, options: WriteOptions) -> Self {
        DataSetWriter {
            ts,
            encoder: ts.encoder(),
            options,
        }
    }

    /// Encode the data set, appending the bytes to `out`.
    pub fn write_dataset(&self, out: &mut Vec<u8>, obj: &InMemDicomObject) -> Result<()> {
        self.write_object(out, obj, self.options.charset)
    }

    /// Encode the data set into a new byte vector.
    pub fn encode(&self, obj: &InMemDicomObject) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_dataset(&mut out, obj)?;
        Ok(out)
    }

    fn write_object(
        &self,
        out: &mut Vec<u8>,
        obj: &InMemDicomObject,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let charset = match obj.get(tags::SPECIFIC_CHARACTER_SET) {
            Some(e) => declared_charset(e, charset),
            None => charset,
        };

        for (group, elements) in &obj.iter().chunk_by(|e| e.tag().group()) {
            let mut elements = elements.peekable();
            let group_length = elements.next_if(|e| e.tag().element() == 0x0000);

            match group_length {
                Some(group_length) => {
                    let mut body = Vec::new();
                    for e in elements {
                        self.write_element(&mut body, e, charset)?;
                    }
                    let len = u32::try_from(body.len()).ok().context(LengthOverflowSnafu {
                        tag: Tag(group, 0x0000),
                        len: body.len(),
                    })?;
                    let group_length = InMemElement::new(
                        group_length.tag(),
                        VR::UL,
                        PrimitiveValue::new_u32(len),
                    );
                    self.write_element(out, &group_length, charset)?;
                    out.extend_from_slice(&body);
                }
                None => {
                    for e in elements {
                        self.write_element(out, e, charset)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_element(
        &self,
        out: &mut Vec<u8>,
        elem: &InMemElement,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let tag = elem.tag();
        match elem.value() {
            Value::Primitive(value) => {
                let bytes = encode_primitive(elem.vr(), value, self.ts.endianness(), charset)
                    .context(EncodeValueSnafu { tag })?;
                let len = self.defined_length(tag, bytes.len())?;
                self.encoder
                    .encode_element_header(&mut *out, DataElementHeader::new(tag, elem.vr(), len))
                    .context(EncodeHeaderSnafu { tag })?;
                out.extend_from_slice(&bytes);
            }
            Value::Sequence(seq) => self.write_sequence(out, tag, seq, charset)?,
            Value::PixelSequence(seq) => self.write_pixel_sequence(out, tag, elem.vr(), seq)?,
        }
        Ok(())
    }

    fn defined_length(&self, tag: Tag, len: usize) -> Result<Length> {
        match u32::try_from(len) {
            Ok(len) if len != Length::UNDEFINED.0 => Ok(Length(len)),
            _ => LengthOverflowSnafu { tag, len }.fail(),
        }
    }

    fn undefined(&self, recorded: Length) -> bool {
        match self.options.sequence_length {
            SequenceLength::Defined => false,
            SequenceLength::Undefined => true,
            SequenceLength::Preserve => recorded.is_undefined(),
        }
    }

    fn write_sequence(
        &self,
        out: &mut Vec<u8>,
        tag: Tag,
        seq: &DataSetSequence<InMemDicomObject>,
        charset: SpecificCharacterSet,
    ) -> Result<()> {
        let mut body = Vec::new();
        for item in seq.items() {
            let mut item_body = Vec::new();
            self.write_object(&mut item_body, item, charset)?;
            if self.undefined(item.length()) {
                self.encoder
                    .encode_item_header(&mut body, Length::UNDEFINED.0)
                    .context(EncodeItemSnafu { tag })?;
                body.extend_from_slice(&item_body);
                self.encoder
                    .encode_item_delimiter(&mut body)
                    .context(EncodeItemSnafu { tag })?;
            } else {
                let len = self.defined_length(tag, item_body.len())?;
                self.encoder
                    .encode_item_header(&mut body, len.0)
                    .context(EncodeItemSnafu { tag })?;
                body.extend_from_slice(&item_body);
            }
        }

        if self.undefined(seq.length()) {
            self.encoder
                .encode_element_header(
                    &mut *out,
                    DataElementHeader::new(tag, VR::SQ, Length::UNDEFINED),
                )
                .context(EncodeHeaderSnafu { tag })?;
            out.extend_from_slice(&body);
            self.encoder
                .encode_sequence_delimiter(&mut *out)
                .context(EncodeItemSnafu { tag })?;
        } else {
            let len = self.defined_length(tag, body.len())?;
            self.encoder
                .encode_element_header(&mut *out, DataElementHeader::new(tag, VR::SQ, len))
                .context(EncodeHeaderSnafu { tag })?;
            out.extend_from_slice(&body);
        }
        Ok(())
    }

    /// Encapsulated pixel data is always written with undefined length,
    /// starting with the basic offset table item.
    fn write_pixel_sequence(
        &self,
        out: &mut Vec<u8>,
        tag: Tag,
        vr: VR,
        seq: &PixelFragmentSequence,
    ) -> Result<()> {
        self.encoder
            .encode_element_header(&mut *out, DataElementHeader::new(tag, vr, Length::UNDEFINED))
            .context(EncodeHeaderSnafu { tag })?;

        let table_len = self.defined_length(tag, seq.offset_table().len() * 4)?;
        self.encoder
            .encode_item_header(&mut *out, table_len.0)
            .context(EncodeItemSnafu { tag })?;
        let basic = self.ts.basic_encoder();
        for offset in seq.offset_table() {
            basic
                .encode_ul(&mut *out, *offset)
                .context(WriteOffsetTableSnafu { tag })?;
        }

        for fragment in seq.fragments() {
            let padded = fragment.len() + fragment.len() % 2;
            let len = self.defined_length(tag, padded)?;
            self.encoder
                .encode_item_header(&mut *out, len.0)
                .context(EncodeItemSnafu { tag })?;
            out.extend_from_slice(fragment);
            if fragment.len() % 2 == 1 {
                out.push(0);
            }
        }

        self.encoder
            .encode_sequence_delimiter(&mut *out)
            .context(EncodeItemSnafu { tag })?;
        Ok(())
    }
}

fn declared_charset(element: &InMemElement, current: SpecificCharacterSet) -> SpecificCharacterSet {
    let code = match element.to_raw_str() {
        Ok(code) => code,
        Err(_) => return current,
    };
    SpecificCharacterSet::from_code(&code).unwrap_or_else(|| {
        warn!(
            "Unsupported character set `{}`, assuming the default repertoire",
            code
        );
        SpecificCharacterSet::Default
    })
}

/// Encode a data set in the given transfer syntax with default options.
pub fn write_dataset(obj: &InMemDicomObject, ts: &TransferSyntax) -> Result<Vec<u8>> {
    DataSetWriter::new(ts).encode(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_dataset;
    use dicomkit_core::value::DataSetSequence;
    use dicomkit_core::DataElement;
    use dicomkit_encoding::transfer_syntax::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    #[test]
    fn write_sorted_and_padded() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::PATIENT_ID, VR::LO, "ABC");
        obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3");

        let bytes = write_dataset(&obj, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            // (0008,0018) UI 6 "1.2.3\0"
            0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x06, 0x00, b'1', b'.', b'2', b'.', b'3', 0x00,
            // (0010,0020) LO 4 "ABC "
            0x10, 0x00, 0x20, 0x00, b'L', b'O', 0x04, 0x00, b'A', b'B', b'C', b' ',
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn group_length_is_recomputed() {
        let mut obj = InMemDicomObject::new_empty();
        // stale group length
        obj.put_u32(Tag(0x0010, 0x0000), 9999);
        obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe");
        obj.put_str(tags::PATIENT_ID, VR::LO, "1");

        let bytes = write_dataset(&obj, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        // 2 elements of 8 header bytes, 4 and 2 value bytes
        assert_eq!(&bytes[..12], &[0x10, 0x00, 0x00, 0x00, 4, 0, 0, 0, 22, 0, 0, 0]);
        assert_eq!(bytes.len(), 12 + 22);

        let back = read_dataset(&bytes, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(back.get_int::<u32>(Tag(0x0010, 0x0000)).unwrap(), 22);
    }

    fn with_sequence() -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_str(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.840.1");
        let mut obj = InMemDicomObject::new_empty();
        obj.put_sequence(tags::REFERENCED_IMAGE_SEQUENCE, vec![item]);
        obj
    }

    #[test]
    fn sequences_defined_by_default() {
        let bytes = write_dataset(&with_sequence(), &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 26, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x00, 0xe0, 18, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x50, 0x11, b'U', b'I', 0x0a, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn sequences_undefined_on_request() {
        let writer = DataSetWriter::with_options(
            &EXPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::new().sequence_length(SequenceLength::Undefined),
        );
        let bytes = writer.encode(&with_sequence()).unwrap();
        assert_eq!(&bytes[8..12], &[0xff; 4]);
        assert_eq!(&bytes[16..20], &[0xff; 4]);
        assert_eq!(
            &bytes[bytes.len() - 16..],
            &[
                0xfe, 0xff, 0x0d, 0xe0, 0, 0, 0, 0, //
                0xfe, 0xff, 0xdd, 0xe0, 0, 0, 0, 0,
            ]
        );
        let back = read_dataset(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(back, with_sequence());
    }

    #[test]
    fn preserve_keeps_recorded_lengths() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            DataSetSequence::undefined(vec![InMemDicomObject::new_with_len(Length(0))]),
        ));
        let writer = DataSetWriter::with_options(
            &IMPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::new().sequence_length(SequenceLength::Preserve),
        );
        let bytes = writer.encode(&obj).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x40, 0x11, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn encapsulated_pixel_data() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_pixel_sequence(
            tags::PIXEL_DATA,
            VR::OB,
            PixelFragmentSequence::new(vec![0u32], vec![vec![1, 2, 3]]),
        );
        let bytes = write_dataset(&obj, &EXPLICIT_VR_BIG_ENDIAN).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x7f, 0xe0, 0x00, 0x10, b'O', b'B', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xfe, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00,
            0xff, 0xfe, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x04, 0x01, 0x02, 0x03, 0x00,
            0xff, 0xfe, 0xe0, 0xdd, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn incompatible_values_are_reported() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from("512")));
        let err = write_dataset(&obj, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(
            matches!(err, Error::EncodeValue { tag, .. } if tag == tags::ROWS),
            "{:?}",
            err
        );
    }
}
