//! Decoding of complete data sets from an in-memory byte buffer.
//!
//! The [`DataSetReader`] walks the buffer element by element,
//! recursing into sequence items
//! and collecting encapsulated pixel data fragments,
//! while keeping track of the absolute position of each element
//! so that failures can be pinned to a byte offset.

use crate::mem::{InMemDicomObject, InMemElement};
use dicomkit_core::dictionary::DataDictionary;
use dicomkit_core::header::{DataElementHeader, HasLength, Header, Length, SequenceItemHeader};
use dicomkit_core::value::{DataSetSequence, PixelFragmentSequence, PrimitiveValue, C};
use dicomkit_core::{DataElement, Tag, VR};
use dicomkit_dictionary_std::tags;
use dicomkit_dictionary_std::StandardDataDictionary;
use dicomkit_encoding::decode::primitive_value::{
    decode_primitive, DecodeValueError, TextPadding,
};
use dicomkit_encoding::decode::{self, Decode, UnknownVrPolicy};
use dicomkit_encoding::text::SpecificCharacterSet;
use dicomkit_encoding::transfer_syntax::DataSetDecoder;
use dicomkit_encoding::TransferSyntax;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use tracing::warn;

/// An error which may occur when decoding a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The data ended in the middle of an element.
    #[snafu(display("Unexpected end of data at position {}", position))]
    UnexpectedEndOfData { position: u64, backtrace: Backtrace },
    /// The data is structurally inconsistent.
    #[snafu(display("Malformed structure at position {}: {}", position, reason))]
    MalformedStructure {
        position: u64,
        reason: String,
        backtrace: Backtrace,
    },
    /// An explicit value representation is not in the known set.
    #[snafu(display(
        "Unknown value representation {:?} for element {} at position {}",
        code,
        tag,
        position
    ))]
    UnknownVr {
        tag: Tag,
        code: String,
        position: u64,
        backtrace: Backtrace,
    },
    /// The transfer syntax is not supported.
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    /// A text value could not be decoded.
    #[snafu(display("Could not decode the value of {} at position {}", tag, position))]
    DecodeValue {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: DecodeValueError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The absolute byte offset at which the error was detected,
    /// if applicable.
    pub fn position(&self) -> Option<u64> {
        match self {
            Error::UnexpectedEndOfData { position, .. }
            | Error::MalformedStructure { position, .. }
            | Error::UnknownVr { position, .. }
            | Error::DecodeValue { position, .. } => Some(*position),
            Error::UnsupportedTransferSyntax { .. } => None,
        }
    }
}

/// How textual values of odd length are handled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OddLengthPolicy {
    /// Accept the value as is. It is padded again on writing.
    #[default]
    Accept,
    /// Fail unless the last byte is the padding byte of the VR.
    Reject,
}

/// The set of options for reading a data set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ReadOptions {
    /// the maximum nesting depth of sequence items
    pub max_nesting_depth: u32,
    /// how trailing padding of textual values is handled
    pub text_padding: TextPadding,
    /// how odd-length textual values are handled
    pub odd_length: OddLengthPolicy,
    /// how unknown explicit VR codes are handled
    pub unknown_vr: UnknownVrPolicy,
    /// the character set assumed until the data set declares one
    pub charset: SpecificCharacterSet,
    /// the position of the first byte of the buffer in the enclosing file
    pub base_offset: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            max_nesting_depth: 32,
            text_padding: TextPadding::default(),
            odd_length: OddLengthPolicy::default(),
            unknown_vr: UnknownVrPolicy::default(),
            charset: SpecificCharacterSet::default(),
            base_offset: 0,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the maximum nesting depth of sequence items.
    pub fn max_nesting_depth(mut self, depth: u32) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Replace the text padding handling strategy.
    pub fn text_padding(mut self, text_padding: TextPadding) -> Self {
        self.text_padding = text_padding;
        self
    }

    /// Replace the odd length policy.
    pub fn odd_length(mut self, odd_length: OddLengthPolicy) -> Self {
        self.odd_length = odd_length;
        self
    }

    /// Replace the unknown VR policy.
    pub fn unknown_vr(mut self, unknown_vr: UnknownVrPolicy) -> Self {
        self.unknown_vr = unknown_vr;
        self
    }

    /// Replace the initial character set.
    pub fn charset(mut self, charset: SpecificCharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Replace the base offset reported in errors.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }
}

/// Where a data set being read ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Bound {
    /// The data set extends to the end of the buffer.
    EndOfData,
    /// The data set ends at this (buffer-relative) position.
    At(usize),
    /// The data set ends with an item delimiter.
    Delimited,
    /// The data set extends to the end of the buffer,
    /// or up to the first element with a tag not below this one.
    Before(Tag),
}

/// A group length element waiting to be checked against the measured group.
#[derive(Debug, Copy, Clone)]
struct PendingGroupLength {
    group: u16,
    declared: u32,
    start: usize,
}

/// A reader of complete data sets from a byte buffer.
#[derive(Debug)]
pub struct DataSetReader<'a, D = StandardDataDictionary> {
    data: &'a [u8],
    position: usize,
    decoder: DataSetDecoder<D>,
    ts: &'a TransferSyntax,
    options: ReadOptions,
    /// the character set in effect at the top level
    charset: SpecificCharacterSet,
}

impl<'a> DataSetReader<'a> {
    /// Create a reader for data encoded in the given transfer syntax,
    /// with the standard data dictionary.
    pub fn new(data: &'a [u8], ts: &'a TransferSyntax) -> Self {
        Self::with_dict(data, ts, StandardDataDictionary, ReadOptions::default())
    }
}

impl<'a, D> DataSetReader<'a, D>
where
    D: DataDictionary,
{
    /// Create a reader with the given data dictionary and options.
    pub fn with_dict(data: &'a [u8], ts: &'a TransferSyntax, dict: D, options: ReadOptions) -> Self {
        DataSetReader {
            data,
            position: 0,
            decoder: ts.decoder_with(dict, options.unknown_vr),
            ts,
            options,
            charset: options.charset,
        }
    }

    /// The absolute position of the reader.
    pub fn position(&self) -> u64 {
        self.options.base_offset + self.position as u64
    }

    fn position_at(&self, pos: usize) -> u64 {
        self.options.base_offset + pos as u64
    }

    /// Read the whole buffer as a single data set.
    ///
    /// When the reader was already advanced with [`read_until`](Self::read_until)
    /// or [`read_sequence_items`](Self::read_sequence_items),
    /// only the remaining elements are read.
    pub fn read_dataset(mut self) -> Result<InMemDicomObject> {
        let charset = self.charset;
        self.read_object(Bound::EndOfData, None, 0, charset, Length::UNDEFINED)
    }

    /// Read the elements of the data set up to the given tag,
    /// stopping right before the first element
    /// with a tag greater than or equal to it.
    pub fn read_until(&mut self, tag: Tag) -> Result<InMemDicomObject> {
        let charset = self.charset;
        self.read_object(Bound::Before(tag), None, 0, charset, Length::UNDEFINED)
    }

    /// Read the sequence element at the current position.
    ///
    /// Returns the tag of the sequence and its items,
    /// each paired with the absolute position of its item header,
    /// or `None` if there are no more elements to read.
    pub fn read_sequence_items(
        &mut self,
    ) -> Result<Option<(Tag, Vec<(u64, InMemDicomObject)>)>> {
        if self.position >= self.data.len() {
            return Ok(None);
        }
        let start = self.position;
        let header = self.read_header()?;
        let (tag, vr, len) = (header.tag(), header.vr(), header.length());
        ensure!(
            vr == VR::SQ || (vr == VR::UN && len.is_undefined()),
            MalformedStructureSnafu {
                position: self.position_at(start),
                reason: format!("expected a sequence, but found {} with VR {}", tag, vr),
            }
        );
        let end = if len.is_undefined() {
            None
        } else {
            Some(self.container_end(len.0, None)?)
        };
        let mut positions = Vec::new();
        let items = self.read_items(end, None, 0, self.charset, Some(&mut positions))?;
        Ok(Some((tag, positions.into_iter().zip(items).collect())))
    }

    fn malformed<T>(&self, reason: impl Into<String>) -> Result<T> {
        MalformedStructureSnafu {
            position: self.position(),
            reason: reason.into(),
        }
        .fail()
    }

    /// Decode something with the element decoder,
    /// advancing the position by the number of bytes consumed.
    fn decode_with<T>(
        &mut self,
        f: impl FnOnce(&DataSetDecoder<D>, &mut &'a [u8]) -> decode::Result<T>,
    ) -> Result<T> {
        let data: &'a [u8] = self.data;
        let mut source = &data[self.position..];
        let available = source.len();
        let out = f(&self.decoder, &mut source);
        let consumed = available - source.len();
        let start = self.position();
        match out {
            Ok(value) => {
                self.position += consumed;
                Ok(value)
            }
            Err(e) if e.is_unexpected_eof() => UnexpectedEndOfDataSnafu { position: start }.fail(),
            Err(decode::Error::UnknownVr { tag, code, .. }) => UnknownVrSnafu {
                tag,
                code,
                position: start,
            }
            .fail(),
            Err(e) => MalformedStructureSnafu {
                position: start,
                reason: e.to_string(),
            }
            .fail(),
        }
    }

    fn read_header(&mut self) -> Result<DataElementHeader> {
        self.decode_with(|d, src| d.decode_header(src).map(|(header, _)| header))
    }

    fn read_item_header(&mut self) -> Result<SequenceItemHeader> {
        self.decode_with(|d, src| d.decode_item_header(src))
    }

    /// Take `len` bytes of value data,
    /// which must fit in both the buffer and the enclosing container.
    fn take_value(&mut self, len: u32, limit: Option<usize>) -> Result<&'a [u8]> {
        let len = len as usize;
        let end = self.position.checked_add(len);
        match (end, limit) {
            (Some(end), Some(limit)) if end > limit => {
                return self.malformed(format!(
                    "value length {} exceeds the enclosing container by {} bytes",
                    len,
                    end - limit
                ));
            }
            (Some(end), _) if end <= self.data.len() => {
                let data: &'a [u8] = self.data;
                let bytes = &data[self.position..end];
                self.position = end;
                Ok(bytes)
            }
            _ => UnexpectedEndOfDataSnafu {
                position: self.position_at(self.data.len()),
            }
            .fail(),
        }
    }

    /// The buffer position at which a container of defined length ends,
    /// checked against the enclosing container.
    fn container_end(&self, len: u32, limit: Option<usize>) -> Result<usize> {
        let end = self.position + len as usize;
        if let Some(limit) = limit {
            if end > limit {
                return self.malformed(format!(
                    "container length {} exceeds the enclosing container by {} bytes",
                    len,
                    end - limit
                ));
            }
        }
        if end > self.data.len() {
            return UnexpectedEndOfDataSnafu {
                position: self.position_at(self.data.len()),
            }
            .fail();
        }
        Ok(end)
    }

    fn read_object(
        &mut self,
        bound: Bound,
        outer_limit: Option<usize>,
        depth: u32,
        mut charset: SpecificCharacterSet,
        len: Length,
    ) -> Result<InMemDicomObject> {
        let mut obj = InMemDicomObject::new_with_len(len);
        let limit = match bound {
            Bound::At(end) => Some(end),
            _ => outer_limit,
        };
        let mut group_length: Option<PendingGroupLength> = None;

        loop {
            match bound {
                Bound::EndOfData | Bound::Before(_) if self.position >= self.data.len() => break,
                Bound::At(end) if self.position == end => break,
                Bound::At(end) if self.position > end => {
                    return self.malformed("data set overran its item length");
                }
                Bound::Delimited if limit.map_or(false, |l| self.position >= l) => {
                    return self.malformed("missing item delimiter before the end of the container");
                }
                _ => {}
            }

            let element_start = self.position;
            let header = self.read_header()?;
            let tag = header.tag();

            if matches!(bound, Bound::Before(stop) if tag >= stop) {
                self.position = element_start;
                break;
            }

            if let Some(pending) = group_length {
                if pending.group != tag.group() {
                    check_group_length(pending, element_start);
                    group_length = None;
                }
            }

            match tag {
                Tag::ITEM_DELIMITER if bound == Bound::Delimited => return Ok(obj),
                Tag::ITEM_DELIMITER if bound == Bound::EndOfData => {
                    warn!(
                        "Item delimitation item outside of a sequence in position {}",
                        self.position_at(element_start)
                    );
                    continue;
                }
                Tag::ITEM | Tag::ITEM_DELIMITER | Tag::SEQUENCE_DELIMITER => {
                    return MalformedStructureSnafu {
                        position: self.position_at(element_start),
                        reason: format!("unexpected delimiter {} in data set", tag),
                    }
                    .fail();
                }
                _ => {}
            }

            let element = self.read_element(header, limit, depth, charset)?;

            if tag == tags::SPECIFIC_CHARACTER_SET {
                charset = resolve_charset(&element, charset);
            }
            if tag.is_group_length() {
                if let Ok(declared) = element.to_int::<u32>() {
                    group_length = Some(PendingGroupLength {
                        group: tag.group(),
                        declared,
                        start: self.position,
                    });
                }
            }
            obj.put(element);
        }

        if let Some(pending) = group_length {
            check_group_length(pending, self.position);
        }
        if depth == 0 {
            self.charset = charset;
        }
        Ok(obj)
    }

    fn read_element(
        &mut self,
        header: DataElementHeader,
        limit: Option<usize>,
        depth: u32,
        charset: SpecificCharacterSet,
    ) -> Result<InMemElement> {
        let tag = header.tag();
        let vr = header.vr();
        let len = header.length();

        if len.is_undefined() {
            if vr == VR::SQ || (vr == VR::UN && tag != tags::PIXEL_DATA) {
                let items = self.read_items(None, limit, depth, charset, None)?;
                return Ok(DataElement::new_with_len(
                    tag,
                    VR::SQ,
                    len,
                    DataSetSequence::undefined(items),
                ));
            }
            let fragments = self.read_fragments(limit)?;
            return Ok(DataElement::new_with_len(tag, vr, len, fragments));
        }

        if vr == VR::SQ {
            let end = self.container_end(len.0, limit)?;
            let items = self.read_items(Some(end), limit, depth, charset, None)?;
            return Ok(DataElement::new_with_len(
                tag,
                vr,
                len,
                DataSetSequence::new(items, len),
            ));
        }

        let value_start = self.position();
        let bytes = self.take_value(len.0, limit)?;
        if vr.is_text() && bytes.len() % 2 == 1 {
            let last = bytes[bytes.len() - 1];
            ensure!(
                self.options.odd_length == OddLengthPolicy::Accept || last == vr.padding(),
                MalformedStructureSnafu {
                    position: value_start,
                    reason: format!("odd length {} in textual value of {}", bytes.len(), tag),
                }
            );
        }
        let value = decode_primitive(
            vr,
            bytes,
            self.ts.endianness(),
            charset,
            self.options.text_padding,
        )
        .context(DecodeValueSnafu {
            tag,
            position: value_start,
        })?;
        Ok(DataElement::new_with_len(tag, vr, len, value))
    }

    /// Read the items of a sequence,
    /// up to the given end or until a sequence delimiter.
    fn read_items(
        &mut self,
        end: Option<usize>,
        limit: Option<usize>,
        depth: u32,
        charset: SpecificCharacterSet,
        mut positions: Option<&mut Vec<u64>>,
    ) -> Result<Vec<InMemDicomObject>> {
        let mut items = Vec::new();
        let depth = depth + 1;
        if depth > self.options.max_nesting_depth {
            return self.malformed(format!(
                "nesting depth exceeds the maximum of {}",
                self.options.max_nesting_depth
            ));
        }

        loop {
            if let Some(end) = end {
                if self.position == end {
                    break;
                }
            } else if limit.map_or(false, |l| self.position >= l) {
                return self.malformed("missing sequence delimiter before the end of the container");
            }
            let item_start = self.position;
            match self.read_item_header()? {
                SequenceItemHeader::Item { len } => {
                    if let Some(positions) = positions.as_mut() {
                        positions.push(self.position_at(item_start));
                    }
                    let item = if len.is_undefined() {
                        self.read_object(Bound::Delimited, end.or(limit), depth, charset, len)?
                    } else {
                        let item_end = self.container_end(len.0, end.or(limit))?;
                        self.read_object(Bound::At(item_end), None, depth, charset, len)?
                    };
                    items.push(item);
                }
                SequenceItemHeader::SequenceDelimiter if end.is_none() => break,
                header => {
                    return MalformedStructureSnafu {
                        position: self.position_at(item_start),
                        reason: format!("unexpected {:?} in sequence", header),
                    }
                    .fail();
                }
            }
            if let Some(end) = end {
                if self.position > end {
                    return self.malformed("sequence item overran the sequence length");
                }
            }
        }
        Ok(items)
    }

    /// Read the fragments of encapsulated pixel data,
    /// the first item being the basic offset table.
    fn read_fragments(&mut self, limit: Option<usize>) -> Result<PixelFragmentSequence> {
        let mut offset_table: Option<C<u32>> = None;
        let mut fragments: C<Vec<u8>> = C::new();
        loop {
            let item_start = self.position;
            match self.read_item_header()? {
                SequenceItemHeader::Item { len } if len.is_defined() => {
                    let bytes = self.take_value(len.0, limit)?;
                    if offset_table.is_none() {
                        let table = decode_primitive(
                            VR::UL,
                            bytes,
                            self.ts.endianness(),
                            SpecificCharacterSet::Default,
                            TextPadding::Preserve,
                        )
                        .context(DecodeValueSnafu {
                            tag: Tag::ITEM,
                            position: self.position_at(item_start),
                        })?;
                        offset_table = Some(match table {
                            PrimitiveValue::U32(table) => table,
                            _ => C::new(),
                        });
                    } else {
                        fragments.push(bytes.to_vec());
                    }
                }
                SequenceItemHeader::SequenceDelimiter => break,
                header => {
                    return MalformedStructureSnafu {
                        position: self.position_at(item_start),
                        reason: format!("unexpected {:?} in pixel data fragments", header),
                    }
                    .fail();
                }
            }
        }
        Ok(PixelFragmentSequence::new(
            offset_table.unwrap_or_default(),
            fragments,
        ))
    }
}

fn resolve_charset(
    element: &InMemElement,
    current: SpecificCharacterSet,
) -> SpecificCharacterSet {
    let code = match element.to_raw_str() {
        Ok(code) => code,
        Err(_) => return current,
    };
    match SpecificCharacterSet::from_code(&code) {
        Some(charset) => charset,
        None => {
            warn!(
                "Unsupported character set `{}`, assuming the default repertoire",
                code
            );
            SpecificCharacterSet::Default
        }
    }
}

fn check_group_length(pending: PendingGroupLength, end: usize) {
    let measured = end - pending.start;
    if measured as u64 != u64::from(pending.declared) {
        warn!(
            "Group length of group {:04X}H declared as {} but measured {} bytes",
            pending.group, pending.declared, measured
        );
    }
}

/// Decode a complete data set from a byte buffer
/// in the given transfer syntax,
/// with the standard data dictionary and default options.
pub fn read_dataset(data: &[u8], ts: &TransferSyntax) -> Result<InMemDicomObject> {
    DataSetReader::new(data, ts).read_dataset()
}
