//! Module containing the DICOM Transfer Syntax data structure and related methods.
//!
//! A [`TransferSyntax`] describes how a data set is laid out in bytes:
//! whether value representations are explicit,
//! the byte order of binary values,
//! and whether pixel data is encapsulated in fragments.
//! It produces the matching element [decoder](TransferSyntax::decoder)
//! and [encoder](TransferSyntax::encoder).
//!
//! The transfer syntaxes supported by this library
//! are collected in the [`TransferSyntaxRegistry`].

pub mod entries;
mod registry;

pub use self::registry::TransferSyntaxRegistry;
pub use byteordered::Endianness;

use crate::decode::basic::BasicDecoder;
use crate::decode::explicit_be::ExplicitVRBigEndianDecoder;
use crate::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use crate::decode::implicit_le::ImplicitVRLittleEndianDecoder;
use crate::decode::{self, Decode, UnknownVrPolicy};
use crate::encode::explicit_be::ExplicitVRBigEndianEncoder;
use crate::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use crate::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use crate::encode::{self, BasicEncoder, Encode};
use dicomkit_core::dictionary::DataDictionary;
use dicomkit_core::header::{DataElementHeader, SequenceItemHeader};
use dicomkit_core::Tag;
use dicomkit_dictionary_std::StandardDataDictionary;
use std::io::{Read, Write};

/// The element encoding of a data set:
/// the combination of VR explicitness and byte order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DataSetEncoding {
    /// Implicit VR, little endian.
    ImplicitVRLittleEndian,
    /// Explicit VR, little endian.
    ExplicitVRLittleEndian,
    /// Explicit VR, big endian.
    ExplicitVRBigEndian,
}

/// How the pixel data attribute is laid out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelEncoding {
    /// Pixel data is a single run of native samples.
    Native,
    /// Pixel data is a sequence of fragments with undefined length,
    /// opaque to this library.
    Encapsulated,
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The element encoding of the data set.
    encoding: DataSetEncoding,
    /// The pixel data layout.
    pixel_encoding: PixelEncoding,
}

/// Trait for containers of transfer syntax specifiers.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing padding (`\0` or space) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        encoding: DataSetEncoding,
        pixel_encoding: PixelEncoding,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            encoding,
            pixel_encoding,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain the element encoding of the data set.
    pub const fn encoding(&self) -> DataSetEncoding {
        self.encoding
    }

    /// Obtain the expected endianness of binary values.
    pub const fn endianness(&self) -> Endianness {
        match self.encoding {
            DataSetEncoding::ExplicitVRBigEndian => Endianness::Big,
            _ => Endianness::Little,
        }
    }

    /// Whether value representations are written
    /// as part of the element header.
    pub const fn is_explicit_vr(&self) -> bool {
        !matches!(self.encoding, DataSetEncoding::ImplicitVRLittleEndian)
    }

    /// Obtain the pixel data layout.
    pub const fn pixel_encoding(&self) -> PixelEncoding {
        self.pixel_encoding
    }

    /// Whether pixel data is encapsulated in fragments.
    pub const fn is_encapsulated_pixel_data(&self) -> bool {
        matches!(self.pixel_encoding, PixelEncoding::Encapsulated)
    }

    /// Retrieve the element decoder for this transfer syntax,
    /// using the standard data dictionary
    /// and the default unknown VR policy.
    pub fn decoder(&self) -> DataSetDecoder {
        self.decoder_with(StandardDataDictionary, UnknownVrPolicy::default())
    }

    /// Retrieve the element decoder for this transfer syntax,
    /// resolving implicit value representations with the given dictionary.
    pub fn decoder_with<D>(&self, dict: D, unknown_vr: UnknownVrPolicy) -> DataSetDecoder<D>
    where
        D: DataDictionary,
    {
        match self.encoding {
            DataSetEncoding::ImplicitVRLittleEndian => {
                DataSetDecoder::ImplicitVRLittleEndian(ImplicitVRLittleEndianDecoder::with_dict(dict))
            }
            DataSetEncoding::ExplicitVRLittleEndian => DataSetDecoder::ExplicitVRLittleEndian(
                ExplicitVRLittleEndianDecoder::with_unknown_vr_policy(unknown_vr),
            ),
            DataSetEncoding::ExplicitVRBigEndian => DataSetDecoder::ExplicitVRBigEndian(
                ExplicitVRBigEndianDecoder::with_unknown_vr_policy(unknown_vr),
            ),
        }
    }

    /// Retrieve the element encoder for this transfer syntax.
    pub fn encoder(&self) -> DataSetEncoder {
        match self.encoding {
            DataSetEncoding::ImplicitVRLittleEndian => {
                DataSetEncoder::ImplicitVRLittleEndian(ImplicitVRLittleEndianEncoder)
            }
            DataSetEncoding::ExplicitVRLittleEndian => {
                DataSetEncoder::ExplicitVRLittleEndian(ExplicitVRLittleEndianEncoder)
            }
            DataSetEncoding::ExplicitVRBigEndian => {
                DataSetEncoder::ExplicitVRBigEndian(ExplicitVRBigEndianEncoder)
            }
        }
    }

    /// Obtain a dynamic basic decoder,
    /// based on this transfer syntax' expected endianness.
    pub fn basic_decoder(&self) -> BasicDecoder {
        BasicDecoder::from(self.endianness())
    }

    /// Obtain a dynamic basic encoder,
    /// based on this transfer syntax' expected endianness.
    pub fn basic_encoder(&self) -> BasicEncoder {
        BasicEncoder::from(self.endianness())
    }
}

/// An element decoder for any of the supported data set encodings,
/// chosen at run-time.
#[derive(Debug, Clone)]
pub enum DataSetDecoder<D = StandardDataDictionary> {
    /// Implicit VR Little Endian
    ImplicitVRLittleEndian(ImplicitVRLittleEndianDecoder<D>),
    /// Explicit VR Little Endian
    ExplicitVRLittleEndian(ExplicitVRLittleEndianDecoder),
    /// Explicit VR Big Endian
    ExplicitVRBigEndian(ExplicitVRBigEndianDecoder),
}

macro_rules! dispatch {
    ($s: expr, $t: ident, |$e: ident| $f: expr) => {
        match $s {
            $t::ImplicitVRLittleEndian($e) => $f,
            $t::ExplicitVRLittleEndian($e) => $f,
            $t::ExplicitVRBigEndian($e) => $f,
        }
    };
}

impl<D> Decode for DataSetDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, source: &mut S) -> decode::Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        dispatch!(self, DataSetDecoder, |d| d.decode_header(source))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> decode::Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        dispatch!(self, DataSetDecoder, |d| d.decode_item_header(source))
    }

    fn decode_tag<S>(&self, source: &mut S) -> decode::Result<Tag>
    where
        S: ?Sized + Read,
    {
        dispatch!(self, DataSetDecoder, |d| d.decode_tag(source))
    }
}

/// An element encoder for any of the supported data set encodings,
/// chosen at run-time.
#[derive(Debug, Clone)]
pub enum DataSetEncoder {
    /// Implicit VR Little Endian
    ImplicitVRLittleEndian(ImplicitVRLittleEndianEncoder),
    /// Explicit VR Little Endian
    ExplicitVRLittleEndian(ExplicitVRLittleEndianEncoder),
    /// Explicit VR Big Endian
    ExplicitVRBigEndian(ExplicitVRBigEndianEncoder),
}

impl Encode for DataSetEncoder {
    fn encode_tag<W>(&self, to: W, tag: Tag) -> encode::Result<()>
    where
        W: Write,
    {
        dispatch!(self, DataSetEncoder, |e| e.encode_tag(to, tag))
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> encode::Result<usize>
    where
        W: Write,
    {
        dispatch!(self, DataSetEncoder, |e| e.encode_element_header(to, de))
    }

    fn encode_item_header<W>(&self, to: W, len: u32) -> encode::Result<()>
    where
        W: Write,
    {
        dispatch!(self, DataSetEncoder, |e| e.encode_item_header(to, len))
    }

    fn encode_item_delimiter<W>(&self, to: W) -> encode::Result<()>
    where
        W: Write,
    {
        dispatch!(self, DataSetEncoder, |e| e.encode_item_delimiter(to))
    }

    fn encode_sequence_delimiter<W>(&self, to: W) -> encode::Result<()>
    where
        W: Write,
    {
        dispatch!(self, DataSetEncoder, |e| e.encode_sequence_delimiter(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomkit_core::header::{HasLength, Header, Length};
    use dicomkit_core::VR;
    use rstest::rstest;

    #[rstest]
    #[case(DataSetEncoding::ImplicitVRLittleEndian)]
    #[case(DataSetEncoding::ExplicitVRLittleEndian)]
    #[case(DataSetEncoding::ExplicitVRBigEndian)]
    fn header_round_trip(#[case] encoding: DataSetEncoding) {
        let ts = TransferSyntax::new("1.2.3", "Test", encoding, PixelEncoding::Native);
        let header = DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, Length(8));
        let mut buf = Vec::new();
        let written = ts.encoder().encode_element_header(&mut buf, header).unwrap();
        assert_eq!(written, buf.len());
        ts.encoder().encode_item_header(&mut buf, 4).unwrap();

        let decoder = ts.decoder();
        let mut source = &buf[..];
        let (decoded, read) = decoder.decode_header(&mut source).unwrap();
        assert_eq!(read, written);
        assert_eq!(decoded.tag(), Tag(0x0010, 0x0020));
        assert_eq!(decoded.vr(), VR::LO);
        assert_eq!(decoded.length(), Length(8));
        let item = decoder.decode_item_header(&mut source).unwrap();
        assert_eq!(item.length(), Length(4));
    }

    #[test]
    fn properties() {
        let ts = TransferSyntax::new(
            "1.2.840.10008.1.2.2",
            "Explicit VR Big Endian",
            DataSetEncoding::ExplicitVRBigEndian,
            PixelEncoding::Native,
        );
        assert_eq!(ts.endianness(), Endianness::Big);
        assert!(ts.is_explicit_vr());
        assert!(!ts.is_encapsulated_pixel_data());
        assert_eq!(ts.basic_decoder(), BasicDecoder::from(Endianness::Big));
    }
}
