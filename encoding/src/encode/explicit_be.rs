//! Explicit VR Big Endian syntax transfer implementation.

use crate::encode::explicit_le::{write_explicit_header, write_item};
use crate::encode::{
    Encode, Result, WriteItemDelimiterSnafu, WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu,
    WriteTagSnafu,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use dicomkit_core::header::DataElementHeader;
use dicomkit_core::Tag;
use snafu::ResultExt;
use std::io::Write;

/// A concrete encoder for the transfer syntax ExplicitVRBigEndian.
///
/// Item headers and delimiters are written in big endian as well.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianEncoder;

impl Encode for ExplicitVRBigEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        BigEndian::write_u16(&mut buf[..], tag.group());
        BigEndian::write_u16(&mut buf[2..], tag.element());
        to.write_all(&buf).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        write_explicit_header::<BigEndian, _>(to, de)
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<BigEndian>(Tag::ITEM, len))
            .context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<BigEndian>(Tag::ITEM_DELIMITER, 0))
            .context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<BigEndian>(Tag::SEQUENCE_DELIMITER, 0))
            .context(WriteSequenceDelimiterSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRBigEndianEncoder;
    use crate::decode::explicit_be::ExplicitVRBigEndianDecoder;
    use crate::decode::Decode;
    use crate::encode::Encode;
    use dicomkit_core::header::{DataElementHeader, HasLength, Header, Length};
    use dicomkit_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
        0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
        0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x08,
    ];

    #[test]
    fn encode_explicit_vr_big_endian() {
        let enc = ExplicitVRBigEndianEncoder;
        let mut buf = Vec::new();
        enc.encode_element_header(
            &mut buf,
            DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2)),
        )
        .unwrap();
        enc.encode_element_header(
            &mut buf,
            DataElementHeader::new(Tag(0x7FE0, 0x0010), VR::OW, Length(256)),
        )
        .unwrap();
        enc.encode_item_header(&mut buf, 8).unwrap();
        assert_eq!(&buf[..], RAW);

        // and back
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut source = &buf[..];
        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0010));
        let (header, _) = dec.decode_header(&mut source).unwrap();
        assert_eq!(header.length(), Length(256));
        let item = dec.decode_item_header(&mut source).unwrap();
        assert_eq!(item.length(), Length(8));
    }
}
