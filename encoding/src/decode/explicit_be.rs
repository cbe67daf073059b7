//! Explicit VR Big Endian syntax transfer implementation.

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::explicit_le::resolve_vr;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, ReadHeaderTagSnafu, ReadItemHeaderSnafu,
    ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu, ReadVrSnafu, Result,
    UnknownVrPolicy,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use dicomkit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dicomkit_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Big Endian transfer syntax.
///
/// Item headers and delimiters are also read in big endian.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
    unknown_vr: UnknownVrPolicy,
}

impl ExplicitVRBigEndianDecoder {
    /// Create a decoder with the given policy for unknown VR codes.
    pub fn with_unknown_vr_policy(unknown_vr: UnknownVrPolicy) -> Self {
        ExplicitVRBigEndianDecoder {
            basic: BigEndianBasicDecoder,
            unknown_vr,
        }
    }
}

impl Decode for ExplicitVRBigEndianDecoder {
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        if tag.group() == 0xFFFE {
            // item delimiters do not have VR or reserved field
            source.read_exact(&mut buf).context(ReadItemLengthSnafu)?;
            let len = BigEndian::read_u32(&buf);
            return Ok((DataElementHeader::new(tag, VR::UN, Length(len)), 8));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = resolve_vr(tag, [buf[0], buf[1]], self.unknown_vr)?;

        let bytes_read;
        let len = if vr.has_long_length() {
            // skip the 2 reserved bytes
            source
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            bytes_read = 12;
            BigEndian::read_u32(&buf)
        } else {
            source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            bytes_read = 8;
            u32::from(BigEndian::read_u16(&buf[0..2]))
        };

        Ok((DataElementHeader::new(tag, vr, Length(len)), bytes_read))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        let group = BigEndian::read_u16(&buf[0..2]);
        let element = BigEndian::read_u16(&buf[2..4]);
        let len = BigEndian::read_u32(&buf[4..8]);

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadTagSnafu)?;
        Ok(Tag(
            BigEndian::read_u16(&buf[0..2]),
            BigEndian::read_u16(&buf[2..4]),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRBigEndianDecoder;
    use crate::decode::Decode;
    use dicomkit_core::header::{HasLength, Header, Length};
    use dicomkit_core::{Tag, VR};
    use std::io::{Cursor, Read, Seek, SeekFrom};

    //  Tag: (0002,0002) Media Storage SOP Class UID
    //  VR: UI
    //  Length: 26
    //  Value: "1.2.840.10008.5.1.4.1.1.1\0"
    // --
    //  Tag: (0028,0010) Rows
    //  VR: US
    //  Length: 2
    //  Value: 512
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x00, 0x02, 0x00, 0x02, b'U', b'I', 0x00, 0x1a,
        0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30, 0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e,
        0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e, 0x31, 0x2e, 0x31, 0x00,
        0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
        0x02, 0x00,
    ];

    #[test]
    fn decode_explicit_vr_big_endian() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);
        {
            let (elem, bytes_read) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0002, 0x0002));
            assert_eq!(elem.vr(), VR::UI);
            assert_eq!(elem.length(), Length(26));
            assert_eq!(bytes_read, 8);
            let mut buffer = [0u8; 26];
            cursor.read_exact(&mut buffer).expect("should read it fine");
            assert_eq!(&buffer, b"1.2.840.10008.5.1.4.1.1.1\0");
        }
        assert_eq!(cursor.seek(SeekFrom::Current(0)).unwrap(), 34);
        {
            let (elem, _) = dec
                .decode_header(&mut cursor)
                .expect("should find an element");
            assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
            assert_eq!(elem.vr(), VR::US);
            assert_eq!(elem.length(), Length(2));
        }
    }

    //  Tag: (0040,A730) Content Sequence
    //  VR: SQ
    //  Length: undefined
    // --
    //  Item, length 0x10
    // --
    //  Sequence Delimitation Item
    #[rustfmt::skip]
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x00, 0x40, 0xA7, 0x30, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFE, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x10,
        0xFF, 0xFE, 0xE0, 0xDD, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items_big_endian() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0040, 0xA730));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert!(item.is_item());
        assert_eq!(item.length(), Length(16));

        let delim = dec.decode_item_header(&mut cursor).unwrap();
        assert!(delim.is_sequence_delimiter());
    }
}
