//! Explicit VR Little Endian syntax transfer implementation

use crate::encode::{
    Encode, Result, ValueTooLongSnafu, WriteHeaderSnafu, WriteItemDelimiterSnafu,
    WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomkit_core::header::{DataElementHeader, HasLength, Header};
use dicomkit_core::Tag;
use snafu::{ensure, ResultExt};
use std::io::Write;

/// A concrete encoder for the transfer syntax ExplicitVRLittleEndian
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianEncoder;

/// Write an explicit VR element header in the byte order `O`.
pub(crate) fn write_explicit_header<O, W>(mut to: W, de: DataElementHeader) -> Result<usize>
where
    O: ByteOrder,
    W: Write,
{
    let vr_bytes = de.vr().to_bytes();
    if de.vr().has_long_length() {
        // PS3.5 7.1.2:
        // for all other VRs the 16 bits following the two byte VR Field
        // are reserved for use by later versions of the DICOM Standard.
        // These reserved bytes shall be set to 0000H and shall not be
        // used or decoded (Table 7.1-1). The Value Length Field is a
        // 32-bit unsigned integer.
        let mut buf = [0u8; 12];
        O::write_u16(&mut buf[0..], de.tag().group());
        O::write_u16(&mut buf[2..], de.tag().element());
        buf[4] = vr_bytes[0];
        buf[5] = vr_bytes[1];
        // buf[6..8] is kept zeroed
        O::write_u32(&mut buf[8..], de.length().0);
        to.write_all(&buf).context(WriteHeaderSnafu)?;
        Ok(12)
    } else {
        // PS3.5 7.1.2:
        // for VRs of AE, AS, AT, CS, DA, DS, DT, FL, FD, IS, LO, LT, PN,
        // SH, SL, SS, ST, TM, UI, UL and US the Value Length Field is the
        // 16-bit unsigned integer following the two byte VR Field (Table
        // 7.1-2). The value of the Value Length Field shall equal the
        // length of the Value Field.
        let len = de.length().0;
        ensure!(
            len <= u32::from(u16::MAX),
            ValueTooLongSnafu {
                tag: de.tag(),
                vr: de.vr(),
                len,
            }
        );
        let mut buf = [0u8; 8];
        O::write_u16(&mut buf[0..], de.tag().group());
        O::write_u16(&mut buf[2..], de.tag().element());
        buf[4] = vr_bytes[0];
        buf[5] = vr_bytes[1];
        O::write_u16(&mut buf[6..], len as u16);
        to.write_all(&buf).context(WriteHeaderSnafu)?;
        Ok(8)
    }
}

/// Write the tag and length of an item or delimiter in the byte order `O`.
pub(crate) fn write_item<O: ByteOrder>(tag: Tag, len: u32) -> [u8; 8] {
    let mut buf = [0u8; 8];
    O::write_u16(&mut buf[0..], tag.group());
    O::write_u16(&mut buf[2..], tag.element());
    O::write_u32(&mut buf[4..], len);
    buf
}

impl Encode for ExplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        LittleEndian::write_u16(&mut buf[..], tag.group());
        LittleEndian::write_u16(&mut buf[2..], tag.element());
        to.write_all(&buf).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        write_explicit_header::<LittleEndian, _>(to, de)
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<LittleEndian>(Tag::ITEM, len))
            .context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<LittleEndian>(Tag::ITEM_DELIMITER, 0))
            .context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        to.write_all(&write_item::<LittleEndian>(Tag::SEQUENCE_DELIMITER, 0))
            .context(WriteSequenceDelimiterSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianEncoder;
    use crate::encode::Encode;
    use dicomkit_core::header::{DataElementHeader, Length};
    use dicomkit_core::{Tag, VR};

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00,
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
    ];

    #[test]
    fn encode_data_elements() -> Result {
        let enc = ExplicitVRLittleEndianEncoder;
        let mut buf = Vec::new();
        {
            let de = DataElementHeader::new(Tag(0x0002, 0x0002), VR::UI, Length(26));
            assert_eq!(enc.encode_element_header(&mut buf, de)?, 8);
        }
        {
            let de = DataElementHeader::new(Tag(0x0002, 0x0010), VR::UI, Length(20));
            assert_eq!(enc.encode_element_header(&mut buf, de)?, 8);
        }
        assert_eq!(&buf[..], RAW);
        Ok(())
    }

    #[rustfmt::skip]
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x08, 0x00, 0x3F, 0x10, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn encode_items() -> Result {
        let enc = ExplicitVRLittleEndianEncoder;
        let mut buf = Vec::new();
        let de = DataElementHeader::new(Tag(0x0008, 0x103F), VR::SQ, Length::UNDEFINED);
        assert_eq!(enc.encode_element_header(&mut buf, de)?, 12);
        enc.encode_item_header(&mut buf, Length::UNDEFINED.0)?;
        enc.encode_item_delimiter(&mut buf)?;
        enc.encode_sequence_delimiter(&mut buf)?;
        assert_eq!(&buf[..], RAW_SEQUENCE_ITEMS);
        Ok(())
    }
}
