//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::explicit_le::write_item;
use crate::encode::{
    Encode, Result, WriteHeaderSnafu, WriteItemDelimiterSnafu, WriteItemHeaderSnafu,
    WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomkit_core::header::{DataElementHeader, HasLength, Header};
use dicomkit_core::Tag;
use snafu::ResultExt;
use std::io::Write;

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian
#[derive(Debug, Default, Clone)]
pub struct ImplicitVRLittleEndianEncoder;

impl Encode for ImplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        LittleEndian::write_u16(&mut buf[..], tag.group());
        LittleEndian::write_u16(&mut buf[2..], tag.element());
        to.write_all(&buf).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        let buf = write_item::<LittleEndian>(de.tag(), de.length().0);
        to.write_all(&buf).context(WriteHeaderSnafu)?;
        Ok(8)
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
    use super::ImplicitVRLittleEndianEncoder;
    use crate::encode::Encode;
    use dicomkit_core::header::{DataElementHeader, Length};
    use dicomkit_core::{Tag, VR};

    // manually crafting some DICOM data elements
    //   Tag: (0002,0002) Media Storage SOP Class UID
    //   Length: 26
    // --
    //   Tag: (0002,0010) Transfer Syntax UID
    //   Length: 20
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x02, 0x00, 0x1a, 0x00, 0x00, 0x00,
        0x02, 0x00, 0x10, 0x00, 0x14, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn encode_implicit_vr_le() {
        let enc = ImplicitVRLittleEndianEncoder;
        let mut buf = Vec::new();
        let de = DataElementHeader::new(Tag(0x0002, 0x0002), VR::UI, Length(26));
        assert_eq!(enc.encode_element_header(&mut buf, de).unwrap(), 8);
        let de = DataElementHeader::new(Tag(0x0002, 0x0010), VR::UI, Length(20));
        assert_eq!(enc.encode_element_header(&mut buf, de).unwrap(), 8);
        assert_eq!(&buf[..], RAW);
    }

    #[test]
    fn long_values_need_no_check() {
        let enc = ImplicitVRLittleEndianEncoder;
        let mut buf = Vec::new();
        let de = DataElementHeader::new(Tag(0x0008, 0x1030), VR::LO, Length(0x1_0000));
        assert!(enc.encode_element_header(&mut buf, de).is_ok());
        assert_eq!(&buf[4..], &[0x00, 0x00, 0x01, 0x00]);
    }
}
