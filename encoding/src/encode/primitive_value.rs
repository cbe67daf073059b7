//! Encoding of primitive values into their raw byte form.

use super::{
    BasicEncode, BasicEncoder, EncodeTextSnafu, IncompatibleValueSnafu, Result, WriteValueSnafu,
};
use crate::decode::primitive_value::uses_specific_charset;
use crate::text::{SpecificCharacterSet, TextCodec};
use byteordered::Endianness;
use dicomkit_core::value::PrimitiveValue;
use dicomkit_core::VR;
use snafu::ResultExt;
use std::io::Write;

/// Encode a primitive value of the given value representation
/// into a new byte vector.
///
/// The output always has an even length:
/// odd-length values are padded with the VR's padding byte
/// (space for text, null for UI and binary data).
/// Binary numbers are written in the given byte order.
/// Textual values are joined with a backslash
/// and encoded with `charset` if the representation is subject to it.
///
/// # Example
///
/// ```
/// # use dicomkit_encoding::encode::encode_primitive;
/// # use dicomkit_encoding::text::SpecificCharacterSet;
/// # use dicomkit_core::{dicom_value, VR};
/// # use byteordered::Endianness;
/// let value = dicom_value!(Strs, ["1.2.3"]);
/// let bytes = encode_primitive(
///     VR::UI,
///     &value,
///     Endianness::Little,
///     SpecificCharacterSet::Default,
/// )?;
/// assert_eq!(bytes, b"1.2.3\0");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn encode_primitive(
    vr: VR,
    value: &PrimitiveValue,
    endianness: Endianness,
    charset: SpecificCharacterSet,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(value.calculate_byte_len());
    if vr.is_text() {
        let text = match value {
            PrimitiveValue::Empty => return Ok(out),
            // numbers given to a textual VR (such as IS or DS)
            // are written in their decimal form
            value => value.to_raw_str(),
        };
        let codec = if uses_specific_charset(vr) {
            charset
        } else {
            SpecificCharacterSet::Default
        };
        out = codec.encode(&text).context(EncodeTextSnafu)?;
    } else {
        write_binary(&mut out, vr, value, BasicEncoder::new(endianness))?;
    }

    if out.len() % 2 == 1 {
        out.push(vr.padding());
    }
    Ok(out)
}

fn write_binary(
    out: &mut Vec<u8>,
    vr: VR,
    value: &PrimitiveValue,
    encoder: BasicEncoder,
) -> Result<()> {
    use PrimitiveValue::*;

    fn each<T: Copy>(
        out: &mut Vec<u8>,
        values: &[T],
        f: impl Fn(&mut Vec<u8>, T) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        values.iter().try_for_each(|v| f(out, *v))
    }

    match value {
        Empty => Ok(()),
        Str(_) | Strs(_) => IncompatibleValueSnafu {
            vr,
            value_type: value.value_type(),
        }
        .fail(),
        U8(values) => out.write_all(values).context(WriteValueSnafu),
        I16(values) => each(out, values, |o, v| encoder.encode_ss(o, v)).context(WriteValueSnafu),
        U16(values) => each(out, values, |o, v| encoder.encode_us(o, v)).context(WriteValueSnafu),
        I32(values) => each(out, values, |o, v| encoder.encode_sl(o, v)).context(WriteValueSnafu),
        U32(values) => each(out, values, |o, v| encoder.encode_ul(o, v)).context(WriteValueSnafu),
        I64(values) => each(out, values, |o, v| encoder.encode_sv(o, v)).context(WriteValueSnafu),
        U64(values) => each(out, values, |o, v| encoder.encode_uv(o, v)).context(WriteValueSnafu),
        F32(values) => each(out, values, |o, v| encoder.encode_fl(o, v)).context(WriteValueSnafu),
        F64(values) => each(out, values, |o, v| encoder.encode_fd(o, v)).context(WriteValueSnafu),
        Tags(tags) => each(out, tags, |o, tag| {
            encoder.encode_us(&mut *o, tag.group())?;
            encoder.encode_us(o, tag.element())
        })
        .context(WriteValueSnafu),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::Error;
    use dicomkit_core::{dicom_value, Tag};
    use rstest::rstest;

    fn encode_le(vr: VR, value: &PrimitiveValue) -> Vec<u8> {
        encode_primitive(vr, value, Endianness::Little, SpecificCharacterSet::Default).unwrap()
    }

    #[rstest]
    #[case(VR::UI, dicom_value!(Strs, ["1.2.3"]), b"1.2.3\0".as_ref())]
    #[case(VR::CS, dicom_value!(Strs, ["ORIGINAL", "PRIMARY"]), b"ORIGINAL\\PRIMARY".as_ref())]
    #[case(VR::LO, dicom_value!(Strs, ["ABC"]), b"ABC ".as_ref())]
    #[case(VR::LT, dicom_value!(Str, "a\\b"), b"a\\b ".as_ref())]
    #[case(VR::DA, dicom_value!(Strs, ["2024010"]), b"2024010 ".as_ref())]
    #[case(VR::IS, dicom_value!(I32, [42, -7]), b"42\\-7 ".as_ref())]
    #[case(VR::SH, PrimitiveValue::Empty, b"".as_ref())]
    fn encode_text_values(
        #[case] vr: VR,
        #[case] value: PrimitiveValue,
        #[case] expected: &[u8],
    ) {
        let bytes = encode_le(vr, &value);
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len() % 2, 0);
    }

    #[test]
    fn encode_binary_values() {
        assert_eq!(encode_le(VR::US, &dicom_value!(U16, [512])), [0x00, 0x02]);
        assert_eq!(encode_le(VR::OB, &dicom_value!(U8, [1, 2, 3])), [1, 2, 3, 0]);
        assert_eq!(
            encode_le(VR::AT, &dicom_value!(Tags, [Tag(0x0010, 0x0020)])),
            [0x10, 0x00, 0x20, 0x00]
        );
        let be = encode_primitive(
            VR::UL,
            &dicom_value!(U32, [256]),
            Endianness::Big,
            SpecificCharacterSet::Default,
        )
        .unwrap();
        assert_eq!(be, [0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn text_in_binary_vr_is_rejected() {
        let err = encode_primitive(
            VR::US,
            &dicom_value!(Strs, ["512"]),
            Endianness::Little,
            SpecificCharacterSet::Default,
        )
        .unwrap_err();
        assert!(matches!(err, Error::IncompatibleValue { vr: VR::US, .. }));
    }

    #[test]
    fn charset_is_applied_to_names_only() {
        let value = dicom_value!(Strs, ["Simões"]);
        let bytes =
            encode_primitive(VR::PN, &value, Endianness::Little, SpecificCharacterSet::IsoIr192)
                .unwrap();
        assert_eq!(bytes, "Simões ".as_bytes());
        // UIDs never leave the default repertoire
        let value = dicom_value!(Strs, ["Иван"]);
        let err = encode_primitive(VR::UI, &value, Endianness::Little, SpecificCharacterSet::IsoIr192)
            .unwrap_err();
        assert!(matches!(err, Error::EncodeText { .. }));
    }
}
