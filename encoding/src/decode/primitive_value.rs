//! Decoding of primitive values from their raw byte form.
//!
//! The functions in this module work on a complete value buffer,
//! already cut out of the data set at the length given by the header.

use crate::text::{DecodeTextError, SpecificCharacterSet, TextCodec};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use dicomkit_core::value::{PrimitiveValue, C};
use dicomkit_core::{Tag, VR};
use snafu::{ensure, Backtrace, ResultExt, Snafu};

/// How trailing padding of textual values is handled on decoding.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextPadding {
    /// Remove exactly one trailing padding byte
    /// (space, or null for UI) from even-length values.
    #[default]
    Strip,
    /// Keep the text exactly as it was stored.
    Preserve,
}

/// An error which may occur when decoding a primitive value.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeValueError {
    /// The length of a binary value is not a multiple of its element width.
    #[snafu(display(
        "Value length {} is not a multiple of {} for VR {}",
        len,
        width,
        vr
    ))]
    NotMultipleOfWidth {
        vr: VR,
        len: usize,
        width: usize,
        backtrace: Backtrace,
    },
    /// The text could not be decoded with the active character set.
    #[snafu(display("Could not decode text: {}", source))]
    DecodeText {
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
}

pub type Result<T, E = DecodeValueError> = std::result::Result<T, E>;

/// Whether a textual value of this representation
/// is subject to the Specific Character Set.
///
/// The remaining textual representations
/// only admit characters of the default repertoire.
pub fn uses_specific_charset(vr: VR) -> bool {
    matches!(
        vr,
        VR::SH | VR::LO | VR::ST | VR::LT | VR::PN | VR::UC | VR::UT
    )
}

fn chunks<T, const N: usize>(data: &[u8], read: impl Fn([u8; N]) -> T) -> C<T> {
    data.chunks_exact(N)
        .map(|chunk| {
            let mut buf = [0u8; N];
            buf.copy_from_slice(chunk);
            read(buf)
        })
        .collect()
}

macro_rules! read_numbers {
    ($data: expr, $endianness: expr, $n: literal, $read: ident) => {
        match $endianness {
            Endianness::Little => chunks::<_, $n>($data, |b| LittleEndian::$read(&b)),
            Endianness::Big => chunks::<_, $n>($data, |b| BigEndian::$read(&b)),
        }
    };
}

/// Decode the raw bytes of a value with the given value representation.
///
/// Empty data yields [`PrimitiveValue::Empty`].
/// Binary values are read in the given byte order.
/// Textual values are decoded with `charset`
/// if the representation is subject to it,
/// and split into their components if multi-valued.
///
/// # Example
///
/// ```
/// # use dicomkit_encoding::decode::primitive_value::{decode_primitive, TextPadding};
/// # use dicomkit_encoding::text::SpecificCharacterSet;
/// # use dicomkit_core::{PrimitiveValue, VR};
/// # use byteordered::Endianness;
/// let value = decode_primitive(
///     VR::UI,
///     b"1.2.3\0",
///     Endianness::Little,
///     SpecificCharacterSet::Default,
///     TextPadding::Strip,
/// )?;
/// assert_eq!(value, PrimitiveValue::strs(["1.2.3"]));
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn decode_primitive(
    vr: VR,
    data: &[u8],
    endianness: Endianness,
    charset: SpecificCharacterSet,
    padding: TextPadding,
) -> Result<PrimitiveValue> {
    if data.is_empty() {
        return Ok(PrimitiveValue::Empty);
    }

    if let Some(width) = vr.value_width() {
        ensure!(
            data.len() % width == 0,
            NotMultipleOfWidthSnafu {
                vr,
                len: data.len(),
                width
            }
        );
    }

    let value = match vr {
        VR::SQ | VR::OB | VR::UN => PrimitiveValue::U8(C::from(data)),
        VR::US | VR::OW => PrimitiveValue::U16(read_numbers!(data, endianness, 2, read_u16)),
        VR::SS => PrimitiveValue::I16(read_numbers!(data, endianness, 2, read_i16)),
        VR::UL | VR::OL => PrimitiveValue::U32(read_numbers!(data, endianness, 4, read_u32)),
        VR::SL => PrimitiveValue::I32(read_numbers!(data, endianness, 4, read_i32)),
        VR::UV | VR::OV => PrimitiveValue::U64(read_numbers!(data, endianness, 8, read_u64)),
        VR::SV => PrimitiveValue::I64(read_numbers!(data, endianness, 8, read_i64)),
        VR::FL | VR::OF => PrimitiveValue::F32(read_numbers!(data, endianness, 4, read_f32)),
        VR::FD | VR::OD => PrimitiveValue::F64(read_numbers!(data, endianness, 8, read_f64)),
        VR::AT => {
            let words: C<u16> = read_numbers!(data, endianness, 2, read_u16);
            PrimitiveValue::Tags(words.chunks_exact(2).map(|w| Tag(w[0], w[1])).collect())
        }
        _ => {
            let codec = if uses_specific_charset(vr) {
                charset
            } else {
                SpecificCharacterSet::Default
            };
            let text = codec.decode(data).context(DecodeTextSnafu)?;
            let text = match padding {
                TextPadding::Strip => strip_padding(vr, &text),
                TextPadding::Preserve => &text,
            };
            PrimitiveValue::from_text(vr, text)
        }
    };
    Ok(value)
}

/// Remove a single trailing padding character
/// from an even-length textual value.
fn strip_padding(vr: VR, text: &str) -> &str {
    if text.len() % 2 != 0 {
        return text;
    }
    let pad = char::from(vr.padding());
    // values written by careless encoders
    // may be padded with null regardless of the VR
    text.strip_suffix(pad)
        .or_else(|| text.strip_suffix('\0'))
        .unwrap_or(text)
}
