//! Text encoding and decoding for DICOM character string values,
//! driven by the Specific Character Set (0008,0005) attribute.
//!
//! Supported repertoires:
//!
//! - the default repertoire (ISO-IR 6),
//!   which is decoded byte for byte as ISO 8859-1
//!   so that any byte sequence survives a decode/encode round trip;
//! - **ISO-IR 100** (ISO 8859-1, Latin alphabet no. 1);
//! - **ISO-IR 192** (Unicode in UTF-8).
//!
//! Nested sequence items inherit the character set of the enclosing data set
//! unless they declare their own.

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, EncoderTrap, Encoding};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// The text holds characters outside of the character repertoire.
    #[snafu(display("Could not encode text as {}: {}", charset, message))]
    Unrepresentable {
        /// The name of the character set.
        charset: &'static str,
        /// The underlying error message.
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

/// An error type for text decoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DecodeTextError {
    /// The bytes are not valid in the character repertoire.
    #[snafu(display("Could not decode text as {}: {}", charset, message))]
    Malformed {
        /// The name of the character set.
        charset: &'static str,
        /// The underlying error message.
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

type EncodeResult<T> = Result<T, EncodeTextError>;
type DecodeResult<T> = Result<T, DecodeTextError>;

/// A holder of encoding and decoding mechanisms for text in DICOM content,
/// which according to the standard, depends on the specific character set.
pub trait TextCodec {
    /// Obtain the defined term (unique name) of the text encoding,
    /// as written in the Specific Character Set (0008,0005) element.
    fn name(&self) -> &'static str;

    /// Decode the given byte buffer as a single string.
    /// The resulting string _may_ contain backslash characters
    /// to delimit individual values.
    fn decode(&self, text: &[u8]) -> DecodeResult<String>;

    /// Encode a text value into a byte vector.
    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>>;
}

impl<T: ?Sized> TextCodec for &T
where
    T: TextCodec,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        (**self).decode(text)
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        (**self).encode(text)
    }
}

/// An enum type for all currently supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default character set.
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Right-hand part of the Latin alphabet no. 1,
    /// the Western Europe character set.
    IsoIr100,
    /// **ISO-IR 192**: The Unicode character set based on the UTF-8 encoding.
    IsoIr192,
}

impl SpecificCharacterSet {
    /// Obtain the specific character set identified by the given code string.
    ///
    /// An empty code string designates the default character set.
    /// When the element holds multiple values,
    /// the first non-empty one is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dicomkit_encoding::text::SpecificCharacterSet;
    /// let character_set = SpecificCharacterSet::from_code("ISO_IR 100");
    /// assert_eq!(character_set, Some(SpecificCharacterSet::IsoIr100));
    /// assert_eq!(SpecificCharacterSet::from_code("ISO_IR 999"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        use self::SpecificCharacterSet::*;
        let code = code
            .split('\\')
            .map(|c| c.trim_matches(|c: char| c == ' ' || c == '\0'))
            .find(|c| !c.is_empty())
            .unwrap_or("");
        match code {
            "" | "Default" | "ISO_IR_6" | "ISO_IR 6" | "ISO 2022 IR 6" => Some(Default),
            "ISO_IR_100" | "ISO_IR 100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR_192" | "ISO_IR 192" => Some(IsoIr192),
            _ => None,
        }
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        match self {
            SpecificCharacterSet::Default => "ISO_IR 6",
            SpecificCharacterSet::IsoIr100 => "ISO_IR 100",
            SpecificCharacterSet::IsoIr192 => "ISO_IR 192",
        }
    }

    fn decode(&self, text: &[u8]) -> DecodeResult<String> {
        let charset = self.name();
        let decoded = match self {
            SpecificCharacterSet::Default | SpecificCharacterSet::IsoIr100 => {
                ISO_8859_1.decode(text, DecoderTrap::Strict)
            }
            SpecificCharacterSet::IsoIr192 => UTF_8.decode(text, DecoderTrap::Strict),
        };
        decoded.map_err(|message| MalformedSnafu { charset, message }.build())
    }

    fn encode(&self, text: &str) -> EncodeResult<Vec<u8>> {
        let charset = self.name();
        let encoded = match self {
            SpecificCharacterSet::Default | SpecificCharacterSet::IsoIr100 => {
                ISO_8859_1.encode(text, EncoderTrap::Strict)
            }
            SpecificCharacterSet::IsoIr192 => UTF_8.encode(text, EncoderTrap::Strict),
        };
        encoded.map_err(|message| UnrepresentableSnafu { charset, message }.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_codec<T>(codec: T, string: &str, bytes: &[u8])
    where
        T: TextCodec,
    {
        assert_eq!(codec.encode(string).expect("encoding"), bytes);
        assert_eq!(codec.decode(bytes).expect("decoding"), string);
    }

    #[test]
    fn iso_ir_6_baseline() {
        let codec = SpecificCharacterSet::Default;
        test_codec(codec, "Smith^John", b"Smith^John");
    }

    #[test]
    fn default_repertoire_round_trips_any_byte() {
        let codec = SpecificCharacterSet::Default;
        let bytes: Vec<u8> = (0..=255).collect();
        let text = codec.decode(&bytes).unwrap();
        assert_eq!(codec.encode(&text).unwrap(), bytes);
    }

    #[test]
    fn iso_ir_100_baseline() {
        let codec = SpecificCharacterSet::IsoIr100;
        test_codec(codec, "Smith^John", b"Smith^John");
        test_codec(codec, "Müller^Jörg", b"M\xFCller^J\xF6rg");
    }

    #[test]
    fn iso_ir_192_baseline() {
        let codec = SpecificCharacterSet::IsoIr192;
        test_codec(codec, "Simões^John", "Simões^John".as_bytes());
        test_codec(codec, "Иванков^Андрей", "Иванков^Андрей".as_bytes());
        assert!(codec.decode(b"\xFF\xFE").is_err());
    }

    #[test]
    fn latin1_rejects_unrepresentable_text() {
        assert!(SpecificCharacterSet::IsoIr100.encode("Иванков").is_err());
    }

    #[test]
    fn parse_codes() {
        use SpecificCharacterSet::*;
        assert_eq!(SpecificCharacterSet::from_code(""), Some(Default));
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 192 "), Some(IsoIr192));
        assert_eq!(
            SpecificCharacterSet::from_code("\\ISO 2022 IR 100"),
            Some(IsoIr100)
        );
        assert_eq!(SpecificCharacterSet::from_code("ISO_IR 13"), None);
    }
}
