use super::entries::ALL;
use super::{TransferSyntax, TransferSyntaxIndex};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

static REGISTRY: Lazy<HashMap<&'static str, &'static TransferSyntax>> =
    Lazy::new(|| ALL.iter().map(|ts| (ts.uid(), ts)).collect());

/// Zero-sized representative of the main transfer syntax registry,
/// initialized on first use.
///
/// Deflated Explicit VR Little Endian is deliberately not registered,
/// so looking it up yields `None`.
///
/// # Example
///
/// ```
/// # use dicomkit_encoding::transfer_syntax::{TransferSyntaxIndex, TransferSyntaxRegistry};
/// let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1\0").unwrap();
/// assert_eq!(ts.name(), "Explicit VR Little Endian");
/// assert!(TransferSyntaxRegistry.get("1.2.840.10008.1.2.1.99").is_none());
/// ```
#[derive(Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &'static TransferSyntax> {
        ALL.iter()
    }

    /// Obtain the transfer syntax used by default:
    /// Implicit VR Little Endian.
    pub fn default_syntax(&self) -> &'static TransferSyntax {
        &super::entries::IMPLICIT_VR_LITTLE_ENDIAN
    }
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            REGISTRY.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("entries", &entries)
            .finish()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        let ts_uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        REGISTRY.get(ts_uid).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::{DataSetEncoding, PixelEncoding};
    use dicomkit_dictionary_std::uids;

    #[test]
    fn contains_native_syntaxes() {
        let registry = TransferSyntaxRegistry;
        let ts = registry.get(uids::IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(ts.encoding(), DataSetEncoding::ImplicitVRLittleEndian);
        assert_eq!(ts.pixel_encoding(), PixelEncoding::Native);

        let ts = registry.get("1.2.840.10008.1.2.2 ").unwrap();
        assert_eq!(ts.encoding(), DataSetEncoding::ExplicitVRBigEndian);
        assert_eq!(registry.default_syntax().uid(), uids::IMPLICIT_VR_LITTLE_ENDIAN);
    }

    #[test]
    fn encapsulated_syntaxes_are_explicit_le() {
        let registry = TransferSyntaxRegistry;
        let ts = registry.get(uids::JPEG_BASELINE8_BIT).unwrap();
        assert!(ts.is_encapsulated_pixel_data());
        assert_eq!(ts.encoding(), DataSetEncoding::ExplicitVRLittleEndian);
        assert!(registry
            .iter()
            .filter(|ts| ts.is_encapsulated_pixel_data())
            .all(|ts| ts.is_explicit_vr()));
    }

    #[test]
    fn unknown_syntaxes_are_absent() {
        let registry = TransferSyntaxRegistry;
        assert!(registry.get(uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN).is_none());
        assert!(registry.get("1.2.3.4").is_none());
        assert!(registry.get("").is_none());
    }
}
