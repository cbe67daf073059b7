#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction for reading and manipulating
//! DICOM objects.
//! At this level, objects are comparable to a dictionary of elements,
//! in which some of them can have DICOM objects themselves.
//!
//! Reading a DICOM file can be done with [`open_file`] or [`from_bytes`].
//! For additional reading options, use [`OpenFileOptions`].
//! New DICOM instances can be built from scratch using [`InMemDicomObject`]
//! (see the [`mem`] module for more details).
//!
//! # Examples
//!
//! Read an object and fetch some attributes:
//!
//! ```no_run
//! use dicomkit_dictionary_std::tags;
//! use dicomkit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//!
//! let patient_name = obj.get_str(tags::PATIENT_NAME)?;
//! let rows: u16 = obj.get_int(tags::ROWS)?;
//! # Ok(())
//! # }
//! ```
//!
//! Data sets can be encoded and decoded without the file envelope
//! in any of the supported transfer syntaxes:
//!
//! ```
//! # use dicomkit_object::{decode_dataset, encode_dataset, InMemDicomObject};
//! # use dicomkit_core::VR;
//! # use dicomkit_dictionary_std::{tags, uids};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = InMemDicomObject::new_empty();
//! obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
//!
//! let bytes = encode_dataset(&obj, uids::EXPLICIT_VR_BIG_ENDIAN)?;
//! let decoded = decode_dataset(&bytes, uids::EXPLICIT_VR_BIG_ENDIAN)?;
//! assert_eq!(decoded, obj);
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Writing a DICOM file requires a [file meta table].
//! When creating a new DICOM object from scratch,
//! use a [`FileMetaTableBuilder`] to construct the file meta group,
//! then use [`with_meta`](InMemDicomObject::with_meta):
//!
//! [file meta table]: crate::meta::FileMetaTable
//!
//! ```no_run
//! # use dicomkit_object::{InMemDicomObject, FileMetaTableBuilder};
//! # fn something(obj: InMemDicomObject) -> Result<(), Box<dyn std::error::Error>> {
//! use dicomkit_dictionary_std::uids;
//!
//! let file_obj = obj.with_meta(
//!     FileMetaTableBuilder::new()
//!         .transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN)
//!         .media_storage_sop_class_uid(uids::COMPUTED_RADIOGRAPHY_IMAGE_STORAGE),
//! )?;
//! file_obj.write_to_file("0001_new.dcm")?;
//! # Ok(())
//! # }
//! ```
pub mod file;
pub mod mem;
pub mod meta;
pub mod read;
pub mod uid;
pub mod write;

pub use crate::file::{from_bytes, open_file, OpenFileOptions, ReadPreamble};
pub use crate::mem::{InMemDicomObject, InMemElement, PutValueError};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::read::{DataSetReader, OddLengthPolicy, ReadOptions};
pub use crate::uid::new_uid;
pub use crate::write::{DataSetWriter, SequenceLength, WriteOptions};
pub use dicomkit_core::Tag;
pub use dicomkit_dictionary_std::StandardDataDictionary;

use dicomkit_core::value::ConvertValueError;
use dicomkit_encoding::{TransferSyntaxIndex, TransferSyntaxRegistry};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};

/// The default implementation of a root DICOM object.
pub type DefaultDicomObject = FileDicomObject<InMemDicomObject>;

/// The implementation class UID of this library,
/// derived from a UUID under the `2.25.` root.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.262733620941227853346385063870624398183";

/// The implementation version name of this library.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DICOMKIT 0.1";

/// An error which may occur when reading a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The data does not start with a preamble and the `DICM` magic code.
    #[snafu(display("Not a valid DICOM file"))]
    NotDicom { backtrace: Backtrace },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not read data set"))]
    ReadDataSet {
        #[snafu(backtrace)]
        source: crate::read::Error,
    },
}

/// An error which may occur when writing a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write DICOM data"))]
    WriteBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// A required file meta element is empty.
    #[snafu(display("Missing file meta element `{}`", alias))]
    MissingMetaElement {
        alias: &'static str,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: crate::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

/// An error which may occur when looking up an element
/// or converting its value.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not convert the value of {}", tag))]
    ConvertValue {
        tag: Tag,
        source: ConvertValueError,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// A root DICOM object retrieved from a standard DICOM file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject<O> {
    meta: FileMetaTable,
    obj: O,
}

impl<O> FileDicomObject<O> {
    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve the inner DICOM object structure, discarding the meta table.
    pub fn into_inner(self) -> O {
        self.obj
    }

    /// Split the object into its meta table and inner object.
    pub fn into_parts(self) -> (FileMetaTable, O) {
        (self.meta, self.obj)
    }
}

impl<O> std::ops::Deref for FileDicomObject<O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<O> std::ops::DerefMut for FileDicomObject<O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

/// Decode a data set encoded in the transfer syntax of the given UID.
///
/// The data must contain the data set alone,
/// without preamble nor file meta group.
pub fn decode_dataset(data: &[u8], ts_uid: &str) -> Result<InMemDicomObject, read::Error> {
    let ts = TransferSyntaxRegistry
        .get(ts_uid)
        .with_context(|| read::UnsupportedTransferSyntaxSnafu {
            uid: ts_uid.trim_end_matches(['\0', ' ']).to_string(),
        })?;
    read::read_dataset(data, ts)
}

/// Encode a data set in the transfer syntax of the given UID,
/// without preamble nor file meta group.
pub fn encode_dataset(obj: &InMemDicomObject, ts_uid: &str) -> Result<Vec<u8>, WriteError> {
    let ts = TransferSyntaxRegistry
        .get(ts_uid)
        .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
            uid: ts_uid.trim_end_matches(['\0', ' ']).to_string(),
        })?;
    write::write_dataset(obj, ts).context(PrintDataSetSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomkit_core::VR;
    use dicomkit_dictionary_std::{tags, uids};

    #[test]
    fn implementation_identity_is_valid() {
        assert!(IMPLEMENTATION_CLASS_UID.len() <= 64);
        assert!(IMPLEMENTATION_CLASS_UID
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.'));
        // SH values hold up to 16 characters
        assert!(IMPLEMENTATION_VERSION_NAME.len() <= 16);
    }

    #[test]
    fn unsupported_transfer_syntax() {
        let err = decode_dataset(&[], uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(
            err,
            read::Error::UnsupportedTransferSyntax { ref uid, .. }
                if uid == uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
        ));

        let err = encode_dataset(&InMemDicomObject::new_empty(), "1.2.3.4\0").unwrap_err();
        assert!(matches!(
            err,
            WriteError::WriteUnsupportedTransferSyntax { ref uid, .. } if uid == "1.2.3.4"
        ));
    }

    #[test]
    fn padded_uid_is_accepted() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::MODALITY, VR::CS, "OT");
        let bytes = encode_dataset(&obj, "1.2.840.10008.1.2\0").unwrap();
        assert_eq!(bytes.len(), 10);
        assert_eq!(decode_dataset(&bytes, uids::IMPLICIT_VR_LITTLE_ENDIAN).unwrap(), obj);
    }

    #[test]
    fn access_errors() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        assert!(matches!(
            obj.get_str(tags::PATIENT_ID),
            Err(AccessError::NoSuchDataElementTag { tag, .. }) if tag == tags::PATIENT_ID
        ));
        assert!(matches!(
            obj.get_int::<u16>(tags::PATIENT_NAME),
            Err(AccessError::ConvertValue { tag, .. }) if tag == tags::PATIENT_NAME
        ));
    }
}
