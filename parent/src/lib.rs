//! # dicomkit
//!
//! This crate serves as a parent for the library crates of the dicomkit project,
//! a codec for DICOM data sets, files and media directories.
//! Each module is also available as a crate of its own
//! with the `dicomkit-` prefix.
//! For instance, the module `object`
//! lives in the crate named `dicomkit-object`.
//!
//! - The [`core`] crate holds the data types the other crates rely on:
//!   [tags](dicomkit_core::Tag),
//!   [value representations](dicomkit_core::VR),
//!   in-memory [values](dicomkit_core::DicomValue)
//!   and [data elements](dicomkit_core::DataElement).
//!   The [`dicom_value!`] macro is re-exported here as well.
//! - The standard data dictionary is in [`dictionary_std`],
//!   along with constants for known tags and UIDs.
//! - [`encoding`] contains the element encoders and decoders,
//!   text codecs and the [transfer syntax registry](encoding::TransferSyntaxRegistry).
//! - For reading and writing data sets and DICOM files,
//!   see the [`object`] module.
//! - [`pixeldata`] gives frame level access to pixel data
//!   and merges or splits multi-frame instances.
//! - [`dicomdir`] builds, writes and reads DICOMDIR files.

pub use dicomkit_core as core;
#[cfg(feature = "dicomdir")]
pub use dicomkit_dir as dicomdir;
pub use dicomkit_dictionary_std as dictionary_std;
pub use dicomkit_encoding as encoding;
pub use dicomkit_object as object;
#[cfg(feature = "pixeldata")]
pub use dicomkit_pixeldata as pixeldata;

// re-export dicom_value macro
pub use dicomkit_core::dicom_value;
