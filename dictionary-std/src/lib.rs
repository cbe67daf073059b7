//! This crate implements the standard DICOM data dictionary and constants.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: contains the DICOM attributes known to dicomkit,
//!   with their keyword and typical value representation.
//!   It is an immutable table, indexed on first use,
//!   which is passed explicitly to the readers and implicit VR decoders
//!   which need it.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
