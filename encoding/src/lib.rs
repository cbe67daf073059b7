#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data in accordance to the DICOM standard:
//!
//! - [`decode`] and [`encode`] hold the element header codecs
//!   for Explicit VR Little Endian, Explicit VR Big Endian
//!   and Implicit VR Little Endian,
//!   as well as the codecs of primitive values;
//! - [`text`] deals with character repertoires;
//! - [`transfer_syntax`] hosts the concept of a transfer syntax specifier
//!   and the registry of transfer syntaxes supported by this library,
//!   which can be used to produce DICOM encoders and decoders at run-time.
//!
//! All APIs are synchronous and work on in-memory data.

pub mod decode;
pub mod encode;
pub mod text;
pub mod transfer_syntax;

pub use byteordered;
pub use decode::Decode;
pub use encode::Encode;
pub use transfer_syntax::{TransferSyntax, TransferSyntaxIndex, TransferSyntaxRegistry};
