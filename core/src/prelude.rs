//! Prelude module.
//!
//! Import the commonly used types and traits of this crate
//! with `use dicomkit_core::prelude::*;`.

pub use crate::dicom_value;
pub use crate::dictionary::{DataDictionary, DataDictionaryEntry};
pub use crate::header::{HasLength, Header};
pub use crate::value::{DataSetSequence, PixelFragmentSequence, PrimitiveValue, Value};
pub use crate::{DataElement, Length, Tag, VR};
