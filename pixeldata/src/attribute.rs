//! Utility module for fetching key image attributes from a DICOM object.

use dicomkit_core::Tag;
use dicomkit_dictionary_std::tags;
use dicomkit_object::{mem::InMemElement, AccessError, InMemDicomObject};
use snafu::{ensure, Backtrace, ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        #[snafu(backtrace)]
        source: AccessError,
    },

    #[snafu(display("Could not convert attribute `{}`", name))]
    ConvertValue {
        name: &'static str,
        source: dicomkit_core::value::ConvertValueError,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// Get the Columns from the DICOM object
pub fn cols(obj: &InMemDicomObject) -> Result<u16> {
    retrieve_required_u16(obj, tags::COLUMNS, "Columns")
}

/// Get the Rows from the DICOM object
pub fn rows(obj: &InMemDicomObject) -> Result<u16> {
    retrieve_required_u16(obj, tags::ROWS, "Rows")
}

/// Get the SamplesPerPixel from the DICOM object,
/// returning 1 if it is not present
pub fn samples_per_pixel(obj: &InMemDicomObject) -> Result<u16> {
    match retrieve_optional_u16(obj, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")? {
        Some(0) => InvalidValueSnafu {
            name: "SamplesPerPixel",
            value: "0",
        }
        .fail(),
        Some(spp) => Ok(spp),
        None => Ok(1),
    }
}

/// Get the BitsAllocated from the DICOM object
pub fn bits_allocated(obj: &InMemDicomObject) -> Result<u16> {
    let bits = retrieve_required_u16(obj, tags::BITS_ALLOCATED, "BitsAllocated")?;
    ensure!(
        bits == 1 || (bits > 0 && bits % 8 == 0),
        InvalidValueSnafu {
            name: "BitsAllocated",
            value: bits.to_string(),
        }
    );
    Ok(bits)
}

/// Get the PixelData element from the DICOM object
pub fn pixel_data(obj: &InMemDicomObject) -> Result<&InMemElement> {
    obj.element(tags::PIXEL_DATA)
        .context(MissingRequiredFieldSnafu { name: "PixelData" })
}

/// Get the NumberOfFrames from the DICOM object,
/// returning 1 if it is not present
pub fn number_of_frames(obj: &InMemDicomObject) -> Result<u32> {
    let Some(elem) = obj.get(tags::NUMBER_OF_FRAMES) else {
        return Ok(1);
    };

    let integer = elem.to_int::<i64>().context(ConvertValueSnafu {
        name: "NumberOfFrames",
    })?;

    ensure!(
        integer > 0 && integer <= u32::MAX as i64,
        InvalidValueSnafu {
            name: "NumberOfFrames",
            value: integer.to_string(),
        }
    );

    Ok(integer as u32)
}

/// Get the Extended Offset Table from the DICOM object,
/// along with the Extended Offset Table Lengths if present.
pub fn extended_offset_table(obj: &InMemDicomObject) -> Result<Option<(Vec<u64>, Option<Vec<u64>>)>> {
    let Some(elem) = obj.get(tags::EXTENDED_OFFSET_TABLE) else {
        return Ok(None);
    };
    let offsets = elem.to_multi_int::<u64>().context(ConvertValueSnafu {
        name: "ExtendedOffsetTable",
    })?;
    let lengths = obj
        .get(tags::EXTENDED_OFFSET_TABLE_LENGTHS)
        .map(|e| {
            e.to_multi_int::<u64>().context(ConvertValueSnafu {
                name: "ExtendedOffsetTableLengths",
            })
        })
        .transpose()?;
    Ok(Some((offsets, lengths)))
}

#[inline]
fn retrieve_required_u16(obj: &InMemDicomObject, tag: Tag, name: &'static str) -> Result<u16> {
    obj.element(tag)
        .context(MissingRequiredFieldSnafu { name })?
        .to_int()
        .context(ConvertValueSnafu { name })
}

#[inline]
fn retrieve_optional_u16(
    obj: &InMemDicomObject,
    tag: Tag,
    name: &'static str,
) -> Result<Option<u16>> {
    obj.get(tag)
        .map(|e| e.to_int().context(ConvertValueSnafu { name }))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomkit_core::VR;

    #[test]
    fn frames_default_to_one() {
        let mut obj = InMemDicomObject::new_empty();
        assert_eq!(number_of_frames(&obj).unwrap(), 1);

        obj.put_int(tags::NUMBER_OF_FRAMES, VR::IS, 12).unwrap();
        assert_eq!(number_of_frames(&obj).unwrap(), 12);

        obj.put_str(tags::NUMBER_OF_FRAMES, VR::IS, "0");
        assert!(matches!(
            number_of_frames(&obj),
            Err(GetAttributeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn required_attributes() {
        let mut obj = InMemDicomObject::new_empty();
        assert!(matches!(
            rows(&obj),
            Err(GetAttributeError::MissingRequiredField { name: "Rows", .. })
        ));
        obj.put_u16(tags::ROWS, 512);
        obj.put_u16(tags::BITS_ALLOCATED, 12);
        assert_eq!(rows(&obj).unwrap(), 512);
        assert_eq!(samples_per_pixel(&obj).unwrap(), 1);
        assert!(matches!(
            bits_allocated(&obj),
            Err(GetAttributeError::InvalidValue { .. })
        ));
    }
}
