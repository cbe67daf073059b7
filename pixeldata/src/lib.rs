//! This crate contains the DICOM pixel data handlers,
//! giving access to individual frames of native or encapsulated pixel data,
//! and the means to merge and split multi-frame instances.
//!
//! Encapsulated pixel data is not decoded:
//! frames are handed out as the raw bytes of their code streams.
//!
//! # Examples
//! ```no_run
//! # use std::error::Error;
//! use dicomkit_object::open_file;
//! use dicomkit_pixeldata::PixelDataObject;
//!
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let obj = open_file("dicom.dcm")?;
//! if let Some(pixel_data) = obj.pixel_data()? {
//!     for i in 0..pixel_data.number_of_frames() as usize {
//!         let frame = pixel_data.frame_data(i).ok_or("missing frame")?;
//!         println!("frame #{}: {} bytes", i, frame.len());
//!     }
//! }
//! #   Ok(())
//! # }
//! ```

use byteorder::{ByteOrder, LittleEndian};
use dicomkit_core::value::{PixelFragmentSequence, Value};
use dicomkit_core::VR;
use dicomkit_object::InMemDicomObject;
use snafu::{Backtrace, ResultExt, Snafu};
use std::borrow::Cow;

pub mod attribute;
pub mod encapsulation;
pub mod multiframe;

pub use attribute::GetAttributeError;
pub use encapsulation::{encapsulate, FrameSpan};
pub use multiframe::{merge_files, merge_frames, split_file, split_frames, MergePolicy};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read pixel data attributes"))]
    GetAttribute {
        #[snafu(backtrace)]
        source: GetAttributeError,
    },

    #[snafu(display("Pixel data is neither a byte sequence nor a fragment sequence"))]
    InvalidPixelData { backtrace: Backtrace },

    #[snafu(display("Offset {} in the offset table does not point to a fragment", offset))]
    InvalidOffsetTable { offset: u64, backtrace: Backtrace },

    #[snafu(display("Fragment offset {} does not fit in the basic offset table", offset))]
    OffsetTableOverflow { offset: u64, backtrace: Backtrace },

    #[snafu(display("Could not assign the pixel data"))]
    PutPixelData {
        #[snafu(backtrace)]
        source: dicomkit_object::PutValueError,
    },

    #[snafu(display("Expected {} frames, but found {}", expected, found))]
    FrameCountMismatch {
        expected: u32,
        found: usize,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A view over the pixel data of a DICOM object.
///
/// The view borrows the pixel data from the object,
/// and frames are only extracted when requested.
#[derive(Debug, Clone)]
pub struct PixelData<'a> {
    rows: u16,
    columns: u16,
    samples_per_pixel: u16,
    bits_allocated: u16,
    number_of_frames: u32,
    vr: VR,
    storage: Storage<'a>,
}

#[derive(Debug, Clone)]
enum Storage<'a> {
    Native(Cow<'a, [u8]>),
    Encapsulated {
        sequence: &'a PixelFragmentSequence,
        frames: Vec<FrameSpan>,
    },
}

impl<'a> PixelData<'a> {
    /// Create a pixel data view over the given object.
    ///
    /// Returns `None` if the object has no pixel data.
    pub fn new(obj: &'a InMemDicomObject) -> Result<Option<Self>> {
        let Some(elem) = obj.get(dicomkit_dictionary_std::tags::PIXEL_DATA) else {
            return Ok(None);
        };

        let rows = attribute::rows(obj).context(GetAttributeSnafu)?;
        let columns = attribute::cols(obj).context(GetAttributeSnafu)?;
        let samples_per_pixel = attribute::samples_per_pixel(obj).context(GetAttributeSnafu)?;
        let bits_allocated = attribute::bits_allocated(obj).context(GetAttributeSnafu)?;
        let number_of_frames = attribute::number_of_frames(obj).context(GetAttributeSnafu)?;

        let storage = match elem.value() {
            Value::PixelSequence(sequence) => {
                let extended = attribute::extended_offset_table(obj).context(GetAttributeSnafu)?;
                let extended = extended
                    .as_ref()
                    .map(|(offsets, lengths)| (offsets.as_slice(), lengths.as_deref()));
                let frames = encapsulation::frame_spans(sequence, number_of_frames, extended)?;
                Storage::Encapsulated { sequence, frames }
            }
            Value::Primitive(_) => match elem.to_bytes() {
                Ok(bytes) => Storage::Native(bytes),
                Err(_) => return InvalidPixelDataSnafu.fail(),
            },
            Value::Sequence(_) => return InvalidPixelDataSnafu.fail(),
        };

        Ok(Some(PixelData {
            rows,
            columns,
            samples_per_pixel,
            bits_allocated,
            number_of_frames,
            vr: elem.vr(),
            storage,
        }))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn samples_per_pixel(&self) -> u16 {
        self.samples_per_pixel
    }

    pub fn bits_allocated(&self) -> u16 {
        self.bits_allocated
    }

    /// The number of frames, which is 1
    /// when the object does not declare it.
    pub fn number_of_frames(&self) -> u32 {
        self.number_of_frames
    }

    /// The value representation of the pixel data element.
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Whether the pixel data is encapsulated in fragments.
    pub fn is_encapsulated(&self) -> bool {
        matches!(self.storage, Storage::Encapsulated { .. })
    }

    /// The size of a native frame in bytes:
    /// rows × columns × samples per pixel × bits allocated / 8,
    /// rounded up to a whole byte.
    pub fn frame_size(&self) -> usize {
        let bits = usize::from(self.rows)
            * usize::from(self.columns)
            * usize::from(self.samples_per_pixel)
            * usize::from(self.bits_allocated);
        (bits + 7) / 8
    }

    /// Retrieve the raw bytes of the frame at the given index.
    ///
    /// Native frames are laid out in little endian.
    /// Returns `None` if the index is not below the number of frames,
    /// or if the pixel data is too short to contain the frame.
    pub fn frame_data(&self, index: usize) -> Option<Cow<'_, [u8]>> {
        if index >= self.number_of_frames as usize {
            return None;
        }
        match &self.storage {
            Storage::Native(data) => {
                let size = self.frame_size();
                let start = index.checked_mul(size)?;
                data.get(start..start.checked_add(size)?).map(Cow::Borrowed)
            }
            Storage::Encapsulated { sequence, frames } => {
                frames.get(index)?.data(sequence.fragments())
            }
        }
    }

    /// Retrieve a single 16-bit sample of a native frame,
    /// at the given sample index within the frame.
    pub fn sample_u16(&self, frame: usize, index: usize) -> Option<u16> {
        if self.bits_allocated != 16 || self.is_encapsulated() {
            return None;
        }
        let data = self.frame_data(frame)?;
        let bytes = data.get(index * 2..index * 2 + 2)?;
        Some(LittleEndian::read_u16(bytes))
    }
}

/// Access to the pixel data of a DICOM object.
pub trait PixelDataObject {
    /// Obtain a view over the object's pixel data,
    /// or `None` if the object has no pixel data.
    fn pixel_data(&self) -> Result<Option<PixelData<'_>>>;
}

impl PixelDataObject for InMemDicomObject {
    fn pixel_data(&self) -> Result<Option<PixelData<'_>>> {
        PixelData::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomkit_dictionary_std::tags;
    use rstest::rstest;

    fn native_image(frames: u32) -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_u16(tags::ROWS, 2);
        obj.put_u16(tags::COLUMNS, 3);
        obj.put_u16(tags::SAMPLES_PER_PIXEL, 1);
        obj.put_u16(tags::BITS_ALLOCATED, 16);
        obj.put_int(tags::NUMBER_OF_FRAMES, VR::IS, frames.into())
            .unwrap();
        let data: Vec<u8> = (0..frames as usize * 12).map(|i| i as u8).collect();
        obj.put_bytes(tags::PIXEL_DATA, VR::OW, &data).unwrap();
        obj
    }

    #[test]
    fn no_pixel_data() {
        let obj = InMemDicomObject::new_empty();
        assert!(obj.pixel_data().unwrap().is_none());
    }

    #[test]
    fn missing_attributes() {
        let mut obj = native_image(1);
        obj.remove_element(tags::COLUMNS);
        assert!(matches!(obj.pixel_data(), Err(Error::GetAttribute { .. })));
    }

    #[rstest]
    #[case(0, Some(0..12))]
    #[case(1, Some(12..24))]
    #[case(2, Some(24..36))]
    #[case(3, None)]
    #[case(usize::MAX, None)]
    fn native_frames(#[case] index: usize, #[case] expected: Option<std::ops::Range<u8>>) {
        let obj = native_image(3);
        let pixel_data = obj.pixel_data().unwrap().unwrap();
        assert!(!pixel_data.is_encapsulated());
        assert_eq!(pixel_data.frame_size(), 12);
        let expected: Option<Vec<u8>> = expected.map(|range| range.collect());
        assert_eq!(
            pixel_data.frame_data(index).map(|data| data.into_owned()),
            expected
        );
    }

    #[test]
    fn frames_default_to_one() {
        let mut obj = native_image(1);
        obj.remove_element(tags::NUMBER_OF_FRAMES);
        let pixel_data = obj.pixel_data().unwrap().unwrap();
        assert_eq!(pixel_data.number_of_frames(), 1);
        assert!(pixel_data.frame_data(0).is_some());
        assert!(pixel_data.frame_data(1).is_none());
        assert_eq!(pixel_data.sample_u16(0, 1), Some(0x0302));
    }

    #[test]
    fn short_native_data() {
        let mut obj = native_image(2);
        obj.put_bytes(tags::PIXEL_DATA, VR::OB, &[0; 16]).unwrap();
        let pixel_data = obj.pixel_data().unwrap().unwrap();
        assert!(pixel_data.frame_data(0).is_some());
        assert!(pixel_data.frame_data(1).is_none());
    }

    #[test]
    fn encapsulated_frames() {
        let mut obj = native_image(2);
        obj.put_pixel_sequence(
            tags::PIXEL_DATA,
            VR::OB,
            encapsulate(vec![vec![0xFF, 0xD8, 0xFF, 0xD9], vec![1, 2, 3]]).unwrap(),
        );
        let pixel_data = obj.pixel_data().unwrap().unwrap();
        assert!(pixel_data.is_encapsulated());
        assert_eq!(
            pixel_data.frame_data(0).unwrap().as_ref(),
            &[0xFF, 0xD8, 0xFF, 0xD9]
        );
        // fragments keep their padding
        assert_eq!(pixel_data.frame_data(1).unwrap().as_ref(), &[1, 2, 3, 0]);
        assert!(pixel_data.frame_data(2).is_none());
        assert_eq!(pixel_data.sample_u16(0, 0), None);
    }
}
