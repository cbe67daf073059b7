//! DICOM Pixel encapsulation
//!
//! This module implements encapsulation of frames into pixel data fragments,
//! and the resolution of frame boundaries in existing fragment sequences.
use crate::{
    FrameCountMismatchSnafu, InvalidOffsetTableSnafu, OffsetTableOverflowSnafu, Result,
};
use dicomkit_core::value::{InMemFragment, PixelFragmentSequence};
use snafu::{ensure, OptionExt};
use std::borrow::Cow;
use std::ops::Range;

/// Size of a fragment item header, in bytes.
const ITEM_HEADER_LENGTH: u64 = 8;

/// Encapsulate the pixel data of the frames,
/// using one fragment per frame.
///
/// Fragments are padded to an even length,
/// and the basic offset table points to each frame's fragment.
///
/// Fails if a fragment would start beyond the 32-bit range
/// of the basic offset table.
///
/// #Example
/// ```
/// use dicomkit_core::VR;
/// use dicomkit_dictionary_std::tags;
/// use dicomkit_object::InMemDicomObject;
/// use dicomkit_pixeldata::encapsulation::encapsulate;
///
/// // Single 512x512 frame
/// let frames = vec![vec![0; 262144]];
/// let mut obj = InMemDicomObject::new_empty();
/// obj.put_pixel_sequence(tags::PIXEL_DATA, VR::OB, encapsulate(frames)?);
/// # Ok::<(), dicomkit_pixeldata::Error>(())
/// ```
pub fn encapsulate(frames: Vec<Vec<u8>>) -> Result<PixelFragmentSequence> {
    let fragments: Vec<InMemFragment> = frames
        .into_iter()
        .map(|mut frame| {
            if frame.len() % 2 != 0 {
                frame.push(0);
            }
            frame
        })
        .collect();
    let offset_table = basic_offset_table(fragments.iter().map(|f| f.len() as u64))?;
    Ok(PixelFragmentSequence::new(offset_table, fragments))
}

/// Offsets of consecutive fragments with the given (even) lengths,
/// relative to the first fragment's item header.
fn basic_offset_table(lengths: impl Iterator<Item = u64>) -> Result<Vec<u32>> {
    let mut offset_table = Vec::with_capacity(lengths.size_hint().0);
    let mut offset = 0_u64;
    for len in lengths {
        let entry = u32::try_from(offset)
            .ok()
            .context(OffsetTableOverflowSnafu { offset })?;
        offset_table.push(entry);
        offset = offset
            .checked_add(ITEM_HEADER_LENGTH + len)
            .context(OffsetTableOverflowSnafu { offset })?;
    }
    Ok(offset_table)
}

/// The fragments making up one frame of encapsulated pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpan {
    /// The indices of the fragments, not counting the basic offset table.
    pub fragments: Range<usize>,
    /// The exact length of the frame in bytes, if known.
    pub length: Option<usize>,
}

impl FrameSpan {
    fn new(fragments: Range<usize>) -> Self {
        FrameSpan {
            fragments,
            length: None,
        }
    }

    /// Collect the bytes of this frame from the given fragments.
    ///
    /// Returns `None` if the span lies outside of the fragment list.
    pub fn data<'a>(&self, fragments: &'a [InMemFragment]) -> Option<Cow<'a, [u8]>> {
        let fragments = fragments.get(self.fragments.clone())?;
        let data: Cow<[u8]> = match fragments {
            [single] => Cow::Borrowed(single.as_slice()),
            _ => Cow::Owned(fragments.concat()),
        };
        Some(match (self.length, data) {
            (Some(len), Cow::Borrowed(data)) => Cow::Borrowed(data.get(..len)?),
            (Some(len), Cow::Owned(mut data)) => {
                if len > data.len() {
                    return None;
                }
                data.truncate(len);
                Cow::Owned(data)
            }
            (None, data) => data,
        })
    }
}

/// Determine which fragments make up each frame of an encapsulated
/// pixel data sequence.
///
/// The boundaries are taken from the first available source:
/// the extended offset table (with its optional frame lengths),
/// the basic offset table,
/// one fragment per frame when the counts agree,
/// all fragments when there is a single frame,
/// and finally the start of each JPEG or JPEG 2000 code stream.
pub fn frame_spans(
    sequence: &PixelFragmentSequence,
    number_of_frames: u32,
    extended_offset_table: Option<(&[u64], Option<&[u64]>)>,
) -> Result<Vec<FrameSpan>> {
    let fragments = sequence.fragments();
    let number_of_frames = number_of_frames as usize;

    if let Some((offsets, lengths)) = extended_offset_table {
        let mut spans = spans_from_offsets(fragments, offsets.iter().copied())?;
        if let Some(lengths) = lengths {
            ensure!(
                lengths.len() == spans.len(),
                FrameCountMismatchSnafu {
                    expected: spans.len() as u32,
                    found: lengths.len(),
                }
            );
            for (span, len) in spans.iter_mut().zip(lengths) {
                span.length = Some(*len as usize);
            }
        }
        ensure!(
            spans.len() == number_of_frames,
            FrameCountMismatchSnafu {
                expected: number_of_frames as u32,
                found: spans.len(),
            }
        );
        return Ok(spans);
    }

    let offset_table = sequence.offset_table();
    if !offset_table.is_empty() {
        let spans = spans_from_offsets(fragments, offset_table.iter().map(|o| u64::from(*o)))?;
        ensure!(
            spans.len() == number_of_frames,
            FrameCountMismatchSnafu {
                expected: number_of_frames as u32,
                found: spans.len(),
            }
        );
        return Ok(spans);
    }

    if fragments.len() == number_of_frames {
        return Ok((0..number_of_frames).map(|i| FrameSpan::new(i..i + 1)).collect());
    }

    if number_of_frames == 1 {
        return Ok(vec![FrameSpan::new(0..fragments.len())]);
    }

    // more fragments than frames, look for code stream boundaries
    let starts: Vec<usize> = fragments
        .iter()
        .enumerate()
        .filter(|(_, fragment)| starts_code_stream(fragment))
        .map(|(i, _)| i)
        .collect();
    ensure!(
        starts.len() == number_of_frames && starts.first() == Some(&0),
        FrameCountMismatchSnafu {
            expected: number_of_frames as u32,
            found: starts.len(),
        }
    );
    Ok(spans_from_starts(&starts, fragments.len()))
}

/// Map byte offsets to the first fragment of each frame.
///
/// Offsets are relative to the first byte of the first fragment item
/// after the basic offset table.
fn spans_from_offsets(
    fragments: &[InMemFragment],
    offsets: impl IntoIterator<Item = u64>,
) -> Result<Vec<FrameSpan>> {
    // position of each fragment item, as it is encoded
    let mut positions = Vec::with_capacity(fragments.len());
    let mut position = 0_u64;
    for fragment in fragments {
        positions.push(position);
        position += ITEM_HEADER_LENGTH + (fragment.len() as u64 + 1) / 2 * 2;
    }

    let mut starts = Vec::new();
    for offset in offsets {
        let index = positions
            .binary_search(&offset)
            .ok()
            .context(InvalidOffsetTableSnafu { offset })?;
        ensure!(
            starts.last().map_or(true, |last| *last < index),
            InvalidOffsetTableSnafu { offset }
        );
        starts.push(index);
    }
    Ok(spans_from_starts(&starts, fragments.len()))
}

fn spans_from_starts(starts: &[usize], fragment_count: usize) -> Vec<FrameSpan> {
    starts
        .iter()
        .enumerate()
        .map(|(i, start)| {
            let end = starts.get(i + 1).copied().unwrap_or(fragment_count);
            FrameSpan::new(*start..end)
        })
        .collect()
}

/// Whether the fragment opens a JPEG, JPEG 2000 or JP2 code stream.
fn starts_code_stream(fragment: &[u8]) -> bool {
    // SOI
    fragment.starts_with(&[0xFF, 0xD8, 0xFF])
        // SOC followed by SIZ
        || fragment.starts_with(&[0xFF, 0x4F, 0xFF, 0x51])
        // JP2 signature box
        || fragment.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_encapsulated_pixels() {
        let enc = encapsulate(vec![vec![20, 30, 40], vec![50, 60, 70, 80]]).unwrap();
        assert_eq!(enc.offset_table(), &[0, 12]);
        assert_eq!(enc.fragments().len(), 2);
        assert_eq!(enc.fragments()[0], vec![20, 30, 40, 0]);
        assert_eq!(enc.fragments()[1], vec![50, 60, 70, 80]);

        let enc = encapsulate(vec![]).unwrap();
        assert!(enc.offset_table().is_empty());
        assert!(enc.fragments().is_empty());
    }

    #[test]
    fn offsets_beyond_32_bits_are_rejected() {
        // the last fragment may end past 4 GiB, but may not start there
        let lengths = [0xFFFF_FFF0_u64, 2];
        let table = basic_offset_table(lengths.into_iter()).unwrap();
        assert_eq!(table, vec![0, 0xFFFF_FFF8]);

        let lengths = [0xFFFF_FFF0_u64, 8, 2];
        let err = basic_offset_table(lengths.into_iter()).unwrap_err();
        assert!(
            matches!(err, Error::OffsetTableOverflow { offset, .. } if offset == 0x1_0000_0008),
            "{:?}",
            err
        );

        let err = basic_offset_table([u64::MAX - 4, 0].into_iter()).unwrap_err();
        assert!(matches!(err, Error::OffsetTableOverflow { .. }), "{:?}", err);
    }

    #[test]
    fn spans_from_basic_offset_table() {
        // frame 0 in two fragments, frame 1 in one
        let seq = PixelFragmentSequence::new(
            vec![0_u32, 22],
            vec![vec![1_u8, 2], vec![3_u8, 4, 5, 6], vec![7_u8, 8]],
        );
        let spans = frame_spans(&seq, 2, None).unwrap();
        assert_eq!(spans, vec![FrameSpan::new(0..2), FrameSpan::new(2..3)]);
        assert_eq!(
            spans[0].data(seq.fragments()).unwrap().as_ref(),
            &[1, 2, 3, 4, 5, 6]
        );
        assert_eq!(spans[1].data(seq.fragments()).unwrap().as_ref(), &[7, 8]);

        // an offset between fragment items
        let seq = PixelFragmentSequence::new(vec![0_u32, 6], vec![vec![1_u8, 2], vec![3_u8, 4]]);
        assert!(matches!(
            frame_spans(&seq, 2, None),
            Err(Error::InvalidOffsetTable { offset: 6, .. })
        ));
    }

    #[test]
    fn spans_without_offset_table() {
        let seq = PixelFragmentSequence::new_fragments(vec![vec![1_u8, 2], vec![3_u8, 4]]);
        assert_eq!(
            frame_spans(&seq, 2, None).unwrap(),
            vec![FrameSpan::new(0..1), FrameSpan::new(1..2)]
        );
        assert_eq!(
            frame_spans(&seq, 1, None).unwrap(),
            vec![FrameSpan::new(0..2)]
        );
    }

    #[test]
    fn spans_from_code_stream_markers() {
        let seq = PixelFragmentSequence::new_fragments(vec![
            vec![0xFF_u8, 0xD8, 0xFF, 0xE0],
            vec![0x00_u8, 0x11],
            vec![0xFF_u8, 0xD9],
            vec![0xFF_u8, 0xD8, 0xFF, 0xDB],
            vec![0xFF_u8, 0xD9],
        ]);
        assert_eq!(
            frame_spans(&seq, 2, None).unwrap(),
            vec![FrameSpan::new(0..3), FrameSpan::new(3..5)]
        );
        assert!(matches!(
            frame_spans(&seq, 3, None),
            Err(Error::FrameCountMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn extended_offset_table_takes_precedence() {
        // the basic offset table is ignored
        let seq = PixelFragmentSequence::new(
            vec![0_u32],
            vec![vec![1_u8, 2, 3, 0], vec![4_u8, 5]],
        );
        let offsets = [0_u64, 12];
        let lengths = [3_u64, 2];
        let spans = frame_spans(&seq, 2, Some((&offsets[..], Some(&lengths[..])))).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].data(seq.fragments()).unwrap().as_ref(), &[1, 2, 3]);
        assert_eq!(spans[1].data(seq.fragments()).unwrap().as_ref(), &[4, 5]);
    }
}
