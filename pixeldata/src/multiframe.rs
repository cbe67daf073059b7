//! Merging single-frame instances into a multi-frame instance,
//! and splitting a multi-frame instance into single-frame instances.
//!
//! Either way, the produced instances receive new SOP instance UIDs
//! and a Number of Frames matching their pixel data.
//! All other attributes are copied from the source instances.

use crate::encapsulation::encapsulate;
use crate::{PixelData, PixelDataObject, PutPixelDataSnafu};
use dicomkit_core::{Header, Tag, VR};
use dicomkit_dictionary_std::tags;
use dicomkit_object::{
    meta, new_uid, DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject, PutValueError,
};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::debug;

/// Attributes which are expected to differ from one frame to another,
/// or which are rebuilt when merging and splitting.
const FRAME_SPECIFIC: &[Tag] = &[
    tags::SOP_INSTANCE_UID,
    tags::INSTANCE_NUMBER,
    tags::NUMBER_OF_FRAMES,
    tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE,
    tags::EXTENDED_OFFSET_TABLE,
    tags::EXTENDED_OFFSET_TABLE_LENGTHS,
    tags::PIXEL_DATA,
];

/// How to treat attributes which differ between the instances being merged.
///
/// Attributes which identify the instance or describe the pixel data
/// (SOP Instance UID, Instance Number, Number of Frames,
/// the per-frame functional groups and the pixel data itself)
/// are never compared.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// Copy the attributes of the first instance,
    /// ignoring the others.
    #[default]
    FirstWins,
    /// Fail if any attribute differs between the instances.
    RejectConflicts,
    /// Leave out every attribute which differs between the instances.
    DropConflicting,
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum MergeError {
    #[snafu(display("No instances to merge"))]
    NoInstances { backtrace: Backtrace },

    #[snafu(display("Could not read the pixel data of instance #{}", index))]
    MergeReadPixelData {
        index: usize,
        #[snafu(backtrace)]
        source: crate::Error,
    },

    #[snafu(display("Instance #{} has no pixel data", index))]
    MergeMissingPixelData { index: usize, backtrace: Backtrace },

    #[snafu(display("Instance #{} has a different image geometry", index))]
    GeometryMismatch { index: usize, backtrace: Backtrace },

    #[snafu(display(
        "Instance #{} does not match the pixel data encapsulation of the first one",
        index
    ))]
    MixedEncapsulation { index: usize, backtrace: Backtrace },

    #[snafu(display("Frame #{} of instance #{} is incomplete", frame, index))]
    MergeMissingFrame {
        index: usize,
        frame: u32,
        backtrace: Backtrace,
    },

    #[snafu(display("Attribute {} of instance #{} differs from the first instance", tag, index))]
    ConflictingAttribute {
        tag: Tag,
        index: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not assign the merged pixel data"))]
    MergePixelData {
        #[snafu(backtrace)]
        source: crate::Error,
    },

    #[snafu(display("Could not update the merged attributes"))]
    MergePutValue {
        #[snafu(backtrace)]
        source: PutValueError,
    },

    #[snafu(display("Could not build the file meta table"))]
    MergeBuildMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SplitError {
    #[snafu(display("Could not read the pixel data"))]
    SplitReadPixelData {
        #[snafu(backtrace)]
        source: crate::Error,
    },

    #[snafu(display("The instance has no pixel data"))]
    SplitMissingPixelData { backtrace: Backtrace },

    #[snafu(display("Frame #{} is incomplete", frame))]
    SplitMissingFrame { frame: u32, backtrace: Backtrace },

    #[snafu(display("Could not assign the pixel data of frame #{}", frame))]
    SplitPixelData {
        frame: u32,
        #[snafu(backtrace)]
        source: crate::Error,
    },

    #[snafu(display("Could not update the attributes of frame #{}", frame))]
    SplitPutValue {
        frame: u32,
        #[snafu(backtrace)]
        source: PutValueError,
    },

    #[snafu(display("Could not build the file meta table"))]
    SplitBuildMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },
}

/// Concatenate the frames of the given instances into a single instance.
///
/// All instances must have the same rows, columns, samples per pixel,
/// bits allocated and pixel data encapsulation.
/// The attributes of the output come from the first instance,
/// subject to the merge `policy`.
/// When every instance carries one per-frame functional group item
/// for each of its frames, the items are concatenated as well.
pub fn merge_frames(
    instances: &[InMemDicomObject],
    policy: MergePolicy,
) -> Result<InMemDicomObject, MergeError> {
    let (first, rest) = instances.split_first().context(NoInstancesSnafu)?;

    let views = instances
        .iter()
        .enumerate()
        .map(|(index, obj)| {
            obj.pixel_data()
                .context(MergeReadPixelDataSnafu { index })?
                .context(MergeMissingPixelDataSnafu { index })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let reference = &views[0];

    let mut frames = Vec::new();
    let mut per_frame_items = Some(Vec::new());
    for (index, (obj, view)) in instances.iter().zip(&views).enumerate() {
        ensure!(
            same_geometry(reference, view),
            GeometryMismatchSnafu { index }
        );
        ensure!(
            reference.is_encapsulated() == view.is_encapsulated(),
            MixedEncapsulationSnafu { index }
        );
        for frame in 0..view.number_of_frames() {
            let data = view
                .frame_data(frame as usize)
                .context(MergeMissingFrameSnafu { index, frame })?;
            frames.push(data.into_owned());
        }
        per_frame_items = per_frame_items.and_then(|mut items: Vec<InMemDicomObject>| {
            let own = obj.get_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)?;
            if own.len() != view.number_of_frames() as usize {
                return None;
            }
            items.extend_from_slice(own);
            Some(items)
        });
    }

    let mut merged = first.clone();
    match policy {
        MergePolicy::FirstWins => {}
        MergePolicy::RejectConflicts => {
            if let Some((index, tag)) = first_conflict(first, rest) {
                return ConflictingAttributeSnafu { tag, index }.fail();
            }
        }
        MergePolicy::DropConflicting => {
            let conflicting: Vec<Tag> = first
                .tags()
                .filter(|tag| !FRAME_SPECIFIC.contains(tag))
                .filter(|tag| rest.iter().any(|obj| obj.get(*tag) != first.get(*tag)))
                .collect();
            for tag in conflicting {
                debug!("Dropping conflicting attribute {}", tag);
                merged.remove_element(tag);
            }
        }
    }

    let number_of_frames = frames.len();
    let vr = reference.vr();
    let encapsulated = reference.is_encapsulated();

    merged.remove_element(tags::EXTENDED_OFFSET_TABLE);
    merged.remove_element(tags::EXTENDED_OFFSET_TABLE_LENGTHS);
    put_frames(&mut merged, vr, encapsulated, frames).context(MergePixelDataSnafu)?;
    merged
        .put_int(tags::NUMBER_OF_FRAMES, VR::IS, number_of_frames as i64)
        .context(MergePutValueSnafu)?;
    merged.put_str(tags::SOP_INSTANCE_UID, VR::UI, new_uid());
    match per_frame_items {
        Some(items) if !items.is_empty() => {
            merged.put_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, items);
        }
        _ => {
            merged.remove_element(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE);
        }
    }

    debug!(
        "Merged {} frames from {} instances",
        number_of_frames,
        instances.len()
    );
    Ok(merged)
}

/// Split an instance into one single-frame instance per frame.
///
/// When the per-frame functional groups sequence has one item per frame,
/// each output keeps only the item of its own frame.
pub fn split_frames(obj: &InMemDicomObject) -> Result<Vec<InMemDicomObject>, SplitError> {
    let view = obj
        .pixel_data()
        .context(SplitReadPixelDataSnafu)?
        .context(SplitMissingPixelDataSnafu)?;
    let number_of_frames = view.number_of_frames();
    let per_frame = obj
        .get_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
        .filter(|items| items.len() == number_of_frames as usize);

    let template = InMemDicomObject::from_element_iter(
        obj.iter()
            .filter(|e| !FRAME_SPECIFIC.contains(&e.tag()) || e.tag() == tags::INSTANCE_NUMBER)
            .cloned(),
    );

    let instances = (0..number_of_frames)
        .map(|frame| {
            let data = view
                .frame_data(frame as usize)
                .context(SplitMissingFrameSnafu { frame })?;
            let mut out = template.clone();
            put_frames(
                &mut out,
                view.vr(),
                view.is_encapsulated(),
                vec![data.into_owned()],
            )
            .context(SplitPixelDataSnafu { frame })?;
            out.put_int(tags::NUMBER_OF_FRAMES, VR::IS, 1)
                .context(SplitPutValueSnafu { frame })?;
            out.put_str(tags::SOP_INSTANCE_UID, VR::UI, new_uid());
            if let Some(items) = per_frame {
                out.put_sequence(
                    tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE,
                    [items[frame as usize].clone()],
                );
            }
            Ok(out)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Split instance into {} frames", instances.len());
    Ok(instances)
}

/// Merge DICOM files into a multi-frame file,
/// in the transfer syntax of the first file.
pub fn merge_files(
    files: &[DefaultDicomObject],
    policy: MergePolicy,
) -> Result<DefaultDicomObject, MergeError> {
    let first = files.first().context(NoInstancesSnafu)?;
    let transfer_syntax = first.meta().transfer_syntax.clone();
    let instances: Vec<InMemDicomObject> = files.iter().map(|f| (**f).clone()).collect();
    let merged = merge_frames(&instances, policy)?;
    let meta = file_meta_like(first, &merged, transfer_syntax);
    merged
        .with_meta(meta)
        .context(MergeBuildMetaSnafu)
}

/// Split a DICOM file into single-frame files,
/// in the transfer syntax of the source file.
pub fn split_file(file: &DefaultDicomObject) -> Result<Vec<DefaultDicomObject>, SplitError> {
    split_frames(file)?
        .into_iter()
        .map(|obj| {
            let meta = file_meta_like(file, &obj, file.meta().transfer_syntax.clone());
            obj.with_meta(meta).context(SplitBuildMetaSnafu)
        })
        .collect()
}

/// A file meta table builder for a new instance derived from `source`.
fn file_meta_like(
    source: &DefaultDicomObject,
    obj: &InMemDicomObject,
    transfer_syntax: String,
) -> FileMetaTableBuilder {
    let builder = FileMetaTableBuilder::new().transfer_syntax(transfer_syntax);
    if obj.contains(tags::SOP_CLASS_UID) {
        builder
    } else {
        builder.media_storage_sop_class_uid(source.meta().media_storage_sop_class_uid.as_str())
    }
}

/// Assign the given frames as the pixel data of `obj`,
/// either encapsulated with one fragment per frame
/// or as a native little endian byte stream.
fn put_frames(
    obj: &mut InMemDicomObject,
    vr: VR,
    encapsulated: bool,
    frames: Vec<Vec<u8>>,
) -> crate::Result<()> {
    if encapsulated {
        obj.put_pixel_sequence(tags::PIXEL_DATA, vr, encapsulate(frames)?);
        Ok(())
    } else {
        obj.put_bytes(tags::PIXEL_DATA, vr, &frames.concat())
            .context(PutPixelDataSnafu)
    }
}

fn same_geometry(a: &PixelData, b: &PixelData) -> bool {
    a.rows() == b.rows()
        && a.columns() == b.columns()
        && a.samples_per_pixel() == b.samples_per_pixel()
        && a.bits_allocated() == b.bits_allocated()
}

/// Find the first attribute which differs between
/// the first instance and any of the others.
fn first_conflict(first: &InMemDicomObject, rest: &[InMemDicomObject]) -> Option<(usize, Tag)> {
    rest.iter().enumerate().find_map(|(i, obj)| {
        first
            .tags()
            .chain(obj.tags())
            .filter(|tag| !FRAME_SPECIFIC.contains(tag))
            .find(|tag| first.get(*tag) != obj.get(*tag))
            .map(|tag| (i + 1, tag))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: u16, cols: u16, fill: u8, acquisition_time: &str) -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7");
        obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, new_uid());
        obj.put_str(tags::ACQUISITION_TIME, VR::TM, acquisition_time);
        obj.put_str(tags::MODALITY, VR::CS, "OT");
        obj.put_u16(tags::ROWS, rows);
        obj.put_u16(tags::COLUMNS, cols);
        obj.put_u16(tags::BITS_ALLOCATED, 8);
        let len = usize::from(rows) * usize::from(cols);
        obj.put_bytes(tags::PIXEL_DATA, VR::OB, &vec![fill; len])
            .unwrap();
        obj
    }

    #[test]
    fn nothing_to_merge() {
        assert!(matches!(
            merge_frames(&[], MergePolicy::default()),
            Err(MergeError::NoInstances { .. })
        ));
    }

    #[test]
    fn merge_with_policies() {
        let instances = [
            frame(2, 2, 1, "101010"),
            frame(2, 2, 2, "101011"),
            frame(2, 2, 3, "101010"),
        ];

        let merged = merge_frames(&instances, MergePolicy::FirstWins).unwrap();
        assert_eq!(merged.get_str(tags::ACQUISITION_TIME).unwrap(), "101010");
        assert_eq!(merged.get_int::<u32>(tags::NUMBER_OF_FRAMES).unwrap(), 3);

        assert!(matches!(
            merge_frames(&instances, MergePolicy::RejectConflicts),
            Err(MergeError::ConflictingAttribute { tag, index: 1, .. })
                if tag == tags::ACQUISITION_TIME
        ));

        let merged = merge_frames(&instances, MergePolicy::DropConflicting).unwrap();
        assert!(!merged.contains(tags::ACQUISITION_TIME));
        assert_eq!(merged.get_str(tags::MODALITY).unwrap(), "OT");
    }

    #[test]
    fn geometry_must_match() {
        let instances = [frame(2, 2, 1, "10"), frame(2, 3, 2, "10")];
        assert!(matches!(
            merge_frames(&instances, MergePolicy::FirstWins),
            Err(MergeError::GeometryMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn per_frame_functional_groups() {
        let mut instances = [frame(1, 2, 1, "10"), frame(1, 2, 2, "10")];
        for (i, obj) in instances.iter_mut().enumerate() {
            let mut content = InMemDicomObject::new_empty();
            content.put_u32(tags::DIMENSION_INDEX_VALUES, i as u32 + 1);
            let mut item = InMemDicomObject::new_empty();
            item.put_sequence(tags::FRAME_CONTENT_SEQUENCE, [content]);
            obj.put_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, [item]);
        }

        let merged = merge_frames(&instances, MergePolicy::RejectConflicts).unwrap();
        let items = merged
            .get_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
            .unwrap();
        assert_eq!(items.len(), 2);

        let split = split_frames(&merged).unwrap();
        assert_eq!(split.len(), 2);
        for (i, obj) in split.iter().enumerate() {
            let items = obj
                .get_sequence(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
                .unwrap();
            assert_eq!(items.len(), 1);
            let content = items[0].get_sequence(tags::FRAME_CONTENT_SEQUENCE).unwrap();
            assert_eq!(
                content[0]
                    .get_int::<u32>(tags::DIMENSION_INDEX_VALUES)
                    .unwrap(),
                i as u32 + 1
            );
        }
    }

    #[test]
    fn split_encapsulated() {
        let mut obj = frame(1, 2, 0, "10");
        obj.put_int(tags::NUMBER_OF_FRAMES, VR::IS, 2).unwrap();
        obj.put_pixel_sequence(
            tags::PIXEL_DATA,
            VR::OB,
            encapsulate(vec![vec![0xFF, 0xD8, 0xFF, 0xD9], vec![0xFF, 0xD8, 0xFF, 0xD9, 1, 2]])
                .unwrap(),
        );
        let split = split_frames(&obj).unwrap();
        assert_eq!(split.len(), 2);
        let second = split[1].pixel_data().unwrap().unwrap();
        assert!(second.is_encapsulated());
        assert_eq!(second.number_of_frames(), 1);
        assert_eq!(
            second.frame_data(0).unwrap().as_ref(),
            &[0xFF, 0xD8, 0xFF, 0xD9, 1, 2]
        );
    }
}
