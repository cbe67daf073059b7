use dicomkit_core::VR;
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_object::{open_file, FileMetaTableBuilder, InMemDicomObject};
use dicomkit_pixeldata::{
    encapsulate, merge_files, split_file, MergePolicy, PixelDataObject,
};
use rstest::rstest;
use std::collections::HashSet;

const ROWS: u16 = 4;
const COLUMNS: u16 = 3;

fn single_frame(index: u8, encapsulated: bool) -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::SOP_CLASS_UID, VR::UI, uids::SECONDARY_CAPTURE_IMAGE_STORAGE);
    obj.put_str(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        format!("1.2.826.0.1.3680043.2.1125.{}", index + 1),
    );
    obj.put_str(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3");
    obj.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4");
    obj.put_str(tags::MODALITY, VR::CS, "OT");
    obj.put_int(tags::INSTANCE_NUMBER, VR::IS, i64::from(index) + 1)
        .unwrap();
    obj.put_u16(tags::SAMPLES_PER_PIXEL, 1);
    obj.put_str(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");
    obj.put_u16(tags::ROWS, ROWS);
    obj.put_u16(tags::COLUMNS, COLUMNS);
    obj.put_u16(tags::BITS_ALLOCATED, 16);
    obj.put_u16(tags::BITS_STORED, 12);
    obj.put_u16(tags::HIGH_BIT, 11);
    obj.put_u16(tags::PIXEL_REPRESENTATION, 0);

    let data = frame_bytes(index);
    if encapsulated {
        obj.put_pixel_sequence(tags::PIXEL_DATA, VR::OB, encapsulate(vec![data]).unwrap());
    } else {
        obj.put_bytes(tags::PIXEL_DATA, VR::OW, &data).unwrap();
    }
    obj
}

fn frame_bytes(index: u8) -> Vec<u8> {
    (0..usize::from(ROWS) * usize::from(COLUMNS) * 2)
        .map(|i| (i as u8).wrapping_mul(3).wrapping_add(index * 50))
        .collect()
}

#[rstest]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN, false)]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN, false)]
#[case(uids::EXPLICIT_VR_BIG_ENDIAN, false)]
#[case(uids::RLE_LOSSLESS, true)]
fn merge_and_split_files(#[case] ts: &str, #[case] encapsulated: bool) {
    let dir = tempfile::tempdir().unwrap();

    // write and read back three single-frame files
    let files: Vec<_> = (0..3)
        .map(|i| {
            let path = dir.path().join(format!("frame{}.dcm", i));
            single_frame(i, encapsulated)
                .with_meta(FileMetaTableBuilder::new().transfer_syntax(ts))
                .unwrap()
                .write_to_file(&path)
                .unwrap();
            open_file(&path).unwrap()
        })
        .collect();
    let single_length = files[0]
        .pixel_data()
        .unwrap()
        .unwrap()
        .frame_data(0)
        .unwrap()
        .len();
    assert_eq!(single_length, usize::from(ROWS) * usize::from(COLUMNS) * 2);

    let merged = merge_files(&files, MergePolicy::FirstWins).unwrap();
    assert_eq!(merged.get_int::<u32>(tags::NUMBER_OF_FRAMES).unwrap(), 3);
    assert_eq!(merged.meta().transfer_syntax, ts);
    let merged_uid = merged.get_str(tags::SOP_INSTANCE_UID).unwrap().into_owned();
    assert_eq!(merged.meta().media_storage_sop_instance_uid, merged_uid);
    for file in &files {
        assert_ne!(file.get_str(tags::SOP_INSTANCE_UID).unwrap(), merged_uid);
    }
    if !encapsulated {
        assert_eq!(
            merged.get_bytes(tags::PIXEL_DATA).unwrap().len(),
            3 * single_length
        );
    }

    // the merged file survives a round trip
    let merged_path = dir.path().join("merged.dcm");
    merged.write_to_file(&merged_path).unwrap();
    let merged = open_file(&merged_path).unwrap();
    let pixel_data = merged.pixel_data().unwrap().unwrap();
    assert_eq!(pixel_data.number_of_frames(), 3);
    assert_eq!(pixel_data.is_encapsulated(), encapsulated);
    assert!(pixel_data.frame_data(3).is_none());

    let split = split_file(&merged).unwrap();
    assert_eq!(split.len(), 3);
    let mut uids = HashSet::new();
    uids.insert(merged_uid);
    for (i, file) in split.iter().enumerate() {
        assert_eq!(file.get_int::<u32>(tags::NUMBER_OF_FRAMES).unwrap(), 1);
        assert_eq!(file.get_str(tags::MODALITY).unwrap(), "OT");
        let frame = file.pixel_data().unwrap().unwrap();
        assert_eq!(
            frame.frame_data(0).unwrap().as_ref(),
            frame_bytes(i as u8).as_slice()
        );
        let uid = file.get_str(tags::SOP_INSTANCE_UID).unwrap().into_owned();
        assert_eq!(file.meta().media_storage_sop_instance_uid, uid);
        // every split instance has its own identity
        assert!(uids.insert(uid));
    }
}

#[test]
fn frame_range_queries() {
    let file = single_frame(0, false)
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN))
        .unwrap();
    let pixel_data = file.pixel_data().unwrap().unwrap();
    assert_eq!(pixel_data.number_of_frames(), 1);
    assert!(pixel_data.frame_data(0).is_some());
    assert!(pixel_data.frame_data(1).is_none());
    assert!(pixel_data.frame_data(usize::MAX).is_none());
}
