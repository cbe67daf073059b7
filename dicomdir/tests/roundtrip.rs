use dicomkit_core::VR;
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_dir::{
    open_dicomdir, read, read_dicomdir, DicomDirBuilder, DicomDirWriter, RecordType, Statistics,
};
use dicomkit_object::{open_file, FileMetaTableBuilder, InMemDicomObject};
use rstest::rstest;

fn instance(patient: usize, study: usize, series: usize, image: usize) -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::SOP_CLASS_UID, VR::UI, uids::CT_IMAGE_STORAGE);
    obj.put_str(
        tags::SOP_INSTANCE_UID,
        VR::UI,
        format!("1.2.826.0.1.3680043.2.1125.{}.{}.{}.{}", patient, study, series, image),
    );
    obj.put_str(tags::PATIENT_ID, VR::LO, format!("PAT{}", patient));
    obj.put_str(tags::PATIENT_NAME, VR::PN, format!("Doe^Patient{}", patient));
    obj.put_str(
        tags::STUDY_INSTANCE_UID,
        VR::UI,
        format!("1.2.826.0.1.3680043.2.1125.{}.{}", patient, study),
    );
    obj.put_str(tags::STUDY_DATE, VR::DA, "20240131");
    obj.put_str(tags::STUDY_DESCRIPTION, VR::LO, "Chest");
    obj.put_str(
        tags::SERIES_INSTANCE_UID,
        VR::UI,
        format!("1.2.826.0.1.3680043.2.1125.{}.{}.{}", patient, study, series),
    );
    obj.put_str(tags::MODALITY, VR::CS, "CT");
    obj.put_int(tags::SERIES_NUMBER, VR::IS, series as i64 + 1).unwrap();
    obj.put_int(tags::INSTANCE_NUMBER, VR::IS, image as i64 + 1).unwrap();
    obj
}

/// 2 patients with 2 studies each, every study with 2 or 3 series of 2 images.
fn sample_builder() -> DicomDirBuilder {
    let mut builder = DicomDirBuilder::new().file_set_id("SAMPLE");
    for patient in 0..2 {
        for study in 0..2 {
            let series_count = if study == 0 { 2 } else { 3 };
            for series in 0..series_count {
                for image in 0..2 {
                    let path = format!("P{}/S{}/R{}/I{}", patient, study, series, image);
                    builder
                        .add_dataset(&instance(patient, study, series, image), path)
                        .unwrap();
                }
            }
        }
    }
    builder
}

#[test]
fn sample_statistics() {
    assert_eq!(
        sample_builder().statistics(),
        Statistics {
            patients: 2,
            studies: 4,
            series: 10,
            images: 20,
        }
    );
}

#[rstest]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_BIG_ENDIAN)]
fn write_and_read_back(#[case] ts: &str) {
    let dir = sample_builder().build();
    let bytes = DicomDirWriter::new()
        .transfer_syntax(ts)
        .write_to_vec(&dir)
        .unwrap();
    assert_eq!(&bytes[128..132], b"DICM");

    let read = read_dicomdir(&bytes).unwrap();
    assert_eq!(read.file_set_id(), "SAMPLE");
    assert_eq!(read.statistics(), dir.statistics());
    assert_eq!(read, dir);

    let records = read.all_records();
    assert_eq!(records[0].record_type(), RecordType::Patient);
    assert_eq!(records[0].key().as_deref(), Some("PAT0"));
    assert_eq!(records[1].record_type(), RecordType::Study);
    assert_eq!(
        records[1].attributes().get_str(tags::STUDY_DATE).unwrap(),
        "20240131"
    );
    assert_eq!(records[3].record_type(), RecordType::Image);
    assert_eq!(
        records[3].referenced_file_id(),
        Some(vec![
            "P0".to_string(),
            "S0".to_string(),
            "R0".to_string(),
            "I0".to_string()
        ])
    );
}

#[test]
fn empty_directory_round_trip() {
    let dir = DicomDirBuilder::new().file_set_id("NOTHING").build();
    let bytes = DicomDirWriter::new().write_to_vec(&dir).unwrap();
    assert_eq!(&bytes[..128], &[0; 128][..]);
    assert_eq!(&bytes[128..132], b"DICM");

    let read = read_dicomdir(&bytes).unwrap();
    assert!(read.is_empty());
    assert_eq!(read.file_set_id(), "NOTHING");
    assert_eq!(read.statistics(), Statistics::default());
}

#[test]
fn snapshot_is_isolated_from_later_additions() {
    let mut builder = sample_builder();
    let snapshot = builder.build();
    builder
        .add_dataset(&instance(5, 0, 0, 0), "P5/S0/R0/I0")
        .unwrap();

    let bytes = DicomDirWriter::new().write_to_vec(&snapshot).unwrap();
    let read = read_dicomdir(&bytes).unwrap();
    assert_eq!(read.statistics().patients, 2);
    assert_eq!(builder.statistics().patients, 3);
}

#[test]
fn file_set_on_disk() {
    let root = tempfile::tempdir().unwrap();
    let mut builder = DicomDirBuilder::new().file_set_id("DISK");
    for image in 0..3 {
        let relative = format!("DICOM/IM{}", image);
        let path = root.path().join("DICOM").join(format!("IM{}", image));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        instance(0, 0, 0, image)
            .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN))
            .unwrap()
            .write_to_file(&path)
            .unwrap();
        let file = open_file(&path).unwrap();
        builder.add_file(&file, relative).unwrap();
    }

    let dir = builder.build();
    dir.validate(Some(root.path())).unwrap();
    let leaf = dir
        .all_records()
        .into_iter()
        .find(|r| r.record_type().is_leaf())
        .unwrap();
    assert_eq!(
        leaf.attributes()
            .get_str(tags::REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE)
            .unwrap(),
        uids::EXPLICIT_VR_LITTLE_ENDIAN
    );

    let dicomdir_path = root.path().join("DICOMDIR");
    DicomDirWriter::new()
        .write_to_file(&dir, &dicomdir_path)
        .unwrap();
    let read = open_dicomdir(&dicomdir_path).unwrap();
    assert_eq!(read.statistics().images, 3);
    read.validate(Some(root.path())).unwrap();

    std::fs::remove_file(root.path().join("DICOM").join("IM1")).unwrap();
    assert!(read.validate(Some(root.path())).is_err());
}

#[test]
fn regular_files_are_not_directories() {
    let bytes = instance(0, 0, 0, 0)
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN))
        .unwrap()
        .write_to_vec()
        .unwrap();
    let err = read_dicomdir(&bytes).unwrap_err();
    assert!(matches!(err, read::Error::NotADirectory { .. }));
}

#[test]
fn truncated_directory_is_a_read_error() {
    let dir = sample_builder().build();
    let bytes = DicomDirWriter::new().write_to_vec(&dir).unwrap();
    let err = read_dicomdir(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, read::Error::ReadDirectory { .. }), "{:?}", err);
}

#[test]
fn consistency_flag_round_trip() {
    let mut builder = sample_builder();
    // the same instance stored twice
    builder
        .add_dataset(&instance(0, 0, 0, 0), "COPY/I0")
        .unwrap();
    let dir = builder.build();
    assert!(!dir.is_consistent());

    let bytes = DicomDirWriter::new().write_to_vec(&dir).unwrap();
    let read = read_dicomdir(&bytes).unwrap();
    assert!(!read.is_consistent());
    assert_eq!(read.statistics().images, 21);
    assert!(sample_builder().build().is_consistent());
}
