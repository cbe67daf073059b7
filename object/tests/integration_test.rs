use dicomkit_core::value::{PixelFragmentSequence, PrimitiveValue, Value};
use dicomkit_core::{DataElement, HasLength, Tag, VR};
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_object::{
    decode_dataset, encode_dataset, open_file, DataSetWriter, FileMetaTableBuilder,
    InMemDicomObject, SequenceLength, WriteOptions,
};
use dicomkit_encoding::transfer_syntax::entries::{
    EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
};
use rstest::rstest;

fn referenced_image(class_uid: &str, instance_uid: &str) -> InMemDicomObject {
    let mut item = InMemDicomObject::new_empty();
    item.put_str(tags::REFERENCED_SOP_CLASS_UID, VR::UI, class_uid);
    item.put_str(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, instance_uid);
    item
}

/// A data set built only through the typed setters.
fn sample_dataset() -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192");
    obj.put_str(tags::SOP_CLASS_UID, VR::UI, uids::CT_IMAGE_STORAGE);
    obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5.6.7");
    obj.put_str(tags::STUDY_DATE, VR::DA, "20240131");
    obj.put_str(tags::STUDY_TIME, VR::TM, "101500.5");
    obj.put_strs(tags::IMAGE_TYPE, VR::CS, ["ORIGINAL", "PRIMARY", "AXIAL"]);
    obj.put_str(tags::MODALITY, VR::CS, "CT");
    obj.put_str(tags::PATIENT_NAME, VR::PN, "Simões^João");
    obj.put_str(tags::PATIENT_ID, VR::LO, "");
    obj.put_decimal(tags::SLICE_THICKNESS, VR::DS, 2.5).unwrap();
    obj.put_str(tags::STUDY_INSTANCE_UID, VR::UI, "1.2.3.4");
    obj.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4.5");
    obj.put_int(tags::SERIES_NUMBER, VR::IS, 7).unwrap();
    obj.put_u32(tags::DIMENSION_INDEX_VALUES, 3);
    obj.put_u16(tags::ROWS, 2);
    obj.put_u16(tags::COLUMNS, 2);
    obj.put_strs(tags::PIXEL_SPACING, VR::DS, ["0.5", "0.5"]);
    obj.put_int(tags::BITS_ALLOCATED, VR::US, 8).unwrap();
    obj.put_bytes(tags::PIXEL_DATA, VR::OB, &[1, 2, 3, 4]).unwrap();

    let mut series = InMemDicomObject::new_empty();
    series.put_str(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3.4.5.9");
    series.put_sequence(
        tags::REFERENCED_IMAGE_SEQUENCE,
        vec![
            referenced_image(uids::CT_IMAGE_STORAGE, "1.2.3.4.5.9.1"),
            referenced_image(uids::CT_IMAGE_STORAGE, "1.2.3.4.5.9.2"),
        ],
    );
    obj.put_sequence(tags::REFERENCED_SERIES_SEQUENCE, vec![series]);
    obj
}

#[rstest]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_BIG_ENDIAN)]
fn dataset_round_trip(#[case] ts: &str) {
    let obj = sample_dataset();
    let bytes = encode_dataset(&obj, ts).unwrap();
    assert_eq!(bytes.len() % 2, 0);

    let decoded = decode_dataset(&bytes, ts).unwrap();
    assert_eq!(decoded, obj);
    assert_eq!(decoded.get_str(tags::PATIENT_NAME).unwrap(), "Simões^João");
    assert_eq!(decoded.get_int::<i32>(tags::SERIES_NUMBER).unwrap(), 7);
    assert_eq!(decoded.get_decimal(tags::SLICE_THICKNESS).unwrap(), 2.5);
    assert_eq!(
        decoded.get_strs(tags::IMAGE_TYPE).unwrap(),
        vec!["ORIGINAL", "PRIMARY", "AXIAL"]
    );
    let series = decoded.get_sequence(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    let images = series[0].get_sequence(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(
        images[1].get_str(tags::REFERENCED_SOP_INSTANCE_UID).unwrap(),
        "1.2.3.4.5.9.2"
    );

    // encoding is deterministic
    assert_eq!(encode_dataset(&decoded, ts).unwrap(), bytes);
}

#[rstest]
#[case(&IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(&EXPLICIT_VR_BIG_ENDIAN)]
fn undefined_length_sequences_round_trip(
    #[case] ts: &'static dicomkit_encoding::TransferSyntax,
) {
    let obj = sample_dataset();
    let writer = DataSetWriter::with_options(
        ts,
        WriteOptions::new().sequence_length(SequenceLength::Undefined),
    );
    let bytes = writer.encode(&obj).unwrap();
    let defined = encode_dataset(&obj, ts.uid()).unwrap();
    // one sequence delimiter for each of the two sequences,
    // one item delimiter for each of the three items
    assert_eq!(bytes.len(), defined.len() + 5 * 8);

    let decoded = decode_dataset(&bytes, ts.uid()).unwrap();
    assert_eq!(decoded, obj);
}

#[test]
fn odd_length_values_are_padded() {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3");
    obj.put_str(tags::MODALITY, VR::CS, "MRI");
    let bytes = encode_dataset(&obj, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x08, 0x00, 0x18, 0x00, b'U', b'I', 0x06, 0x00, b'1', b'.', b'2', b'.', b'3', 0x00,
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x04, 0x00, b'M', b'R', b'I', b' ',
    ];
    assert_eq!(bytes, expected);
}

#[test]
fn written_length_follows_the_character_set() {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::PATIENT_NAME, VR::PN, "Simões^João");
    // measured in UTF-8 until written
    assert_eq!(obj.element(tags::PATIENT_NAME).unwrap().length().0, 14);

    // default repertoire, one byte per character
    let bytes = encode_dataset(&obj, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(&bytes[4..8], &[b'P', b'N', 12, 0]);
    assert_eq!(bytes.len(), 8 + 12);
    let decoded = decode_dataset(&bytes, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(decoded.get_str(tags::PATIENT_NAME).unwrap(), "Simões^João");

    obj.put_str(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192");
    let bytes = encode_dataset(&obj, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let name = bytes.windows(2).position(|w| w == b"PN").unwrap();
    assert_eq!(&bytes[name + 2..name + 4], &[14, 0]);
}

#[rstest]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_BIG_ENDIAN)]
fn trailing_padding_in_setters_round_trips(#[case] ts: &str) {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::PATIENT_ID, VR::LO, "ABC ");
    obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4\0");
    obj.put_str(tags::STUDY_DESCRIPTION, VR::LO, "  ");
    obj.put_strs(tags::IMAGE_TYPE, VR::CS, ["ORIGINAL ", "PRIMARY "]);
    assert_eq!(obj.get_str(tags::PATIENT_ID).unwrap(), "ABC");

    let bytes = encode_dataset(&obj, ts).unwrap();
    let decoded = decode_dataset(&bytes, ts).unwrap();
    assert_eq!(decoded, obj);
    // only the end of the packed value is padding
    assert_eq!(
        decoded.element(tags::IMAGE_TYPE).unwrap().value(),
        &Value::Primitive(PrimitiveValue::strs(["ORIGINAL ", "PRIMARY"]))
    );
    assert_eq!(
        decoded.element(tags::STUDY_DESCRIPTION).unwrap().value(),
        &Value::Primitive(PrimitiveValue::Empty)
    );
}

#[test]
fn standard_attributes_keep_their_vr_in_implicit_vr() {
    let mut item = InMemDicomObject::new_empty();
    item.put_str(tags::RELATIONSHIP_TYPE, VR::CS, "CONTAINS");
    item.put_str(tags::VALUE_TYPE, VR::CS, "TEXT");
    item.put_str(tags::TEXT_VALUE, VR::UT, "No acute findings\\none");

    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::BODY_PART_EXAMINED, VR::CS, "CHEST");
    obj.put_strs(tags::WINDOW_CENTER, VR::DS, ["40", "400"]);
    obj.put_decimal(tags::KVP, VR::DS, 120.0).unwrap();
    obj.put_u16(tags::ACQUISITION_MATRIX, 256);
    obj.put_str(tags::ACQUISITION_DATE_TIME, VR::DT, "20240131101500");
    obj.put_str(tags::REVIEWER_NAME, VR::PN, "Doe^Jane");
    obj.put_sequence(tags::CONTENT_SEQUENCE, vec![item]);

    let bytes = encode_dataset(&obj, uids::IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let decoded = decode_dataset(&bytes, uids::IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(decoded, obj);
    assert_eq!(decoded.element(tags::BODY_PART_EXAMINED).unwrap().vr(), VR::CS);
    assert_eq!(decoded.get_str(tags::BODY_PART_EXAMINED).unwrap(), "CHEST");
    assert_eq!(decoded.get_int::<u16>(tags::ACQUISITION_MATRIX).unwrap(), 256);
    let content = decoded.get_sequence(tags::CONTENT_SEQUENCE).unwrap();
    assert_eq!(
        content[0].get_str(tags::TEXT_VALUE).unwrap(),
        "No acute findings\\none"
    );
}

#[test]
fn private_and_unknown_elements_survive() {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(Tag(0x0009, 0x0010), VR::LO, "ACME 1.0");
    obj.put_bytes(Tag(0x0009, 0x1001), VR::UN, &[0xCA, 0xFE]).unwrap();

    for ts in [
        uids::IMPLICIT_VR_LITTLE_ENDIAN,
        uids::EXPLICIT_VR_LITTLE_ENDIAN,
        uids::EXPLICIT_VR_BIG_ENDIAN,
    ] {
        let bytes = encode_dataset(&obj, ts).unwrap();
        let decoded = decode_dataset(&bytes, ts).unwrap();
        assert_eq!(decoded, obj, "in {}", ts);
    }
}

#[rstest]
#[case(uids::IMPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_LITTLE_ENDIAN)]
#[case(uids::EXPLICIT_VR_BIG_ENDIAN)]
fn file_round_trip(#[case] ts: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.dcm");

    let file = sample_dataset()
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(ts))
        .unwrap();
    file.write_to_file(&path).unwrap();

    let read = open_file(&path).unwrap();
    assert_eq!(read.meta(), file.meta());
    assert_eq!(read.meta().transfer_syntax, ts);
    assert_eq!(read.meta().media_storage_sop_instance_uid, "1.2.3.4.5.6.7");
    assert_eq!(*read, *file);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[128..132], b"DICM");
    assert_eq!(bytes, read.write_to_vec().unwrap());
}

#[test]
fn encapsulated_pixel_data_file_round_trip() {
    let mut obj = sample_dataset();
    obj.put_pixel_sequence(
        tags::PIXEL_DATA,
        VR::OB,
        PixelFragmentSequence::new(
            vec![0_u32, 8],
            vec![vec![0xFF_u8, 0xD8, 0xFF, 0xD9], vec![0xFF_u8, 0xD8, 0x00]],
        ),
    );
    let file = obj
        .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::JPEG_BASELINE8_BIT))
        .unwrap();

    let mut out = Vec::new();
    file.write_all(&mut out).unwrap();
    let read = dicomkit_object::from_bytes(&out).unwrap();

    let pixel_data = read.get(tags::PIXEL_DATA).unwrap();
    match pixel_data.value() {
        Value::PixelSequence(seq) => {
            assert_eq!(seq.offset_table(), &[0, 8]);
            assert_eq!(seq.fragments().len(), 2);
            assert_eq!(seq.fragments()[0], vec![0xFF, 0xD8, 0xFF, 0xD9]);
            // odd fragments are padded on writing
            assert_eq!(seq.fragments()[1], vec![0xFF, 0xD8, 0x00, 0x00]);
        }
        value => panic!("expected a pixel sequence, but got {:?}", value),
    }
    assert_eq!(read.get_str(tags::MODALITY).unwrap(), "CT");
}

#[test]
fn group_lengths_are_recomputed() {
    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        Tag(0x0008, 0x0000),
        VR::UL,
        PrimitiveValue::from(1234_u32),
    ));
    obj.put_str(tags::MODALITY, VR::CS, "OT");
    obj.put_str(tags::PATIENT_ID, VR::LO, "12");

    let bytes = encode_dataset(&obj, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    let decoded = decode_dataset(&bytes, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    // only group 0008 declares a length: one 10-byte element
    assert_eq!(decoded.get_int::<u32>(Tag(0x0008, 0x0000)).unwrap(), 10);
    assert!(!decoded.contains(Tag(0x0010, 0x0000)));
}
