use dicomkit_core::dictionary::StubDataDictionary;
use dicomkit_core::prelude::*;

#[test]
fn can_use_prelude() {
    // can refer to `DataElement`, `Tag`, `VR`, and `dicom_value!`
    let elem: DataElement = DataElement::new(
        Tag(0x0010, 0x0010),
        VR::PN,
        dicom_value!(Str, "Simões^João"),
    );
    // UTF-8 byte length, padded to even
    assert_eq!("Simões^João".len(), 13);
    assert_eq!(elem.length(), Length(14));
    assert_eq!(elem.tag(), Tag(0x0010, 0x0010));

    // can call `by_tag`
    assert_eq!(StubDataDictionary.by_tag(Tag(0x0010, 0x0010)), None);
}
