//! Directory record types and the records of a directory tree.

use dicomkit_core::Tag;
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_object::InMemDicomObject;
use std::fmt;

/// The type of a directory record,
/// as declared in its Directory Record Type attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    Patient,
    Study,
    Series,
    Image,
    SrDocument,
    Presentation,
    KeyObjectDoc,
    EncapDoc,
    RtDose,
    RtStructureSet,
    RtPlan,
    Waveform,
}

impl RecordType {
    /// All supported record types.
    pub const ALL: [RecordType; 12] = [
        RecordType::Patient,
        RecordType::Study,
        RecordType::Series,
        RecordType::Image,
        RecordType::SrDocument,
        RecordType::Presentation,
        RecordType::KeyObjectDoc,
        RecordType::EncapDoc,
        RecordType::RtDose,
        RecordType::RtStructureSet,
        RecordType::RtPlan,
        RecordType::Waveform,
    ];

    /// The code of the record type as written in the file.
    pub fn code(self) -> &'static str {
        match self {
            RecordType::Patient => "PATIENT",
            RecordType::Study => "STUDY",
            RecordType::Series => "SERIES",
            RecordType::Image => "IMAGE",
            RecordType::SrDocument => "SR DOCUMENT",
            RecordType::Presentation => "PRESENTATION",
            RecordType::KeyObjectDoc => "KEY OBJECT DOC",
            RecordType::EncapDoc => "ENCAP DOC",
            RecordType::RtDose => "RT DOSE",
            RecordType::RtStructureSet => "RT STRUCTURE SET",
            RecordType::RtPlan => "RT PLAN",
            RecordType::Waveform => "WAVEFORM",
        }
    }

    /// Obtain the record type from its code,
    /// ignoring surrounding padding.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim_matches(|c: char| c == ' ' || c == '\0');
        RecordType::ALL.into_iter().find(|t| t.code() == code)
    }

    /// The level of the record in the directory tree,
    /// from 1 (patient) to 4 (the leaf records).
    pub fn level(self) -> u8 {
        match self {
            RecordType::Patient => 1,
            RecordType::Study => 2,
            RecordType::Series => 3,
            _ => 4,
        }
    }

    /// Whether records of this type reference a file.
    pub fn is_leaf(self) -> bool {
        self.level() == 4
    }

    /// Select the leaf record type for an instance of the given SOP class.
    pub fn for_sop_class(uid: &str) -> Self {
        const SR_PREFIX: &str = "1.2.840.10008.5.1.4.1.1.88.";
        const PRESENTATION_PREFIX: &str = "1.2.840.10008.5.1.4.1.1.11.";
        const ENCAPSULATED_PREFIX: &str = "1.2.840.10008.5.1.4.1.1.104.";
        const WAVEFORM_PREFIX: &str = "1.2.840.10008.5.1.4.1.1.9.";

        let uid = uid.trim_end_matches(|c: char| c == ' ' || c == '\0');
        match uid {
            uids::KEY_OBJECT_SELECTION_DOCUMENT_STORAGE => RecordType::KeyObjectDoc,
            uids::RT_DOSE_STORAGE => RecordType::RtDose,
            uids::RT_STRUCTURE_SET_STORAGE => RecordType::RtStructureSet,
            uids::RT_PLAN_STORAGE => RecordType::RtPlan,
            _ if uid.starts_with(SR_PREFIX) => RecordType::SrDocument,
            _ if uid.starts_with(PRESENTATION_PREFIX) => RecordType::Presentation,
            _ if uid.starts_with(ENCAPSULATED_PREFIX) => RecordType::EncapDoc,
            _ if uid.starts_with(WAVEFORM_PREFIX) => RecordType::Waveform,
            _ => RecordType::Image,
        }
    }

    /// The attributes copied from an instance into a record of this type,
    /// when present in the instance.
    pub fn attributes(self) -> &'static [Tag] {
        match self {
            RecordType::Patient => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::PATIENT_NAME,
                tags::PATIENT_ID,
                tags::PATIENT_BIRTH_DATE,
                tags::PATIENT_SEX,
            ],
            RecordType::Study => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::STUDY_DATE,
                tags::STUDY_TIME,
                tags::ACCESSION_NUMBER,
                tags::STUDY_DESCRIPTION,
                tags::STUDY_INSTANCE_UID,
                tags::STUDY_ID,
            ],
            RecordType::Series => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::MODALITY,
                tags::SERIES_INSTANCE_UID,
                tags::SERIES_NUMBER,
            ],
            RecordType::Image => &[tags::SPECIFIC_CHARACTER_SET, tags::INSTANCE_NUMBER],
            RecordType::SrDocument => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::CONTENT_DATE,
                tags::CONTENT_TIME,
                tags::INSTANCE_NUMBER,
                tags::CONCEPT_NAME_CODE_SEQUENCE,
                tags::COMPLETION_FLAG,
                tags::VERIFICATION_FLAG,
            ],
            RecordType::Presentation => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::INSTANCE_NUMBER,
                tags::CONTENT_LABEL,
                tags::CONTENT_DESCRIPTION,
                tags::PRESENTATION_CREATION_DATE,
                tags::PRESENTATION_CREATION_TIME,
                tags::CONTENT_CREATOR_NAME,
            ],
            RecordType::KeyObjectDoc => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::CONTENT_DATE,
                tags::CONTENT_TIME,
                tags::INSTANCE_NUMBER,
                tags::CONCEPT_NAME_CODE_SEQUENCE,
            ],
            RecordType::EncapDoc => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::CONTENT_DATE,
                tags::CONTENT_TIME,
                tags::INSTANCE_NUMBER,
                tags::CONCEPT_NAME_CODE_SEQUENCE,
                tags::DOCUMENT_TITLE,
                tags::MIME_TYPE_OF_ENCAPSULATED_DOCUMENT,
            ],
            RecordType::RtDose => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::INSTANCE_NUMBER,
                tags::DOSE_SUMMATION_TYPE,
            ],
            RecordType::RtStructureSet => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::INSTANCE_NUMBER,
                tags::STRUCTURE_SET_LABEL,
                tags::STRUCTURE_SET_DATE,
                tags::STRUCTURE_SET_TIME,
            ],
            RecordType::RtPlan => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::INSTANCE_NUMBER,
                tags::RT_PLAN_LABEL,
                tags::RT_PLAN_DATE,
                tags::RT_PLAN_TIME,
            ],
            RecordType::Waveform => &[
                tags::SPECIFIC_CHARACTER_SET,
                tags::CONTENT_DATE,
                tags::CONTENT_TIME,
                tags::INSTANCE_NUMBER,
            ],
        }
    }

    /// The attribute identifying a record of this type among its siblings,
    /// if it is not a leaf.
    pub fn key(self) -> Option<Tag> {
        match self {
            RecordType::Patient => Some(tags::PATIENT_ID),
            RecordType::Study => Some(tags::STUDY_INSTANCE_UID),
            RecordType::Series => Some(tags::SERIES_INSTANCE_UID),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The index of a record in a directory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    /// The position of the record in the directory's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single record of a directory tree.
///
/// The attributes do not include the record type
/// nor the offsets linking the records in the file,
/// which only exist in the encoded form.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRecord {
    pub(crate) record_type: RecordType,
    pub(crate) attributes: InMemDicomObject,
    pub(crate) children: Vec<RecordId>,
}

impl DirectoryRecord {
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn attributes(&self) -> &InMemDicomObject {
        &self.attributes
    }

    /// The records one level below this one, in insertion order.
    pub fn children(&self) -> &[RecordId] {
        &self.children
    }

    /// The value of the key attribute of this record,
    /// or `None` for leaf records.
    pub fn key(&self) -> Option<String> {
        let tag = self.record_type.key()?;
        Some(
            self.attributes
                .get_str(tag)
                .map(|s| s.into_owned())
                .unwrap_or_default(),
        )
    }

    /// The path components of the referenced file, for leaf records.
    pub fn referenced_file_id(&self) -> Option<Vec<String>> {
        self.attributes.get_strs(tags::REFERENCED_FILE_ID).ok()
    }

    /// The SOP instance UID of the referenced file, for leaf records.
    pub fn referenced_sop_instance_uid(&self) -> Option<String> {
        self.attributes
            .get_str(tags::REFERENCED_SOP_INSTANCE_UID_IN_FILE)
            .ok()
            .map(|s| s.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn codes_round_trip() {
        for t in RecordType::ALL {
            assert_eq!(RecordType::from_code(t.code()), Some(t));
        }
        assert_eq!(RecordType::from_code("SERIES "), Some(RecordType::Series));
        assert_eq!(RecordType::from_code("HANGING PROTOCOL"), None);
    }

    #[rstest]
    #[case(uids::CT_IMAGE_STORAGE, RecordType::Image)]
    #[case(uids::ENHANCED_CT_IMAGE_STORAGE, RecordType::Image)]
    #[case(uids::RT_IMAGE_STORAGE, RecordType::Image)]
    #[case(uids::BASIC_TEXT_SR_STORAGE, RecordType::SrDocument)]
    #[case(uids::COMPREHENSIVE_SR_STORAGE, RecordType::SrDocument)]
    #[case(uids::KEY_OBJECT_SELECTION_DOCUMENT_STORAGE, RecordType::KeyObjectDoc)]
    #[case(uids::GRAYSCALE_SOFTCOPY_PRESENTATION_STATE_STORAGE, RecordType::Presentation)]
    #[case(uids::ENCAPSULATED_PDF_STORAGE, RecordType::EncapDoc)]
    #[case(uids::ENCAPSULATED_CDA_STORAGE, RecordType::EncapDoc)]
    #[case(uids::RT_DOSE_STORAGE, RecordType::RtDose)]
    #[case(uids::RT_STRUCTURE_SET_STORAGE, RecordType::RtStructureSet)]
    #[case(uids::RT_PLAN_STORAGE, RecordType::RtPlan)]
    #[case(uids::TWELVE_LEAD_ECG_WAVEFORM_STORAGE, RecordType::Waveform)]
    fn leaf_type_by_sop_class(#[case] uid: &str, #[case] expected: RecordType) {
        let record_type = RecordType::for_sop_class(uid);
        assert_eq!(record_type, expected);
        assert!(record_type.is_leaf());
    }

    #[test]
    fn levels() {
        assert_eq!(RecordType::Patient.level(), 1);
        assert_eq!(RecordType::Study.level(), 2);
        assert_eq!(RecordType::Series.level(), 3);
        assert_eq!(RecordType::Waveform.level(), 4);
        assert_eq!(RecordType::Series.key(), Some(tags::SERIES_INSTANCE_UID));
        assert_eq!(RecordType::Image.key(), None);
    }
}
