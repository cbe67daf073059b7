//! Module containing data structures and readers of DICOM file meta information tables.
//!
//! The file meta group is always encoded in explicit VR little endian,
//! whatever the transfer syntax it declares for the rest of the file.
use crate::mem::{InMemDicomObject, InMemElement};
use crate::read::{self, DataSetReader, ReadOptions};
use crate::write::{self, DataSetWriter};
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dicomkit_core::header::{HasLength, Header};
use dicomkit_core::value::{PrimitiveValue, C};
use dicomkit_core::{DataElement, Length, Tag, VR};
use dicomkit_dictionary_std::{tags, StandardDataDictionary};
use dicomkit_encoding::decode::{self, Decode};
use dicomkit_encoding::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

/// The magic code found right before the file meta group.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data"))]
    NotDicom { backtrace: Backtrace },

    /// The header of an element in the file meta group could not be decoded.
    #[snafu(display("Could not decode file meta element header at position {}", position))]
    DecodeElement {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },

    /// The file meta group is shorter than its declared length.
    #[snafu(display(
        "File meta group of {} bytes exceeds the {} bytes available",
        declared,
        available
    ))]
    TruncatedGroup {
        declared: u32,
        available: usize,
        backtrace: Backtrace,
    },

    /// The file meta group data set could not be decoded.
    #[snafu(display("Could not read file meta group"))]
    ReadGroup {
        #[snafu(backtrace)]
        source: read::Error,
    },

    /// A data element with an unexpected tag was retrieved:
    /// the parser was expecting one that is part of the file meta group.
    #[snafu(display("Unexpected data element tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The value length of a data element in the file meta group
    /// was unexpected.
    #[snafu(display("Unexpected length {} for data element tagged {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    /// The value length of a data element is undefined,
    /// but knowing the length is required in its context.
    #[snafu(display("Undefined value length for data element tagged {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        #[snafu(backtrace)]
        source: write::Error,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// This data type contains the relevant parts of the file meta information table, as
/// specified in [1].
/// Textual values are kept without their trailing padding.
///
/// [1]: http://dicom.nema.org/medical/dicom/current/output/chtml/part10/chapter_7.html
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,

    /// Implementation Version Name
    pub implementation_version_name: Option<String>,
    /// Source Application Entity Title
    pub source_application_entity_title: Option<String>,
    /// Sending Application Entity Title
    pub sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title
    pub receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID
    pub private_information_creator_uid: Option<String>,
    /// Private Information
    pub private_information: Option<Vec<u8>>,
}

impl FileMetaTable {
    /// Read the file meta group from the start of `data`,
    /// which must begin with the `DICM` magic code.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::read_at(data, 0).map(|(table, _)| table)
    }

    /// Read the file meta group from the start of `data`,
    /// positioned at `base_offset` in the enclosing file.
    ///
    /// Returns the table and the number of bytes consumed,
    /// magic code included.
    pub(crate) fn read_at(data: &[u8], base_offset: u64) -> Result<(Self, usize)> {
        ensure!(data.starts_with(&DICM_MAGIC_CODE), NotDicomSnafu);
        let group = &data[DICM_MAGIC_CODE.len()..];
        let group_base = base_offset + DICM_MAGIC_CODE.len() as u64;

        let end = group_end(group, group_base)?;
        let options = ReadOptions::new().base_offset(group_base);
        let obj = DataSetReader::with_dict(
            &group[..end],
            &EXPLICIT_VR_LITTLE_ENDIAN,
            StandardDataDictionary,
            options,
        )
        .read_dataset()
        .context(ReadGroupSnafu)?;

        let table = Self::from_object(&obj)?;
        Ok((table, DICM_MAGIC_CODE.len() + end))
    }

    fn from_object(obj: &InMemDicomObject) -> Result<Self> {
        if let Some(e) = obj.iter().find(|e| e.tag().group() != 0x0002) {
            return UnexpectedTagSnafu { tag: e.tag() }.fail();
        }

        let text = |tag: Tag| {
            obj.get(tag)
                .and_then(|e| e.to_str().ok())
                .map(|s| s.into_owned())
        };
        let bytes = |tag: Tag| obj.get(tag).and_then(|e| e.to_bytes().ok()).map(|b| b.into_owned());

        let mut builder = FileMetaTableBuilder::new();
        if let Some(version) = obj.get(tags::FILE_META_INFORMATION_VERSION) {
            let data = version.to_bytes().unwrap_or_default();
            let version: [u8; 2] = data[..].try_into().ok().context(
                UnexpectedDataValueLengthSnafu {
                    tag: tags::FILE_META_INFORMATION_VERSION,
                    length: Length(data.len() as u32),
                },
            )?;
            builder = builder.information_version(version);
        }
        if let Some(v) = text(tags::MEDIA_STORAGE_SOP_CLASS_UID) {
            builder = builder.media_storage_sop_class_uid(v);
        }
        if let Some(v) = text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID) {
            builder = builder.media_storage_sop_instance_uid(v);
        }
        if let Some(v) = text(tags::TRANSFER_SYNTAX_UID) {
            builder = builder.transfer_syntax(v);
        }
        // an absent implementation class UID is not filled in on reading
        builder = builder.implementation_class_uid(
            text(tags::IMPLEMENTATION_CLASS_UID).context(MissingElementSnafu {
                alias: "ImplementationClassUID",
            })?,
        );
        builder.implementation_version_name = text(tags::IMPLEMENTATION_VERSION_NAME);
        builder.source_application_entity_title = text(tags::SOURCE_APPLICATION_ENTITY_TITLE);
        builder.sending_application_entity_title = text(tags::SENDING_APPLICATION_ENTITY_TITLE);
        builder.receiving_application_entity_title =
            text(tags::RECEIVING_APPLICATION_ENTITY_TITLE);
        builder.private_information_creator_uid = text(tags::PRIVATE_INFORMATION_CREATOR_UID);
        builder.private_information = bytes(tags::PRIVATE_INFORMATION);
        if let Ok(len) = obj.get_int::<u32>(tags::FILE_META_INFORMATION_GROUP_LENGTH) {
            builder = builder.group_length(len);
        }
        builder.build()
    }

    /// Convert the table into a data set of file meta group elements.
    ///
    /// The group length element carries the length recorded in the table,
    /// but it is recomputed whenever the data set is written.
    pub fn to_object(&self) -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_u32(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            self.information_group_length,
        );
        obj.put(DataElement::new(
            tags::FILE_META_INFORMATION_VERSION,
            VR::OB,
            PrimitiveValue::U8(C::from_slice(&self.information_version)),
        ));
        obj.put_str(
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            &self.media_storage_sop_class_uid,
        );
        obj.put_str(
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            VR::UI,
            &self.media_storage_sop_instance_uid,
        );
        obj.put_str(tags::TRANSFER_SYNTAX_UID, VR::UI, &self.transfer_syntax);
        obj.put_str(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            &self.implementation_class_uid,
        );

        let optional = [
            (
                tags::IMPLEMENTATION_VERSION_NAME,
                VR::SH,
                &self.implementation_version_name,
            ),
            (
                tags::SOURCE_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.source_application_entity_title,
            ),
            (
                tags::SENDING_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.sending_application_entity_title,
            ),
            (
                tags::RECEIVING_APPLICATION_ENTITY_TITLE,
                VR::AE,
                &self.receiving_application_entity_title,
            ),
            (
                tags::PRIVATE_INFORMATION_CREATOR_UID,
                VR::UI,
                &self.private_information_creator_uid,
            ),
        ];
        for (tag, vr, value) in optional {
            if let Some(value) = value {
                obj.put_str(tag, vr, value);
            }
        }
        if let Some(info) = &self.private_information {
            obj.put(InMemElement::new(
                tags::PRIVATE_INFORMATION,
                VR::OB,
                PrimitiveValue::U8(C::from_slice(info)),
            ));
        }
        obj
    }

    /// Write the magic code followed by the file meta group.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        out.extend_from_slice(&DICM_MAGIC_CODE);
        DataSetWriter::new(&EXPLICIT_VR_LITTLE_ENDIAN)
            .write_dataset(out, &self.to_object())
            .context(WriteSetSnafu)
    }
}

/// Determine where the file meta group ends in `data`,
/// which starts right after the magic code.
///
/// The group length element is trusted when present.
/// Otherwise, element headers are walked
/// until an element outside group 0002 is found.
fn group_end(data: &[u8], base_offset: u64) -> Result<usize> {
    if data.len() >= 12
        && LittleEndian::read_u16(&data[0..2]) == 0x0002
        && LittleEndian::read_u16(&data[2..4]) == 0x0000
        && &data[4..6] == b"UL"
        && LittleEndian::read_u16(&data[6..8]) == 4
    {
        let declared = LittleEndian::read_u32(&data[8..12]);
        let end = 12 + declared as usize;
        ensure!(
            end <= data.len(),
            TruncatedGroupSnafu {
                declared,
                available: data.len() - 12,
            }
        );
        return Ok(end);
    }

    let decoder = EXPLICIT_VR_LITTLE_ENDIAN.decoder();
    let mut position = 0;
    while data.len() - position >= 4 && LittleEndian::read_u16(&data[position..]) == 0x0002 {
        let mut source = &data[position..];
        let (header, header_len) = decoder
            .decode_header(&mut source)
            .context(DecodeElementSnafu {
                position: base_offset + position as u64,
            })?;
        let len = header.length().get().context(UndefinedValueLengthSnafu {
            tag: header.tag(),
        })?;
        position += header_len + len as usize;
    }
    Ok(position.min(data.len()))
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    /// File Meta Information Group Length (UL)
    information_group_length: Option<u32>,
    /// File Meta Information Version (OB)
    information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID (UI)
    media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID (UI)
    media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID (UI)
    transfer_syntax: Option<String>,
    /// Implementation Class UID (UI)
    implementation_class_uid: Option<String>,

    /// Implementation Version Name (SH)
    implementation_version_name: Option<String>,
    /// Source Application Entity Title (AE)
    source_application_entity_title: Option<String>,
    /// Sending Application Entity Title (AE)
    sending_application_entity_title: Option<String>,
    /// Receiving Application Entity Title (AE)
    receiving_application_entity_title: Option<String>,
    /// Private Information Creator UID (UI)
    private_information_creator_uid: Option<String>,
    /// Private Information (OB)
    private_information: Option<Vec<u8>>,
}

/// Remove the trailing padding of a textual value.
fn unpadded<T: Into<String>>(value: T) -> String {
    let mut value = value.into();
    let len = value.trim_end_matches(['\0', ' ']).len();
    value.truncate(len);
    value
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta information group length.
    pub fn group_length(mut self, value: u32) -> FileMetaTableBuilder {
        self.information_group_length = Some(value);
        self
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(unpadded(value));
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(unpadded(value));
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(unpadded(value));
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(unpadded(value));
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(unpadded(value));
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(unpadded(value));
        self
    }

    /// Define the sending application entity title.
    pub fn sending_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.sending_application_entity_title = Some(unpadded(value));
        self
    }

    /// Define the receiving application entity title.
    pub fn receiving_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.receiving_application_entity_title = Some(unpadded(value));
        self
    }

    /// Define the private information creator UID.
    pub fn private_information_creator_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.private_information_creator_uid = Some(unpadded(value));
        self
    }

    /// Define the private information as a vector of bytes.
    pub fn private_information<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<Vec<u8>>,
    {
        self.private_information = Some(value.into());
        self
    }

    /// Fill in the media storage UIDs from the SOP class and instance
    /// of the given data set, unless they were already defined.
    pub(crate) fn media_storage_from(mut self, obj: &InMemDicomObject) -> Self {
        if self.media_storage_sop_class_uid.is_none() {
            if let Ok(uid) = obj.get_str(tags::SOP_CLASS_UID) {
                self.media_storage_sop_class_uid = Some(uid.into_owned());
            }
        }
        if self.media_storage_sop_instance_uid.is_none() {
            if let Ok(uid) = obj.get_str(tags::SOP_INSTANCE_UID) {
                self.media_storage_sop_instance_uid = Some(uid.into_owned());
            }
        }
        self
    }

    /// Build the table.
    ///
    /// The media storage UIDs and the transfer syntax are required,
    /// and may not be empty.
    /// The implementation class UID and version name
    /// default to those of this library.
    pub fn build(self) -> Result<FileMetaTable> {
        fn required(value: Option<String>, alias: &'static str) -> Result<String> {
            value
                .filter(|v| !v.is_empty())
                .context(MissingElementSnafu { alias })
        }

        // Missing information version, will assume (00H, 01H)
        let information_version = self.information_version.unwrap_or([0, 1]);
        let media_storage_sop_class_uid =
            required(self.media_storage_sop_class_uid, "MediaStorageSOPClassUID")?;
        let media_storage_sop_instance_uid = required(
            self.media_storage_sop_instance_uid,
            "MediaStorageSOPInstanceUID",
        )?;
        let transfer_syntax = required(self.transfer_syntax, "TransferSyntax")?;
        let (implementation_class_uid, implementation_version_name) =
            match self.implementation_class_uid {
                Some(uid) => (uid, self.implementation_version_name),
                None => (
                    IMPLEMENTATION_CLASS_UID.to_string(),
                    self.implementation_version_name
                        .or_else(|| Some(IMPLEMENTATION_VERSION_NAME.to_string())),
                ),
            };

        fn dicom_len<T: AsRef<[u8]>>(x: T) -> u32 {
            let o = x.as_ref().len() as u32;
            o + o % 2
        }

        let information_group_length = match self.information_group_length {
            Some(e) => e,
            None => {
                // determine the expected meta group size based on the given fields.
                // FileMetaInformationGroupLength is not included here
                let optional = [
                    &implementation_version_name,
                    &self.source_application_entity_title,
                    &self.sending_application_entity_title,
                    &self.receiving_application_entity_title,
                    &self.private_information_creator_uid,
                ];
                14 + 8
                    + dicom_len(&media_storage_sop_class_uid)
                    + 8
                    + dicom_len(&media_storage_sop_instance_uid)
                    + 8
                    + dicom_len(&transfer_syntax)
                    + 8
                    + dicom_len(&implementation_class_uid)
                    + optional
                        .iter()
                        .filter_map(|v| v.as_ref())
                        .map(|s| 8 + dicom_len(s))
                        .sum::<u32>()
                    + self
                        .private_information
                        .as_ref()
                        .map(|x| 12 + dicom_len(x))
                        .unwrap_or(0)
            }
        };

        Ok(FileMetaTable {
            information_group_length,
            information_version,
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid,
            implementation_version_name,
            source_application_entity_title: self.source_application_entity_title,
            sending_application_entity_title: self.sending_application_entity_title,
            receiving_application_entity_title: self.receiving_application_entity_title,
            private_information_creator_uid: self.private_information_creator_uid,
            private_information: self.private_information,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(out: &mut Vec<u8>, element: u16, vr: &[u8; 2], value: &[u8]) {
        out.extend_from_slice(&[0x02, 0x00]);
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        if vr == b"OB" {
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        } else {
            out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        }
        out.extend_from_slice(value);
    }

    fn raw_meta(with_group_length: bool) -> Vec<u8> {
        let mut group = Vec::new();
        element(&mut group, 0x0001, b"OB", &[0x00, 0x01]);
        element(&mut group, 0x0002, b"UI", b"1.2.840.10008.5.1.4.1.1.7\0");
        element(&mut group, 0x0003, b"UI", b"1.2.3.4\0");
        element(&mut group, 0x0010, b"UI", b"1.2.840.10008.1.2.1\0");
        element(&mut group, 0x0012, b"UI", b"1.2.345.6.7890");
        element(&mut group, 0x0013, b"SH", b"DICOMKIT_01 ");

        let mut out = b"DICM".to_vec();
        if with_group_length {
            element(&mut out, 0x0000, b"UL", &(group.len() as u32).to_le_bytes());
        }
        out.extend(group);
        // start of the main data set: (0008,0060) CS "OT"
        out.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'O', b'T']);
        out
    }

    fn expected_table() -> FileMetaTable {
        FileMetaTable {
            information_group_length: 134,
            information_version: [0u8, 1],
            media_storage_sop_class_uid: "1.2.840.10008.5.1.4.1.1.7".to_owned(),
            media_storage_sop_instance_uid: "1.2.3.4".to_owned(),
            transfer_syntax: "1.2.840.10008.1.2.1".to_owned(),
            implementation_class_uid: "1.2.345.6.7890".to_owned(),
            implementation_version_name: Some("DICOMKIT_01".to_owned()),
            source_application_entity_title: None,
            sending_application_entity_title: None,
            receiving_application_entity_title: None,
            private_information_creator_uid: None,
            private_information: None,
        }
    }

    #[test]
    fn read_meta_table() {
        let data = raw_meta(true);
        let (table, consumed) = FileMetaTable::read_at(&data, 128).unwrap();
        assert_eq!(table, expected_table());
        assert_eq!(consumed, 4 + 12 + 134);
        assert_eq!(&data[consumed..consumed + 2], &[0x08, 0x00]);
    }

    #[test]
    fn read_meta_table_without_group_length() {
        let data = raw_meta(false);
        let (table, consumed) = FileMetaTable::read_at(&data, 0).unwrap();
        assert_eq!(table, expected_table());
        assert_eq!(consumed, 4 + 134);
    }

    #[test]
    fn not_dicom() {
        let err = FileMetaTable::from_bytes(b"DIKM\x02\x00\x00\x00").unwrap_err();
        assert!(matches!(err, Error::NotDicom { .. }));
    }

    #[test]
    fn truncated_group() {
        let mut data = raw_meta(true);
        data.truncate(100);
        let err = FileMetaTable::from_bytes(&data).unwrap_err();
        assert!(
            matches!(err, Error::TruncatedGroup { declared: 134, .. }),
            "{:?}",
            err
        );
    }

    #[test]
    fn build_requires_uids() {
        let err = FileMetaTableBuilder::new()
            .media_storage_sop_instance_uid("1.2.3.4")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "MediaStorageSOPClassUID",
                ..
            }
        ));

        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "MediaStorageSOPInstanceUID",
                ..
            }
        ));
    }

    #[test]
    fn build_fills_in_implementation() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7\0")
            .media_storage_sop_instance_uid("2.25.1")
            .transfer_syntax("1.2.840.10008.1.2")
            .build()
            .unwrap();
        assert_eq!(table.media_storage_sop_class_uid, "1.2.840.10008.5.1.4.1.1.7");
        assert_eq!(table.implementation_class_uid, IMPLEMENTATION_CLASS_UID);
        assert_eq!(
            table.implementation_version_name.as_deref(),
            Some(IMPLEMENTATION_VERSION_NAME)
        );
    }

    #[test]
    fn write_and_read_back() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("1.2.3.45")
            .transfer_syntax("1.2.840.10008.1.2.2")
            .implementation_class_uid("1.2.345.6.7890")
            .source_application_entity_title("STORESCU")
            .private_information_creator_uid("1.2.3")
            .private_information(vec![1, 2, 3])
            .build()
            .unwrap();

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(&out[..4], b"DICM");
        // the recomputed group length agrees with the table
        let group_length = LittleEndian::read_u32(&out[12..16]);
        assert_eq!(group_length as usize, out.len() - 16);
        assert_eq!(group_length, table.information_group_length);

        let read = FileMetaTable::from_bytes(&out).unwrap();
        assert_eq!(read.private_information.as_deref(), Some(&[1, 2, 3, 0][..]));
        assert_eq!(
            read,
            FileMetaTable {
                private_information: Some(vec![1, 2, 3, 0]),
                ..table
            }
        );
    }

    #[test]
    fn foreign_elements_are_rejected() {
        let mut data = b"DICM".to_vec();
        element(&mut data, 0x0000, b"UL", &10u32.to_le_bytes());
        // (0008,0060) CS "OT" inside the declared group
        data.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'O', b'T']);
        let err = FileMetaTable::from_bytes(&data).unwrap_err();
        assert!(matches!(err, Error::UnexpectedTag { .. }), "{:?}", err);
    }
}
