//! Encoding directories as DICOMDIR files.
//!
//! Directory records refer to each other by the byte offset
//! of their item within the file,
//! so the file is laid out twice:
//! once to measure where each record item will land,
//! and once more with the offsets filled in.

use crate::directory::DicomDirectory;
use crate::record::{DirectoryRecord, RecordId};
use dicomkit_core::{Tag, VR};
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_encoding::{TransferSyntax, TransferSyntaxIndex, TransferSyntaxRegistry};
use dicomkit_object::{
    meta, new_uid, write, DataSetWriter, FileMetaTableBuilder, InMemDicomObject, SequenceLength,
    WriteError, WriteOptions,
};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The private creator of the elements recording the application profile.
pub const PRIVATE_CREATOR: &str = "DICOMKIT DIRECTORY";
/// The group of the private profile elements.
pub(crate) const PRIVATE_GROUP: u16 = 0x0009;
/// The private block reserved on writing.
const PRIVATE_BLOCK: u16 = 0x10;

/// Length of an item header.
const ITEM_HEADER_LENGTH: u64 = 8;
/// Preamble length of a DICOM file.
const PREAMBLE_LENGTH: u64 = 128;

/// An error which may occur when writing a directory.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not build the file meta table"))]
    BuildMeta {
        #[snafu(backtrace)]
        source: meta::Error,
    },
    #[snafu(display("Could not measure directory records"))]
    MeasureRecords {
        #[snafu(backtrace)]
        source: write::Error,
    },
    #[snafu(display("Could not encode the directory file"))]
    EncodeFile {
        #[snafu(backtrace)]
        source: WriteError,
    },
    #[snafu(display("Directory record offset {} does not fit in 32 bits", offset))]
    OffsetOverflow { offset: u64, backtrace: Backtrace },
    #[snafu(display("Could not write directory file '{}'", filename.display()))]
    WriteFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A writer of DICOMDIR files.
///
/// Directories are written in Explicit VR Little Endian by default.
#[derive(Debug, Clone)]
pub struct DicomDirWriter {
    transfer_syntax: String,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
}

impl Default for DicomDirWriter {
    fn default() -> Self {
        DicomDirWriter {
            transfer_syntax: uids::EXPLICIT_VR_LITTLE_ENDIAN.to_string(),
            implementation_class_uid: None,
            implementation_version_name: None,
        }
    }
}

impl DicomDirWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transfer syntax of the directory file.
    pub fn transfer_syntax(mut self, uid: impl Into<String>) -> Self {
        self.transfer_syntax = uid.into();
        self
    }

    /// Record a different implementation class UID in the file meta group.
    pub fn implementation_class_uid(mut self, uid: impl Into<String>) -> Self {
        self.implementation_class_uid = Some(uid.into());
        self
    }

    /// Record a different implementation version name in the file meta group.
    pub fn implementation_version_name(mut self, name: impl Into<String>) -> Self {
        self.implementation_version_name = Some(name.into());
        self
    }

    /// Write the directory to a file.
    pub fn write_to_file(&self, dir: &DicomDirectory, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.write_to_vec(dir)?;
        std::fs::write(path, bytes).context(WriteFileSnafu { filename: path })
    }

    /// Encode the directory as the full contents of a DICOMDIR file.
    pub fn write_to_vec(&self, dir: &DicomDirectory) -> Result<Vec<u8>> {
        let registry = TransferSyntaxRegistry;
        let ts = registry
            .get(&self.transfer_syntax)
            .with_context(|| UnsupportedTransferSyntaxSnafu {
                uid: self.transfer_syntax.clone(),
            })?;

        let mut builder = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::MEDIA_STORAGE_DIRECTORY_STORAGE)
            .media_storage_sop_instance_uid(new_uid())
            .transfer_syntax(ts.uid());
        if let Some(uid) = &self.implementation_class_uid {
            builder = builder.implementation_class_uid(uid.as_str());
        }
        if let Some(name) = &self.implementation_version_name {
            builder = builder.implementation_version_name(name.as_str());
        }
        let meta = builder.build().context(BuildMetaSnafu)?;
        let mut meta_bytes = Vec::new();
        meta.write_to(&mut meta_bytes).context(BuildMetaSnafu)?;

        let records = dir.walk();
        debug!(
            "Writing directory of {} records in {}",
            records.len(),
            ts.name()
        );
        let layout = Layout::measure(
            dir,
            &records,
            ts,
            PREAMBLE_LENGTH + meta_bytes.len() as u64,
        )?;

        let items = records.iter().map(|&(id, record)| {
            record_item(record, layout.next_of(id), layout.lower_of(record))
        });
        let mut obj = file_set_header(dir, layout.first_root(dir), layout.last_root(dir));
        obj.put_sequence(tags::DIRECTORY_RECORD_SEQUENCE, items);
        put_profile(&mut obj, dir.profile());

        obj.with_exact_meta(meta)
            .write_to_vec_with(writer_options())
            .context(EncodeFileSnafu)
    }
}

fn writer_options() -> WriteOptions {
    WriteOptions::new().sequence_length(SequenceLength::Defined)
}

/// Where each record item lands in the file,
/// and which record follows each record on its level.
struct Layout {
    offsets: HashMap<RecordId, u32>,
    next: HashMap<RecordId, RecordId>,
}

impl Layout {
    fn measure(
        dir: &DicomDirectory,
        records: &[(RecordId, &DirectoryRecord)],
        ts: &TransferSyntax,
        data_set_start: u64,
    ) -> Result<Self> {
        let writer = DataSetWriter::with_options(ts, writer_options());
        let encoded_len = |obj: &InMemDicomObject| -> Result<u64> {
            Ok(writer.encode(obj).context(MeasureRecordsSnafu)?.len() as u64)
        };

        // offsets occupy 4 bytes whatever their value,
        // so placeholders measure the same as the final elements
        let header_len = encoded_len(&file_set_header(dir, 0, 0))?;
        let mut empty_sequence = InMemDicomObject::new_empty();
        empty_sequence.put_sequence(tags::DIRECTORY_RECORD_SEQUENCE, Vec::new());
        let sequence_header_len = encoded_len(&empty_sequence)?;

        let mut position = data_set_start + header_len + sequence_header_len;
        let mut offsets = HashMap::with_capacity(records.len());
        for &(id, record) in records {
            let offset = u32::try_from(position)
                .ok()
                .context(OffsetOverflowSnafu { offset: position })?;
            offsets.insert(id, offset);
            position += ITEM_HEADER_LENGTH + encoded_len(&record_item(record, 0, 0))?;
        }

        let mut next = HashMap::new();
        let mut link = |siblings: &[RecordId]| {
            for pair in siblings.windows(2) {
                next.insert(pair[0], pair[1]);
            }
        };
        link(dir.roots());
        for &(_, record) in records {
            link(record.children());
        }

        Ok(Layout { offsets, next })
    }

    fn offset(&self, id: Option<&RecordId>) -> u32 {
        id.and_then(|id| self.offsets.get(id))
            .copied()
            .unwrap_or(0)
    }

    fn next_of(&self, id: RecordId) -> u32 {
        self.offset(self.next.get(&id))
    }

    fn lower_of(&self, record: &DirectoryRecord) -> u32 {
        self.offset(record.children().first())
    }

    fn first_root(&self, dir: &DicomDirectory) -> u32 {
        self.offset(dir.roots().first())
    }

    fn last_root(&self, dir: &DicomDirectory) -> u32 {
        self.offset(dir.roots().last())
    }
}

/// The elements preceding the directory record sequence.
fn file_set_header(dir: &DicomDirectory, first: u32, last: u32) -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_str(tags::FILE_SET_ID, VR::CS, dir.file_set_id());
    if let Some(components) = dir.file_set_descriptor_file_id() {
        obj.put_strs(
            tags::FILE_SET_DESCRIPTOR_FILE_ID,
            VR::CS,
            components.iter().cloned(),
        );
    }
    if let Some(charset) = dir.descriptor_file_charset() {
        obj.put_str(
            tags::SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE,
            VR::CS,
            charset,
        );
    }
    obj.put_u32(
        tags::OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY,
        first,
    );
    obj.put_u32(
        tags::OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY,
        last,
    );
    let flag = if dir.is_consistent() { 0 } else { 0xFFFF };
    obj.put_u16(tags::FILE_SET_CONSISTENCY_FLAG, flag);
    obj
}

/// The item encoding a record, linked to the records at the given offsets.
fn record_item(record: &DirectoryRecord, next: u32, lower: u32) -> InMemDicomObject {
    let mut item = record.attributes().clone();
    item.put_u32(tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, next);
    item.put_u16(tags::RECORD_IN_USE_FLAG, 0xFFFF);
    item.put_u32(tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY, lower);
    item.put_str(
        tags::DIRECTORY_RECORD_TYPE,
        VR::CS,
        record.record_type().code(),
    );
    item
}

fn put_profile(obj: &mut InMemDicomObject, profile: &str) {
    obj.put_str(Tag(PRIVATE_GROUP, PRIVATE_BLOCK), VR::LO, PRIVATE_CREATOR);
    obj.put_str(profile_tag(PRIVATE_BLOCK), VR::LO, profile);
}

/// The tag of the profile element within a private block.
pub(crate) fn profile_tag(block: u16) -> Tag {
    Tag(PRIVATE_GROUP, (block << 8) | 0x10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;
    use dicomkit_object::from_bytes;

    #[test]
    fn empty_directory() {
        let dir = DicomDirectory::new("EMPTY");
        let bytes = DicomDirWriter::new().write_to_vec(&dir).unwrap();
        assert_eq!(&bytes[128..132], b"DICM");

        let file = from_bytes(&bytes).unwrap();
        assert_eq!(
            file.meta().media_storage_sop_class_uid,
            uids::MEDIA_STORAGE_DIRECTORY_STORAGE
        );
        assert_eq!(file.get_str(tags::FILE_SET_ID).unwrap(), "EMPTY");
        assert_eq!(
            file.get_int::<u32>(
                tags::OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY
            )
            .unwrap(),
            0
        );
        assert_eq!(
            file.get_sequence(tags::DIRECTORY_RECORD_SEQUENCE).map(|s| s.len()),
            Some(0)
        );
        assert_eq!(file.get_str(profile_tag(PRIVATE_BLOCK)).unwrap(), "STD-GEN-CD");
    }

    #[test]
    fn root_offset_points_at_first_item() {
        let mut dir = DicomDirectory::new("ONE");
        let mut attributes = InMemDicomObject::new_empty();
        attributes.put_str(tags::PATIENT_ID, VR::LO, "P1");
        dir.push_record(None, RecordType::Patient, attributes);

        let bytes = DicomDirWriter::new().write_to_vec(&dir).unwrap();
        let file = from_bytes(&bytes).unwrap();
        let first = file
            .get_int::<u32>(tags::OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY)
            .unwrap() as usize;
        // item tag (FFFE,E000) in little endian
        assert_eq!(&bytes[first..first + 4], &[0xFE, 0xFF, 0x00, 0xE0]);
        let last = file
            .get_int::<u32>(tags::OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY)
            .unwrap() as usize;
        assert_eq!(first, last);
    }

    #[test]
    fn unknown_transfer_syntax() {
        let dir = DicomDirectory::new("");
        let err = DicomDirWriter::new()
            .transfer_syntax("1.2.3.4")
            .write_to_vec(&dir)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransferSyntax { .. }));
    }
}
