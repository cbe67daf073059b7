//! The in-memory directory tree.
//!
//! Records are kept in an arena and refer to their children by [`RecordId`].
//! The root records are always patient records.

use crate::record::{DirectoryRecord, RecordId, RecordType};
use dicomkit_core::Tag;
use dicomkit_dictionary_std::tags;
use dicomkit_object::InMemDicomObject;
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::collections::HashSet;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// The profile recorded in directories unless another one is given.
pub const DEFAULT_PROFILE: &str = "STD-GEN-CD";

/// An inconsistency found while validating a directory.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ValidationError {
    #[snafu(display("Record {} is not part of the directory", id.index()))]
    UnknownRecord { id: RecordId, backtrace: Backtrace },
    #[snafu(display("Record {} is referenced more than once", id.index()))]
    SharedRecord { id: RecordId, backtrace: Backtrace },
    #[snafu(display("{} record found at level {}", record_type, level))]
    WrongLevel {
        record_type: RecordType,
        level: u8,
        backtrace: Backtrace,
    },
    #[snafu(display("{} record is missing {}", record_type, tag))]
    MissingAttribute {
        record_type: RecordType,
        tag: Tag,
        backtrace: Backtrace,
    },
    #[snafu(display("Duplicate {} record `{}`", record_type, key))]
    DuplicateKey {
        record_type: RecordType,
        key: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Referenced file '{}' does not exist", path.display()))]
    MissingFile { path: PathBuf, backtrace: Backtrace },
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// Counts of the records in a directory, per level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Statistics {
    pub patients: usize,
    pub studies: usize,
    pub series: usize,
    /// the number of leaf records, of any type
    pub images: usize,
}

/// A media directory: file-set identification and a tree of records.
#[derive(Debug, Clone)]
pub struct DicomDirectory {
    file_set_id: String,
    file_set_descriptor_file_id: Option<Vec<String>>,
    descriptor_file_charset: Option<String>,
    profile: String,
    consistent: bool,
    records: Vec<DirectoryRecord>,
    roots: Vec<RecordId>,
}

impl Default for DicomDirectory {
    fn default() -> Self {
        DicomDirectory {
            file_set_id: String::new(),
            file_set_descriptor_file_id: None,
            descriptor_file_charset: None,
            profile: DEFAULT_PROFILE.to_string(),
            consistent: true,
            records: Vec::new(),
            roots: Vec::new(),
        }
    }
}

impl DicomDirectory {
    /// Create an empty directory with the given file-set ID.
    pub fn new(file_set_id: impl Into<String>) -> Self {
        DicomDirectory {
            file_set_id: file_set_id.into(),
            ..Default::default()
        }
    }

    pub fn file_set_id(&self) -> &str {
        &self.file_set_id
    }

    pub fn file_set_descriptor_file_id(&self) -> Option<&[String]> {
        self.file_set_descriptor_file_id.as_deref()
    }

    pub fn descriptor_file_charset(&self) -> Option<&str> {
        self.descriptor_file_charset.as_deref()
    }

    /// The application profile of the file-set.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Whether the file-set is free of known inconsistencies,
    /// such as the same instance being referenced twice.
    pub fn is_consistent(&self) -> bool {
        self.consistent
    }

    /// The patient records at the root of the tree.
    pub fn roots(&self) -> &[RecordId] {
        &self.roots
    }

    pub fn record(&self, id: RecordId) -> Option<&DirectoryRecord> {
        self.records.get(id.0)
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// All records reachable from the roots, in depth-first pre-order,
    /// paired with their identifiers.
    pub fn walk(&self) -> Vec<(RecordId, &DirectoryRecord)> {
        let mut out = Vec::with_capacity(self.records.len());
        let mut stack: Vec<RecordId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(record) = self.records.get(id.0) {
                out.push((id, record));
                stack.extend(record.children.iter().rev().copied());
            }
        }
        out
    }

    /// All records reachable from the roots, in depth-first pre-order.
    pub fn all_records(&self) -> Vec<&DirectoryRecord> {
        self.walk().into_iter().map(|(_, r)| r).collect()
    }

    /// Count the records at each level of the tree.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics::default();
        for record in self.all_records() {
            match record.record_type.level() {
                1 => stats.patients += 1,
                2 => stats.studies += 1,
                3 => stats.series += 1,
                _ => stats.images += 1,
            }
        }
        stats
    }

    /// Check the structure of the directory.
    ///
    /// Every record must sit at the level of its type,
    /// carry its key attribute and be unique among its siblings.
    /// Leaf records must reference a file and a distinct SOP instance.
    /// When `file_root` is given,
    /// referenced files must also exist under it.
    pub fn validate(&self, file_root: Option<&Path>) -> Result<()> {
        let mut seen = HashSet::new();
        let mut instances = HashSet::new();
        self.validate_level(&self.roots, 1, &mut seen, &mut instances, file_root)
    }

    fn validate_level(
        &self,
        ids: &[RecordId],
        level: u8,
        seen: &mut HashSet<RecordId>,
        instances: &mut HashSet<String>,
        file_root: Option<&Path>,
    ) -> Result<()> {
        let mut keys = HashSet::new();
        for &id in ids {
            let record = self.records.get(id.0).context(UnknownRecordSnafu { id })?;
            ensure!(seen.insert(id), SharedRecordSnafu { id });
            let record_type = record.record_type;
            ensure!(
                record_type.level() == level,
                WrongLevelSnafu { record_type, level }
            );

            if let Some(tag) = record_type.key() {
                ensure!(
                    record.attributes.contains(tag),
                    MissingAttributeSnafu { record_type, tag }
                );
                let key = record.key().unwrap_or_default();
                ensure!(
                    tag == tags::PATIENT_ID || !key.is_empty(),
                    MissingAttributeSnafu { record_type, tag }
                );
                if record_type == RecordType::Series {
                    ensure!(
                        record.attributes.contains(tags::MODALITY),
                        MissingAttributeSnafu {
                            record_type,
                            tag: tags::MODALITY,
                        }
                    );
                }
                ensure!(keys.insert(key.clone()), DuplicateKeySnafu { record_type, key });
                self.validate_level(&record.children, level + 1, seen, instances, file_root)?;
            } else {
                ensure!(
                    record.children.is_empty(),
                    WrongLevelSnafu {
                        record_type,
                        level: level + 1,
                    }
                );
                let components = record.referenced_file_id().context(MissingAttributeSnafu {
                    record_type,
                    tag: tags::REFERENCED_FILE_ID,
                })?;
                let uid = record
                    .referenced_sop_instance_uid()
                    .context(MissingAttributeSnafu {
                        record_type,
                        tag: tags::REFERENCED_SOP_INSTANCE_UID_IN_FILE,
                    })?;
                ensure!(
                    instances.insert(uid.clone()),
                    DuplicateKeySnafu {
                        record_type,
                        key: uid
                    }
                );
                if let Some(root) = file_root {
                    let path = components
                        .iter()
                        .fold(root.to_path_buf(), |path, c| path.join(c));
                    ensure!(path.is_file(), MissingFileSnafu { path });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn set_file_set_id(&mut self, id: String) {
        self.file_set_id = id;
    }

    pub(crate) fn set_file_set_descriptor_file_id(&mut self, id: Option<Vec<String>>) {
        self.file_set_descriptor_file_id = id;
    }

    pub(crate) fn set_descriptor_file_charset(&mut self, charset: Option<String>) {
        self.descriptor_file_charset = charset;
    }

    pub(crate) fn set_profile(&mut self, profile: String) {
        self.profile = profile;
    }

    pub(crate) fn set_consistent(&mut self, consistent: bool) {
        self.consistent = consistent;
    }

    /// Add a record as the last child of `parent`,
    /// or as the last root record.
    pub(crate) fn push_record(
        &mut self,
        parent: Option<RecordId>,
        record_type: RecordType,
        attributes: InMemDicomObject,
    ) -> RecordId {
        let id = RecordId(self.records.len());
        self.records.push(DirectoryRecord {
            record_type,
            attributes,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.records[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Find the child of `parent` (or the root record)
    /// of the given type and key.
    pub(crate) fn find_child(
        &self,
        parent: Option<RecordId>,
        record_type: RecordType,
        key: &str,
    ) -> Option<RecordId> {
        let siblings = match parent {
            Some(parent) => &self.records.get(parent.0)?.children,
            None => &self.roots,
        };
        siblings.iter().copied().find(|id| {
            let record = &self.records[id.0];
            record.record_type == record_type && record.key().as_deref() == Some(key)
        })
    }

    fn same_subtree(&self, a: &[RecordId], other: &DicomDirectory, b: &[RecordId]) -> bool {
        a.len() == b.len()
            && a.iter().zip(b).all(|(x, y)| {
                match (self.records.get(x.0), other.records.get(y.0)) {
                    (Some(x), Some(y)) => {
                        x.record_type == y.record_type
                            && x.attributes == y.attributes
                            && self.same_subtree(&x.children, other, &y.children)
                    }
                    _ => false,
                }
            })
    }
}

impl Index<RecordId> for DicomDirectory {
    type Output = DirectoryRecord;

    fn index(&self, id: RecordId) -> &DirectoryRecord {
        &self.records[id.0]
    }
}

/// Directories are equal when their file-set identification
/// and record trees are equal,
/// regardless of how the records are laid out in memory.
impl PartialEq for DicomDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.file_set_id == other.file_set_id
            && self.file_set_descriptor_file_id == other.file_set_descriptor_file_id
            && self.descriptor_file_charset == other.descriptor_file_charset
            && self.profile == other.profile
            && self.consistent == other.consistent
            && self.same_subtree(&self.roots, other, &other.roots)
    }
}
