//! Incremental construction of directories from DICOM instances.

use crate::directory::{DicomDirectory, Statistics};
use crate::record::{RecordId, RecordType};
use dicomkit_core::{Tag, VR};
use dicomkit_dictionary_std::tags;
use dicomkit_object::{DefaultDicomObject, FileMetaTable, InMemDicomObject};
use snafu::{Backtrace, OptionExt, Snafu};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace, warn};

/// An error which may occur when adding an instance to a directory.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The instance lacks an identifier needed to place it in the tree.
    #[snafu(display("Missing required attribute {}", tag))]
    MissingRequiredAttribute { tag: Tag, backtrace: Backtrace },
    /// The path cannot be expressed as a referenced file ID.
    #[snafu(display("Invalid referenced file path '{}'", path.display()))]
    InvalidFileId { path: PathBuf, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A builder of media directories.
///
/// Instances are added one at a time,
/// creating the patient, study and series records they need
/// and a leaf record referencing the instance's file.
/// Each call to [`build`](DicomDirBuilder::build) takes a snapshot,
/// so the builder can keep growing afterwards.
///
/// # Example
///
/// ```no_run
/// # use dicomkit_dir::DicomDirBuilder;
/// # use dicomkit_object::open_file;
/// let file = open_file("DICOM/IMG0001")?;
/// let mut builder = DicomDirBuilder::new().file_set_id("STUDY1");
/// builder.add_file(&file, "DICOM/IMG0001")?;
/// let dicomdir = builder.build();
/// assert_eq!(dicomdir.statistics().images, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct DicomDirBuilder {
    directory: DicomDirectory,
    /// SOP instance UIDs of all leaf records
    instances: HashSet<String>,
}

/// The identifiers placing an instance in the tree.
struct Placement {
    patient_id: String,
    study_uid: String,
    series_uid: String,
    sop_class_uid: Option<String>,
    sop_instance_uid: String,
    file_id: Vec<String>,
}

impl DicomDirBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the file-set ID.
    pub fn file_set_id(mut self, file_set_id: impl Into<String>) -> Self {
        self.directory.set_file_set_id(file_set_id.into());
        self
    }

    /// Define the application profile recorded in the directory.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.directory.set_profile(profile.into());
        self
    }

    /// Define the path components of the file-set descriptor file.
    pub fn file_set_descriptor_file_id<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components = components.into_iter().map(Into::into).collect();
        self.directory
            .set_file_set_descriptor_file_id(Some(components));
        self
    }

    /// Define the character set of the file-set descriptor file.
    pub fn descriptor_file_charset(mut self, charset: impl Into<String>) -> Self {
        self.directory
            .set_descriptor_file_charset(Some(charset.into()));
        self
    }

    /// Add a DICOM file stored at `path`,
    /// relative to the directory file.
    ///
    /// The file meta table provides the referenced transfer syntax,
    /// as well as the SOP class and instance
    /// if the data set does not declare them.
    pub fn add_file(
        &mut self,
        file: &DefaultDicomObject,
        path: impl AsRef<Path>,
    ) -> Result<RecordId> {
        self.add(file, Some(file.meta()), path.as_ref())
    }

    /// Add a data set without a file meta table,
    /// stored at `path` relative to the directory file.
    pub fn add_dataset(
        &mut self,
        obj: &InMemDicomObject,
        path: impl AsRef<Path>,
    ) -> Result<RecordId> {
        self.add(obj, None, path.as_ref())
    }

    fn add(
        &mut self,
        obj: &InMemDicomObject,
        meta: Option<&FileMetaTable>,
        path: &Path,
    ) -> Result<RecordId> {
        // everything is checked before the tree is touched
        let placement = Placement::of(obj, meta, path)?;
        let dir = &mut self.directory;

        let patient = match dir.find_child(None, RecordType::Patient, &placement.patient_id) {
            Some(id) => id,
            None => {
                let mut attributes = copy_attributes(obj, RecordType::Patient);
                if !attributes.contains(tags::PATIENT_ID) {
                    attributes.put_str(tags::PATIENT_ID, VR::LO, "");
                }
                if !attributes.contains(tags::PATIENT_NAME) {
                    attributes.put_str(tags::PATIENT_NAME, VR::PN, "");
                }
                debug!("New patient record `{}`", placement.patient_id);
                dir.push_record(None, RecordType::Patient, attributes)
            }
        };

        let study = match dir.find_child(Some(patient), RecordType::Study, &placement.study_uid) {
            Some(id) => id,
            None => {
                debug!("New study record {}", placement.study_uid);
                let attributes = copy_attributes(obj, RecordType::Study);
                dir.push_record(Some(patient), RecordType::Study, attributes)
            }
        };

        let series = match dir.find_child(Some(study), RecordType::Series, &placement.series_uid)
        {
            Some(id) => id,
            None => {
                debug!("New series record {}", placement.series_uid);
                let mut attributes = copy_attributes(obj, RecordType::Series);
                if !attributes.contains(tags::MODALITY) {
                    attributes.put_str(tags::MODALITY, VR::CS, "");
                }
                dir.push_record(Some(study), RecordType::Series, attributes)
            }
        };

        let record_type = placement
            .sop_class_uid
            .as_deref()
            .map(RecordType::for_sop_class)
            .unwrap_or(RecordType::Image);
        let mut attributes = copy_attributes(obj, record_type);
        attributes.put_strs(tags::REFERENCED_FILE_ID, VR::CS, placement.file_id);
        if let Some(uid) = &placement.sop_class_uid {
            attributes.put_str(tags::REFERENCED_SOP_CLASS_UID_IN_FILE, VR::UI, uid);
        }
        attributes.put_str(
            tags::REFERENCED_SOP_INSTANCE_UID_IN_FILE,
            VR::UI,
            &placement.sop_instance_uid,
        );
        if let Some(meta) = meta {
            attributes.put_str(
                tags::REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE,
                VR::UI,
                &meta.transfer_syntax,
            );
        }
        trace!(
            "New {} record for {} at '{}'",
            record_type,
            placement.sop_instance_uid,
            path.display()
        );
        let id = dir.push_record(Some(series), record_type, attributes);
        self.track_instance(placement.sop_instance_uid);
        Ok(id)
    }

    /// Record a referenced instance,
    /// marking the file-set as inconsistent if it was already referenced.
    fn track_instance(&mut self, uid: String) {
        if !self.instances.insert(uid) {
            warn!("Instance referenced more than once, file-set is inconsistent");
            self.directory.set_consistent(false);
        }
    }

    /// Merge the records of another directory into this one.
    ///
    /// Patients, studies and series with the same key are shared,
    /// leaf records are appended.
    pub fn merge(&mut self, other: &DicomDirectory) {
        for &root in other.roots() {
            self.merge_record(None, other, root);
        }
        if !other.is_consistent() {
            self.directory.set_consistent(false);
        }
    }

    fn merge_record(&mut self, parent: Option<RecordId>, other: &DicomDirectory, id: RecordId) {
        let Some(record) = other.record(id) else {
            return;
        };
        let record_type = record.record_type();
        let existing = record
            .key()
            .and_then(|key| self.directory.find_child(parent, record_type, &key));
        let target = match existing {
            Some(target) => target,
            None => {
                self.directory
                    .push_record(parent, record_type, record.attributes().clone())
            }
        };
        if let Some(uid) = record.referenced_sop_instance_uid() {
            self.track_instance(uid);
        }
        for &child in record.children() {
            self.merge_record(Some(target), other, child);
        }
    }

    /// Count the records added so far.
    pub fn statistics(&self) -> Statistics {
        self.directory.statistics()
    }

    /// Take a snapshot of the directory built so far.
    pub fn build(&self) -> DicomDirectory {
        self.directory.clone()
    }
}

impl Placement {
    fn of(obj: &InMemDicomObject, meta: Option<&FileMetaTable>, path: &Path) -> Result<Self> {
        let text = |tag: Tag| {
            obj.get_str(tag)
                .ok()
                .map(|s| s.into_owned())
                .filter(|s| !s.is_empty())
        };
        let from_meta = |value: Option<&String>| value.filter(|s| !s.is_empty()).cloned();

        let study_uid = text(tags::STUDY_INSTANCE_UID).context(MissingRequiredAttributeSnafu {
            tag: tags::STUDY_INSTANCE_UID,
        })?;
        let series_uid = text(tags::SERIES_INSTANCE_UID).context(MissingRequiredAttributeSnafu {
            tag: tags::SERIES_INSTANCE_UID,
        })?;
        let sop_instance_uid = text(tags::SOP_INSTANCE_UID)
            .or_else(|| from_meta(meta.map(|m| &m.media_storage_sop_instance_uid)))
            .context(MissingRequiredAttributeSnafu {
                tag: tags::SOP_INSTANCE_UID,
            })?;
        let sop_class_uid =
            text(tags::SOP_CLASS_UID).or_else(|| from_meta(meta.map(|m| &m.media_storage_sop_class_uid)));

        Ok(Placement {
            patient_id: text(tags::PATIENT_ID).unwrap_or_default(),
            study_uid,
            series_uid,
            sop_class_uid,
            sop_instance_uid,
            file_id: file_id(path)?,
        })
    }
}

/// Split a relative path into referenced file ID components.
fn file_id(path: &Path) -> Result<Vec<String>> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .context(InvalidFileIdSnafu { path })?;
                components.push(part.to_string());
            }
            Component::CurDir => {}
            _ => return InvalidFileIdSnafu { path }.fail(),
        }
    }
    if components.is_empty() {
        return InvalidFileIdSnafu { path }.fail();
    }
    Ok(components)
}

/// Copy the attributes kept in records of the given type.
fn copy_attributes(obj: &InMemDicomObject, record_type: RecordType) -> InMemDicomObject {
    InMemDicomObject::from_element_iter(
        record_type
            .attributes()
            .iter()
            .filter_map(|&tag| obj.get(tag).cloned()),
    )
}
