//! Decoding DICOMDIR files into directory trees.
//!
//! The records are recovered by following the offsets
//! stored in the file, starting from the root directory entity.
//! Offsets which do not land on a record item,
//! records reached twice and records at the wrong level
//! make the directory invalid.

use crate::directory::{DicomDirectory, DEFAULT_PROFILE};
use crate::record::{RecordId, RecordType};
use crate::write::{profile_tag, PRIVATE_CREATOR, PRIVATE_GROUP};
use dicomkit_core::{Header, Tag, VR};
use dicomkit_dictionary_std::{tags, uids};
use dicomkit_encoding::{TransferSyntaxIndex, TransferSyntaxRegistry};
use dicomkit_object::{
    read, DataSetReader, InMemDicomObject, InMemElement, OpenFileOptions, ReadError, ReadOptions,
    StandardDataDictionary,
};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// An error which may occur when reading a directory.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not open directory file '{}'", filename.display()))]
    OpenDirectory {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The data is not a readable DICOM file.
    #[snafu(display("Could not read DICOM file"))]
    ReadFile {
        #[snafu(backtrace)]
        source: ReadError,
    },
    /// The file is a DICOM file, but not a media directory.
    #[snafu(display("Not a valid directory file: {}", reason))]
    NotADirectory { reason: String, backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Could not read directory data set"))]
    ReadDirectory {
        #[snafu(backtrace)]
        source: read::Error,
    },
    /// The directory records are not linked into a proper tree.
    #[snafu(display("Not a valid directory file: {}", reason))]
    InvalidDirectory { reason: String, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Read a directory from the file at the given path.
pub fn open_dicomdir(path: impl AsRef<Path>) -> Result<DicomDirectory> {
    let path = path.as_ref();
    let data = std::fs::read(path).context(OpenDirectorySnafu { filename: path })?;
    read_dicomdir(&data)
}

/// Read a directory from the full contents of a DICOMDIR file.
pub fn read_dicomdir(data: &[u8]) -> Result<DicomDirectory> {
    let (meta, body) = OpenFileOptions::new()
        .read_file_meta(data)
        .context(ReadFileSnafu)?;
    ensure!(
        meta.media_storage_sop_class_uid == uids::MEDIA_STORAGE_DIRECTORY_STORAGE,
        NotADirectorySnafu {
            reason: format!(
                "media storage SOP class is `{}`",
                meta.media_storage_sop_class_uid
            ),
        }
    );

    let registry = TransferSyntaxRegistry;
    let ts = registry
        .get(&meta.transfer_syntax)
        .with_context(|| UnsupportedTransferSyntaxSnafu {
            uid: meta.transfer_syntax.clone(),
        })?;
    debug!("Reading directory in {}", ts.name());

    let options = ReadOptions::new().base_offset(body as u64);
    let mut reader =
        DataSetReader::with_dict(&data[body..], ts, StandardDataDictionary, options);
    let header = reader
        .read_until(tags::DIRECTORY_RECORD_SEQUENCE)
        .context(ReadDirectorySnafu)?;
    let items = match reader.read_sequence_items().context(ReadDirectorySnafu)? {
        Some((tag, items)) if tag == tags::DIRECTORY_RECORD_SEQUENCE => items,
        _ => {
            return NotADirectorySnafu {
                reason: "no directory record sequence",
            }
            .fail()
        }
    };
    let trailer = reader.read_dataset().context(ReadDirectorySnafu)?;

    let mut dir = DicomDirectory::new(
        header
            .get_str(tags::FILE_SET_ID)
            .map(|s| s.into_owned())
            .unwrap_or_default(),
    );
    dir.set_file_set_descriptor_file_id(header.get_strs(tags::FILE_SET_DESCRIPTOR_FILE_ID).ok());
    dir.set_descriptor_file_charset(
        header
            .get_str(tags::SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE)
            .ok()
            .map(|s| s.into_owned()),
    );
    dir.set_profile(profile(&trailer).unwrap_or_else(|| DEFAULT_PROFILE.to_string()));
    dir.set_consistent(header.get_int::<u16>(tags::FILE_SET_CONSISTENCY_FLAG).unwrap_or(0) == 0);

    let root = offset(
        &header,
        tags::OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY,
    )?;
    let mut linker = Linker {
        positions: items
            .iter()
            .enumerate()
            .map(|(index, (position, _))| (*position, index))
            .collect(),
        items: &items,
        visited: HashSet::new(),
        dir,
    };
    linker.read_level(root, None, 1)?;

    let unreachable = items.len() - linker.visited.len();
    if unreachable > 0 {
        warn!("{} directory records are not linked to the tree", unreachable);
    }
    Ok(linker.dir)
}

/// Follows the record offsets, adding the records to the directory.
struct Linker<'a> {
    /// record item index by absolute position
    positions: HashMap<u64, usize>,
    items: &'a [(u64, InMemDicomObject)],
    visited: HashSet<usize>,
    dir: DicomDirectory,
}

impl Linker<'_> {
    /// Read the chain of records starting at `offset`,
    /// all at the given level.
    fn read_level(&mut self, mut offset: u32, parent: Option<RecordId>, level: u8) -> Result<()> {
        while offset != 0 {
            let index = *self
                .positions
                .get(&u64::from(offset))
                .with_context(|| InvalidDirectorySnafu {
                    reason: format!("offset {} does not point to a directory record", offset),
                })?;
            ensure!(
                self.visited.insert(index),
                InvalidDirectorySnafu {
                    reason: format!("directory record at offset {} is linked more than once", offset),
                }
            );
            let items = self.items;
            let item = &items[index].1;
            let next = offset_in_record(item, tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, offset)?;
            let lower = offset_in_record(
                item,
                tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY,
                offset,
            )?;

            if item.get_int::<u16>(tags::RECORD_IN_USE_FLAG).ok() == Some(0) {
                trace!("Skipping inactive record at offset {}", offset);
                offset = next;
                continue;
            }

            let code = item
                .get_str(tags::DIRECTORY_RECORD_TYPE)
                .ok()
                .with_context(|| InvalidDirectorySnafu {
                    reason: format!("directory record at offset {} has no record type", offset),
                })?;
            let record_type =
                RecordType::from_code(&code).with_context(|| InvalidDirectorySnafu {
                    reason: format!("unsupported directory record type `{}`", code),
                })?;
            ensure!(
                record_type.level() == level,
                InvalidDirectorySnafu {
                    reason: format!("{} record at level {}", record_type, level),
                }
            );

            let mut attributes = item.clone();
            for tag in [
                tags::OFFSET_OF_THE_NEXT_DIRECTORY_RECORD,
                tags::RECORD_IN_USE_FLAG,
                tags::OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY,
                tags::DIRECTORY_RECORD_TYPE,
            ] {
                attributes.remove_element(tag);
            }
            let id = self.dir.push_record(parent, record_type, attributes);

            if lower != 0 {
                ensure!(
                    !record_type.is_leaf(),
                    InvalidDirectorySnafu {
                        reason: format!("{} record has lower level records", record_type),
                    }
                );
                self.read_level(lower, Some(id), level + 1)?;
            }
            offset = next;
        }
        Ok(())
    }
}

fn offset(obj: &InMemDicomObject, tag: Tag) -> Result<u32> {
    obj.get_int::<u32>(tag)
        .ok()
        .with_context(|| InvalidDirectorySnafu {
            reason: format!("missing or invalid {}", tag),
        })
}

fn offset_in_record(item: &InMemDicomObject, tag: Tag, at: u32) -> Result<u32> {
    item.get_int::<u32>(tag)
        .ok()
        .with_context(|| InvalidDirectorySnafu {
            reason: format!("directory record at offset {} has no valid {}", at, tag),
        })
}

/// Look up the application profile in the private block of this library.
fn profile(obj: &InMemDicomObject) -> Option<String> {
    let creator = obj.iter().find(|e| {
        let tag = e.tag();
        tag.group() == PRIVATE_GROUP
            && (0x10..=0xFF).contains(&tag.element())
            && private_text(e).as_deref() == Some(PRIVATE_CREATOR)
    })?;
    obj.get(profile_tag(creator.tag().element()))
        .and_then(private_text)
}

/// The text of a private element,
/// which is only known as raw bytes in implicit VR.
fn private_text(elt: &InMemElement) -> Option<String> {
    if elt.vr() == VR::UN {
        let bytes = elt.to_bytes().ok()?;
        let text = String::from_utf8_lossy(&bytes);
        Some(text.trim_matches(|c| c == ' ' || c == '\0').to_string())
    } else {
        elt.to_str().ok().map(|s| s.into_owned())
    }
}
