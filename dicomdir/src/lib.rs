//! Media directories (DICOMDIR files) for DICOM file-sets.
//!
//! A directory organizes the instances of a file-set
//! in a tree of patient, study and series records,
//! with one leaf record per referenced file.
//!
//! - [`DicomDirBuilder`] collects instances into a [`DicomDirectory`];
//! - [`DicomDirWriter`] encodes a directory as a DICOMDIR file;
//! - [`read_dicomdir`] and [`open_dicomdir`] decode it back.
//!
//! # Example
//!
//! ```no_run
//! # use dicomkit_dir::{open_dicomdir, DicomDirBuilder, DicomDirWriter};
//! # use dicomkit_object::open_file;
//! let mut builder = DicomDirBuilder::new().file_set_id("EXAM");
//! for name in ["IMG0001", "IMG0002"] {
//!     let file = open_file(format!("media/DICOM/{}", name))?;
//!     builder.add_file(&file, format!("DICOM/{}", name))?;
//! }
//! DicomDirWriter::new().write_to_file(&builder.build(), "media/DICOMDIR")?;
//!
//! let dicomdir = open_dicomdir("media/DICOMDIR")?;
//! println!("{:?}", dicomdir.statistics());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod directory;
pub mod read;
pub mod record;
pub mod write;

pub use crate::builder::DicomDirBuilder;
pub use crate::directory::{DicomDirectory, Statistics, ValidationError, DEFAULT_PROFILE};
pub use crate::read::{open_dicomdir, read_dicomdir};
pub use crate::record::{DirectoryRecord, RecordId, RecordType};
pub use crate::write::DicomDirWriter;
