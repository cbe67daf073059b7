//! Reading and writing of complete DICOM files:
//! preamble, magic code, file meta group and main data set.
use crate::mem::InMemDicomObject;
use crate::meta::{self, FileMetaTable, FileMetaTableBuilder, DICM_MAGIC_CODE};
use crate::read::{DataSetReader, ReadOptions};
use crate::write::{DataSetWriter, WriteOptions};
use crate::{
    DefaultDicomObject, FileDicomObject, MissingMetaElementSnafu, NotDicomSnafu, OpenFileSnafu,
    ParseMetaDataSetSnafu, PrintDataSetSnafu, PrintMetaDataSetSnafu, ReadDataSetSnafu,
    ReadError, ReadUnsupportedTransferSyntaxSnafu, Result, WriteBytesSnafu, WriteError,
    WriteFileSnafu, WriteUnsupportedTransferSyntaxSnafu,
};
use dicomkit_core::dictionary::DataDictionary;
use dicomkit_dictionary_std::StandardDataDictionary;
use dicomkit_encoding::transfer_syntax::TransferSyntaxIndex;
use dicomkit_encoding::{TransferSyntax, TransferSyntaxRegistry};
use snafu::{ensure, OptionExt, ResultExt};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// The length of the file preamble.
pub const PREAMBLE_LENGTH: usize = 128;

/// Create a DICOM object by reading a whole DICOM file from memory.
///
/// The preamble is detected automatically.
pub fn from_bytes(data: &[u8]) -> Result<DefaultDicomObject> {
    OpenFileOptions::new().from_bytes(data)
}

/// Create a DICOM object by reading from a file.
///
/// This function assumes the standard file encoding structure: 128-byte
/// preamble, file meta group, and the rest of the data set.
pub fn open_file<P>(path: P) -> Result<DefaultDicomObject>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// A builder type for opening a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dicomkit_object::{OpenFileOptions, ReadOptions, ReadPreamble};
/// # use dicomkit_encoding::decode::primitive_value::TextPadding;
/// let file = OpenFileOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .read_options(ReadOptions::new().text_padding(TextPadding::Preserve))
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions<D = StandardDataDictionary, T = TransferSyntaxRegistry> {
    data_dictionary: D,
    ts_index: T,
    read_preamble: ReadPreamble,
    read_options: ReadOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }
}

impl<D, T> OpenFileOptions<D, T> {
    /// Set whether to expect the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the options for reading the main data set.
    ///
    /// The base offset is always replaced
    /// by the position of the data set in the file.
    pub fn read_options(mut self, options: ReadOptions) -> Self {
        self.read_options = options;
        self
    }

    /// Set the transfer syntax index to use when reading the file.
    pub fn transfer_syntax_index<Tr>(self, ts_index: Tr) -> OpenFileOptions<D, Tr>
    where
        Tr: TransferSyntaxIndex,
    {
        OpenFileOptions {
            data_dictionary: self.data_dictionary,
            ts_index,
            read_preamble: self.read_preamble,
            read_options: self.read_options,
        }
    }

    /// Set the data element dictionary to use when reading the file.
    pub fn dictionary<Di>(self, dict: Di) -> OpenFileOptions<Di, T>
    where
        Di: DataDictionary,
        Di: Clone,
    {
        OpenFileOptions {
            data_dictionary: dict,
            ts_index: self.ts_index,
            read_preamble: self.read_preamble,
            read_options: self.read_options,
        }
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DefaultDicomObject>
    where
        P: AsRef<Path>,
        D: DataDictionary,
        D: Clone,
        T: TransferSyntaxIndex,
    {
        let path = path.as_ref();
        let data = std::fs::read(path).context(OpenFileSnafu { filename: path })?;
        self.from_bytes(&data)
    }

    /// Read the preamble and file meta group of a DICOM file,
    /// returning the meta table
    /// and the position at which the main data set starts.
    pub fn read_file_meta(&self, data: &[u8]) -> Result<(FileMetaTable, usize)> {
        let start = self.read_preamble.magic_code_position(data)?;
        let (meta, meta_len) =
            FileMetaTable::read_at(&data[start..], start as u64).context(ParseMetaDataSetSnafu)?;
        Ok((meta, start + meta_len))
    }

    /// Obtain a DICOM object from the full contents of a DICOM file.
    pub fn from_bytes(self, data: &[u8]) -> Result<DefaultDicomObject>
    where
        D: DataDictionary,
        D: Clone,
        T: TransferSyntaxIndex,
    {
        let (meta, body) = self.read_file_meta(data)?;

        let ts = self.ts_index.get(&meta.transfer_syntax).with_context(|| {
            ReadUnsupportedTransferSyntaxSnafu {
                uid: meta.transfer_syntax.clone(),
            }
        })?;
        debug!("Reading data set in {}", ts.name());

        let options = self.read_options.base_offset(body as u64);
        let obj = DataSetReader::with_dict(&data[body..], ts, self.data_dictionary, options)
            .read_dataset()
            .context(ReadDataSetSnafu)?;

        Ok(FileDicomObject { meta, obj })
    }
}

/// An enumerate of supported options for
/// whether to expect the 128-byte DICOM file preamble.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Accept the magic code either after a preamble
    /// or at the very start of the data.
    #[default]
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}

impl ReadPreamble {
    /// Find where the magic code is expected in `data`.
    fn magic_code_position(self, data: &[u8]) -> Result<usize> {
        let at = |pos: usize| data.get(pos..pos + DICM_MAGIC_CODE.len()) == Some(&DICM_MAGIC_CODE[..]);
        let position = match self {
            ReadPreamble::Always => Some(PREAMBLE_LENGTH).filter(|p| at(*p)),
            ReadPreamble::Never => Some(0).filter(|p| at(*p)),
            ReadPreamble::Auto => [PREAMBLE_LENGTH, 0].into_iter().find(|p| at(*p)),
        };
        position.context(NotDicomSnafu)
    }
}

impl InMemDicomObject {
    /// Create a DICOM file object from this data set and a meta table builder.
    ///
    /// The media storage SOP class and instance UIDs
    /// are taken from the data set's SOP Class UID and SOP Instance UID
    /// unless the builder already defines them.
    pub fn with_meta(self, meta: FileMetaTableBuilder) -> Result<DefaultDicomObject, meta::Error> {
        let meta = meta.media_storage_from(&self).build()?;
        Ok(FileDicomObject { meta, obj: self })
    }

    /// Create a DICOM file object from this data set
    /// and a file meta table, exactly as given.
    pub fn with_exact_meta(self, meta: FileMetaTable) -> DefaultDicomObject {
        FileDicomObject { meta, obj: self }
    }
}

/// Look up the transfer syntax of a file for writing.
fn writable_syntax<'r>(
    registry: &'r TransferSyntaxRegistry,
    uid: &str,
) -> Result<&'r TransferSyntax, WriteError> {
    registry
        .get(uid)
        .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
            uid: uid.to_string(),
        })
}

impl FileDicomObject<InMemDicomObject> {
    /// Encode the entire object as a DICOM file:
    /// an empty preamble, magic code, file meta group, and the main data set.
    pub fn write_to_vec(&self) -> Result<Vec<u8>, WriteError> {
        self.write_to_vec_with(WriteOptions::default())
    }

    /// Encode the entire object as a DICOM file
    /// with the given data set writing options.
    pub fn write_to_vec_with(&self, options: WriteOptions) -> Result<Vec<u8>, WriteError> {
        let required = [
            (&self.meta.transfer_syntax, "TransferSyntax"),
            (
                &self.meta.media_storage_sop_class_uid,
                "MediaStorageSOPClassUID",
            ),
            (
                &self.meta.media_storage_sop_instance_uid,
                "MediaStorageSOPInstanceUID",
            ),
        ];
        for (value, alias) in required {
            ensure!(!value.is_empty(), MissingMetaElementSnafu { alias });
        }
        let registry = TransferSyntaxRegistry;
        let ts = writable_syntax(&registry, &self.meta.transfer_syntax)?;

        let mut out = vec![0; PREAMBLE_LENGTH];
        self.meta.write_to(&mut out).context(PrintMetaDataSetSnafu)?;
        DataSetWriter::with_options(ts, options)
            .write_dataset(&mut out, &self.obj)
            .context(PrintDataSetSnafu)?;
        Ok(out)
    }

    /// Write the entire object as a DICOM file into the given writer.
    pub fn write_all<W: Write>(&self, mut to: W) -> Result<(), WriteError> {
        let bytes = self.write_to_vec()?;
        to.write_all(&bytes).context(WriteBytesSnafu)
    }

    /// Write the entire object as a DICOM file into the given file path.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let bytes = self.write_to_vec()?;
        std::fs::write(path, bytes).context(WriteFileSnafu { filename: path })
    }

    /// Encode the inner data set alone,
    /// in the transfer syntax declared by the file meta table.
    pub fn write_dataset(&self) -> Result<Vec<u8>, WriteError> {
        let registry = TransferSyntaxRegistry;
        let ts = writable_syntax(&registry, &self.meta.transfer_syntax)?;
        DataSetWriter::new(ts)
            .encode(&self.obj)
            .context(PrintDataSetSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read;
    use dicomkit_core::VR;
    use dicomkit_dictionary_std::{tags, uids};

    fn sample() -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_str(tags::SOP_CLASS_UID, VR::UI, uids::SECONDARY_CAPTURE_IMAGE_STORAGE);
        obj.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3.4.5");
        obj.put_str(tags::PATIENT_NAME, VR::PN, "Doe^Jane");
        obj.put_u16(tags::ROWS, 2);
        obj
    }

    fn sample_file(ts: &str) -> DefaultDicomObject {
        sample()
            .with_meta(FileMetaTableBuilder::new().transfer_syntax(ts))
            .unwrap()
    }

    #[test]
    fn with_meta_takes_uids_from_the_data_set() {
        let file = sample_file(uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            file.meta().media_storage_sop_class_uid,
            uids::SECONDARY_CAPTURE_IMAGE_STORAGE
        );
        assert_eq!(file.meta().media_storage_sop_instance_uid, "1.2.3.4.5");
        // derefs into the inner object
        assert_eq!(file.get_str(tags::PATIENT_NAME).unwrap(), "Doe^Jane");
    }

    #[test]
    fn with_meta_fails_without_uids() {
        let err = InMemDicomObject::new_empty()
            .with_meta(FileMetaTableBuilder::new().transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN))
            .unwrap_err();
        assert!(matches!(err, meta::Error::MissingElement { .. }));
    }

    #[test]
    fn envelope_layout() {
        let bytes = sample_file(uids::EXPLICIT_VR_BIG_ENDIAN)
            .write_to_vec()
            .unwrap();
        assert!(bytes[..128].iter().all(|b| *b == 0));
        assert_eq!(&bytes[128..132], b"DICM");
        // file meta group is explicit VR little endian
        assert_eq!(&bytes[132..138], &[0x02, 0x00, 0x00, 0x00, b'U', b'L']);
        let group_length = u32::from_le_bytes([bytes[140], bytes[141], bytes[142], bytes[143]]);
        let body = 144 + group_length as usize;
        // main data set is big endian: (0008,0016) comes first
        assert_eq!(&bytes[body..body + 6], &[0x00, 0x08, 0x00, 0x16, b'U', b'I']);
    }

    #[test]
    fn read_back_with_and_without_preamble() {
        let file = sample_file(uids::IMPLICIT_VR_LITTLE_ENDIAN);
        let bytes = file.write_to_vec().unwrap();

        let read = from_bytes(&bytes).unwrap();
        assert_eq!(read.meta(), file.meta());
        assert_eq!(*read, *file);

        let (meta, body) = OpenFileOptions::new().read_file_meta(&bytes).unwrap();
        // preamble, magic code, group length element and the rest of the group
        assert_eq!(body, 128 + 4 + 12 + meta.information_group_length as usize);

        let read = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Never)
            .from_bytes(&bytes[128..])
            .unwrap();
        assert_eq!(*read, *file);

        let err = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .from_bytes(&bytes[128..])
            .unwrap_err();
        assert!(matches!(err, ReadError::NotDicom { .. }));
    }

    #[test]
    fn not_a_dicom_file() {
        let err = from_bytes(b"definitely not a DICOM file").unwrap_err();
        assert!(matches!(err, ReadError::NotDicom { .. }));
        let err = from_bytes(&[0; 132]).unwrap_err();
        assert!(matches!(err, ReadError::NotDicom { .. }));
    }

    #[test]
    fn unknown_transfer_syntax() {
        let file = sample()
            .with_meta(FileMetaTableBuilder::new().transfer_syntax("1.2.3.4.5.6"))
            .unwrap();
        let err = file.write_to_vec().unwrap_err();
        assert!(matches!(
            err,
            WriteError::WriteUnsupportedTransferSyntax { ref uid, .. } if uid == "1.2.3.4.5.6"
        ));

        // a file declaring a deflated syntax cannot be read
        let (mut meta, obj) = sample_file(uids::EXPLICIT_VR_LITTLE_ENDIAN).into_parts();
        meta.transfer_syntax = uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN.to_string();
        let mut bytes = vec![0; 128];
        meta.write_to(&mut bytes).unwrap();
        bytes.extend(crate::encode_dataset(&obj, uids::EXPLICIT_VR_LITTLE_ENDIAN).unwrap());
        let err = from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            ReadError::ReadUnsupportedTransferSyntax { ref uid, .. }
                if uid == uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN
        ));
    }

    #[test]
    fn empty_meta_fields_are_rejected_on_write() {
        let mut meta = sample_file(uids::EXPLICIT_VR_LITTLE_ENDIAN).meta().clone();
        meta.media_storage_sop_instance_uid.clear();
        let file = sample().with_exact_meta(meta);
        let err = file.write_to_vec().unwrap_err();
        assert!(matches!(
            err,
            WriteError::MissingMetaElement {
                alias: "MediaStorageSOPInstanceUID",
                ..
            }
        ));
    }

    #[test]
    fn data_set_errors_carry_file_positions() {
        let mut bytes = sample_file(uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .write_to_vec()
            .unwrap();
        let len = bytes.len();
        bytes.truncate(len - 1);
        let err = from_bytes(&bytes).unwrap_err();
        match err {
            ReadError::ReadDataSet {
                source: read::Error::UnexpectedEndOfData { position, .. },
            } => {
                // the position is relative to the start of the file
                assert!(position > 132 && position <= bytes.len() as u64);
            }
            e => panic!("unexpected error {:?}", e),
        }
    }
}
