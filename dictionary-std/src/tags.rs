//! Data element tag declarations
//!
//! This module contains a collection of constants
//! mapping attribute keywords to their DICOM tags,
//! as well as the table of entries which backs
//! the standard data dictionary.

use dicomkit_core::dictionary::DataDictionaryEntryRef;
use dicomkit_core::header::{Tag, VR};

/// File Meta Information Group Length UL
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version OB
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID UI
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID UI
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID UI
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name SH
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title AE
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title AE
#[rustfmt::skip]
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title AE
#[rustfmt::skip]
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID UI
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information OB
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// File-set ID CS
#[rustfmt::skip]
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// File-set Descriptor File ID CS
#[rustfmt::skip]
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// Specific Character Set of File-set Descriptor File CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// Offset of the First Directory Record of the Root Directory Entity UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// Offset of the Last Directory Record of the Root Directory Entity UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// File-set Consistency Flag US
#[rustfmt::skip]
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// Directory Record Sequence SQ
#[rustfmt::skip]
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// Offset of the Next Directory Record UL
#[rustfmt::skip]
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// Record In-use Flag US
#[rustfmt::skip]
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// Offset of Referenced Lower-Level Directory Entity UL
#[rustfmt::skip]
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// Directory Record Type CS
#[rustfmt::skip]
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// Private Record UID UI
#[rustfmt::skip]
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// Referenced File ID CS
#[rustfmt::skip]
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// Referenced SOP Class UID in File UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// Referenced SOP Instance UID in File UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// Referenced Transfer Syntax UID in File UI
#[rustfmt::skip]
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// Referenced Related General SOP Class UID in File UI
#[rustfmt::skip]
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// Specific Character Set CS
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Image Type CS
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// Instance Creation Date DA
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// Instance Creation Time TM
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// Instance Creator UID UI
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// Instance Coercion DateTime DT
#[rustfmt::skip]
pub const INSTANCE_COERCION_DATETIME: Tag = Tag(0x0008, 0x0015);
/// SOP Class UID UI
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// Acquisition UID UI
#[rustfmt::skip]
pub const ACQUISITION_UID: Tag = Tag(0x0008, 0x0017);
/// SOP Instance UID UI
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Related General SOP Class UID UI
#[rustfmt::skip]
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// Original Specialized SOP Class UID UI
#[rustfmt::skip]
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// Study Date DA
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date DA
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date DA
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date DA
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Acquisition DateTime DT
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time TM
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time TM
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time TM
#[rustfmt::skip]
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time TM
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number SH
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Issuer of Accession Number Sequence SQ
#[rustfmt::skip]
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// Query/Retrieve Level CS
#[rustfmt::skip]
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// Retrieve AE Title AE
#[rustfmt::skip]
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// Instance Availability CS
#[rustfmt::skip]
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// Failed SOP Instance UID List UI
#[rustfmt::skip]
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality CS
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Modalities in Study CS
#[rustfmt::skip]
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOP Classes in Study UI
#[rustfmt::skip]
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// Conversion Type CS
#[rustfmt::skip]
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Presentation Intent Type CS
#[rustfmt::skip]
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer LO
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name LO
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Institution Address ST
#[rustfmt::skip]
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// Institution Code Sequence SQ
#[rustfmt::skip]
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// Referring Physician's Name PN
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Referring Physician's Address ST
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// Referring Physician's Telephone Numbers SH
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// Referring Physician Identification Sequence SQ
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// Code Value SH
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// Coding Scheme Designator SH
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// Coding Scheme Version SH
#[rustfmt::skip]
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// Code Meaning LO
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// Mapping Resource CS
#[rustfmt::skip]
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// Context Group Version DT
#[rustfmt::skip]
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// Context Group Local Version DT
#[rustfmt::skip]
pub const CONTEXT_GROUP_LOCAL_VERSION: Tag = Tag(0x0008, 0x0107);
/// Context Group Extension Flag CS
#[rustfmt::skip]
pub const CONTEXT_GROUP_EXTENSION_FLAG: Tag = Tag(0x0008, 0x010B);
/// Context Identifier CS
#[rustfmt::skip]
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// Context UID UI
#[rustfmt::skip]
pub const CONTEXT_UID: Tag = Tag(0x0008, 0x0117);
/// Timezone Offset From UTC SH
#[rustfmt::skip]
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// Station Name SH
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description LO
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Procedure Code Sequence SQ
#[rustfmt::skip]
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// Series Description LO
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Institutional Department Name LO
#[rustfmt::skip]
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// Physician(s) of Record PN
#[rustfmt::skip]
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// Performing Physician's Name PN
#[rustfmt::skip]
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Name of Physician(s) Reading Study PN
#[rustfmt::skip]
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// Operators' Name PN
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Admitting Diagnoses Description LO
#[rustfmt::skip]
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// Manufacturer's Model Name LO
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Performed Procedure Step Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// Referenced Series Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Patient Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// Referenced Image Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced Instance Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// Referenced SOP Class UID UI
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID UI
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Referenced Frame Number IS
#[rustfmt::skip]
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// Referenced SOP Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// Related Series Sequence SQ
#[rustfmt::skip]
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// Derivation Description ST
#[rustfmt::skip]
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// Source Image Sequence SQ
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Frame Type CS
#[rustfmt::skip]
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// Pixel Presentation CS
#[rustfmt::skip]
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// Volumetric Properties CS
#[rustfmt::skip]
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// Volume Based Calculation Technique CS
#[rustfmt::skip]
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// Derivation Code Sequence SQ
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// Patient's Name PN
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID LO
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Issuer of Patient ID LO
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// Patient's Birth Date DA
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Birth Time TM
#[rustfmt::skip]
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// Patient's Sex CS
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient's Insurance Plan Code Sequence SQ
#[rustfmt::skip]
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// Other Patient Names PN
#[rustfmt::skip]
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// Other Patient IDs Sequence SQ
#[rustfmt::skip]
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// Patient's Age AS
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size DS
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Weight DS
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Patient's Address LO
#[rustfmt::skip]
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// Patient's Telephone Numbers SH
#[rustfmt::skip]
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// Ethnic Group SH
#[rustfmt::skip]
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation SH
#[rustfmt::skip]
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// Additional Patient History LT
#[rustfmt::skip]
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// Patient Species Description LO
#[rustfmt::skip]
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// Patient Comments LT
#[rustfmt::skip]
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// Clinical Trial Sponsor Name LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// Clinical Trial Protocol ID LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// Clinical Trial Site ID LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// Clinical Trial Subject ID LO
#[rustfmt::skip]
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// Patient Identity Removed CS
#[rustfmt::skip]
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// De-identification Method LO
#[rustfmt::skip]
pub const DE_IDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// De-identification Method Code Sequence SQ
#[rustfmt::skip]
pub const DE_IDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// Contrast/Bolus Agent LO
#[rustfmt::skip]
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// Body Part Examined CS
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Scanning Sequence CS
#[rustfmt::skip]
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// Sequence Variant CS
#[rustfmt::skip]
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// Scan Options CS
#[rustfmt::skip]
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MR Acquisition Type CS
#[rustfmt::skip]
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// Sequence Name SH
#[rustfmt::skip]
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// Angio Flag CS
#[rustfmt::skip]
pub const ANGIO_FLAG: Tag = Tag(0x0018, 0x0025);
/// Cine Rate IS
#[rustfmt::skip]
pub const CINE_RATE: Tag = Tag(0x0018, 0x0040);
/// Slice Thickness DS
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP DS
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Counts Accumulated IS
#[rustfmt::skip]
pub const COUNTS_ACCUMULATED: Tag = Tag(0x0018, 0x0070);
/// Acquisition Termination Condition CS
#[rustfmt::skip]
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
/// Repetition Time DS
#[rustfmt::skip]
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// Echo Time DS
#[rustfmt::skip]
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// Inversion Time DS
#[rustfmt::skip]
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// Number of Averages DS
#[rustfmt::skip]
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// Imaging Frequency DS
#[rustfmt::skip]
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// Imaged Nucleus SH
#[rustfmt::skip]
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// Echo Number(s) IS
#[rustfmt::skip]
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// Magnetic Field Strength DS
#[rustfmt::skip]
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// Spacing Between Slices DS
#[rustfmt::skip]
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Number of Phase Encoding Steps IS
#[rustfmt::skip]
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// Data Collection Diameter DS
#[rustfmt::skip]
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// Echo Train Length IS
#[rustfmt::skip]
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// Percent Sampling DS
#[rustfmt::skip]
pub const PERCENT_SAMPLING: Tag = Tag(0x0018, 0x0093);
/// Percent Phase Field of View DS
#[rustfmt::skip]
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// Pixel Bandwidth DS
#[rustfmt::skip]
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// Device Serial Number LO
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// Plate ID LO
#[rustfmt::skip]
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// Date of Secondary Capture DA
#[rustfmt::skip]
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// Time of Secondary Capture TM
#[rustfmt::skip]
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// Secondary Capture Device Manufacturer LO
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// Secondary Capture Device Manufacturer's Model Name LO
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// Secondary Capture Device Software Versions LO
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// Software Versions LO
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name LO
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// Frame Time DS
#[rustfmt::skip]
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// Frame Time Vector DS
#[rustfmt::skip]
pub const FRAME_TIME_VECTOR: Tag = Tag(0x0018, 0x1065);
/// Heart Rate IS
#[rustfmt::skip]
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// Reconstruction Diameter DS
#[rustfmt::skip]
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// Distance Source to Detector DS
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// Distance Source to Patient DS
#[rustfmt::skip]
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// Gantry/Detector Tilt DS
#[rustfmt::skip]
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// Table Height DS
#[rustfmt::skip]
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// Rotation Direction CS
#[rustfmt::skip]
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// Exposure Time IS
#[rustfmt::skip]
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// X-Ray Tube Current IS
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure IS
#[rustfmt::skip]
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// Filter Type SH
#[rustfmt::skip]
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// Imager Pixel Spacing DS
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Generator Power IS
#[rustfmt::skip]
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// Focal Spot(s) DS
#[rustfmt::skip]
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// Date of Last Calibration DA
#[rustfmt::skip]
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// Time of Last Calibration TM
#[rustfmt::skip]
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// Convolution Kernel SH
#[rustfmt::skip]
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// Receive Coil Name SH
#[rustfmt::skip]
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// Transmit Coil Name SH
#[rustfmt::skip]
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// Acquisition Matrix US
#[rustfmt::skip]
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// In-plane Phase Encoding Direction CS
#[rustfmt::skip]
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// Flip Angle DS
#[rustfmt::skip]
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// SAR DS
#[rustfmt::skip]
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// Transducer Data LO
#[rustfmt::skip]
pub const TRANSDUCER_DATA: Tag = Tag(0x0018, 0x5010);
/// Patient Position CS
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// View Position CS
#[rustfmt::skip]
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// Sequence of Ultrasound Regions SQ
#[rustfmt::skip]
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// Content Qualification CS
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// Acquisition Duration FD
#[rustfmt::skip]
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// Study Instance UID UI
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID UI
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID SH
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number IS
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number IS
#[rustfmt::skip]
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number IS
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Item Number IS
#[rustfmt::skip]
pub const ITEM_NUMBER: Tag = Tag(0x0020, 0x0019);
/// Patient Orientation CS
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position (Patient) DS
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (Patient) DS
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame of Reference UID UI
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality CS
#[rustfmt::skip]
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// Image Laterality CS
#[rustfmt::skip]
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// Temporal Position Identifier IS
#[rustfmt::skip]
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// Number of Temporal Positions IS
#[rustfmt::skip]
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// Synchronization Frame of Reference UID UI
#[rustfmt::skip]
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// Images in Acquisition IS
#[rustfmt::skip]
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// Position Reference Indicator LO
#[rustfmt::skip]
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// Slice Location DS
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Image Comments LT
#[rustfmt::skip]
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// Stack ID SH
#[rustfmt::skip]
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// In-Stack Position Number UL
#[rustfmt::skip]
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// Frame Anatomy Sequence SQ
#[rustfmt::skip]
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// Frame Content Sequence SQ
#[rustfmt::skip]
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// Plane Position Sequence SQ
#[rustfmt::skip]
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// Plane Orientation Sequence SQ
#[rustfmt::skip]
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// Temporal Position Index UL
#[rustfmt::skip]
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// Dimension Index Values UL
#[rustfmt::skip]
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// Dimension Organization UID UI
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// Dimension Index Pointer AT
#[rustfmt::skip]
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// Functional Group Pointer AT
#[rustfmt::skip]
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// Dimension Organization Sequence SQ
#[rustfmt::skip]
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// Dimension Index Sequence SQ
#[rustfmt::skip]
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// Dimension Description Label LO
#[rustfmt::skip]
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);
/// Samples per Pixel US
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation CS
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration US
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames IS
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Frame Increment Pointer AT
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows US
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns US
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing DS
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Pixel Aspect Ratio IS
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// Bits Allocated US
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored US
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit US
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation US
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value US
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value US
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Pixel Padding Value US
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// Quality Control Image CS
#[rustfmt::skip]
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// Burned In Annotation CS
#[rustfmt::skip]
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// Recognizable Visual Features CS
#[rustfmt::skip]
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// Pixel Intensity Relationship CS
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// Pixel Intensity Relationship Sign SS
#[rustfmt::skip]
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// Window Center DS
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width DS
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept DS
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope DS
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type LO
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Window Center & Width Explanation LO
#[rustfmt::skip]
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOI LUT Function CS
#[rustfmt::skip]
pub const VOI_LUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// Red Palette Color Lookup Table Descriptor US
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor US
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor US
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Red Palette Color Lookup Table Data OW
#[rustfmt::skip]
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Green Palette Color Lookup Table Data OW
#[rustfmt::skip]
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// Blue Palette Color Lookup Table Data OW
#[rustfmt::skip]
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// Lossy Image Compression CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio DS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Lossy Image Compression Method CS
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// Modality LUT Sequence SQ
#[rustfmt::skip]
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// LUT Descriptor US
#[rustfmt::skip]
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUT Explanation LO
#[rustfmt::skip]
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// LUT Data US
#[rustfmt::skip]
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOI LUT Sequence SQ
#[rustfmt::skip]
pub const VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// Pixel Data Provider URL UR
#[rustfmt::skip]
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// Pixel Measures Sequence SQ
#[rustfmt::skip]
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// Frame VOI LUT Sequence SQ
#[rustfmt::skip]
pub const FRAME_VOI_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// Pixel Value Transformation Sequence SQ
#[rustfmt::skip]
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// Requesting Physician PN
#[rustfmt::skip]
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// Requested Procedure Description LO
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// Requested Procedure Code Sequence SQ
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// Number of Waveform Channels US
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_CHANNELS: Tag = Tag(0x003A, 0x0005);
/// Number of Waveform Samples UL
#[rustfmt::skip]
pub const NUMBER_OF_WAVEFORM_SAMPLES: Tag = Tag(0x003A, 0x0010);
/// Sampling Frequency DS
#[rustfmt::skip]
pub const SAMPLING_FREQUENCY: Tag = Tag(0x003A, 0x001A);
/// Multiplex Group Label SH
#[rustfmt::skip]
pub const MULTIPLEX_GROUP_LABEL: Tag = Tag(0x003A, 0x0020);
/// Channel Definition Sequence SQ
#[rustfmt::skip]
pub const CHANNEL_DEFINITION_SEQUENCE: Tag = Tag(0x003A, 0x0200);
/// Scheduled Procedure Step Description LO
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// Scheduled Procedure Step ID SH
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// Scheduled Procedure Step Sequence SQ
#[rustfmt::skip]
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// Performed Procedure Step Start Date DA
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// Performed Procedure Step Start Time TM
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// Performed Procedure Step ID SH
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// Performed Procedure Step Description LO
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// Performed Protocol Code Sequence SQ
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// Request Attributes Sequence SQ
#[rustfmt::skip]
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// Acquisition Context Sequence SQ
#[rustfmt::skip]
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// Measurement Units Code Sequence SQ
#[rustfmt::skip]
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// Requested Procedure ID SH
#[rustfmt::skip]
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// Real World Value Mapping Sequence SQ
#[rustfmt::skip]
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// Relationship Type CS
#[rustfmt::skip]
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// Verifying Organization LO
#[rustfmt::skip]
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// Verification DateTime DT
#[rustfmt::skip]
pub const VERIFICATION_DATETIME: Tag = Tag(0x0040, 0xA030);
/// Observation DateTime DT
#[rustfmt::skip]
pub const OBSERVATION_DATETIME: Tag = Tag(0x0040, 0xA032);
/// Value Type CS
#[rustfmt::skip]
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// Concept Name Code Sequence SQ
#[rustfmt::skip]
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// Continuity Of Content CS
#[rustfmt::skip]
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// Verifying Observer Sequence SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// Verifying Observer Name PN
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// Verifying Observer Identification Code Sequence SQ
#[rustfmt::skip]
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// DateTime DT
#[rustfmt::skip]
pub const DATETIME: Tag = Tag(0x0040, 0xA120);
/// Date DA
#[rustfmt::skip]
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time TM
#[rustfmt::skip]
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// Person Name PN
#[rustfmt::skip]
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID UI
#[rustfmt::skip]
pub const UID: Tag = Tag(0x0040, 0xA124);
/// Text Value UT
#[rustfmt::skip]
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// Concept Code Sequence SQ
#[rustfmt::skip]
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// Measured Value Sequence SQ
#[rustfmt::skip]
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// Numeric Value DS
#[rustfmt::skip]
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// Referenced Request Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// Performed Procedure Code Sequence SQ
#[rustfmt::skip]
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// Current Requested Procedure Evidence Sequence SQ
#[rustfmt::skip]
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// Completion Flag CS
#[rustfmt::skip]
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// Verification Flag CS
#[rustfmt::skip]
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// Content Template Sequence SQ
#[rustfmt::skip]
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// Content Sequence SQ
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// Template Identifier CS
#[rustfmt::skip]
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// Document Title ST
#[rustfmt::skip]
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// Encapsulated Document OB
#[rustfmt::skip]
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// MIME Type of Encapsulated Document LO
#[rustfmt::skip]
pub const MIME_TYPE_OF_ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0012);
/// Number of Energy Windows US
#[rustfmt::skip]
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// Radiopharmaceutical Information Sequence SQ
#[rustfmt::skip]
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// Number of Detectors US
#[rustfmt::skip]
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// Number of Slices US
#[rustfmt::skip]
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// Series Type CS
#[rustfmt::skip]
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units CS
#[rustfmt::skip]
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// Counts Source CS
#[rustfmt::skip]
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// Decay Correction CS
#[rustfmt::skip]
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// Graphic Annotation Sequence SQ
#[rustfmt::skip]
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// Displayed Area Selection Sequence SQ
#[rustfmt::skip]
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// Content Label CS
#[rustfmt::skip]
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// Content Description LO
#[rustfmt::skip]
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// Presentation Creation Date DA
#[rustfmt::skip]
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// Presentation Creation Time TM
#[rustfmt::skip]
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// Content Creator's Name PN
#[rustfmt::skip]
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// Storage Media File-set ID SH
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_ID: Tag = Tag(0x0088, 0x0130);
/// Storage Media File-set UID UI
#[rustfmt::skip]
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// Icon Image Sequence SQ
#[rustfmt::skip]
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// Dose Units CS
#[rustfmt::skip]
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// Dose Type CS
#[rustfmt::skip]
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// Dose Summation Type CS
#[rustfmt::skip]
pub const DOSE_SUMMATION_TYPE: Tag = Tag(0x3004, 0x000A);
/// Grid Frame Offset Vector DS
#[rustfmt::skip]
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// Dose Grid Scaling DS
#[rustfmt::skip]
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// Structure Set Label SH
#[rustfmt::skip]
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// Structure Set Name LO
#[rustfmt::skip]
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// Structure Set Description ST
#[rustfmt::skip]
pub const STRUCTURE_SET_DESCRIPTION: Tag = Tag(0x3006, 0x0006);
/// Structure Set Date DA
#[rustfmt::skip]
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// Structure Set Time TM
#[rustfmt::skip]
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// Referenced Frame of Reference Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// Structure Set ROI Sequence SQ
#[rustfmt::skip]
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROI Number IS
#[rustfmt::skip]
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// Referenced Frame of Reference UID UI
#[rustfmt::skip]
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROI Name LO
#[rustfmt::skip]
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROI Display Color IS
#[rustfmt::skip]
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// ROI Generation Algorithm CS
#[rustfmt::skip]
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROI Contour Sequence SQ
#[rustfmt::skip]
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// Contour Sequence SQ
#[rustfmt::skip]
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// Contour Geometric Type CS
#[rustfmt::skip]
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// Number of Contour Points IS
#[rustfmt::skip]
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// Contour Data DS
#[rustfmt::skip]
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RT ROI Observations Sequence SQ
#[rustfmt::skip]
pub const RT_ROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// Referenced ROI Number IS
#[rustfmt::skip]
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// RT ROI Interpreted Type CS
#[rustfmt::skip]
pub const RT_ROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// RT Plan Label SH
#[rustfmt::skip]
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RT Plan Name LO
#[rustfmt::skip]
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RT Plan Description ST
#[rustfmt::skip]
pub const RT_PLAN_DESCRIPTION: Tag = Tag(0x300A, 0x0004);
/// RT Plan Date DA
#[rustfmt::skip]
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RT Plan Time TM
#[rustfmt::skip]
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// RT Plan Geometry CS
#[rustfmt::skip]
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// Fraction Group Sequence SQ
#[rustfmt::skip]
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// Beam Sequence SQ
#[rustfmt::skip]
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// Beam Number IS
#[rustfmt::skip]
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// Beam Name LO
#[rustfmt::skip]
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// Beam Type CS
#[rustfmt::skip]
pub const BEAM_TYPE: Tag = Tag(0x300A, 0x00C4);
/// Radiation Type CS
#[rustfmt::skip]
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// Referenced RT Plan Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// Referenced Structure Set Sequence SQ
#[rustfmt::skip]
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// Approval Status CS
#[rustfmt::skip]
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// Review Date DA
#[rustfmt::skip]
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// Review Time TM
#[rustfmt::skip]
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// Reviewer Name PN
#[rustfmt::skip]
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// Shared Functional Groups Sequence SQ
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// Per-frame Functional Groups Sequence SQ
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// Waveform Sequence SQ
#[rustfmt::skip]
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// Waveform Bits Allocated US
#[rustfmt::skip]
pub const WAVEFORM_BITS_ALLOCATED: Tag = Tag(0x5400, 0x1004);
/// Waveform Sample Interpretation CS
#[rustfmt::skip]
pub const WAVEFORM_SAMPLE_INTERPRETATION: Tag = Tag(0x5400, 0x1006);
/// Waveform Data OW
#[rustfmt::skip]
pub const WAVEFORM_DATA: Tag = Tag(0x5400, 0x1010);
/// Extended Offset Table OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// Extended Offset Table Lengths OV
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// Pixel Data OB
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

type E = DataDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Tag(0x0002, 0x0000), alias: "FileMetaInformationGroupLength", vr: VR::UL }, // File Meta Information Group Length
    E { tag: Tag(0x0002, 0x0001), alias: "FileMetaInformationVersion", vr: VR::OB }, // File Meta Information Version
    E { tag: Tag(0x0002, 0x0002), alias: "MediaStorageSOPClassUID", vr: VR::UI }, // Media Storage SOP Class UID
    E { tag: Tag(0x0002, 0x0003), alias: "MediaStorageSOPInstanceUID", vr: VR::UI }, // Media Storage SOP Instance UID
    E { tag: Tag(0x0002, 0x0010), alias: "TransferSyntaxUID", vr: VR::UI }, // Transfer Syntax UID
    E { tag: Tag(0x0002, 0x0012), alias: "ImplementationClassUID", vr: VR::UI }, // Implementation Class UID
    E { tag: Tag(0x0002, 0x0013), alias: "ImplementationVersionName", vr: VR::SH }, // Implementation Version Name
    E { tag: Tag(0x0002, 0x0016), alias: "SourceApplicationEntityTitle", vr: VR::AE }, // Source Application Entity Title
    E { tag: Tag(0x0002, 0x0017), alias: "SendingApplicationEntityTitle", vr: VR::AE }, // Sending Application Entity Title
    E { tag: Tag(0x0002, 0x0018), alias: "ReceivingApplicationEntityTitle", vr: VR::AE }, // Receiving Application Entity Title
    E { tag: Tag(0x0002, 0x0100), alias: "PrivateInformationCreatorUID", vr: VR::UI }, // Private Information Creator UID
    E { tag: Tag(0x0002, 0x0102), alias: "PrivateInformation", vr: VR::OB }, // Private Information
    E { tag: Tag(0x0004, 0x1130), alias: "FileSetID", vr: VR::CS }, // File-set ID
    E { tag: Tag(0x0004, 0x1141), alias: "FileSetDescriptorFileID", vr: VR::CS }, // File-set Descriptor File ID
    E { tag: Tag(0x0004, 0x1142), alias: "SpecificCharacterSetOfFileSetDescriptorFile", vr: VR::CS }, // Specific Character Set of File-set Descriptor File
    E { tag: Tag(0x0004, 0x1200), alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL }, // Offset of the First Directory Record of the Root Directory Entity
    E { tag: Tag(0x0004, 0x1202), alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL }, // Offset of the Last Directory Record of the Root Directory Entity
    E { tag: Tag(0x0004, 0x1212), alias: "FileSetConsistencyFlag", vr: VR::US }, // File-set Consistency Flag
    E { tag: Tag(0x0004, 0x1220), alias: "DirectoryRecordSequence", vr: VR::SQ }, // Directory Record Sequence
    E { tag: Tag(0x0004, 0x1400), alias: "OffsetOfTheNextDirectoryRecord", vr: VR::UL }, // Offset of the Next Directory Record
    E { tag: Tag(0x0004, 0x1410), alias: "RecordInUseFlag", vr: VR::US }, // Record In-use Flag
    E { tag: Tag(0x0004, 0x1420), alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: VR::UL }, // Offset of Referenced Lower-Level Directory Entity
    E { tag: Tag(0x0004, 0x1430), alias: "DirectoryRecordType", vr: VR::CS }, // Directory Record Type
    E { tag: Tag(0x0004, 0x1432), alias: "PrivateRecordUID", vr: VR::UI }, // Private Record UID
    E { tag: Tag(0x0004, 0x1500), alias: "ReferencedFileID", vr: VR::CS }, // Referenced File ID
    E { tag: Tag(0x0004, 0x1510), alias: "ReferencedSOPClassUIDInFile", vr: VR::UI }, // Referenced SOP Class UID in File
    E { tag: Tag(0x0004, 0x1511), alias: "ReferencedSOPInstanceUIDInFile", vr: VR::UI }, // Referenced SOP Instance UID in File
    E { tag: Tag(0x0004, 0x1512), alias: "ReferencedTransferSyntaxUIDInFile", vr: VR::UI }, // Referenced Transfer Syntax UID in File
    E { tag: Tag(0x0004, 0x151A), alias: "ReferencedRelatedGeneralSOPClassUIDInFile", vr: VR::UI }, // Referenced Related General SOP Class UID in File
    E { tag: Tag(0x0008, 0x0005), alias: "SpecificCharacterSet", vr: VR::CS }, // Specific Character Set
    E { tag: Tag(0x0008, 0x0008), alias: "ImageType", vr: VR::CS }, // Image Type
    E { tag: Tag(0x0008, 0x0012), alias: "InstanceCreationDate", vr: VR::DA }, // Instance Creation Date
    E { tag: Tag(0x0008, 0x0013), alias: "InstanceCreationTime", vr: VR::TM }, // Instance Creation Time
    E { tag: Tag(0x0008, 0x0014), alias: "InstanceCreatorUID", vr: VR::UI }, // Instance Creator UID
    E { tag: Tag(0x0008, 0x0015), alias: "InstanceCoercionDateTime", vr: VR::DT }, // Instance Coercion DateTime
    E { tag: Tag(0x0008, 0x0016), alias: "SOPClassUID", vr: VR::UI }, // SOP Class UID
    E { tag: Tag(0x0008, 0x0017), alias: "AcquisitionUID", vr: VR::UI }, // Acquisition UID
    E { tag: Tag(0x0008, 0x0018), alias: "SOPInstanceUID", vr: VR::UI }, // SOP Instance UID
    E { tag: Tag(0x0008, 0x001A), alias: "RelatedGeneralSOPClassUID", vr: VR::UI }, // Related General SOP Class UID
    E { tag: Tag(0x0008, 0x001B), alias: "OriginalSpecializedSOPClassUID", vr: VR::UI }, // Original Specialized SOP Class UID
    E { tag: Tag(0x0008, 0x0020), alias: "StudyDate", vr: VR::DA }, // Study Date
    E { tag: Tag(0x0008, 0x0021), alias: "SeriesDate", vr: VR::DA }, // Series Date
    E { tag: Tag(0x0008, 0x0022), alias: "AcquisitionDate", vr: VR::DA }, // Acquisition Date
    E { tag: Tag(0x0008, 0x0023), alias: "ContentDate", vr: VR::DA }, // Content Date
    E { tag: Tag(0x0008, 0x002A), alias: "AcquisitionDateTime", vr: VR::DT }, // Acquisition DateTime
    E { tag: Tag(0x0008, 0x0030), alias: "StudyTime", vr: VR::TM }, // Study Time
    E { tag: Tag(0x0008, 0x0031), alias: "SeriesTime", vr: VR::TM }, // Series Time
    E { tag: Tag(0x0008, 0x0032), alias: "AcquisitionTime", vr: VR::TM }, // Acquisition Time
    E { tag: Tag(0x0008, 0x0033), alias: "ContentTime", vr: VR::TM }, // Content Time
    E { tag: Tag(0x0008, 0x0050), alias: "AccessionNumber", vr: VR::SH }, // Accession Number
    E { tag: Tag(0x0008, 0x0051), alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ }, // Issuer of Accession Number Sequence
    E { tag: Tag(0x0008, 0x0052), alias: "QueryRetrieveLevel", vr: VR::CS }, // Query/Retrieve Level
    E { tag: Tag(0x0008, 0x0054), alias: "RetrieveAETitle", vr: VR::AE }, // Retrieve AE Title
    E { tag: Tag(0x0008, 0x0056), alias: "InstanceAvailability", vr: VR::CS }, // Instance Availability
    E { tag: Tag(0x0008, 0x0058), alias: "FailedSOPInstanceUIDList", vr: VR::UI }, // Failed SOP Instance UID List
    E { tag: Tag(0x0008, 0x0060), alias: "Modality", vr: VR::CS }, // Modality
    E { tag: Tag(0x0008, 0x0061), alias: "ModalitiesInStudy", vr: VR::CS }, // Modalities in Study
    E { tag: Tag(0x0008, 0x0062), alias: "SOPClassesInStudy", vr: VR::UI }, // SOP Classes in Study
    E { tag: Tag(0x0008, 0x0064), alias: "ConversionType", vr: VR::CS }, // Conversion Type
    E { tag: Tag(0x0008, 0x0068), alias: "PresentationIntentType", vr: VR::CS }, // Presentation Intent Type
    E { tag: Tag(0x0008, 0x0070), alias: "Manufacturer", vr: VR::LO }, // Manufacturer
    E { tag: Tag(0x0008, 0x0080), alias: "InstitutionName", vr: VR::LO }, // Institution Name
    E { tag: Tag(0x0008, 0x0081), alias: "InstitutionAddress", vr: VR::ST }, // Institution Address
    E { tag: Tag(0x0008, 0x0082), alias: "InstitutionCodeSequence", vr: VR::SQ }, // Institution Code Sequence
    E { tag: Tag(0x0008, 0x0090), alias: "ReferringPhysicianName", vr: VR::PN }, // Referring Physician's Name
    E { tag: Tag(0x0008, 0x0092), alias: "ReferringPhysicianAddress", vr: VR::ST }, // Referring Physician's Address
    E { tag: Tag(0x0008, 0x0094), alias: "ReferringPhysicianTelephoneNumbers", vr: VR::SH }, // Referring Physician's Telephone Numbers
    E { tag: Tag(0x0008, 0x0096), alias: "ReferringPhysicianIdentificationSequence", vr: VR::SQ }, // Referring Physician Identification Sequence
    E { tag: Tag(0x0008, 0x0100), alias: "CodeValue", vr: VR::SH }, // Code Value
    E { tag: Tag(0x0008, 0x0102), alias: "CodingSchemeDesignator", vr: VR::SH }, // Coding Scheme Designator
    E { tag: Tag(0x0008, 0x0103), alias: "CodingSchemeVersion", vr: VR::SH }, // Coding Scheme Version
    E { tag: Tag(0x0008, 0x0104), alias: "CodeMeaning", vr: VR::LO }, // Code Meaning
    E { tag: Tag(0x0008, 0x0105), alias: "MappingResource", vr: VR::CS }, // Mapping Resource
    E { tag: Tag(0x0008, 0x0106), alias: "ContextGroupVersion", vr: VR::DT }, // Context Group Version
    E { tag: Tag(0x0008, 0x0107), alias: "ContextGroupLocalVersion", vr: VR::DT }, // Context Group Local Version
    E { tag: Tag(0x0008, 0x010B), alias: "ContextGroupExtensionFlag", vr: VR::CS }, // Context Group Extension Flag
    E { tag: Tag(0x0008, 0x010F), alias: "ContextIdentifier", vr: VR::CS }, // Context Identifier
    E { tag: Tag(0x0008, 0x0117), alias: "ContextUID", vr: VR::UI }, // Context UID
    E { tag: Tag(0x0008, 0x0201), alias: "TimezoneOffsetFromUTC", vr: VR::SH }, // Timezone Offset From UTC
    E { tag: Tag(0x0008, 0x1010), alias: "StationName", vr: VR::SH }, // Station Name
    E { tag: Tag(0x0008, 0x1030), alias: "StudyDescription", vr: VR::LO }, // Study Description
    E { tag: Tag(0x0008, 0x1032), alias: "ProcedureCodeSequence", vr: VR::SQ }, // Procedure Code Sequence
    E { tag: Tag(0x0008, 0x103E), alias: "SeriesDescription", vr: VR::LO }, // Series Description
    E { tag: Tag(0x0008, 0x1040), alias: "InstitutionalDepartmentName", vr: VR::LO }, // Institutional Department Name
    E { tag: Tag(0x0008, 0x1048), alias: "PhysiciansOfRecord", vr: VR::PN }, // Physician(s) of Record
    E { tag: Tag(0x0008, 0x1050), alias: "PerformingPhysicianName", vr: VR::PN }, // Performing Physician's Name
    E { tag: Tag(0x0008, 0x1060), alias: "NameOfPhysiciansReadingStudy", vr: VR::PN }, // Name of Physician(s) Reading Study
    E { tag: Tag(0x0008, 0x1070), alias: "OperatorsName", vr: VR::PN }, // Operators' Name
    E { tag: Tag(0x0008, 0x1080), alias: "AdmittingDiagnosesDescription", vr: VR::LO }, // Admitting Diagnoses Description
    E { tag: Tag(0x0008, 0x1090), alias: "ManufacturerModelName", vr: VR::LO }, // Manufacturer's Model Name
    E { tag: Tag(0x0008, 0x1110), alias: "ReferencedStudySequence", vr: VR::SQ }, // Referenced Study Sequence
    E { tag: Tag(0x0008, 0x1111), alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ }, // Referenced Performed Procedure Step Sequence
    E { tag: Tag(0x0008, 0x1115), alias: "ReferencedSeriesSequence", vr: VR::SQ }, // Referenced Series Sequence
    E { tag: Tag(0x0008, 0x1120), alias: "ReferencedPatientSequence", vr: VR::SQ }, // Referenced Patient Sequence
    E { tag: Tag(0x0008, 0x1140), alias: "ReferencedImageSequence", vr: VR::SQ }, // Referenced Image Sequence
    E { tag: Tag(0x0008, 0x114A), alias: "ReferencedInstanceSequence", vr: VR::SQ }, // Referenced Instance Sequence
    E { tag: Tag(0x0008, 0x1150), alias: "ReferencedSOPClassUID", vr: VR::UI }, // Referenced SOP Class UID
    E { tag: Tag(0x0008, 0x1155), alias: "ReferencedSOPInstanceUID", vr: VR::UI }, // Referenced SOP Instance UID
    E { tag: Tag(0x0008, 0x1160), alias: "ReferencedFrameNumber", vr: VR::IS }, // Referenced Frame Number
    E { tag: Tag(0x0008, 0x1199), alias: "ReferencedSOPSequence", vr: VR::SQ }, // Referenced SOP Sequence
    E { tag: Tag(0x0008, 0x1250), alias: "RelatedSeriesSequence", vr: VR::SQ }, // Related Series Sequence
    E { tag: Tag(0x0008, 0x2111), alias: "DerivationDescription", vr: VR::ST }, // Derivation Description
    E { tag: Tag(0x0008, 0x2112), alias: "SourceImageSequence", vr: VR::SQ }, // Source Image Sequence
    E { tag: Tag(0x0008, 0x9007), alias: "FrameType", vr: VR::CS }, // Frame Type
    E { tag: Tag(0x0008, 0x9205), alias: "PixelPresentation", vr: VR::CS }, // Pixel Presentation
    E { tag: Tag(0x0008, 0x9206), alias: "VolumetricProperties", vr: VR::CS }, // Volumetric Properties
    E { tag: Tag(0x0008, 0x9207), alias: "VolumeBasedCalculationTechnique", vr: VR::CS }, // Volume Based Calculation Technique
    E { tag: Tag(0x0008, 0x9215), alias: "DerivationCodeSequence", vr: VR::SQ }, // Derivation Code Sequence
    E { tag: Tag(0x0010, 0x0010), alias: "PatientName", vr: VR::PN }, // Patient's Name
    E { tag: Tag(0x0010, 0x0020), alias: "PatientID", vr: VR::LO }, // Patient ID
    E { tag: Tag(0x0010, 0x0021), alias: "IssuerOfPatientID", vr: VR::LO }, // Issuer of Patient ID
    E { tag: Tag(0x0010, 0x0030), alias: "PatientBirthDate", vr: VR::DA }, // Patient's Birth Date
    E { tag: Tag(0x0010, 0x0032), alias: "PatientBirthTime", vr: VR::TM }, // Patient's Birth Time
    E { tag: Tag(0x0010, 0x0040), alias: "PatientSex", vr: VR::CS }, // Patient's Sex
    E { tag: Tag(0x0010, 0x0050), alias: "PatientInsurancePlanCodeSequence", vr: VR::SQ }, // Patient's Insurance Plan Code Sequence
    E { tag: Tag(0x0010, 0x1001), alias: "OtherPatientNames", vr: VR::PN }, // Other Patient Names
    E { tag: Tag(0x0010, 0x1002), alias: "OtherPatientIDsSequence", vr: VR::SQ }, // Other Patient IDs Sequence
    E { tag: Tag(0x0010, 0x1010), alias: "PatientAge", vr: VR::AS }, // Patient's Age
    E { tag: Tag(0x0010, 0x1020), alias: "PatientSize", vr: VR::DS }, // Patient's Size
    E { tag: Tag(0x0010, 0x1030), alias: "PatientWeight", vr: VR::DS }, // Patient's Weight
    E { tag: Tag(0x0010, 0x1040), alias: "PatientAddress", vr: VR::LO }, // Patient's Address
    E { tag: Tag(0x0010, 0x2154), alias: "PatientTelephoneNumbers", vr: VR::SH }, // Patient's Telephone Numbers
    E { tag: Tag(0x0010, 0x2160), alias: "EthnicGroup", vr: VR::SH }, // Ethnic Group
    E { tag: Tag(0x0010, 0x2180), alias: "Occupation", vr: VR::SH }, // Occupation
    E { tag: Tag(0x0010, 0x21B0), alias: "AdditionalPatientHistory", vr: VR::LT }, // Additional Patient History
    E { tag: Tag(0x0010, 0x2201), alias: "PatientSpeciesDescription", vr: VR::LO }, // Patient Species Description
    E { tag: Tag(0x0010, 0x4000), alias: "PatientComments", vr: VR::LT }, // Patient Comments
    E { tag: Tag(0x0012, 0x0010), alias: "ClinicalTrialSponsorName", vr: VR::LO }, // Clinical Trial Sponsor Name
    E { tag: Tag(0x0012, 0x0020), alias: "ClinicalTrialProtocolID", vr: VR::LO }, // Clinical Trial Protocol ID
    E { tag: Tag(0x0012, 0x0030), alias: "ClinicalTrialSiteID", vr: VR::LO }, // Clinical Trial Site ID
    E { tag: Tag(0x0012, 0x0040), alias: "ClinicalTrialSubjectID", vr: VR::LO }, // Clinical Trial Subject ID
    E { tag: Tag(0x0012, 0x0062), alias: "PatientIdentityRemoved", vr: VR::CS }, // Patient Identity Removed
    E { tag: Tag(0x0012, 0x0063), alias: "DeidentificationMethod", vr: VR::LO }, // De-identification Method
    E { tag: Tag(0x0012, 0x0064), alias: "DeidentificationMethodCodeSequence", vr: VR::SQ }, // De-identification Method Code Sequence
    E { tag: Tag(0x0018, 0x0010), alias: "ContrastBolusAgent", vr: VR::LO }, // Contrast/Bolus Agent
    E { tag: Tag(0x0018, 0x0015), alias: "BodyPartExamined", vr: VR::CS }, // Body Part Examined
    E { tag: Tag(0x0018, 0x0020), alias: "ScanningSequence", vr: VR::CS }, // Scanning Sequence
    E { tag: Tag(0x0018, 0x0021), alias: "SequenceVariant", vr: VR::CS }, // Sequence Variant
    E { tag: Tag(0x0018, 0x0022), alias: "ScanOptions", vr: VR::CS }, // Scan Options
    E { tag: Tag(0x0018, 0x0023), alias: "MRAcquisitionType", vr: VR::CS }, // MR Acquisition Type
    E { tag: Tag(0x0018, 0x0024), alias: "SequenceName", vr: VR::SH }, // Sequence Name
    E { tag: Tag(0x0018, 0x0025), alias: "AngioFlag", vr: VR::CS }, // Angio Flag
    E { tag: Tag(0x0018, 0x0040), alias: "CineRate", vr: VR::IS }, // Cine Rate
    E { tag: Tag(0x0018, 0x0050), alias: "SliceThickness", vr: VR::DS }, // Slice Thickness
    E { tag: Tag(0x0018, 0x0060), alias: "KVP", vr: VR::DS }, // KVP
    E { tag: Tag(0x0018, 0x0070), alias: "CountsAccumulated", vr: VR::IS }, // Counts Accumulated
    E { tag: Tag(0x0018, 0x0071), alias: "AcquisitionTerminationCondition", vr: VR::CS }, // Acquisition Termination Condition
    E { tag: Tag(0x0018, 0x0080), alias: "RepetitionTime", vr: VR::DS }, // Repetition Time
    E { tag: Tag(0x0018, 0x0081), alias: "EchoTime", vr: VR::DS }, // Echo Time
    E { tag: Tag(0x0018, 0x0082), alias: "InversionTime", vr: VR::DS }, // Inversion Time
    E { tag: Tag(0x0018, 0x0083), alias: "NumberOfAverages", vr: VR::DS }, // Number of Averages
    E { tag: Tag(0x0018, 0x0084), alias: "ImagingFrequency", vr: VR::DS }, // Imaging Frequency
    E { tag: Tag(0x0018, 0x0085), alias: "ImagedNucleus", vr: VR::SH }, // Imaged Nucleus
    E { tag: Tag(0x0018, 0x0086), alias: "EchoNumbers", vr: VR::IS }, // Echo Number(s)
    E { tag: Tag(0x0018, 0x0087), alias: "MagneticFieldStrength", vr: VR::DS }, // Magnetic Field Strength
    E { tag: Tag(0x0018, 0x0088), alias: "SpacingBetweenSlices", vr: VR::DS }, // Spacing Between Slices
    E { tag: Tag(0x0018, 0x0089), alias: "NumberOfPhaseEncodingSteps", vr: VR::IS }, // Number of Phase Encoding Steps
    E { tag: Tag(0x0018, 0x0090), alias: "DataCollectionDiameter", vr: VR::DS }, // Data Collection Diameter
    E { tag: Tag(0x0018, 0x0091), alias: "EchoTrainLength", vr: VR::IS }, // Echo Train Length
    E { tag: Tag(0x0018, 0x0093), alias: "PercentSampling", vr: VR::DS }, // Percent Sampling
    E { tag: Tag(0x0018, 0x0094), alias: "PercentPhaseFieldOfView", vr: VR::DS }, // Percent Phase Field of View
    E { tag: Tag(0x0018, 0x0095), alias: "PixelBandwidth", vr: VR::DS }, // Pixel Bandwidth
    E { tag: Tag(0x0018, 0x1000), alias: "DeviceSerialNumber", vr: VR::LO }, // Device Serial Number
    E { tag: Tag(0x0018, 0x1004), alias: "PlateID", vr: VR::LO }, // Plate ID
    E { tag: Tag(0x0018, 0x1012), alias: "DateOfSecondaryCapture", vr: VR::DA }, // Date of Secondary Capture
    E { tag: Tag(0x0018, 0x1014), alias: "TimeOfSecondaryCapture", vr: VR::TM }, // Time of Secondary Capture
    E { tag: Tag(0x0018, 0x1016), alias: "SecondaryCaptureDeviceManufacturer", vr: VR::LO }, // Secondary Capture Device Manufacturer
    E { tag: Tag(0x0018, 0x1018), alias: "SecondaryCaptureDeviceManufacturerModelName", vr: VR::LO }, // Secondary Capture Device Manufacturer's Model Name
    E { tag: Tag(0x0018, 0x1019), alias: "SecondaryCaptureDeviceSoftwareVersions", vr: VR::LO }, // Secondary Capture Device Software Versions
    E { tag: Tag(0x0018, 0x1020), alias: "SoftwareVersions", vr: VR::LO }, // Software Versions
    E { tag: Tag(0x0018, 0x1030), alias: "ProtocolName", vr: VR::LO }, // Protocol Name
    E { tag: Tag(0x0018, 0x1063), alias: "FrameTime", vr: VR::DS }, // Frame Time
    E { tag: Tag(0x0018, 0x1065), alias: "FrameTimeVector", vr: VR::DS }, // Frame Time Vector
    E { tag: Tag(0x0018, 0x1088), alias: "HeartRate", vr: VR::IS }, // Heart Rate
    E { tag: Tag(0x0018, 0x1100), alias: "ReconstructionDiameter", vr: VR::DS }, // Reconstruction Diameter
    E { tag: Tag(0x0018, 0x1110), alias: "DistanceSourceToDetector", vr: VR::DS }, // Distance Source to Detector
    E { tag: Tag(0x0018, 0x1111), alias: "DistanceSourceToPatient", vr: VR::DS }, // Distance Source to Patient
    E { tag: Tag(0x0018, 0x1120), alias: "GantryDetectorTilt", vr: VR::DS }, // Gantry/Detector Tilt
    E { tag: Tag(0x0018, 0x1130), alias: "TableHeight", vr: VR::DS }, // Table Height
    E { tag: Tag(0x0018, 0x1140), alias: "RotationDirection", vr: VR::CS }, // Rotation Direction
    E { tag: Tag(0x0018, 0x1150), alias: "ExposureTime", vr: VR::IS }, // Exposure Time
    E { tag: Tag(0x0018, 0x1151), alias: "XRayTubeCurrent", vr: VR::IS }, // X-Ray Tube Current
    E { tag: Tag(0x0018, 0x1152), alias: "Exposure", vr: VR::IS }, // Exposure
    E { tag: Tag(0x0018, 0x1160), alias: "FilterType", vr: VR::SH }, // Filter Type
    E { tag: Tag(0x0018, 0x1164), alias: "ImagerPixelSpacing", vr: VR::DS }, // Imager Pixel Spacing
    E { tag: Tag(0x0018, 0x1170), alias: "GeneratorPower", vr: VR::IS }, // Generator Power
    E { tag: Tag(0x0018, 0x1190), alias: "FocalSpots", vr: VR::DS }, // Focal Spot(s)
    E { tag: Tag(0x0018, 0x1200), alias: "DateOfLastCalibration", vr: VR::DA }, // Date of Last Calibration
    E { tag: Tag(0x0018, 0x1201), alias: "TimeOfLastCalibration", vr: VR::TM }, // Time of Last Calibration
    E { tag: Tag(0x0018, 0x1210), alias: "ConvolutionKernel", vr: VR::SH }, // Convolution Kernel
    E { tag: Tag(0x0018, 0x1250), alias: "ReceiveCoilName", vr: VR::SH }, // Receive Coil Name
    E { tag: Tag(0x0018, 0x1251), alias: "TransmitCoilName", vr: VR::SH }, // Transmit Coil Name
    E { tag: Tag(0x0018, 0x1310), alias: "AcquisitionMatrix", vr: VR::US }, // Acquisition Matrix
    E { tag: Tag(0x0018, 0x1312), alias: "InPlanePhaseEncodingDirection", vr: VR::CS }, // In-plane Phase Encoding Direction
    E { tag: Tag(0x0018, 0x1314), alias: "FlipAngle", vr: VR::DS }, // Flip Angle
    E { tag: Tag(0x0018, 0x1316), alias: "SAR", vr: VR::DS }, // SAR
    E { tag: Tag(0x0018, 0x5010), alias: "TransducerData", vr: VR::LO }, // Transducer Data
    E { tag: Tag(0x0018, 0x5100), alias: "PatientPosition", vr: VR::CS }, // Patient Position
    E { tag: Tag(0x0018, 0x5101), alias: "ViewPosition", vr: VR::CS }, // View Position
    E { tag: Tag(0x0018, 0x6011), alias: "SequenceOfUltrasoundRegions", vr: VR::SQ }, // Sequence of Ultrasound Regions
    E { tag: Tag(0x0018, 0x9004), alias: "ContentQualification", vr: VR::CS }, // Content Qualification
    E { tag: Tag(0x0018, 0x9073), alias: "AcquisitionDuration", vr: VR::FD }, // Acquisition Duration
    E { tag: Tag(0x0020, 0x000D), alias: "StudyInstanceUID", vr: VR::UI }, // Study Instance UID
    E { tag: Tag(0x0020, 0x000E), alias: "SeriesInstanceUID", vr: VR::UI }, // Series Instance UID
    E { tag: Tag(0x0020, 0x0010), alias: "StudyID", vr: VR::SH }, // Study ID
    E { tag: Tag(0x0020, 0x0011), alias: "SeriesNumber", vr: VR::IS }, // Series Number
    E { tag: Tag(0x0020, 0x0012), alias: "AcquisitionNumber", vr: VR::IS }, // Acquisition Number
    E { tag: Tag(0x0020, 0x0013), alias: "InstanceNumber", vr: VR::IS }, // Instance Number
    E { tag: Tag(0x0020, 0x0019), alias: "ItemNumber", vr: VR::IS }, // Item Number
    E { tag: Tag(0x0020, 0x0020), alias: "PatientOrientation", vr: VR::CS }, // Patient Orientation
    E { tag: Tag(0x0020, 0x0032), alias: "ImagePositionPatient", vr: VR::DS }, // Image Position (Patient)
    E { tag: Tag(0x0020, 0x0037), alias: "ImageOrientationPatient", vr: VR::DS }, // Image Orientation (Patient)
    E { tag: Tag(0x0020, 0x0052), alias: "FrameOfReferenceUID", vr: VR::UI }, // Frame of Reference UID
    E { tag: Tag(0x0020, 0x0060), alias: "Laterality", vr: VR::CS }, // Laterality
    E { tag: Tag(0x0020, 0x0062), alias: "ImageLaterality", vr: VR::CS }, // Image Laterality
    E { tag: Tag(0x0020, 0x0100), alias: "TemporalPositionIdentifier", vr: VR::IS }, // Temporal Position Identifier
    E { tag: Tag(0x0020, 0x0105), alias: "NumberOfTemporalPositions", vr: VR::IS }, // Number of Temporal Positions
    E { tag: Tag(0x0020, 0x0200), alias: "SynchronizationFrameOfReferenceUID", vr: VR::UI }, // Synchronization Frame of Reference UID
    E { tag: Tag(0x0020, 0x1002), alias: "ImagesInAcquisition", vr: VR::IS }, // Images in Acquisition
    E { tag: Tag(0x0020, 0x1040), alias: "PositionReferenceIndicator", vr: VR::LO }, // Position Reference Indicator
    E { tag: Tag(0x0020, 0x1041), alias: "SliceLocation", vr: VR::DS }, // Slice Location
    E { tag: Tag(0x0020, 0x4000), alias: "ImageComments", vr: VR::LT }, // Image Comments
    E { tag: Tag(0x0020, 0x9056), alias: "StackID", vr: VR::SH }, // Stack ID
    E { tag: Tag(0x0020, 0x9057), alias: "InStackPositionNumber", vr: VR::UL }, // In-Stack Position Number
    E { tag: Tag(0x0020, 0x9071), alias: "FrameAnatomySequence", vr: VR::SQ }, // Frame Anatomy Sequence
    E { tag: Tag(0x0020, 0x9111), alias: "FrameContentSequence", vr: VR::SQ }, // Frame Content Sequence
    E { tag: Tag(0x0020, 0x9113), alias: "PlanePositionSequence", vr: VR::SQ }, // Plane Position Sequence
    E { tag: Tag(0x0020, 0x9116), alias: "PlaneOrientationSequence", vr: VR::SQ }, // Plane Orientation Sequence
    E { tag: Tag(0x0020, 0x9128), alias: "TemporalPositionIndex", vr: VR::UL }, // Temporal Position Index
    E { tag: Tag(0x0020, 0x9157), alias: "DimensionIndexValues", vr: VR::UL }, // Dimension Index Values
    E { tag: Tag(0x0020, 0x9164), alias: "DimensionOrganizationUID", vr: VR::UI }, // Dimension Organization UID
    E { tag: Tag(0x0020, 0x9165), alias: "DimensionIndexPointer", vr: VR::AT }, // Dimension Index Pointer
    E { tag: Tag(0x0020, 0x9167), alias: "FunctionalGroupPointer", vr: VR::AT }, // Functional Group Pointer
    E { tag: Tag(0x0020, 0x9221), alias: "DimensionOrganizationSequence", vr: VR::SQ }, // Dimension Organization Sequence
    E { tag: Tag(0x0020, 0x9222), alias: "DimensionIndexSequence", vr: VR::SQ }, // Dimension Index Sequence
    E { tag: Tag(0x0020, 0x9421), alias: "DimensionDescriptionLabel", vr: VR::LO }, // Dimension Description Label
    E { tag: Tag(0x0028, 0x0002), alias: "SamplesPerPixel", vr: VR::US }, // Samples per Pixel
    E { tag: Tag(0x0028, 0x0004), alias: "PhotometricInterpretation", vr: VR::CS }, // Photometric Interpretation
    E { tag: Tag(0x0028, 0x0006), alias: "PlanarConfiguration", vr: VR::US }, // Planar Configuration
    E { tag: Tag(0x0028, 0x0008), alias: "NumberOfFrames", vr: VR::IS }, // Number of Frames
    E { tag: Tag(0x0028, 0x0009), alias: "FrameIncrementPointer", vr: VR::AT }, // Frame Increment Pointer
    E { tag: Tag(0x0028, 0x0010), alias: "Rows", vr: VR::US }, // Rows
    E { tag: Tag(0x0028, 0x0011), alias: "Columns", vr: VR::US }, // Columns
    E { tag: Tag(0x0028, 0x0030), alias: "PixelSpacing", vr: VR::DS }, // Pixel Spacing
    E { tag: Tag(0x0028, 0x0034), alias: "PixelAspectRatio", vr: VR::IS }, // Pixel Aspect Ratio
    E { tag: Tag(0x0028, 0x0100), alias: "BitsAllocated", vr: VR::US }, // Bits Allocated
    E { tag: Tag(0x0028, 0x0101), alias: "BitsStored", vr: VR::US }, // Bits Stored
    E { tag: Tag(0x0028, 0x0102), alias: "HighBit", vr: VR::US }, // High Bit
    E { tag: Tag(0x0028, 0x0103), alias: "PixelRepresentation", vr: VR::US }, // Pixel Representation
    E { tag: Tag(0x0028, 0x0106), alias: "SmallestImagePixelValue", vr: VR::US }, // Smallest Image Pixel Value
    E { tag: Tag(0x0028, 0x0107), alias: "LargestImagePixelValue", vr: VR::US }, // Largest Image Pixel Value
    E { tag: Tag(0x0028, 0x0120), alias: "PixelPaddingValue", vr: VR::US }, // Pixel Padding Value
    E { tag: Tag(0x0028, 0x0300), alias: "QualityControlImage", vr: VR::CS }, // Quality Control Image
    E { tag: Tag(0x0028, 0x0301), alias: "BurnedInAnnotation", vr: VR::CS }, // Burned In Annotation
    E { tag: Tag(0x0028, 0x0302), alias: "RecognizableVisualFeatures", vr: VR::CS }, // Recognizable Visual Features
    E { tag: Tag(0x0028, 0x1040), alias: "PixelIntensityRelationship", vr: VR::CS }, // Pixel Intensity Relationship
    E { tag: Tag(0x0028, 0x1041), alias: "PixelIntensityRelationshipSign", vr: VR::SS }, // Pixel Intensity Relationship Sign
    E { tag: Tag(0x0028, 0x1050), alias: "WindowCenter", vr: VR::DS }, // Window Center
    E { tag: Tag(0x0028, 0x1051), alias: "WindowWidth", vr: VR::DS }, // Window Width
    E { tag: Tag(0x0028, 0x1052), alias: "RescaleIntercept", vr: VR::DS }, // Rescale Intercept
    E { tag: Tag(0x0028, 0x1053), alias: "RescaleSlope", vr: VR::DS }, // Rescale Slope
    E { tag: Tag(0x0028, 0x1054), alias: "RescaleType", vr: VR::LO }, // Rescale Type
    E { tag: Tag(0x0028, 0x1055), alias: "WindowCenterWidthExplanation", vr: VR::LO }, // Window Center & Width Explanation
    E { tag: Tag(0x0028, 0x1056), alias: "VOILUTFunction", vr: VR::CS }, // VOI LUT Function
    E { tag: Tag(0x0028, 0x1101), alias: "RedPaletteColorLookupTableDescriptor", vr: VR::US }, // Red Palette Color Lookup Table Descriptor
    E { tag: Tag(0x0028, 0x1102), alias: "GreenPaletteColorLookupTableDescriptor", vr: VR::US }, // Green Palette Color Lookup Table Descriptor
    E { tag: Tag(0x0028, 0x1103), alias: "BluePaletteColorLookupTableDescriptor", vr: VR::US }, // Blue Palette Color Lookup Table Descriptor
    E { tag: Tag(0x0028, 0x1201), alias: "RedPaletteColorLookupTableData", vr: VR::OW }, // Red Palette Color Lookup Table Data
    E { tag: Tag(0x0028, 0x1202), alias: "GreenPaletteColorLookupTableData", vr: VR::OW }, // Green Palette Color Lookup Table Data
    E { tag: Tag(0x0028, 0x1203), alias: "BluePaletteColorLookupTableData", vr: VR::OW }, // Blue Palette Color Lookup Table Data
    E { tag: Tag(0x0028, 0x2110), alias: "LossyImageCompression", vr: VR::CS }, // Lossy Image Compression
    E { tag: Tag(0x0028, 0x2112), alias: "LossyImageCompressionRatio", vr: VR::DS }, // Lossy Image Compression Ratio
    E { tag: Tag(0x0028, 0x2114), alias: "LossyImageCompressionMethod", vr: VR::CS }, // Lossy Image Compression Method
    E { tag: Tag(0x0028, 0x3000), alias: "ModalityLUTSequence", vr: VR::SQ }, // Modality LUT Sequence
    E { tag: Tag(0x0028, 0x3002), alias: "LUTDescriptor", vr: VR::US }, // LUT Descriptor
    E { tag: Tag(0x0028, 0x3003), alias: "LUTExplanation", vr: VR::LO }, // LUT Explanation
    E { tag: Tag(0x0028, 0x3006), alias: "LUTData", vr: VR::US }, // LUT Data
    E { tag: Tag(0x0028, 0x3010), alias: "VOILUTSequence", vr: VR::SQ }, // VOI LUT Sequence
    E { tag: Tag(0x0028, 0x7FE0), alias: "PixelDataProviderURL", vr: VR::UR }, // Pixel Data Provider URL
    E { tag: Tag(0x0028, 0x9110), alias: "PixelMeasuresSequence", vr: VR::SQ }, // Pixel Measures Sequence
    E { tag: Tag(0x0028, 0x9132), alias: "FrameVOILUTSequence", vr: VR::SQ }, // Frame VOI LUT Sequence
    E { tag: Tag(0x0028, 0x9145), alias: "PixelValueTransformationSequence", vr: VR::SQ }, // Pixel Value Transformation Sequence
    E { tag: Tag(0x0032, 0x1032), alias: "RequestingPhysician", vr: VR::PN }, // Requesting Physician
    E { tag: Tag(0x0032, 0x1060), alias: "RequestedProcedureDescription", vr: VR::LO }, // Requested Procedure Description
    E { tag: Tag(0x0032, 0x1064), alias: "RequestedProcedureCodeSequence", vr: VR::SQ }, // Requested Procedure Code Sequence
    E { tag: Tag(0x003A, 0x0005), alias: "NumberOfWaveformChannels", vr: VR::US }, // Number of Waveform Channels
    E { tag: Tag(0x003A, 0x0010), alias: "NumberOfWaveformSamples", vr: VR::UL }, // Number of Waveform Samples
    E { tag: Tag(0x003A, 0x001A), alias: "SamplingFrequency", vr: VR::DS }, // Sampling Frequency
    E { tag: Tag(0x003A, 0x0020), alias: "MultiplexGroupLabel", vr: VR::SH }, // Multiplex Group Label
    E { tag: Tag(0x003A, 0x0200), alias: "ChannelDefinitionSequence", vr: VR::SQ }, // Channel Definition Sequence
    E { tag: Tag(0x0040, 0x0007), alias: "ScheduledProcedureStepDescription", vr: VR::LO }, // Scheduled Procedure Step Description
    E { tag: Tag(0x0040, 0x0009), alias: "ScheduledProcedureStepID", vr: VR::SH }, // Scheduled Procedure Step ID
    E { tag: Tag(0x0040, 0x0100), alias: "ScheduledProcedureStepSequence", vr: VR::SQ }, // Scheduled Procedure Step Sequence
    E { tag: Tag(0x0040, 0x0244), alias: "PerformedProcedureStepStartDate", vr: VR::DA }, // Performed Procedure Step Start Date
    E { tag: Tag(0x0040, 0x0245), alias: "PerformedProcedureStepStartTime", vr: VR::TM }, // Performed Procedure Step Start Time
    E { tag: Tag(0x0040, 0x0253), alias: "PerformedProcedureStepID", vr: VR::SH }, // Performed Procedure Step ID
    E { tag: Tag(0x0040, 0x0254), alias: "PerformedProcedureStepDescription", vr: VR::LO }, // Performed Procedure Step Description
    E { tag: Tag(0x0040, 0x0260), alias: "PerformedProtocolCodeSequence", vr: VR::SQ }, // Performed Protocol Code Sequence
    E { tag: Tag(0x0040, 0x0275), alias: "RequestAttributesSequence", vr: VR::SQ }, // Request Attributes Sequence
    E { tag: Tag(0x0040, 0x0555), alias: "AcquisitionContextSequence", vr: VR::SQ }, // Acquisition Context Sequence
    E { tag: Tag(0x0040, 0x08EA), alias: "MeasurementUnitsCodeSequence", vr: VR::SQ }, // Measurement Units Code Sequence
    E { tag: Tag(0x0040, 0x1001), alias: "RequestedProcedureID", vr: VR::SH }, // Requested Procedure ID
    E { tag: Tag(0x0040, 0x9096), alias: "RealWorldValueMappingSequence", vr: VR::SQ }, // Real World Value Mapping Sequence
    E { tag: Tag(0x0040, 0xA010), alias: "RelationshipType", vr: VR::CS }, // Relationship Type
    E { tag: Tag(0x0040, 0xA027), alias: "VerifyingOrganization", vr: VR::LO }, // Verifying Organization
    E { tag: Tag(0x0040, 0xA030), alias: "VerificationDateTime", vr: VR::DT }, // Verification DateTime
    E { tag: Tag(0x0040, 0xA032), alias: "ObservationDateTime", vr: VR::DT }, // Observation DateTime
    E { tag: Tag(0x0040, 0xA040), alias: "ValueType", vr: VR::CS }, // Value Type
    E { tag: Tag(0x0040, 0xA043), alias: "ConceptNameCodeSequence", vr: VR::SQ }, // Concept Name Code Sequence
    E { tag: Tag(0x0040, 0xA050), alias: "ContinuityOfContent", vr: VR::CS }, // Continuity Of Content
    E { tag: Tag(0x0040, 0xA073), alias: "VerifyingObserverSequence", vr: VR::SQ }, // Verifying Observer Sequence
    E { tag: Tag(0x0040, 0xA075), alias: "VerifyingObserverName", vr: VR::PN }, // Verifying Observer Name
    E { tag: Tag(0x0040, 0xA088), alias: "VerifyingObserverIdentificationCodeSequence", vr: VR::SQ }, // Verifying Observer Identification Code Sequence
    E { tag: Tag(0x0040, 0xA120), alias: "DateTime", vr: VR::DT }, // DateTime
    E { tag: Tag(0x0040, 0xA121), alias: "Date", vr: VR::DA }, // Date
    E { tag: Tag(0x0040, 0xA122), alias: "Time", vr: VR::TM }, // Time
    E { tag: Tag(0x0040, 0xA123), alias: "PersonName", vr: VR::PN }, // Person Name
    E { tag: Tag(0x0040, 0xA124), alias: "UID", vr: VR::UI }, // UID
    E { tag: Tag(0x0040, 0xA160), alias: "TextValue", vr: VR::UT }, // Text Value
    E { tag: Tag(0x0040, 0xA168), alias: "ConceptCodeSequence", vr: VR::SQ }, // Concept Code Sequence
    E { tag: Tag(0x0040, 0xA300), alias: "MeasuredValueSequence", vr: VR::SQ }, // Measured Value Sequence
    E { tag: Tag(0x0040, 0xA30A), alias: "NumericValue", vr: VR::DS }, // Numeric Value
    E { tag: Tag(0x0040, 0xA370), alias: "ReferencedRequestSequence", vr: VR::SQ }, // Referenced Request Sequence
    E { tag: Tag(0x0040, 0xA372), alias: "PerformedProcedureCodeSequence", vr: VR::SQ }, // Performed Procedure Code Sequence
    E { tag: Tag(0x0040, 0xA375), alias: "CurrentRequestedProcedureEvidenceSequence", vr: VR::SQ }, // Current Requested Procedure Evidence Sequence
    E { tag: Tag(0x0040, 0xA491), alias: "CompletionFlag", vr: VR::CS }, // Completion Flag
    E { tag: Tag(0x0040, 0xA493), alias: "VerificationFlag", vr: VR::CS }, // Verification Flag
    E { tag: Tag(0x0040, 0xA504), alias: "ContentTemplateSequence", vr: VR::SQ }, // Content Template Sequence
    E { tag: Tag(0x0040, 0xA730), alias: "ContentSequence", vr: VR::SQ }, // Content Sequence
    E { tag: Tag(0x0040, 0xDB00), alias: "TemplateIdentifier", vr: VR::CS }, // Template Identifier
    E { tag: Tag(0x0042, 0x0010), alias: "DocumentTitle", vr: VR::ST }, // Document Title
    E { tag: Tag(0x0042, 0x0011), alias: "EncapsulatedDocument", vr: VR::OB }, // Encapsulated Document
    E { tag: Tag(0x0042, 0x0012), alias: "MIMETypeOfEncapsulatedDocument", vr: VR::LO }, // MIME Type of Encapsulated Document
    E { tag: Tag(0x0054, 0x0011), alias: "NumberOfEnergyWindows", vr: VR::US }, // Number of Energy Windows
    E { tag: Tag(0x0054, 0x0016), alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ }, // Radiopharmaceutical Information Sequence
    E { tag: Tag(0x0054, 0x0021), alias: "NumberOfDetectors", vr: VR::US }, // Number of Detectors
    E { tag: Tag(0x0054, 0x0081), alias: "NumberOfSlices", vr: VR::US }, // Number of Slices
    E { tag: Tag(0x0054, 0x1000), alias: "SeriesType", vr: VR::CS }, // Series Type
    E { tag: Tag(0x0054, 0x1001), alias: "Units", vr: VR::CS }, // Units
    E { tag: Tag(0x0054, 0x1002), alias: "CountsSource", vr: VR::CS }, // Counts Source
    E { tag: Tag(0x0054, 0x1102), alias: "DecayCorrection", vr: VR::CS }, // Decay Correction
    E { tag: Tag(0x0070, 0x0001), alias: "GraphicAnnotationSequence", vr: VR::SQ }, // Graphic Annotation Sequence
    E { tag: Tag(0x0070, 0x005A), alias: "DisplayedAreaSelectionSequence", vr: VR::SQ }, // Displayed Area Selection Sequence
    E { tag: Tag(0x0070, 0x0080), alias: "ContentLabel", vr: VR::CS }, // Content Label
    E { tag: Tag(0x0070, 0x0081), alias: "ContentDescription", vr: VR::LO }, // Content Description
    E { tag: Tag(0x0070, 0x0082), alias: "PresentationCreationDate", vr: VR::DA }, // Presentation Creation Date
    E { tag: Tag(0x0070, 0x0083), alias: "PresentationCreationTime", vr: VR::TM }, // Presentation Creation Time
    E { tag: Tag(0x0070, 0x0084), alias: "ContentCreatorName", vr: VR::PN }, // Content Creator's Name
    E { tag: Tag(0x0088, 0x0130), alias: "StorageMediaFileSetID", vr: VR::SH }, // Storage Media File-set ID
    E { tag: Tag(0x0088, 0x0140), alias: "StorageMediaFileSetUID", vr: VR::UI }, // Storage Media File-set UID
    E { tag: Tag(0x0088, 0x0200), alias: "IconImageSequence", vr: VR::SQ }, // Icon Image Sequence
    E { tag: Tag(0x3004, 0x0002), alias: "DoseUnits", vr: VR::CS }, // Dose Units
    E { tag: Tag(0x3004, 0x0004), alias: "DoseType", vr: VR::CS }, // Dose Type
    E { tag: Tag(0x3004, 0x000A), alias: "DoseSummationType", vr: VR::CS }, // Dose Summation Type
    E { tag: Tag(0x3004, 0x000C), alias: "GridFrameOffsetVector", vr: VR::DS }, // Grid Frame Offset Vector
    E { tag: Tag(0x3004, 0x000E), alias: "DoseGridScaling", vr: VR::DS }, // Dose Grid Scaling
    E { tag: Tag(0x3006, 0x0002), alias: "StructureSetLabel", vr: VR::SH }, // Structure Set Label
    E { tag: Tag(0x3006, 0x0004), alias: "StructureSetName", vr: VR::LO }, // Structure Set Name
    E { tag: Tag(0x3006, 0x0006), alias: "StructureSetDescription", vr: VR::ST }, // Structure Set Description
    E { tag: Tag(0x3006, 0x0008), alias: "StructureSetDate", vr: VR::DA }, // Structure Set Date
    E { tag: Tag(0x3006, 0x0009), alias: "StructureSetTime", vr: VR::TM }, // Structure Set Time
    E { tag: Tag(0x3006, 0x0010), alias: "ReferencedFrameOfReferenceSequence", vr: VR::SQ }, // Referenced Frame of Reference Sequence
    E { tag: Tag(0x3006, 0x0020), alias: "StructureSetROISequence", vr: VR::SQ }, // Structure Set ROI Sequence
    E { tag: Tag(0x3006, 0x0022), alias: "ROINumber", vr: VR::IS }, // ROI Number
    E { tag: Tag(0x3006, 0x0024), alias: "ReferencedFrameOfReferenceUID", vr: VR::UI }, // Referenced Frame of Reference UID
    E { tag: Tag(0x3006, 0x0026), alias: "ROIName", vr: VR::LO }, // ROI Name
    E { tag: Tag(0x3006, 0x002A), alias: "ROIDisplayColor", vr: VR::IS }, // ROI Display Color
    E { tag: Tag(0x3006, 0x0036), alias: "ROIGenerationAlgorithm", vr: VR::CS }, // ROI Generation Algorithm
    E { tag: Tag(0x3006, 0x0039), alias: "ROIContourSequence", vr: VR::SQ }, // ROI Contour Sequence
    E { tag: Tag(0x3006, 0x0040), alias: "ContourSequence", vr: VR::SQ }, // Contour Sequence
    E { tag: Tag(0x3006, 0x0042), alias: "ContourGeometricType", vr: VR::CS }, // Contour Geometric Type
    E { tag: Tag(0x3006, 0x0046), alias: "NumberOfContourPoints", vr: VR::IS }, // Number of Contour Points
    E { tag: Tag(0x3006, 0x0050), alias: "ContourData", vr: VR::DS }, // Contour Data
    E { tag: Tag(0x3006, 0x0080), alias: "RTROIObservationsSequence", vr: VR::SQ }, // RT ROI Observations Sequence
    E { tag: Tag(0x3006, 0x0084), alias: "ReferencedROINumber", vr: VR::IS }, // Referenced ROI Number
    E { tag: Tag(0x3006, 0x00A4), alias: "RTROIInterpretedType", vr: VR::CS }, // RT ROI Interpreted Type
    E { tag: Tag(0x300A, 0x0002), alias: "RTPlanLabel", vr: VR::SH }, // RT Plan Label
    E { tag: Tag(0x300A, 0x0003), alias: "RTPlanName", vr: VR::LO }, // RT Plan Name
    E { tag: Tag(0x300A, 0x0004), alias: "RTPlanDescription", vr: VR::ST }, // RT Plan Description
    E { tag: Tag(0x300A, 0x0006), alias: "RTPlanDate", vr: VR::DA }, // RT Plan Date
    E { tag: Tag(0x300A, 0x0007), alias: "RTPlanTime", vr: VR::TM }, // RT Plan Time
    E { tag: Tag(0x300A, 0x000C), alias: "RTPlanGeometry", vr: VR::CS }, // RT Plan Geometry
    E { tag: Tag(0x300A, 0x0070), alias: "FractionGroupSequence", vr: VR::SQ }, // Fraction Group Sequence
    E { tag: Tag(0x300A, 0x00B0), alias: "BeamSequence", vr: VR::SQ }, // Beam Sequence
    E { tag: Tag(0x300A, 0x00C0), alias: "BeamNumber", vr: VR::IS }, // Beam Number
    E { tag: Tag(0x300A, 0x00C2), alias: "BeamName", vr: VR::LO }, // Beam Name
    E { tag: Tag(0x300A, 0x00C4), alias: "BeamType", vr: VR::CS }, // Beam Type
    E { tag: Tag(0x300A, 0x00C6), alias: "RadiationType", vr: VR::CS }, // Radiation Type
    E { tag: Tag(0x300C, 0x0002), alias: "ReferencedRTPlanSequence", vr: VR::SQ }, // Referenced RT Plan Sequence
    E { tag: Tag(0x300C, 0x0060), alias: "ReferencedStructureSetSequence", vr: VR::SQ }, // Referenced Structure Set Sequence
    E { tag: Tag(0x300E, 0x0002), alias: "ApprovalStatus", vr: VR::CS }, // Approval Status
    E { tag: Tag(0x300E, 0x0004), alias: "ReviewDate", vr: VR::DA }, // Review Date
    E { tag: Tag(0x300E, 0x0005), alias: "ReviewTime", vr: VR::TM }, // Review Time
    E { tag: Tag(0x300E, 0x0008), alias: "ReviewerName", vr: VR::PN }, // Reviewer Name
    E { tag: Tag(0x5200, 0x9229), alias: "SharedFunctionalGroupsSequence", vr: VR::SQ }, // Shared Functional Groups Sequence
    E { tag: Tag(0x5200, 0x9230), alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ }, // Per-frame Functional Groups Sequence
    E { tag: Tag(0x5400, 0x0100), alias: "WaveformSequence", vr: VR::SQ }, // Waveform Sequence
    E { tag: Tag(0x5400, 0x1004), alias: "WaveformBitsAllocated", vr: VR::US }, // Waveform Bits Allocated
    E { tag: Tag(0x5400, 0x1006), alias: "WaveformSampleInterpretation", vr: VR::CS }, // Waveform Sample Interpretation
    E { tag: Tag(0x5400, 0x1010), alias: "WaveformData", vr: VR::OW }, // Waveform Data
    E { tag: Tag(0x7FE0, 0x0001), alias: "ExtendedOffsetTable", vr: VR::OV }, // Extended Offset Table
    E { tag: Tag(0x7FE0, 0x0002), alias: "ExtendedOffsetTableLengths", vr: VR::OV }, // Extended Offset Table Lengths
    E { tag: Tag(0x7FE0, 0x0010), alias: "PixelData", vr: VR::OB }, // Pixel Data
];
