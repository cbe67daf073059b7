//! The transfer syntaxes known to this library.

use super::DataSetEncoding::*;
use super::PixelEncoding::*;
use super::TransferSyntax;
use dicomkit_dictionary_std::uids;

/// **Fully implemented:** Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    ImplicitVRLittleEndian,
    Native,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    ExplicitVRLittleEndian,
    Native,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = TransferSyntax::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    ExplicitVRBigEndian,
    Native,
);

const fn encapsulated(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax::new(uid, name, ExplicitVRLittleEndian, Encapsulated)
}

/// **Stub descriptor:** Encapsulated Uncompressed Explicit VR Little Endian
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = encapsulated(
    uids::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Encapsulated Uncompressed Explicit VR Little Endian",
);

/// **Stub descriptor:** JPEG Baseline (Process 1)
pub const JPEG_BASELINE: TransferSyntax =
    encapsulated(uids::JPEG_BASELINE8_BIT, "JPEG Baseline (Process 1)");

/// **Stub descriptor:** JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: TransferSyntax =
    encapsulated(uids::JPEG_EXTENDED12_BIT, "JPEG Extended (Process 2 & 4)");

/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = encapsulated(
    uids::JPEG_LOSSLESS,
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_FIRST_ORDER: TransferSyntax = encapsulated(
    uids::JPEG_LOSSLESS_SV1,
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);

/// **Stub descriptor:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS: TransferSyntax =
    encapsulated(uids::JPEG_LS_LOSSLESS, "JPEG-LS Lossless Image Compression");

/// **Stub descriptor:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_NEAR_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEG_LS_NEAR_LOSSLESS,
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
);

/// **Stub descriptor:** JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_LOSSLESS: TransferSyntax = encapsulated(
    uids::JPEG2000_LOSSLESS,
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// **Stub descriptor:** JPEG 2000 Image Compression
pub const JPEG_2000: TransferSyntax = encapsulated(uids::JPEG2000, "JPEG 2000 Image Compression");

/// **Stub descriptor:** High-Throughput JPEG 2000 Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS: TransferSyntax = encapsulated(
    uids::HTJ2K_LOSSLESS,
    "High-Throughput JPEG 2000 Image Compression (Lossless Only)",
);

/// **Stub descriptor:** High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)
pub const HTJ2K_LOSSLESS_RPCL: TransferSyntax = encapsulated(
    uids::HTJ2K_LOSSLESS_RPCL,
    "High-Throughput JPEG 2000 with RPCL Options Image Compression (Lossless Only)",
);

/// **Stub descriptor:** High-Throughput JPEG 2000 Image Compression
pub const HTJ2K: TransferSyntax = encapsulated(
    uids::HTJ2K,
    "High-Throughput JPEG 2000 Image Compression",
);

/// **Stub descriptor:** RLE Lossless
pub const RLE_LOSSLESS: TransferSyntax = encapsulated(uids::RLE_LOSSLESS, "RLE Lossless");

/// All registered transfer syntaxes.
pub(crate) const ALL: &[TransferSyntax] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LOSSLESS_FIRST_ORDER,
    JPEG_LS_LOSSLESS,
    JPEG_LS_NEAR_LOSSLESS,
    JPEG_2000_LOSSLESS,
    JPEG_2000,
    HTJ2K_LOSSLESS,
    HTJ2K_LOSSLESS_RPCL,
    HTJ2K,
    RLE_LOSSLESS,
];
