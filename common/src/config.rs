//! Compile-time defaults for the photo pipeline.

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types that may proceed past the file input.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/heic",
    "image/heif",
];

/// Longer side of the encoded photo, in pixels.
pub const MAX_OUTPUT_DIMENSION: u32 = 400;

/// JPEG quality on a 0-100 scale (0.92 in canvas terms).
pub const JPEG_QUALITY: u8 = 92;

/// Rules checked by the image validator before any bytes are read.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub max_file_size: u64,
    pub accepted_types: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            accepted_types: ACCEPTED_IMAGE_TYPES,
        }
    }
}

/// Parameters of the crop dialog and of the crop transformer.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSettings {
    /// Bound applied to the longer side of the output raster.
    pub max_dimension: u32,
    pub jpeg_quality: u8,
    /// Smallest side the square selection may shrink to, in displayed pixels.
    pub min_selection: f64,
    /// Share of the shorter displayed side covered by the initial selection.
    pub initial_selection_ratio: f64,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            max_dimension: MAX_OUTPUT_DIMENSION,
            jpeg_quality: JPEG_QUALITY,
            min_selection: 16.0,
            initial_selection_ratio: 0.9,
        }
    }
}
