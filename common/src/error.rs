use thiserror::Error;

/// Why a candidate file was refused by the image validator.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Le fichier doit être une image")]
    NotAnImage { mime_type: String },

    #[error("L'image ne doit pas dépasser {}MB", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    #[error("Format d'image non supporté. Utilisez JPG, PNG, WebP, HEIC ou HEIF")]
    UnsupportedFormat { mime_type: String },
}

/// Processing failures of the crop workflow. All of them end the current
/// apply; the previously committed photo stays in place.
#[derive(Debug, Error)]
pub enum CropError {
    #[error("aucune image source n'est chargée")]
    MissingSource,

    #[error("la zone de recadrage est vide")]
    EmptyCrop,

    #[error("impossible de créer la surface de dessin: {0}")]
    Surface(#[source] image::ImageError),

    #[error("format d'image non décodable: {0}")]
    Unsupported(#[source] image::ImageError),

    #[error("le rendu de l'image a échoué: {0}")]
    Canvas(String),

    #[error("l'encodage JPEG a échoué: {0}")]
    Encode(#[source] image::ImageError),

    #[error("un recadrage est déjà en cours")]
    Busy,
}

/// Failure of an editor operation on the photo.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error(transparent)]
    Crop(#[from] CropError),
}
