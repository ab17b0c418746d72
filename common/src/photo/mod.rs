//! Photo pipeline: validation of the uploaded file, interactive crop
//! selection, the crop dialog session and the crop/encode step.

pub mod crop;
pub mod selection;
pub mod session;
pub mod validator;

use base64::{Engine as _, engine::general_purpose};

pub use crop::{CropGeometry, CropPlan, CropRect, Size, crop_photo, plan_crop};
pub use selection::CropSelection;
pub use session::{CropJob, CropSession, PendingUpload};
pub use validator::{FileDescriptor, validate_upload};

/// Builds a `data:` URI that can be used directly as an image source.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}
