use crate::config::UploadPolicy;
use crate::error::UploadRejection;

/// What the validator needs to know about a candidate file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    pub mime_type: String,
    pub size: u64,
}

/// Checks a candidate upload before any bytes are read.
///
/// Rules are applied in order: image prefix, size limit, accepted type.
pub fn validate_upload(
    file: &FileDescriptor,
    policy: &UploadPolicy,
) -> Result<(), UploadRejection> {
    let rejection = if !file.mime_type.starts_with("image/") {
        Some(UploadRejection::NotAnImage {
            mime_type: file.mime_type.clone(),
        })
    } else if file.size > policy.max_file_size {
        Some(UploadRejection::TooLarge {
            size: file.size,
            limit: policy.max_file_size,
        })
    } else if !policy.accepted_types.contains(&file.mime_type.as_str()) {
        Some(UploadRejection::UnsupportedFormat {
            mime_type: file.mime_type.clone(),
        })
    } else {
        None
    };

    match rejection {
        Some(rejection) => {
            log::warn!("upload rejected ({:?}): {}", file, rejection);
            Err(rejection)
        }
        None => Ok(()),
    }
}
