//! Client-side validation of files picked for upload.
//!
//! Validation runs before any request is built, so a rejected file never
//! reaches the network.

use image::ImageFormat;
use thiserror::Error;

use crate::constants::MAX_UPLOAD_BYTES;

/// MIME types the server accepts.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/bmp", "image/tiff"];

/// Metadata of a file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    /// MIME type reported by the browser (may be empty)
    pub mime: String,
    pub size: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// Reasons a file is rejected before upload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Not one of the accepted image types
    #[error("Unsupported file type '{0}'. Only JPG, PNG, BMP and TIFF files can be uploaded.")]
    UnsupportedType(String),

    /// Larger than [`MAX_UPLOAD_BYTES`]
    #[error("File is too large ({size} bytes). Only files up to 10MB can be uploaded.")]
    TooLarge { size: u64 },
}

/// Check a file against the MIME allow-list and the size limit.
///
/// The browser-reported MIME type decides; an empty type is rejected.
pub fn validate(candidate: &UploadCandidate) -> Result<ImageFormat, UploadError> {
    let format = Some(candidate.mime.as_str())
        .filter(|mime| ALLOWED_MIME_TYPES.contains(mime))
        .and_then(ImageFormat::from_mime_type)
        .filter(is_accepted)
        .ok_or_else(|| UploadError::UnsupportedType(describe_type(candidate)))?;

    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge {
            size: candidate.size,
        });
    }

    Ok(format)
}

fn is_accepted(format: &ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Tiff
    )
}

/// What the rejection message names: the MIME type, or the file name when
/// the browser reported none.
fn describe_type(candidate: &UploadCandidate) -> String {
    if candidate.mime.is_empty() {
        candidate.name.clone()
    } else {
        candidate.mime.clone()
    }
}
