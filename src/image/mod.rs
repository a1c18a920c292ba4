//! Image capabilities: format detection, resizing, payload extraction.
//!
//! The conversion pipeline reaches images only through [`ImageService`];
//! [`PhotoReader`] is the `image`-crate-backed implementation.

mod service;

pub use service::PhotoReader;

use std::fmt;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::config::Geometry;

/// Errors from the image capability layer.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// The file could not be opened or read. Recoverable: the conversion
    /// loop warns and moves on to the next input.
    #[error("{0}")]
    Access(#[from] std::io::Error),

    #[error("unrecognized image format in `{0}`")]
    UnknownFormat(PathBuf),

    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("failed to re-encode `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),
}

// ============================================================================
// FormatTag
// ============================================================================

/// The sniffed image format, printed as the lowercase `TYPE` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTag(ImageFormat);

impl FormatTag {
    pub(crate) fn new(format: ImageFormat) -> Self {
        Self(format)
    }

    /// Lowercase tag for the `TYPE` parameter: `jpeg` (not the `jpg` file
    /// extension), `png`, `gif`, ...
    pub fn as_str(self) -> &'static str {
        let mime = self.0.to_mime_type();
        mime.strip_prefix("image/").unwrap_or(mime)
    }

    pub(crate) fn image_format(self) -> ImageFormat {
        self.0
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ImageService
// ============================================================================

/// Narrow interface over the image operations the converter needs.
pub trait ImageService {
    /// Sniffs the image format from file content, never from the extension.
    fn detect_format(&self, path: &Path) -> Result<FormatTag, PhotoError>;

    /// Returns the photo payload: resized to fit `resize` and re-encoded in
    /// `format` when a bounding box is given, the original file bytes
    /// unchanged otherwise.
    fn read_photo(
        &self,
        path: &Path,
        format: FormatTag,
        resize: Option<Geometry>,
    ) -> Result<Vec<u8>, PhotoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_tags_are_lowercase_names() {
        assert_eq!(FormatTag::new(ImageFormat::Jpeg).as_str(), "jpeg");
        assert_eq!(FormatTag::new(ImageFormat::Png).as_str(), "png");
        assert_eq!(FormatTag::new(ImageFormat::Gif).as_str(), "gif");
        assert_eq!(FormatTag::new(ImageFormat::WebP).as_str(), "webp");
    }
}
