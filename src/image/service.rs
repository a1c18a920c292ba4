//! `image`-crate-backed implementation of the photo capabilities.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};

use super::{FormatTag, ImageService, PhotoError};
use crate::config::Geometry;

/// Production image reader.
///
/// Formats are sniffed from file content; resizing fits the image inside the
/// bounding box without cropping, preserving aspect ratio, and re-encodes in
/// the detected format.
pub struct PhotoReader;

impl ImageService for PhotoReader {
    fn detect_format(&self, path: &Path) -> Result<FormatTag, PhotoError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        reader
            .format()
            .map(FormatTag::new)
            .ok_or_else(|| PhotoError::UnknownFormat(path.to_path_buf()))
    }

    fn read_photo(
        &self,
        path: &Path,
        format: FormatTag,
        resize: Option<Geometry>,
    ) -> Result<Vec<u8>, PhotoError> {
        let Some(bounds) = resize else {
            // Passthrough keeps the original bytes (and any animation frames)
            return Ok(fs::read(path)?);
        };

        let img = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|err| PhotoError::Decode(path.to_path_buf(), err))?;

        encode(fit_to(img, bounds), format, path)
    }
}

/// Fit the image inside the bounding box, preserving aspect ratio.
fn fit_to(img: DynamicImage, bounds: Geometry) -> DynamicImage {
    img.resize(bounds.width, bounds.height, FilterType::Lanczos3)
}

/// Re-encode the image in its detected format.
fn encode(img: DynamicImage, format: FormatTag, path: &Path) -> Result<Vec<u8>, PhotoError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format.image_format())
        .map_err(|err| PhotoError::Encode(path.to_path_buf(), err))?;
    Ok(buf.into_inner())
}
