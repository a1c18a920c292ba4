//! The conversion driver: image paths in, folded PHOTO properties out.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::RunConfig;
use crate::debug;
use crate::image::{ImageService, PhotoError, PhotoReader};
use crate::logger;
use crate::vcard::Property;

/// Convert every input path and write the folded properties to stdout.
pub fn run(config: &RunConfig, paths: &[PathBuf]) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    convert_all(config, paths, &PhotoReader, &mut out)?;
    out.flush().context("failed to write standard output")?;
    Ok(())
}

/// Process paths in argument order. Access failures warn and skip the file;
/// anything else aborts the batch.
fn convert_all<S, W>(config: &RunConfig, paths: &[PathBuf], images: &S, out: &mut W) -> Result<()>
where
    S: ImageService,
    W: Write,
{
    match config.resize {
        Some(bounds) => debug!("convert"; "resizing photos to fit {bounds}"),
        None => debug!("convert"; "resizing disabled, embedding original bytes"),
    }

    for path in paths {
        if !path.is_file() {
            logger::warning(&format!("cannot access {}: No such file", path.display()));
            continue;
        }

        let property = match read_property(config, images, path) {
            Ok(property) => property,
            Err(PhotoError::Access(source)) => {
                logger::warning(&format!("cannot access {}: {source}", path.display()));
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to convert {}", path.display()));
            }
        };

        property
            .write_folded(out)
            .context("failed to write standard output")?;
        // Blank separator line after each property block
        out.write_all(b"\n")
            .context("failed to write standard output")?;
    }

    Ok(())
}

/// Detect the format and build the PHOTO property for one file.
fn read_property<S: ImageService>(
    config: &RunConfig,
    images: &S,
    path: &Path,
) -> Result<Property, PhotoError> {
    let format = images.detect_format(path)?;
    debug!("convert"; "{}: {format} image", path.display());

    let data = images.read_photo(path, format, config.resize)?;
    debug!("convert"; "{}: {} payload bytes", path.display(), data.len());

    Ok(Property::photo(format.as_str(), &data))
}
