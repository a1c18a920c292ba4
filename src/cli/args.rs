//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::{DEFAULT_GEOMETRY, Geometry};

/// Convert images into base64-encoded vCard 3.0 PHOTO properties
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Bounding box the photo is resized to fit, preserving aspect ratio
    #[arg(
        short = 'r',
        long,
        value_name = "WIDTHxHEIGHT",
        default_value_t = DEFAULT_GEOMETRY,
        conflicts_with = "no_resize"
    )]
    pub resize: Geometry,

    /// Embed the image data unchanged, without resizing
    #[arg(short = 'R', long)]
    pub no_resize: bool,

    /// Emit progress messages to the error stream
    #[arg(short, long)]
    pub verbose: bool,

    /// Image files to convert
    #[arg(value_name = "PATH", required = true, value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}
