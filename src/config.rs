//! Run configuration, built once from the parsed command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cli::Cli;

/// Default bounding box for resized photos.
pub const DEFAULT_GEOMETRY: Geometry = Geometry {
    width: 96,
    height: 96,
};

// ============================================================================
// Geometry
// ============================================================================

/// A `WIDTHxHEIGHT` bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

/// Errors from parsing a `WIDTHxHEIGHT` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("expected WIDTHxHEIGHT, got `{0}`")]
    Malformed(String),

    #[error("invalid dimension `{0}`")]
    Dimension(String),

    #[error("dimensions must be non-zero")]
    Zero,
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| GeometryError::Malformed(s.to_string()))?;
        let width: u32 = width
            .parse()
            .map_err(|_| GeometryError::Dimension(width.to_string()))?;
        let height: u32 = height
            .parse()
            .map_err(|_| GeometryError::Dimension(height.to_string()))?;
        if width == 0 || height == 0 {
            return Err(GeometryError::Zero);
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ============================================================================
// RunConfig
// ============================================================================

/// Immutable per-run options, passed by reference into the conversion loop.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Bounding box photos are resized to fit; `None` embeds the original
    /// file bytes unchanged.
    pub resize: Option<Geometry>,
    pub verbose: bool,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            resize: (!cli.no_resize).then_some(cli.resize),
            verbose: cli.verbose,
        }
    }
}
