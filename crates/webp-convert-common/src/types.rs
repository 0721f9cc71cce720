//! Core type definitions for conversion requests and output formats.
//!
//! Output formats are parsed case-insensitively and validated up front, so an
//! unrecognized value is reported as a configuration problem instead of
//! silently selecting a format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fixed JPEG quality factor used for every JPEG conversion.
pub const JPEG_QUALITY: u8 = 90;

/// Target raster format of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Lossless PNG with default encoder settings.
    #[default]
    Png,
    /// Baseline JPEG at [`JPEG_QUALITY`].
    Jpeg,
}

impl OutputFormat {
    /// File extension (without the dot) written for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPEG"),
        }
    }
}

/// Error returned when an output format string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported output type '{0}' (expected PNG or JPG)")]
pub struct ParseFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PNG" => Ok(Self::Png),
            "JPG" | "JPEG" => Ok(Self::Jpeg),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ParseFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}

/// A single conversion of one WebP file into one target format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    input: PathBuf,
    format: OutputFormat,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            input: input.into(),
            format,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
