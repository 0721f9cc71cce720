//! Mode selection: one-shot conversion or directory watching.

use std::path::PathBuf;

use webp_convert_common::OutputFormat;

use crate::config::Config;
use crate::error::ConversionError;

/// The two mutually exclusive ways of running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Convert one file and exit.
    OneShot(PathBuf),
    /// Watch a directory until cancelled.
    Watch(PathBuf),
}

/// A validated invocation: what to do and which format to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub format: OutputFormat,
}

impl Invocation {
    /// Validate raw flag values against each other and the loaded config.
    pub fn from_args(
        input: Option<PathBuf>,
        watch: Option<PathBuf>,
        output_type: Option<&str>,
        config: &Config,
    ) -> Result<Self, ConversionError> {
        Ok(Self {
            mode: select_mode(input, watch)?,
            format: resolve_format(output_type, config.output_type)?,
        })
    }
}

/// Exactly one of `input` and `watch` must be given. Empty paths count as
/// not given.
pub fn select_mode(
    input: Option<PathBuf>,
    watch: Option<PathBuf>,
) -> Result<Mode, ConversionError> {
    let input = input.filter(|p| !p.as_os_str().is_empty());
    let watch = watch.filter(|p| !p.as_os_str().is_empty());

    match (input, watch) {
        (Some(input), None) => Ok(Mode::OneShot(input)),
        (None, Some(watch)) => Ok(Mode::Watch(watch)),
        (Some(_), Some(_)) => Err(ConversionError::configuration(
            "You cannot specify both -watch and -input",
        )),
        (None, None) => Err(ConversionError::configuration(
            "You need to specify one of -watch or -input",
        )),
    }
}

/// Flag value wins over the config file, which wins over PNG.
pub fn resolve_format(
    flag: Option<&str>,
    configured: Option<OutputFormat>,
) -> Result<OutputFormat, ConversionError> {
    match flag.filter(|s| !s.trim().is_empty()) {
        Some(value) => value
            .parse::<OutputFormat>()
            .map_err(|e| ConversionError::configuration(e.to_string())),
        None => Ok(configured.unwrap_or_default()),
    }
}
