//! Path utilities for deriving where a converted image is written.
//!
//! Converted output always lands next to its input. These helpers split an
//! input path into an output directory and a base name; an empty directory
//! means "no prefix", i.e. relative to the current working directory.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::OutputFormat;

/// File name suffix every convertible source must carry. Matching is exact
/// and case-sensitive.
pub const SOURCE_EXTENSION: &str = ".webp";

/// Where the output of one conversion goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputLocation {
    /// Output directory; empty means the current directory.
    pub directory: PathBuf,
    /// File name of the input with [`SOURCE_EXTENSION`] removed.
    pub base_name: OsString,
}

impl ResolvedOutputLocation {
    /// Full output path for the given format, e.g. `photos/cat.png`.
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        let mut name = self.base_name.clone();
        name.push(".");
        name.push(format.extension());
        self.directory.join(name)
    }
}

/// Directory to place output in for a given input path.
///
/// `.` segments are dropped first, so `./incoming/a.webp` resolves to
/// `incoming`. Bare file names, paths made only of `.` segments, and files
/// directly under a filesystem root resolve to the empty path.
///
/// Parent-relative directories are the exception to "relative resolves to
/// empty": `../shared/a.webp` resolves to `../shared`, so the output still
/// lands next to its input instead of in the working directory.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use webp_convert_common::paths::output_directory;
///
/// assert_eq!(output_directory("cat.webp"), PathBuf::new());
/// assert_eq!(output_directory("./cat.webp"), PathBuf::new());
/// assert_eq!(output_directory("/cat.webp"), PathBuf::new());
/// assert_eq!(output_directory("./in/cat.webp"), PathBuf::from("in"));
/// assert_eq!(output_directory("/srv/in/cat.webp"), PathBuf::from("/srv/in"));
/// assert_eq!(output_directory("../in/cat.webp"), PathBuf::from("../in"));
/// ```
pub fn output_directory(path: impl AsRef<Path>) -> PathBuf {
    let Some(parent) = path.as_ref().parent() else {
        return PathBuf::new();
    };

    let dir: PathBuf = parent
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if dir.as_os_str().is_empty() || is_root(&dir) {
        PathBuf::new()
    } else {
        dir
    }
}

/// File name of `path` without the `.webp` suffix, or `None` when the file
/// name does not end in `.webp`.
///
/// Works on the raw file name, so names that are not valid UTF-8 are kept
/// as-is.
///
/// # Examples
///
/// ```
/// use std::ffi::OsStr;
/// use webp_convert_common::paths::base_name;
///
/// assert_eq!(base_name("in/cat.webp").as_deref(), Some(OsStr::new("cat")));
/// assert_eq!(base_name("in/cat.WEBP"), None);
/// assert_eq!(base_name("in/cat.png"), None);
/// ```
pub fn base_name(path: impl AsRef<Path>) -> Option<OsString> {
    let path = path.as_ref();
    let name = path.file_name()?;
    if name == SOURCE_EXTENSION {
        return Some(OsString::new());
    }

    if path.extension()? != SOURCE_EXTENSION.trim_start_matches('.') {
        return None;
    }
    path.file_stem().map(|stem| stem.to_os_string())
}

/// Check if a path names a WebP source file.
pub fn is_webp_path(path: impl AsRef<Path>) -> bool {
    base_name(path).is_some()
}

/// Resolve both the output directory and base name of an input path.
///
/// Returns `None` when the input is not a `.webp` file.
pub fn resolve_output_location(path: impl AsRef<Path>) -> Option<ResolvedOutputLocation> {
    let path = path.as_ref();
    Some(ResolvedOutputLocation {
        base_name: base_name(path)?,
        directory: output_directory(path),
    })
}

fn is_root(dir: &Path) -> bool {
    dir.has_root() && dir.parent().is_none()
}
