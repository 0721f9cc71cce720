//! Shared helpers for integration tests.
//!
//! Provides a command builder for the `webp-convert` binary and a writer for
//! small lossless WebP fixtures, so tests never depend on checked-in media.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

/// Path to the compiled `webp-convert` binary.
#[allow(deprecated)]
pub fn bin_path() -> PathBuf {
    assert_cmd::cargo::cargo_bin("webp-convert")
}

/// A command for the binary with logging pinned to a quiet level.
pub fn webp_convert_cmd() -> Command {
    let mut cmd = Command::new(bin_path());
    cmd.env("RUST_LOG", "webp_convert=warn");
    cmd
}

/// Write a `width`x`height` lossless WebP image to `path`.
pub fn write_webp(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, ImageFormat::WebP)
        .expect("failed to write webp fixture");
}

/// Names of all entries in `dir`, sorted.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("failed to read dir")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
