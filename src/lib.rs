//! webp-convert - WebP to PNG/JPEG conversion
//!
//! This library crate exposes the conversion engine, the directory watch
//! loop and mode selection for the `webp-convert` binary and for
//! integration testing.

pub mod config;
pub mod convert;
pub mod error;
pub mod mode;
pub mod watch;

pub use convert::{convert, convert_file};
pub use error::{ConversionError, WatchError};
