//! Webp-Convert-Common: Shared types and path utilities.
//!
//! This crate provides the pieces of webp-convert that have no I/O:
//!
//! - **Output formats**: The validated [`OutputFormat`] enum and its parsing rules
//! - **Requests**: [`ConversionRequest`], one per conversion
//! - **Path Utilities**: Output placement derived from an input path
//!
//! # Examples
//!
//! ```
//! use webp_convert_common::OutputFormat;
//! use webp_convert_common::paths::resolve_output_location;
//!
//! let format: OutputFormat = "jpg".parse().unwrap();
//! let location = resolve_output_location("photos/cat.webp").unwrap();
//!
//! assert_eq!(
//!     location.output_path(format),
//!     std::path::PathBuf::from("photos/cat.jpg")
//! );
//! ```

pub mod paths;
pub mod types;

pub use paths::ResolvedOutputLocation;
pub use types::*;
