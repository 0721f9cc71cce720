//! Conversion engine: decode one WebP file and re-encode it as PNG or JPEG
//! next to the input.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageError, ImageFormat};
use webp_convert_common::paths::resolve_output_location;
use webp_convert_common::{ConversionRequest, OutputFormat, JPEG_QUALITY};

use crate::error::ConversionError;

/// Convert a single WebP file, returning the path of the written output.
///
/// The output is `{dir}/{base}.png` or `{dir}/{base}.jpg` where `dir` and
/// `base` come from [`resolve_output_location`]. An existing output file is
/// overwritten. Nothing is written when the input is not a `.webp` file or
/// cannot be decoded; an encode failure may leave a partial output behind.
pub fn convert(request: &ConversionRequest) -> Result<PathBuf, ConversionError> {
    let input = request.input();
    let format = request.format();

    let location = resolve_output_location(input)
        .ok_or_else(|| ConversionError::InvalidInputFormat(input.to_path_buf()))?;
    let output = location.output_path(format);

    tracing::debug!(input = %input.display(), output = %output.display(), "Converting image");

    let img = decode_webp(input)?;
    encode(&img, format, &output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        width = img.width(),
        height = img.height(),
        format = %format,
        "Converted image"
    );

    Ok(output)
}

/// Convenience wrapper building the [`ConversionRequest`] in place.
pub fn convert_file(
    input: impl Into<PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf, ConversionError> {
    convert(&ConversionRequest::new(input, format))
}

fn decode_webp(path: &Path) -> Result<DynamicImage, ConversionError> {
    let file = File::open(path).map_err(|source| ConversionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    image::load(BufReader::new(file), ImageFormat::WebP).map_err(|source| {
        ConversionError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn encode(img: &DynamicImage, format: OutputFormat, path: &Path) -> Result<(), ConversionError> {
    let file = File::create(path).map_err(|source| ConversionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let written = match format {
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(&mut writer)),
        // JPEG has no alpha channel
        OutputFormat::Jpeg => img
            .to_rgb8()
            .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)),
    };

    written
        .and_then(|()| writer.flush().map_err(ImageError::IoError))
        .map_err(|source| ConversionError::Encode {
            path: path.to_path_buf(),
            source,
        })
}
