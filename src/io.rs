//! Image file decoding and encoding.
//!
//! Decoding accepts any format the `image` crate recognizes from the file
//! contents; alpha is dropped. Encoding picks the format from the output
//! extension, which must name a format that can store 8-bit RGB.

use std::path::{Path, PathBuf};

use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, ImageFormat, ImageReader, RgbImage};
use sepia_tone::RgbBuffer;

use crate::error::ConvertError;

/// Prefix added to the input file name when no output path is given.
pub const OUTPUT_PREFIX: &str = "output_";

/// Fallback output name when the input path has no file name component.
const FALLBACK_OUTPUT: &str = "out.jpg";

/// Extension given to default output paths whose input extension cannot be
/// written as RGB8.
const FALLBACK_EXTENSION: &str = "jpg";

/// Formats whose encoders accept 8-bit RGB buffers.
fn encodes_rgb8(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Jpeg
            | ImageFormat::Bmp
            | ImageFormat::Gif
            | ImageFormat::Tiff
            | ImageFormat::Tga
            | ImageFormat::Pnm
            | ImageFormat::WebP
            | ImageFormat::Qoi
    )
}

/// The format `path` will be encoded as.
///
/// # Errors
///
/// [`ConvertError::UnsupportedOutputFormat`] when the extension is missing,
/// unknown, or names a format that cannot store 8-bit RGB (e.g. `.ff`,
/// `.hdr`, `.exr`).
pub fn output_format(path: &Path) -> Result<ImageFormat, ConvertError> {
    match ImageFormat::from_path(path) {
        Ok(format) if encodes_rgb8(format) => Ok(format),
        _ => Err(ConvertError::UnsupportedOutputFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Decode an image file into an RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbBuffer, ConvertError> {
    let load_error = |source: ImageError| ConvertError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .map_err(|e| load_error(e.into()))?
        .with_guessed_format()
        .map_err(|e| load_error(e.into()))?
        .decode()
        .map_err(load_error)?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(RgbBuffer::from_raw(width, height, rgb.as_raw())?)
}

/// Encode an RGB buffer to `path`, format chosen by extension.
pub fn save_image(buffer: &RgbBuffer, path: &Path) -> Result<(), ConvertError> {
    let format = output_format(path)?;
    let save_error = |source: ImageError| ConvertError::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let image = RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_raw())
        .ok_or_else(|| {
            save_error(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })?;

    image.save_with_format(path, format).map_err(save_error)
}

/// `dir/photo.png` -> `dir/output_photo.png`.
///
/// The input extension is kept when it can be written as RGB8; otherwise
/// (no extension, `.ff`, `.hdr`, ...) the output becomes a JPEG:
/// `dir/photo.ff` -> `dir/output_photo.jpg`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let Some(name) = input.file_name() else {
        return PathBuf::from(FALLBACK_OUTPUT);
    };

    let mut prefixed = std::ffi::OsString::from(OUTPUT_PREFIX);
    prefixed.push(name);
    let output = input.with_file_name(prefixed);

    if output_format(&output).is_ok() {
        output
    } else {
        output.with_extension(FALLBACK_EXTENSION)
    }
}
