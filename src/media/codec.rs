// SPDX-License-Identifier: MPL-2.0
//! Image decode/encode and file access.
//!
//! Decoding and encoding are thin wrappers over the `image` crate. File handles
//! are scoped to each call and closed on every path, including errors.

use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{DynamicImage, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG format (lossless).
    #[default]
    Png,
    /// JPEG format (lossy, no alpha).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Decodes an image from raw file bytes, guessing the format from its content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(Error::Decode("unrecognized image format".to_string()));
    }
    Ok(reader.decode()?)
}

/// Encodes an image into the given format.
///
/// JPEG output drops the alpha channel and uses `jpeg_quality` (1–100).
pub fn encode(image: &DynamicImage, format: ExportFormat, jpeg_quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => {
            image.write_to(&mut Cursor::new(&mut bytes), format.image_format())?;
        }
        ExportFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut bytes, jpeg_quality.clamp(1, 100));
            rgb.write_with_encoder(encoder)?;
        }
    }
    Ok(bytes)
}

/// Reads a whole file into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Writes `bytes` to `path`, replacing any existing file.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

/// Loads and decodes an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    decode(&read_bytes(path)?)
}

/// Encodes and saves an image.
///
/// The format is taken from the path extension when not given explicitly.
/// Encoding happens before the file is created, so an encode failure never
/// truncates an existing file.
pub fn save_image(
    image: &DynamicImage,
    path: &Path,
    format: Option<ExportFormat>,
    jpeg_quality: u8,
) -> Result<ExportFormat> {
    let format = match format {
        Some(format) => format,
        None => ExportFormat::from_path(path).ok_or_else(|| {
            Error::UnsupportedFormat(path.display().to_string())
        })?,
    };
    let bytes = encode(image, format, jpeg_quality)?;
    write_bytes(path, &bytes)?;
    Ok(format)
}
