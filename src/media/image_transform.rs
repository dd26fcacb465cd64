// SPDX-License-Identifier: MPL-2.0
//! Filter and adjustment functions applied by the editor.
//!
//! Every function takes the current image by reference and returns a new image,
//! so callers can record the result as an independent history snapshot.

use crate::domain::editing::{BlurSigma, EnhanceFactor};
use crate::error::{Error, Result};
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, RgbImage, RgbaImage};

/// 3×3 edge-enhancement kernel (sums to 1, so flat regions are unchanged).
const EDGE_ENHANCE_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0];

// ==========================================================================
// Filter Value Object
// ==========================================================================

/// A single editing operation that produces a new snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Negative,
    Smooth,
    EdgeEnhance,
    Brightness(EnhanceFactor),
    Contrast(EnhanceFactor),
}

impl Filter {
    /// Applies the filter to `image`.
    ///
    /// `sigma` is only used by [`Filter::Smooth`].
    pub fn apply(self, image: &DynamicImage, sigma: BlurSigma) -> Result<DynamicImage> {
        match self {
            Filter::Negative => negative(image),
            Filter::Smooth => smooth(image, sigma),
            Filter::EdgeEnhance => edge_enhance(image),
            Filter::Brightness(factor) => adjust_brightness(image, factor),
            Filter::Contrast(factor) => adjust_contrast(image, factor),
        }
    }

    /// Stable name used in logs and notifications.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Negative => "negative",
            Filter::Smooth => "smooth",
            Filter::EdgeEnhance => "edge",
            Filter::Brightness(_) => "brightness",
            Filter::Contrast(_) => "contrast",
        }
    }

    /// i18n key of the filter's display label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Filter::Negative => "filter-negative",
            Filter::Smooth => "filter-smooth",
            Filter::EdgeEnhance => "filter-edge-enhance",
            Filter::Brightness(_) => "filter-brightness",
            Filter::Contrast(_) => "filter-contrast",
        }
    }
}

// ==========================================================================
// Image Transformation Functions
// ==========================================================================

fn ensure_not_empty(image: &DynamicImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Filter(format!(
            "cannot filter an empty {width}x{height} image"
        )));
    }
    Ok(())
}

/// Invert every color channel. The result is always RGB.
pub fn negative(image: &DynamicImage) -> Result<DynamicImage> {
    ensure_not_empty(image)?;
    let mut rgb = image.to_rgb8();
    image_rs::imageops::invert(&mut rgb);
    Ok(DynamicImage::ImageRgb8(rgb))
}

/// Gaussian blur with the given sigma.
pub fn smooth(image: &DynamicImage, sigma: BlurSigma) -> Result<DynamicImage> {
    ensure_not_empty(image)?;
    Ok(image.blur(sigma.value()))
}

/// Sharpen edges with a 3×3 convolution.
///
/// Samples outside the image repeat the nearest edge pixel, so borders keep
/// their color. Alpha is copied through unchanged.
pub fn edge_enhance(image: &DynamicImage) -> Result<DynamicImage> {
    ensure_not_empty(image)?;
    let (width, height) = image.dimensions();
    let mismatch = || {
        Error::Filter(format!(
            "edge enhancement lost pixels of a {width}x{height} image"
        ))
    };
    if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        let data = convolve_clamped(rgba.as_raw(), width, height, 4, &EDGE_ENHANCE_KERNEL);
        RgbaImage::from_raw(width, height, data)
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(mismatch)
    } else {
        let rgb = image.to_rgb8();
        let data = convolve_clamped(rgb.as_raw(), width, height, 3, &EDGE_ENHANCE_KERNEL);
        RgbImage::from_raw(width, height, data)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(mismatch)
    }
}

/// Scale every color channel by `factor` (0.0 = black, 1.0 = unchanged).
///
/// When the factor is neutral this returns a clone of the input.
pub fn adjust_brightness(image: &DynamicImage, factor: EnhanceFactor) -> Result<DynamicImage> {
    ensure_not_empty(image)?;
    if factor.is_neutral() {
        return Ok(image.clone());
    }
    let lut = build_lut(|value| value * factor.value());
    Ok(map_color_channels(image, &lut))
}

/// Move every color channel away from (or toward) the mean luminance.
///
/// A factor of 0.0 yields a flat gray image at the mean luminance, 1.0 is a no-op.
pub fn adjust_contrast(image: &DynamicImage, factor: EnhanceFactor) -> Result<DynamicImage> {
    ensure_not_empty(image)?;
    if factor.is_neutral() {
        return Ok(image.clone());
    }
    let mean = mean_luminance(image);
    let lut = build_lut(|value| mean + (value - mean) * factor.value());
    Ok(map_color_channels(image, &lut))
}

/// Resize the image to exactly the provided dimensions using a high-quality filter.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Rounded mean of the grayscale version of the image.
fn mean_luminance(image: &DynamicImage) -> f32 {
    let luma = image.to_luma8();
    let count = u64::from(luma.width()) * u64::from(luma.height());
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = luma.as_raw().iter().map(|&v| u64::from(v)).sum();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    {
        (sum as f64 / count as f64).round() as f32
    }
}

/// Convolve the color channels of an interleaved 8-bit buffer, clamping
/// neighbour coordinates to the image.
fn convolve_clamped(
    raw: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    kernel: &[f32; 9],
) -> Vec<u8> {
    let (width, height) = (width as usize, height as usize);
    let color_channels = channels.min(3);
    let mut out = raw.to_vec();
    for y in 0..height {
        for x in 0..width {
            let base = (y * width + x) * channels;
            for channel in 0..color_channels {
                let mut acc = 0.0f32;
                for (k, weight) in kernel.iter().enumerate() {
                    let sx = (x + k % 3).saturating_sub(1).min(width - 1);
                    let sy = (y + k / 3).saturating_sub(1).min(height - 1);
                    acc += weight * f32::from(raw[(sy * width + sx) * channels + channel]);
                }
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    out[base + channel] = acc.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }
    out
}

fn build_lut(transfer: impl Fn(f32) -> f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let mapped = transfer(i as f32).round().clamp(0.0, 255.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            *slot = mapped as u8;
        }
    }
    lut
}

/// Apply a lookup table to the color channels, leaving alpha untouched.
fn map_color_channels(image: &DynamicImage, lut: &[u8; 256]) -> DynamicImage {
    if image.color().has_alpha() {
        let mut rgba = image.to_rgba8();
        for pixel in rgba.pixels_mut() {
            for channel in &mut pixel.0[..3] {
                *channel = lut[usize::from(*channel)];
            }
        }
        DynamicImage::ImageRgba8(rgba)
    } else {
        let mut rgb = image.to_rgb8();
        for pixel in rgb.pixels_mut() {
            for channel in &mut pixel.0 {
                *channel = lut[usize::from(*channel)];
            }
        }
        DynamicImage::ImageRgb8(rgb)
    }
}
