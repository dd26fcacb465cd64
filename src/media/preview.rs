// SPDX-License-Identifier: MPL-2.0
//! Before/after preview fitting.
//!
//! Images are scaled to fit a fixed canvas while keeping their aspect ratio and
//! centered inside it. Smaller images are scaled up so both panes fill the same
//! canvas.

use crate::config::{DEFAULT_PREVIEW_SIZE, PREVIEW_BORDER_PX, PREVIEW_GUTTER_PX};
use crate::media::image_transform;
use crate::theming::ColorScheme;
use image_rs::{imageops, DynamicImage, GenericImageView, Rgba, RgbaImage};

/// Size of one preview canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_SIZE, DEFAULT_PREVIEW_SIZE)
    }
}

/// Where a fitted image lands inside its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitGeometry {
    pub width: u32,
    pub height: u32,
    /// Left margin inside the canvas.
    pub offset_x: u32,
    /// Top margin inside the canvas.
    pub offset_y: u32,
}

/// Computes the largest size with the image's aspect ratio that fits `canvas`,
/// centered.
///
/// The scale ratio is `min(canvas_w / w, canvas_h / h)`; dimensions are
/// truncated toward zero and never drop below 1 pixel for a non-empty image.
/// An empty image yields a zero-sized geometry at the center.
#[must_use]
pub fn fit_within(width: u32, height: u32, canvas: CanvasSize) -> FitGeometry {
    if width == 0 || height == 0 {
        return FitGeometry {
            width: 0,
            height: 0,
            offset_x: canvas.width / 2,
            offset_y: canvas.height / 2,
        };
    }

    let (canvas_w, canvas_h) = (u64::from(canvas.width), u64::from(canvas.height));
    let (image_w, image_h) = (u64::from(width), u64::from(height));

    // Integer cross-multiplication gives floor(dim * ratio) without float drift.
    let (fitted_w, fitted_h) = if canvas_w * image_h <= canvas_h * image_w {
        (canvas_w, image_h * canvas_w / image_w)
    } else {
        (image_w * canvas_h / image_h, canvas_h)
    };

    // Both values are bounded by the canvas dimensions, which are u32.
    #[allow(clippy::cast_possible_truncation)]
    let fitted_width = (fitted_w as u32).clamp(1, canvas.width);
    #[allow(clippy::cast_possible_truncation)]
    let fitted_height = (fitted_h as u32).clamp(1, canvas.height);

    FitGeometry {
        width: fitted_width,
        height: fitted_height,
        offset_x: (canvas.width - fitted_width) / 2,
        offset_y: (canvas.height - fitted_height) / 2,
    }
}

/// Resizes `image` to its fitted size inside `canvas` with a Lanczos filter.
#[must_use]
pub fn fitted(image: &DynamicImage, canvas: CanvasSize) -> (DynamicImage, FitGeometry) {
    let (width, height) = image.dimensions();
    let geometry = fit_within(width, height, canvas);
    if (geometry.width, geometry.height) == (width, height) {
        return (image.clone(), geometry);
    }
    (
        image_transform::resize(image, geometry.width, geometry.height),
        geometry,
    )
}

/// Renders the original and processed images side by side, each fitted and
/// centered inside its own bordered canvas on the theme surface color.
#[must_use]
pub fn before_after_sheet(
    original: &DynamicImage,
    processed: &DynamicImage,
    canvas: CanvasSize,
    colors: &ColorScheme,
) -> RgbaImage {
    let pane_width = canvas.width + 2 * PREVIEW_BORDER_PX;
    let pane_height = canvas.height + 2 * PREVIEW_BORDER_PX;
    let sheet_width = 2 * pane_width + 3 * PREVIEW_GUTTER_PX;
    let sheet_height = pane_height + 2 * PREVIEW_GUTTER_PX;

    let mut sheet = RgbaImage::from_pixel(sheet_width, sheet_height, colors.surface);

    for (index, image) in [original, processed].into_iter().enumerate() {
        // index is 0 or 1
        #[allow(clippy::cast_possible_truncation)]
        let pane_x = PREVIEW_GUTTER_PX + index as u32 * (pane_width + PREVIEW_GUTTER_PX);
        let pane_y = PREVIEW_GUTTER_PX;

        fill_rect(&mut sheet, pane_x, pane_y, pane_width, pane_height, colors.canvas_border);
        fill_rect(
            &mut sheet,
            pane_x + PREVIEW_BORDER_PX,
            pane_y + PREVIEW_BORDER_PX,
            canvas.width,
            canvas.height,
            Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
        );

        let (fitted_image, geometry) = fitted(image, canvas);
        let x = pane_x + PREVIEW_BORDER_PX + geometry.offset_x;
        let y = pane_y + PREVIEW_BORDER_PX + geometry.offset_y;
        imageops::overlay(&mut sheet, &fitted_image.to_rgba8(), i64::from(x), i64::from(y));
    }

    sheet
}

fn fill_rect(target: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = (x + width).min(target.width());
    let y_end = (y + height).min(target.height());
    for py in y..y_end {
        for px in x..x_end {
            target.put_pixel(px, py, color);
        }
    }
}
