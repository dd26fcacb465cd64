// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Preview**: Canvas size and sheet layout for before/after previews
//! - **Filters**: Gaussian blur radius used by the smoothing filter
//! - **Export**: JPEG quality bounds

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default width and height of one preview canvas (in pixels).
pub const DEFAULT_PREVIEW_SIZE: u32 = 500;

/// Minimum preview canvas edge (in pixels).
pub const MIN_PREVIEW_SIZE: u32 = 50;

/// Maximum preview canvas edge (in pixels).
pub const MAX_PREVIEW_SIZE: u32 = 4000;

/// Space around and between the two canvases of a preview sheet.
pub const PREVIEW_GUTTER_PX: u32 = 20;

/// Width of the frame drawn around each canvas.
pub const PREVIEW_BORDER_PX: u32 = 3;

// ==========================================================================
// Filter Defaults
// ==========================================================================

/// Default Gaussian blur sigma for the smoothing filter.
pub const DEFAULT_BLUR_SIGMA: f32 = 2.0;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Preview validation
    assert!(MIN_PREVIEW_SIZE > 0);
    assert!(MAX_PREVIEW_SIZE >= MIN_PREVIEW_SIZE);
    assert!(DEFAULT_PREVIEW_SIZE >= MIN_PREVIEW_SIZE);
    assert!(DEFAULT_PREVIEW_SIZE <= MAX_PREVIEW_SIZE);
    assert!(PREVIEW_BORDER_PX < PREVIEW_GUTTER_PX);

    // Blur validation
    assert!(DEFAULT_BLUR_SIGMA > 0.0);

    // JPEG quality validation
    assert!(MIN_JPEG_QUALITY > 0);
    assert!(MAX_JPEG_QUALITY <= 100);
    assert!(DEFAULT_JPEG_QUALITY >= MIN_JPEG_QUALITY);
    assert!(DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_defaults_are_valid() {
        assert_eq!(DEFAULT_PREVIEW_SIZE, 500);
        assert!(DEFAULT_PREVIEW_SIZE >= MIN_PREVIEW_SIZE);
        assert!(DEFAULT_PREVIEW_SIZE <= MAX_PREVIEW_SIZE);
    }

    #[test]
    fn blur_default_matches_smoothing_radius() {
        assert_eq!(DEFAULT_BLUR_SIGMA, 2.0);
    }

    #[test]
    fn jpeg_quality_defaults_are_valid() {
        assert_eq!(DEFAULT_JPEG_QUALITY, 90);
        assert!(DEFAULT_JPEG_QUALITY >= MIN_JPEG_QUALITY);
        assert!(DEFAULT_JPEG_QUALITY <= MAX_JPEG_QUALITY);
    }
}
