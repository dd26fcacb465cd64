// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Enhance Factor Bounds
// =============================================================================

/// Brightness/contrast factor bounds (0.0 to 2.0).
pub mod enhance_bounds {
    /// Minimum factor (fully black for brightness, flat gray for contrast).
    pub const MIN: f32 = 0.0;
    /// Maximum factor.
    pub const MAX: f32 = 2.0;
    /// Neutral factor (no change).
    pub const NEUTRAL: f32 = 1.0;
}

// =============================================================================
// EnhanceFactor
// =============================================================================

/// Brightness or contrast multiplier, guaranteed to be within 0.0–2.0.
///
/// A factor of 1.0 leaves the image unchanged, lower values darken (brightness)
/// or flatten (contrast), higher values do the opposite.
///
/// # Example
///
/// ```
/// use filter_lens::domain::editing::EnhanceFactor;
///
/// assert_eq!(EnhanceFactor::new(3.5).value(), 2.0);
/// assert!(EnhanceFactor::default().is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceFactor(f32);

impl EnhanceFactor {
    /// Creates a new factor, clamping to the valid range. NaN maps to neutral.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(enhance_bounds::MIN, enhance_bounds::MAX))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether this factor leaves the image unchanged.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        (self.0 - enhance_bounds::NEUTRAL).abs() < f32::EPSILON
    }
}

impl Default for EnhanceFactor {
    fn default() -> Self {
        Self(enhance_bounds::NEUTRAL)
    }
}

// =============================================================================
// Blur Sigma Bounds
// =============================================================================

/// Smoothing sigma bounds.
pub mod blur_bounds {
    pub const MIN: f32 = 0.1;
    pub const MAX: f32 = 50.0;
    pub const DEFAULT: f32 = 2.0;
}

// =============================================================================
// BlurSigma
// =============================================================================

/// Gaussian blur standard deviation used by the smoothing filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurSigma(f32);

impl BlurSigma {
    /// Creates a new sigma, clamping to the valid range. NaN maps to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(blur_bounds::MIN, blur_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for BlurSigma {
    fn default() -> Self {
        Self(blur_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // EnhanceFactor tests
    // -------------------------------------------------------------------------

    #[test]
    fn enhance_factor_clamps() {
        assert!((EnhanceFactor::new(-1.0).value() - enhance_bounds::MIN).abs() < f32::EPSILON);
        assert!((EnhanceFactor::new(5.0).value() - enhance_bounds::MAX).abs() < f32::EPSILON);
        assert!((EnhanceFactor::new(1.5).value() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn enhance_factor_default_is_neutral() {
        assert!(EnhanceFactor::default().is_neutral());
        assert!(EnhanceFactor::new(1.0).is_neutral());
        assert!(!EnhanceFactor::new(1.2).is_neutral());
    }

    #[test]
    fn enhance_factor_nan_is_neutral() {
        assert!(EnhanceFactor::new(f32::NAN).is_neutral());
    }

    // -------------------------------------------------------------------------
    // BlurSigma tests
    // -------------------------------------------------------------------------

    #[test]
    fn blur_sigma_clamps() {
        assert!((BlurSigma::new(0.0).value() - blur_bounds::MIN).abs() < f32::EPSILON);
        assert!((BlurSigma::new(500.0).value() - blur_bounds::MAX).abs() < f32::EPSILON);
    }

    #[test]
    fn blur_sigma_default() {
        assert!((BlurSigma::default().value() - blur_bounds::DEFAULT).abs() < f32::EPSILON);
        assert!((BlurSigma::new(f32::NAN).value() - blur_bounds::DEFAULT).abs() < f32::EPSILON);
    }
}
