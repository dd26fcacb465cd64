// SPDX-License-Identifier: MPL-2.0
//! Image handling: decoding and encoding, filters, and preview fitting.
//!
//! Pixel work is delegated to the `image` crate; this module only decides
//! which of its operations to run and how to report failures.

pub mod codec;
pub mod image_transform;
pub mod preview;

// Re-export commonly used types
pub use codec::{decode, encode, load_image, save_image, ExportFormat};
pub use image_transform::Filter;
pub use preview::{before_after_sheet, fit_within, CanvasSize, FitGeometry};
