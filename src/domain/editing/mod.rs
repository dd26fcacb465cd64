// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image editing operations:
//! - [`History`]: Bounded undo/redo snapshot history
//! - [`EnhanceFactor`]: Brightness/contrast multiplier
//! - [`BlurSigma`]: Smoothing strength

pub mod history;
pub mod newtypes;

pub use history::{History, MAX_HISTORY};
pub use newtypes::{BlurSigma, EnhanceFactor};
