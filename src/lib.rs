// SPDX-License-Identifier: MPL-2.0
//! `filter_lens` is a small image filter editor with a bounded undo/redo history.
//!
//! An editing session loads one image, applies filters and brightness/contrast
//! adjustments on top of each other, keeps the last few results for undo and
//! redo, and exports the current result. Messages are localized with Fluent and
//! user preferences live in a `settings.toml` file.

#![doc(html_root_url = "https://docs.rs/filter_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod media;
pub mod notifications;
pub mod theming;
