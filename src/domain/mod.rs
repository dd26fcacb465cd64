// SPDX-License-Identifier: MPL-2.0
//! Editing primitives that depend only on `std`.
//!
//! # Modules
//!
//! - [`editing`]: Editing types ([`History`](editing::History),
//!   [`EnhanceFactor`](editing::EnhanceFactor), [`BlurSigma`](editing::BlurSigma))

pub mod editing;
