// SPDX-License-Identifier: MPL-2.0
//! User feedback produced by the editing session.
//!
//! Every status and error message is a [`Notification`]: a severity, an i18n
//! key and its arguments. Nothing is translated until the message is rendered,
//! so the session itself stays locale-agnostic.
//!
//! # Usage
//!
//! ```
//! use filter_lens::config::Config;
//! use filter_lens::i18n::I18n;
//! use filter_lens::notifications::{Notification, Severity};
//!
//! let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
//! let note = Notification::info("notification-undo-step")
//!     .with_arg("step", "2")
//!     .with_arg("total", "5");
//!
//! assert_eq!(note.severity(), Severity::Info);
//! assert_eq!(note.render(&i18n), "Undo: step 2 of 5");
//! ```

mod notification;

pub use notification::{MessageArg, Notification, Severity};
