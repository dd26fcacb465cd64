// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::error::Error;
use crate::i18n::I18n;

/// Severity level determines the label and the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Informational message, e.g. a history boundary.
    Info,
    /// Warning that doesn't block operation.
    Warning,
    /// Operation failed; state was left unchanged.
    Error,
}

impl Severity {
    /// Returns the i18n key of the short label printed before the message.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Severity::Success => "severity-success",
            Severity::Info => "severity-info",
            Severity::Warning => "severity-warning",
            Severity::Error => "severity-error",
        }
    }

    /// Warnings and errors go to stderr.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

/// Value interpolated into a notification message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageArg {
    /// Used verbatim.
    Text(String),
    /// An i18n key translated at render time.
    Localized(String),
    /// An error rendered through its own i18n key.
    Error(Error),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Arguments for message interpolation.
    message_args: Vec<(String, MessageArg)>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args
            .push((key.into(), MessageArg::Text(value.into())));
        self
    }

    /// Adds an argument whose value is itself an i18n key.
    #[must_use]
    pub fn with_localized_arg(
        mut self,
        key: impl Into<String>,
        value_key: impl Into<String>,
    ) -> Self {
        self.message_args
            .push((key.into(), MessageArg::Localized(value_key.into())));
        self
    }

    /// Adds an error as the `error` argument.
    #[must_use]
    pub fn with_error(mut self, error: Error) -> Self {
        self.message_args
            .push(("error".to_string(), MessageArg::Error(error)));
        self
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, MessageArg)] {
        &self.message_args
    }

    /// Returns the text argument named `key`, if any.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&MessageArg> {
        self.message_args
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Resolves the message in the active locale.
    pub fn render(&self, i18n: &I18n) -> String {
        let values: Vec<(&str, String)> = self
            .message_args
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    MessageArg::Text(text) => text.clone(),
                    MessageArg::Localized(key) => i18n.tr(key),
                    MessageArg::Error(error) => {
                        i18n.tr_with_args(error.i18n_key(), &[("detail", error.detail())])
                    }
                };
                (name.as_str(), text)
            })
            .collect();
        let args: Vec<(&str, &str)> = values
            .iter()
            .map(|(name, text)| (*name, text.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }

    /// Renders the message prefixed with the localized severity label.
    pub fn render_line(&self, i18n: &I18n) -> String {
        format!(
            "[{}] {}",
            i18n.tr(self.severity.label_key()),
            self.render(i18n)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn only_warnings_and_errors_are_problems() {
        assert!(!Severity::Success.is_problem());
        assert!(!Severity::Info.is_problem());
        assert!(Severity::Warning.is_problem());
        assert!(Severity::Error.is_problem());
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("test-error")
            .with_arg("filename", "test.png")
            .with_arg("size", "1024");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "test-error");
        assert_eq!(notification.message_args().len(), 2);
        assert_eq!(
            notification.arg("size"),
            Some(&MessageArg::Text("1024".to_string()))
        );
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn render_resolves_localized_arguments() {
        let notification = Notification::success("notification-filter-applied")
            .with_localized_arg("filter", "filter-negative");
        assert_eq!(notification.render(&english()), "Negative applied");
    }

    #[test]
    fn render_formats_nested_errors() {
        let notification = Notification::error("notification-save-error")
            .with_error(Error::UnsupportedFormat("bmp".into()));
        assert_eq!(
            notification.render(&english()),
            "Could not save image: Unsupported format: bmp"
        );
    }

    #[test]
    fn render_line_prefixes_severity() {
        let line = Notification::info("notification-nothing-to-undo").render_line(&english());
        assert_eq!(line, "[info] Nothing to undo");
    }
}
