// SPDX-License-Identifier: MPL-2.0
//! Editor action/event types re-exported by the facade.

use crate::media::{ExportFormat, Filter};
use crate::notifications::Notification;

/// Inputs accepted by [`super::State::update`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Decode raw file bytes and start a new editing session on them.
    Load(Vec<u8>),
    /// Apply a filter to the current processed image.
    Apply(Filter),
    /// Brightness slider moved.
    BrightnessChanged(f32),
    /// Contrast slider moved.
    ContrastChanged(f32),
    /// Apply the current brightness slider value.
    ApplyBrightness,
    /// Apply the current contrast slider value.
    ApplyContrast,
    Undo,
    Redo,
    /// Go back to the originally loaded image.
    Reset,
    ToggleTheme,
    /// Encode the current processed image.
    Export(ExportFormat),
}

/// Output of one update step.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Something the user should be told about.
    Notify(Notification),
    /// The processed image, encoded and ready to be written.
    Exported { bytes: Vec<u8>, format: ExportFormat },
}

impl Event {
    /// Returns the notification carried by this event, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Event::Notify(notification) => Some(notification),
            Event::None | Event::Exported { .. } => None,
        }
    }
}
