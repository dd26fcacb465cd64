// SPDX-License-Identifier: MPL-2.0
//! Editing session: the loaded original, its bounded history of processed
//! snapshots, slider values and the preview theme.
//!
//! The session is a plain value driven by [`State::update`], which consumes the
//! state and an [`Action`] and hands back the next state plus an [`Event`].
//! Failures never leave the session half-updated: a failed load keeps the
//! previous image, a failed filter or export leaves history untouched.

mod adjustment;
mod messages;

pub use adjustment::AdjustmentState;
pub use messages::{Action, Event};

use crate::config::Config;
use crate::domain::editing::{BlurSigma, History};
use crate::media::{codec, preview, CanvasSize, ExportFormat, Filter};
use crate::notifications::Notification;
use crate::theming::{ColorScheme, ThemeMode};
use image_rs::{DynamicImage, GenericImageView, RgbaImage};
use tracing::{debug, info, warn};

/// Session settings taken from the configuration at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    pub blur_sigma: BlurSigma,
    pub canvas: CanvasSize,
    pub jpeg_quality: u8,
    /// Slider values restored on load and reset.
    pub initial_adjustment: AdjustmentState,
}

impl EditorSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let (width, height) = config.editor.preview_size();
        Self {
            blur_sigma: config.editor.blur_sigma(),
            canvas: CanvasSize::new(width, height),
            jpeg_quality: config.export.jpeg_quality(),
            initial_adjustment: AdjustmentState {
                brightness: config.editor.brightness(),
                contrast: config.editor.contrast(),
            },
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Editing session state.
#[derive(Clone)]
pub struct State {
    /// Image as loaded, converted to RGB.
    original: Option<DynamicImage>,
    /// Processed snapshots; the current one is what gets exported.
    history: History<DynamicImage>,
    adjustment: AdjustmentState,
    theme: ThemeMode,
    settings: EditorSettings,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("has_image", &self.original.is_some())
            .field("history_len", &self.history.len())
            .field("history_cursor", &self.history.cursor())
            .field("adjustment", &self.adjustment)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(EditorSettings::default(), ThemeMode::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: EditorSettings, theme: ThemeMode) -> Self {
        Self {
            original: None,
            history: History::new(),
            adjustment: settings.initial_adjustment,
            theme,
            settings,
        }
    }

    /// Builds an empty session from user preferences.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            EditorSettings::from_config(config),
            config.general.theme_mode,
        )
    }

    /// Advances the session by one action.
    #[must_use]
    pub fn update(mut self, action: Action) -> (Self, Event) {
        let event = match action {
            Action::Load(bytes) => self.load(&bytes),
            Action::Apply(filter) => self.apply_filter(filter),
            Action::BrightnessChanged(value) => self.brightness_changed(value),
            Action::ContrastChanged(value) => self.contrast_changed(value),
            Action::ApplyBrightness => self.apply_brightness(),
            Action::ApplyContrast => self.apply_contrast(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::Reset => self.reset(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Export(format) => self.export(format),
        };
        (self, event)
    }

    fn load(&mut self, bytes: &[u8]) -> Event {
        let image = match codec::decode(bytes) {
            Ok(image) => DynamicImage::ImageRgb8(image.to_rgb8()),
            Err(err) => {
                warn!("Failed to decode image ({} bytes): {}", bytes.len(), err);
                return Event::Notify(Notification::error("notification-load-error").with_error(err));
            }
        };

        let (width, height) = image.dimensions();
        info!("Loaded {}x{} image", width, height);
        self.history.reset(image.clone());
        self.original = Some(image);
        self.adjustment = self.settings.initial_adjustment;

        Event::Notify(
            Notification::success("notification-image-loaded")
                .with_arg("width", width.to_string())
                .with_arg("height", height.to_string()),
        )
    }

    pub(crate) fn apply_filter(&mut self, filter: Filter) -> Event {
        let Some(current) = self.history.current() else {
            return Event::Notify(Notification::warning("notification-no-image"));
        };

        match filter.apply(current, self.settings.blur_sigma) {
            Ok(processed) => {
                self.history.record(processed);
                debug!(
                    "Applied {} (history {}/{})",
                    filter.name(),
                    self.history.cursor().map_or(0, |c| c + 1),
                    self.history.len()
                );
                Event::Notify(
                    Notification::success("notification-filter-applied")
                        .with_localized_arg("filter", filter.label_key()),
                )
            }
            Err(err) => {
                warn!("Filter {} failed: {}", filter.name(), err);
                Event::Notify(
                    Notification::error("notification-filter-error")
                        .with_localized_arg("filter", filter.label_key())
                        .with_error(err),
                )
            }
        }
    }

    fn undo(&mut self) -> Event {
        if self.history.undo().is_none() {
            return Event::Notify(Notification::info("notification-nothing-to-undo"));
        }
        let (len, cursor) = self.history_position();
        debug!("Undo to snapshot {} of {}", cursor + 1, len);
        Event::Notify(
            Notification::info("notification-undo-step")
                .with_arg("step", (len - cursor).to_string())
                .with_arg("total", len.to_string()),
        )
    }

    fn redo(&mut self) -> Event {
        if self.history.redo().is_none() {
            return Event::Notify(Notification::info("notification-nothing-to-redo"));
        }
        let (len, cursor) = self.history_position();
        debug!("Redo to snapshot {} of {}", cursor + 1, len);
        Event::Notify(
            Notification::info("notification-redo-step")
                .with_arg("step", (cursor + 1).to_string())
                .with_arg("total", len.to_string()),
        )
    }

    fn history_position(&self) -> (usize, usize) {
        (self.history.len(), self.history.cursor().unwrap_or(0))
    }

    fn reset(&mut self) -> Event {
        let Some(original) = &self.original else {
            return Event::Notify(Notification::warning("notification-no-image"));
        };
        self.history.reset(original.clone());
        self.adjustment = self.settings.initial_adjustment;
        debug!("Reset to original image");
        Event::Notify(Notification::success("notification-image-reset"))
    }

    fn toggle_theme(&mut self) -> Event {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {:?}", self.theme);
        Event::Notify(
            Notification::info("notification-theme-changed")
                .with_localized_arg("theme", self.theme.i18n_key()),
        )
    }

    fn export(&self, format: ExportFormat) -> Event {
        let Some(processed) = self.history.current() else {
            return Event::Notify(Notification::warning("notification-no-image"));
        };
        match codec::encode(processed, format, self.settings.jpeg_quality) {
            Ok(bytes) => {
                info!("Encoded {} bytes as {}", bytes.len(), format.extension());
                Event::Exported { bytes, format }
            }
            Err(err) => {
                warn!("Export as {} failed: {}", format.extension(), err);
                Event::Notify(Notification::error("notification-save-error").with_error(err))
            }
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// The image as loaded.
    #[must_use]
    pub fn original(&self) -> Option<&DynamicImage> {
        self.original.as_ref()
    }

    /// The current processed image (the history entry at the cursor).
    #[must_use]
    pub fn processed(&self) -> Option<&DynamicImage> {
        self.history.current()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.original.is_some()
    }

    #[must_use]
    pub fn history(&self) -> &History<DynamicImage> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn adjustment(&self) -> AdjustmentState {
        self.adjustment
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Renders the before/after comparison on the current theme's surface.
    #[must_use]
    pub fn preview_sheet(&self) -> Option<RgbaImage> {
        let original = self.original.as_ref()?;
        let processed = self.history.current()?;
        Some(preview::before_after_sheet(
            original,
            processed,
            self.settings.canvas,
            &ColorScheme::for_mode(self.theme),
        ))
    }
}
