// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, localization and the editing session
//! together and turns command-line flags into session actions.
//!
//! The session itself never touches the filesystem or the terminal. This
//! module reads the input file, writes exports and previews, and prints every
//! notification the session produces in the user's language.

pub mod cli;
pub mod paths;

pub use cli::{Flags, Op, UsageError, HELP};

use crate::config::{self, Config};
use crate::editor::{self, Action, Event};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::media::{codec, ExportFormat};
use crate::notifications::{MessageArg, Notification, Severity};
use image_rs::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// Root application state for one command-line run.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Settings directory given with `--config-dir`.
    config_dir: Option<PathBuf>,
    editor: editor::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("editor", &self.editor)
            .finish()
    }
}

impl App {
    /// Loads preferences (honoring `--config-dir`), resolves the locale and
    /// builds an empty session.
    pub fn new(flags: &Flags) -> Self {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags, config);
        if let Some(key) = config_warning {
            app.report(&Notification::warning(key));
        }
        app
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(flags: &Flags, config: Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let settings = editor::EditorSettings::from_config(&config);
        let theme = flags.theme.unwrap_or(config.general.theme_mode);
        Self {
            i18n,
            config,
            config_dir: flags.config_dir.as_ref().map(PathBuf::from),
            editor: editor::State::new(settings, theme),
        }
    }

    #[must_use]
    pub fn editor(&self) -> &editor::State {
        &self.editor
    }

    /// Feeds one action through the session and returns its event.
    pub fn dispatch(&mut self, action: Action) -> Event {
        let state = std::mem::take(&mut self.editor);
        let (state, event) = state.update(action);
        self.editor = state;
        event
    }

    /// Prints a notification: problems to stderr, everything else to stdout.
    pub fn report(&self, notification: &Notification) {
        let line = notification.render_line(&self.i18n);
        if notification.severity().is_problem() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    /// Loads the input image into the session.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let bytes = match codec::read_bytes(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.report(&Notification::error("notification-load-error").with_error(err.clone()));
                return Err(err);
            }
        };
        let event = self.dispatch(Action::Load(bytes));
        self.finish_event(&event)
    }

    /// Runs every operation in order. Failed filters are reported and the
    /// remaining operations still run, as in an interactive session.
    pub fn apply_ops(&mut self, ops: &[Op]) {
        for op in ops {
            for action in op.actions() {
                let event = self.dispatch(action);
                if let Some(notification) = event.notification() {
                    self.report(notification);
                }
            }
        }
    }

    /// Encodes the processed image and writes it to `path`.
    ///
    /// The format is `format` if given, else the path's extension, else the
    /// configured default.
    pub fn export_to(&mut self, path: &Path, format: Option<ExportFormat>) -> Result<()> {
        let format = format
            .or_else(|| ExportFormat::from_path(path))
            .unwrap_or_else(|| self.config.export.format());

        match self.dispatch(Action::Export(format)) {
            Event::Exported { bytes, .. } => match codec::write_bytes(path, &bytes) {
                Ok(()) => {
                    tracing::info!("Wrote {}", path.display());
                    self.report(
                        &Notification::success("notification-image-saved")
                            .with_arg("path", path.display().to_string()),
                    );
                    Ok(())
                }
                Err(err) => {
                    self.report(
                        &Notification::error("notification-save-error").with_error(err.clone()),
                    );
                    Err(err)
                }
            },
            event => self.finish_event(&event),
        }
    }

    /// Writes the before/after comparison sheet to `path`.
    ///
    /// Without a loaded image this only warns, like every other action.
    pub fn save_preview(&self, path: &Path) -> Result<()> {
        let Some(sheet) = self.editor.preview_sheet() else {
            self.report(&Notification::warning("notification-no-image"));
            return Ok(());
        };
        let format = ExportFormat::from_path(path).unwrap_or(ExportFormat::Png);
        let image = DynamicImage::ImageRgba8(sheet);
        match codec::save_image(&image, path, Some(format), self.config.export.jpeg_quality()) {
            Ok(_) => {
                self.report(
                    &Notification::success("notification-preview-saved")
                        .with_arg("path", path.display().to_string()),
                );
                Ok(())
            }
            Err(err) => {
                self.report(&Notification::error("notification-save-error").with_error(err.clone()));
                Err(err)
            }
        }
    }

    /// Stores the active language and the session's current theme in
    /// `settings.toml`, keeping every other preference as loaded.
    pub fn save_settings(&mut self) -> Result<()> {
        self.config.general.language = Some(self.i18n.current_locale().to_string());
        self.config.general.theme_mode = self.editor.theme();
        match config::save_with_override(&self.config, self.config_dir.clone()) {
            Ok(()) => {
                self.report(&Notification::success("notification-settings-saved"));
                Ok(())
            }
            Err(err) => {
                self.report(
                    &Notification::error("notification-settings-save-error").with_error(err.clone()),
                );
                Err(err)
            }
        }
    }

    /// Reports the event's notification and turns an error notification
    /// into the error it carries.
    fn finish_event(&self, event: &Event) -> Result<()> {
        let Some(notification) = event.notification() else {
            return Ok(());
        };
        self.report(notification);
        if notification.severity() != Severity::Error {
            return Ok(());
        }
        match notification.arg("error") {
            Some(MessageArg::Error(err)) => Err(err.clone()),
            _ => Err(Error::Io(notification.message_key().to_string())),
        }
    }
}

/// Entry point used by `main.rs`: load, run operations, write outputs.
pub fn run(flags: Flags) -> Result<()> {
    let mut app = App::new(&flags);
    tracing::debug!("Starting with {:?}", app);

    app.open(&flags.input)?;
    app.apply_ops(&flags.ops);

    if let Some(output) = &flags.output {
        app.export_to(output, flags.format)?;
    }
    if let Some(preview) = &flags.preview {
        app.save_preview(preview)?;
    }
    if flags.save_settings {
        app.save_settings()?;
    }
    Ok(())
}
