// SPDX-License-Identifier: MPL-2.0
//! Command-line flags and the operation list they carry.

use crate::domain::editing::EnhanceFactor;
use crate::editor::Action;
use crate::media::{ExportFormat, Filter};
use crate::notifications::Notification;
use crate::theming::ThemeMode;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error as ThisError;

pub const HELP: &str = "\
Apply filters to an image with bounded undo/redo and export the result.

USAGE:
  filter_lens [OPTIONS] INPUT

OPTIONS:
  --ops LIST          Comma-separated operations, applied in order:
                        negative, smooth, edge, brightness=F, contrast=F,
                        undo, redo, reset, theme
                      F is a factor between 0.0 and 2.0 (1.0 = unchanged)
  --output PATH       Write the processed image to PATH
  --format FORMAT     Output format: png or jpeg (default: from PATH)
  --preview PATH      Write a before/after comparison sheet to PATH
  --theme MODE        Preview theme: light, dark or system
  --lang LANG         Message language, e.g. en-US or fr
  --config-dir DIR    Read settings.toml from DIR
  --save-settings     Store --lang and the final theme in settings.toml
  -h, --help          Print this help

ENVIRONMENT:
  FILTER_LENS_CONFIG_DIR   Settings directory when --config-dir is not given
  RUST_LOG                 Log filter (default: warn)
";

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UsageError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid value for {op}: {value}")]
    InvalidValue { op: String, value: String },

    #[error("no input image given")]
    MissingInput,

    #[error("{0}")]
    Arguments(String),
}

impl UsageError {
    /// Localizable form of this error.
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            UsageError::UnknownOperation(op) => {
                Notification::error("cli-unknown-operation").with_arg("op", op.clone())
            }
            UsageError::InvalidValue { op, value } => Notification::error("cli-invalid-value")
                .with_arg("op", op.clone())
                .with_arg("value", value.clone()),
            UsageError::MissingInput => Notification::error("cli-missing-input"),
            UsageError::Arguments(detail) => {
                Notification::error("cli-invalid-arguments").with_arg("detail", detail.clone())
            }
        }
    }
}

impl From<pico_args::Error> for UsageError {
    fn from(err: pico_args::Error) -> Self {
        UsageError::Arguments(err.to_string())
    }
}

/// One entry of `--ops`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Negative,
    Smooth,
    Edge,
    Brightness(EnhanceFactor),
    Contrast(EnhanceFactor),
    Undo,
    Redo,
    Reset,
    Theme,
}

impl Op {
    /// Session actions performing this operation.
    ///
    /// Brightness and contrast move the slider first, then apply it.
    #[must_use]
    pub fn actions(self) -> Vec<Action> {
        match self {
            Op::Negative => vec![Action::Apply(Filter::Negative)],
            Op::Smooth => vec![Action::Apply(Filter::Smooth)],
            Op::Edge => vec![Action::Apply(Filter::EdgeEnhance)],
            Op::Brightness(factor) => vec![
                Action::BrightnessChanged(factor.value()),
                Action::ApplyBrightness,
            ],
            Op::Contrast(factor) => vec![
                Action::ContrastChanged(factor.value()),
                Action::ApplyContrast,
            ],
            Op::Undo => vec![Action::Undo],
            Op::Redo => vec![Action::Redo],
            Op::Reset => vec![Action::Reset],
            Op::Theme => vec![Action::ToggleTheme],
        }
    }
}

impl FromStr for Op {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((name, value)) = s.split_once('=') {
            let name = name.trim().to_lowercase();
            let parse_factor = || -> Result<EnhanceFactor, UsageError> {
                value
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(EnhanceFactor::new)
                    .ok_or_else(|| UsageError::InvalidValue {
                        op: name.clone(),
                        value: value.trim().to_string(),
                    })
            };
            return match name.as_str() {
                "brightness" => Ok(Op::Brightness(parse_factor()?)),
                "contrast" => Ok(Op::Contrast(parse_factor()?)),
                _ => Err(UsageError::UnknownOperation(s.to_string())),
            };
        }

        match s.to_lowercase().as_str() {
            "negative" => Ok(Op::Negative),
            "smooth" => Ok(Op::Smooth),
            "edge" => Ok(Op::Edge),
            "undo" => Ok(Op::Undo),
            "redo" => Ok(Op::Redo),
            "reset" => Ok(Op::Reset),
            "theme" => Ok(Op::Theme),
            _ => Err(UsageError::UnknownOperation(s.to_string())),
        }
    }
}

/// Parses a comma-separated operation list. Empty entries are skipped.
pub fn parse_ops(list: &str) -> Result<Vec<Op>, UsageError> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Startup flags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FILTER_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub ops: Vec<Op>,
    pub output: Option<PathBuf>,
    /// Explicit output format; otherwise taken from `output`'s extension.
    pub format: Option<ExportFormat>,
    pub preview: Option<PathBuf>,
    /// Overrides the configured theme mode.
    pub theme: Option<ThemeMode>,
    /// Persist the language and theme of this run as preferences.
    pub save_settings: bool,
    pub input: PathBuf,
}

impl Flags {
    /// Reads flags from parsed process arguments. `--help` must be handled
    /// by the caller beforehand.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, UsageError> {
        let lang = args.opt_value_from_str("--lang")?;
        let config_dir = args.opt_value_from_str("--config-dir")?;
        let ops = args
            .opt_value_from_str::<_, String>("--ops")?
            .map(|list| parse_ops(&list))
            .transpose()?
            .unwrap_or_default();
        let output = args.opt_value_from_os_str("--output", parse_path)?;
        let format = args
            .opt_value_from_str::<_, String>("--format")?
            .map(|raw| {
                raw.parse::<ExportFormat>()
                    .map_err(|_| UsageError::InvalidValue {
                        op: "--format".to_string(),
                        value: raw,
                    })
            })
            .transpose()?;
        let preview = args.opt_value_from_os_str("--preview", parse_path)?;
        let save_settings = args.contains("--save-settings");
        let theme = args
            .opt_value_from_str::<_, String>("--theme")?
            .map(|raw| {
                raw.parse::<ThemeMode>()
                    .map_err(|_| UsageError::InvalidValue {
                        op: "--theme".to_string(),
                        value: raw,
                    })
            })
            .transpose()?;

        let mut free = args.finish().into_iter();
        let input = free.next().map(PathBuf::from).ok_or(UsageError::MissingInput)?;
        if let Some(extra) = free.next() {
            return Err(UsageError::Arguments(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }

        Ok(Self {
            lang,
            config_dir,
            ops,
            output,
            format,
            preview,
            theme,
            save_settings,
            input,
        })
    }
}

fn parse_path(value: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}
