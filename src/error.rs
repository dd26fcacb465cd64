// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

/// Crate-wide error type.
///
/// Payloads are plain strings so the error stays `Clone` and can travel inside
/// session events and notifications.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    /// The input bytes could not be decoded as an image.
    #[error("Decode Error: {0}")]
    Decode(String),

    /// The image could not be encoded to the requested format.
    #[error("Encode Error: {0}")]
    Encode(String),

    /// A filter could not be applied to the current image.
    #[error("Filter Error: {0}")]
    Filter(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The file extension or format name is not one we can export.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Decode(_) => "error-load-image",
            Error::Encode(_) => "error-save-image",
            Error::Filter(_) => "error-filter",
            Error::Config(_) => "error-config",
            Error::UnsupportedFormat(_) => "error-unsupported-format",
        }
    }

    /// Returns the raw detail message without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Error::Io(msg)
            | Error::Decode(msg)
            | Error::Encode(msg)
            | Error::Filter(msg)
            | Error::Config(msg)
            | Error::UnsupportedFormat(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        use image_rs::ImageError;

        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            ImageError::Encoding(e) => Error::Encode(e.to_string()),
            ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
