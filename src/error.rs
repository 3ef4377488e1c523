// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Content(String),
    Rotation(RotationError),
}

/// Construction-time failures of a rotating display.
///
/// These are programmer/content errors rather than runtime conditions: a
/// rotation that fails to build keeps its section from mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// The item sequence was empty.
    EmptyItems,

    /// The requested window does not fit in `[1, item_count]`.
    WindowSize { requested: usize, item_count: usize },
}

impl RotationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RotationError::EmptyItems => "error-rotation-empty",
            RotationError::WindowSize { .. } => "error-rotation-window-size",
        }
    }
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::EmptyItems => write!(f, "rotation needs at least one item"),
            RotationError::WindowSize {
                requested,
                item_count,
            } => write!(
                f,
                "window size {} is outside [1, {}]",
                requested, item_count
            ),
        }
    }
}

impl std::error::Error for RotationError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Rotation(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<RotationError> for Error {
    fn from(err: RotationError) -> Self {
        Error::Rotation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn rotation_error_wraps_into_configuration_error() {
        let err: Error = RotationError::EmptyItems.into();
        assert_eq!(
            format!("{}", err),
            "Configuration Error: rotation needs at least one item"
        );
    }

    #[test]
    fn window_size_error_reports_bounds() {
        let err = RotationError::WindowSize {
            requested: 4,
            item_count: 3,
        };
        assert_eq!(format!("{}", err), "window size 4 is outside [1, 3]");
    }

    #[test]
    fn rotation_error_i18n_keys() {
        assert_eq!(RotationError::EmptyItems.i18n_key(), "error-rotation-empty");
        assert_eq!(
            RotationError::WindowSize {
                requested: 0,
                item_count: 1
            }
            .i18n_key(),
            "error-rotation-window-size"
        );
    }
}
