//! Crate-level error types.

use std::fmt;

/// Errors produced by the shatter crate.
///
/// Per-frame animation never fails; these only surface at the edges
/// (loading options, constructing an [`Experience`](crate::scene::Experience)).
#[derive(Debug)]
pub enum ShatterError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed fine but describe an unusable scene.
    InvalidOptions(String),
}

impl fmt::Display for ShatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid options: {msg}")
            }
        }
    }
}

impl std::error::Error for ShatterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShatterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = ShatterError::InvalidOptions("debris.count is 0".into());
        assert_eq!(err.to_string(), "invalid options: debris.count is 0");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;
        let err: ShatterError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(ShatterError::OptionsParse("bad".into()).source().is_none());
    }
}
