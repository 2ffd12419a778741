//! Error types for desk-launcher

use thiserror::Error;

use crate::launcher::LaunchError;

/// Result type alias for desk-launcher operations
pub type Result<T> = std::result::Result<T, DeskError>;

/// Crate-level error type
///
/// Module-specific errors convert into this via `#[from]`; callers that only
/// care about "did it work" can match on this, callers that render launcher
/// failures match on [`LaunchError`] directly.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_error_conversion() {
        let err: DeskError = LaunchError::Unsupported.into();
        assert!(matches!(err, DeskError::Launch(LaunchError::Unsupported)));
        assert!(err.to_string().contains("No launcher available"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DeskError = io.into();
        assert!(matches!(err, DeskError::Io(_)));
    }
}
