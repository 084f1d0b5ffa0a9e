//! Error types for the birthday trip site

use thiserror::Error;

/// Main error type for trip operations
#[derive(Error, Debug)]
pub enum TripError {
    /// Caller passed arguments outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Site configuration is unusable
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TripError
pub type TripResult<T> = Result<T, TripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TripError::InvalidArgument("min_size > max_size".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: min_size > max_size");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let trip_err: TripError = io_err.into();
        assert!(matches!(trip_err, TripError::Io(_)));
    }
}
