//! Error handling for FormCanvas
//!
//! The spatial core itself never fails; errors only come from invalid values
//! supplied by callers, such as an out-of-range configuration field.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Top-level error type shared by the FormCanvas crates.
#[derive(Error, Debug)]
pub enum Error {
    /// A value supplied by a caller is outside its valid range
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Name of the offending field.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    /// Create an invalid value error for `key`
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_value("zoom.max", "must be > 0");
        assert_eq!(err.to_string(), "Invalid value for 'zoom.max': must be > 0");
    }
}
