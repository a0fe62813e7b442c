//! Error types for the stepper widget.
//!
//! All failures are local, synchronous configuration or range errors reported
//! to the caller; there is no I/O and nothing is retried.

use thiserror::Error;

/// Errors produced by stepper construction and state changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepperError {
    /// Construction parameters out of range (step count, cover ratio).
    #[error("invalid stepper configuration: {0}")]
    InvalidConfiguration(String),

    /// `set_current_step` called with an index outside [0, step_count).
    #[error("step index {index} out of range (step count {step_count})")]
    IndexOutOfRange { index: usize, step_count: usize },
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, StepperError>;

/// Errors from demo settings persistence (file I/O and JSON parsing).
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    FileNotFound(String),

    #[error("invalid JSON in settings: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("cannot determine settings path: {0}")]
    PathUnavailable(String),

    #[error("IO error during settings operation: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_display() {
        let err = StepperError::InvalidConfiguration("step_count must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid stepper configuration: step_count must be >= 1"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = StepperError::IndexOutOfRange {
            index: 7,
            step_count: 4,
        };
        assert_eq!(err.to_string(), "step index 7 out of range (step count 4)");
    }

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::FileNotFound("/tmp/nope.json".to_string());
        assert_eq!(err.to_string(), "settings file not found: /tmp/nope.json");
    }
}
