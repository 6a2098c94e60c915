//! Error handling

use thiserror::Error;

pub type ScoringResult<T> = Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// Malformed weight/threshold/rule tables. Raised at construction time only.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Out-of-domain or non-numeric input to a single call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Config loading errors
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoringError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        ScoringError::Configuration(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ScoringError::InvalidInput(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ScoringError::Configuration(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoringError::InvalidInput(_))
    }
}

/// Reject NaN and infinities before they reach any arithmetic.
pub(crate) fn ensure_finite(name: &str, value: f64) -> ScoringResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::invalid_input(format!("{} must be a finite number, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 1.5).unwrap(), 1.5);
        assert!(ensure_finite("x", f64::NAN).unwrap_err().is_invalid_input());
        assert!(ensure_finite("x", f64::INFINITY).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_error_display() {
        let err = ScoringError::configuration("weights sum to 0.5");
        assert_eq!(err.to_string(), "configuration error: weights sum to 0.5");
        assert!(err.is_configuration());
    }
}
