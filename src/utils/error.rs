use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApwgenError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Character pool '{pool}' must contain at least one character")]
    InvalidPool { pool: String },

    #[error("Not enough words to add delimiter between ({words} given, at least 2 required)")]
    InsufficientWords { words: usize },

    #[error("Cannot substitute a character in an empty passphrase")]
    EmptyInput,

    #[error("Position {position} is out of range for a passphrase of length {length}")]
    IndexOutOfRange { position: usize, length: usize },

    #[error("Cannot insert {requested} {kind}, only {available} positions available")]
    CapacityExceeded {
        kind: String,
        requested: usize,
        available: usize,
    },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Options that cannot produce a passphrase.
    Input,
    /// Not enough free positions at generation time.
    Generation,
    /// A substitution precondition was broken.
    Internal,
    Configuration,
}

impl ApwgenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApwgenError::InvalidArgument { .. }
            | ApwgenError::InvalidPool { .. }
            | ApwgenError::InsufficientWords { .. }
            | ApwgenError::ValidationError { .. } => ErrorCategory::Input,
            ApwgenError::CapacityExceeded { .. } => ErrorCategory::Generation,
            ApwgenError::EmptyInput | ApwgenError::IndexOutOfRange { .. } => {
                ErrorCategory::Internal
            }
            ApwgenError::ConfigError { .. } | ApwgenError::IoError(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApwgenError::ValidationError { message, .. } => message.clone(),
            ApwgenError::CapacityExceeded {
                kind,
                requested,
                available,
            } => format!(
                "Too many {} requested (requested {} of {} available).",
                kind, requested, available
            ),
            ApwgenError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApwgenError::InvalidArgument { .. } => {
                "Use a positive number of words and syllables"
            }
            ApwgenError::InvalidPool { .. } => {
                "Supply at least one character for --vowels, --consonants and --numerics"
            }
            ApwgenError::InsufficientWords { .. } => {
                "Request at least two words, or pass an empty --delimiters"
            }
            ApwgenError::CapacityExceeded { .. } => {
                "Lower --numdigits/--upper, add words, or try --allnums"
            }
            ApwgenError::ValidationError { .. } => "Check the command line options with --help",
            ApwgenError::ConfigError { .. } | ApwgenError::IoError(_) => {
                "Make sure the profile exists and is valid TOML"
            }
            ApwgenError::EmptyInput | ApwgenError::IndexOutOfRange { .. } => {
                "This is a bug, please report it"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApwgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_counts() {
        let err = ApwgenError::CapacityExceeded {
            kind: "digits".to_string(),
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Cannot insert 6 digits, only 5 positions available"
        );
        assert_eq!(err.category(), ErrorCategory::Generation);
        assert!(err.user_friendly_message().contains("6 of 5"));
    }

    #[test]
    fn test_internal_errors_are_categorized() {
        assert_eq!(ApwgenError::EmptyInput.category(), ErrorCategory::Internal);
        let err = ApwgenError::IndexOutOfRange {
            position: 8,
            length: 8,
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ApwgenError = io.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
