//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject labels that would break `key=value` / `key: value` rendering
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>
//! - Runs before a configured logger is built

use thiserror::Error;

use crate::config::schema::{BackendKind, LoggingConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target must not be empty for the {0} backend")]
    EmptyTarget(BackendKind),

    #[error("context label must not be empty")]
    EmptyContextLabel,

    #[error("context label {0:?} contains whitespace or '='")]
    InvalidContextLabel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backend == BackendKind::Log && config.target.trim().is_empty() {
        errors.push(ValidationError::EmptyTarget(config.backend));
    }

    for label in config.context.keys() {
        if label.is_empty() {
            errors.push(ValidationError::EmptyContextLabel);
        } else if label.chars().any(|c| c.is_whitespace() || c == '=') {
            errors.push(ValidationError::InvalidContextLabel(label.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
