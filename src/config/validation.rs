//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check charset labels resolve to a known encoding
//! - Validate log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CodecConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::CodecConfig;
use crate::media::Charset;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The default charset label is not a known encoding.
    #[error("unknown charset label: {0:?}")]
    UnknownCharset(String),

    /// The log level is not one tracing understands.
    #[error("unknown log level: {0:?}")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &CodecConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Charset::for_label(&config.encoder.default_charset).is_none() {
        errors.push(ValidationError::UnknownCharset(
            config.encoder.default_charset.clone(),
        ));
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
