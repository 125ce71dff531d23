//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the codec.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the form codec.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CodecConfig {
    /// Encoder settings.
    pub encoder: EncoderConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Encoder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Default charset label, used when the requested media type does not
    /// carry a charset parameter.
    pub default_charset: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_charset: "UTF-8".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Include form keys AND values in diagnostics. Off by default: form
    /// fields routinely carry credentials, so only key names are logged.
    pub log_form_details: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_form_details: false,
        }
    }
}
