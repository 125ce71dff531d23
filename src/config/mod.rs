//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CodecConfig (validated, immutable)
//!     → FormWriter::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the writer's charset setter is the one
//!   post-startup mutation point, and callers synchronize that themselves
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::CodecConfig;
pub use schema::EncoderConfig;
pub use schema::LoggingConfig;
