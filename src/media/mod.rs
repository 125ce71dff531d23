//! Media type and charset handling.
//!
//! # Data Flow
//! ```text
//! caller's requested media type (optional)
//!     → media_type.rs (parse, parameters, compatibility)
//!     → charset.rs (label → encoding, text → bytes)
//!     → codec::writer (resolution, header computation)
//! ```
//!
//! # Design Decisions
//! - Media types are immutable once constructed; "mutation" returns copies
//! - Charset labels follow the WHATWG Encoding Standard via encoding_rs

pub mod charset;
pub mod media_type;

pub use charset::Charset;
pub use media_type::{InvalidMediaType, MediaType};
