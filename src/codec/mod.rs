//! Form encoding subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → form.rs (ordered multi-valued map, element descriptor)
//!     → writer.rs (writability, media-type/charset resolution, headers)
//!     → serialize.rs (percent-encoded pairs under the charset)
//!     → output.rs (headers + body handed to the transport)
//! ```

pub mod form;
pub mod output;
pub mod serialize;
pub mod writer;

pub use form::{ElementType, FormData, ValueTag};
pub use output::{BufferedOutput, OutputMessage};
pub use writer::{ComplianceMode, FormWriter, Hints, WriteError, WriteResult};
