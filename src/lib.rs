//! HTTP form body codec.
//!
//! Serializes an ordered, multi-valued string map into
//! `application/x-www-form-urlencoded` bytes and computes the
//! content-type/content-length headers that accompany them. The transport
//! that delivers the bytes sits behind the [`OutputMessage`] seam and is not
//! part of this crate.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                  FORM CODEC                    │
//!                    │                                                │
//!   FormData ────────┼─▶ writer ──▶ media type ──▶ serialize ─┐       │
//!   (one value or    │   can_write   resolution    percent-   │       │
//!    one-item stream)│               + charset     encoding   │       │
//!                    │                                        ▼       │
//!   content-type  ◀──┼────────────────────────────── OutputMessage    │
//!   content-length   │                               (headers + body) │
//!   body bytes       │                                                │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │           Cross-Cutting Concerns         │  │
//!                    │  │   ┌─────────┐        ┌───────────────┐   │  │
//!                    │  │   │ config  │        │ observability │   │  │
//!                    │  │   └─────────┘        └───────────────┘   │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod codec;
pub mod media;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use codec::form::{ElementType, FormData, ValueTag};
pub use codec::output::{BufferedOutput, OutputMessage};
pub use codec::writer::{ComplianceMode, FormWriter, Hints, WriteError, WriteResult};
pub use config::CodecConfig;
pub use media::{Charset, MediaType};
