//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! codec::writer produces:
//!     → tracing events (structured fields, debug level)
//!     → FormSummary → optional injected hook (advisory)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Caller-supplied diagnostics via the hook
//! ```
//!
//! # Design Decisions
//! - Values are masked by default; full dumps are opt-in
//! - The hook is advisory: it can observe a write, never fail one

pub mod logging;

pub use logging::{FormSummary, LogHook};
