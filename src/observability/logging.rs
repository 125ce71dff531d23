//! Structured logging and the advisory form-logging hook.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber from configuration
//! - Summarize form data for diagnostics, masked unless details are enabled
//! - Fire the optional injected hook without letting it fail a write
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Log level configurable via config and environment (env wins)
//! - Hook panics are caught and discarded; diagnostics never block output

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::fmt;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::codec::form::FormData;
use crate::config::schema::LoggingConfig;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Safe to call more
/// than once; later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!("form_codec={}", config.level))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Diagnostic view of form data about to be written.
#[derive(Debug, Clone)]
pub enum FormSummary {
    /// Complete key/value dump.
    Full(String),
    /// Key names only, values masked.
    Masked(Vec<String>),
}

impl FormSummary {
    /// Full dump including values.
    pub fn full(form: &FormData) -> Self {
        let mut dump = String::from("{");
        for (i, key) in form.keys().enumerate() {
            if i > 0 {
                dump.push_str(", ");
            }
            dump.push_str(key);
            dump.push_str(": [");
            for (j, value) in form.get(key).unwrap_or(&[]).iter().enumerate() {
                if j > 0 {
                    dump.push_str(", ");
                }
                match value {
                    Some(value) => dump.push_str(value),
                    None => dump.push_str("<none>"),
                }
            }
            dump.push(']');
        }
        dump.push('}');
        FormSummary::Full(dump)
    }

    /// Keys only.
    pub fn masked(form: &FormData) -> Self {
        FormSummary::Masked(form.keys().map(str::to_string).collect())
    }
}

impl fmt::Display for FormSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormSummary::Full(dump) => f.write_str(dump),
            FormSummary::Masked(keys) => {
                write!(f, "form fields [{}] (content masked)", keys.join(", "))
            }
        }
    }
}

/// Advisory hook invoked with the form summary before serialization.
pub type LogHook = Arc<dyn Fn(&FormSummary) + Send + Sync>;

/// Invoke `hook`, discarding any panic it raises.
pub fn fire_hook(hook: &LogHook, summary: &FormSummary) {
    if panic::catch_unwind(AssertUnwindSafe(|| hook(summary))).is_err() {
        tracing::warn!("form logging hook panicked; ignoring");
    }
}
