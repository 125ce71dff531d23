//! Form writer: media-type negotiation and body emission.
//!
//! # Responsibilities
//! - Decide writability from an element-type descriptor and requested type
//! - Resolve the effective media type and charset
//! - Compute the content-type header under the compliance mode
//! - Serialize and hand headers + body to the output message
//!
//! # Data Flow
//! ```text
//! FormData (one value, or a stream yielding exactly one)
//!     → resolve_media_type (requested type, configured default charset)
//!     → content-type computation (strict/lenient)
//!     → serialize.rs (percent-encoded pairs under the charset)
//!     → OutputMessage (content-type, content-length, body bytes)
//! ```
//!
//! # Design Decisions
//! - The compliance mode travels in the per-call hints, never on the writer
//! - The default charset is the writer's only mutable state; it is set during
//!   startup, callers guard later mutation themselves
//! - Serialization itself is synchronous; only the input stream drain awaits

use std::collections::HashMap;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::HeaderValue;
use serde_json::Value;
use thiserror::Error;

use crate::codec::form::{ElementType, FormData};
use crate::codec::output::OutputMessage;
use crate::codec::serialize::serialize_form;
use crate::config::schema::CodecConfig;
use crate::media::{Charset, MediaType};
use crate::observability::logging::{fire_hook, FormSummary, LogHook};

/// Errors from configuring or running a write.
#[derive(Debug, Error)]
pub enum WriteError {
    /// A setter or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input stream completed without producing a form.
    #[error("form payload stream completed without a value")]
    MissingPayload,

    /// The input stream produced more than one form.
    #[error("form payload stream produced more than one value")]
    MultiplePayloads,

    /// The output message refused the body.
    #[error("output message write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Whether to emit charset-parameter-free headers per the URL standard
/// (strict) or preserve legacy explicit-charset headers (lenient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplianceMode {
    Strict,
    #[default]
    Lenient,
}

impl ComplianceMode {
    fn from_hints(hints: &Hints) -> Self {
        if hints.strict_charset_compliance() {
            ComplianceMode::Strict
        } else {
            ComplianceMode::Lenient
        }
    }
}

/// Per-call options, a string-keyed map of loosely typed values.
#[derive(Debug, Clone, Default)]
pub struct Hints {
    entries: HashMap<String, Value>,
}

impl Hints {
    /// Send payloads per the URL standard: UTF-8 without announcing a
    /// charset parameter. Boolean, default false.
    pub const STRICT_CHARSET_COMPLIANCE: &'static str = "strict-charset-compliance";

    /// Prefix prepended to diagnostic output. String, default empty.
    pub const LOG_PREFIX: &'static str = "log-prefix";

    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn strict_charset_compliance(&self) -> bool {
        self.get(Self::STRICT_CHARSET_COMPLIANCE)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn log_prefix(&self) -> &str {
        self.get(Self::LOG_PREFIX)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// Writes an ordered multi-valued string map as
/// `application/x-www-form-urlencoded` body data.
pub struct FormWriter {
    default_charset: Charset,
    log_form_details: bool,
    log_hook: Option<LogHook>,
}

impl Default for FormWriter {
    fn default() -> Self {
        Self {
            default_charset: Charset::utf_8(),
            log_form_details: false,
            log_hook: None,
        }
    }
}

impl FormWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a writer from a validated configuration.
    pub fn from_config(config: &CodecConfig) -> WriteResult<Self> {
        let mut writer = Self::new();
        writer.set_default_charset_label(&config.encoder.default_charset)?;
        writer.log_form_details = config.logging.log_form_details;
        Ok(writer)
    }

    /// The charset used when the requested media type carries none.
    pub fn default_charset(&self) -> &Charset {
        &self.default_charset
    }

    /// Replace the default charset.
    pub fn set_default_charset(&mut self, charset: Charset) {
        self.default_charset = charset;
    }

    /// Replace the default charset by label. Unknown labels (including the
    /// empty string) are rejected before any encode can observe them.
    pub fn set_default_charset_label(&mut self, label: &str) -> WriteResult<()> {
        let charset = Charset::for_label(label).ok_or_else(|| {
            WriteError::InvalidArgument(format!("unknown charset label: {label:?}"))
        })?;
        self.default_charset = charset;
        Ok(())
    }

    /// Include form values in diagnostics (masked by default).
    pub fn set_log_form_details(&mut self, enabled: bool) {
        self.log_form_details = enabled;
    }

    /// Inject an advisory diagnostic hook. It observes the form summary
    /// before serialization and can never fail the write.
    pub fn set_log_hook(&mut self, hook: LogHook) {
        self.log_hook = Some(hook);
    }

    /// The media types this writer can produce.
    pub fn writable_media_types(&self) -> Vec<MediaType> {
        vec![MediaType::form_urlencoded()]
    }

    /// Whether this writer can produce `media_type` for the declared
    /// `element` shape. Pure; no side effects.
    pub fn can_write(&self, element: &ElementType, media_type: Option<&MediaType>) -> bool {
        if !matches!(element, ElementType::MultiMap { .. }) {
            return false;
        }
        match media_type {
            // Optimistic: a generic multi-map can still hold strings at
            // runtime, so the declared value tag does not gate acceptance.
            None => true,
            Some(requested) => requested.is_compatible_with(&MediaType::form_urlencoded()),
        }
    }

    /// Resolve the media type to encode against. Never fails.
    pub fn resolve_media_type(&self, requested: Option<&MediaType>) -> MediaType {
        match requested {
            None => MediaType::form_urlencoded().with_charset(&Charset::utf_8()),
            Some(requested) if requested.charset_label().is_some() => requested.clone(),
            Some(requested) => requested.with_charset(&self.default_charset),
        }
    }

    /// Write the single form produced by `input`.
    ///
    /// The stream must yield exactly one value; zero or several is a
    /// contract violation surfaced as an error rather than silently picking
    /// one.
    pub async fn write<S, M>(
        &self,
        input: S,
        media_type: Option<&MediaType>,
        message: &mut M,
        hints: &Hints,
    ) -> WriteResult<()>
    where
        S: Stream<Item = FormData> + Unpin,
        M: OutputMessage,
    {
        let form = single_value(input).await?;
        self.write_form(&form, media_type, message, hints)
    }

    /// Write one form value: set content-type and content-length, then hand
    /// the body buffer to the output message.
    pub fn write_form<M: OutputMessage>(
        &self,
        form: &FormData,
        media_type: Option<&MediaType>,
        message: &mut M,
        hints: &Hints,
    ) -> WriteResult<()> {
        let resolved = self.resolve_media_type(media_type);
        let charset = self.effective_charset(&resolved);
        let mode = ComplianceMode::from_hints(hints);
        let content_type = self.content_type_for(&resolved, &charset, mode);

        let header = HeaderValue::from_str(&content_type.to_string()).map_err(|_| {
            WriteError::InvalidArgument(format!("content type not header-safe: {content_type}"))
        })?;
        message.headers_mut().insert(CONTENT_TYPE, header);

        self.log_form(form, hints);

        let body = serialize_form(form, &charset);
        message
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(body.len() as u64));
        message.set_body(Bytes::from(body))?;
        Ok(())
    }

    /// Charset parameter of the resolved media type if present and known,
    /// else the configured default.
    fn effective_charset(&self, resolved: &MediaType) -> Charset {
        match resolved.charset_label() {
            Some(label) => Charset::for_label(label).unwrap_or_else(|| {
                tracing::warn!(
                    label,
                    fallback = %self.default_charset,
                    "unrecognized charset parameter, using default"
                );
                self.default_charset.clone()
            }),
            None => self.default_charset.clone(),
        }
    }

    /// Exact content-type header value for the resolved media type.
    fn content_type_for(
        &self,
        resolved: &MediaType,
        charset: &Charset,
        mode: ComplianceMode,
    ) -> MediaType {
        if mode == ComplianceMode::Lenient {
            return resolved.clone();
        }
        let bare = MediaType::form_urlencoded();
        if !resolved.equals_type_and_subtype(&bare) || !charset.is_utf8() {
            // Strict mode must not silently alter other types or non-UTF-8
            // payload announcements.
            return resolved.clone();
        }
        if resolved.parameter_count() <= 1 {
            // The charset was the only parameter (the built-in default case
            // included): collapse to the bare type.
            bare
        } else {
            resolved.without_parameter("charset")
        }
    }

    fn log_form(&self, form: &FormData, hints: &Hints) {
        let summary = if self.log_form_details {
            FormSummary::full(form)
        } else {
            FormSummary::masked(form)
        };
        tracing::debug!(prefix = hints.log_prefix(), form = %summary, "writing form data");
        if let Some(hook) = &self.log_hook {
            fire_hook(hook, &summary);
        }
    }
}

/// Adapt a stream expected to yield exactly one value.
async fn single_value<S: Stream<Item = FormData> + Unpin>(mut input: S) -> WriteResult<FormData> {
    let first = input.next().await.ok_or(WriteError::MissingPayload)?;
    if input.next().await.is_some() {
        return Err(WriteError::MultiplePayloads);
    }
    Ok(first)
}
