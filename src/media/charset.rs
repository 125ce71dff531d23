//! Named text encodings.
//!
//! # Responsibilities
//! - Resolve WHATWG charset labels to a concrete encoding
//! - Encode text to bytes under that encoding
//! - Preserve the caller's label so header text round-trips
//!
//! # Design Decisions
//! - Backed by encoding_rs; label lookup follows the WHATWG Encoding
//!   Standard, including its aliasing (e.g. `iso-8859-1` -> windows-1252,
//!   a superset on the encode side)
//! - Unmappable characters become decimal numeric character references,
//!   the URL standard's percent-encode-after-encoding rule

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// A named text encoding used to turn form text into body bytes.
///
/// Keeps the label it was constructed under: `Charset::for_label("ISO-8859-1")`
/// encodes through windows-1252 (the WHATWG mapping) but still prints
/// `ISO-8859-1` when placed in a content-type header.
#[derive(Debug, Clone)]
pub struct Charset {
    label: Cow<'static, str>,
    encoding: &'static Encoding,
}

impl Charset {
    /// UTF-8, the default charset for form data.
    pub fn utf_8() -> Self {
        Self {
            label: Cow::Borrowed("UTF-8"),
            encoding: UTF_8,
        }
    }

    /// ISO-8859-1 (Latin-1).
    pub fn iso_8859_1() -> Self {
        Self {
            label: Cow::Borrowed("ISO-8859-1"),
            encoding: WINDOWS_1252,
        }
    }

    /// Resolve a charset from a WHATWG label.
    ///
    /// Returns `None` for labels the Encoding Standard does not define
    /// (including the empty string).
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let encoding = Encoding::for_label(label.as_bytes())?;
        Some(Self {
            label: Cow::Owned(label.to_string()),
            encoding,
        })
    }

    /// The label this charset was constructed under.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The underlying encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Whether this charset encodes as UTF-8.
    ///
    /// Drives the strict-compliance header rule: the URL standard specifies
    /// UTF-8 payloads without announcing a charset parameter.
    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Encode `text` to bytes under this charset.
    ///
    /// Unmappable characters are replaced with decimal numeric character
    /// references (`&#NNN;`) by the encoder itself; no validation is added
    /// on top.
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if had_unmappable {
            tracing::trace!(
                charset = %self.label,
                "unmappable characters replaced with numeric references"
            );
        }
        bytes
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding
    }
}

impl Eq for Charset {}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
