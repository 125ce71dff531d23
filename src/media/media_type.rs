//! Media type representation.
//!
//! # Responsibilities
//! - Hold a type/subtype pair plus an ordered parameter map
//! - Parse header text and print it back without re-ordering
//! - Answer compatibility questions (charset and parameters ignored)
//!
//! # Design Decisions
//! - Type, subtype and parameter names are case-insensitive (per RFC 2045)
//!   and stored lowercased; parameter values keep their original case
//! - The charset parameter value compares case-insensitively
//! - Parameters keep insertion order so a stripped or added parameter never
//!   reshuffles the header
//! - Printed form uses no whitespace (`type/subtype;p=v`); parsing tolerates it

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use thiserror::Error;

use crate::media::charset::Charset;

/// The charset parameter name.
const CHARSET: &str = "charset";

/// A media type: `type/subtype` plus ordered parameters.
#[derive(Debug, Clone)]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: IndexMap<String, String>,
}

/// Error for unparseable media type text.
#[derive(Debug, Error)]
#[error("invalid media type: {0:?}")]
pub struct InvalidMediaType(pub String);

impl MediaType {
    /// Create a media type with no parameters.
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            type_: type_.into().to_lowercase(),
            subtype: subtype.into().to_lowercase(),
            parameters: IndexMap::new(),
        }
    }

    /// `application/x-www-form-urlencoded`, no parameters.
    pub fn form_urlencoded() -> Self {
        Self::new("application", "x-www-form-urlencoded")
    }

    /// Append or replace a parameter, keeping its position if it exists.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Copy of this media type with the charset parameter set to `charset`.
    pub fn with_charset(&self, charset: &Charset) -> Self {
        self.clone().with_parameter(CHARSET, charset.label())
    }

    /// Copy of this media type with `name` removed; remaining parameters
    /// keep their original order.
    pub fn without_parameter(&self, name: &str) -> Self {
        let mut copy = self.clone();
        copy.parameters.shift_remove(&name.to_lowercase());
        copy
    }

    /// The primary type (e.g. `application`).
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The subtype (e.g. `x-www-form-urlencoded`).
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Parameter value by case-insensitive name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Parameters in insertion order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// The raw charset parameter value, if present.
    pub fn charset_label(&self) -> Option<&str> {
        self.parameter(CHARSET)
    }

    /// The charset parameter resolved to an encoding, if present and known.
    pub fn charset(&self) -> Option<Charset> {
        self.charset_label().and_then(Charset::for_label)
    }

    /// Same type and subtype, parameters ignored.
    pub fn equals_type_and_subtype(&self, other: &MediaType) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }

    /// Compatibility check: type and subtype match, with `*` treated as a
    /// wildcard on either side. Parameters (charset included) play no part.
    pub fn is_compatible_with(&self, other: &MediaType) -> bool {
        let type_ok = self.type_ == "*" || other.type_ == "*" || self.type_ == other.type_;
        let subtype_ok =
            self.subtype == "*" || other.subtype == "*" || self.subtype == other.subtype;
        type_ok && subtype_ok
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        if !self.equals_type_and_subtype(other)
            || self.parameters.len() != other.parameters.len()
        {
            return false;
        }
        // Order does not matter for equality; the charset value is
        // case-insensitive, every other value is compared exactly.
        self.parameters.iter().all(|(name, value)| {
            match other.parameters.get(name) {
                Some(other_value) if name == CHARSET => value.eq_ignore_ascii_case(other_value),
                Some(other_value) => value == other_value,
                None => false,
            }
        })
    }
}

impl Eq for MediaType {}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, ";{}={}", name, value)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = InvalidMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split(';');
        let essence = segments.next().unwrap_or("").trim();
        let (type_, subtype) = essence
            .split_once('/')
            .ok_or_else(|| InvalidMediaType(s.to_string()))?;
        if type_.is_empty() || subtype.is_empty() {
            return Err(InvalidMediaType(s.to_string()));
        }

        let mut media_type = MediaType::new(type_, subtype);
        for segment in segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let (name, value) = segment
                .split_once('=')
                .ok_or_else(|| InvalidMediaType(s.to_string()))?;
            let value = value.trim().trim_matches('"');
            media_type = media_type.with_parameter(name.trim(), value);
        }
        Ok(media_type)
    }
}
