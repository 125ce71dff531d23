//! Form-urlencoded serialization.
//!
//! # Responsibilities
//! - Percent-encode keys and values under the resolved charset
//! - Join pairs with `&`, values with `=`, bare keys with neither
//!
//! # Design Decisions
//! - Follows the form-urlencoding rule set, not raw percent-encoding:
//!   space → `+`, `A-Za-z0-9 - _ . *` literal, everything else `%XX`
//! - Escaping operates on the byte representation under the given charset,
//!   so non-ASCII characters escape per that charset rather than always UTF-8
//! - Output is pure ASCII whatever the charset, so the buffer's length is
//!   the content-length

use std::fmt::Write;

use crate::codec::form::FormData;
use crate::media::Charset;

/// Serialize form data to the `k1=v1&k2=v2&k3` wire form under `charset`.
pub fn serialize_form(form: &FormData, charset: &Charset) -> String {
    let mut out = String::new();
    for (key, value) in form.pairs() {
        if !out.is_empty() {
            out.push('&');
        }
        encode_into(&mut out, key, charset);
        if let Some(value) = value {
            out.push('=');
            encode_into(&mut out, value, charset);
        }
    }
    out
}

/// Form-urlencode a single token under `charset`.
pub fn form_encode(text: &str, charset: &Charset) -> String {
    let mut out = String::new();
    encode_into(&mut out, text, charset);
    out
}

fn encode_into(out: &mut String, text: &str, charset: &Charset) {
    for &byte in charset.encode(text).iter() {
        match byte {
            b' ' => out.push('+'),
            b if is_unreserved(b) => out.push(b as char),
            b => {
                // write! to a String cannot fail
                let _ = write!(out, "%{:02X}", b);
            }
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'*')
}
