//! Shared utilities for integration tests.

use std::io;

use bytes::Bytes;
use form_codec::{FormData, OutputMessage};
use http::HeaderMap;

/// The shared write fixture: repeated keys, a bare key, spaces, `+` and
/// umlauts, so one form exercises every encoding rule.
pub fn sample_form() -> FormData {
    let mut form = FormData::new();
    form.set("name 1", "value 1");
    form.add("name 2", "value 2+1");
    form.add("name 2", "value 2+2");
    form.add_bare("name 3");
    form.add("name 4", "äöüß");
    form
}

/// `sample_form` serialized under UTF-8.
pub const SAMPLE_BODY_UTF8: &str =
    "name+1=value+1&name+2=value+2%2B1&name+2=value+2%2B2&name+3&name+4=%C3%A4%C3%B6%C3%BC%C3%9F";

/// `sample_form` serialized under ISO-8859-1.
pub const SAMPLE_BODY_LATIN1: &str =
    "name+1=value+1&name+2=value+2%2B1&name+2=value+2%2B2&name+3&name+4=%E4%F6%FC%DF";

/// Output message whose body sink always fails.
#[derive(Debug, Default)]
pub struct FailingOutput {
    headers: HeaderMap,
}

#[allow(dead_code)]
impl FailingOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputMessage for FailingOutput {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_body(&mut self, _body: Bytes) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport closed"))
    }
}
