//! Output message seam.
//!
//! The writer's whole contract with the transport is "here are the headers,
//! here is the body buffer". Delivery of those bytes, and any cancellation
//! of it, belongs to the transport behind this trait.

use std::io;

use bytes::Bytes;
use http::HeaderMap;

/// Receiving side of a write: mutable headers plus a one-shot body sink.
pub trait OutputMessage {
    /// Headers to be sent with the body.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Accept the serialized body. Called at most once per write.
    fn set_body(&mut self, body: Bytes) -> io::Result<()>;
}

/// In-memory output message: collects headers and body for callers that
/// assemble requests themselves, and for tests.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (headers, body).
    pub fn into_parts(self) -> (HeaderMap, Option<Bytes>) {
        (self.headers, self.body)
    }
}

impl OutputMessage for BufferedOutput {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn set_body(&mut self, body: Bytes) -> io::Result<()> {
        self.body = Some(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_output_collects_parts() {
        let mut out = BufferedOutput::new();
        out.headers_mut()
            .insert("x-test", http::HeaderValue::from_static("1"));
        out.set_body(Bytes::from_static(b"a=1")).unwrap();

        let (headers, body) = out.into_parts();
        assert_eq!(headers.get("x-test").unwrap(), "1");
        assert_eq!(body.unwrap().as_ref(), b"a=1");
    }
}
