use std::fmt::Formatter;
use std::io::Read;

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{Error, ErrorKind, Result};
use crate::http_client::{Body, Response};

/// Outcome of a single call: the status, the response headers and a body
/// that can be read exactly once.
///
/// Every read method takes `self`, so the body stream is closed when the
/// read returns, whether it succeeded or not, and cannot be read again.
pub struct CallResult {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl CallResult {
    /// Status code as sent by the server, untouched.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Drains the body and closes it.
    pub fn bytes(self) -> Result<Vec<u8>> {
        let mut body = self.body;
        let mut buf = Vec::new();
        let read = body.read_to_end(&mut buf);
        drop(body);

        read.map_err(|e| Error::from(ErrorKind::Io(e)))?;
        trace!(bytes = buf.len(), "read response body");
        Ok(buf)
    }

    /// The body as text. Invalid UTF-8 is replaced rather than rejected.
    pub fn text(self) -> Result<String> {
        let bytes = self.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Parses the body as JSON into `T`. Use `serde_json::Value` when the
    /// shape is not known ahead of time.
    ///
    /// The body is closed before parsing starts.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.bytes()?;
        serde_json::from_slice(&bytes).map_err(|e| ErrorKind::Parse(e).into())
    }
}

impl From<Response> for CallResult {
    fn from(response: Response) -> Self {
        let (parts, body) = response.into_parts();
        CallResult {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

impl std::fmt::Debug for CallResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallResult")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
