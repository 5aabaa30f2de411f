//! # fluent-http
//!
//! fluent-http is a small fluent HTTP client. Point it at a base URL, set
//! the headers every call should carry, then send GET and POST calls and
//! decode what comes back as text or JSON.
//!
//! The network work is done by an [`HttpClient`] transport. The default one,
//! [`ReqwestHttpClient`], is built on blocking reqwest.
//!
//! ## Usage
//!
//! ```no_run
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use fluent_http::{ClientConfig, HttpClient, ReqwestHttpClient, RequestSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReqwestHttpClient::create(ClientConfig::new(true, Some(Duration::from_secs(5))))?;
//! let mut spec = RequestSpec::new("http://httpbin.org", Arc::new(client))?;
//! spec.set_header("Accept", "application/json")?
//!     .set_header("Content-Type", "application/json")?;
//!
//! let mut params = HashMap::new();
//! params.insert("foo".to_string(), "bar".to_string());
//! let response = spec.get("/get", Some(&params))?;
//! println!("{}", response.status_code());
//! let body: serde_json::Value = response.json()?;
//! println!("{}", body);
//!
//! let response = spec.post("/post", &serde_json::json!({ "foo": "bar" }))?;
//! println!("{}", response.text()?);
//! # Ok(())
//! # }
//! ```
//!
//! A response with a 4xx or 5xx status is not an error. Check
//! [`CallResult::status_code`] and decide for yourself.

use std::time::Duration;

mod error;
pub mod http_client;
pub mod request;
mod response;

pub use error::{Error, ErrorKind, Result};
pub use http_client::reqwest::ReqwestHttpClient;
pub use http_client::HttpClient;
pub use request::{Method, PendingCall, RequestSpec};
pub use response::CallResult;

/// Settings a transport is built with.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Reject invalid TLS certificates
    pub ssl_check: bool,
    /// Total time allowed for one call, `None` for the transport's own default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ssl_check: true,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool, timeout: Option<Duration>) -> Self {
        Self { ssl_check, timeout }
    }
}
