//! The request builder and executor.
//!
//! A [`RequestSpec`] is made once per base URL and transport and reused for
//! many calls. Headers set on it stick to every call made afterwards; query
//! parameters and bodies belong to a single [`PendingCall`].
//!
//! Header mutation goes through `&mut self`, so the borrow checker keeps it
//! from racing with calls in flight. To share a configured spec across
//! threads, finish setting headers first and put it behind an `Arc`: calls
//! only need `&self`.

use std::collections::HashMap;
use std::sync::Arc;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, ErrorKind, Result};
use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{HttpClient, Request};
use crate::response::CallResult;
use crate::ClientConfig;


#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Method {
    Get,
    Post,
}

impl From<&Method> for http::Method {
    fn from(method: &Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
        }
    }
}

/// One call waiting to be sent: where it goes and what it carries.
#[derive(Debug, Clone)]
pub struct PendingCall {
    pub method: Method,
    pub path: String,
    pub params: Option<HashMap<String, String>>,
    pub body: Option<Vec<u8>>,
}

impl PendingCall {
    pub fn get(path: &str, params: Option<&HashMap<String, String>>) -> PendingCall {
        PendingCall {
            method: Method::Get,
            path: path.to_string(),
            params: params.cloned(),
            body: None,
        }
    }

    /// Serializes `body` to JSON up front, so a body that can't be encoded
    /// never reaches the transport.
    pub fn post<T: Serialize + ?Sized>(path: &str, body: &T) -> Result<PendingCall> {
        let body = serde_json::to_vec(body).map_err(|e| Error::from(ErrorKind::Serialization(e)))?;
        Ok(PendingCall {
            method: Method::Post,
            path: path.to_string(),
            params: None,
            body: Some(body),
        })
    }
}

pub struct RequestSpec {
    base_url: String,
    headers: HeaderMap,
    client: Arc<dyn HttpClient>,
}

impl RequestSpec {
    /// Requests are sent to `base_url` followed by the call's path, through
    /// `client`. The caller keeps its own handle on the client and decides how
    /// it is configured.
    pub fn new(base_url: &str, client: Arc<dyn HttpClient>) -> Result<RequestSpec> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::construction(format!("invalid base url {:?}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() || !parsed.has_host() {
            return Err(Error::construction(format!(
                "base url {:?} needs a scheme and a host",
                base_url
            )));
        }

        Ok(RequestSpec {
            base_url: base_url.to_string(),
            headers: HeaderMap::new(),
            client,
        })
    }

    /// Same as [`RequestSpec::new`] with a [`ReqwestHttpClient`] built from
    /// the default [`ClientConfig`].
    pub fn with_default_client(base_url: &str) -> Result<RequestSpec> {
        let client = ReqwestHttpClient::create(ClientConfig::default())
            .map_err(|e| Error::from(ErrorKind::Transport(e)))?;
        RequestSpec::new(base_url, Arc::new(client))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets a header for every call made from now on. Names are matched
    /// case-insensitively, so setting a name again in any case replaces its
    /// value.
    pub fn set_header(
        &mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<&mut RequestSpec> {
        let (key, value) = (key.as_ref(), value.as_ref());
        if key.is_empty() {
            return Err(Error::construction("header name must not be empty"));
        }
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| Error::construction(format!("header name {:?}: {}", key, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::construction(format!("header {:?} value: {}", key, e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Builder form of [`RequestSpec::set_header`].
    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<RequestSpec> {
        self.set_header(key, value)?;
        Ok(self)
    }

    /// GET `base_url + path`, with `params` encoded into the query string.
    ///
    /// Any query already on `path` is merged with `params` and the whole
    /// query is re-encoded sorted by key, so the same call always produces
    /// the same URL. The URL is normalized while parsing: dot segments such
    /// as `/a/../b` are resolved and unsafe characters are percent-encoded.
    pub fn get(&self, path: &str, params: Option<&HashMap<String, String>>) -> Result<CallResult> {
        self.send(PendingCall::get(path, params))
    }

    /// POST `body` as JSON to `base_url + path`, normalized the same way as
    /// [`RequestSpec::get`]. No `Content-Type` is added; set it as a header if
    /// the server needs one.
    pub fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<CallResult> {
        self.send(PendingCall::post(path, body)?)
    }

    pub fn send(&self, call: PendingCall) -> Result<CallResult> {
        let request = self.build(call)?;
        debug!(method = %request.method(), uri = %request.uri(), "sending request");

        let response = self
            .client
            .execute(request)
            .map_err(|e| Error::from(ErrorKind::Transport(e)))?;
        debug!(status = response.status().as_u16(), "received response");

        Ok(response.into())
    }

    fn build(&self, call: PendingCall) -> Result<Request> {
        let PendingCall {
            method,
            path,
            params,
            body,
        } = call;
        let url = self.url(&path, params.as_ref())?;

        let mut builder = http::Request::builder()
            .method(http::Method::from(&method))
            .uri(url.as_str());
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }

        builder
            .body(body)
            .map_err(|e| Error::construction(format!("{} {}: {}", http::Method::from(&method), url, e)))
    }

    fn url(&self, path: &str, params: Option<&HashMap<String, String>>) -> Result<Url> {
        let target = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&target)
            .map_err(|e| Error::construction(format!("invalid url {:?}: {}", target, e)))?;

        if let Some(params) = params.filter(|params| !params.is_empty()) {
            let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            pairs.extend(params.iter().map(|(k, v)| (k.clone(), v.clone())));
            // stable: repeated keys keep the order they were added in
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            url.set_query(None);
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

impl std::fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSpec")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
