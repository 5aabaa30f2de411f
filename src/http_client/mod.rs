use std::io::Read;

use crate::ClientConfig;


pub mod reqwest;

/// Response body handed back by a transport. It is read once and then dropped.
pub type Body = Box<dyn Read + Send>;

pub type Request = http::Request<Option<Vec<u8>>>;

pub type Response = http::Response<Body>;

/// The transport a [`RequestSpec`](crate::RequestSpec) sends its calls through.
///
/// Implementations own everything below the request builder: connections,
/// TLS, redirects and timeouts. A non-2xx status is still a successful
/// `execute`; only a failed exchange is an error.
pub trait HttpClient: Send + Sync {
    fn create(config: ClientConfig) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn execute(&self, request: Request) -> anyhow::Result<Response>;
}
