use crate::http_client::{Body, HttpClient, Request, Response};
use crate::ClientConfig;
use reqwest::blocking::Client;
use reqwest::blocking::Request as Reqwest;
use tracing::trace;

pub struct ReqwestHttpClient {
    client: Client,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> anyhow::Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let mut builder = Client::builder().danger_accept_invalid_certs(!config.ssl_check);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestHttpClient {
            client: builder.build()?,
        })
    }

    fn execute(&self, request: Request) -> anyhow::Result<Response> {
        // reqwest only converts requests that carry a body, so convert with
        // a filler and put ours back afterwards
        let (parts, body) = request.into_parts();
        let mut request: Reqwest = http::Request::from_parts(parts, "").try_into()?;
        *request.body_mut() = body.map(Into::into);

        let response = self.client.execute(request)?;
        trace!(
            status = response.status().as_u16(),
            content_length = ?response.content_length(),
            "reqwest response"
        );

        let mut response_builder = http::Response::builder()
            .version(response.version())
            .status(response.status());

        for (name, value) in response.headers() {
            response_builder = response_builder.header(name, value);
        }

        let body: Body = Box::new(response);
        Ok(response_builder.body(body)?)
    }
}
