use std::collections::HashMap;
use std::sync::Arc;

use fluent_http::{ClientConfig, HttpClient, ReqwestHttpClient, RequestSpec};
use httpmock::MockServer;

pub const RESPONSE_SUCCESS: &str = r#"{"message": "Success"}"#;
pub const RESPONSE_FAIL: &str = r#"{"message": "Fail"}"#;

/// A spec pointed at the mock server, sending through a real reqwest client.
pub fn request_spec(server: &MockServer) -> RequestSpec {
    let client = ReqwestHttpClient::create(ClientConfig::default()).unwrap();
    RequestSpec::new(&server.base_url(), Arc::new(client)).unwrap()
}

pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
