use crate::common::{params, request_spec, RESPONSE_FAIL, RESPONSE_SUCCESS};
use fluent_http::{ErrorKind, RequestSpec};
use httpmock::prelude::*;
use serde::Deserialize;
use serde_json::{json, Value};

mod common;

#[derive(Deserialize, Debug, PartialEq)]
struct Message {
    message: String,
}

#[test]
fn simple_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/success");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(RESPONSE_SUCCESS);
    });

    let response = request_spec(&server).get("/success", None).unwrap();

    mock.assert();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text().unwrap(), RESPONSE_SUCCESS);
}

#[test]
fn simple_get_with_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/success")
            .query_param("foo", "bar")
            .query_param("page", "2");
        then.status(200).body(RESPONSE_SUCCESS);
    });

    let response = request_spec(&server)
        .get("/success", Some(&params(&[("foo", "bar"), ("page", "2")])))
        .unwrap();

    mock.assert();
    let message: Message = response.json().unwrap();
    assert_eq!(message.message, "Success");
}

#[test]
fn simple_get_failure_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/fail").query_param("foo", "bar");
        then.status(500).body(RESPONSE_FAIL);
    });

    let response = request_spec(&server)
        .get("/fail", Some(&params(&[("foo", "bar")])))
        .unwrap();

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text().unwrap(), RESPONSE_FAIL);
}

#[test]
fn simple_post() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/success")
            .header("Content-Type", "application/json")
            .json_body(json!({"foo": "bar"}));
        then.status(200).body(RESPONSE_SUCCESS);
    });

    let mut spec = request_spec(&server);
    spec.set_header("Content-Type", "application/json").unwrap();
    let response = spec.post("/success", &json!({"foo": "bar"})).unwrap();

    mock.assert();
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json().unwrap();
    assert_eq!(body, json!({"message": "Success"}));
}

#[test]
fn simple_post_failure_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/fail");
        then.status(500).body(RESPONSE_FAIL);
    });

    let response = request_spec(&server).post("/fail", &Option::<()>::None).unwrap();

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Message>().unwrap(),
        Message {
            message: "Fail".to_string()
        }
    );
}

#[test]
fn headers_persist_across_calls() {
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method(GET).path("/success").header("X-Token", "second");
        then.status(200).body(RESPONSE_SUCCESS);
    });
    let post = server.mock(|when, then| {
        when.method(POST).path("/success").header("X-Token", "second");
        then.status(200).body(RESPONSE_SUCCESS);
    });

    let mut spec = request_spec(&server);
    spec.set_header("X-Token", "first")
        .unwrap()
        .set_header("X-Token", "second")
        .unwrap();
    spec.get("/success", None).unwrap().bytes().unwrap();
    spec.post("/success", &json!({"n": 1})).unwrap().bytes().unwrap();

    get.assert();
    post.assert();
}

#[test]
fn body_that_is_not_json_is_a_parse_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.path("/html");
        then.status(200).body("<html></html>");
    });

    let err = request_spec(&server)
        .get("/html", None)
        .unwrap()
        .json::<Value>()
        .unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::Parse(_)));
}

#[test]
fn unreachable_host_is_a_transport_error() {
    let spec = RequestSpec::with_default_client("http://127.0.0.1:1").unwrap();

    let err = spec.get("/success", None).unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::Transport(_)));
}
