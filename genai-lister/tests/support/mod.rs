#![allow(dead_code)]

use std::net::TcpListener;

use serde_json::{json, Value};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use genai_lister::Client;

pub const VALID_KEY: &str = "valid-key-123";

pub fn build_client(base_url: &str, api_key: &str) -> Client {
    Client::builder()
        .api_key(api_key)
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn two_models() -> Value {
    json!({
        "models": [
            {"id": "model-a"},
            {"id": "model-b"}
        ]
    })
}

/// Accepts only [`VALID_KEY`]; rejects other keys and keyless calls like the real service.
pub async fn mount_models_endpoint(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header("x-goog-api-key", VALID_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(|req: &Request| {
            if req.headers.contains_key("x-goog-api-key") {
                ResponseTemplate::new(400).set_body_json(invalid_key_body())
            } else {
                ResponseTemplate::new(403).set_body_json(unregistered_caller_body())
            }
        })
        .with_priority(5)
        .mount(server)
        .await;
}

pub async fn mount_keyed_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(header_exists("x-goog-api-key"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn invalid_key_body() -> Value {
    json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT",
            "details": [
                {
                    "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                    "reason": "API_KEY_INVALID",
                    "domain": "googleapis.com"
                }
            ]
        }
    })
}

pub fn unregistered_caller_body() -> Value {
    json!({
        "error": {
            "code": 403,
            "message": "Method doesn't allow unregistered callers (callers without established identity). Please use API Key or other form of API consumer identity to call this API.",
            "status": "PERMISSION_DENIED"
        }
    })
}

/// URL of a local port with nothing listening on it.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
