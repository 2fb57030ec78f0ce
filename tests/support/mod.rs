#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test_api_key";
pub const API_SECRET: &str = "test_api_secret";

/// Write an env file with both credentials into `dir`.
pub fn write_env(dir: &Path) {
    fs::write(
        dir.join(".env"),
        format!("ZERODHA_API_KEY={API_KEY}\nZERODHA_API_SECRET={API_SECRET}\n"),
    )
    .unwrap();
}

/// Write a `kitegate.toml` pointing the broker API at `api_url`.
pub fn write_config(dir: &Path, api_url: &str) {
    fs::write(
        dir.join("kitegate.toml"),
        format!("[kite]\napi_url = \"{api_url}\"\n\n[logging]\nlevel = \"debug\"\n"),
    )
    .unwrap();
}

/// Mount a successful `/session/token` response carrying `access_token`.
pub async fn mount_session(server: &MockServer, access_token: &str) {
    Mock::given(method("POST"))
        .and(path("/session/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": {
                "user_id": "AB1234",
                "user_name": "Test User",
                "access_token": access_token,
            }
        })))
        .mount(server)
        .await;
}

/// Mount a Kite-style error response on `/session/token`.
pub async fn mount_session_error(server: &MockServer, status: u16, message: &str) {
    Mock::given(method("POST"))
        .and(path("/session/token"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "status": "error",
            "message": message,
            "error_type": "TokenException",
        })))
        .mount(server)
        .await;
}
