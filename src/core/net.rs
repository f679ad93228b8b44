// src/core/net.rs
// Blocking JSON GET against the Phish.net v5 API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::Config;
use crate::config::consts::{API_KEY_PARAM, TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Anything that can answer an endpoint with a decoded payload.
///
/// `None` means "no data": the request failed, the body was not JSON, or the
/// API reported an error. Callers treat it as zero records.
pub trait Fetch {
    fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<Value>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn request(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, String> {
        let url = self.url(endpoint);
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push((API_KEY_PARAM, self.api_key.as_str()));

        let resp = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .map_err(|e| format!("Request failed: {}", e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {status} {url}"));
        }

        let text = resp
            .text()
            .map_err(|e| format!("Request failed: {}", e.without_url()))?;
        serde_json::from_str(&text).map_err(|e| format!("JSON decode error: {e} ({url})"))
    }
}

impl Fetch for ApiClient {
    fn get_json(&self, endpoint: &str, params: &[(&str, &str)]) -> Option<Value> {
        match self.request(endpoint, params) {
            Ok(payload) => unwrap_payload(payload),
            Err(msg) => {
                loge!("{endpoint}: {msg}");
                None
            }
        }
    }
}

/// Strip the v5 envelope: API-level errors become `None`, otherwise the
/// `data` field is returned, or the whole payload if there is none.
pub fn unwrap_payload(payload: Value) -> Option<Value> {
    if let Some(msg) = payload.get("error_message").filter(|m| is_error(m)) {
        loge!("API Error: {msg}");
        return None;
    }

    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => Some(data),
            None => Some(Value::Object(map)),
        },
        other => Some(other),
    }
}

/// Anything but null, `false`, `0` or a blank string signals an API error.
fn is_error(msg: &Value) -> bool {
    match msg {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Records from a payload that should be a list. Anything else counts as empty.
pub fn records(payload: Option<Value>) -> Vec<Value> {
    match payload {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            logd!("Expected a list, got {}", kind_of(&other));
            Vec::new()
        }
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_field_is_unwrapped() {
        let out = unwrap_payload(json!({ "error": false, "error_message": "", "data": [1, 2] }));
        assert_eq!(out, Some(json!([1, 2])));
    }

    #[test]
    fn whole_payload_without_data_field() {
        let out = unwrap_payload(json!({ "foo": 1 }));
        assert_eq!(out, Some(json!({ "foo": 1 })));

        let out = unwrap_payload(json!([3]));
        assert_eq!(out, Some(json!([3])));
    }

    #[test]
    fn api_error_message_means_no_data() {
        let out = unwrap_payload(json!({ "error": true, "error_message": "bad key", "data": [] }));
        assert_eq!(out, None);
    }

    #[test]
    fn non_string_error_messages_count() {
        assert_eq!(unwrap_payload(json!({ "error": true, "error_message": 1, "data": [1] })), None);
        assert_eq!(unwrap_payload(json!({ "error_message": true, "data": [1] })), None);
        assert_eq!(unwrap_payload(json!({ "error_message": ["quota"], "data": [1] })), None);

        for quiet in [json!(null), json!(false), json!(0), json!("  "), json!([])] {
            let out = unwrap_payload(json!({ "error_message": quiet, "data": [1] }));
            assert_eq!(out, Some(json!([1])));
        }
    }

    #[test]
    fn non_list_payloads_are_empty() {
        assert!(records(None).is_empty());
        assert!(records(Some(Value::Null)).is_empty());
        assert!(records(Some(json!({ "a": 1 }))).is_empty());
        assert_eq!(records(Some(json!([{}, {}]))).len(), 2);
    }

    #[test]
    fn url_joins_without_double_slash() {
        let mut cfg = Config::new("k");
        cfg.base_url = s!("http://example.test/v5/");
        let client = ApiClient::new(&cfg).unwrap();
        assert_eq!(client.url("/songs.json"), "http://example.test/v5/songs.json");
        assert_eq!(client.url("venues.json"), "http://example.test/v5/venues.json");
    }
}
