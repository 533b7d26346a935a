//! Response normalization.
//!
//! Every endpoint call returns an [`Envelope`] with the same `{code, body,
//! headers}` shape regardless of status code:
//!
//! - a non-empty payload that parses as JSON becomes [`ResponseBody::Json`]
//! - a non-empty payload that does not parse is kept verbatim as [`ResponseBody::Raw`]
//! - an empty payload becomes an empty JSON object
//!
//! None of these cases is an error.

use crate::errors::Result;
use crate::http::RawResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::ops::Index;

static NULL: Value = Value::Null;

/// Body of a normalized response.
///
/// Serializes untagged, so an envelope encodes as the plain
/// `{"code", "body", "headers"}` map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Payload parsed as JSON (an empty object for an empty payload)
    Json(Value),

    /// Payload that was not valid JSON, kept as received
    Raw(String),
}

impl ResponseBody {
    /// Returns the parsed JSON value, if the payload was JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// Returns the unparsed text, if the payload was not JSON.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Raw(text) => Some(text),
        }
    }

    /// Whether the payload fell back to raw text.
    pub fn is_raw(&self) -> bool {
        matches!(self, ResponseBody::Raw(_))
    }

    /// Looks up a top-level field of a JSON object body.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Converts the body into a JSON value; raw text becomes a JSON string.
    pub fn into_value(self) -> Value {
        match self {
            ResponseBody::Json(value) => value,
            ResponseBody::Raw(text) => Value::String(text),
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::Json(Value::Object(Map::new()))
    }
}

impl Index<&str> for ResponseBody {
    type Output = Value;

    /// Returns `Value::Null` for raw bodies and missing keys.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl PartialEq<Value> for ResponseBody {
    fn eq(&self, other: &Value) -> bool {
        self.as_json() == Some(other)
    }
}

impl PartialEq<&str> for ResponseBody {
    fn eq(&self, other: &&str) -> bool {
        self.as_raw() == Some(*other)
    }
}

/// The uniform result of every endpoint call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Numeric HTTP status code
    pub code: u16,

    /// Parsed or raw response body
    pub body: ResponseBody,

    /// Response headers; the last value wins for repeated names
    pub headers: HashMap<String, String>,
}

impl Envelope {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Looks up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| {
                self.headers
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }

    /// Decodes the body into a typed structure.
    ///
    /// A raw body is decoded as a JSON string, which fails for any struct type.
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T> {
        let value = match &self.body {
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Raw(text) => Value::String(text.clone()),
        };
        Ok(serde_json::from_value(value)?)
    }
}

impl From<RawResponse> for Envelope {
    fn from(raw: RawResponse) -> Self {
        normalize(raw)
    }
}

/// Turns a raw transport response into an [`Envelope`].
///
/// # Examples
///
/// ```
/// use brink_loyalty::http::RawResponse;
/// use brink_loyalty::response::normalize;
/// use serde_json::json;
///
/// let envelope = normalize(RawResponse {
///     status: 500,
///     headers: vec![],
///     body: "Internal Server Error".to_string(),
/// });
/// assert_eq!(envelope.code, 500);
/// assert_eq!(envelope.body.as_raw(), Some("Internal Server Error"));
///
/// let envelope = normalize(RawResponse { status: 204, ..Default::default() });
/// assert_eq!(envelope.body, json!({}));
/// ```
pub fn normalize(raw: RawResponse) -> Envelope {
    let body = parse_body(raw.body);
    if body.is_raw() {
        tracing::warn!(status = raw.status, "Loyalty response body is not JSON; keeping raw text");
    }

    let headers = raw.headers.into_iter().collect();

    Envelope {
        code: raw.status,
        body,
        headers,
    }
}

fn parse_body(payload: String) -> ResponseBody {
    if payload.is_empty() {
        return ResponseBody::default();
    }

    match serde_json::from_str::<Value>(&payload) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Raw(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let envelope = normalize(raw(200, r#"{"id":"CUSTOMER001","points":100}"#));
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.body, json!({"id": "CUSTOMER001", "points": 100}));
        assert_eq!(envelope.body["points"], 100);
        assert!(envelope.is_success());
    }

    #[test]
    fn test_error_status_is_not_an_error() {
        let envelope = normalize(raw(
            401,
            r#"{"message":"Unauthorized","code":401,"errors":[{"source":"ModuleName","error":"APIKey is invalid"}]}"#,
        ));
        assert_eq!(envelope.code, 401);
        assert_eq!(envelope.body["message"], "Unauthorized");
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_non_json_body_is_kept_raw() {
        let envelope = normalize(raw(500, "Internal Server Error"));
        assert_eq!(envelope.code, 500);
        assert!(envelope.body.is_raw());
        assert_eq!(envelope.body, "Internal Server Error");
        assert_eq!(envelope.body["message"], Value::Null);
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        for status in [200, 204, 404, 503] {
            let envelope = normalize(raw(status, ""));
            assert_eq!(envelope.code, status);
            assert_eq!(envelope.body, json!({}));
        }
    }

    #[test]
    fn test_whitespace_body_is_raw() {
        let envelope = normalize(raw(200, "  "));
        assert_eq!(envelope.body.as_raw(), Some("  "));
    }

    #[test]
    fn test_scalar_json_bodies() {
        assert_eq!(normalize(raw(200, "true")).body, json!(true));
        assert_eq!(normalize(raw(200, "[1,2]")).body, json!([1, 2]));
        assert_eq!(normalize(raw(200, r#""quoted""#)).body, json!("quoted"));
    }

    #[test]
    fn test_large_integers_keep_precision() {
        let payload = r#"{"id":12345678901234567890123,"points":-98765432109876543210}"#;
        let envelope = normalize(raw(200, payload));

        assert_eq!(serde_json::to_string(&envelope.body).unwrap(), payload);
        assert_eq!(envelope.body["id"].to_string(), "12345678901234567890123");
    }

    #[test]
    fn test_headers_last_value_wins() {
        let envelope = normalize(RawResponse {
            status: 200,
            headers: vec![
                ("set-cookie".to_string(), "a=1".to_string()),
                ("x-request-id".to_string(), "abc".to_string()),
                ("set-cookie".to_string(), "b=2".to_string()),
            ],
            body: String::new(),
        });

        assert_eq!(envelope.headers.len(), 2);
        assert_eq!(envelope.header("set-cookie"), Some("b=2"));
        assert_eq!(envelope.header("X-Request-Id"), Some("abc"));
    }

    #[test]
    fn test_envelope_serializes_as_plain_map() {
        let envelope = normalize(raw(200, r#"{"success":true}"#));
        let encoded = serde_json::to_value(&envelope).unwrap();
        assert_eq!(encoded["code"], 200);
        assert_eq!(encoded["body"], json!({"success": true}));
        assert_eq!(encoded["headers"]["content-type"], "application/json");

        let raw_envelope = normalize(raw(502, "Bad Gateway"));
        let encoded = serde_json::to_value(&raw_envelope).unwrap();
        assert_eq!(encoded["body"], "Bad Gateway");
    }

    #[test]
    fn test_parse_body() {
        #[derive(Deserialize)]
        struct Success {
            success: bool,
        }

        let envelope = normalize(raw(200, r#"{"success":true}"#));
        assert!(envelope.parse_body::<Success>().unwrap().success);

        let envelope = normalize(raw(500, "oops"));
        assert!(envelope.parse_body::<Success>().is_err());
    }
}
