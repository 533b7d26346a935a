//! Request descriptors and the HTTP transport seam.
//!
//! [`build_request`] turns an endpoint path into a plain [`ApiRequest`] value
//! without touching the network. A [`Transport`] executes it and hands back a
//! [`RawResponse`], which [`crate::response::normalize`] turns into an envelope.
//! [`ReqwestTransport`] is the default transport.

use crate::errors::{LoyaltyError, Result};
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Name of the header carrying the API key.
pub const API_KEY_HEADER: &str = "APIKey";

/// Content type sent with every request that has a body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs used by the loyalty API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Whether requests with this verb carry a JSON body.
    pub fn carries_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }

    /// Canonical upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully resolved request, built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: HttpMethod,

    /// Absolute target URL
    pub url: Url,

    /// Request headers in the order they were added
    pub headers: Vec<(String, String)>,

    /// Serialized JSON body, if any
    pub body: Option<String>,
}

impl ApiRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A response exactly as the transport received it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric HTTP status code
    pub status: u16,

    /// Response headers in arrival order; duplicates are kept
    pub headers: Vec<(String, String)>,

    /// Response payload decoded as text; invalid UTF-8 sequences become U+FFFD
    pub body: String,
}

/// Builds a request descriptor for `path` relative to `base_url`.
///
/// The URL is resolved with standard URL-join semantics, so an absolute path
/// replaces any path already present on the base. When `method` carries a
/// body, `body` is attached with a JSON content type; for GET it is dropped.
/// An API key, when present, is sent as the `APIKey` header on every verb.
///
/// # Examples
///
/// ```
/// use brink_loyalty::http::{build_request, HttpMethod};
///
/// let request = build_request(
///     HttpMethod::Get,
///     Some("https://api.example.com"),
///     "/Locations/STORE123/POSConfigurations",
///     Some("TEST_API_KEY"),
///     None,
/// ).unwrap();
///
/// assert_eq!(request.url.as_str(), "https://api.example.com/Locations/STORE123/POSConfigurations");
/// assert_eq!(request.header("APIKey"), Some("TEST_API_KEY"));
/// assert!(request.body.is_none());
/// ```
pub fn build_request(
    method: HttpMethod,
    base_url: Option<&str>,
    path: &str,
    api_key: Option<&str>,
    body: Option<String>,
) -> Result<ApiRequest> {
    let url = resolve_url(base_url, path)?;
    let mut headers = Vec::new();

    let body = body.filter(|_| method.carries_body());
    if body.is_some() {
        headers.push(("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()));
    }

    if let Some(key) = api_key {
        if HeaderValue::from_str(key).is_err() {
            return Err(LoyaltyError::ConfigurationError(
                "API key contains characters that are not valid in a header".to_string(),
            ));
        }
        headers.push((API_KEY_HEADER.to_string(), key.to_string()));
    }

    Ok(ApiRequest {
        method,
        url,
        headers,
        body,
    })
}

fn resolve_url(base_url: Option<&str>, path: &str) -> Result<Url> {
    let base_url = base_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| LoyaltyError::ConfigurationError("base URL is not configured".to_string()))?;

    let base = Url::parse(base_url)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(LoyaltyError::ConfigurationError(format!(
            "unsupported base URL scheme: {}",
            base.scheme()
        )));
    }

    Ok(base.join(path)?)
}

/// Executes request descriptors against the network.
///
/// Implementations must return every HTTP status as data; only failures that
/// prevent a response from arriving are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response as received.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// Default transport backed by [`reqwest::Client`].
///
/// Header values and body bytes that are not valid UTF-8 are decoded lossily,
/// so a non-UTF-8 payload reaches the normalizer as text with U+FFFD in place
/// of the invalid bytes.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a transport whose client gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method.into(), request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let bytes = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_post_request_has_json_body_and_key() {
        let request = build_request(
            HttpMethod::Post,
            Some(BASE),
            "/Locations/S/Orders/O/Lookup",
            Some("TEST_API_KEY"),
            Some(r#"{"emailAddress":"user@example.com"}"#.to_string()),
        )
        .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url.as_str(),
            "https://api.example.com/Locations/S/Orders/O/Lookup"
        );
        assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.header("APIKey"), Some("TEST_API_KEY"));
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"emailAddress":"user@example.com"}"#)
        );
    }

    #[test]
    fn test_get_request_drops_body() {
        let request = build_request(
            HttpMethod::Get,
            Some(BASE),
            "/Locations/S/POSConfigurations",
            None,
            Some("{}".to_string()),
        )
        .unwrap();

        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_missing_api_key_sends_no_header() {
        let request = build_request(
            HttpMethod::Delete,
            Some(BASE),
            "/Locations/S/Orders/O/Redeem",
            None,
            Some("{}".to_string()),
        )
        .unwrap();

        assert_eq!(request.header(API_KEY_HEADER), None);
        assert_eq!(request.header("Content-Type"), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn test_absolute_path_replaces_base_path() {
        let request = build_request(
            HttpMethod::Get,
            Some("https://api.example.com/v1/"),
            "/Locations/S/POSConfigurations",
            None,
            None,
        )
        .unwrap();

        assert_eq!(
            request.url.as_str(),
            "https://api.example.com/Locations/S/POSConfigurations"
        );
    }

    #[test]
    fn test_missing_base_url_is_configuration_error() {
        let err = build_request(HttpMethod::Get, None, "/x", None, None).unwrap_err();
        assert!(matches!(err, LoyaltyError::ConfigurationError(_)));

        let err = build_request(HttpMethod::Get, Some("  "), "/x", None, None).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_base_url_is_configuration_error() {
        let err = build_request(HttpMethod::Get, Some("not a url"), "/x", None, None).unwrap_err();
        assert!(matches!(err, LoyaltyError::ConfigurationError(_)));
        assert!(err.to_string().contains("invalid base URL"));

        let err = build_request(HttpMethod::Get, Some("http://"), "/x", None, None).unwrap_err();
        assert!(matches!(err, LoyaltyError::ConfigurationError(_)));

        let err =
            build_request(HttpMethod::Get, Some("ftp://api.example.com"), "/x", None, None)
                .unwrap_err();
        assert!(matches!(err, LoyaltyError::ConfigurationError(_)));
    }

    #[test]
    fn test_invalid_api_key_is_configuration_error() {
        let err = build_request(HttpMethod::Get, Some(BASE), "/x", Some("bad\nkey"), None)
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_method_conversions() {
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert!(!HttpMethod::Get.carries_body());
        assert!(HttpMethod::Delete.carries_body());
    }
}
