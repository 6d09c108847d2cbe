//! Backend API Wrappers
//!
//! Thin fetch bindings to the dashboard's HTTP endpoints, organized by domain.

mod intake;
mod stats;
mod schedule;
mod queue;
mod history;
mod security;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub use security::SecurityUtility;

/// Characters left unescaped in path segments and query values
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Build "?a=1&b=2" from pairs, skipping empty values
pub fn query_string(params: &[(&str, &str)]) -> String {
    let parts: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, encode_component(v)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// HTTP client bound to the configured API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path)).send().await?;
        read_json(resp).await
    }

    /// POST with an empty JSON content type, as the backend's action endpoints expect
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = json_headers(Request::post(&self.url(path))).send().await?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let resp = Request::post(&self.url(path)).json(body)?.send().await?;
        read_json(resp).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = json_headers(Request::delete(&self.url(path))).send().await?;
        read_json(resp).await
    }
}

fn json_headers(builder: RequestBuilder) -> RequestBuilder {
    builder.header("Content-Type", "application/json")
}

/// Decode a JSON body. The backend reports logical failures inside the body,
/// so non-2xx statuses only become errors when the body is unreadable.
async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let status = resp.status();
    let ok = resp.ok();
    match resp.json::<T>().await {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_empty() {
        assert_eq!(query_string(&[("a", ""), ("b", "")]), "");
        assert_eq!(query_string(&[("start_date", "2024-01-02"), ("status_filter", "")]), "?start_date=2024-01-02");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("10.0.0.1"), "10.0.0.1");
        assert_eq!(encode_component("::1"), "%3A%3A1");
        assert_eq!(encode_component("a b"), "a%20b");
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(ApiClient::new("").url("/terminate"), "/terminate");
        assert_eq!(ApiClient::new("http://h:8000").url("/api/queue/status"), "http://h:8000/api/queue/status");
    }
}
