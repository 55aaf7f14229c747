//! Core `DineDashClient` definition.
//!
//! Endpoint methods live in `crate::api`, grouped by area, each as an
//! `impl<H: HttpClient> DineDashClient<H>` block.

use reqwest::Url;

use crate::error::{ClientError, ClientResult};

use super::http::HttpClient;

/// API path prefix on the backend host
pub(crate) const API_PREFIX: &str = "/api";

/// Typed client for the DineDash REST API
#[derive(Debug, Clone)]
pub struct DineDashClient<H> {
    pub(crate) http: H,
}

impl<H: HttpClient> DineDashClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }

    /// Install (or clear) the bearer token used for every following call
    pub async fn set_token(&self, token: Option<String>) {
        self.http.set_token(token).await;
    }

    pub async fn token(&self) -> Option<String> {
        self.http.token().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.http.token().await.is_some()
    }
}

/// `/api` + `path`
pub(crate) fn api_path(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Append percent-encoded query parameters to a path
///
/// Returns the path unchanged when there are no parameters.
pub fn path_with_query(path: &str, params: &[(&str, String)]) -> ClientResult<String> {
    if params.is_empty() {
        return Ok(path.to_string());
    }
    // Only the path and query of this URL are used
    let url = Url::parse_with_params(
        &format!("http://localhost{}", path),
        params.iter().map(|(k, v)| (*k, v.as_str())),
    )
    .map_err(|e| ClientError::InvalidRequest(format!("Invalid path {}: {}", path, e)))?;

    Ok(match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    })
}

/// First value of `name` in a raw query string, percent-decoded
pub fn query_value(query: &str, name: &str) -> Option<String> {
    let mut url = Url::parse("http://localhost/").ok()?;
    url.set_query(Some(query));
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
