//! Market API Bindings
//!
//! Frontend bindings to the REST back end, organized by domain.
//! Every call goes through the [`Backend`] trait so controllers can be
//! exercised against an in-memory back end.

mod analytics;
mod history;
mod postings;

use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::PostResponse;

// Re-export all public items
pub use analytics::*;
pub use history::*;
pub use postings::*;

/// Raw JSON transport
#[async_trait(?Send)]
pub trait Backend {
    /// GET `path` with query parameters; non-2xx is an error
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Value>;

    /// POST a JSON body; the response body is returned even on 4xx when it parses
    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value>;
}

/// [`Backend`] over `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, NON_ALPHANUMERIC));
        }
        url
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Value> {
        let url = self.url(path, query);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResult<Value> {
        let url = self.url(path, &[]);
        let resp = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (ok, status) = (resp.ok(), resp.status());
        match resp.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(_) if !ok => Err(ApiError::Status(status)),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

// ========================
// Typed helpers
// ========================

/// GET and decode into `T`
pub async fn get_json<B: Backend, T: DeserializeOwned>(
    backend: &B,
    path: &str,
    query: &[(&str, &str)],
) -> ApiResult<T> {
    let value = backend.get(path, query).await?;
    Ok(serde_json::from_value(value)?)
}

/// POST a payload and require `{success: true}`
pub async fn post_action<B: Backend, P: Serialize>(backend: &B, path: &str, payload: &P) -> ApiResult<()> {
    let body = serde_json::to_value(payload)?;
    let value = backend.post(path, &body).await?;
    let resp: PostResponse = serde_json::from_value(value)?;
    if resp.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            resp.message.unwrap_or_else(|| format!("{} failed", path)),
        ))
    }
}

/// GET and decode, substituting `fallback` on any failure
pub async fn fetch_or<B: Backend, T: DeserializeOwned>(
    backend: &B,
    path: &str,
    query: &[(&str, &str)],
    fallback: T,
) -> T {
    match get_json(backend, path, query).await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[Fetch] {} failed, using fallback data: {}", path, e);
            fallback
        }
    }
}

/// Fetch (with fallback) and hand the result to a renderer
pub async fn fetch_and_render<B, T, F>(backend: &B, path: &str, query: &[(&str, &str)], fallback: T, render: F)
where
    B: Backend,
    T: DeserializeOwned,
    F: FnOnce(T),
{
    render(fetch_or(backend, path, query, fallback).await);
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingBackend;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_encodes_query() {
        let backend = HttpBackend::new("http://127.0.0.1:5000");
        assert_eq!(backend.url("/history", &[]), "http://127.0.0.1:5000/history");
        assert_eq!(
            backend.url("/postings", &[("search", "iron ore&co")]),
            "http://127.0.0.1:5000/postings?search=iron%20ore%26co"
        );
        assert_eq!(HttpBackend::new("").url("/a", &[("x", "1"), ("y", "2")]), "/a?x=1&y=2");
    }

    #[tokio::test]
    async fn test_fetch_or_falls_back_on_error() {
        let backend = RecordingBackend::new().respond("/broken", Err(ApiError::Status(500)));
        let value: Vec<u32> = fetch_or(&backend, "/broken", &[], vec![1, 2]).await;
        assert_eq!(value, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_or_falls_back_on_bad_shape() {
        let backend = RecordingBackend::new().respond("/shape", Ok(json!({"not": "a list"})));
        let value: Vec<u32> = fetch_or(&backend, "/shape", &[], vec![]).await;
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_and_render_passes_data() {
        let backend = RecordingBackend::new().respond("/nums", Ok(json!([3, 4])));
        let mut rendered = Vec::new();
        fetch_and_render(&backend, "/nums", &[], Vec::<u32>::new(), |v| rendered = v).await;
        assert_eq!(rendered, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_post_action_surfaces_server_message() {
        let backend = RecordingBackend::new()
            .respond("/ok", Ok(json!({"success": true})))
            .respond("/no", Ok(json!({"success": false, "message": "Missing itemID"})));
        assert_eq!(post_action(&backend, "/ok", &json!({})).await, Ok(()));
        assert_eq!(
            post_action(&backend, "/no", &json!({})).await,
            Err(ApiError::Rejected("Missing itemID".to_string()))
        );
    }
}
