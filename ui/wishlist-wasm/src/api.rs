//! HTTP API client.
//!
//! Wraps `fetch` (through `gloo-net`) for JSON requests to the wishlist
//! service. `base_url()` honours an explicit override before falling back to
//! same-origin requests.

use async_trait::async_trait;
use gloo_net::http::Request;
use wl_api_types::{SearchQuery, WishlistId, WishlistPayload, WishlistRecord};
use wl_form_core::api::decode_body;
use wl_form_core::{ApiError, Endpoint, Method, WishlistApi};

use crate::dom;

/// Determine the API base URL.
///
/// Priority: `<body data-api-base="...">` → same origin (relative paths).
pub fn base_url() -> String {
    if let Some(body) = dom::document().body() {
        if let Some(v) = body.get_attribute("data-api-base") {
            let v = v.trim();
            if !v.is_empty() {
                return v.trim_end_matches('/').to_string();
            }
        }
    }
    String::new()
}

pub struct FetchClient {
    base: String,
}

impl FetchClient {
    pub fn new(base: String) -> Self {
        Self { base }
    }

    /// Perform a fetch request, returning the body of a successful response.
    async fn request(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&WishlistPayload>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base, endpoint.path());

        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let sent = match body {
            Some(b) => builder
                .json(b)
                .map_err(|e| ApiError::Transport(format!("{}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Transport(format!("fetch error: {}", e)))?;

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("text error: {}", e)))?;

        if !resp.ok() {
            return Err(ApiError::from_status_body(resp.status(), &text));
        }
        Ok(text)
    }
}

#[async_trait(?Send)]
impl WishlistApi for FetchClient {
    async fn create(&self, payload: &WishlistPayload) -> Result<WishlistRecord, ApiError> {
        let text = self.request(Endpoint::Create, Some(payload)).await?;
        decode_body(&text)
    }

    async fn update(&self, id: WishlistId, payload: &WishlistPayload) -> Result<(), ApiError> {
        self.request(Endpoint::Update(id), Some(payload)).await.map(|_| ())
    }

    async fn retrieve(&self, id: WishlistId) -> Result<WishlistRecord, ApiError> {
        let text = self.request(Endpoint::Retrieve(id), None).await?;
        decode_body(&text)
    }

    async fn delete(&self, id: WishlistId) -> Result<(), ApiError> {
        self.request(Endpoint::Delete(id), None).await.map(|_| ())
    }

    async fn delete_all_for_user(&self, user: &str) -> Result<(), ApiError> {
        self.request(Endpoint::DeleteAllForUser(user), None).await.map(|_| ())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<WishlistRecord>, ApiError> {
        let text = self.request(Endpoint::Search(query), None).await?;
        decode_body(&text)
    }
}
