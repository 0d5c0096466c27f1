//! Native HTTP client for the wishlist service.
//!
//! Implements [`WishlistApi`] over `reqwest`, for tooling and end-to-end tests
//! that drive the form controller outside the browser.

pub mod seed;

use async_trait::async_trait;
use tracing::debug;
use wl_api_types::{HealthResponse, SearchQuery, WishlistId, WishlistPayload, WishlistRecord};
use wl_form_core::api::decode_body;
use wl_form_core::{ApiError, Endpoint, Method, WishlistApi};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Reads `WISHLIST_API_URL` from environment at construction time
/// (default: `http://localhost:5000`).
pub struct HttpWishlistClient {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for HttpWishlistClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpWishlistClient {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("WISHLIST_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request and returns the body of a successful response.
    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&WishlistPayload>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.endpoint, endpoint.path());
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        debug!(method = %method, url = %url, "wishlist request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_status_body(status.as_u16(), &text));
        }
        Ok(text)
    }

    /// DELETE /wishlists/reset. Empties the store; only test deployments expose it.
    pub async fn reset(&self) -> Result<(), ApiError> {
        self.send(Endpoint::Reset, None).await.map(|_| ())
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let text = self.send(Endpoint::Health, None).await?;
        decode_body(&text)
    }
}

#[async_trait(?Send)]
impl WishlistApi for HttpWishlistClient {
    async fn create(&self, payload: &WishlistPayload) -> Result<WishlistRecord, ApiError> {
        let text = self.send(Endpoint::Create, Some(payload)).await?;
        decode_body(&text)
    }

    async fn update(&self, id: WishlistId, payload: &WishlistPayload) -> Result<(), ApiError> {
        self.send(Endpoint::Update(id), Some(payload)).await.map(|_| ())
    }

    async fn retrieve(&self, id: WishlistId) -> Result<WishlistRecord, ApiError> {
        let text = self.send(Endpoint::Retrieve(id), None).await?;
        decode_body(&text)
    }

    async fn delete(&self, id: WishlistId) -> Result<(), ApiError> {
        self.send(Endpoint::Delete(id), None).await.map(|_| ())
    }

    async fn delete_all_for_user(&self, user: &str) -> Result<(), ApiError> {
        self.send(Endpoint::DeleteAllForUser(user), None).await.map(|_| ())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<WishlistRecord>, ApiError> {
        let text = self.send(Endpoint::Search(query), None).await?;
        decode_body(&text)
    }
}
