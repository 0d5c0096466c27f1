use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wl_api_types::{SearchQuery, WishlistId, WishlistPayload, WishlistRecord};

use crate::error::ApiError;

/// Client for the wishlist REST service.
///
/// Futures are not `Send`: the browser implementation awaits `fetch`
/// promises on the single UI thread.
#[async_trait(?Send)]
pub trait WishlistApi {
    /// POST /wishlists
    async fn create(&self, payload: &WishlistPayload) -> Result<WishlistRecord, ApiError>;
    /// PUT /wishlists/{id}; the response body is ignored.
    async fn update(&self, id: WishlistId, payload: &WishlistPayload) -> Result<(), ApiError>;
    /// GET /wishlists/{id}
    async fn retrieve(&self, id: WishlistId) -> Result<WishlistRecord, ApiError>;
    /// DELETE /wishlists/{id}
    async fn delete(&self, id: WishlistId) -> Result<(), ApiError>;
    /// DELETE /wishlists/{user}/delete_all
    async fn delete_all_for_user(&self, user: &str) -> Result<(), ApiError>;
    /// GET /wishlists?wishlist_name=&wishlist_user=
    async fn search(&self, query: &SearchQuery) -> Result<Vec<WishlistRecord>, ApiError>;
}

/// Decodes a success body, reporting the raw text on failure.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text)
        .map_err(|err| ApiError::Decode(format!("{err}; raw: {}", truncate(text, 200))))
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_raw_body() {
        let err = decode_body::<WishlistRecord>("not json").unwrap_err();
        match err {
            ApiError::Decode(msg) => assert!(msg.contains("raw: not json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_search_results() {
        let records: Vec<WishlistRecord> =
            decode_body(r#"[{"id": 1, "user": "u", "name": "n", "entries": []}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(WishlistId(1)));
    }
}
