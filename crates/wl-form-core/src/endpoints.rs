//! Wishlist service routes.
//!
//! Both HTTP clients resolve paths here so the browser and native builds
//! always hit the same URLs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use wl_api_types::{SearchQuery, WishlistId};

// RFC 3986 unreserved characters stay literal.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Create,
    Update(WishlistId),
    Retrieve(WishlistId),
    Delete(WishlistId),
    DeleteAllForUser(&'a str),
    Search(&'a SearchQuery),
    /// Test-support route that empties the store.
    Reset,
    Health,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Create => Method::Post,
            Endpoint::Update(_) => Method::Put,
            Endpoint::Retrieve(_) | Endpoint::Search(_) | Endpoint::Health => Method::Get,
            Endpoint::Delete(_) | Endpoint::DeleteAllForUser(_) | Endpoint::Reset => {
                Method::Delete
            }
        }
    }

    /// Path plus query, relative to the service base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Create => "/wishlists".to_owned(),
            Endpoint::Update(id) | Endpoint::Retrieve(id) | Endpoint::Delete(id) => {
                format!("/wishlists/{id}")
            }
            Endpoint::DeleteAllForUser(user) => {
                format!("/wishlists/{}/delete_all", encode_component(user))
            }
            Endpoint::Search(query) => format!(
                "/wishlists?wishlist_name={}&wishlist_user={}",
                encode_component(&query.wishlist_name),
                encode_component(&query.wishlist_user),
            ),
            Endpoint::Reset => "/wishlists/reset".to_owned(),
            Endpoint::Health => "/healthcheck".to_owned(),
        }
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
