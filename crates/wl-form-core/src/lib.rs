//! Wishlist form controller.
//!
//! Browser-agnostic core of the wishlist UI: reads the form through a
//! [`FormView`], dispatches one request per user action through a
//! [`WishlistApi`], and renders the outcome back into the view. The WASM
//! frontend and the native HTTP client both plug into the traits defined here.

pub mod action;
pub mod api;
pub mod controller;
pub mod endpoints;
pub mod entries;
pub mod error;
pub mod form;
pub mod guard;
pub mod render;
pub mod view;

pub use action::Action;
pub use api::WishlistApi;
pub use controller::{ActionOutcome, WishlistController};
pub use endpoints::{Endpoint, Method};
pub use error::{ApiError, FormError, GENERIC_FAILURE};
pub use form::{FormSnapshot, FormState};
pub use guard::{ActionState, Completion, InFlightGuard, Ticket};
pub use render::{ResultsTable, render_table};
pub use view::{Field, Flash, FlashLevel, FormView};
