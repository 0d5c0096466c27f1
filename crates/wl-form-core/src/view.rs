//! View surface the controller drives.
//!
//! Implementations use interior mutability (`&self` setters), matching DOM
//! handles, which are shared references into the browser's element tree.

use crate::action::Action;
use crate::render::ResultsTable;

/// A text field of the wishlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    User,
    Name,
    Entries,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Id, Field::User, Field::Name, Field::Entries];

    pub const fn element_id(self) -> &'static str {
        match self {
            Field::Id => "wishlist_id",
            Field::User => "wishlist_user_name",
            Field::Name => "wishlist_name",
            Field::Entries => "wishlist_entries",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// Outcome text for the flash region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

pub trait FormView {
    fn field(&self, field: Field) -> String;
    fn set_field(&self, field: Field, value: &str);
    fn show_flash(&self, flash: &Flash);
    fn show_results(&self, table: &ResultsTable);
    /// Disable (`busy = true`) or re-enable the action's trigger.
    fn set_busy(&self, action: Action, busy: bool);
}
