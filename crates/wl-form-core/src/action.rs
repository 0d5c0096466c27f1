use std::fmt;

/// One user-triggerable operation on the wishlist form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    DeleteUser,
    Clear,
    Search,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Create,
        Action::Update,
        Action::Retrieve,
        Action::Delete,
        Action::DeleteUser,
        Action::Clear,
        Action::Search,
    ];

    /// Element id of the button that triggers this action.
    pub const fn trigger_id(self) -> &'static str {
        match self {
            Action::Create => "create-btn",
            Action::Update => "update-btn",
            Action::Retrieve => "retrieve-btn",
            Action::Delete => "delete-btn",
            Action::DeleteUser => "delete-user-btn",
            Action::Clear => "clear-btn",
            Action::Search => "search-btn",
        }
    }

    /// Whether the action talks to the server (and so can be in flight).
    pub const fn is_remote(self) -> bool {
        !matches!(self, Action::Clear)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Retrieve => "retrieve",
            Action::Delete => "delete",
            Action::DeleteUser => "delete-user",
            Action::Clear => "clear",
            Action::Search => "search",
        };
        f.write_str(name)
    }
}
