//! Action dispatch.
//!
//! Every action reads the form, sends at most one request, and writes the
//! outcome back into the view. Local rejections (missing id, bad entries)
//! never reach the network.

use tracing::{debug, warn};
use wl_api_types::WishlistRecord;

use crate::action::Action;
use crate::api::WishlistApi;
use crate::error::{ApiError, FormError};
use crate::form::FormState;
use crate::guard::{Completion, InFlightGuard, Ticket};
use crate::render::render_table;
use crate::view::{Flash, FormView};

pub const SUCCESS: &str = "Success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed(ApiError),
    /// Rejected locally; no request was sent.
    Rejected(FormError),
    /// The same action is already in flight.
    Busy,
    /// The response arrived after the action was cancelled and was dropped.
    Cancelled,
}

pub struct WishlistController<A, V> {
    api: A,
    view: V,
    guard: InFlightGuard,
}

impl<A, V> WishlistController<A, V>
where
    A: WishlistApi,
    V: FormView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            guard: InFlightGuard::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn guard(&self) -> &InFlightGuard {
        &self.guard
    }

    fn form(&self) -> FormState<'_, V> {
        FormState::new(&self.view)
    }

    pub async fn dispatch(&self, action: Action) -> ActionOutcome {
        match action {
            Action::Create => self.create().await,
            Action::Update => self.update().await,
            Action::Retrieve => self.retrieve().await,
            Action::Delete => self.delete().await,
            Action::DeleteUser => self.delete_user().await,
            Action::Clear => self.clear(),
            Action::Search => self.search().await,
        }
    }

    pub async fn create(&self) -> ActionOutcome {
        let form = self.form();
        let payload = match form.read_record().payload() {
            Ok(payload) => payload,
            Err(err) => return self.reject(Action::Create, err),
        };
        let Some(ticket) = self.begin(Action::Create) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.create(&payload).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(record) => {
                form.write_record(&record);
                form.flash(Flash::success(SUCCESS));
                ActionOutcome::Succeeded
            }
            Err(err) => self.fail(Action::Create, err),
        }
    }

    /// Sends the form to the server; the form is not overwritten on success.
    pub async fn update(&self) -> ActionOutcome {
        let form = self.form();
        let snapshot = form.read_record();
        let parts = snapshot.id().and_then(|id| snapshot.payload().map(|payload| (id, payload)));
        let (id, payload) = match parts {
            Ok(parts) => parts,
            Err(err) => return self.reject(Action::Update, err),
        };
        let Some(ticket) = self.begin(Action::Update) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.update(id, &payload).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(()) => {
                form.flash(Flash::success(SUCCESS));
                ActionOutcome::Succeeded
            }
            Err(err) => self.fail(Action::Update, err),
        }
    }

    pub async fn retrieve(&self) -> ActionOutcome {
        let form = self.form();
        let id = match form.read_record().id() {
            Ok(id) => id,
            Err(err) => return self.reject(Action::Retrieve, err),
        };
        let Some(ticket) = self.begin(Action::Retrieve) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.retrieve(id).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(record) => {
                form.write_record(&record);
                form.flash(Flash::success(format!(
                    "wishlist with ID [{id}] has been Retrived!"
                )));
                ActionOutcome::Succeeded
            }
            Err(err) => self.fail(Action::Retrieve, err),
        }
    }

    pub async fn delete(&self) -> ActionOutcome {
        let form = self.form();
        let id = match form.read_record().id() {
            Ok(id) => id,
            Err(err) => return self.reject(Action::Delete, err),
        };
        let Some(ticket) = self.begin(Action::Delete) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.delete(id).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(()) => {
                form.clear();
                form.flash(Flash::success(format!(
                    "wishlist with ID [{id}] has been Deleted!"
                )));
                ActionOutcome::Succeeded
            }
            Err(err) => self.fail(Action::Delete, err),
        }
    }

    /// Deletes every wishlist owned by the user in the form.
    pub async fn delete_user(&self) -> ActionOutcome {
        let form = self.form();
        let snapshot = form.read_record();
        let user = match snapshot.require_user() {
            Ok(user) => user.to_owned(),
            Err(err) => return self.reject(Action::DeleteUser, err),
        };
        let Some(ticket) = self.begin(Action::DeleteUser) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.delete_all_for_user(&user).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(()) => {
                form.clear();
                form.flash(Flash::success(format!(
                    "wishlist of user {user} has been Deleted!"
                )));
                ActionOutcome::Succeeded
            }
            Err(err) => self.fail(Action::DeleteUser, err),
        }
    }

    /// Clears the form and cancels every in-flight action so that late
    /// responses cannot repopulate it.
    pub fn clear(&self) -> ActionOutcome {
        for action in self.guard.cancel_all() {
            debug!(%action, "cancelled by clear");
            self.view.set_busy(action, false);
        }
        self.form().clear();
        ActionOutcome::Succeeded
    }

    pub async fn search(&self) -> ActionOutcome {
        let form = self.form();
        let query = form.read_record().search_query();
        let Some(ticket) = self.begin(Action::Search) else {
            return ActionOutcome::Busy;
        };

        let result = self.api.search(&query).await;
        if !self.settle(ticket) {
            return ActionOutcome::Cancelled;
        }
        match result {
            Ok(records) => {
                if let Some(first) = records.first() {
                    form.write_record(first);
                }
                form.flash(Flash::success(SUCCESS));
                self.show_results(&records);
                ActionOutcome::Succeeded
            }
            Err(err) => {
                form.clear();
                self.fail(Action::Search, err)
            }
        }
    }

    fn show_results(&self, records: &[WishlistRecord]) {
        let table = render_table(records);
        debug!(rows = table.len(), "rendering search results");
        self.view.show_results(&table);
    }

    fn begin(&self, action: Action) -> Option<Ticket> {
        let Some(ticket) = self.guard.begin(action) else {
            debug!(%action, "ignored: already in flight");
            return None;
        };
        debug!(%action, "dispatching");
        self.view.set_busy(action, true);
        Some(ticket)
    }

    /// Releases the ticket. Returns `false` when the response must be dropped.
    fn settle(&self, ticket: Ticket) -> bool {
        match self.guard.finish(ticket) {
            Completion::Apply => {
                self.view.set_busy(ticket.action(), false);
                true
            }
            Completion::Discard => {
                debug!(action = %ticket.action(), "response discarded after cancel");
                false
            }
        }
    }

    fn reject(&self, action: Action, err: FormError) -> ActionOutcome {
        debug!(%action, error = %err, "rejected before dispatch");
        self.form().flash(Flash::error(err.to_string()));
        ActionOutcome::Rejected(err)
    }

    fn fail(&self, action: Action, err: ApiError) -> ActionOutcome {
        warn!(%action, error = %err, "wishlist request failed");
        self.form().flash(Flash::error(err.user_message()));
        ActionOutcome::Failed(err)
    }
}
