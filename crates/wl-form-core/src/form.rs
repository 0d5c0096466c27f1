//! Form-state adapter: projects a [`WishlistRecord`] onto the view's fields.

use wl_api_types::{SearchQuery, WishlistId, WishlistPayload, WishlistRecord};

use crate::entries::{format_entries, parse_entries};
use crate::error::FormError;
use crate::view::{Field, Flash, FormView};

/// Raw field values at the moment an action was triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub id_text: String,
    pub user: String,
    pub name: String,
    pub entries_text: String,
}

impl FormSnapshot {
    pub fn id(&self) -> Result<WishlistId, FormError> {
        let text = self.id_text.trim();
        if text.is_empty() {
            return Err(FormError::MissingId);
        }
        text.parse::<i64>()
            .map(WishlistId)
            .map_err(|_| FormError::InvalidId(text.to_owned()))
    }

    pub fn require_user(&self) -> Result<&str, FormError> {
        let user = self.user.trim();
        if user.is_empty() {
            return Err(FormError::MissingUser);
        }
        Ok(user)
    }

    pub fn payload(&self) -> Result<WishlistPayload, FormError> {
        Ok(WishlistPayload {
            name: self.name.clone(),
            user: self.user.clone(),
            entries: parse_entries(&self.entries_text)?,
        })
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery {
            wishlist_name: self.name.clone(),
            wishlist_user: self.user.clone(),
        }
    }
}

pub struct FormState<'a, V> {
    view: &'a V,
}

impl<'a, V: FormView> FormState<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    pub fn read_record(&self) -> FormSnapshot {
        FormSnapshot {
            id_text: self.view.field(Field::Id),
            user: self.view.field(Field::User),
            name: self.view.field(Field::Name),
            entries_text: self.view.field(Field::Entries),
        }
    }

    /// Copies a server record into the form. A record without an id keeps
    /// whatever id the form already shows.
    pub fn write_record(&self, record: &WishlistRecord) {
        if let Some(id) = record.id {
            self.view.set_field(Field::Id, &id.to_string());
        }
        self.view.set_field(Field::User, &record.user);
        self.view.set_field(Field::Name, &record.name);
        self.view.set_field(Field::Entries, &format_entries(&record.entries));
    }

    /// Empties user, name and entries. The id is left alone.
    pub fn clear(&self) {
        self.view.set_field(Field::User, "");
        self.view.set_field(Field::Name, "");
        self.view.set_field(Field::Entries, "");
    }

    pub fn flash(&self, flash: Flash) {
        self.view.show_flash(&flash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::render::ResultsTable;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Fields(RefCell<HashMap<Field, String>>);

    impl FormView for Fields {
        fn field(&self, field: Field) -> String {
            self.0.borrow().get(&field).cloned().unwrap_or_default()
        }
        fn set_field(&self, field: Field, value: &str) {
            self.0.borrow_mut().insert(field, value.to_owned());
        }
        fn show_flash(&self, _flash: &Flash) {}
        fn show_results(&self, _table: &ResultsTable) {}
        fn set_busy(&self, _action: Action, _busy: bool) {}
    }

    #[test]
    fn write_then_read_round_trips_entries() {
        let view = Fields::default();
        let form = FormState::new(&view);
        let record = WishlistRecord {
            id: Some(WishlistId(3)),
            user: "alice".to_owned(),
            name: "birthday".to_owned(),
            entries: json!([{"id": 0, "name": "book"}, {"id": 1, "name": "pen"}]),
        };

        form.write_record(&record);
        let snapshot = form.read_record();

        assert_eq!(snapshot.id().unwrap(), WishlistId(3));
        assert_eq!(snapshot.payload().unwrap().entries, record.entries);
    }

    #[test]
    fn record_without_id_keeps_existing_id() {
        let view = Fields::default();
        view.set_field(Field::Id, "12");
        let form = FormState::new(&view);

        form.write_record(&WishlistRecord {
            user: "bob".to_owned(),
            ..WishlistRecord::default()
        });

        assert_eq!(view.field(Field::Id), "12");
        assert_eq!(view.field(Field::User), "bob");
        assert_eq!(view.field(Field::Entries), "null");
    }

    #[test]
    fn clear_leaves_id() {
        let view = Fields::default();
        for field in Field::ALL {
            view.set_field(field, "x");
        }
        FormState::new(&view).clear();

        assert_eq!(view.field(Field::Id), "x");
        assert_eq!(view.field(Field::User), "");
        assert_eq!(view.field(Field::Name), "");
        assert_eq!(view.field(Field::Entries), "");
    }

    #[test]
    fn blank_id_and_user_fail_presence_checks() {
        let snapshot = FormSnapshot {
            id_text: "  ".to_owned(),
            user: "\t".to_owned(),
            ..FormSnapshot::default()
        };
        assert_eq!(snapshot.id(), Err(FormError::MissingId));
        assert_eq!(snapshot.require_user(), Err(FormError::MissingUser));

        let snapshot = FormSnapshot {
            id_text: "seven".to_owned(),
            ..FormSnapshot::default()
        };
        assert_eq!(snapshot.id(), Err(FormError::InvalidId("seven".to_owned())));
    }

    #[test]
    fn read_record_keeps_raw_text_and_checks_trim_only() {
        let view = Fields::default();
        view.set_field(Field::Id, " 5 ");
        view.set_field(Field::User, " alice ");
        view.set_field(Field::Name, " birthday ");
        view.set_field(Field::Entries, " [1] ");

        let snapshot = FormState::new(&view).read_record();

        assert_eq!(snapshot.name, " birthday ");
        assert_eq!(snapshot.id(), Ok(WishlistId(5)));
        assert_eq!(snapshot.require_user(), Ok("alice"));
        let payload = snapshot.payload().unwrap();
        assert_eq!(payload.name, " birthday ");
        assert_eq!(payload.user, " alice ");
        assert_eq!(payload.entries, json!([1]));
    }
}
