//! `FormView` over the bound DOM elements.

use wl_form_core::{Action, Field, Flash, FlashLevel, FormView, ResultsTable};

use crate::dom::{self, Elements};

pub struct DomView {
    els: Elements,
}

impl DomView {
    pub fn new(els: Elements) -> Self {
        Self { els }
    }
}

impl FormView for DomView {
    fn field(&self, field: Field) -> String {
        self.els.field(field).value()
    }

    fn set_field(&self, field: Field, value: &str) {
        self.els.field(field).set_value(value);
    }

    fn show_flash(&self, flash: &Flash) {
        let el = &self.els.flash_message;
        dom::toggle_class(el, "error", flash.level == FlashLevel::Error);
        dom::set_text(el, &flash.text);
    }

    fn show_results(&self, table: &ResultsTable) {
        dom::set_inner_html(&self.els.search_results, &table.to_html());
    }

    fn set_busy(&self, action: Action, busy: bool) {
        self.els.button(action).set_disabled(busy);
    }
}
