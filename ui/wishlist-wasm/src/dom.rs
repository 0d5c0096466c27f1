//! DOM element bindings.
//!
//! All fields are resolved once at startup. Element ids follow the form's
//! naming convention: `wishlist_<field>` for inputs and `<action>-btn` for
//! buttons.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};
use wl_form_core::{Action, Field};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn document() -> Document {
    doc()
}

/// A form field rendered either as `<input>` or `<textarea>`.
#[derive(Clone)]
pub enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    fn bind(id: &str) -> Result<TextField, JsValue> {
        if let Some(input) = by_id_typed::<HtmlInputElement>(id) {
            return Ok(TextField::Input(input));
        }
        by_id_typed::<HtmlTextAreaElement>(id)
            .map(TextField::TextArea)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", id)))
    }

    pub fn value(&self) -> String {
        match self {
            TextField::Input(el) => el.value(),
            TextField::TextArea(el) => el.value(),
        }
    }

    pub fn set_value(&self, val: &str) {
        match self {
            TextField::Input(el) => el.set_value(val),
            TextField::TextArea(el) => el.set_value(val),
        }
    }
}

// ── Elements struct ──

/// All DOM element references used by the wishlist form.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Form fields
    pub wishlist_id: TextField,
    pub user_name: TextField,
    pub name: TextField,
    pub entries: TextField,

    // Output
    pub flash_message: Element,
    pub search_results: Element,

    // Buttons
    pub create_btn: HtmlButtonElement,
    pub update_btn: HtmlButtonElement,
    pub retrieve_btn: HtmlButtonElement,
    pub delete_btn: HtmlButtonElement,
    pub delete_user_btn: HtmlButtonElement,
    pub clear_btn: HtmlButtonElement,
    pub search_btn: HtmlButtonElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_button {
    ($action:expr) => {
        by_id_typed::<HtmlButtonElement>($action.trigger_id()).ok_or_else(|| {
            JsValue::from_str(&format!("missing button #{}", $action.trigger_id()))
        })?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            wishlist_id: TextField::bind(Field::Id.element_id())?,
            user_name: TextField::bind(Field::User.element_id())?,
            name: TextField::bind(Field::Name.element_id())?,
            entries: TextField::bind(Field::Entries.element_id())?,

            flash_message: get_el!("flash_message"),
            search_results: get_el!("search_results"),

            create_btn: get_button!(Action::Create),
            update_btn: get_button!(Action::Update),
            retrieve_btn: get_button!(Action::Retrieve),
            delete_btn: get_button!(Action::Delete),
            delete_user_btn: get_button!(Action::DeleteUser),
            clear_btn: get_button!(Action::Clear),
            search_btn: get_button!(Action::Search),
        })
    }

    pub fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Id => &self.wishlist_id,
            Field::User => &self.user_name,
            Field::Name => &self.name,
            Field::Entries => &self.entries,
        }
    }

    pub fn button(&self, action: Action) -> &HtmlButtonElement {
        match action {
            Action::Create => &self.create_btn,
            Action::Update => &self.update_btn,
            Action::Retrieve => &self.retrieve_btn,
            Action::Delete => &self.delete_btn,
            Action::DeleteUser => &self.delete_user_btn,
            Action::Clear => &self.clear_btn,
            Action::Search => &self.search_btn,
        }
    }
}
