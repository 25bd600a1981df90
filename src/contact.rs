use crate::constants::{CONTACT_FORM_ID, EMAIL_FIELD_ID, MESSAGE_FIELD_ID, NAME_FIELD_ID};
use crate::core::ContactFields;
use crate::dom::Listener;
use crate::notice::Notifier;
use wasm_bindgen::JsCast;
use web_sys as web;

// Missing or non-text elements read as blank.
fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Intercept the contact form: nothing is sent, the visitor only gets a
/// notification. `None` when the page has no contact form.
pub fn wire(document: &web::Document, notifier: Notifier) -> Option<Listener> {
    let form = document.get_element_by_id(CONTACT_FORM_ID)?;
    let doc = document.clone();
    let form_el = form.clone();
    Some(Listener::new(&form, "submit", move |ev| {
        ev.prevent_default();
        let fields = ContactFields {
            name: field_value(&doc, NAME_FIELD_ID),
            email: field_value(&doc, EMAIL_FIELD_ID),
            message: field_value(&doc, MESSAGE_FIELD_ID),
        };
        let outcome = fields.evaluate();
        notifier.show(&outcome.notice());
        if outcome.resets_form() {
            if let Some(form) = form_el.dyn_ref::<web::HtmlFormElement>() {
                form.reset();
            }
        }
    }))
}
