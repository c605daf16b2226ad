use crate::constants::{HIDDEN_CLASS, INSTRUCTIONS_SELECTOR};
use web_sys as web;

fn instructions(document: &web::Document) -> Option<web::Element> {
    document.query_selector(INSTRUCTIONS_SELECTOR).ok().flatten()
}

/// Replace the instructions line with the current mode label.
pub fn update_mode_label(document: &web::Document, label: &str) {
    if let Some(el) = instructions(document) {
        el.set_text_content(Some(label));
    }
}

/// Show or hide the instructions line.
pub fn set_hidden(document: &web::Document, hidden: bool) {
    if let Some(el) = instructions(document) {
        _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
    }
}

pub fn is_hidden(document: &web::Document) -> bool {
    instructions(document)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

pub fn toggle(document: &web::Document) {
    set_hidden(document, !is_hidden(document));
}
