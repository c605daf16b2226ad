use crate::constants::{swatch_id, ACTIVE_CLASS, COLOR_PICKER_SELECTOR, SWATCH_CLASS};
use crate::dom;
use glowpaint_core::{Action, PALETTE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Fill the colour picker with one swatch per palette entry.
///
/// `on_pick` receives the action to dispatch when a swatch is clicked.
pub fn build(
    document: &web::Document,
    on_pick: impl Fn(Action) + Clone + 'static,
) -> anyhow::Result<()> {
    let picker = document
        .query_selector(COLOR_PICKER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", COLOR_PICKER_SELECTOR))?;

    for (i, swatch) in PALETTE.iter().enumerate() {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_id(&swatch_id(i));
        el.set_class_name(SWATCH_CLASS);
        _ = el.set_attribute("title", swatch.name);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("background-color", swatch.hex);
        }
        let pick = on_pick.clone();
        dom::add_click_listener_to(&el, move || pick(Action::SelectColor(i)));
        picker
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Mark the swatch at `active` and unmark the rest.
pub fn highlight(document: &web::Document, active: usize) {
    for i in 0..PALETTE.len() {
        if let Some(el) = document.get_element_by_id(&swatch_id(i)) {
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, i == active);
        }
    }
}
