use super::AppWiring;
use crate::constants::CONTROL_BUTTON_IDS;
use crate::{dom, overlay, palette};
use glowpaint_core::Action;

/// Run `action` against the sketch and refresh whatever UI it touched.
pub fn dispatch(w: &AppWiring, action: Action) {
    let refresh = {
        let mut sketch = w.sketch.borrow_mut();
        let mut surface = w.surface.borrow_mut();
        sketch.apply(action, &mut *surface, &mut rand::thread_rng())
    };
    let sketch = w.sketch.borrow();
    if refresh.mode_label {
        overlay::update_mode_label(&w.document, &sketch.mode_label());
    }
    if refresh.palette {
        palette::highlight(&w.document, sketch.session().color_index());
    }
}

// Same order as `CONTROL_BUTTON_IDS`
const CONTROL_ACTIONS: [Action; 5] = [
    Action::Clear,
    Action::ToggleTrail,
    Action::CycleMode,
    Action::ToggleMirror,
    Action::Randomize,
];

pub fn wire_control_buttons(w: &AppWiring) {
    for (id, action) in CONTROL_BUTTON_IDS.into_iter().zip(CONTROL_ACTIONS) {
        let w2 = w.clone();
        dom::add_click_listener(&w.document, id, move || dispatch(&w2, action));
    }
}
