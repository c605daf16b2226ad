use super::AppWiring;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

// Every way a stroke can end: release, leaving the canvas, or the browser
// taking the pointer away (e.g. a touch turning into a scroll).
const STROKE_END_EVENTS: [&str; 3] = ["pointerup", "pointerleave", "pointercancel"];

pub fn wire_input_handlers(w: &AppWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointer_end(w);
}

fn wire_pointerdown(w: &AppWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.sketch.borrow_mut().pointer_down(pos);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &AppWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.sketch.borrow().session().is_drawing() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut surface = w.surface.borrow_mut();
        w.sketch
            .borrow_mut()
            .pointer_move(pos, &mut *surface, &mut rand::thread_rng());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointer_end(w: &AppWiring) {
    for event in STROKE_END_EVENTS {
        let sketch = w.sketch.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            sketch.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
