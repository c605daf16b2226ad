#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, MODE_ATTRIBUTE};
use crate::surface::CanvasSurface;
use glowpaint_core::{Mode, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod palette;
mod surface;

fn wire_canvas_resize(document: &web::Document, surface: &Rc<RefCell<CanvasSurface>>) {
    let document = document.clone();
    let surface = surface.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let s = surface.borrow();
        dom::resize_preserving_raster(&document, s.canvas(), s.context());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn initial_mode(canvas: &web::HtmlCanvasElement) -> Mode {
    match canvas.get_attribute(MODE_ATTRIBUTE) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{}; starting in {}", e, Mode::default());
            Mode::default()
        }),
        None => Mode::default(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glowpaint-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow::anyhow!("no 2d context"))?;

    dom::fit_canvas_to_window(&canvas);
    let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas.clone(), ctx)));
    wire_canvas_resize(&document, &surface);

    let mut sketch = Sketch::new();
    sketch.set_mode(initial_mode(&canvas));
    let sketch = Rc::new(RefCell::new(sketch));

    let wiring = events::AppWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        sketch: sketch.clone(),
        surface: surface.clone(),
    };

    // ---------------- UI ----------------
    let pick_wiring = wiring.clone();
    palette::build(&document, move |action| events::dispatch(&pick_wiring, action))?;
    palette::highlight(&document, sketch.borrow().session().color_index());
    overlay::update_mode_label(&document, &sketch.borrow().mode_label());

    // ---------------- Input ----------------
    events::wire_input_handlers(&wiring);
    events::wire_control_buttons(&wiring);
    events::wire_global_keydown(wiring.clone());
    events::wire_help_toggle_h(&document);

    // Render loop driven by requestAnimationFrame, stopped when the page goes away
    let handle = frame::start_loop(sketch, surface);
    let pagehide = Closure::wrap(Box::new(move || {
        handle.cancel();
        log::info!("[frame] render loop cancelled");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", pagehide.as_ref().unchecked_ref());
    pagehide.forget();

    Ok(())
}
