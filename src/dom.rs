use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_click_listener_to(&el, move || handler());
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

#[inline]
pub fn add_click_listener_to(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Match the canvas backing store to the window's inner size.
pub fn fit_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

/// Resize to the window without losing what is already drawn.
///
/// Setting a canvas size wipes its raster, so the old pixels are parked on a
/// scratch canvas and drawn back at the origin. Shapes still in flight keep
/// their coordinates; nothing is rescaled.
pub fn resize_preserving_raster(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    let scratch = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let saved = scratch.and_then(|scratch| {
        scratch.set_width(canvas.width());
        scratch.set_height(canvas.height());
        let sctx = context_2d(&scratch)?;
        sctx.draw_image_with_html_canvas_element(canvas, 0.0, 0.0)
            .ok()?;
        Some(scratch)
    });

    fit_canvas_to_window(canvas);

    match saved {
        Some(scratch) => {
            _ = ctx.draw_image_with_html_canvas_element(&scratch, 0.0, 0.0);
        }
        None => log::warn!("[dom] could not preserve canvas contents across resize"),
    }
}
