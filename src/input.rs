use glam::Vec2;
use web_sys as web;

/// Client-area rectangle of the canvas in CSS pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct CssRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space point into canvas backing pixels.
///
/// A zero-sized rect (canvas not laid out yet) maps straight through with
/// only the offset removed.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect: CssRect, backing: Vec2) -> Vec2 {
    let css = Vec2::new(client.x - rect.left, client.y - rect.top);
    if rect.width > 0.0 && rect.height > 0.0 {
        Vec2::new(
            css.x / rect.width * backing.x,
            css.y / rect.height * backing.y,
        )
    } else {
        css
    }
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let r = canvas.get_bounding_client_rect();
    let rect = CssRect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    };
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        rect,
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
