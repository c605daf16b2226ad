use glam::Vec2;
use glowpaint_core::{Paint, RadialGradient, Stroke, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
///
/// Each primitive runs between `save` and `restore`, so alpha and styles
/// never leak from one shape into the next.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    #[inline]
    fn scoped(&self, alpha: f32, draw: impl FnOnce(&web::CanvasRenderingContext2d)) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        draw(&self.ctx);
        self.ctx.restore();
    }

    fn trace_path(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.x as f64, first.y as f64);
        }
        for p in iter {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_veil(&mut self, paint: Paint) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.scoped(paint.alpha, |ctx| {
            ctx.set_fill_style_str(&paint.color.css());
            ctx.fill_rect(0.0, 0.0, w, h);
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.scoped(paint.alpha, |ctx| {
            ctx.begin_path();
            // arc() rejects negative radii; such shapes are simply skipped
            if ctx
                .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
                .is_ok()
            {
                ctx.set_fill_style_str(&paint.color.css());
                ctx.fill();
            }
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: Paint) {
        self.scoped(paint.alpha, |ctx| {
            self.trace_path(points);
            ctx.close_path();
            ctx.set_fill_style_str(&paint.color.css());
            ctx.fill();
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, paint: Paint) {
        self.scoped(paint.alpha, |ctx| {
            self.trace_path(points);
            ctx.set_stroke_style_str(&paint.color.css());
            ctx.set_line_width(width as f64);
            ctx.stroke();
        });
    }

    fn stroke_segment(&mut self, stroke: &Stroke) {
        self.scoped(stroke.alpha, |ctx| {
            ctx.begin_path();
            ctx.set_line_join("round");
            ctx.set_line_cap("round");
            ctx.set_line_width(stroke.width as f64);
            ctx.set_stroke_style_str(&stroke.color.css());
            ctx.move_to(stroke.from.x as f64, stroke.from.y as f64);
            ctx.line_to(stroke.to.x as f64, stroke.to.y as f64);
            ctx.stroke();
        });
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, alpha: f32) {
        let fill = match self.ctx.create_radial_gradient(
            gradient.focus.x as f64,
            gradient.focus.y as f64,
            0.0,
            gradient.center.x as f64,
            gradient.center.y as f64,
            gradient.radius as f64,
        ) {
            Ok(g) => g,
            Err(_) => return,
        };
        for stop in &gradient.stops {
            _ = fill.add_color_stop(stop.offset, &stop.color.css_rgba(stop.alpha));
        }
        self.scoped(alpha, |ctx| {
            ctx.begin_path();
            if ctx
                .arc(
                    gradient.center.x as f64,
                    gradient.center.y as f64,
                    gradient.radius as f64,
                    0.0,
                    TAU,
                )
                .is_ok()
            {
                ctx.set_fill_style_canvas_gradient(&fill);
                ctx.fill();
            }
        });
    }
}
