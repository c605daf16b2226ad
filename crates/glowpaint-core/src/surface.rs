//! The raster target shapes are drawn onto.
//!
//! Every [`Surface`] call is self-contained: alpha, line style and fill style
//! apply to that one primitive and must not leak into the next call. The
//! browser implementation brackets each call with `save`/`restore`; the
//! [`RecordingSurface`] just remembers what was asked of it.

use crate::color::Rgb;
use glam::Vec2;

/// Fill or stroke colour plus the opacity it is composited at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
}

impl Paint {
    pub fn new(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

/// A single round-capped, round-joined line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Rgb,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Two-circle radial gradient: a zero-radius circle at `focus` blending out
/// to a circle of `radius` around `center`, filled as a disc over the outer
/// circle.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub focus: Vec2,
    pub center: Vec2,
    pub radius: f32,
    pub stops: [GradientStop; 3],
}

pub trait Surface {
    /// Backing size in pixels.
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    /// Paint a rectangle over the whole surface.
    fn fill_veil(&mut self, paint: Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);
    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Vec2], paint: Paint);
    /// Stroke an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, paint: Paint);
    fn stroke_segment(&mut self, stroke: &Stroke);
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, alpha: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    Veil(Paint),
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Polygon {
        points: Vec<Vec2>,
        paint: Paint,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        paint: Paint,
    },
    Segment(Stroke),
    Gradient {
        gradient: RadialGradient,
        alpha: f32,
    },
}

/// In-memory surface that logs every draw call.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Drain the log, leaving the surface ready for the next frame.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn veil_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Veil(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_veil(&mut self, paint: Paint) {
        self.commands.push(DrawCmd::Veil(paint));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            paint,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: Paint) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, paint: Paint) {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            width,
            paint,
        });
    }

    fn stroke_segment(&mut self, stroke: &Stroke) {
        self.commands.push(DrawCmd::Segment(*stroke));
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, alpha: f32) {
        self.commands.push(DrawCmd::Gradient {
            gradient: gradient.clone(),
            alpha,
        });
    }
}
