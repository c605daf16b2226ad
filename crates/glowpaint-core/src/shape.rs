use crate::color::Rgb;
use crate::constants::*;
use crate::surface::{GradientStop, Paint, RadialGradient, Surface};
use glam::Vec2;
use std::f32::consts::TAU;

/// Age and lifespan shared by every shape kind.
///
/// `age` counts the ticks the shape has survived; the shape is due for
/// removal on the tick where `age >= lifespan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifetime {
    age: u32,
    lifespan: f32,
}

impl Lifetime {
    /// Non-finite or sub-1 lifespans are clamped so the fade ratio stays defined.
    pub fn new(lifespan: f32) -> Self {
        let lifespan = if lifespan.is_finite() {
            lifespan.max(MIN_LIFESPAN)
        } else {
            MIN_LIFESPAN
        };
        Self { age: 0, lifespan }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    /// Age by one tick; returns whether the shape is still alive.
    pub fn tick(&mut self) -> bool {
        self.age = self.age.saturating_add(1);
        !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.age as f32 >= self.lifespan
    }

    pub fn alpha(&self) -> f32 {
        fade_alpha(self.age, self.lifespan)
    }
}

/// Opacity for a shape at `age` of `lifespan` ticks.
///
/// Fully opaque for the first 70% of the lifespan, then a linear ramp down to
/// zero at the end.
pub fn fade_alpha(age: u32, lifespan: f32) -> f32 {
    let ratio = age as f32 / lifespan.max(MIN_LIFESPAN);
    if ratio <= FADE_START {
        1.0
    } else {
        (1.0 - (ratio - FADE_START) / (1.0 - FADE_START)).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub life: Lifetime,
}

impl Particle {
    fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += GRAVITY;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, alpha: f32) {
        surface.fill_circle(self.pos, self.radius, Paint::new(self.color, alpha));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spiral {
    pub pos: Vec2,
    pub angle: f32,
    pub size: f32,
    pub grow_rate: f32,
    pub rotation_speed: f32,
    pub max_size: f32,
    pub color: Rgb,
    pub life: Lifetime,
}

impl Spiral {
    pub fn current_size(&self) -> f32 {
        (self.size + self.life.age() as f32 * self.grow_rate).min(self.max_size)
    }

    /// Archimedean spiral polyline in surface coordinates.
    pub fn outline(&self) -> Vec<Vec2> {
        let size = self.current_size();
        let rotation = Vec2::from_angle(self.angle);
        (0..SPIRAL_SEGMENTS)
            .map(|i| {
                let i = i as f32;
                let local = Vec2::from_angle(SPIRAL_ANGLE_STEP * i) * (i / SPIRAL_RADIUS_DIVISOR * size);
                self.pos + rotation.rotate(local)
            })
            .collect()
    }

    fn step(&mut self) {
        self.angle += self.rotation_speed;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, alpha: f32) {
        surface.stroke_polyline(
            &self.outline(),
            SPIRAL_LINE_WIDTH,
            Paint::new(self.color, alpha),
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub points: u32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Rgb,
    pub life: Lifetime,
}

impl Star {
    /// `2 * points` vertices alternating between the outer and inner radius.
    pub fn outline(&self) -> Vec<Vec2> {
        let vertices = self.points.max(1) * 2;
        let rotation = Vec2::from_angle(self.rotation);
        (0..vertices)
            .map(|i| {
                let radius = if i % 2 == 0 {
                    self.size
                } else {
                    self.size * STAR_INNER_RATIO
                };
                let local = Vec2::from_angle(TAU * i as f32 / vertices as f32) * radius;
                self.pos + rotation.rotate(local)
            })
            .collect()
    }

    fn step(&mut self) {
        self.rotation += self.rotation_speed;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, alpha: f32) {
        surface.fill_polygon(&self.outline(), Paint::new(self.color, alpha));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub life: Lifetime,
}

impl Bubble {
    /// Highlight and gradient focus sit a third of the radius up and left.
    pub fn highlight_center(&self) -> Vec2 {
        self.pos - Vec2::splat(self.radius / 3.0)
    }

    fn step(&mut self) {
        self.pos += self.vel;
        self.vel.x *= BUBBLE_DRIFT_DECAY;
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, alpha: f32) {
        let gradient = RadialGradient {
            focus: self.highlight_center(),
            center: self.pos,
            radius: self.radius,
            stops: [
                GradientStop {
                    offset: 0.0,
                    color: Rgb::WHITE,
                    alpha: BUBBLE_HIGHLIGHT_ALPHA,
                },
                GradientStop {
                    offset: 0.5,
                    color: self.color,
                    alpha: 1.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb::BLACK,
                    alpha: BUBBLE_RIM_ALPHA,
                },
            ],
        };
        surface.fill_radial_gradient(&gradient, alpha);
        surface.fill_circle(
            self.highlight_center(),
            self.radius / 4.0,
            Paint::new(Rgb::WHITE, alpha * BUBBLE_HIGHLIGHT_ALPHA),
        );
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Particle(Particle),
    Spiral(Spiral),
    Star(Star),
    Bubble(Bubble),
}

impl Shape {
    pub fn life(&self) -> &Lifetime {
        match self {
            Shape::Particle(p) => &p.life,
            Shape::Spiral(s) => &s.life,
            Shape::Star(s) => &s.life,
            Shape::Bubble(b) => &b.life,
        }
    }

    fn life_mut(&mut self) -> &mut Lifetime {
        match self {
            Shape::Particle(p) => &mut p.life,
            Shape::Spiral(s) => &mut s.life,
            Shape::Star(s) => &mut s.life,
            Shape::Bubble(b) => &mut b.life,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Particle(p) => p.pos,
            Shape::Spiral(s) => s.pos,
            Shape::Star(s) => s.pos,
            Shape::Bubble(b) => b.pos,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            Shape::Particle(p) => p.color,
            Shape::Spiral(s) => s.color,
            Shape::Star(s) => s.color,
            Shape::Bubble(b) => b.color,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Particle(_) => "particle",
            Shape::Spiral(_) => "spiral",
            Shape::Star(_) => "star",
            Shape::Bubble(_) => "bubble",
        }
    }

    /// One simulation tick: age, then move and draw if still alive.
    ///
    /// Returns `false` when the shape expired this tick; nothing is drawn in
    /// that case and the caller should drop it.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.life_mut().tick() {
            return false;
        }
        let alpha = self.life().alpha();
        match self {
            Shape::Particle(p) => {
                p.step();
                p.draw(surface, alpha);
            }
            Shape::Spiral(s) => {
                s.step();
                s.draw(surface, alpha);
            }
            Shape::Star(s) => {
                s.step();
                s.draw(surface, alpha);
            }
            Shape::Bubble(b) => {
                b.step();
                b.draw(surface, alpha);
            }
        }
        true
    }
}
