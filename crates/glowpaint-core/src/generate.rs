use crate::color::Rgb;
use crate::constants::*;
use crate::shape::{Bubble, Lifetime, Particle, Shape, Spiral, Star};
use crate::surface::Stroke;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Effect generator selected by the mode button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Particles,
    Brush,
    Spirals,
    Stars,
    Bubbles,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Particles,
        Mode::Brush,
        Mode::Spirals,
        Mode::Stars,
        Mode::Bubbles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Particles => "Particles",
            Mode::Brush => "Brush",
            Mode::Spirals => "Spirals",
            Mode::Stars => "Stars",
            Mode::Bubbles => "Bubbles",
        }
    }

    pub fn index(self) -> usize {
        Mode::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Mode> {
        Mode::ALL.get(index).copied()
    }

    /// The next mode, wrapping back to the first.
    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    /// Run this mode's generator for one pointer movement.
    pub fn generate<R: Rng + ?Sized>(
        self,
        sample: MotionSample,
        ctx: &BrushContext,
        rng: &mut R,
    ) -> Emission {
        match self {
            Mode::Particles => Emission::Shapes(particles(sample, ctx, rng)),
            Mode::Brush => Emission::Stroke(brush(sample, ctx)),
            Mode::Spirals => Emission::Shapes(smallvec::smallvec![spiral(sample, ctx, rng)]),
            Mode::Stars => Emission::Shapes(smallvec::smallvec![star(sample, ctx, rng)]),
            Mode::Bubbles => Emission::Shapes(smallvec::smallvec![bubble(sample, ctx, rng)]),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown drawing mode {0:?}")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

/// One pointer movement: the new position and the one before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub pos: Vec2,
    pub prev: Vec2,
}

impl MotionSample {
    pub fn new(pos: Vec2, prev: Vec2) -> Self {
        Self { pos, prev }
    }

    /// Reflect both points across the vertical centre line of a surface.
    pub fn mirrored(self, surface_width: f32) -> Self {
        Self {
            pos: Vec2::new(surface_width - self.pos.x, self.pos.y),
            prev: Vec2::new(surface_width - self.prev.x, self.prev.y),
        }
    }
}

/// Session values the generators read when they fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushContext {
    pub color: Rgb,
    pub width: f32,
}

pub type ShapeBatch = SmallVec<[Shape; 16]>;

/// What a generator produced for one sample.
#[derive(Clone, Debug, PartialEq)]
pub enum Emission {
    /// New shapes for the store.
    Shapes(ShapeBatch),
    /// A line to composite right away; never stored.
    Stroke(Stroke),
}

// Uniform in [lo, hi) without the empty-range panic of `gen_range`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, amount: f32) -> f32 {
    uniform(rng, -amount, amount)
}

fn particles<R: Rng + ?Sized>(sample: MotionSample, ctx: &BrushContext, rng: &mut R) -> ShapeBatch {
    let count = rng.gen_range(PARTICLE_COUNT);
    (0..count)
        .map(|_| {
            Shape::Particle(Particle {
                pos: sample.pos
                    + Vec2::new(jitter(rng, PARTICLE_JITTER), jitter(rng, PARTICLE_JITTER)),
                vel: Vec2::new(jitter(rng, PARTICLE_SPEED), jitter(rng, PARTICLE_SPEED)),
                radius: uniform(rng, 0.0, ctx.width),
                color: ctx.color,
                life: Lifetime::new(rng.gen_range(PARTICLE_LIFESPAN)),
            })
        })
        .collect()
}

fn brush(sample: MotionSample, ctx: &BrushContext) -> Stroke {
    Stroke {
        from: sample.prev,
        to: sample.pos,
        width: ctx.width,
        color: ctx.color,
        alpha: BRUSH_ALPHA,
    }
}

fn spiral<R: Rng + ?Sized>(sample: MotionSample, ctx: &BrushContext, rng: &mut R) -> Shape {
    Shape::Spiral(Spiral {
        pos: sample.pos,
        angle: 0.0,
        size: ctx.width,
        grow_rate: rng.gen_range(SPIRAL_GROW_RATE),
        rotation_speed: rng.gen_range(SPIRAL_ROTATION_SPEED),
        max_size: rng.gen_range(SPIRAL_MAX_SIZE),
        color: ctx.color,
        life: Lifetime::new(rng.gen_range(SPIRAL_LIFESPAN)),
    })
}

fn star<R: Rng + ?Sized>(sample: MotionSample, ctx: &BrushContext, rng: &mut R) -> Shape {
    Shape::Star(Star {
        pos: sample.pos,
        size: uniform(rng, SHAPE_MIN_SIZE, SHAPE_MIN_SIZE + ctx.width),
        points: rng.gen_range(STAR_POINTS),
        rotation: rng.gen_range(0.0..TAU),
        rotation_speed: jitter(rng, STAR_ROTATION_SPEED),
        color: ctx.color,
        life: Lifetime::new(rng.gen_range(STAR_LIFESPAN)),
    })
}

fn bubble<R: Rng + ?Sized>(sample: MotionSample, ctx: &BrushContext, rng: &mut R) -> Shape {
    Shape::Bubble(Bubble {
        pos: Vec2::new(sample.pos.x + jitter(rng, BUBBLE_JITTER), sample.pos.y),
        vel: Vec2::new(jitter(rng, BUBBLE_DRIFT), rng.gen_range(BUBBLE_RISE)),
        radius: uniform(rng, SHAPE_MIN_SIZE, SHAPE_MIN_SIZE + ctx.width),
        color: ctx.color,
        life: Lifetime::new(rng.gen_range(BUBBLE_LIFESPAN)),
    })
}
