use crate::color::Rgb;
use std::ops::Range;

// Shared simulation and generator tuning constants.

// Kinematics
pub const GRAVITY: f32 = 0.05; // added to a particle's vel.y every tick
pub const BUBBLE_DRIFT_DECAY: f32 = 0.99; // bubble vel.x multiplier per tick

// Fade-out window: fully opaque until this share of the lifespan has passed
pub const FADE_START: f32 = 0.7;
pub const MIN_LIFESPAN: f32 = 1.0;

// Trail veil painted over the whole surface each frame while trails are on
pub const VEIL_COLOR: Rgb = Rgb::new(17, 17, 17);
pub const VEIL_ALPHA: f32 = 0.05;

// Brush width envelope (triangle wave driven by pointer motion)
pub const WIDTH_INITIAL: f32 = 10.0;
pub const WIDTH_MIN: f32 = 5.0;
pub const WIDTH_MAX: f32 = 50.0;
pub const WIDTH_STEP: f32 = 0.1;
pub const RANDOM_WIDTH: Range<f32> = 5.0..25.0;

// Cosmetic hue counter
pub const HUE_STEP: f32 = 0.5;
pub const HUE_WRAP: f32 = 360.0;

// Brush strokes
pub const BRUSH_ALPHA: f32 = 0.8;

// Particles
pub const PARTICLE_COUNT: Range<usize> = 5..15;
pub const PARTICLE_JITTER: f32 = 10.0; // +/- per axis around the pointer
pub const PARTICLE_SPEED: f32 = 4.0; // +/- per velocity component
pub const PARTICLE_LIFESPAN: Range<f32> = 50.0..150.0;

// Spirals
pub const SPIRAL_GROW_RATE: Range<f32> = 0.1..0.3;
pub const SPIRAL_ROTATION_SPEED: Range<f32> = 0.1..0.3;
pub const SPIRAL_MAX_SIZE: Range<f32> = 100.0..300.0;
pub const SPIRAL_LIFESPAN: Range<f32> = 100.0..300.0;
pub const SPIRAL_SEGMENTS: usize = 100;
pub const SPIRAL_RADIUS_DIVISOR: f32 = 30.0; // point i sits at (i / divisor) * size
pub const SPIRAL_ANGLE_STEP: f32 = 0.1; // radians between consecutive points
pub const SPIRAL_LINE_WIDTH: f32 = 2.0;

// Stars
pub const STAR_POINTS: Range<u32> = 5..12;
pub const STAR_ROTATION_SPEED: f32 = 0.05; // +/- radians per tick
pub const STAR_LIFESPAN: Range<f32> = 100.0..200.0;
pub const STAR_INNER_RATIO: f32 = 0.5;

// Bubbles
pub const BUBBLE_JITTER: f32 = 10.0; // horizontal only
pub const BUBBLE_RISE: Range<f32> = -2.5..-0.5;
pub const BUBBLE_DRIFT: f32 = 0.5; // +/- initial vel.x
pub const BUBBLE_LIFESPAN: Range<f32> = 100.0..200.0;
pub const BUBBLE_HIGHLIGHT_ALPHA: f32 = 0.8;
pub const BUBBLE_RIM_ALPHA: f32 = 0.1;

// Stars and bubbles are at least this big before the width term is added
pub const SHAPE_MIN_SIZE: f32 = 5.0;
