// Range checks for every effect generator.
// Randomness is never reseeded by the app, so these assert bounds, not values.

use glam::Vec2;
use glowpaint_core::constants::*;
use glowpaint_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const SEEDS: u64 = 200;

fn ctx() -> BrushContext {
    BrushContext {
        color: Rgb::new(0x41, 0x69, 0xE1),
        width: 20.0,
    }
}

fn sample() -> MotionSample {
    MotionSample::new(Vec2::new(200.0, 150.0), Vec2::new(190.0, 140.0))
}

fn shapes_for(mode: Mode, seed: u64) -> ShapeBatch {
    let mut rng = StdRng::seed_from_u64(seed);
    match mode.generate(sample(), &ctx(), &mut rng) {
        Emission::Shapes(batch) => batch,
        Emission::Stroke(s) => panic!("{mode} produced a stroke: {s:?}"),
    }
}

fn in_range(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo && v < hi
}

#[test]
fn particles_emit_a_jittered_burst() {
    for seed in 0..SEEDS {
        let batch = shapes_for(Mode::Particles, seed);
        assert!(
            PARTICLE_COUNT.contains(&batch.len()),
            "seed {seed}: {} particles",
            batch.len()
        );
        for shape in &batch {
            let Shape::Particle(p) = shape else {
                panic!("expected particle, got {}", shape.kind());
            };
            let offset = p.pos - sample().pos;
            assert!(offset.x.abs() <= PARTICLE_JITTER && offset.y.abs() <= PARTICLE_JITTER);
            assert!(p.vel.x.abs() <= PARTICLE_SPEED && p.vel.y.abs() <= PARTICLE_SPEED);
            assert!(p.radius >= 0.0 && p.radius <= ctx().width);
            assert!(in_range(p.life.lifespan(), 50.0, 150.0));
            assert_eq!(p.life.age(), 0);
            assert_eq!(p.color, ctx().color);
        }
    }
}

#[test]
fn particle_counts_cover_the_range() {
    let counts: std::collections::BTreeSet<usize> = (0..SEEDS)
        .map(|seed| shapes_for(Mode::Particles, seed).len())
        .collect();
    assert_eq!(counts.first(), Some(&5));
    assert_eq!(counts.last(), Some(&14));
}

#[test]
fn brush_strokes_from_previous_point() {
    let mut rng = StdRng::seed_from_u64(1);
    match Mode::Brush.generate(sample(), &ctx(), &mut rng) {
        Emission::Stroke(stroke) => {
            assert_eq!(stroke.from, sample().prev);
            assert_eq!(stroke.to, sample().pos);
            assert_eq!(stroke.width, 20.0);
            assert_eq!(stroke.color, ctx().color);
            assert_eq!(stroke.alpha, BRUSH_ALPHA);
        }
        Emission::Shapes(batch) => panic!("brush produced {} shapes", batch.len()),
    }
}

#[test]
fn spirals_emit_one_growing_spiral() {
    for seed in 0..SEEDS {
        let batch = shapes_for(Mode::Spirals, seed);
        assert_eq!(batch.len(), 1);
        let Shape::Spiral(s) = &batch[0] else {
            panic!("expected spiral");
        };
        assert_eq!(s.pos, sample().pos);
        assert_eq!(s.size, ctx().width);
        assert_eq!(s.angle, 0.0);
        assert!(in_range(s.grow_rate, 0.1, 0.3));
        assert!(in_range(s.rotation_speed, 0.1, 0.3));
        assert!(in_range(s.max_size, 100.0, 300.0));
        assert!(in_range(s.life.lifespan(), 100.0, 300.0));
    }
}

#[test]
fn stars_emit_one_rotating_star() {
    for seed in 0..SEEDS {
        let batch = shapes_for(Mode::Stars, seed);
        assert_eq!(batch.len(), 1);
        let Shape::Star(s) = &batch[0] else {
            panic!("expected star");
        };
        assert_eq!(s.pos, sample().pos);
        assert!(s.size >= SHAPE_MIN_SIZE && s.size <= SHAPE_MIN_SIZE + ctx().width);
        assert!(STAR_POINTS.contains(&s.points));
        assert!(in_range(s.rotation, 0.0, TAU));
        assert!(s.rotation_speed.abs() <= STAR_ROTATION_SPEED);
        assert!(in_range(s.life.lifespan(), 100.0, 200.0));
    }
}

#[test]
fn bubbles_emit_one_rising_bubble() {
    for seed in 0..SEEDS {
        let batch = shapes_for(Mode::Bubbles, seed);
        assert_eq!(batch.len(), 1);
        let Shape::Bubble(b) = &batch[0] else {
            panic!("expected bubble");
        };
        assert_eq!(b.pos.y, sample().pos.y);
        assert!((b.pos.x - sample().pos.x).abs() <= BUBBLE_JITTER);
        assert!(in_range(b.vel.y, -2.5, -0.5));
        assert!(b.vel.x.abs() <= BUBBLE_DRIFT);
        assert!(b.radius >= SHAPE_MIN_SIZE && b.radius <= SHAPE_MIN_SIZE + ctx().width);
        assert!(in_range(b.life.lifespan(), 100.0, 200.0));
    }
}

#[test]
fn stars_scenario_single_sample() {
    let mut sketch = Sketch::new();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(7);
    sketch.set_mode(Mode::Stars);
    sketch.pointer_down(Vec2::new(100.0, 100.0));
    sketch.pointer_move(Vec2::new(110.0, 110.0), &mut surface, &mut rng);

    assert_eq!(sketch.shapes().len(), 1);
    let Some(Shape::Star(star)) = sketch.shapes().iter().next() else {
        panic!("expected a star");
    };
    assert_eq!(star.pos, Vec2::new(110.0, 110.0));
    assert!((5..12).contains(&star.points));
    assert!(star.rotation >= 0.0 && star.rotation < TAU);
    assert!(surface.commands.is_empty());
}

#[test]
fn zero_width_context_does_not_panic() {
    let narrow = BrushContext {
        color: Rgb::WHITE,
        width: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(3);
    for mode in Mode::ALL {
        let _ = mode.generate(sample(), &narrow, &mut rng);
    }
}
