// Shape ageing, removal and fade-out across the whole store.

use glam::Vec2;
use glowpaint_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generated(mode: Mode, seed: u64) -> Vec<Shape> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ctx = BrushContext {
        color: Rgb::WHITE,
        width: 15.0,
    };
    let sample = MotionSample::new(Vec2::new(300.0, 300.0), Vec2::new(295.0, 298.0));
    match mode.generate(sample, &ctx, &mut rng) {
        Emission::Shapes(batch) => batch.into_vec(),
        Emission::Stroke(_) => Vec::new(),
    }
}

#[test]
fn shapes_disappear_exactly_when_age_reaches_lifespan() {
    let mut surface = RecordingSurface::new(600.0, 600.0);
    for mode in Mode::ALL {
        for seed in 0..20 {
            for shape in generated(mode, seed) {
                let ticks = shape.life().lifespan().ceil() as u32;
                let mut store = ShapeStore::new();
                store.push(shape);
                for _ in 0..ticks - 1 {
                    store.advance(&mut surface);
                }
                assert_eq!(store.len(), 1, "{mode} shape gone before {ticks} ticks");
                let age = store.iter().next().map(|s| s.life().age());
                assert_eq!(age, Some(ticks - 1));
                store.advance(&mut surface);
                assert!(store.is_empty(), "{mode} shape outlived {ticks} ticks");
                surface.take();
            }
        }
    }
}

#[test]
fn alpha_holds_then_fades_to_zero() {
    for lifespan in [1.0_f32, 7.3, 50.0, 149.9, 300.0] {
        let mut prev: Option<f32> = None;
        for age in 0..=lifespan.ceil() as u32 {
            let ratio = age as f32 / lifespan;
            let alpha = fade_alpha(age, lifespan);
            if ratio <= 0.7 {
                assert_eq!(alpha, 1.0, "age {age} of {lifespan}");
            } else if ratio <= 1.0 {
                if let Some(p) = prev {
                    assert!(alpha < p, "alpha rose at age {age} of {lifespan}");
                }
                prev = Some(alpha);
            }
            assert!((0.0..=1.0).contains(&alpha));
        }
    }
    assert_eq!(fade_alpha(50, 50.0), 0.0);
    assert_eq!(fade_alpha(300, 300.0), 0.0);
}

#[test]
fn drawn_shapes_never_carry_expired_alpha() {
    let mut store = ShapeStore::new();
    for seed in 0..5 {
        store.extend(generated(Mode::Particles, seed));
        store.extend(generated(Mode::Bubbles, seed));
    }
    let mut surface = RecordingSurface::new(600.0, 600.0);
    while !store.is_empty() {
        store.advance(&mut surface);
        for cmd in surface.take() {
            if let DrawCmd::Circle { paint, .. } = cmd {
                assert!(paint.alpha > 0.0, "shape drawn fully transparent");
            }
        }
    }
}

#[test]
fn particles_drain_within_two_hundred_frames() {
    let mut sketch = Sketch::new();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(sketch.mode(), Mode::Particles);

    sketch.pointer_down(Vec2::new(400.0, 300.0));
    for i in 0..10 {
        sketch.pointer_move(Vec2::new(400.0 + i as f32, 300.0), &mut surface, &mut rng);
    }
    sketch.pointer_up();
    assert!(sketch.shapes().len() >= 50);

    for _ in 0..200 {
        sketch.tick(&mut surface);
    }
    assert!(sketch.shapes().is_empty());
}
