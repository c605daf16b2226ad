use crate::color::PALETTE;
use crate::constants::{RANDOM_WIDTH, VEIL_ALPHA, VEIL_COLOR};
use crate::controls::{Action, UiRefresh};
use crate::generate::{Emission, Mode, MotionSample};
use crate::session::Session;
use crate::store::{AdvanceStats, ShapeStore};
use crate::surface::{Paint, Surface};
use glam::Vec2;
use rand::Rng;

/// The drawing session plus every live shape.
///
/// Input handlers call the `pointer_*` methods and [`Sketch::apply`]; the
/// frame loop calls [`Sketch::tick`]. Both run on the same thread, so shapes
/// appended by an input event are first seen by the next tick.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    session: Session,
    store: ShapeStore,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    pub fn mode_label(&self) -> String {
        format!(
            "Current Mode: {} - Click and drag to create evolving patterns.",
            self.session.mode.name()
        )
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.session.stroke = Some(pos);
    }

    pub fn pointer_up(&mut self) {
        self.session.stroke = None;
    }

    /// Feed one pointer movement to the active generator.
    ///
    /// Does nothing unless a stroke is in progress. With mirroring on the
    /// generator runs a second time reflected across the surface's vertical
    /// centre line. Afterwards the hue and brush width advance one step.
    pub fn pointer_move<S, R>(&mut self, pos: Vec2, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let Some(prev) = self.session.stroke else {
            return;
        };
        let sample = MotionSample::new(pos, prev);
        self.emit(sample, surface, rng);
        if self.session.mirror_enabled {
            let width = surface.size().x;
            self.emit(sample.mirrored(width), surface, rng);
        }
        self.session.stroke = Some(pos);
        self.session.advance_hue();
        self.session.width.step();
    }

    fn emit<S, R>(&mut self, sample: MotionSample, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let brush = self.session.brush();
        match self.session.mode.generate(sample, &brush, rng) {
            Emission::Shapes(batch) => self.store.extend(batch),
            Emission::Stroke(stroke) => surface.stroke_segment(&stroke),
        }
    }

    /// One frame: trail veil (when enabled), then age, move and draw shapes.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> AdvanceStats {
        if self.session.trail_enabled {
            surface.fill_veil(Paint::new(VEIL_COLOR, VEIL_ALPHA));
        }
        let stats = self.store.advance(surface);
        log::trace!(
            "[tick] drawn={} expired={} live={}",
            stats.drawn,
            stats.expired,
            self.store.len()
        );
        stats
    }

    pub fn clear<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let dropped = self.store.len();
        self.store.clear();
        surface.clear();
        log::info!("[sketch] cleared ({} shapes dropped)", dropped);
    }

    pub fn toggle_trail(&mut self) -> bool {
        self.session.trail_enabled = !self.session.trail_enabled;
        log::info!("[sketch] trail={}", self.session.trail_enabled);
        self.session.trail_enabled
    }

    pub fn toggle_mirror(&mut self) -> bool {
        self.session.mirror_enabled = !self.session.mirror_enabled;
        log::info!("[sketch] mirror={}", self.session.mirror_enabled);
        self.session.mirror_enabled
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.session.mode = mode;
        log::info!("[sketch] mode={}", mode);
    }

    pub fn cycle_mode(&mut self) -> Mode {
        self.set_mode(self.session.mode.next());
        self.session.mode
    }

    pub fn select_color(&mut self, index: usize) -> bool {
        let ok = self.session.set_color_index(index);
        if ok {
            log::debug!("[sketch] color={}", PALETTE[index].name);
        } else {
            log::warn!("[sketch] ignoring palette index {}", index);
        }
        ok
    }

    /// Random palette colour, random mode and a random width in 5..25.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let color = rng.gen_range(0..PALETTE.len());
        self.session.set_color_index(color);
        let mode = Mode::ALL[rng.gen_range(0..Mode::ALL.len())];
        self.set_mode(mode);
        self.session.width.set(rng.gen_range(RANDOM_WIDTH));
        log::info!(
            "[sketch] randomized color={} mode={} width={:.1}",
            PALETTE[color].name,
            mode,
            self.session.width.value()
        );
    }

    /// Run a control action and report what the UI should redraw.
    pub fn apply<S, R>(&mut self, action: Action, surface: &mut S, rng: &mut R) -> UiRefresh
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        match action {
            Action::Clear => {
                self.clear(surface);
                UiRefresh::default()
            }
            Action::ToggleTrail => {
                self.toggle_trail();
                UiRefresh::default()
            }
            Action::ToggleMirror => {
                self.toggle_mirror();
                UiRefresh::default()
            }
            Action::CycleMode => {
                self.cycle_mode();
                UiRefresh {
                    mode_label: true,
                    palette: false,
                }
            }
            Action::SelectMode(mode) => {
                self.set_mode(mode);
                UiRefresh {
                    mode_label: true,
                    palette: false,
                }
            }
            Action::SelectColor(index) => UiRefresh {
                mode_label: false,
                palette: self.select_color(index),
            },
            Action::Randomize => {
                self.randomize(rng);
                UiRefresh {
                    mode_label: true,
                    palette: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    // Records messages per test thread so parallel tests don't see each other.
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|c| c.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;

    fn captured() -> Vec<String> {
        _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
        CAPTURED.with(|c| c.borrow_mut().drain(..).collect())
    }

    #[test]
    fn every_mode_change_is_logged() {
        captured();
        let mut sketch = Sketch::new();
        sketch.cycle_mode();
        sketch.set_mode(Mode::Stars);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            sketch.randomize(&mut rng);
        }
        let modes = captured()
            .into_iter()
            .filter(|m| m.starts_with("[sketch] mode="))
            .count();
        assert_eq!(modes, 7);
    }
}
