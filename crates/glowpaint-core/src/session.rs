//! Session-wide drawing state: colour, mode, brush width and toggles.
//!
//! Generators and the render loop only read from here. All writes go through
//! [`crate::Sketch`], which plays the role of the interaction controller.

use crate::color::{palette_color, Rgb};
use crate::constants::*;
use crate::generate::{BrushContext, Mode};
use glam::Vec2;

/// Brush width that sweeps up and down between its bounds as the pointer
/// moves, like a triangle wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushWidth {
    value: f32,
    rising: bool,
}

impl Default for BrushWidth {
    fn default() -> Self {
        Self {
            value: WIDTH_INITIAL,
            rising: true,
        }
    }
}

impl BrushWidth {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    /// Advance one motion sample along the envelope.
    pub fn step(&mut self) {
        if self.rising {
            self.value += WIDTH_STEP;
            if self.value >= WIDTH_MAX {
                self.rising = false;
            }
        } else {
            self.value -= WIDTH_STEP;
            if self.value <= WIDTH_MIN {
                self.rising = true;
            }
        }
        self.value = self.value.clamp(WIDTH_MIN, WIDTH_MAX);
    }

    /// Jump to `value`; the sweep direction is kept.
    pub fn set(&mut self, value: f32) {
        self.value = if value.is_finite() {
            value.clamp(WIDTH_MIN, WIDTH_MAX)
        } else {
            WIDTH_INITIAL
        };
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    color_index: usize,
    color: Rgb,
    pub mode: Mode,
    pub width: BrushWidth,
    hue: f32,
    pub trail_enabled: bool,
    pub mirror_enabled: bool,
    // Last pointer position while a stroke is in progress
    pub(crate) stroke: Option<Vec2>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            color_index: 0,
            color: palette_color(0).unwrap_or(Rgb::WHITE),
            mode: Mode::default(),
            width: BrushWidth::default(),
            hue: 0.0,
            trail_enabled: true,
            mirror_enabled: false,
            stroke: None,
        }
    }
}

impl Session {
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Select a palette entry; returns `false` and changes nothing when the
    /// index is out of range.
    pub fn set_color_index(&mut self, index: usize) -> bool {
        match palette_color(index) {
            Some(color) => {
                self.color_index = index;
                self.color = color;
                true
            }
            None => false,
        }
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub(crate) fn advance_hue(&mut self) {
        self.hue += HUE_STEP;
        if self.hue >= HUE_WRAP {
            self.hue = 0.0;
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Snapshot of what the generators need right now.
    pub fn brush(&self) -> BrushContext {
        BrushContext {
            color: self.color,
            width: self.width.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_state() {
        let s = Session::default();
        assert_eq!(s.color_index(), 0);
        assert_eq!(s.color(), Rgb::new(0xFF, 0x14, 0x93));
        assert_eq!(s.mode, Mode::Particles);
        assert_eq!(s.width.value(), WIDTH_INITIAL);
        assert!(s.width.is_rising());
        assert!(s.trail_enabled);
        assert!(!s.mirror_enabled);
        assert!(!s.is_drawing());
    }

    #[test]
    fn out_of_range_color_is_ignored() {
        let mut s = Session::default();
        assert!(s.set_color_index(7));
        assert!(!s.set_color_index(10));
        assert_eq!(s.color_index(), 7);
        assert_eq!(s.color(), Rgb::new(0, 255, 255));
    }

    #[test]
    fn hue_wraps_at_360() {
        let mut s = Session::default();
        for _ in 0..719 {
            s.advance_hue();
        }
        assert_eq!(s.hue(), 359.5);
        s.advance_hue();
        assert_eq!(s.hue(), 0.0);
    }

    #[test]
    fn width_set_keeps_direction_and_clamps() {
        let mut w = BrushWidth::default();
        w.set(80.0);
        assert_eq!(w.value(), WIDTH_MAX);
        assert!(w.is_rising());
        w.set(f32::NAN);
        assert_eq!(w.value(), WIDTH_INITIAL);
    }
}
