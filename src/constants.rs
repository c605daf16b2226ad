/// DOM hooks the front end binds to.
///
/// `index.html` must provide these ids and classes; keeping them here keeps
/// string literals out of the wiring code.
// Canvas the sketch renders into
pub const CANVAS_ID: &str = "canvas";

// Colour picker container and its swatches
pub const COLOR_PICKER_SELECTOR: &str = ".color-picker";
pub const SWATCH_CLASS: &str = "color-option";
pub const SWATCH_ID_PREFIX: &str = "swatch-";
pub const ACTIVE_CLASS: &str = "active";

// Mode name / help line
pub const INSTRUCTIONS_SELECTOR: &str = ".instructions";
pub const HIDDEN_CLASS: &str = "hidden";

// Optional initial mode, read from the canvas element
pub const MODE_ATTRIBUTE: &str = "data-mode";

// Control buttons
pub const CLEAR_BUTTON_ID: &str = "clear-btn";
pub const TRAIL_BUTTON_ID: &str = "toggle-trail";
pub const MODE_BUTTON_ID: &str = "change-mode";
pub const MIRROR_BUTTON_ID: &str = "toggle-mirror";
pub const RANDOMIZE_BUTTON_ID: &str = "randomize";

pub const CONTROL_BUTTON_IDS: [&str; 5] = [
    CLEAR_BUTTON_ID,
    TRAIL_BUTTON_ID,
    MODE_BUTTON_ID,
    MIRROR_BUTTON_ID,
    RANDOMIZE_BUTTON_ID,
];

// Keys handled outside the sketch's own shortcut table
pub const HELP_TOGGLE_KEYS: [&str; 2] = ["h", "H"];

#[inline]
pub fn swatch_id(index: usize) -> String {
    format!("{}{}", SWATCH_ID_PREFIX, index)
}
