pub mod controls;
pub mod keyboard;
pub mod pointer;

use crate::surface::CanvasSurface;
use glowpaint_core::Sketch;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use controls::{dispatch, wire_control_buttons};
pub use keyboard::{wire_global_keydown, wire_help_toggle_h};
pub use pointer::wire_input_handlers;

/// Shared handles every event closure needs.
#[derive(Clone)]
pub struct AppWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub sketch: Rc<RefCell<Sketch>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
}
