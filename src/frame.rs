use crate::surface::CanvasSurface;
use glowpaint_core::{run_loop, FrameCallback, FrameScheduler, LoopHandle, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Log live-shape counts this often (in frames) at debug level.
const STATS_EVERY_FRAMES: u64 = 600;

/// Schedules frames with `requestAnimationFrame`, so the loop runs at the
/// display's refresh rate and pauses with the tab.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        let js = Closure::once_into_js(move || callback());
        if let Some(w) = web::window() {
            if let Err(e) = w.request_animation_frame(js.unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Wraps another scheduler to log store size every few seconds.
struct StatsScheduler<F> {
    inner: F,
    sketch: Rc<RefCell<Sketch>>,
    handle: RefCell<Option<LoopHandle>>,
}

impl<F: FrameScheduler> FrameScheduler for StatsScheduler<F> {
    fn request_frame(&self, callback: FrameCallback) {
        if let Some(h) = self.handle.borrow().as_ref() {
            let frames = h.frames();
            if frames > 0 && frames % STATS_EVERY_FRAMES == 0 {
                log::debug!(
                    "[frame] {} frames, {} live shapes",
                    frames,
                    self.sketch.borrow().shapes().len()
                );
            }
        }
        self.inner.request_frame(callback);
    }
}

pub fn start_loop(
    sketch: Rc<RefCell<Sketch>>,
    surface: Rc<RefCell<CanvasSurface>>,
) -> LoopHandle {
    let scheduler = Rc::new(StatsScheduler {
        inner: RafScheduler,
        sketch: sketch.clone(),
        handle: RefCell::new(None),
    });
    let handle = run_loop(sketch, surface, scheduler.clone());
    *scheduler.handle.borrow_mut() = Some(handle.clone());
    log::info!("[frame] render loop started");
    handle
}
