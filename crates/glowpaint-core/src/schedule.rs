//! Frame scheduling.
//!
//! The render loop never sleeps or spins: each frame asks a
//! [`FrameScheduler`] for the next one. In the browser that is
//! `requestAnimationFrame`; in tests a [`ManualScheduler`] lets frames be
//! stepped one at a time.

use crate::sketch::Sketch;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub type FrameCallback = Box<dyn FnOnce()>;

pub trait FrameScheduler {
    /// Run `callback` once at the next frame boundary.
    fn request_frame(&self, callback: FrameCallback);
}

/// Queue of frame callbacks run on demand.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the callbacks queued so far. Callbacks they schedule wait for the
    /// next call. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let n = due.len();
        for callback in due {
            callback();
        }
        n
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}

/// Handle to a running loop started by [`run_loop`].
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// Stop rescheduling. A frame already running finishes normally.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

/// Start the self-rescheduling render loop.
pub fn run_loop<S, F>(
    sketch: Rc<RefCell<Sketch>>,
    surface: Rc<RefCell<S>>,
    scheduler: Rc<F>,
) -> LoopHandle
where
    S: Surface + 'static,
    F: FrameScheduler + ?Sized + 'static,
{
    let handle = LoopHandle::default();
    schedule_frame(sketch, surface, scheduler, handle.clone());
    handle
}

fn schedule_frame<S, F>(
    sketch: Rc<RefCell<Sketch>>,
    surface: Rc<RefCell<S>>,
    scheduler: Rc<F>,
    handle: LoopHandle,
) where
    S: Surface + 'static,
    F: FrameScheduler + ?Sized + 'static,
{
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || {
        if handle.is_cancelled() {
            return;
        }
        sketch.borrow_mut().tick(&mut *surface.borrow_mut());
        handle.frames.set(handle.frames.get() + 1);
        if !handle.is_cancelled() {
            schedule_frame(sketch, surface, next, handle);
        }
    }));
}
