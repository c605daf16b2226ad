//! Platform-agnostic core of glowpaint.
//!
//! Pointer motion is turned into short-lived shapes by one of five effect
//! generators; a render loop ages, moves and draws those shapes every frame
//! onto a [`Surface`]. Nothing in here touches the browser, so the whole
//! simulation can be driven headless through [`RecordingSurface`] and
//! [`ManualScheduler`].

pub mod color;
pub mod constants;
pub mod controls;
pub mod generate;
pub mod schedule;
pub mod session;
pub mod shape;
pub mod sketch;
pub mod store;
pub mod surface;

pub use color::*;
pub use controls::*;
pub use generate::*;
pub use schedule::*;
pub use session::*;
pub use shape::*;
pub use sketch::*;
pub use store::*;
pub use surface::*;
