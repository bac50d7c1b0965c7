//! Tier module: viewport classification and the reactive tier controller.
//!
//! A tier is a discrete responsive breakpoint class derived from viewport
//! width. Classification is a pure function; the controller owns the current
//! tier and re-evaluates it on frame-coalesced resize signals.

mod breakpoints;
mod coalesce;
mod controller;

pub use breakpoints::{Breakpoints, LayoutTier};
pub use coalesce::FrameCoalescer;
pub use controller::TierController;
