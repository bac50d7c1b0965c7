//! Actor module: dedicated threads feeding the layout engine with events.
//!
//! Two event sources exist: a resize watcher that forwards terminal resize
//! notifications, and a frame ticker that paces recomputation. Both speak
//! over crossbeam channels so the embedding event loop can `select!` on
//! them.

mod resize;
mod ticker;

pub use resize::{ResizeWatcher, ViewportEvent};
pub use ticker::{FrameTick, FrameTicker};
