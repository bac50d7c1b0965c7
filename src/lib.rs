//! # Marquee
//!
//! A responsive section-layout engine for dashboard overlays.
//!
//! Marquee turns an unordered catalog of content sections (recently-played
//! items, game tiles, a banner, jackpot widgets, app tiles) plus the current
//! viewport width into an ordered, positioned render plan, and keeps that
//! plan current across resizes without recomputing more than once per frame.
//!
//! ## Core Concepts
//!
//! - **Tier classification**: viewport width maps to a discrete layout tier
//!   (`Small`/`Medium`/`Large`) via configurable breakpoints
//! - **Frame-coalesced resizes**: bursts of resize events collapse to at most
//!   one reclassification per frame, always observing the newest width
//! - **Plan-as-data composition**: a pure function derives the ordered,
//!   1-based-positioned section plan; rendering is a separate phase that
//!   dispatches the plan to opaque per-kind collaborators
//!
//! ## Example
//!
//! ```rust
//! use marquee::{Composer, LayoutTier, Section, SectionKind};
//!
//! let catalog = vec![
//!     Section::new(SectionKind::Banner),
//!     Section::new(SectionKind::Games),
//! ];
//!
//! let plan = Composer::new().compose(&catalog, LayoutTier::Large).unwrap();
//! assert_eq!(plan[0].position, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod env;
pub mod render;
pub mod section;
pub mod tier;

// Re-exports for convenience
pub use actor::{FrameTick, FrameTicker, ResizeWatcher, ViewportEvent};
pub use env::{FixedViewport, TerminalViewport, Viewport};
pub use render::{RenderError, SectionGroup};
pub use section::{
    ComposeError, Composer, PositionedSection, Section, SectionFlags, SectionKind, SlotTable,
};
pub use tier::{Breakpoints, FrameCoalescer, LayoutTier, TierController};
