//! Section module: the catalog data model and the composition algorithm.
//!
//! Composition is a pure derivation: `(catalog, tier) -> positioned plan`.
//! The plan is plain data with 1-based contiguous positions; rendering it
//! is a separate phase (see [`crate::render`]).

mod compose;
mod types;

pub use compose::{ComposeError, Composer, PositionedSection, SlotTable};
pub use types::{Section, SectionFlags, SectionKind};
