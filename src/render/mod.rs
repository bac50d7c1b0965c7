//! Render module: dispatching a composed plan to per-kind collaborators.

mod group;

pub use group::{RenderError, RenderFn, SectionGroup};
