//! Section Group: the boundary between the plan and actual rendering.
//!
//! The group holds one opaque render collaborator per section kind and
//! walks a composed plan in order, handing each collaborator its section
//! data and assigned position. What the collaborators produce is their
//! business; the group neither inspects nor depends on it.
//!
//! A plan that did not come out of composition intact (positions not
//! `1..=K`) or that names a kind with no registered collaborator is a
//! programming error and is rejected before anything renders.

use crate::section::{PositionedSection, Section, SectionKind};
use std::collections::HashMap;
use thiserror::Error;

/// Render dispatch failure: an integration mistake, rejected fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The plan names a section kind with no registered collaborator.
    #[error("no render collaborator registered for section kind {0:?}")]
    MissingRenderer(SectionKind),
    /// The plan's positions are not contiguous from 1, so it cannot have
    /// come from an intact composition pass.
    #[error("malformed plan: expected position {expected} at index {index}, found {found}")]
    MalformedPlan {
        /// Index of the offending entry.
        index: usize,
        /// Position the entry should carry.
        expected: u16,
        /// Position the entry actually carries.
        found: u16,
    },
}

/// An opaque per-kind render collaborator receiving `(data, position)`.
pub type RenderFn<'f, R> = Box<dyn FnMut(&Section, u16) -> R + 'f>;

/// Registry of render collaborators, one per section kind.
pub struct SectionGroup<'f, R> {
    renderers: HashMap<SectionKind, RenderFn<'f, R>>,
}

impl<R> Default for SectionGroup<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f, R> SectionGroup<'f, R> {
    /// Create an empty group.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Register the collaborator for a section kind, replacing any
    /// previous one.
    #[must_use]
    pub fn on<F>(mut self, kind: SectionKind, renderer: F) -> Self
    where
        F: FnMut(&Section, u16) -> R + 'f,
    {
        self.renderers.insert(kind, Box::new(renderer));
        self
    }

    /// Register the same collaborator for every section kind.
    #[must_use]
    pub fn on_all<F>(self, renderer: F) -> Self
    where
        F: FnMut(&Section, u16) -> R + Clone + 'f,
    {
        self.on(SectionKind::RecentlyPlayed, renderer.clone())
            .on(SectionKind::Games, renderer.clone())
            .on(SectionKind::Banner, renderer.clone())
            .on(SectionKind::Jackpot, renderer.clone())
            .on(SectionKind::Apps, renderer)
    }

    /// Whether a collaborator is registered for the kind.
    pub fn covers(&self, kind: SectionKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Render a composed plan, invoking collaborators in plan order.
    ///
    /// # Errors
    ///
    /// [`RenderError::MalformedPlan`] when positions are not exactly
    /// `1..=K` in order, [`RenderError::MissingRenderer`] when an entry's
    /// kind has no collaborator. Both are detected before any collaborator
    /// runs.
    pub fn render(&mut self, plan: &[PositionedSection<'_>]) -> Result<Vec<R>, RenderError> {
        self.check(plan)?;

        let mut output = Vec::with_capacity(plan.len());
        for entry in plan {
            let renderer = self
                .renderers
                .get_mut(&entry.section.kind)
                .ok_or(RenderError::MissingRenderer(entry.section.kind))?;
            output.push(renderer(entry.section, entry.position));
        }
        Ok(output)
    }

    /// Validate a plan without rendering it.
    fn check(&self, plan: &[PositionedSection<'_>]) -> Result<(), RenderError> {
        for (index, entry) in plan.iter().enumerate() {
            let expected = u16::try_from(index + 1).unwrap_or(u16::MAX);
            if entry.position != expected {
                return Err(RenderError::MalformedPlan {
                    index,
                    expected,
                    found: entry.position,
                });
            }
            if !self.covers(entry.section.kind) {
                return Err(RenderError::MissingRenderer(entry.section.kind));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Composer;
    use crate::tier::LayoutTier;

    fn label(kind: SectionKind) -> &'static str {
        match kind {
            SectionKind::RecentlyPlayed => "recently-played",
            SectionKind::Games => "games",
            SectionKind::Banner => "banner",
            SectionKind::Jackpot => "jackpot",
            SectionKind::Apps => "apps",
        }
    }

    fn full_group() -> SectionGroup<'static, String> {
        let render = |section: &Section, position: u16| {
            format!("{} @ {}", label(section.kind), position)
        };
        SectionGroup::new()
            .on(SectionKind::RecentlyPlayed, render)
            .on(SectionKind::Games, render)
            .on(SectionKind::Banner, render)
            .on(SectionKind::Jackpot, render)
            .on(SectionKind::Apps, render)
    }

    #[test]
    fn test_render_dispatches_in_plan_order() {
        let catalog = vec![
            Section::new(SectionKind::Games),
            Section::new(SectionKind::Banner),
            Section::new(SectionKind::Apps),
        ];
        let plan = Composer::new().compose(&catalog, LayoutTier::Small).unwrap();

        let rendered = full_group().render(&plan).unwrap();
        assert_eq!(rendered, vec!["games @ 1", "banner @ 2", "apps @ 3"]);
    }

    #[test]
    fn test_missing_renderer_rejected_before_rendering() {
        let catalog = vec![
            Section::new(SectionKind::Games),
            Section::new(SectionKind::Banner),
        ];
        let plan = Composer::new().compose(&catalog, LayoutTier::Small).unwrap();

        let mut calls = 0usize;
        let mut group = SectionGroup::new().on(SectionKind::Games, |_, _| {
            calls += 1;
        });
        let result = group.render(&plan);
        assert_eq!(result, Err(RenderError::MissingRenderer(SectionKind::Banner)));
        drop(group);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_foreign_plan_rejected() {
        let section = Section::new(SectionKind::Games);
        // Hand-built plan with a gap: cannot come from composition
        let plan = vec![
            PositionedSection {
                section: &section,
                position: 1,
            },
            PositionedSection {
                section: &section,
                position: 3,
            },
        ];

        let result = full_group().render(&plan);
        assert_eq!(
            result,
            Err(RenderError::MalformedPlan {
                index: 1,
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_empty_plan_renders_nothing() {
        let rendered = full_group().render(&[]).unwrap();
        assert!(rendered.is_empty());
    }
}
