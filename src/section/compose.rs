//! Section Composer: pure derivation of the positioned render plan.
//!
//! Given a catalog and the active tier, composition partitions the catalog
//! by kind, decides how many games sections sit above the banner for the
//! tier, and emits the final ordered plan with 1-based contiguous
//! positions. Identical inputs always yield an identical plan.

use super::types::{Section, SectionKind};
use crate::tier::LayoutTier;
use std::collections::HashMap;
use thiserror::Error;

/// Composition failure: a programmer or integration mistake, never a
/// normal runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// The slot table has no entry for the requested tier.
    ///
    /// Guessing a default slot count would silently corrupt the layout for
    /// every section, so the lookup fails loudly instead.
    #[error("no slots-above-banner rule configured for layout tier {0:?}")]
    MissingSlotRule(LayoutTier),
}

/// Per-tier counts of games sections placed above the banner.
///
/// The default table covers every tier (`Large: 2`, `Medium: 1`,
/// `Small: 0`). A custom table may be partial; composing for an uncovered
/// tier is a fatal [`ComposeError::MissingSlotRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    entries: HashMap<LayoutTier, u16>,
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::empty()
            .set(LayoutTier::Large, 2)
            .set(LayoutTier::Medium, 1)
            .set(LayoutTier::Small, 0)
    }
}

impl SlotTable {
    /// Create a table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set the slot count for a tier.
    #[must_use]
    pub fn set(mut self, tier: LayoutTier, slots: u16) -> Self {
        self.entries.insert(tier, slots);
        self
    }

    /// Look up the slot count for a tier.
    ///
    /// # Errors
    ///
    /// [`ComposeError::MissingSlotRule`] when the tier has no entry.
    pub fn slots_above_banner(&self, tier: LayoutTier) -> Result<u16, ComposeError> {
        self.entries
            .get(&tier)
            .copied()
            .ok_or(ComposeError::MissingSlotRule(tier))
    }
}

/// One entry of the composed plan: a catalog section with its assigned
/// 1-based render position.
///
/// Positions are ephemeral: recomputed on every composition pass, never
/// persisted or reused across passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedSection<'a> {
    /// The catalog entry.
    pub section: &'a Section,
    /// 1-based position within the final render sequence.
    pub position: u16,
}

/// Pure composition engine.
///
/// Holds no mutable state; safe to share across call sites.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    slots: SlotTable,
}

impl Composer {
    /// Create a composer with the default slot table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with a custom slot table.
    pub const fn with_slots(slots: SlotTable) -> Self {
        Self { slots }
    }

    /// Derive the ordered, positioned plan for a catalog and tier.
    ///
    /// The catalog order is preserved within each kind. For singular kinds
    /// (recently-played, banner, apps) the first occurrence wins and
    /// extras are ignored. A hidden recently-played section is omitted and
    /// does not consume an above-banner slot.
    ///
    /// # Errors
    ///
    /// [`ComposeError::MissingSlotRule`] when the slot table does not
    /// cover `tier`; surfaced before any position is assigned.
    pub fn compose<'a>(
        &self,
        catalog: &'a [Section],
        tier: LayoutTier,
    ) -> Result<Vec<PositionedSection<'a>>, ComposeError> {
        let slots = i32::from(self.slots.slots_above_banner(tier)?);

        let recently_played = first_of(catalog, SectionKind::RecentlyPlayed);
        let games: Vec<&Section> = all_of(catalog, SectionKind::Games);
        let banner = first_of(catalog, SectionKind::Banner);
        let jackpots: Vec<&Section> = all_of(catalog, SectionKind::Jackpot);
        let apps = first_of(catalog, SectionKind::Apps);

        // A hidden recently-played section is treated as absent everywhere:
        // not emitted, and not charged against the tier's slot count.
        let recently_played = recently_played.filter(|section| !section.is_hidden());

        let mut above_banner = slots;
        if recently_played.is_some() {
            above_banner -= 1;
        }

        // One more games section goes above the banner than the adjusted
        // slot count. A negative count clamps to zero above; it never pulls
        // sections below the banner.
        let cut = usize::try_from(above_banner + 1)
            .unwrap_or(0)
            .min(games.len());

        let mut emitted: Vec<&Section> = Vec::with_capacity(catalog.len());
        emitted.extend(recently_played);
        emitted.extend(&games[..cut]);
        emitted.extend(banner);
        emitted.extend(&jackpots);
        emitted.extend(&games[cut..]);
        emitted.extend(apps);

        Ok(emitted
            .into_iter()
            .zip(1u16..)
            .map(|(section, position)| PositionedSection { section, position })
            .collect())
    }
}

/// First catalog entry of the given kind, if any.
fn first_of(catalog: &[Section], kind: SectionKind) -> Option<&Section> {
    catalog.iter().find(|section| section.kind == kind)
}

/// All catalog entries of the given kind, order preserved.
fn all_of(catalog: &[Section], kind: SectionKind) -> Vec<&Section> {
    catalog
        .iter()
        .filter(|section| section.kind == kind)
        .collect()
}
