//! Section catalog entries.

use bitflags::bitflags;

/// The kind of content a section carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The user's recently played items. At most one per catalog.
    RecentlyPlayed,
    /// A tile grid of games. Any number may coexist.
    Games,
    /// A promotional banner. At most one per catalog.
    Banner,
    /// A jackpot widget. Any number may coexist.
    Jackpot,
    /// An app tile strip. At most one per catalog.
    Apps,
}

bitflags! {
    /// Per-section flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SectionFlags: u8 {
        /// The section is suppressed from composition entirely.
        const HIDDEN = 0b0000_0001;
    }
}

impl std::fmt::Debug for SectionFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A catalog entry: a typed, optionally hidden content block.
///
/// The catalog is an ordered sequence of these, supplied by the embedding
/// application and treated as read-only for the duration of one
/// composition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    /// Content kind.
    pub kind: SectionKind,
    /// Visibility and other flags.
    pub flags: SectionFlags,
}

impl Section {
    /// Create a visible section of the given kind.
    pub const fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            flags: SectionFlags::empty(),
        }
    }

    /// Create a hidden section of the given kind.
    pub const fn hidden(kind: SectionKind) -> Self {
        Self {
            kind,
            flags: SectionFlags::HIDDEN,
        }
    }

    /// Whether the section is flagged hidden.
    pub const fn is_hidden(&self) -> bool {
        self.flags.contains(SectionFlags::HIDDEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults_to_visible() {
        let section = Section::new(SectionKind::Games);
        assert!(!section.is_hidden());
    }

    #[test]
    fn test_hidden_constructor_sets_flag() {
        let section = Section::hidden(SectionKind::RecentlyPlayed);
        assert!(section.is_hidden());
        assert_eq!(section.kind, SectionKind::RecentlyPlayed);
    }
}
