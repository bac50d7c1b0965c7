//! Breakpoints and LayoutTier: pure width-to-tier classification.

/// Discrete responsive layout tier.
///
/// Tiers are totally ordered: `Small < Medium < Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutTier {
    /// Narrow viewports (below the medium breakpoint).
    Small,
    /// Mid-size viewports.
    Medium,
    /// Wide viewports (at or above the large breakpoint).
    Large,
}

impl LayoutTier {
    /// Classify a viewport width using the default breakpoints.
    pub fn classify(width: u16) -> Self {
        Breakpoints::default().classify(width)
    }
}

/// Width thresholds separating the layout tiers.
///
/// A width at or above `large_min` is [`LayoutTier::Large`]; otherwise a
/// width at or above `medium_min` is [`LayoutTier::Medium`]; anything
/// narrower is [`LayoutTier::Small`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Minimum width for the medium tier.
    pub medium_min: u16,
    /// Minimum width for the large tier.
    pub large_min: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium_min: 600,
            large_min: 800,
        }
    }
}

impl Breakpoints {
    /// Create breakpoints with explicit thresholds.
    pub const fn new(medium_min: u16, large_min: u16) -> Self {
        Self {
            medium_min,
            large_min,
        }
    }

    /// Classify a viewport width into a layout tier.
    ///
    /// Pure and total: every width maps to exactly one tier, with the
    /// large threshold checked before the medium one.
    pub const fn classify(&self, width: u16) -> LayoutTier {
        if width >= self.large_min {
            LayoutTier::Large
        } else if width >= self.medium_min {
            LayoutTier::Medium
        } else {
            LayoutTier::Small
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(0), LayoutTier::Small);
        assert_eq!(bp.classify(599), LayoutTier::Small);
        assert_eq!(bp.classify(600), LayoutTier::Medium);
        assert_eq!(bp.classify(799), LayoutTier::Medium);
        assert_eq!(bp.classify(800), LayoutTier::Large);
        assert_eq!(bp.classify(u16::MAX), LayoutTier::Large);
    }

    #[test]
    fn test_classify_convenience_matches_default() {
        for width in [0, 320, 599, 600, 640, 799, 800, 1920] {
            assert_eq!(
                LayoutTier::classify(width),
                Breakpoints::default().classify(width)
            );
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(LayoutTier::Large > LayoutTier::Medium);
        assert!(LayoutTier::Medium > LayoutTier::Small);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints::new(40, 120);
        assert_eq!(bp.classify(39), LayoutTier::Small);
        assert_eq!(bp.classify(40), LayoutTier::Medium);
        assert_eq!(bp.classify(120), LayoutTier::Large);
    }
}
