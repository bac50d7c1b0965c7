//! Print the composed plan for the reference catalog at every tier.
//!
//! Run with: `cargo run --example compose_plan`

use marquee::{Composer, LayoutTier, Section, SectionGroup, SectionKind};

fn catalog() -> Vec<Section> {
    vec![
        Section::new(SectionKind::RecentlyPlayed),
        Section::new(SectionKind::Games),
        Section::new(SectionKind::Games),
        Section::new(SectionKind::Games),
        Section::new(SectionKind::Games),
        Section::new(SectionKind::Games),
        Section::new(SectionKind::Banner),
        Section::new(SectionKind::Jackpot),
        Section::new(SectionKind::Jackpot),
        Section::new(SectionKind::Apps),
    ]
}

fn placeholder(label: &str) -> impl FnMut(&Section, u16) -> String + '_ {
    move |_, position| format!("  <{label} position={position} />")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = catalog();
    let composer = Composer::new();

    let mut group = SectionGroup::new()
        .on(SectionKind::RecentlyPlayed, placeholder("RecentlyPlayed"))
        .on(SectionKind::Games, placeholder("Games"))
        .on(SectionKind::Banner, placeholder("Banner"))
        .on(SectionKind::Jackpot, placeholder("Jackpot"))
        .on(SectionKind::Apps, placeholder("Apps"));

    for tier in [LayoutTier::Large, LayoutTier::Medium, LayoutTier::Small] {
        let plan = composer.compose(&catalog, tier)?;
        println!("{tier:?}:");
        for line in group.render(&plan)? {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
