//! Live terminal demo: the plan re-derives as you resize the window.
//!
//! Run with: `cargo run --example overlay_demo`, resize the terminal to
//! cross the 600/800-column breakpoints, Ctrl+C to quit.

use marquee::{
    Composer, FrameTicker, Section, SectionGroup, SectionKind, TerminalViewport, TierController,
};

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

fn label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::RecentlyPlayed => "RecentlyPlayed",
        SectionKind::Games => "Games",
        SectionKind::Banner => "Banner",
        SectionKind::Jackpot => "Jackpot",
        SectionKind::Apps => "Apps",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = catalog();
    let composer = Composer::new();
    let mut group =
        SectionGroup::new().on_all(|section: &Section, position| {
            format!("  <{} position={position} />", label(section.kind))
        });

    let mut controller = TierController::new(TerminalViewport::new());
    let tier = controller.mount()?;
    print_plan(&composer, &mut group, &catalog, tier)?;

    let ticker = FrameTicker::at_fps(60);
    loop {
        if ticker.receiver().recv().is_err() {
            break;
        }
        if let Some(tier) = controller.on_frame()? {
            print_plan(&composer, &mut group, &catalog, tier)?;
        }
    }

    controller.unmount();
    Ok(())
}

fn print_plan(
    composer: &Composer,
    group: &mut SectionGroup<'_, String>,
    catalog: &[Section],
    tier: marquee::LayoutTier,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = composer.compose(catalog, tier)?;
    println!("tier changed -> {tier:?}");
    for line in group.render(&plan)? {
        println!("{line}");
    }
    println!();
    Ok(())
}
