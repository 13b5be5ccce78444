use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;

use arcana_reading::analytics::LogSink;
use arcana_reading::{ReadingConfig, RevealTiming, TarotEngine, TarotState, Tracker, UiEvent};

use crate::surface::TerminalSurface;

/// How the reveal is presented.
pub struct Presentation {
    pub animate: bool,
    pub images: bool,
    pub image_base: String,
}

pub fn run(
    spread: &str,
    seed: Option<u64>,
    catalog: Option<&Path>,
    positions: Option<&Path>,
    display: Presentation,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let positions = super::load_positions(positions)?;

    let mut config = ReadingConfig::default()
        .with_page("/cli")
        .with_image_base_url(display.image_base);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if !display.animate {
        config = config.with_timing(RevealTiming::instant());
    }

    let tracker = Tracker::new(config.page.clone()).with_sink(LogSink);
    let surface = TerminalSurface::new(display.images);
    let mut engine =
        TarotEngine::new(catalog, positions, surface, config).with_tracker(tracker);

    engine.handle(UiEvent::OpenSignal);
    engine
        .select_spread_name(spread)
        .map_err(|e| e.to_string())?;

    println!();
    engine.start().map_err(|e| e.to_string())?;

    if display.animate {
        while let Some(due) = engine.timeline().next_due() {
            let wait = due.saturating_sub(engine.now());
            thread::sleep(Duration::from_millis(wait));
            engine.advance(wait);
        }
    } else {
        engine.run_until_idle();
    }

    if engine.state() != TarotState::Interpreted {
        return Err(format!("reading stopped while {}", engine.state()));
    }
    println!();
    println!(
        "  {}",
        format!("{} cards read", engine.session().drawn_cards().len()).dimmed()
    );

    engine.handle(UiEvent::CloseClicked);
    Ok(())
}
