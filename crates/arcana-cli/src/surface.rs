//! A reading surface that prints to the terminal as the reveal unfolds.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use arcana_core::{ContainerStyle, SpreadKind};
use arcana_reading::{CardSlot, InterpretationEntry, ReadingSurface, Screen};

/// Prints each reveal step as it happens.
pub struct TerminalSurface {
    slots: Vec<CardSlot>,
    show_images: bool,
}

impl TerminalSurface {
    pub fn new(show_images: bool) -> Self {
        Self {
            slots: Vec::new(),
            show_images,
        }
    }
}

impl ReadingSurface for TerminalSurface {
    fn set_modal_open(&mut self, open: bool) {
        debug!(open, "modal");
    }

    fn show_screen(&mut self, screen: Screen) {
        debug!(?screen, "screen");
    }

    fn highlight_spread(&mut self, spread: Option<SpreadKind>) {
        if let Some(spread) = spread {
            println!("  {} {}", "Spread".bold(), spread);
        }
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        debug!(enabled, "start control");
    }

    fn render_card_backs(&mut self, slots: &[CardSlot], style: ContainerStyle) {
        self.slots = slots.to_vec();
        let arrangement = match style {
            ContainerStyle::Row => "in a row",
            ContainerStyle::CelticCross => "in the cross",
        };
        println!(
            "  {}",
            format!("{} cards dealt face down {arrangement}", slots.len()).dimmed()
        );
        println!();
    }

    fn flip_card(&mut self, index: usize) {
        let Some(slot) = self.slots.get(index) else {
            return;
        };
        let marker = if slot.layout.crossed {
            " (crossing)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{marker}",
            format!("[{:>2}]", index + 1).dimmed(),
            slot.name.yellow().bold()
        );
        if self.show_images {
            println!("       {}", slot.image_url.dimmed());
        }
    }

    // Names are printed on flip; there is no separate caption line.
    fn show_caption(&mut self, _index: usize) {}

    fn render_interpretation(&mut self, entries: &[InterpretationEntry]) {
        println!();
        if entries.is_empty() {
            println!("  {}", "(the deck is empty, nothing to read)".dimmed());
            return;
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Position", "Card", "Meaning"]);
        for (i, entry) in entries.iter().enumerate() {
            let position = if entry.position.is_empty() {
                "—"
            } else {
                entry.position.as_str()
            };
            table.add_row(vec![
                (i + 1).to_string(),
                position.to_string(),
                entry.name.clone(),
                entry.meaning.clone(),
            ]);
        }
        println!("{table}");
    }

    fn set_interpretation_open(&mut self, open: bool) {
        debug!(open, "interpretation panel");
    }

    fn clear_cards(&mut self) {
        self.slots.clear();
    }

    fn clear_interpretation(&mut self) {}
}
