use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use arcana_core::Suit;

pub fn run(suit: Option<&str>, catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let filter = match suit {
        Some(s) => Some(Suit::parse(s).ok_or_else(|| {
            format!("unknown suit '{s}', use: major, cups, wands, swords, pentacles")
        })?),
        None => None,
    };

    let cards: Vec<_> = catalog
        .flatten()
        .iter()
        .filter(|c| filter.is_none_or(|s| c.suit == s))
        .collect();

    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Suit", "Meaning"]);
    for card in &cards {
        table.add_row(vec![&card.name, &card.suit.to_string(), &card.meaning]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());
    Ok(())
}
