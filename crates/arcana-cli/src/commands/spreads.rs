use comfy_table::{ContentArrangement, Table};

use arcana_core::{PositionTable, SpreadKind};

pub fn run() -> Result<(), String> {
    let positions = PositionTable::default();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Key", "Cards", "Positions"]);

    for &spread in SpreadKind::all() {
        table.add_row(vec![
            spread.to_string(),
            spread.key().to_string(),
            spread.card_count().to_string(),
            positions.labels(spread).join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
