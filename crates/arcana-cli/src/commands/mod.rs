pub mod cards;
pub mod oracle;
pub mod read;
pub mod spreads;

use std::fs;
use std::path::Path;

use arcana_core::{CardCatalog, PositionTable};

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

/// Load a catalog file, or the built-in deck when none is given.
fn load_catalog(path: Option<&Path>) -> Result<CardCatalog, String> {
    match path {
        Some(path) => CardCatalog::from_json(&read_file(path)?)
            .map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(CardCatalog::builtin()),
    }
}

/// Load a position table file, or the built-in labels when none is given.
fn load_positions(path: Option<&Path>) -> Result<PositionTable, String> {
    match path {
        Some(path) => PositionTable::from_json(&read_file(path)?)
            .map_err(|e| format!("{}: {e}", path.display())),
        None => Ok(PositionTable::default()),
    }
}
