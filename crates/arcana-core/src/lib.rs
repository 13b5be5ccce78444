//! Core types for Arcana: cards, catalogs, spreads, and position tables.
//!
//! This crate is the read-only data side of a tarot reading. It knows
//! nothing about timing or rendering; a [`CardCatalog`] can be built in
//! code, taken from [`CardCatalog::builtin`], or deserialized from the same
//! JSON shape the site ships to the page.

/// Card and suit definitions.
pub mod card;
/// The card catalog grouped by suit.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Per-spread position labels.
pub mod positions;
/// Spread kinds and their card layouts.
pub mod spread;

/// Re-export card types.
pub use card::{Card, Suit};
/// Re-export the catalog.
pub use catalog::CardCatalog;
/// Re-export error types.
pub use error::{CatalogError, CoreResult};
/// Re-export the position table.
pub use positions::PositionTable;
/// Re-export spread types.
pub use spread::{ContainerStyle, SlotLayout, SpreadKind, SpreadLayout};
