//! The mutable state of one reading.

use arcana_core::{Card, SpreadKind};

/// The selected spread and the cards drawn for it.
///
/// `drawn` is empty whenever no spread is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingSession {
    selected: Option<SpreadKind>,
    drawn: Vec<Card>,
}

impl ReadingSession {
    /// A session with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected spread, if any.
    pub fn selected_spread(&self) -> Option<SpreadKind> {
        self.selected
    }

    /// Cards of the current reading in positional order.
    pub fn drawn_cards(&self) -> &[Card] {
        &self.drawn
    }

    /// Pick a spread. Any previous draw is discarded.
    pub fn select(&mut self, spread: SpreadKind) {
        self.selected = Some(spread);
        self.drawn.clear();
    }

    /// Replace the drawn cards. Ignored when no spread is selected.
    pub fn set_drawn(&mut self, cards: Vec<Card>) {
        if self.selected.is_some() {
            self.drawn = cards;
        }
    }

    /// Forget the spread and the cards.
    pub fn reset(&mut self) {
        self.selected = None;
        self.drawn.clear();
    }

    /// Whether nothing is selected or drawn.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none() && self.drawn.is_empty()
    }
}
