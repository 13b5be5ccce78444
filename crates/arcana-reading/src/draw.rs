//! Random card draws.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use arcana_core::{Card, CardCatalog};

/// Draw `count` distinct cards from the whole catalog.
///
/// The flattened catalog is shuffled with Fisher-Yates and the first `count`
/// cards are kept; their order is the positional order of the reading. A
/// catalog smaller than `count` yields every card it has, and an empty
/// catalog yields an empty draw.
pub fn draw_cards(catalog: &CardCatalog, count: usize, rng: &mut StdRng) -> Vec<Card> {
    let mut deck = catalog.flatten().to_vec();
    deck.shuffle(rng);
    deck.truncate(count);
    deck
}
