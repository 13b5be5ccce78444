//! The card catalog.
//!
//! Cards are grouped into five suits. The JSON form mirrors what the site
//! exposes to the page:
//!
//! ```text
//! {
//!     "major": [{ "name": "The Fool", "image": "major/00.jpg", "meaning": "..." }],
//!     "cups": [...],
//!     "wands": [...],
//!     "swords": [...],
//!     "pentacles": [...]
//! }
//! ```
//!
//! A missing suit array is read as empty. The suit of each card comes from
//! the array it appears in.

use std::collections::HashSet;

use serde::Deserialize;

use crate::card::{Card, Suit};
use crate::error::{CatalogError, CoreResult};

/// The 22 major arcana with their meanings.
pub const MAJOR_ARCANA: &[(&str, &str)] = &[
    ("The Fool", "New beginnings, spontaneity, a leap of faith"),
    ("The Magician", "Willpower, skill, turning intent into action"),
    ("The High Priestess", "Intuition, hidden knowledge, the inner voice"),
    ("The Empress", "Abundance, nurture, creative fertility"),
    ("The Emperor", "Structure, authority, firm foundations"),
    ("The Hierophant", "Tradition, teaching, shared belief"),
    ("The Lovers", "Union, choice, alignment of values"),
    ("The Chariot", "Determination, control, victory through focus"),
    ("Strength", "Courage, patience, gentle mastery"),
    ("The Hermit", "Solitude, reflection, searching within"),
    ("Wheel of Fortune", "Cycles, change, turning points"),
    ("Justice", "Fairness, truth, cause and effect"),
    ("The Hanged Man", "Surrender, pause, a new perspective"),
    ("Death", "Endings, transformation, clearing the way"),
    ("Temperance", "Balance, moderation, patient blending"),
    ("The Devil", "Attachment, temptation, self-imposed chains"),
    ("The Tower", "Sudden upheaval, revelation, collapse of the false"),
    ("The Star", "Hope, renewal, quiet faith"),
    ("The Moon", "Illusion, dreams, uncertainty"),
    ("The Sun", "Joy, clarity, vitality"),
    ("Judgement", "Awakening, reckoning, an inner calling"),
    ("The World", "Completion, wholeness, arrival"),
];

/// Minor arcana ranks with a keyword each.
pub const MINOR_RANKS: &[(&str, &str)] = &[
    ("Ace", "A seed of new potential"),
    ("Two", "Balance and partnership"),
    ("Three", "Growth and collaboration"),
    ("Four", "Stability that may turn to stagnation"),
    ("Five", "Loss, friction, and challenge"),
    ("Six", "Harmony restored and generosity"),
    ("Seven", "Assessment and perseverance"),
    ("Eight", "Movement and dedicated effort"),
    ("Nine", "Near fulfilment"),
    ("Ten", "Completion and its weight"),
    ("Page", "Curiosity and a message"),
    ("Knight", "Pursuit and momentum"),
    ("Queen", "Mature inner mastery"),
    ("King", "Outer command and responsibility"),
];

fn suit_theme(suit: Suit) -> &'static str {
    match suit {
        Suit::Major => "the greater journey",
        Suit::Cups => "feeling and relationships",
        Suit::Wands => "passion and ambition",
        Suit::Swords => "thought and conflict",
        Suit::Pentacles => "work and material life",
    }
}

#[derive(Deserialize)]
struct RawCard {
    name: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    meaning: String,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    major: Vec<RawCard>,
    #[serde(default)]
    cups: Vec<RawCard>,
    #[serde(default)]
    wands: Vec<RawCard>,
    #[serde(default)]
    swords: Vec<RawCard>,
    #[serde(default)]
    pentacles: Vec<RawCard>,
}

/// A read-only collection of cards grouped by suit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of cards. Cards are kept grouped in suit
    /// order; relative order within a suit is preserved.
    pub fn from_cards(mut cards: Vec<Card>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name.as_str()) {
                return Err(CatalogError::DuplicateName(card.name.clone()));
            }
        }
        cards.sort_by_key(|c| c.suit);
        Ok(Self { cards })
    }

    /// Parse a catalog from its JSON form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let groups = [
            (Suit::Major, raw.major),
            (Suit::Cups, raw.cups),
            (Suit::Wands, raw.wands),
            (Suit::Swords, raw.swords),
            (Suit::Pentacles, raw.pentacles),
        ];
        let cards = groups
            .into_iter()
            .flat_map(|(suit, entries)| {
                entries
                    .into_iter()
                    .map(move |e| Card::new(e.name, e.image, e.meaning, suit))
            })
            .collect();
        Self::from_cards(cards)
    }

    /// The full 78-card deck with short meanings.
    pub fn builtin() -> Self {
        let mut cards = Vec::with_capacity(78);
        for (i, (name, meaning)) in MAJOR_ARCANA.iter().enumerate() {
            cards.push(Card::new(
                *name,
                format!("major/{i:02}.jpg"),
                *meaning,
                Suit::Major,
            ));
        }
        for &suit in &Suit::all()[1..] {
            for (i, (rank, keyword)) in MINOR_RANKS.iter().enumerate() {
                cards.push(Card::new(
                    format!("{rank} of {suit}"),
                    format!("{}/{:02}.jpg", suit.key(), i + 1),
                    format!("{keyword} in {}", suit_theme(suit)),
                    suit,
                ));
            }
        }
        Self { cards }
    }

    /// All cards, flattened across suits in catalog order.
    pub fn flatten(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of a single suit, in catalog order.
    pub fn suit(&self, suit: Suit) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.suit == suit)
    }

    /// Look up a card by name.
    pub fn find(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
