//! Card and suit definitions.

use serde::{Deserialize, Serialize};

/// One of the five groups a tarot deck is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// The 22 trump cards, The Fool through The World.
    Major,
    /// Emotions, relationships, intuition.
    Cups,
    /// Will, drive, creative fire.
    Wands,
    /// Thought, conflict, truth.
    Swords,
    /// Work, money, the body.
    Pentacles,
}

impl Suit {
    /// All suits in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Major,
            Self::Cups,
            Self::Wands,
            Self::Swords,
            Self::Pentacles,
        ]
    }

    /// Parse a suit from a user-supplied string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "majors" | "major arcana" | "trumps" => Some(Self::Major),
            "cups" | "cup" => Some(Self::Cups),
            "wands" | "wand" => Some(Self::Wands),
            "swords" | "sword" => Some(Self::Swords),
            "pentacles" | "pentacle" | "coins" => Some(Self::Pentacles),
            _ => None,
        }
    }

    /// The key this suit uses in catalog JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Cups => "cups",
            Self::Wands => "wands",
            Self::Swords => "swords",
            Self::Pentacles => "pentacles",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Cups => write!(f, "Cups"),
            Self::Wands => write!(f, "Wands"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Image path relative to the card image base URL.
    pub image: String,
    /// Meaning text shown in the interpretation.
    pub meaning: String,
    /// The suit this card belongs to.
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        meaning: impl Into<String>,
        suit: Suit,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            meaning: meaning.into(),
            suit,
        }
    }

    /// Full image URL given the site's base URL.
    pub fn image_url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_suits() {
        assert_eq!(Suit::parse("Cups"), Some(Suit::Cups));
        assert_eq!(Suit::parse(" coins "), Some(Suit::Pentacles));
        assert_eq!(Suit::parse("major arcana"), Some(Suit::Major));
        assert_eq!(Suit::parse("hearts"), None);
    }

    #[test]
    fn suit_keys_match_serde() {
        for suit in Suit::all() {
            let json = serde_json::to_string(suit).unwrap();
            assert_eq!(json, format!("\"{}\"", suit.key()));
        }
    }

    #[test]
    fn image_url_joins_base() {
        let card = Card::new("The Fool", "major/00.jpg", "Beginnings", Suit::Major);
        assert_eq!(card.image_url("/img/"), "/img/major/00.jpg");
        assert_eq!(card.image_url(""), "major/00.jpg");
    }
}
