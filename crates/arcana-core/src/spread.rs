//! Spread kinds and their card layouts.

use serde::{Deserialize, Serialize};

/// Delay between consecutive cards being dealt onto the table.
pub const DEAL_STAGGER_MS: u64 = 110;

/// Card count used for spread names that are not recognised.
pub const FALLBACK_CARD_COUNT: usize = 10;

/// A named tarot layout with a fixed card count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadKind {
    /// One card: the card of the moment.
    Single,
    /// Three cards: past, present, future.
    Three,
    /// Ten cards in the Celtic Cross.
    Celtic,
}

impl SpreadKind {
    /// All spreads, smallest first.
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::Three, Self::Celtic]
    }

    /// Parse a spread from its key. Unknown names are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "one" | "1" => Some(Self::Single),
            "three" | "3" => Some(Self::Three),
            "celtic" | "celtic cross" | "celtic-cross" | "10" => Some(Self::Celtic),
            _ => None,
        }
    }

    /// Card count for a raw spread name, keeping the page's historical
    /// behaviour of treating any unknown name as the ten-card spread.
    pub fn cards_for_name(name: &str) -> usize {
        Self::parse(name).map_or(FALLBACK_CARD_COUNT, Self::card_count)
    }

    /// Number of cards this spread draws.
    pub fn card_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Three => 3,
            Self::Celtic => 10,
        }
    }

    /// The key this spread uses in data files and analytics.
    pub fn key(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Three => "three",
            Self::Celtic => "celtic",
        }
    }

    /// Table layout for `count` dealt cards of this spread.
    pub fn layout(self, count: usize) -> SpreadLayout {
        let celtic = self == Self::Celtic;
        let slots = (0..count)
            .map(|index| SlotLayout {
                position: if celtic { u8::try_from(index + 1).ok() } else { None },
                crossed: celtic && index == 1,
                deal_delay_ms: index as u64 * DEAL_STAGGER_MS,
            })
            .collect();
        SpreadLayout {
            style: if celtic {
                ContainerStyle::CelticCross
            } else {
                ContainerStyle::Row
            },
            slots,
        }
    }
}

impl std::fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single Card"),
            Self::Three => write!(f, "Three Cards"),
            Self::Celtic => write!(f, "Celtic Cross"),
        }
    }
}

/// How the card container arranges its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStyle {
    /// A simple left-to-right row.
    Row,
    /// The cross-and-staff arrangement.
    CelticCross,
}

impl ContainerStyle {
    /// CSS class applied to the cards container.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Row => "",
            Self::CelticCross => "cardsCelticCross",
        }
    }
}

/// Placement of one card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    /// 1-based position in the cross (Celtic Cross only).
    pub position: Option<u8>,
    /// Card lies across the one beneath it (the second Celtic Cross card).
    pub crossed: bool,
    /// Delay before the slot's deal animation starts.
    pub deal_delay_ms: u64,
}

/// Container style plus one layout per dealt card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadLayout {
    /// Container arrangement.
    pub style: ContainerStyle,
    /// Per-slot placement, in draw order.
    pub slots: Vec<SlotLayout>,
}
