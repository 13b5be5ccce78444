//! The rendering side of a reading.
//!
//! The engine never touches a display directly. It pushes changes through
//! [`ReadingSurface`], checking [`ReadingSurface::has_anchor`] first so that a
//! page missing part of the modal degrades to a partial render instead of
//! failing.

use std::collections::HashSet;

use arcana_core::{ContainerStyle, SlotLayout, SpreadKind};

/// A part of the page the engine renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The modal itself. Without it open and close do nothing.
    Modal,
    /// The button that starts a reading.
    StartControl,
    /// Container for the card slots.
    CardsDisplay,
    /// The interpretation panel (its open flag).
    Interpretation,
    /// Body of the interpretation panel.
    InterpretationContent,
}

/// Which half of the modal is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Spread picker.
    Selection,
    /// Cards and interpretation.
    Reading,
}

/// A dealt card as handed to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    /// Card name, used as caption and image alt text.
    pub name: String,
    /// Full image URL of the card front.
    pub image_url: String,
    /// Placement in the spread.
    pub layout: SlotLayout,
}

/// One row of the interpretation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretationEntry {
    /// Card name.
    pub name: String,
    /// Position label; empty when the position table has none.
    pub position: String,
    /// The card's meaning.
    pub meaning: String,
}

/// Everything the engine needs from a display.
pub trait ReadingSurface {
    /// Whether the given part of the page exists.
    fn has_anchor(&self, anchor: Anchor) -> bool {
        let _ = anchor;
        true
    }

    /// Show or hide the modal.
    fn set_modal_open(&mut self, open: bool);

    /// Switch between the spread picker and the reading view.
    fn show_screen(&mut self, screen: Screen);

    /// Mark one spread option as active, or none.
    fn highlight_spread(&mut self, spread: Option<SpreadKind>);

    /// Enable or disable the start control.
    fn set_start_enabled(&mut self, enabled: bool);

    /// Replace the card container with face-down slots.
    fn render_card_backs(&mut self, slots: &[CardSlot], style: ContainerStyle);

    /// Turn one card face up.
    fn flip_card(&mut self, index: usize);

    /// Fade in the caption under one card.
    fn show_caption(&mut self, index: usize);

    /// Replace the interpretation body.
    fn render_interpretation(&mut self, entries: &[InterpretationEntry]);

    /// Set the interpretation panel's open flag.
    fn set_interpretation_open(&mut self, open: bool);

    /// Empty the card container and reset its style.
    fn clear_cards(&mut self);

    /// Empty the interpretation body.
    fn clear_interpretation(&mut self);
}

/// A card slot as currently displayed by a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSlot {
    /// The slot as rendered.
    pub slot: CardSlot,
    /// Whether the card has been flipped.
    pub face_up: bool,
    /// Whether its caption has faded in.
    pub caption_visible: bool,
}

/// In-memory display model for tests and headless drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    /// Modal visibility.
    pub modal_open: bool,
    /// Visible half of the modal.
    pub screen: Screen,
    /// Highlighted spread option.
    pub highlighted: Option<SpreadKind>,
    /// Start control state.
    pub start_enabled: bool,
    /// Container style, `None` when cleared.
    pub container: Option<ContainerStyle>,
    /// Card slots in draw order.
    pub slots: Vec<RenderedSlot>,
    /// Interpretation body.
    pub interpretation: Vec<InterpretationEntry>,
    /// Interpretation panel open flag.
    pub interpretation_open: bool,
    missing: HashSet<Anchor>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            modal_open: false,
            screen: Screen::Selection,
            highlighted: None,
            start_enabled: false,
            container: None,
            slots: Vec::new(),
            interpretation: Vec::new(),
            interpretation_open: false,
            missing: HashSet::new(),
        }
    }
}

impl MemorySurface {
    /// A surface with every anchor present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove an anchor, as if the page lacked that element.
    pub fn without(mut self, anchor: Anchor) -> Self {
        self.missing.insert(anchor);
        self
    }

    /// Number of cards currently face up.
    pub fn face_up_count(&self) -> usize {
        self.slots.iter().filter(|s| s.face_up).count()
    }

    /// Names of the dealt cards in slot order.
    pub fn card_names(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.slot.name.as_str()).collect()
    }
}

impl ReadingSurface for MemorySurface {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        !self.missing.contains(&anchor)
    }

    fn set_modal_open(&mut self, open: bool) {
        self.modal_open = open;
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn highlight_spread(&mut self, spread: Option<SpreadKind>) {
        self.highlighted = spread;
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
    }

    fn render_card_backs(&mut self, slots: &[CardSlot], style: ContainerStyle) {
        self.container = Some(style);
        self.slots = slots
            .iter()
            .map(|slot| RenderedSlot {
                slot: slot.clone(),
                face_up: false,
                caption_visible: false,
            })
            .collect();
    }

    fn flip_card(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.face_up = true;
        }
    }

    fn show_caption(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.caption_visible = true;
        }
    }

    fn render_interpretation(&mut self, entries: &[InterpretationEntry]) {
        self.interpretation = entries.to_vec();
    }

    fn set_interpretation_open(&mut self, open: bool) {
        self.interpretation_open = open;
    }

    fn clear_cards(&mut self) {
        self.slots.clear();
        self.container = None;
    }

    fn clear_interpretation(&mut self) {
        self.interpretation.clear();
    }
}
