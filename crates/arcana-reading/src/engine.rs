//! The tarot engine.
//!
//! `TarotEngine` owns the reading session and moves it through
//! [`TarotState`]: spread selection, a draw, a timed reveal, and the
//! interpretation. The reveal runs on a [`Timeline`]; every start, restart,
//! new reading and close bumps the reading generation, and steps armed by an
//! older generation are dropped when they come due.

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use arcana_core::{CardCatalog, PositionTable, SpreadKind};

use crate::analytics::{EventName, Tracker};
use crate::config::ReadingConfig;
use crate::draw::draw_cards;
use crate::error::{ReadingError, ReadingResult};
use crate::session::ReadingSession;
use crate::state::{Action, TarotState};
use crate::surface::{Anchor, CardSlot, InterpretationEntry, ReadingSurface, Screen};
use crate::timeline::{RevealStep, Scheduled, Timeline};

/// A key press delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Escape closes the modal while it is open.
    Escape,
    /// Enter.
    Enter,
    /// Any other printable key.
    Char(char),
}

/// A page event the engine listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The menu raised the "open tarot" signal.
    OpenSignal,
    /// The close button was clicked.
    CloseClicked,
    /// The backdrop around the modal was clicked.
    BackdropClicked,
    /// A key was pressed anywhere on the page.
    KeyPressed(Key),
    /// A spread option was clicked.
    SpreadClicked(SpreadKind),
    /// The start button was clicked.
    StartClicked,
    /// The restart button was clicked.
    RestartClicked,
    /// The new-reading button was clicked.
    NewReadingClicked,
}

/// Drives one tarot modal.
pub struct TarotEngine<S: ReadingSurface> {
    catalog: CardCatalog,
    positions: PositionTable,
    config: ReadingConfig,
    session: ReadingSession,
    state: TarotState,
    generation: u64,
    timeline: Timeline,
    surface: S,
    tracker: Tracker,
    rng: StdRng,
}

impl<S: ReadingSurface> TarotEngine<S> {
    /// Create a closed engine over a catalog, position table and surface.
    pub fn new(
        catalog: CardCatalog,
        positions: PositionTable,
        surface: S,
        config: ReadingConfig,
    ) -> Self {
        let rng = config.rng();
        let tracker = Tracker::new(config.page.clone());
        Self {
            catalog,
            positions,
            config,
            session: ReadingSession::new(),
            state: TarotState::Closed,
            generation: 0,
            timeline: Timeline::new(),
            surface,
            tracker,
            rng,
        }
    }

    /// Replace the analytics tracker.
    pub fn with_tracker(mut self, tracker: Tracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Current state.
    pub fn state(&self) -> TarotState {
        self.state
    }

    /// The reading session.
    pub fn session(&self) -> &ReadingSession {
        &self.session
    }

    /// Current reading generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the rendering surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The reveal timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    /// The catalog cards are drawn from.
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Engine configuration.
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Show the modal on the spread picker.
    ///
    /// Does nothing if the page has no modal.
    pub fn open(&mut self) -> ReadingResult<()> {
        let next = self.accept(Action::Open)?;
        if !self.surface.has_anchor(Anchor::Modal) {
            debug!("tarot modal missing, open ignored");
            return Ok(());
        }

        self.surface.set_modal_open(true);
        self.state = next;
        self.tracker.track(EventName::TarotOpen, None);
        Ok(())
    }

    /// Hide the modal and forget the reading.
    ///
    /// Leaves the picker visible underneath so the next open starts fresh.
    /// Closing an already closed modal does nothing.
    pub fn close(&mut self) -> ReadingResult<()> {
        if self.state == TarotState::Closed {
            return Ok(());
        }
        let next = self.accept(Action::Close)?;
        if !self.surface.has_anchor(Anchor::Modal) {
            debug!("tarot modal missing, close ignored");
            return Ok(());
        }

        self.surface.set_modal_open(false);
        self.bump_generation();
        self.reset_reading();
        self.surface.show_screen(Screen::Selection);
        self.clear_reading_ui();
        self.state = next;
        self.tracker.track(EventName::TarotClose, None);
        Ok(())
    }

    /// Pick a spread and enable the start control.
    pub fn select_spread(&mut self, spread: SpreadKind) -> ReadingResult<()> {
        let next = self.accept(Action::SelectSpread)?;

        self.session.select(spread);
        self.surface.highlight_spread(Some(spread));
        if self.surface.has_anchor(Anchor::StartControl) {
            self.surface.set_start_enabled(true);
        }
        self.state = next;
        debug!(spread = spread.key(), "spread selected");
        self.tracker.track(EventName::TarotSpreadSelect, Some(spread));
        Ok(())
    }

    /// Pick a spread by its key. Unknown keys are rejected rather than
    /// mapped to the ten-card spread.
    pub fn select_spread_name(&mut self, name: &str) -> ReadingResult<()> {
        let spread =
            SpreadKind::parse(name).ok_or_else(|| ReadingError::UnknownSpread(name.to_string()))?;
        self.select_spread(spread)
    }

    /// Draw the selected spread and start the reveal.
    pub fn start(&mut self) -> ReadingResult<()> {
        let next = self.accept(Action::Start)?;
        let spread = self
            .session
            .selected_spread()
            .ok_or(ReadingError::NoSpreadSelected)?;

        self.surface.show_screen(Screen::Reading);
        self.begin_reading(spread);
        self.state = next;
        self.tracker.track(EventName::TarotReadingStart, Some(spread));
        Ok(())
    }

    /// Redraw the same spread with new cards and rerun the reveal.
    pub fn restart(&mut self) -> ReadingResult<()> {
        let next = self.accept(Action::Restart)?;
        let spread = self
            .session
            .selected_spread()
            .ok_or(ReadingError::NoSpreadSelected)?;

        self.begin_reading(spread);
        self.state = next;
        self.tracker.track(EventName::TarotRestartReading, Some(spread));
        Ok(())
    }

    /// Drop the reading and return to the spread picker.
    pub fn new_reading(&mut self) -> ReadingResult<()> {
        let next = self.accept(Action::NewReading)?;

        self.bump_generation();
        self.reset_reading();
        self.clear_reading_ui();
        self.surface.show_screen(Screen::Selection);
        self.state = next;
        self.tracker.track(EventName::TarotNewReading, None);
        Ok(())
    }

    /// Remove rendered cards and the interpretation, and close the
    /// interpretation panel. Leaves the session alone. Safe to call in any
    /// state, any number of times.
    pub fn clear_reading_ui(&mut self) {
        if self.surface.has_anchor(Anchor::Interpretation) {
            self.surface.set_interpretation_open(false);
        }
        if self.surface.has_anchor(Anchor::InterpretationContent) {
            self.surface.clear_interpretation();
        }
        if self.surface.has_anchor(Anchor::CardsDisplay) {
            self.surface.clear_cards();
        }
    }

    /// Forget the spread and the drawn cards, disable the start control and
    /// clear the spread highlight.
    pub fn reset_reading(&mut self) {
        self.session.reset();
        if self.surface.has_anchor(Anchor::StartControl) {
            self.surface.set_start_enabled(false);
        }
        if self.surface.has_anchor(Anchor::Interpretation) {
            self.surface.set_interpretation_open(false);
        }
        self.surface.highlight_spread(None);
    }

    /// Dispatch a page event. Rejected actions are logged and dropped.
    pub fn handle(&mut self, event: UiEvent) {
        let result = match event {
            UiEvent::OpenSignal => self.open(),
            UiEvent::CloseClicked | UiEvent::BackdropClicked => self.close(),
            UiEvent::KeyPressed(Key::Escape) if self.state != TarotState::Closed => self.close(),
            UiEvent::KeyPressed(_) => Ok(()),
            UiEvent::SpreadClicked(spread) => self.select_spread(spread),
            UiEvent::StartClicked => self.start(),
            UiEvent::RestartClicked => self.restart(),
            UiEvent::NewReadingClicked => self.new_reading(),
        };
        if let Err(e) = result {
            debug!(?event, error = %e, "ui event ignored");
        }
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    /// Let `ms` milliseconds of virtual time pass, firing every step that
    /// comes due, in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.timeline.now().saturating_add(ms);
        while let Some(entry) = self.timeline.pop_due(target) {
            self.fire(entry);
        }
        self.timeline.advance_to(target);
    }

    /// Fire pending steps until the timeline is empty. Returns the virtual
    /// time reached.
    pub fn run_until_idle(&mut self) -> u64 {
        while let Some(due) = self.timeline.next_due() {
            let now = self.timeline.now();
            self.advance(due.saturating_sub(now));
        }
        self.timeline.now()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn accept(&self, action: Action) -> ReadingResult<TarotState> {
        self.state
            .transition(action)
            .ok_or(ReadingError::InvalidTransition {
                from: self.state,
                action,
            })
    }

    fn bump_generation(&mut self) {
        self.generation += 1;
    }

    fn begin_reading(&mut self, spread: SpreadKind) {
        self.bump_generation();

        let cards = draw_cards(&self.catalog, spread.card_count(), &mut self.rng);
        if cards.is_empty() {
            warn!(spread = spread.key(), "card catalog is empty, reading will be blank");
        } else if cards.len() < spread.card_count() {
            warn!(
                spread = spread.key(),
                drawn = cards.len(),
                "card catalog smaller than spread"
            );
        }
        self.session.set_drawn(cards);

        self.clear_reading_ui();
        self.render_card_backs(spread);
        self.timeline.schedule(
            self.config.timing.deal_delay_ms,
            self.generation,
            RevealStep::FlipSequence,
        );
        info!(
            spread = spread.key(),
            generation = self.generation,
            cards = self.session.drawn_cards().len(),
            "reading dealt"
        );
    }

    fn render_card_backs(&mut self, spread: SpreadKind) {
        if !self.surface.has_anchor(Anchor::CardsDisplay) {
            return;
        }
        let cards = self.session.drawn_cards();
        let layout = spread.layout(cards.len());
        let slots: Vec<CardSlot> = cards
            .iter()
            .zip(layout.slots)
            .map(|(card, slot)| CardSlot {
                name: card.name.clone(),
                image_url: card.image_url(&self.config.image_base_url),
                layout: slot,
            })
            .collect();
        self.surface.render_card_backs(&slots, layout.style);
    }

    fn render_interpretation(&mut self) {
        if !self.surface.has_anchor(Anchor::InterpretationContent) {
            return;
        }
        let Some(spread) = self.session.selected_spread() else {
            return;
        };
        let entries: Vec<InterpretationEntry> = self
            .session
            .drawn_cards()
            .iter()
            .enumerate()
            .map(|(i, card)| InterpretationEntry {
                name: card.name.clone(),
                position: self.positions.label(spread, i).to_string(),
                meaning: card.meaning.clone(),
            })
            .collect();
        self.surface.render_interpretation(&entries);
        if self.surface.has_anchor(Anchor::Interpretation) {
            self.surface.set_interpretation_open(true);
        }
    }

    fn fire(&mut self, entry: Scheduled) {
        if entry.generation != self.generation || !self.state.is_reading() {
            debug!(
                step = ?entry.step,
                armed = entry.generation,
                current = self.generation,
                "stale reveal step dropped"
            );
            return;
        }

        let timing = self.config.timing;
        let count = self.session.drawn_cards().len();
        match entry.step {
            RevealStep::FlipSequence => {
                if count == 0 {
                    self.timeline
                        .schedule(timing.settle_ms, self.generation, RevealStep::Interpret);
                }
                for i in 0..count {
                    self.timeline.schedule(
                        i as u64 * timing.flip_stride_ms,
                        self.generation,
                        RevealStep::FlipCard(i),
                    );
                }
            }
            RevealStep::FlipCard(i) => {
                if self.surface.has_anchor(Anchor::CardsDisplay) {
                    self.surface.flip_card(i);
                }
                self.timeline.schedule(
                    timing.caption_delay_ms,
                    self.generation,
                    RevealStep::ShowCaption(i),
                );
                if i + 1 == count {
                    self.timeline
                        .schedule(timing.settle_ms, self.generation, RevealStep::Interpret);
                }
            }
            RevealStep::ShowCaption(i) => {
                if self.surface.has_anchor(Anchor::CardsDisplay) {
                    self.surface.show_caption(i);
                }
            }
            RevealStep::Interpret => {
                self.render_interpretation();
                self.state = TarotState::Interpreted;
                debug!(generation = self.generation, "reading interpreted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::config::RevealTiming;
    use crate::surface::MemorySurface;
    use arcana_core::{Card, Suit};

    fn engine() -> TarotEngine<MemorySurface> {
        TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new(),
            ReadingConfig::default().with_seed(42),
        )
    }

    fn tracked() -> (TarotEngine<MemorySurface>, RecordingSink) {
        let sink = RecordingSink::new();
        let e = engine().with_tracker(Tracker::new("/").with_sink(sink.clone()));
        (e, sink)
    }

    #[test]
    fn starts_closed() {
        let e = engine();
        assert_eq!(e.state(), TarotState::Closed);
        assert!(e.session().is_empty());
        assert!(!e.surface().modal_open);
    }

    #[test]
    fn open_shows_picker() {
        let (mut e, sink) = tracked();
        e.open().unwrap();
        assert_eq!(e.state(), TarotState::SelectingSpread);
        assert!(e.surface().modal_open);
        assert_eq!(sink.names(), [EventName::TarotOpen]);
    }

    #[test]
    fn open_twice_rejected() {
        let mut e = engine();
        e.open().unwrap();
        assert!(matches!(
            e.open(),
            Err(ReadingError::InvalidTransition {
                from: TarotState::SelectingSpread,
                action: Action::Open
            })
        ));
    }

    #[test]
    fn select_enables_start() {
        let (mut e, sink) = tracked();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        assert_eq!(e.session().selected_spread(), Some(SpreadKind::Three));
        assert!(e.surface().start_enabled);
        assert_eq!(e.surface().highlighted, Some(SpreadKind::Three));
        let events = sink.events();
        assert_eq!(events[1].name, EventName::TarotSpreadSelect);
        assert_eq!(events[1].props.spread, Some(SpreadKind::Three));
    }

    #[test]
    fn select_unknown_name_rejected() {
        let mut e = engine();
        e.open().unwrap();
        assert!(matches!(
            e.select_spread_name("horseshoe"),
            Err(ReadingError::UnknownSpread(name)) if name == "horseshoe"
        ));
        assert_eq!(e.session().selected_spread(), None);
        e.select_spread_name("celtic").unwrap();
        assert_eq!(e.session().selected_spread(), Some(SpreadKind::Celtic));
    }

    #[test]
    fn start_without_spread_rejected() {
        let mut e = engine();
        e.open().unwrap();
        assert!(matches!(e.start(), Err(ReadingError::NoSpreadSelected)));
        assert_eq!(e.state(), TarotState::SelectingSpread);
    }

    #[test]
    fn start_deals_face_down() {
        let mut e = engine();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();

        assert_eq!(e.state(), TarotState::Revealing);
        assert_eq!(e.session().drawn_cards().len(), 3);
        assert_eq!(e.surface().screen, Screen::Reading);
        assert_eq!(e.surface().slots.len(), 3);
        assert_eq!(e.surface().face_up_count(), 0);
        assert_eq!(e.timeline().len(), 1);
    }

    #[test]
    fn reveal_follows_timing() {
        let mut e = engine();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();

        e.advance(649);
        assert_eq!(e.surface().face_up_count(), 0);
        e.advance(1);
        assert_eq!(e.surface().face_up_count(), 1);
        assert!(!e.surface().slots[0].caption_visible);
        e.advance(100);
        assert!(e.surface().slots[0].caption_visible);
        e.advance(100);
        assert_eq!(e.surface().face_up_count(), 2);
        e.advance(200);
        assert_eq!(e.surface().face_up_count(), 3);
        assert_eq!(e.state(), TarotState::Revealing);

        // last flip at 1050, interpretation 900 later
        e.advance(899);
        assert!(!e.surface().interpretation_open);
        e.advance(1);
        assert_eq!(e.state(), TarotState::Interpreted);
        assert!(e.surface().interpretation_open);
        assert_eq!(e.surface().interpretation.len(), 3);
        assert!(e.timeline().is_empty());
    }

    #[test]
    fn late_caption_still_shows_after_interpretation() {
        let timing = RevealTiming {
            caption_delay_ms: 1_000,
            ..RevealTiming::default()
        };
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new(),
            ReadingConfig::default().with_seed(2).with_timing(timing),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Single).unwrap();
        e.start().unwrap();
        e.advance(650 + 900);
        assert_eq!(e.state(), TarotState::Interpreted);
        assert!(!e.surface().slots[0].caption_visible);
        e.run_until_idle();
        assert!(e.surface().slots[0].caption_visible);
    }

    #[test]
    fn interpretation_uses_positions_in_draw_order() {
        let mut e = engine();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.run_until_idle();

        let drawn: Vec<String> = e
            .session()
            .drawn_cards()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        let shown: Vec<String> = e
            .surface()
            .interpretation
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(drawn, shown);
        let positions: Vec<&str> = e
            .surface()
            .interpretation
            .iter()
            .map(|i| i.position.as_str())
            .collect();
        assert_eq!(positions, ["Past", "Present", "Future"]);
    }

    #[test]
    fn missing_position_labels_render_empty() {
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::empty().with_labels(SpreadKind::Three, vec!["Past".to_string()]),
            MemorySurface::new(),
            ReadingConfig::default().with_seed(1),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.run_until_idle();
        let interp = &e.surface().interpretation;
        assert_eq!(interp[0].position, "Past");
        assert_eq!(interp[1].position, "");
        assert_eq!(interp[2].position, "");
    }

    #[test]
    fn restart_keeps_spread_and_redraws() {
        let (mut e, sink) = tracked();
        e.open().unwrap();
        e.select_spread(SpreadKind::Celtic).unwrap();
        e.start().unwrap();
        e.run_until_idle();
        let first = e.session().drawn_cards().to_vec();

        e.restart().unwrap();
        assert_eq!(e.state(), TarotState::Revealing);
        assert_eq!(e.session().selected_spread(), Some(SpreadKind::Celtic));
        assert_eq!(e.session().drawn_cards().len(), 10);
        assert_ne!(e.session().drawn_cards(), first.as_slice());
        assert!(!e.surface().interpretation_open);
        assert!(e.surface().interpretation.is_empty());
        assert_eq!(e.surface().face_up_count(), 0);

        let last = sink.events().pop().unwrap();
        assert_eq!(last.name, EventName::TarotRestartReading);
        assert_eq!(last.props.spread, Some(SpreadKind::Celtic));
    }

    #[test]
    fn restart_mid_reveal_drops_old_steps() {
        let mut e = engine();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.advance(700);
        assert!(e.surface().face_up_count() > 0);

        e.restart().unwrap();
        assert_eq!(e.surface().face_up_count(), 0);
        // old flips for cards 1 and 2 were due at 850 and 1050
        e.advance(400);
        assert_eq!(e.surface().face_up_count(), 0);
        e.advance(250);
        assert_eq!(e.surface().face_up_count(), 1);
        e.run_until_idle();
        assert_eq!(e.state(), TarotState::Interpreted);
        assert_eq!(e.surface().interpretation.len(), 3);
    }

    #[test]
    fn new_reading_returns_to_picker() {
        let (mut e, sink) = tracked();
        e.open().unwrap();
        e.select_spread(SpreadKind::Single).unwrap();
        e.start().unwrap();
        e.run_until_idle();

        e.new_reading().unwrap();
        assert_eq!(e.state(), TarotState::SelectingSpread);
        assert!(e.session().is_empty());
        assert!(!e.surface().start_enabled);
        assert_eq!(e.surface().highlighted, None);
        assert_eq!(e.surface().screen, Screen::Selection);
        assert!(e.surface().slots.is_empty());
        assert_eq!(sink.names().last(), Some(&EventName::TarotNewReading));
    }

    #[test]
    fn close_resets_everything() {
        let (mut e, sink) = tracked();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.advance(800);

        e.close().unwrap();
        assert_eq!(e.state(), TarotState::Closed);
        assert!(e.session().is_empty());
        assert!(!e.surface().modal_open);
        assert_eq!(e.surface().screen, Screen::Selection);
        assert!(e.surface().slots.is_empty());
        assert_eq!(sink.names().last(), Some(&EventName::TarotClose));

        let before = e.surface().clone();
        e.run_until_idle();
        assert_eq!(e.surface(), &before);
    }

    #[test]
    fn close_when_closed_is_silent() {
        let (mut e, sink) = tracked();
        e.close().unwrap();
        assert!(sink.events().is_empty());
        assert_eq!(e.generation(), 0);
    }

    #[test]
    fn clear_reading_ui_is_idempotent() {
        let mut e = engine();
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.run_until_idle();

        e.clear_reading_ui();
        let once = e.surface().clone();
        e.clear_reading_ui();
        assert_eq!(e.surface(), &once);
        assert!(once.slots.is_empty());
        assert!(once.interpretation.is_empty());
        assert!(!once.interpretation_open);
        assert_eq!(e.session().selected_spread(), Some(SpreadKind::Three));
    }

    #[test]
    fn clear_reading_ui_when_closed() {
        let mut e = engine();
        e.clear_reading_ui();
        e.clear_reading_ui();
        assert_eq!(e.state(), TarotState::Closed);
    }

    #[test]
    fn generation_bumps() {
        let mut e = engine();
        e.open().unwrap();
        assert_eq!(e.generation(), 0);
        e.select_spread(SpreadKind::Single).unwrap();
        e.start().unwrap();
        assert_eq!(e.generation(), 1);
        e.restart().unwrap();
        assert_eq!(e.generation(), 2);
        e.new_reading().unwrap();
        assert_eq!(e.generation(), 3);
        e.close().unwrap();
        assert_eq!(e.generation(), 4);
    }

    #[test]
    fn empty_catalog_gives_empty_reading() {
        let mut e = TarotEngine::new(
            CardCatalog::empty(),
            PositionTable::default(),
            MemorySurface::new(),
            ReadingConfig::default().with_seed(3),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Celtic).unwrap();
        e.start().unwrap();
        assert!(e.session().drawn_cards().is_empty());

        e.advance(650 + 900);
        assert_eq!(e.state(), TarotState::Interpreted);
        assert!(e.surface().interpretation.is_empty());
        assert!(e.surface().interpretation_open);
    }

    #[test]
    fn small_catalog_reads_what_it_has() {
        let cards = vec![
            Card::new("The Sun", "sun.jpg", "Joy", Suit::Major),
            Card::new("The Moon", "moon.jpg", "Dreams", Suit::Major),
        ];
        let mut e = TarotEngine::new(
            CardCatalog::from_cards(cards).unwrap(),
            PositionTable::default(),
            MemorySurface::new(),
            ReadingConfig::default().with_seed(3),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        e.run_until_idle();
        assert_eq!(e.state(), TarotState::Interpreted);
        assert_eq!(e.surface().interpretation.len(), 2);
    }

    #[test]
    fn missing_modal_makes_open_a_noop() {
        let sink = RecordingSink::new();
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new().without(Anchor::Modal),
            ReadingConfig::default(),
        )
        .with_tracker(Tracker::new("/").with_sink(sink.clone()));
        e.open().unwrap();
        assert_eq!(e.state(), TarotState::Closed);
        assert!(!e.surface().modal_open);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn missing_cards_display_still_interprets() {
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new().without(Anchor::CardsDisplay),
            ReadingConfig::default().with_seed(5),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Three).unwrap();
        e.start().unwrap();
        assert!(e.surface().slots.is_empty());
        e.run_until_idle();
        assert_eq!(e.state(), TarotState::Interpreted);
        assert_eq!(e.surface().interpretation.len(), 3);
    }

    #[test]
    fn missing_interpretation_content_skips_panel() {
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new().without(Anchor::InterpretationContent),
            ReadingConfig::default().with_seed(5),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Single).unwrap();
        e.start().unwrap();
        e.run_until_idle();
        assert_eq!(e.state(), TarotState::Interpreted);
        assert!(e.surface().interpretation.is_empty());
        assert!(!e.surface().interpretation_open);
    }

    #[test]
    fn celtic_slots_carry_layout_and_urls() {
        let mut e = TarotEngine::new(
            CardCatalog::builtin(),
            PositionTable::default(),
            MemorySurface::new(),
            ReadingConfig::default()
                .with_seed(9)
                .with_image_base_url("/cards/"),
        );
        e.open().unwrap();
        e.select_spread(SpreadKind::Celtic).unwrap();
        e.start().unwrap();
        let s = e.surface();
        assert_eq!(s.container, Some(arcana_core::ContainerStyle::CelticCross));
        assert!(s.slots[1].slot.layout.crossed);
        assert_eq!(s.slots[9].slot.layout.position, Some(10));
        assert!(s.slots.iter().all(|r| r.slot.image_url.starts_with("/cards/")));
    }

    #[test]
    fn handle_routes_events() {
        let (mut e, sink) = tracked();
        e.handle(UiEvent::KeyPressed(Key::Escape));
        assert!(sink.events().is_empty());

        e.handle(UiEvent::OpenSignal);
        e.handle(UiEvent::StartClicked);
        assert_eq!(e.state(), TarotState::SelectingSpread);
        e.handle(UiEvent::SpreadClicked(SpreadKind::Single));
        e.handle(UiEvent::StartClicked);
        assert_eq!(e.state(), TarotState::Revealing);
        e.handle(UiEvent::KeyPressed(Key::Char('x')));
        assert_eq!(e.state(), TarotState::Revealing);
        e.handle(UiEvent::KeyPressed(Key::Escape));
        assert_eq!(e.state(), TarotState::Closed);

        assert_eq!(
            sink.names(),
            [
                EventName::TarotOpen,
                EventName::TarotSpreadSelect,
                EventName::TarotReadingStart,
                EventName::TarotClose,
            ]
        );
    }

    #[test]
    fn backdrop_and_button_close() {
        let mut e = engine();
        e.handle(UiEvent::OpenSignal);
        e.handle(UiEvent::BackdropClicked);
        assert_eq!(e.state(), TarotState::Closed);
        e.handle(UiEvent::OpenSignal);
        e.handle(UiEvent::CloseClicked);
        assert_eq!(e.state(), TarotState::Closed);
    }

    #[test]
    fn spread_click_ignored_during_reading() {
        let mut e = engine();
        e.handle(UiEvent::OpenSignal);
        e.handle(UiEvent::SpreadClicked(SpreadKind::Three));
        e.handle(UiEvent::StartClicked);
        e.handle(UiEvent::SpreadClicked(SpreadKind::Celtic));
        assert_eq!(e.session().selected_spread(), Some(SpreadKind::Three));
        assert_eq!(e.session().drawn_cards().len(), 3);
    }
}
