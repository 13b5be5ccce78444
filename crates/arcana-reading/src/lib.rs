//! Tarot reading engine for Arcana.
//!
//! A [`TarotEngine`] owns one [`ReadingSession`] and drives it through spread
//! selection, a randomized draw, a timed card reveal, and the final
//! interpretation. Rendering goes through the [`ReadingSurface`] trait and
//! time is virtual: callers feed elapsed milliseconds into
//! [`TarotEngine::advance`], which makes every transition testable without a
//! real clock or display.
//!
//! The crate also carries the fire-and-forget analytics [`Tracker`] and the
//! daily [`Oracle`] quote picker that share the page with the tarot modal.

pub mod analytics;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod oracle;
pub mod session;
pub mod state;
pub mod surface;
pub mod timeline;

pub use analytics::{AnalyticsEvent, AnalyticsSink, EventName, Tracker};
pub use config::{ReadingConfig, RevealTiming};
pub use draw::draw_cards;
pub use engine::{Key, TarotEngine, UiEvent};
pub use error::{ReadingError, ReadingResult};
pub use oracle::{Oracle, OracleDeck};
pub use session::ReadingSession;
pub use state::{Action, TarotState};
pub use surface::{Anchor, CardSlot, InterpretationEntry, MemorySurface, ReadingSurface, Screen};
pub use timeline::{RevealStep, Scheduled, Timeline};
