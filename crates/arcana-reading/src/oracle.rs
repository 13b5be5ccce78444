//! The daily oracle: a short multi-line saying picked at random.
//!
//! Oracle data is a JSON array of entries, each an array of lines. The data
//! is hand-edited, so anything malformed degrades to a fixed fallback saying
//! instead of an error.

use rand::Rng;
use rand::rngs::StdRng;
use serde_json::Value;

use crate::analytics::{EventName, Tracker};
use crate::error::ReadingResult;

/// Shown when there is nothing usable to pick from.
pub const FALLBACK_LINE: &str = "Today will be a good day ✨";

/// Delay between consecutive lines fading in.
pub const LINE_STAGGER_MS: u64 = 140;

/// Sayings used when no oracle file is supplied.
pub const BUILTIN_SAYINGS: &[&[&str]] = &[
    &["Slow down.", "What you seek is already walking toward you."],
    &["Say the kind thing first.", "The rest will follow."],
    &["An old door closes quietly.", "Listen for the new one."],
    &["Rest is not a reward.", "It is part of the work."],
    &["Someone is thinking of you", "with more warmth than you know."],
    &["Finish one small thing today."],
    &["The answer is in the question", "you have been avoiding."],
];

/// A collection of sayings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OracleDeck {
    // `None` marks an entry that was not an array of lines.
    entries: Vec<Option<Vec<String>>>,
}

impl OracleDeck {
    /// Build a deck from well-formed entries.
    pub fn new(entries: Vec<Vec<String>>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| Some(clean(e))).collect(),
        }
    }

    /// The built-in sayings.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SAYINGS
                .iter()
                .map(|lines| lines.iter().map(|l| (*l).to_string()).collect())
                .collect(),
        )
    }

    /// Parse a deck from JSON. A top level that is not an array gives an
    /// empty deck; non-string lines are dropped, the rest trimmed, and blank
    /// lines removed.
    pub fn from_json(json: &str) -> ReadingResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(items) = value else {
            return Ok(Self::default());
        };
        let entries = items
            .into_iter()
            .map(|item| match item {
                Value::Array(lines) => Some(clean(
                    lines
                        .into_iter()
                        .filter_map(|l| match l {
                            Value::String(s) => Some(s),
                            _ => None,
                        })
                        .collect(),
                )),
                _ => None,
            })
            .collect();
        Ok(Self { entries })
    }

    /// Number of entries, including malformed ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the deck has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one saying uniformly at random.
    ///
    /// Falls back to [`FALLBACK_LINE`] when the deck is empty or the chosen
    /// entry is malformed or has no lines left after cleaning.
    pub fn pick_lines(&self, rng: &mut StdRng) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![FALLBACK_LINE.to_string()];
        }
        match &self.entries[rng.random_range(0..self.entries.len())] {
            Some(lines) if !lines.is_empty() => lines.clone(),
            _ => vec![FALLBACK_LINE.to_string()],
        }
    }
}

fn clean(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Fade-in delay for the line at `index`.
pub fn stagger_ms(index: usize) -> u64 {
    index as u64 * LINE_STAGGER_MS
}

/// The oracle modal: picks a fresh saying each time it opens.
#[derive(Debug)]
pub struct Oracle {
    deck: OracleDeck,
    tracker: Tracker,
    rng: StdRng,
    open: bool,
    lines: Vec<String>,
}

impl Oracle {
    /// Create a closed oracle.
    pub fn new(deck: OracleDeck, tracker: Tracker, rng: StdRng) -> Self {
        Self {
            deck,
            tracker,
            rng,
            open: false,
            lines: Vec::new(),
        }
    }

    /// Open the modal with a newly picked saying and return its lines.
    pub fn open(&mut self) -> &[String] {
        self.lines = self.deck.pick_lines(&mut self.rng);
        self.open = true;
        self.tracker.track(EventName::OracleOpen, None);
        &self.lines
    }

    /// Close the modal. Closing a closed oracle does nothing.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.tracker.track(EventName::OracleClose, None);
    }

    /// Whether the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Lines of the saying last shown.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
