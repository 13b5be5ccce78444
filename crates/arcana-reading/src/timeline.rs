//! Virtual-clock scheduler for the reveal choreography.
//!
//! Steps are one-shot and fire in `(due, insertion)` order. Every entry is
//! tagged with the reading generation that armed it so the engine can drop
//! callbacks that outlived their reading.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// One step of the reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStep {
    /// Start flipping; arms one [`RevealStep::FlipCard`] per card.
    FlipSequence,
    /// Turn the card at this draw index face up.
    FlipCard(usize),
    /// Fade in the caption under the card at this draw index.
    ShowCaption(usize),
    /// Render the interpretation panel.
    Interpret,
}

/// A step that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Virtual time the step was due at.
    pub due: u64,
    /// Reading generation that armed the step.
    pub generation: u64,
    /// What to do.
    pub step: RevealStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due: u64,
    seq: u64,
    generation: u64,
    step: RevealStep,
}

/// A queue of pending steps over a virtual millisecond clock.
#[derive(Debug, Default)]
pub struct Timeline {
    now: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry>>,
}

impl Timeline {
    /// An empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Arm `step` to fire `delay_ms` after the current time. Returns the due time.
    pub fn schedule(&mut self, delay_ms: u64, generation: u64, step: RevealStep) -> u64 {
        let due = self.now.saturating_add(delay_ms);
        self.queue.push(Reverse(Entry {
            due,
            seq: self.next_seq,
            generation,
            step,
        }));
        self.next_seq += 1;
        due
    }

    /// Due time of the earliest pending step.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(e)| e.due)
    }

    /// Remove the earliest step if it is due at or before `until`, moving the
    /// clock forward to its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<Scheduled> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(Scheduled {
            due: entry.due,
            generation: entry.generation,
            step: entry.step,
        })
    }

    /// Move the clock forward to `time`. The clock never goes backwards.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    /// Number of pending steps for a given generation.
    pub fn pending_for(&self, generation: u64) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| e.generation == generation)
            .count()
    }

    /// Number of pending steps.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every pending step. The clock is unchanged.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
