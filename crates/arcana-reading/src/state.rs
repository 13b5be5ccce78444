//! Reading states and the transition table between them.

use serde::{Deserialize, Serialize};

/// Where the tarot modal currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TarotState {
    /// Modal hidden. Idle state.
    Closed,
    /// Modal open on the spread picker.
    SelectingSpread,
    /// Cards dealt; the flip sequence is pending or running.
    Revealing,
    /// All cards face up and the interpretation is shown.
    Interpreted,
}

impl TarotState {
    /// Whether a reading (reveal or interpretation) is on screen.
    pub fn is_reading(self) -> bool {
        matches!(self, Self::Revealing | Self::Interpreted)
    }

    /// The state a user action leads to, or `None` if the action is not
    /// accepted here. Timer-driven moves (reveal to interpretation) are not
    /// user actions and are not part of this table.
    pub fn transition(self, action: Action) -> Option<Self> {
        use Action::*;
        use TarotState::*;

        match (self, action) {
            (Closed, Open) => Some(SelectingSpread),
            (SelectingSpread, SelectSpread) => Some(SelectingSpread),
            (SelectingSpread, Start) => Some(Revealing),
            (Revealing | Interpreted, Restart) => Some(Revealing),
            (Revealing | Interpreted, NewReading) => Some(SelectingSpread),
            (SelectingSpread | Revealing | Interpreted, Close) => Some(Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TarotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::SelectingSpread => write!(f, "selecting a spread"),
            Self::Revealing => write!(f, "revealing"),
            Self::Interpreted => write!(f, "showing the interpretation"),
        }
    }
}

/// A user-initiated engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Show the modal.
    Open,
    /// Hide the modal and forget the reading.
    Close,
    /// Pick a spread.
    SelectSpread,
    /// Draw and reveal the selected spread.
    Start,
    /// Redraw the same spread.
    Restart,
    /// Go back to the spread picker.
    NewReading,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Close => write!(f, "close"),
            Self::SelectSpread => write!(f, "select a spread"),
            Self::Start => write!(f, "start a reading"),
            Self::Restart => write!(f, "restart the reading"),
            Self::NewReading => write!(f, "begin a new reading"),
        }
    }
}
