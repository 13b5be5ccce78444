//! Error types for the reading engine.

use thiserror::Error;

use crate::state::{Action, TarotState};

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while driving a reading.
///
/// None of these are fatal. The page event layer ([`crate::TarotEngine::handle`])
/// logs and drops them; direct callers can inspect them.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// A spread name that is not one of the known spreads.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// Start or restart was requested before a spread was chosen.
    #[error("no spread selected")]
    NoSpreadSelected,

    /// The action is not accepted in the current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        /// State the engine was in.
        from: TarotState,
        /// The rejected action.
        action: Action,
    },

    /// Card catalog or position data could not be loaded.
    #[error("{0}")]
    Catalog(#[from] arcana_core::CatalogError),

    /// Oracle data was not valid JSON.
    #[error("invalid oracle data: {0}")]
    Json(#[from] serde_json::Error),
}
