//! Fire-and-forget analytics.
//!
//! Every user-facing transition reports one event. Reporting must never
//! affect the caller: a [`Tracker`] without a sink does nothing, and sink
//! failures are logged and dropped.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use arcana_core::SpreadKind;

/// Names of the events the page reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    /// Tarot modal opened.
    TarotOpen,
    /// Tarot modal closed.
    TarotClose,
    /// A spread was picked.
    TarotSpreadSelect,
    /// A reading was started.
    TarotReadingStart,
    /// The same spread was redrawn.
    TarotRestartReading,
    /// Back to the spread picker.
    TarotNewReading,
    /// Oracle modal opened.
    OracleOpen,
    /// Oracle modal closed.
    OracleClose,
}

impl EventName {
    /// Wire name of the event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TarotOpen => "tarot_open",
            Self::TarotClose => "tarot_close",
            Self::TarotSpreadSelect => "tarot_spread_select",
            Self::TarotReadingStart => "tarot_reading_start",
            Self::TarotRestartReading => "tarot_restart_reading",
            Self::TarotNewReading => "tarot_new_reading",
            Self::OracleOpen => "oracle_open",
            Self::OracleClose => "oracle_close",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Properties attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProps {
    /// Path of the page the event happened on.
    pub page: String,
    /// Spread involved, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<SpreadKind>,
}

/// One analytics notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Event name.
    pub name: EventName,
    /// Event properties.
    pub props: EventProps,
}

/// Errors a sink may report. The tracker never propagates them.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The backend is not loaded.
    #[error("analytics backend unavailable")]
    Unavailable,

    /// The backend rejected or failed the call.
    #[error("analytics backend failed: {0}")]
    Failed(String),
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    /// Deliver one event.
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;
}

/// Reports events to an optional sink, swallowing every failure.
pub struct Tracker {
    page: String,
    sink: Option<Box<dyn AnalyticsSink>>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("page", &self.page)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Tracker {
    /// A tracker with no sink; every call is a no-op.
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            sink: None,
        }
    }

    /// Attach a sink.
    pub fn with_sink(mut self, sink: impl AnalyticsSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Page path attached to every event.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Report an event. Never fails.
    pub fn track(&self, name: EventName, spread: Option<SpreadKind>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let event = AnalyticsEvent {
            name,
            props: EventProps {
                page: self.page.clone(),
                spread,
            },
        };
        if let Err(e) = sink.send(&event) {
            debug!(event = %name, error = %e, "analytics event dropped");
        }
    }
}

/// Keeps every event in a shared buffer. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    /// An empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Names of the events recorded so far.
    pub fn names(&self) -> Vec<EventName> {
        self.events().iter().map(|e| e.name).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events
            .lock()
            .map_err(|e| AnalyticsError::Failed(e.to_string()))?
            .push(event.clone());
        Ok(())
    }
}

/// Writes events to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let props = &event.props;
        match props.spread {
            Some(spread) => info!(
                event = %event.name,
                page = %props.page,
                spread = spread.key(),
                "analytics"
            ),
            None => info!(event = %event.name, page = %props.page, "analytics"),
        }
        Ok(())
    }
}
