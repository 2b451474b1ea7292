//! Sumidero de analítica fire-and-forget.
//!
//! El motor y los pasos emiten eventos y siguen adelante: ningún camino de
//! lección depende de que el registro llegue a ninguna parte.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    /// Sesión de lección a la que pertenece el evento.
    pub session: Uuid,
    pub name: String,
    pub payload: Value,
    pub ts: DateTime<Utc>, // metadato, no participa en ninguna decisión
}

impl AnalyticsEvent {
    pub fn new(session: Uuid, name: impl Into<String>, payload: Value) -> Self {
        Self { session,
               name: name.into(),
               payload,
               ts: Utc::now() }
    }
}

pub trait AnalyticsSink {
    fn record(&self, event: AnalyticsEvent);
}

/// Descarta todo. Para builds sin analítica.
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _event: AnalyticsEvent) {}
}

/// Acumula en memoria. Para tests y la demo.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: AnalyticsEvent) {
        self.events.lock().expect("sink mutex poisoned").push(event);
    }
}
