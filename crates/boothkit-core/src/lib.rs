//! # BoothKit Core
//!
//! Core types shared by the BoothKit crates.
//! Provides the error taxonomy, editor-wide constants and the event bus
//! used to notify observers about document, selection and history changes.

pub mod constants;
pub mod error;
pub mod event_bus;

pub use error::{Error, LayoutError, Result};

pub use event_bus::{
    DocumentEvent, EditorEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, ExportEvent, HistoryEvent, SelectionEvent, SubscriptionId,
};
