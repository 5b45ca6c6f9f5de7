//! # Event Bus Module
//!
//! Publish/subscribe notifications for the editor.
//!
//! ## Overview
//!
//! - The editing session publishes an [`EditorEvent`] after every committed
//!   mutation (document, selection, history, export)
//! - Subscribers filter by [`EventCategory`]
//! - Sync handlers run inline; async consumers use a broadcast receiver
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boothkit_core::event_bus::{EventBus, EventFilter, EventCategory, EditorEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::History]),
//!     |event| tracing::info!("{}", event.description()),
//! );
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
