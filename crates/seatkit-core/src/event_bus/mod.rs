//! # Event Bus Module
//!
//! Publish/subscribe notifications between the layout store and the views that
//! render it. Every mutation that changes the layout is announced once, so a
//! desktop view and a mobile view observing the same store re-render consistently.
//!
//! There is no global instance: whoever owns the store creates the bus and hands
//! clones of the `Arc<EventBus>` to its views.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use seatkit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = Arc::new(EventBus::new());
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Layout]),
//!     |event| println!("layout changed: {}", event.description()),
//! );
//!
//! bus.publish(AppEvent::Layout(LayoutEvent::LayoutCleared)).ok();
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
