//! Property model consumed by the knob widgets.
//!
//! The crate is UI-agnostic and single-threaded:
//! - [`Property`] is a shared handle to a typed value plus its [`Schema`];
//! - [`Emitter`] and [`Subscription`] implement change notification with
//!   disposable registrations;
//! - [`ecs`] and [`graph`] provide the two object models the property trees
//!   can inspect, each with its own selection registry.
//!
//! # Quick Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use knob_model::{Property, Schema, Value};
//!
//! let speed = Property::number("speed", 1.0)
//!     .schema(Schema::new().with_range(0.0, 10.0))
//!     .build();
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&seen);
//! let subscription = speed.subscribe(move |value| {
//!     sink.set(value.as_number().unwrap_or_default());
//! });
//!
//! speed.set_value(Value::Number(4.0)).expect("number accepted");
//! assert_eq!(seen.get(), 4.0);
//!
//! subscription.dispose();
//! assert_eq!(speed.observer_count(), 0);
//! ```

pub mod ecs;
mod errors;
pub mod graph;
pub mod math;
mod observer;
mod options;
mod property;
mod schema;
mod value;

pub use errors::PropertyError;
pub use observer::{Emitter, Subscription};
pub use options::{option_index, option_label};
pub use property::{Property, PropertyBuilder};
pub use schema::Schema;
pub use value::{PropertyType, Value};

/// Generate a fresh identifier for entities, components and graph nodes.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
