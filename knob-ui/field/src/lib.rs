//! Property field widget for [`iced`].
//!
//! A [`PropertyField`] shows one [`knob_model::Property`] value (or one
//! element of an array property) and edits it three ways:
//! - click opens an inline editor for numbers and strings, toggles booleans,
//!   or opens an option menu for enumerated numbers;
//! - press and drag scrubs numbers, with [`Modifiers::FINE`] and
//!   [`Modifiers::COARSE`] scaling the step;
//! - the option menu writes the chosen option index.
//!
//! ```
//! use knob_model::{Property, Schema};
//! use knob_ui_field::{FieldSettings, PropertyField};
//!
//! let gain = Property::number("gain", 0.5)
//!     .schema(Schema::new().with_range(0.0, 1.0).with_bar())
//!     .build();
//! let field = PropertyField::new(gain, None, FieldSettings::default());
//!
//! let render = field.render();
//! assert_eq!(render.text, "0.500");
//! assert_eq!(render.bar_percent, Some(50.0));
//! ```

mod field;
mod format;
mod gesture;
mod settings;
mod view;

pub use field::{EditSession, FieldEvent, FieldRender, PropertyField};
pub use format::{edit_text, format_value, parse_number};
pub use gesture::{Modifiers, drag_step, scrub};
pub use settings::FieldSettings;
pub use view::view;
