//! Standalone controls for [`iced`]: an option popup, linear and vector
//! sliders, and a radio button.
//!
//! Every control is a plain state machine plus a `view` function. The state
//! machines take pointer positions and return typed change events, so they
//! can be driven and tested without a window:
//!
//! ```
//! use iced::{Point, Rectangle, Size};
//! use knob_ui_controls::slider::{DragHelper, LinearSlider, PointerInput};
//!
//! let mut slider = LinearSlider::new(
//!     Rectangle::new(Point::ORIGIN, Size::new(110.0, 20.0)),
//!     Size::new(10.0, 20.0),
//! );
//! let mut drag = DragHelper::default();
//!
//! drag.handle(&mut slider, PointerInput::Moved(Point::new(58.0, 10.0)));
//! let change = drag
//!     .handle(&mut slider, PointerInput::Pressed)
//!     .expect("press on the track moves the knob");
//!
//! assert!(change.is_dragging);
//! assert_eq!(slider.value(), 0.5);
//! ```

pub mod popup;
pub mod radio;
pub mod slider;
