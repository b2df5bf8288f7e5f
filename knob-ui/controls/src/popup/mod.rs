//! One-shot popup listing string options.

mod model;
mod view;

pub use model::{PopupEvent, PopupOptions, PopupSelectEvent, PopupState};
pub use view::view;
