//! Linear and two-dimensional sliders driven by a [`DragHelper`].

mod drag;
mod geometry;
mod linear;
mod vector;
mod view;

pub use drag::{DragHelper, DragTarget, PointerInput};
pub use geometry::SliderDirection;
pub use linear::LinearSlider;
pub use vector::VectorSlider;
pub use view::{linear as linear_view, vector as vector_view};

/// Message produced by a slider view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    Pointer(PointerInput),
    /// The track was laid out with a new size; pass it to `resize`.
    Resized(iced::Size),
}

/// Change reported while dragging and once when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChange<V> {
    pub value: V,
    pub is_dragging: bool,
}
