use iced::{Point, Rectangle, Size, Vector};

use super::SliderChange;
use super::drag::DragTarget;
use super::geometry;

/// Two-dimensional slider with both components in `[0, 1]`.
///
/// `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSlider {
    bounds: Rectangle,
    knob: Size,
    value: Vector,
    grab: Vector,
}

impl VectorSlider {
    pub fn new(bounds: Rectangle, knob: Size) -> Self {
        Self {
            bounds,
            knob,
            value: Vector::ZERO,
            grab: Vector::ZERO,
        }
    }

    pub fn value(&self) -> Vector {
        self.value
    }

    /// Set both components programmatically; no change is emitted.
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.value =
            Vector::new(geometry::clamp_unit(x), geometry::clamp_unit(y));
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn knob_size(&self) -> Size {
        self.knob
    }

    pub fn resize(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Knob position relative to the track origin, rounded to a tenth of a
    /// pixel.
    pub fn knob_offset(&self) -> Vector {
        let travel = geometry::travel(self.bounds, self.knob);
        Vector::new(
            geometry::round_tenth((self.value.x * travel.width).max(0.0)),
            geometry::round_tenth(((1.0 - self.value.y) * travel.height).max(0.0)),
        )
    }

    pub fn knob_bounds(&self) -> Rectangle {
        geometry::knob_bounds(self.bounds, self.knob, self.knob_offset())
    }

    fn change(&self, is_dragging: bool) -> SliderChange<Vector> {
        SliderChange {
            value: self.value,
            is_dragging,
        }
    }
}

impl DragTarget for VectorSlider {
    type Change = SliderChange<Vector>;

    fn accepts(&self, pointer: Point) -> bool {
        self.bounds.contains(pointer)
    }

    fn drag_start(&mut self, pointer: Point) -> Option<Self::Change> {
        self.grab = geometry::grab_offset(pointer, self.bounds, self.knob_bounds());
        self.drag_move(pointer)
    }

    fn drag_move(&mut self, pointer: Point) -> Option<Self::Change> {
        let travel = geometry::travel(self.bounds, self.knob);
        let x = geometry::normalize(pointer.x - self.grab.x, travel.width)?;
        let y = geometry::normalize(pointer.y - self.grab.y, travel.height)?;
        let value = Vector::new(x, 1.0 - y);

        if value == self.value {
            return None;
        }
        self.value = value;
        Some(self.change(true))
    }

    fn drag_end(&mut self, _pointer: Point) -> Option<Self::Change> {
        Some(self.change(false))
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size, Vector};

    use super::VectorSlider;
    use crate::slider::drag::{DragHelper, PointerInput};

    fn pad() -> VectorSlider {
        VectorSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(110.0, 110.0)),
            Size::new(10.0, 10.0),
        )
    }

    #[test]
    fn given_value_when_laid_out_then_y_axis_is_inverted() {
        let mut slider = pad();
        slider.set_xy(0.25, 0.75);

        assert_eq!(slider.knob_offset(), Vector::new(25.0, 25.0));
    }

    #[test]
    fn given_track_press_when_dragged_then_both_axes_follow_pointer() {
        let mut slider = pad();
        let mut drag = DragHelper::default();

        drag.handle(&mut slider, PointerInput::Moved(Point::new(58.0, 28.0)));
        let change = drag
            .handle(&mut slider, PointerInput::Pressed)
            .expect("track press moves the knob");

        assert!(change.is_dragging);
        assert!((change.value.x - 0.5).abs() < 1e-6);
        assert!((change.value.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn given_out_of_range_components_when_set_then_clamped() {
        let mut slider = pad();
        slider.set_xy(-1.0, 3.0);

        assert_eq!(slider.value(), Vector::new(0.0, 1.0));
    }

    #[test]
    fn given_drag_when_cancelled_then_reports_end() {
        let mut slider = pad();
        let mut drag = DragHelper::default();
        drag.handle(&mut slider, PointerInput::Moved(Point::new(58.0, 28.0)));
        drag.handle(&mut slider, PointerInput::Pressed);

        let end = drag
            .handle(&mut slider, PointerInput::Cancelled)
            .expect("cancel ends the drag");

        assert!(!end.is_dragging);
    }
}
