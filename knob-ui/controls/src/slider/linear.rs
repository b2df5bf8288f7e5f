use iced::{Point, Rectangle, Size, Vector};

use super::drag::DragTarget;
use super::geometry::{self, SliderDirection};
use super::SliderChange;

/// One-dimensional slider with a value in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSlider {
    bounds: Rectangle,
    knob: Size,
    direction: SliderDirection,
    value: f32,
    grab: Vector,
}

impl LinearSlider {
    pub fn new(bounds: Rectangle, knob: Size) -> Self {
        Self {
            bounds,
            knob,
            direction: SliderDirection::Horizontal,
            value: 0.0,
            grab: Vector::ZERO,
        }
    }

    pub fn with_direction(mut self, direction: SliderDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> SliderDirection {
        self.direction
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value programmatically; no change is emitted.
    pub fn set_value(&mut self, value: f32) {
        self.value = geometry::clamp_unit(value);
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn knob_size(&self) -> Size {
        self.knob
    }

    /// Lay the slider out again after its track changed size.
    pub fn resize(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Knob position along the axis relative to the track origin, rounded to
    /// a tenth of a pixel.
    pub fn knob_offset(&self) -> f32 {
        let travel = geometry::travel(self.bounds, self.knob);
        let offset = match self.direction {
            SliderDirection::Horizontal => self.value * travel.width,
            SliderDirection::Vertical => (1.0 - self.value) * travel.height,
        };
        geometry::round_tenth(offset.max(0.0))
    }

    pub fn knob_bounds(&self) -> Rectangle {
        let offset = match self.direction {
            SliderDirection::Horizontal => Vector::new(self.knob_offset(), 0.0),
            SliderDirection::Vertical => Vector::new(0.0, self.knob_offset()),
        };
        geometry::knob_bounds(self.bounds, self.knob, offset)
    }

    fn value_at(&self, pointer: Point) -> Option<f32> {
        let travel = geometry::travel(self.bounds, self.knob);
        match self.direction {
            SliderDirection::Horizontal => {
                geometry::normalize(pointer.x - self.grab.x, travel.width)
            },
            SliderDirection::Vertical => {
                geometry::normalize(pointer.y - self.grab.y, travel.height)
                    .map(|value| 1.0 - value)
            },
        }
    }

    fn change(&self, is_dragging: bool) -> SliderChange<f32> {
        SliderChange {
            value: self.value,
            is_dragging,
        }
    }
}

impl DragTarget for LinearSlider {
    type Change = SliderChange<f32>;

    fn accepts(&self, pointer: Point) -> bool {
        self.bounds.contains(pointer)
    }

    fn drag_start(&mut self, pointer: Point) -> Option<Self::Change> {
        self.grab = geometry::grab_offset(pointer, self.bounds, self.knob_bounds());
        self.drag_move(pointer)
    }

    fn drag_move(&mut self, pointer: Point) -> Option<Self::Change> {
        let value = self.value_at(pointer)?;
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(self.change(true))
    }

    fn drag_end(&mut self, _pointer: Point) -> Option<Self::Change> {
        log::trace!("linear slider drag ended at {}", self.value);
        Some(self.change(false))
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size};

    use super::LinearSlider;
    use crate::slider::drag::{DragHelper, PointerInput};
    use crate::slider::geometry::SliderDirection;

    fn horizontal() -> LinearSlider {
        LinearSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(110.0, 20.0)),
            Size::new(10.0, 20.0),
        )
    }

    fn press(
        slider: &mut LinearSlider,
        drag: &mut DragHelper,
        at: Point,
    ) -> Option<crate::slider::SliderChange<f32>> {
        drag.handle(slider, PointerInput::Moved(at));
        drag.handle(slider, PointerInput::Pressed)
    }

    #[test]
    fn given_value_when_laid_out_then_knob_offset_follows_value() {
        let mut slider = horizontal();
        slider.set_value(0.25);
        assert_eq!(slider.knob_offset(), 25.0);

        slider.set_value(4.0);
        assert_eq!(slider.value(), 1.0);
        assert_eq!(slider.knob_offset(), 100.0);
    }

    #[test]
    fn given_press_on_knob_when_dragged_then_knob_keeps_grab_point() {
        let mut slider = horizontal();
        slider.set_value(0.5);
        let mut drag = DragHelper::default();

        let start = press(&mut slider, &mut drag, Point::new(55.0, 10.0));
        assert_eq!(start, None, "grabbing the knob does not move it");

        let change = drag
            .handle(&mut slider, PointerInput::Moved(Point::new(75.0, 10.0)))
            .expect("drag should move the knob");

        assert!((change.value - 0.7).abs() < 1e-6);
        assert!(change.is_dragging);
    }

    #[test]
    fn given_drag_when_released_then_emits_final_change() {
        let mut slider = horizontal();
        let mut drag = DragHelper::default();
        press(&mut slider, &mut drag, Point::new(58.0, 10.0));

        let end = drag
            .handle(&mut slider, PointerInput::Released)
            .expect("drag end always reports");

        assert!(!end.is_dragging);
        assert_eq!(end.value, 0.5);
    }

    #[test]
    fn given_pointer_past_track_end_when_dragged_then_value_is_clamped() {
        let mut slider = horizontal();
        let mut drag = DragHelper::default();
        press(&mut slider, &mut drag, Point::new(58.0, 10.0));

        drag.handle(&mut slider, PointerInput::Moved(Point::new(500.0, 10.0)));
        assert_eq!(slider.value(), 1.0);
        drag.handle(&mut slider, PointerInput::Moved(Point::new(-500.0, 10.0)));
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn given_vertical_slider_when_track_pressed_then_value_grows_upwards() {
        let mut slider = LinearSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(20.0, 110.0)),
            Size::new(20.0, 10.0),
        )
        .with_direction(SliderDirection::Vertical);
        let mut drag = DragHelper::default();
        assert_eq!(slider.knob_offset(), 100.0);

        let change = press(&mut slider, &mut drag, Point::new(10.0, 28.0))
            .expect("track press moves the knob");

        assert!((change.value - 0.8).abs() < 1e-6);
    }

    #[test]
    fn given_knob_as_large_as_track_when_dragged_then_nothing_changes() {
        let mut slider = LinearSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(10.0, 20.0)),
            Size::new(10.0, 20.0),
        );
        let mut drag = DragHelper::default();

        assert_eq!(press(&mut slider, &mut drag, Point::new(5.0, 5.0)), None);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn given_resize_when_applied_then_value_is_kept_and_knob_moves() {
        let mut slider = horizontal();
        slider.set_value(0.5);

        slider.resize(Rectangle::new(Point::ORIGIN, Size::new(210.0, 20.0)));

        assert_eq!(slider.value(), 0.5);
        assert_eq!(slider.knob_offset(), 100.0);
    }
}
