use iced::widget::{column, row, text};
use iced::{Element, Length, Point, Rectangle, Size};
use knob_ui_controls::radio::{RadioButton, RadioEvent};
use knob_ui_controls::slider::{
    self, DragHelper, LinearSlider, PointerInput, SliderChange, SliderDirection,
    SliderEvent, VectorSlider,
};

const TRACK_LENGTH: f32 = 160.0;
const TRACK_THICKNESS: f32 = 16.0;
const KNOB_SIZE: Size = Size::new(10.0, 16.0);
const PAD_SIZE: f32 = 96.0;
const PAD_KNOB: Size = Size::new(12.0, 12.0);

#[derive(Debug, Clone)]
pub(crate) enum ControlsEvent {
    Horizontal(SliderEvent),
    Vertical(SliderEvent),
    Pad(SliderEvent),
    Snap(RadioEvent),
}

/// Standalone sliders and a radio toggle, not bound to any property.
#[derive(Debug)]
pub(crate) struct ControlsPanel {
    horizontal: LinearSlider,
    vertical: LinearSlider,
    pad: VectorSlider,
    drags: [DragHelper; 3],
    snap: RadioButton,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        let mut horizontal = LinearSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(TRACK_LENGTH, TRACK_THICKNESS)),
            KNOB_SIZE,
        );
        horizontal.set_value(0.5);

        let vertical = LinearSlider::new(
            Rectangle::new(
                Point::ORIGIN,
                Size::new(TRACK_THICKNESS, TRACK_LENGTH / 2.0),
            ),
            Size::new(KNOB_SIZE.height, KNOB_SIZE.width),
        )
        .with_direction(SliderDirection::Vertical);

        let mut pad = VectorSlider::new(
            Rectangle::new(Point::ORIGIN, Size::new(PAD_SIZE, PAD_SIZE)),
            PAD_KNOB,
        );
        pad.set_xy(0.5, 0.5);

        Self {
            horizontal,
            vertical,
            pad,
            drags: [DragHelper::default(); 3],
            snap: RadioButton::new("Snap to tenths"),
        }
    }
}

impl ControlsPanel {
    pub(crate) fn update(&mut self, event: ControlsEvent) {
        match event {
            ControlsEvent::Horizontal(SliderEvent::Pointer(input)) => {
                let change = self.drags[0].handle(&mut self.horizontal, input);
                self.finish_linear(change, Axis::Horizontal);
            },
            ControlsEvent::Horizontal(SliderEvent::Resized(size)) => {
                self.horizontal.resize(local_bounds(size));
            },
            ControlsEvent::Vertical(SliderEvent::Pointer(input)) => {
                let change = self.drags[1].handle(&mut self.vertical, input);
                self.finish_linear(change, Axis::Vertical);
            },
            ControlsEvent::Vertical(SliderEvent::Resized(size)) => {
                self.vertical.resize(local_bounds(size));
            },
            ControlsEvent::Pad(SliderEvent::Pointer(input)) => {
                if let Some(change) = self.drags[2].handle(&mut self.pad, input) {
                    if !change.is_dragging && self.snap.is_checked() {
                        self.pad.set_xy(snap(change.value.x), snap(change.value.y));
                    }
                }
            },
            ControlsEvent::Pad(SliderEvent::Resized(size)) => {
                self.pad.resize(local_bounds(size));
            },
            ControlsEvent::Snap(event) => {
                let change = self.snap.update(event);
                log::debug!("slider snapping {}", if change.checked { "on" } else { "off" });
            },
        }
    }

    /// End every drag, e.g. when the primary button is released outside a
    /// control or the window loses focus.
    pub(crate) fn release_all(&mut self, input: PointerInput) {
        self.broadcast(input);
    }

    /// Window-wide cursor motion; moves whichever slider is being dragged.
    pub(crate) fn cursor_moved(&mut self, position: Point) {
        self.broadcast(PointerInput::WindowMoved(position));
    }

    fn broadcast(&mut self, input: PointerInput) {
        self.update(ControlsEvent::Horizontal(SliderEvent::Pointer(input)));
        self.update(ControlsEvent::Vertical(SliderEvent::Pointer(input)));
        self.update(ControlsEvent::Pad(SliderEvent::Pointer(input)));
    }

    pub(crate) fn view(&self) -> Element<'_, ControlsEvent> {
        let pad = self.pad.value();
        column![
            text("Controls").size(14),
            row![
                slider::linear_view(&self.horizontal, Length::Fill)
                    .map(ControlsEvent::Horizontal),
                text(format!("{:.2}", self.horizontal.value())).size(12),
            ]
            .spacing(8),
            row![
                slider::linear_view(&self.vertical, Length::Fixed(TRACK_LENGTH / 2.0))
                    .map(ControlsEvent::Vertical),
                text(format!("{:.2}", self.vertical.value())).size(12),
            ]
            .spacing(8),
            row![
                slider::vector_view(&self.pad).map(ControlsEvent::Pad),
                text(format!("{:.2}, {:.2}", pad.x, pad.y)).size(12),
            ]
            .spacing(8),
            self.snap.view().map(ControlsEvent::Snap),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into()
    }

    fn finish_linear(&mut self, change: Option<SliderChange<f32>>, axis: Axis) {
        let Some(change) = change else {
            return;
        };
        if change.is_dragging || !self.snap.is_checked() {
            return;
        }
        let slider = match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        };
        slider.set_value(snap(change.value));
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn local_bounds(size: Size) -> Rectangle {
    Rectangle::new(Point::ORIGIN, size)
}

fn snap(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
