use iced::widget::{Space, container, mouse_area, sensor, stack};
use iced::{Background, Border, Element, Length, Padding, Size, Theme, Vector, mouse};

use super::SliderEvent;
use super::drag::PointerInput;
use super::geometry::SliderDirection;
use super::linear::LinearSlider;
use super::vector::VectorSlider;

const TRACK_RADIUS: f32 = 3.0;
const KNOB_RADIUS: f32 = 2.0;

/// Render a linear slider whose track spans `length` along its axis.
///
/// Pointer positions are local to the track. The track reports its laid
/// out size as [`SliderEvent::Resized`] whenever it changes.
pub fn linear(slider: &LinearSlider, length: Length) -> Element<'_, SliderEvent> {
    let bounds = slider.bounds().size();
    let (offset, size) = match slider.direction() {
        SliderDirection::Horizontal => (
            Vector::new(slider.knob_offset(), 0.0),
            Size::new(length, Length::Fixed(bounds.height)),
        ),
        SliderDirection::Vertical => (
            Vector::new(0.0, slider.knob_offset()),
            Size::new(Length::Fixed(bounds.width), length),
        ),
    };
    track(size, slider.knob_size(), offset)
}

/// Render a vector slider at the size of its bounds.
pub fn vector(slider: &VectorSlider) -> Element<'_, SliderEvent> {
    let bounds = slider.bounds().size();
    let size = Size::new(Length::Fixed(bounds.width), Length::Fixed(bounds.height));
    track(size, slider.knob_size(), slider.knob_offset())
}

fn track<'a>(
    size: Size<Length>,
    knob: Size,
    offset: Vector,
) -> Element<'a, SliderEvent> {
    let background = container(Space::new().width(Length::Fill))
        .width(size.width)
        .height(size.height)
        .style(track_style);

    let handle = container(
        container(Space::new().width(Length::Fill))
            .width(Length::Fixed(knob.width))
            .height(Length::Fixed(knob.height))
            .style(knob_style),
    )
    .padding(Padding {
        top: offset.y,
        right: 0.0,
        bottom: 0.0,
        left: offset.x,
    })
    .width(size.width)
    .height(size.height);

    let area = mouse_area(stack![background, handle])
        .on_press(SliderEvent::Pointer(PointerInput::Pressed))
        .on_release(SliderEvent::Pointer(PointerInput::Released))
        .on_move(|position| SliderEvent::Pointer(PointerInput::Moved(position)))
        .interaction(mouse::Interaction::Grab);

    sensor(area).on_resize(SliderEvent::Resized).into()
}

fn track_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: TRACK_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn knob_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.primary.base.color)),
        border: Border {
            radius: KNOB_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
