use iced::{Point, Rectangle, Size, Vector};

/// Fraction of the knob size the pointer lands on when the track is pressed
/// outside the knob.
const TRACK_GRAB_RATIO: f32 = 0.8;

/// Axis a linear slider moves along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SliderDirection {
    #[default]
    Horizontal,
    /// Value 1 at the top, 0 at the bottom.
    Vertical,
}

/// Distance the knob can travel inside the track.
pub(crate) fn travel(track: Rectangle, knob: Size) -> Size {
    Size::new(track.width - knob.width, track.height - knob.height)
}

/// Knob rectangle for a knob offset relative to the track origin.
pub(crate) fn knob_bounds(
    track: Rectangle,
    knob: Size,
    offset: Vector,
) -> Rectangle {
    Rectangle::new(track.position() + offset, knob)
}

/// Grab offset subtracted from the pointer to get the knob position.
///
/// Pressing the knob keeps the pointer where it grabbed the knob; pressing
/// the track puts the pointer slightly inside the knob's far edge.
pub(crate) fn grab_offset(
    pointer: Point,
    track: Rectangle,
    knob: Rectangle,
) -> Vector {
    if knob.contains(pointer) {
        Vector::new(
            pointer.x - (knob.x - track.x),
            pointer.y - (knob.y - track.y),
        )
    } else {
        Vector::new(
            track.x + knob.width * TRACK_GRAB_RATIO,
            track.y + knob.height * TRACK_GRAB_RATIO,
        )
    }
}

/// Normalized position along an axis, `None` when the knob cannot move.
pub(crate) fn normalize(position: f32, extent: f32) -> Option<f32> {
    if extent <= 0.0 || !extent.is_finite() {
        return None;
    }
    Some(clamp_unit(position / extent))
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub(crate) fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
