use bitflags::bitflags;
use iced::Point;
use knob_model::Schema;

use crate::settings::FieldSettings;

bitflags! {
    /// Modifier keys that scale the scrub step.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Ctrl: ten times finer steps.
        const FINE   = 1;
        /// Shift: ten times coarser steps.
        const COARSE = 1 << 1;
    }
}

impl From<iced::keyboard::Modifiers> for Modifiers {
    fn from(value: iced::keyboard::Modifiers) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::FINE, value.control());
        modifiers.set(Modifiers::COARSE, value.shift());
        modifiers
    }
}

/// Pointer gesture on a field, from press to release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Gesture {
    active: bool,
    scrubbable: bool,
    dragging: bool,
    clickable: bool,
    start: Point,
    last: Point,
}

impl Gesture {
    /// Begin a gesture. Only scrubbable gestures can turn into drags.
    pub(crate) fn press(&mut self, at: Point, scrubbable: bool) {
        *self = Gesture {
            active: true,
            scrubbable,
            dragging: false,
            clickable: true,
            start: at,
            last: at,
        };
    }

    /// Consume the pending click of the last press; a drag swallows it.
    pub(crate) fn take_click(&mut self) -> bool {
        let click = self.clickable && !self.dragging;
        self.clickable = false;
        click
    }

    /// Track pointer motion; returns the scrub delta once dragging.
    pub(crate) fn motion(&mut self, at: Point, threshold: f32) -> Option<f32> {
        if !self.active || !self.scrubbable {
            return None;
        }

        if !self.dragging {
            let distance = (at.x - self.start.x).abs() + (at.y - self.start.y).abs();
            if distance > threshold {
                log::debug!("field scrub started after {distance:.1}px");
                self.dragging = true;
            }
        }

        let delta = self.dragging.then(|| {
            let dx = at.x - self.last.x;
            let dy = at.y - self.last.y;
            dx - dy
        });
        self.last = at;
        delta
    }

    /// End the gesture; returns whether it was a drag.
    ///
    /// The drag flag survives until the next press so the click that follows
    /// a drag can be suppressed.
    pub(crate) fn release(&mut self) -> bool {
        self.active = false;
        self.dragging
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Value change per pixel of scrub motion.
pub fn drag_step(
    schema: &Schema,
    settings: &FieldSettings,
    modifiers: Modifiers,
) -> f64 {
    let mut step = match (schema.step, schema.bounds()) {
        (Some(step), _) if step != 0.0 && step.is_finite() => step,
        (_, Some((min, max))) if settings.width > 0.0 => {
            (max - min) / f64::from(settings.width)
        },
        _ => settings.default_step,
    };

    if modifiers.contains(Modifiers::FINE) {
        step *= settings.fine_factor;
    }
    if modifiers.contains(Modifiers::COARSE) {
        step *= settings.coarse_factor;
    }
    step
}

/// Apply a scrub delta and clamp into the schema bounds.
pub fn scrub(value: f64, delta: f32, step: f64, schema: &Schema) -> f64 {
    schema.clamp(value + f64::from(delta) * step)
}

#[cfg(test)]
mod tests {
    use iced::Point;
    use knob_model::Schema;

    use super::{Gesture, Modifiers, drag_step, scrub};
    use crate::settings::FieldSettings;

    #[test]
    fn given_small_motion_when_tracked_then_gesture_stays_a_click() {
        let mut gesture = Gesture::default();
        gesture.press(Point::new(10.0, 10.0), true);

        assert_eq!(gesture.motion(Point::new(11.0, 11.0), 2.0), None);
        assert!(!gesture.release());
        assert!(gesture.take_click());
        assert!(!gesture.take_click(), "a press yields one click");
    }

    #[test]
    fn given_motion_past_threshold_when_tracked_then_delta_is_dx_minus_dy() {
        let mut gesture = Gesture::default();
        gesture.press(Point::new(10.0, 10.0), true);

        let first = gesture.motion(Point::new(13.0, 10.0), 2.0);
        let second = gesture.motion(Point::new(15.0, 7.0), 2.0);

        assert_eq!(first, Some(3.0));
        assert_eq!(second, Some(5.0));
        assert!(gesture.release());
        assert!(gesture.is_dragging());
        assert!(!gesture.is_active());
        assert!(!gesture.take_click(), "a drag swallows the click");
    }

    #[test]
    fn given_non_scrubbable_press_when_moved_then_never_drags() {
        let mut gesture = Gesture::default();
        gesture.press(Point::ORIGIN, false);

        assert_eq!(gesture.motion(Point::new(50.0, 0.0), 2.0), None);
        assert!(!gesture.release());
    }

    #[test]
    fn given_schema_when_step_derived_then_step_bounds_or_default_apply() {
        let settings = FieldSettings::default().with_width(100.0);

        let explicit = Schema::new().with_step(0.5).with_range(0.0, 10.0);
        let bounded = Schema::new().with_range(0.0, 10.0);

        assert_eq!(drag_step(&explicit, &settings, Modifiers::empty()), 0.5);
        assert_eq!(drag_step(&bounded, &settings, Modifiers::empty()), 0.1);
        assert_eq!(drag_step(&Schema::new(), &settings, Modifiers::empty()), 0.1);
    }

    #[test]
    fn given_modifiers_when_step_derived_then_step_is_scaled() {
        let settings = FieldSettings::default();
        let schema = Schema::new().with_step(1.0);

        let fine = drag_step(&schema, &settings, Modifiers::FINE);
        let coarse = drag_step(&schema, &settings, Modifiers::COARSE);

        assert!((fine - 0.1).abs() < 1e-12);
        assert_eq!(coarse, 10.0);
    }

    #[test]
    fn given_scrub_past_max_when_reversed_then_moves_from_boundary() {
        let schema = Schema::new().with_range(0.0, 1.0);

        let pinned = scrub(0.9, 50.0, 0.1, &schema);
        let back = scrub(pinned, -2.0, 0.1, &schema);

        assert_eq!(pinned, 1.0);
        assert!((back - 0.8).abs() < 1e-12);
    }

    #[test]
    fn given_iced_modifiers_when_converted_then_ctrl_and_shift_map() {
        let iced = iced::keyboard::Modifiers::CTRL | iced::keyboard::Modifiers::SHIFT;

        assert_eq!(Modifiers::from(iced), Modifiers::FINE | Modifiers::COARSE);
        assert_eq!(
            Modifiers::from(iced::keyboard::Modifiers::ALT),
            Modifiers::empty()
        );
    }
}
