use iced::{Point, Vector};

/// Control that can be dragged with the pointer.
pub trait DragTarget {
    type Change;

    /// Whether a press at `pointer` starts a drag.
    fn accepts(&self, pointer: Point) -> bool;

    fn drag_start(&mut self, pointer: Point) -> Option<Self::Change>;

    fn drag_move(&mut self, pointer: Point) -> Option<Self::Change>;

    fn drag_end(&mut self, pointer: Point) -> Option<Self::Change>;
}

/// Raw pointer input fed to a [`DragHelper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Cursor position local to the control.
    Moved(Point),
    /// Cursor position in window coordinates, seen wherever the cursor is.
    WindowMoved(Point),
    Pressed,
    Released,
    /// Pointer capture was lost, e.g. the window lost focus.
    Cancelled,
}

/// Turns pointer input into drag start, move and end calls.
///
/// Pressed and released events carry no position, so the helper remembers
/// the last cursor position it saw. Window positions keep a drag moving
/// after the cursor has left the control: the control origin is taken at
/// press time from the last local and window positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragHelper {
    active: bool,
    cursor: Option<Point>,
    window: Option<Point>,
    origin: Option<Vector>,
}

impl DragHelper {
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn handle<T: DragTarget>(
        &mut self,
        target: &mut T,
        input: PointerInput,
    ) -> Option<T::Change> {
        match input {
            PointerInput::Moved(position) => {
                self.cursor = Some(position);
                if self.active {
                    target.drag_move(position)
                } else {
                    None
                }
            },
            PointerInput::WindowMoved(position) => {
                self.window = Some(position);
                if !self.active {
                    return None;
                }
                let local = position - self.origin?;
                self.cursor = Some(local);
                target.drag_move(local)
            },
            PointerInput::Pressed => {
                let cursor = self.cursor?;
                if self.active || !target.accepts(cursor) {
                    return None;
                }
                self.active = true;
                self.origin = self.window.map(|window| window - cursor);
                target.drag_start(cursor)
            },
            PointerInput::Released | PointerInput::Cancelled => {
                if !self.active {
                    return None;
                }
                self.active = false;
                self.origin = None;
                let cursor = self.cursor?;
                target.drag_end(cursor)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Point;

    use super::{DragHelper, DragTarget, PointerInput};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DragTarget for Recorder {
        type Change = String;

        fn accepts(&self, pointer: Point) -> bool {
            pointer.x >= 0.0
        }

        fn drag_start(&mut self, pointer: Point) -> Option<String> {
            self.calls.push(format!("start:{}", pointer.x));
            self.calls.last().cloned()
        }

        fn drag_move(&mut self, pointer: Point) -> Option<String> {
            self.calls.push(format!("move:{}", pointer.x));
            self.calls.last().cloned()
        }

        fn drag_end(&mut self, pointer: Point) -> Option<String> {
            self.calls.push(format!("end:{}", pointer.x));
            self.calls.last().cloned()
        }
    }

    #[test]
    fn given_press_move_release_when_handled_then_drag_lifecycle_runs() {
        let mut target = Recorder::default();
        let mut drag = DragHelper::default();

        drag.handle(&mut target, PointerInput::Moved(Point::new(1.0, 0.0)));
        drag.handle(&mut target, PointerInput::Pressed);
        assert!(drag.is_dragging());
        drag.handle(&mut target, PointerInput::Moved(Point::new(2.0, 0.0)));
        drag.handle(&mut target, PointerInput::Released);

        assert!(!drag.is_dragging());
        assert_eq!(target.calls, vec!["start:1", "move:2", "end:2"]);
    }

    #[test]
    fn given_no_drag_when_moved_or_released_then_target_not_called() {
        let mut target = Recorder::default();
        let mut drag = DragHelper::default();

        drag.handle(&mut target, PointerInput::Moved(Point::new(3.0, 0.0)));
        assert_eq!(drag.handle(&mut target, PointerInput::Released), None);
        assert_eq!(drag.handle(&mut target, PointerInput::Cancelled), None);

        assert!(target.calls.is_empty());
        assert_eq!(drag.cursor(), Some(Point::new(3.0, 0.0)));
    }

    #[test]
    fn given_drag_when_cursor_leaves_control_then_window_motion_drives_it() {
        let mut target = Recorder::default();
        let mut drag = DragHelper::default();

        drag.handle(&mut target, PointerInput::WindowMoved(Point::new(105.0, 40.0)));
        drag.handle(&mut target, PointerInput::Moved(Point::new(5.0, 0.0)));
        drag.handle(&mut target, PointerInput::Pressed);
        drag.handle(&mut target, PointerInput::WindowMoved(Point::new(400.0, 90.0)));
        drag.handle(&mut target, PointerInput::Released);

        assert_eq!(target.calls, vec!["start:5", "move:300", "end:300"]);
        assert_eq!(drag.cursor(), Some(Point::new(300.0, 50.0)));
    }

    #[test]
    fn given_no_drag_when_window_motion_seen_then_target_not_called() {
        let mut target = Recorder::default();
        let mut drag = DragHelper::default();

        drag.handle(&mut target, PointerInput::WindowMoved(Point::new(9.0, 9.0)));

        assert!(target.calls.is_empty());
        assert_eq!(drag.cursor(), None);
    }

    #[test]
    fn given_rejected_press_when_handled_then_no_drag_starts() {
        let mut target = Recorder::default();
        let mut drag = DragHelper::default();

        assert_eq!(drag.handle(&mut target, PointerInput::Pressed), None);
        drag.handle(&mut target, PointerInput::Moved(Point::new(-1.0, 0.0)));
        assert_eq!(drag.handle(&mut target, PointerInput::Pressed), None);

        assert!(!drag.is_dragging());
        assert!(target.calls.is_empty());
    }
}
