use iced::{Subscription, event, mouse, window};

use super::{App, Event};

pub(super) fn subscription(_app: &App) -> Subscription<Event> {
    let win_subs = window::events().map(|(_id, event)| Event::Window(event));
    let key_subs = iced::keyboard::listen().map(Event::Keyboard);
    let pointer_subs = event::listen_with(pointer_event);

    Subscription::batch(vec![win_subs, key_subs, pointer_subs])
}

/// Cursor motion and primary releases anywhere in the window, so drags
/// keep tracking once the pointer leaves the pressed control. Primary
/// presses are forwarded only when no widget captured them.
fn pointer_event(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Event> {
    let iced::Event::Mouse(mouse_event) = event else {
        return None;
    };

    let forward = match mouse_event {
        mouse::Event::CursorMoved { .. }
        | mouse::Event::ButtonReleased(mouse::Button::Left) => true,
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            status == event::Status::Ignored
        },
        _ => false,
    };
    forward.then_some(Event::Pointer(mouse_event))
}
