use iced::keyboard::{self, Key};
use iced::{Task, mouse, window};
use knob_ui_controls::radio::RadioEvent;
use knob_ui_controls::slider::{PointerInput, SliderEvent};
use knob_ui_field::{FieldEvent, Modifiers};
use knob_ui_tree::property::PropertyTreeEvent;

use super::{App, Event};
use crate::settings::InspectorKind;
use crate::widgets::controls::ControlsEvent;
use crate::widgets::selection;

pub(super) fn update(app: &mut App, event: Event) -> Task<Event> {
    if presses_outside_fields(&event) {
        dismiss_fields(app);
    }

    match event {
        Event::Selection(event) => {
            selection::apply(&app.scene, event, &app.controller, &app.selection);
            sync_trees(app);
        },
        Event::Inspector { kind, event } => select_inspector(app, kind, event),
        Event::EcsTree(event) => {
            if is_field_press(&event) {
                app.graph_tree.dismiss();
            }
            return app.ecs_tree.update(event).map(Event::EcsTree);
        },
        Event::GraphTree(event) => {
            if is_field_press(&event) {
                app.ecs_tree.dismiss();
            }
            return app.graph_tree.update(event).map(Event::GraphTree);
        },
        Event::Controls(event) => app.controls.update(event),
        Event::Keyboard(event) => keyboard_event(app, event),
        Event::Pointer(event) => pointer_event(app, event),
        Event::Window(window::Event::Unfocused) => {
            release_pointer(app, PointerInput::Cancelled);
        },
        Event::Window(_) => {},
    }

    Task::none()
}

/// Presses that land on something other than a property field. Tree rows
/// dismiss their own fields on select and toggle.
fn presses_outside_fields(event: &Event) -> bool {
    match event {
        Event::Selection(_) | Event::Inspector { .. } => true,
        Event::Controls(ControlsEvent::Snap(_)) => true,
        Event::Controls(
            ControlsEvent::Horizontal(slider)
            | ControlsEvent::Vertical(slider)
            | ControlsEvent::Pad(slider),
        ) => *slider == SliderEvent::Pointer(PointerInput::Pressed),
        Event::Pointer(mouse::Event::ButtonPressed(mouse::Button::Left)) => true,
        _ => false,
    }
}

fn is_field_press(event: &PropertyTreeEvent) -> bool {
    matches!(
        event,
        PropertyTreeEvent::Field {
            event: FieldEvent::Pressed,
            ..
        }
    )
}

fn dismiss_fields(app: &mut App) {
    app.ecs_tree.dismiss();
    app.graph_tree.dismiss();
}

fn sync_trees(app: &mut App) {
    if app.ecs_tree.sync() {
        log::debug!("entity inspector rebuilt");
    }
    if app.graph_tree.sync() {
        log::debug!("graph inspector rebuilt");
    }
}

fn select_inspector(app: &mut App, kind: InspectorKind, event: RadioEvent) {
    for (candidate, radio) in &mut app.inspectors {
        if *candidate == kind {
            let change = radio.update(event.clone());
            if !change.checked {
                radio.set_checked(true);
            }
        } else {
            radio.set_checked(false);
        }
    }

    if app.settings.inspector() == kind {
        return;
    }
    app.settings.set_inspector(kind);
    if let Err(err) = app.store.save(&app.settings) {
        log::warn!("settings save failed: {err}");
    }
}

fn keyboard_event(app: &mut App, event: keyboard::Event) {
    match event {
        keyboard::Event::ModifiersChanged(modifiers) => {
            let modifiers = Modifiers::from(modifiers);
            app.ecs_tree.modifiers_changed(modifiers);
            app.graph_tree.modifiers_changed(modifiers);
        },
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        } => {
            app.ecs_tree.key_pressed(named);
            app.graph_tree.key_pressed(named);
        },
        _ => {},
    }
}

fn pointer_event(app: &mut App, event: mouse::Event) {
    match event {
        mouse::Event::CursorMoved { position } => {
            app.ecs_tree.cursor_moved(position);
            app.graph_tree.cursor_moved(position);
            app.controls.cursor_moved(position);
        },
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            release_pointer(app, PointerInput::Released);
        },
        _ => {},
    }
}

fn release_pointer(app: &mut App, input: PointerInput) {
    app.ecs_tree.pointer_released();
    app.graph_tree.pointer_released();
    app.controls.release_all(input);
}
