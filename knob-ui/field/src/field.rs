use std::cell::RefCell;
use std::rc::Rc;

use iced::keyboard::key::Named;
use iced::widget::{Id, operation};
use iced::{Point, Task};
use knob_model::{Property, PropertyType, Subscription, Value, option_index};
use knob_ui_controls::popup::{PopupEvent, PopupOptions, PopupSelectEvent};

use crate::format::{edit_text, format_value, parse_number};
use crate::gesture::{Gesture, Modifiers, drag_step, scrub};
use crate::settings::FieldSettings;

/// Inline text editor state.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: Id,
    text: String,
}

impl EditSession {
    fn new(text: String) -> Self {
        Self {
            id: Id::unique(),
            text,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Everything the view needs to draw an idle field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRender {
    pub text: String,
    /// Bar fill in percent, for bounded numbers with the bar flag.
    pub bar_percent: Option<f64>,
    pub event: bool,
    pub option: bool,
}

/// Input accepted by [`PropertyField::update`].
#[derive(Debug, Clone)]
pub enum FieldEvent {
    /// Pointer position in window coordinates.
    CursorMoved(Point),
    ModifiersChanged(Modifiers),
    KeyPressed(Named),
    /// Primary button pressed over the field.
    Pressed,
    /// Primary button released over the field.
    Released,
    /// Primary button released anywhere, or pointer capture lost.
    PointerReleased,
    EditChanged(String),
    EditSubmitted,
    Blurred,
    Popup(PopupEvent),
}

/// Editor for one property value, or one element of an array property.
#[derive(Debug)]
pub struct PropertyField {
    property: Property,
    index: Option<usize>,
    settings: FieldSettings,
    value: Rc<RefCell<Value>>,
    _subscription: Subscription,
    gesture: Gesture,
    modifiers: Modifiers,
    cursor: Point,
    edit: Option<EditSession>,
    menu: Option<PopupOptions>,
}

impl PropertyField {
    pub fn new(
        property: Property,
        index: Option<usize>,
        settings: FieldSettings,
    ) -> Self {
        let value = Rc::new(RefCell::new(current_value(&property, index)));
        let subscription = observe(&property, index, &value);

        Self {
            property,
            index,
            settings,
            value,
            _subscription: subscription,
            gesture: Gesture::default(),
            modifiers: Modifiers::empty(),
            cursor: Point::ORIGIN,
            edit: None,
            menu: None,
        }
    }

    /// Point the field at another property; the old registration is
    /// released and any transient state is dropped.
    pub fn bind(&mut self, property: Property, index: Option<usize>) {
        self.property = property;
        self.index = index;
        self.value = Rc::new(RefCell::new(current_value(&self.property, index)));
        self._subscription = observe(&self.property, index, &self.value);
        self.gesture = Gesture::default();
        self.edit = None;
        self.menu = None;
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Displayed value, as of the last change notification.
    pub fn value(&self) -> Value {
        self.value.borrow().clone()
    }

    /// Re-read the value from the property.
    pub fn sync(&mut self) {
        *self.value.borrow_mut() = current_value(&self.property, self.index);
    }

    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn menu(&self) -> Option<&PopupOptions> {
        self.menu.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active() && self.gesture.is_dragging()
    }

    /// Numbers without options can be scrubbed by dragging.
    pub fn is_scrubbable(&self) -> bool {
        self.property.ty() == PropertyType::Number
            && !self.property.schema().has_options()
    }

    pub fn render(&self) -> FieldRender {
        let schema = self.property.schema();
        let value = self.value.borrow();

        FieldRender {
            text: format_value(schema, &value, self.settings.default_precision),
            bar_percent: value.as_number().and_then(|n| schema.bar_percent(n)),
            event: schema.event,
            option: schema.has_options(),
        }
    }

    pub fn pointer_down(&mut self, at: Point) {
        if self.edit.is_some() || self.menu.is_some() {
            return;
        }
        self.cursor = at;
        self.gesture.press(at, self.is_scrubbable());
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.cursor = at;
        let Some(delta) = self.gesture.motion(at, self.settings.drag_threshold)
        else {
            return;
        };
        let Some(current) = self.value.borrow().as_number() else {
            return;
        };

        let schema = self.property.schema();
        let step = drag_step(schema, &self.settings, self.modifiers);
        self.write(Value::Number(scrub(current, delta, step, schema)));
    }

    /// End the pointer gesture; returns whether it was a drag.
    pub fn pointer_up(&mut self) -> bool {
        if !self.gesture.is_active() {
            return false;
        }
        let dragged = self.gesture.release();
        if dragged {
            log::debug!("field `{}` scrub ended", self.property.key());
        }
        dragged
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Click action: option menu, editor, or boolean toggle.
    pub fn click(&mut self) {
        if self.gesture.is_dragging() || self.edit.is_some() || self.menu.is_some()
        {
            return;
        }

        let schema = self.property.schema();
        if let Some(options) = schema.options.as_ref() {
            let mut menu = PopupOptions::new(options.clone());
            let current = self.value.borrow().as_number().unwrap_or_default();
            if let Some(index) = option_index(current, options.len()) {
                menu = menu.with_selection(index);
            }
            menu.place(self.cursor);
            self.menu = Some(menu);
            return;
        }

        match self.property.ty() {
            PropertyType::Number | PropertyType::String => self.start_editing(),
            PropertyType::Boolean => {
                let flag = self.value.borrow().as_bool().unwrap_or_default();
                self.write(Value::Boolean(!flag));
            },
            PropertyType::Object => {},
        }
    }

    pub fn start_editing(&mut self) {
        if self.edit.is_some() {
            return;
        }
        let text = edit_text(&self.value.borrow(), self.settings.edit_precision);
        log::debug!("field `{}` editing started", self.property.key());
        self.edit = Some(EditSession::new(text));
    }

    pub fn set_edit_text(&mut self, text: String) {
        if let Some(edit) = self.edit.as_mut() {
            edit.text = text;
        }
    }

    /// Close the editor, writing its text back when `commit` is set.
    pub fn stop_editing(&mut self, commit: bool) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        if !commit {
            return;
        }

        let value = match self.property.ty() {
            PropertyType::Number => {
                let parsed = parse_number(&edit.text);
                Value::Number(self.property.schema().clamp(parsed))
            },
            _ => Value::String(edit.text),
        };
        self.write(value);
    }

    /// Focus left the field: commit any edit and close the menu.
    pub fn blur(&mut self) {
        self.stop_editing(true);
        if let Some(mut menu) = self.menu.take() {
            menu.click(None);
        }
    }

    pub fn select_option(&mut self, event: PopupSelectEvent) {
        self.write(Value::Number(event.index as f64));
    }

    pub fn update(&mut self, event: FieldEvent) -> Task<FieldEvent> {
        match event {
            FieldEvent::CursorMoved(position) => self.pointer_move(position),
            FieldEvent::ModifiersChanged(modifiers) => self.set_modifiers(modifiers),
            FieldEvent::KeyPressed(key) => self.key_pressed(key),
            FieldEvent::Pressed => self.pointer_down(self.cursor),
            FieldEvent::Released => {
                self.pointer_up();
                if self.gesture.take_click() {
                    self.click();
                    if let Some(edit) = self.edit.as_ref() {
                        return operation::focus(edit.id.clone());
                    }
                }
            },
            FieldEvent::PointerReleased => {
                self.pointer_up();
            },
            FieldEvent::EditChanged(text) => self.set_edit_text(text),
            FieldEvent::EditSubmitted => self.stop_editing(true),
            FieldEvent::Blurred => self.blur(),
            FieldEvent::Popup(event) => self.popup(event),
        }

        Task::none()
    }

    fn key_pressed(&mut self, key: Named) {
        if self.menu.is_some() {
            let event = match key {
                Named::ArrowDown => PopupEvent::FocusNext,
                Named::ArrowUp => PopupEvent::FocusPrevious,
                Named::Enter => PopupEvent::ActivateFocused,
                Named::Escape => PopupEvent::Dismissed,
                _ => return,
            };
            self.popup(event);
        } else if self.edit.is_some() && key == Named::Escape {
            self.stop_editing(false);
        }
    }

    fn popup(&mut self, event: PopupEvent) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        let selection = menu.update(event);
        if menu.is_closed() {
            self.menu = None;
        }
        if let Some(selection) = selection {
            self.select_option(selection);
        }
    }

    fn write(&self, value: Value) {
        let result = match self.index {
            Some(index) => self.property.set_element(index, value),
            None => self.property.set_value(value),
        };
        if let Err(err) = result {
            log::warn!("field write rejected: {err}");
        }
    }
}

fn current_value(property: &Property, index: Option<usize>) -> Value {
    match index {
        Some(index) => property.element(index).unwrap_or_else(|| property.value()),
        None => property.value(),
    }
}

fn observe(
    property: &Property,
    index: Option<usize>,
    cache: &Rc<RefCell<Value>>,
) -> Subscription {
    let cache = Rc::clone(cache);
    property.subscribe(move |value| {
        let next = match index {
            Some(index) => value.element(index).cloned(),
            None => Some(value.clone()),
        };
        if let Some(next) = next {
            *cache.borrow_mut() = next;
        }
    })
}
