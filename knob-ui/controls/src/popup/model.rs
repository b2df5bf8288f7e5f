use iced::Point;

/// Selection emitted when a valid option button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupSelectEvent {
    pub index: usize,
    pub option: String,
}

/// Input accepted by [`PopupOptions::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupEvent {
    /// A button was clicked.
    Pressed(usize),
    /// A click landed outside every button.
    Dismissed,
    FocusNext,
    FocusPrevious,
    /// Keyboard activation of the focused button.
    ActivateFocused,
}

/// Lifecycle of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    /// Created but not yet placed; rendered invisible.
    Hidden,
    Shown,
    /// Closed after a click; never shown again.
    Closed,
}

/// Transient list-of-buttons menu.
#[derive(Debug, Clone)]
pub struct PopupOptions {
    options: Vec<String>,
    selection_index: Option<usize>,
    focus: Option<usize>,
    anchor: Point,
    state: PopupState,
}

impl PopupOptions {
    pub fn new(options: Vec<String>) -> Self {
        let focus = (!options.is_empty()).then_some(0);
        Self {
            options,
            selection_index: None,
            focus,
            anchor: Point::ORIGIN,
            state: PopupState::Hidden,
        }
    }

    /// Pre-select a button; focus moves to it.
    pub fn with_selection(mut self, index: usize) -> Self {
        self.selection_index = Some(index);
        self.focus = self.initial_focus();
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selection_index(&self) -> Option<usize> {
        self.selection_index
    }

    /// Button holding keyboard focus: the selected one, or the first.
    pub fn focused_index(&self) -> Option<usize> {
        self.focus
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Place the popup and make it visible.
    pub fn place(&mut self, anchor: Point) {
        if self.state == PopupState::Closed {
            return;
        }
        self.anchor = anchor;
        self.state = PopupState::Shown;
    }

    pub fn is_visible(&self) -> bool {
        self.state == PopupState::Shown
    }

    pub fn is_closed(&self) -> bool {
        self.state == PopupState::Closed
    }

    /// Handle a click on button `target` (`None` for a miss).
    ///
    /// Emits a selection only for an index inside the options list. Any
    /// click closes the popup; a closed popup ignores further clicks.
    pub fn click(&mut self, target: Option<usize>) -> Option<PopupSelectEvent> {
        if self.is_closed() {
            return None;
        }
        self.state = PopupState::Closed;

        let index = target?;
        let option = self.options.get(index)?;
        log::debug!("popup option selected: {index} ({option})");
        Some(PopupSelectEvent {
            index,
            option: option.clone(),
        })
    }

    pub fn update(&mut self, event: PopupEvent) -> Option<PopupSelectEvent> {
        match event {
            PopupEvent::Pressed(index) => self.click(Some(index)),
            PopupEvent::Dismissed => self.click(None),
            PopupEvent::FocusNext => {
                self.move_focus(1);
                None
            },
            PopupEvent::FocusPrevious => {
                self.move_focus(-1);
                None
            },
            PopupEvent::ActivateFocused => self.click(self.focus),
        }
    }

    fn initial_focus(&self) -> Option<usize> {
        let index = self.selection_index.unwrap_or(0);
        (index < self.options.len()).then_some(index)
    }

    fn move_focus(&mut self, step: isize) {
        if self.is_closed() || self.options.is_empty() {
            return;
        }
        let len = self.options.len() as isize;
        let current = self.focus.map_or(0, |index| index as isize);
        let next = (current + step).rem_euclid(len);
        self.focus = Some(next as usize);
    }
}
