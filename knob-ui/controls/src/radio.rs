//! Labelled check toggle.

use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Background, Border, Element, Length, Theme};

const MARK_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const SPACING: f32 = 8.0;

/// Reported when the checked state flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioChange {
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioEvent {
    Pressed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioButton {
    label: String,
    checked: bool,
}

impl RadioButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) -> RadioChange {
        self.checked = !self.checked;
        RadioChange {
            checked: self.checked,
        }
    }

    pub fn update(&mut self, event: RadioEvent) -> RadioChange {
        match event {
            RadioEvent::Pressed => self.toggle(),
        }
    }

    pub fn view(&self) -> Element<'_, RadioEvent> {
        let checked = self.checked;
        let mark = container(Space::new().width(Length::Fill))
            .width(Length::Fixed(MARK_SIZE))
            .height(Length::Fixed(MARK_SIZE))
            .style(move |theme| mark_style(theme, checked));

        let content = row![mark, text(self.label.as_str()).size(LABEL_FONT_SIZE)]
            .spacing(SPACING)
            .align_y(Alignment::Center);

        button(content)
            .padding(0)
            .style(|_, _: ButtonStatus| button::Style::default())
            .on_press(RadioEvent::Pressed)
            .into()
    }
}

fn mark_style(theme: &Theme, checked: bool) -> container::Style {
    let palette = theme.extended_palette();
    let color = if checked {
        palette.primary.base.color
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
