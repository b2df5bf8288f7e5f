use iced::widget::{Space, column, container, mouse_area, stack, text, text_input};
use iced::{Background, Border, Element, Length, Theme, alignment, mouse};
use knob_ui_controls::popup;

use crate::field::{FieldEvent, FieldRender, PropertyField};

const FIELD_HEIGHT: f32 = 20.0;
const FIELD_FONT_SIZE: f32 = 12.0;
const FIELD_PADDING_X: f32 = 4.0;

/// Render a field: the inline editor while editing, the formatted value
/// otherwise, with its option menu underneath when open.
pub fn view(field: &PropertyField) -> Element<'_, FieldEvent> {
    let width = field.settings().width;

    let content: Element<'_, FieldEvent> = match field.edit() {
        Some(edit) => text_input("", edit.text())
            .id(edit.id().clone())
            .on_input(FieldEvent::EditChanged)
            .on_submit(FieldEvent::EditSubmitted)
            .size(FIELD_FONT_SIZE)
            .padding([0.0, FIELD_PADDING_X])
            .width(Length::Fixed(width))
            .into(),
        None => idle(field.render(), width, field.is_scrubbable()),
    };

    match field.menu() {
        Some(menu) => column![content, popup::view(menu).map(FieldEvent::Popup)]
            .width(Length::Fixed(width))
            .into(),
        None => content,
    }
}

fn idle<'a>(
    render: FieldRender,
    width: f32,
    scrubbable: bool,
) -> Element<'a, FieldEvent> {
    let bar = render.bar_percent.map(|percent| {
        container(Space::new().width(Length::Fill))
            .width(Length::Fixed(width * (percent as f32) / 100.0))
            .height(Length::Fill)
            .style(bar_style)
    });

    let label = text(render.text)
        .size(FIELD_FONT_SIZE)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);
    let label = container(label).padding([0.0, FIELD_PADDING_X]);

    let layers = match bar {
        Some(bar) => stack![bar, label],
        None => stack![label],
    };

    let (event, option) = (render.event, render.option);
    let body = container(layers)
        .width(Length::Fixed(width))
        .height(Length::Fixed(FIELD_HEIGHT))
        .clip(true)
        .style(move |theme| field_style(theme, event, option));

    let interaction = if scrubbable {
        mouse::Interaction::ResizingHorizontally
    } else {
        mouse::Interaction::Pointer
    };

    mouse_area(body)
        .on_press(FieldEvent::Pressed)
        .on_release(FieldEvent::Released)
        .interaction(interaction)
        .into()
}

fn field_style(theme: &Theme, event: bool, option: bool) -> container::Style {
    let palette = theme.extended_palette();
    let text_color = if event {
        palette.danger.base.color
    } else if option {
        palette.primary.strong.color
    } else {
        palette.background.base.text
    };

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(text_color),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.primary.weak.color)),
        ..Default::default()
    }
}
