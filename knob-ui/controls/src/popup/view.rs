use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Column, Space, button, container, text};
use iced::{Element, Length, Theme, alignment};

use super::model::{PopupEvent, PopupOptions};

const OPTION_HEIGHT: f32 = 22.0;
const OPTION_FONT_SIZE: f32 = 13.0;
const OPTION_HORIZONTAL_PADDING: f32 = 8.0;
const POPUP_PADDING: f32 = 2.0;

/// Render the popup as a column of option buttons.
///
/// A popup that is not shown renders as an empty space.
pub fn view(popup: &PopupOptions) -> Element<'_, PopupEvent> {
    if !popup.is_visible() {
        return Space::new().width(Length::Shrink).into();
    }

    let focused = popup.focused_index();
    let buttons = popup.options().iter().enumerate().map(|(index, option)| {
        let is_focused = focused == Some(index);
        let label = text(option.as_str())
            .size(OPTION_FONT_SIZE)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Center);

        button(label)
            .padding([0.0, OPTION_HORIZONTAL_PADDING])
            .width(Length::Fill)
            .height(Length::Fixed(OPTION_HEIGHT))
            .style(move |theme, status| option_style(theme, status, is_focused))
            .on_press(PopupEvent::Pressed(index))
            .into()
    });

    container(Column::with_children(buttons))
        .padding(POPUP_PADDING)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn option_style(
    theme: &Theme,
    status: ButtonStatus,
    focused: bool,
) -> button::Style {
    let palette = theme.extended_palette();
    let active = focused
        || matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let pair = if active {
        palette.primary.weak
    } else {
        palette.background.weak
    };

    button::Style {
        background: Some(pair.color.into()),
        text_color: pair.text,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::widget::button::Status as ButtonStatus;
    use iced::{Background, Theme};

    use super::option_style;

    #[test]
    fn given_focused_option_when_building_style_then_uses_primary_colors() {
        let theme = Theme::Dark;
        let palette = theme.extended_palette();

        let style = option_style(&theme, ButtonStatus::Active, true);

        assert_eq!(style.text_color, palette.primary.weak.text);
        assert_eq!(
            style.background,
            Some(Background::Color(palette.primary.weak.color))
        );
    }

    #[test]
    fn given_idle_option_when_building_style_then_uses_background_colors() {
        let theme = Theme::Dark;
        let palette = theme.extended_palette();

        let style = option_style(&theme, ButtonStatus::Active, false);

        assert_eq!(
            style.background,
            Some(Background::Color(palette.background.weak.color))
        );
    }
}
