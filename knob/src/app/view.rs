use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Element, Length, Theme};
use knob_ui_tree::property;

use super::{App, Event};
use crate::settings::InspectorKind;
use crate::widgets::selection;

const PANEL_PADDING: f32 = 12.0;
const PANEL_SPACING: f32 = 12.0;
const HEADING_SIZE: f32 = 14.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let kind = app.settings.inspector();

    let scene = column![
        text("Scene").size(HEADING_SIZE),
        scrollable(selection::view(&app.scene, kind).map(Event::Selection))
            .height(Length::Fill),
    ]
    .spacing(8);

    let content = row![
        scene,
        inspector(app, kind),
        app.controls.view().map(Event::Controls),
    ]
    .spacing(PANEL_SPACING);

    container(content)
        .padding(PANEL_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn inspector(app: &App, kind: InspectorKind) -> Element<'_, Event> {
    let theme = app.theme();

    let switches = app.inspectors.iter().fold(
        row![].spacing(PANEL_SPACING),
        |switches, (candidate, radio)| {
            let candidate = *candidate;
            switches.push(radio.view().map(move |event| Event::Inspector {
                kind: candidate,
                event,
            }))
        },
    );

    let tree = match kind {
        InspectorKind::Ecs => {
            property::view(&app.ecs_tree, &theme).map(Event::EcsTree)
        },
        InspectorKind::Graph => {
            property::view(&app.graph_tree, &theme).map(Event::GraphTree)
        },
    };

    Column::new()
        .push(text("Inspector").size(HEADING_SIZE))
        .push(switches)
        .push(scrollable(tree).height(Length::Fill))
        .spacing(8)
        .width(Length::FillPortion(2))
        .into()
}
