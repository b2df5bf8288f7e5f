use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Column, button, text};
use iced::{Background, Element, Length, Theme};
use knob_model::ecs::SelectionController;
use knob_model::graph::Selection;

use crate::scene::Scene;
use crate::settings::InspectorKind;

const ITEM_FONT_SIZE: f32 = 13.0;
const ITEM_INDENT: f32 = 14.0;

/// Scene item picked in the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionEvent {
    Entity(usize),
    EntityComponent { entity: usize, component: usize },
    Node(usize),
    NodeComponent { node: usize, component: usize },
    Clear,
}

/// Forward a pick to the matching selection registry.
pub(crate) fn apply(
    scene: &Scene,
    event: SelectionEvent,
    controller: &SelectionController,
    selection: &Selection,
) {
    match event {
        SelectionEvent::Entity(index) => {
            if let Some(entity) = scene.entities().get(index) {
                controller.select_entity(entity.clone());
            }
        },
        SelectionEvent::EntityComponent { entity, component } => {
            if let Some(component) = scene
                .entities()
                .get(entity)
                .and_then(|entity| entity.components().get(component))
            {
                controller.select_component(component.clone());
            }
        },
        SelectionEvent::Node(index) => {
            if let Some(node) = scene.nodes().get(index) {
                selection.select_node(node.clone());
            }
        },
        SelectionEvent::NodeComponent { node, component } => {
            if let Some(component) = scene
                .nodes()
                .get(node)
                .and_then(|node| node.components().get(component))
            {
                selection.select_component(component.clone());
            }
        },
        SelectionEvent::Clear => {
            controller.clear_selection();
            selection.clear_selection();
        },
    }
}

pub(crate) fn view(scene: &Scene, kind: InspectorKind) -> Element<'_, SelectionEvent> {
    let mut list = Column::new().spacing(2).width(Length::Fixed(180.0));

    match kind {
        InspectorKind::Ecs => {
            for (index, entity) in scene.entities().iter().enumerate() {
                list = list.push(item(entity.display_name(), 0, SelectionEvent::Entity(index)));
                for (component, item_component) in entity.components().iter().enumerate() {
                    list = list.push(item(
                        item_component.display_name(),
                        1,
                        SelectionEvent::EntityComponent {
                            entity: index,
                            component,
                        },
                    ));
                }
            }
        },
        InspectorKind::Graph => {
            for (index, node) in scene.nodes().iter().enumerate() {
                list = list.push(item(node.display_name(), 0, SelectionEvent::Node(index)));
                for (component, item_component) in node.components().iter().enumerate() {
                    list = list.push(item(
                        item_component.display_name(),
                        1,
                        SelectionEvent::NodeComponent {
                            node: index,
                            component,
                        },
                    ));
                }
            }
        },
    }

    list.push(item("Clear selection", 0, SelectionEvent::Clear)).into()
}

fn item(label: &str, depth: u16, event: SelectionEvent) -> Element<'_, SelectionEvent> {
    button(text(label).size(ITEM_FONT_SIZE))
        .width(Length::Fill)
        .padding([2.0, 4.0 + ITEM_INDENT * f32::from(depth)])
        .style(item_style)
        .on_press(event)
        .into()
}

fn item_style(theme: &Theme, status: ButtonStatus) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => Some(palette.background.weak.color),
        _ => None,
    };

    button::Style {
        background: background.map(Background::Color),
        text_color: palette.background.base.text,
        ..Default::default()
    }
}
