use iced::widget::{Row, container, text};
use iced::{Alignment, Background, Element, Length, Theme};
use knob_ui_field::PropertyField;

use super::node::PropertyTreeNode;
use super::source::SelectionSource;
use super::tree::{PropertyTree, PropertyTreeEvent};
use crate::model::TreeNode;
use crate::view::{TreeMetrics, TreeRowContext, TreeView};

const ROW_SPACING: f32 = 1.0;
const INDENT_WIDTH: f32 = 12.0;
const MARKER_WIDTH: f32 = 14.0;
const LABEL_WIDTH: f32 = 110.0;
const FONT_SIZE: f32 = 12.0;

/// Render a property tree: one row per visible node, with the node text and
/// the fields of its property.
pub fn view<'a, S: SelectionSource>(
    tree: &'a PropertyTree<S>,
    theme: &Theme,
) -> Element<'a, PropertyTreeEvent> {
    let palette = *theme.extended_palette();

    TreeView::new(tree.visible_nodes(), move |context| row(tree, context))
        .selected(tree.selected())
        .hovered(tree.hovered())
        .on_press(PropertyTreeEvent::Select)
        .on_hover(PropertyTreeEvent::Hover)
        .on_toggle(PropertyTreeEvent::Toggle)
        .marker(|context| {
            let node = context.entry.node;
            let arrow = match (node.is_folder(), node.expanded()) {
                (false, _) => "",
                (true, true) => "▾",
                (true, false) => "▸",
            };
            text(arrow).size(FONT_SIZE).into()
        })
        .style(move |context| row_style(&palette, context))
        .metrics(TreeMetrics {
            indent: INDENT_WIDTH,
            marker: MARKER_WIDTH,
            spacing: ROW_SPACING,
        })
        .view()
}

fn row<'a, S: SelectionSource>(
    tree: &'a PropertyTree<S>,
    context: &TreeRowContext<'a, PropertyTreeNode>,
) -> Element<'a, PropertyTreeEvent> {
    let node = context.entry.node;
    let label = text(node.text()).size(FONT_SIZE);

    let fields = tree.fields(&context.entry.path);
    if fields.is_empty() {
        return container(label).width(Length::Fill).into();
    }

    let mut row = Row::new()
        .spacing(2.0)
        .align_y(Alignment::Center)
        .push(container(label).width(Length::Fixed(LABEL_WIDTH)));

    for (slot, field) in fields.iter().enumerate() {
        row = row.push(field_view(&context.entry.path, slot, field));
    }

    row.into()
}

fn field_view<'a>(
    path: &[String],
    slot: usize,
    field: &'a PropertyField,
) -> Element<'a, PropertyTreeEvent> {
    let path = path.to_vec();
    knob_ui_field::view(field).map(move |event| PropertyTreeEvent::Field {
        path: path.clone(),
        slot,
        event,
    })
}

fn row_style(
    palette: &iced::theme::palette::Extended,
    context: &TreeRowContext<'_, PropertyTreeNode>,
) -> container::Style {
    let node = context.entry.node;
    let background = if context.is_selected {
        Some(palette.primary.weak.color)
    } else if node.has_class("entity")
        || node.has_class("node")
        || node.has_class("component")
    {
        Some(palette.background.strong.color)
    } else if context.is_hovered {
        Some(palette.background.weak.color)
    } else {
        None
    };

    let text_color = if context.is_selected {
        palette.primary.weak.text
    } else {
        palette.background.base.text
    };

    container::Style {
        background: background.map(Background::Color),
        text_color: Some(text_color),
        ..Default::default()
    }
}
