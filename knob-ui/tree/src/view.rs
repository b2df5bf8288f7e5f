use iced::widget::{Column, Space, container, mouse_area, row};
use iced::{Alignment, Element, Length, mouse};

use crate::model::{FlattenedNode, TreeNode, TreePath, flatten_tree};

/// Row handed to [`TreeView`] callbacks.
pub type TreeRow<'a, T> = FlattenedNode<'a, T>;

/// Row plus its selection and hover flags.
pub struct TreeRowContext<'a, T: TreeNode> {
    pub entry: TreeRow<'a, T>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

/// Horizontal layout of tree rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeMetrics {
    /// Extra left inset per depth level.
    pub indent: f32,
    /// Width of the expand marker slot; zero hides the slot.
    pub marker: f32,
    /// Vertical gap between rows.
    pub spacing: f32,
}

impl Default for TreeMetrics {
    fn default() -> Self {
        Self {
            indent: 12.0,
            marker: 14.0,
            spacing: 0.0,
        }
    }
}

type RowContent<'a, T, Message> =
    dyn Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> = dyn Fn(&TreeRowContext<'a, T>) -> container::Style + 'a;
type PathMessage<'a, Message> = dyn Fn(TreePath) -> Message + 'a;
type HoverMessage<'a, Message> = dyn Fn(Option<TreePath>) -> Message + 'a;

/// Messages a row can emit; all optional.
struct RowActions<'a, Message> {
    press: Option<Box<PathMessage<'a, Message>>>,
    hover: Option<Box<HoverMessage<'a, Message>>>,
    toggle: Option<Box<PathMessage<'a, Message>>>,
}

impl<'a, Message: Clone + 'a> RowActions<'a, Message> {
    fn wrap(
        &self,
        content: Element<'a, Message>,
        path: &TreePath,
    ) -> Element<'a, Message> {
        if self.press.is_none() && self.hover.is_none() {
            return content;
        }

        let mut area = mouse_area(content).interaction(mouse::Interaction::Pointer);
        if let Some(press) = &self.press {
            area = area.on_press(press(path.clone()));
        }
        if let Some(hover) = &self.hover {
            area = area.on_enter(hover(Some(path.clone()))).on_exit(hover(None));
        }
        area.into()
    }
}

/// Indented row list over a [`TreeNode`] hierarchy.
///
/// The caller owns expansion, selection and hover state; the view only
/// reports presses, hovers and marker clicks as messages.
pub struct TreeView<'a, T: TreeNode, Message: Clone + 'a> {
    nodes: &'a [T],
    selected: Option<&'a TreePath>,
    hovered: Option<&'a TreePath>,
    metrics: TreeMetrics,
    content: Box<RowContent<'a, T, Message>>,
    marker: Option<Box<RowContent<'a, T, Message>>>,
    style: Option<Box<RowStyle<'a, T>>>,
    actions: RowActions<'a, Message>,
}

impl<'a, T, Message> TreeView<'a, T, Message>
where
    T: TreeNode + 'a,
    Message: Clone + 'a,
{
    pub fn new(
        nodes: &'a [T],
        content: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            nodes,
            selected: None,
            hovered: None,
            metrics: TreeMetrics::default(),
            content: Box::new(content),
            marker: None,
            style: None,
            actions: RowActions {
                press: None,
                hover: None,
                toggle: None,
            },
        }
    }

    pub fn selected(mut self, path: Option<&'a TreePath>) -> Self {
        self.selected = path;
        self
    }

    pub fn hovered(mut self, path: Option<&'a TreePath>) -> Self {
        self.hovered = path;
        self
    }

    pub fn metrics(mut self, metrics: TreeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn on_press(mut self, on_press: impl Fn(TreePath) -> Message + 'a) -> Self {
        self.actions.press = Some(Box::new(on_press));
        self
    }

    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<TreePath>) -> Message + 'a,
    ) -> Self {
        self.actions.hover = Some(Box::new(on_hover));
        self
    }

    /// Message emitted when the marker of a folder row is clicked.
    pub fn on_toggle(mut self, on_toggle: impl Fn(TreePath) -> Message + 'a) -> Self {
        self.actions.toggle = Some(Box::new(on_toggle));
        self
    }

    /// Content of the marker slot, e.g. an expand arrow.
    pub fn marker(
        mut self,
        marker: impl Fn(&TreeRowContext<'a, T>) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.marker = Some(Box::new(marker));
        self
    }

    pub fn style(
        mut self,
        style: impl Fn(&TreeRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let rows = flatten_tree(self.nodes)
            .into_iter()
            .map(|entry| self.row(entry));

        Column::with_children(rows)
            .spacing(self.metrics.spacing)
            .width(Length::Fill)
            .into()
    }

    fn row(&self, entry: TreeRow<'a, T>) -> Element<'a, Message> {
        let path = entry.path.clone();
        let context = TreeRowContext {
            is_selected: self.selected == Some(&entry.path),
            is_hovered: self.hovered == Some(&entry.path),
            entry,
        };

        let indent = context.entry.depth as f32 * self.metrics.indent;
        let content = self.actions.wrap((self.content)(&context), &path);

        let line = row![
            Space::new().width(Length::Fixed(indent)),
            self.marker_slot(&context, &path),
            content,
        ]
        .align_y(Alignment::Center);

        match &self.style {
            Some(style) => {
                let style = style(&context);
                container(line)
                    .width(Length::Fill)
                    .style(move |_| style)
                    .into()
            },
            None => line.into(),
        }
    }

    fn marker_slot(
        &self,
        context: &TreeRowContext<'a, T>,
        path: &TreePath,
    ) -> Element<'a, Message> {
        if self.metrics.marker <= 0.0 {
            return Space::new().into();
        }

        let content = match &self.marker {
            Some(marker) => marker(context),
            None => Space::new().into(),
        };
        let slot = container(content).center_x(Length::Fixed(self.metrics.marker));

        match &self.actions.toggle {
            Some(toggle) if context.entry.node.is_folder() => mouse_area(slot)
                .on_press(toggle(path.clone()))
                .interaction(mouse::Interaction::Pointer)
                .into(),
            _ => slot.into(),
        }
    }
}
