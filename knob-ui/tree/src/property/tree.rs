use std::collections::BTreeMap;

use iced::Task;
use iced::keyboard::key::Named;
use knob_model::Subscription;
use knob_ui_field::{FieldEvent, FieldSettings, Modifiers, PropertyField};

use super::ecs::EcsSelection;
use super::graph::GraphSelection;
use super::node::{PropertyTreeNode, find_mut};
use super::source::{RootSlot, SelectionSource};
use crate::model::{TreeNode, TreePath, flatten_all};

/// Input accepted by [`PropertyTree::update`].
#[derive(Debug, Clone)]
pub enum PropertyTreeEvent {
    Toggle(TreePath),
    Select(TreePath),
    Hover(Option<TreePath>),
    /// Event for field `slot` of the row at `path`.
    Field {
        path: TreePath,
        slot: usize,
        event: FieldEvent,
    },
}

/// Inspector tree that follows a selection registry and embeds a
/// [`PropertyField`] in every property row.
#[derive(Debug)]
pub struct PropertyTree<S> {
    source: S,
    settings: FieldSettings,
    slot: RootSlot,
    subscriptions: Vec<Subscription>,
    root: Option<PropertyTreeNode>,
    fields: BTreeMap<TreePath, Vec<PropertyField>>,
    selected: Option<TreePath>,
    hovered: Option<TreePath>,
}

pub type EcsPropertyTree = PropertyTree<EcsSelection>;
pub type GraphPropertyTree = PropertyTree<GraphSelection>;

impl<S: SelectionSource> PropertyTree<S> {
    pub fn new(source: S, settings: FieldSettings) -> Self {
        Self {
            source,
            settings,
            slot: RootSlot::default(),
            subscriptions: Vec::new(),
            root: None,
            fields: BTreeMap::new(),
            selected: None,
            hovered: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start following the selection registry.
    pub fn connect(&mut self) {
        if self.is_connected() {
            return;
        }
        self.subscriptions = self.source.connect(&self.slot);
        log::debug!(
            "property tree connected with {} subscriptions",
            self.subscriptions.len()
        );
        self.sync();
    }

    /// Stop following the selection registry. The current root is kept.
    pub fn disconnect(&mut self) {
        self.subscriptions.clear();
    }

    pub fn is_connected(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Apply a pending selection change; returns whether the root changed.
    pub fn sync(&mut self) -> bool {
        match self.slot.take() {
            Some(root) => {
                self.set_root(root);
                true
            },
            None => false,
        }
    }

    /// Replace the root and rebuild every embedded field.
    pub fn set_root(&mut self, root: Option<PropertyTreeNode>) {
        self.root = root;
        self.selected = None;
        self.hovered = None;
        self.rebuild_fields();
    }

    pub fn root(&self) -> Option<&PropertyTreeNode> {
        self.root.as_ref()
    }

    /// Top-level rows: the root itself, or its children when the root row
    /// is hidden.
    pub fn visible_nodes(&self) -> &[PropertyTreeNode] {
        match self.root.as_ref() {
            None => &[],
            Some(root) if self.source.include_root() => std::slice::from_ref(root),
            Some(root) => root.child_nodes(),
        }
    }

    pub fn fields(&self, path: &TreePath) -> &[PropertyField] {
        self.fields.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn field_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    pub fn selected(&self) -> Option<&TreePath> {
        self.selected.as_ref()
    }

    pub fn hovered(&self) -> Option<&TreePath> {
        self.hovered.as_ref()
    }

    pub fn update(&mut self, event: PropertyTreeEvent) -> Task<PropertyTreeEvent> {
        match event {
            PropertyTreeEvent::Toggle(path) => {
                self.dismiss();
                if let Some(node) = self.node_mut(&path) {
                    let expanded = node.expanded();
                    node.set_expanded(!expanded);
                }
            },
            PropertyTreeEvent::Select(path) => {
                self.dismiss();
                self.selected = Some(path);
            },
            PropertyTreeEvent::Hover(path) => self.hovered = path,
            PropertyTreeEvent::Field { path, slot, event } => {
                return self.update_field(path, slot, event);
            },
        }
        Task::none()
    }

    pub fn cursor_moved(&mut self, position: iced::Point) {
        self.broadcast(FieldEvent::CursorMoved(position));
    }

    pub fn pointer_released(&mut self) {
        self.broadcast(FieldEvent::PointerReleased);
    }

    /// A press landed outside every field: commit open edits and close
    /// option menus.
    pub fn dismiss(&mut self) {
        for field in self.fields.values_mut().flatten() {
            field.blur();
        }
    }

    pub fn modifiers_changed(&mut self, modifiers: Modifiers) {
        self.broadcast(FieldEvent::ModifiersChanged(modifiers));
    }

    pub fn key_pressed(&mut self, key: Named) {
        self.broadcast(FieldEvent::KeyPressed(key));
    }

    fn update_field(
        &mut self,
        path: TreePath,
        slot: usize,
        event: FieldEvent,
    ) -> Task<PropertyTreeEvent> {
        if matches!(event, FieldEvent::Pressed) {
            self.blur_except(&path, slot);
        }

        let Some(field) = self
            .fields
            .get_mut(&path)
            .and_then(|fields| fields.get_mut(slot))
        else {
            log::debug!("event for missing field {path:?}[{slot}] dropped");
            return Task::none();
        };

        field.update(event).map(move |event| PropertyTreeEvent::Field {
            path: path.clone(),
            slot,
            event,
        })
    }

    fn blur_except(&mut self, path: &TreePath, slot: usize) {
        for (field_path, fields) in &mut self.fields {
            for (index, field) in fields.iter_mut().enumerate() {
                if field_path != path || index != slot {
                    field.blur();
                }
            }
        }
    }

    fn broadcast(&mut self, event: FieldEvent) {
        for field in self.fields.values_mut().flatten() {
            let _ = field.update(event.clone());
        }
    }

    fn node_mut(&mut self, path: &TreePath) -> Option<&mut PropertyTreeNode> {
        let include_root = self.source.include_root();
        let root = self.root.as_mut()?;
        if include_root {
            find_mut(std::slice::from_mut(root), path)
        } else {
            root.descendant_mut(path)
        }
    }

    fn rebuild_fields(&mut self) {
        let settings = self.settings;
        let mut fields = BTreeMap::new();

        for entry in flatten_all(self.visible_nodes()) {
            let Some(property) = entry.node.property() else {
                continue;
            };
            let row = match property.array_len() {
                Some(len) => (0..len)
                    .map(|index| {
                        PropertyField::new(property.clone(), Some(index), settings)
                    })
                    .collect(),
                None => vec![PropertyField::new(property.clone(), None, settings)],
            };
            fields.insert(entry.path, row);
        }

        self.fields = fields;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use iced::Point;
    use knob_model::ecs::{self, Entity, SelectionController};
    use knob_model::graph::{self, Node, Selection};
    use knob_model::{Property, Schema, Value};
    use knob_ui_field::{FieldEvent, FieldSettings};

    use super::{EcsPropertyTree, GraphPropertyTree, PropertyTreeEvent};
    use crate::model::{TreeNode, TreePath};
    use crate::property::ecs::EcsSelection;
    use crate::property::graph::GraphSelection;

    fn path(parts: &[&str]) -> TreePath {
        parts.iter().map(|part| (*part).to_owned()).collect()
    }

    fn light(position: &Property, intensity: &Property) -> ecs::Component {
        ecs::Component::builder("Light")
            .id("light")
            .input(position.clone())
            .input(intensity.clone())
            .build()
    }

    fn ecs_tree(controller: &Rc<SelectionController>) -> EcsPropertyTree {
        let mut tree = EcsPropertyTree::new(
            EcsSelection::new(Rc::clone(controller)),
            FieldSettings::default(),
        );
        tree.connect();
        tree
    }

    #[test]
    fn given_entity_selected_when_synced_then_root_and_fields_are_built() {
        let controller = Rc::new(SelectionController::new());
        let position = Property::number_array("position", [1.0, 2.0, 3.0]).build();
        let intensity = Property::number("intensity", 1.0).build();
        let mut tree = ecs_tree(&controller);

        controller.select_entity(Entity::with_id(
            "e1",
            Some("Lamp"),
            vec![light(&position, &intensity)],
        ));
        assert!(tree.sync());

        let root = tree.root().expect("entity selected");
        assert_eq!(root.text(), "Lamp");
        assert_eq!(tree.visible_nodes().len(), 1, "root row hidden");
        assert_eq!(tree.fields(&path(&["light", "lighti", "position"])).len(), 3);
        assert_eq!(tree.fields(&path(&["light", "lighti", "intensity"])).len(), 1);
        assert_eq!(tree.field_count(), 4);
        assert_eq!(position.observer_count(), 3);
    }

    #[test]
    fn given_selection_cleared_when_synced_then_tree_is_emptied_and_fields_released()
    {
        let controller = Rc::new(SelectionController::new());
        let position = Property::number_array("position", [0.0, 0.0]).build();
        let intensity = Property::number("intensity", 1.0).build();
        let mut tree = ecs_tree(&controller);

        controller.select_component(light(&position, &intensity));
        tree.sync();
        assert_eq!(intensity.observer_count(), 1);

        controller.clear_selection();
        tree.sync();

        assert!(tree.root().is_none());
        assert!(tree.visible_nodes().is_empty());
        assert_eq!(intensity.observer_count(), 0);
    }

    #[test]
    fn given_disconnected_tree_when_selection_changes_then_root_is_kept() {
        let controller = Rc::new(SelectionController::new());
        let mut tree = ecs_tree(&controller);
        assert!(tree.is_connected());

        tree.disconnect();
        controller.select_entity(Entity::with_id("e1", None, vec![]));

        assert!(!tree.is_connected());
        assert!(!tree.sync());
        assert!(tree.root().is_none());
    }

    #[test]
    fn given_graph_selection_when_connected_then_current_node_is_shown_with_root()
    {
        let selection = Rc::new(Selection::new());
        let frequency = Property::number("frequency", 440.0).build();
        let component = graph::Component::builder("Oscillator")
            .id("osc")
            .input(frequency.clone())
            .build();
        selection.select_node(Node::with_id("n1", Some("Synth"), vec![component]));

        let mut tree = GraphPropertyTree::new(
            GraphSelection::new(Rc::clone(&selection)),
            FieldSettings::default(),
        );
        tree.connect();

        assert_eq!(tree.visible_nodes().len(), 1);
        assert_eq!(tree.visible_nodes()[0].key(), "n1");
        assert_eq!(tree.fields(&path(&["n1", "osc", "osci", "frequency"])).len(), 1);

        selection.clear_selection();
        tree.sync();
        assert!(tree.root().is_none());
    }

    #[test]
    fn given_toggle_when_updated_then_node_collapses() {
        let controller = Rc::new(SelectionController::new());
        let position = Property::number_array("position", [0.0]).build();
        let intensity = Property::number("intensity", 1.0).build();
        let mut tree = ecs_tree(&controller);
        controller.select_entity(Entity::with_id(
            "e1",
            None,
            vec![light(&position, &intensity)],
        ));
        tree.sync();

        let _ = tree.update(PropertyTreeEvent::Toggle(path(&["light"])));

        assert!(!tree.visible_nodes()[0].expanded());
    }

    #[test]
    fn given_field_event_when_routed_then_property_is_written() {
        let controller = Rc::new(SelectionController::new());
        let position = Property::number_array("position", [0.0, 0.0, 0.0]).build();
        let intensity = Property::boolean("enabled", false).build();
        let component = ecs::Component::builder("Light")
            .id("light")
            .input(position.clone())
            .input(intensity.clone())
            .build();
        let mut tree = ecs_tree(&controller);
        controller.select_component(component);
        tree.sync();

        let enabled = path(&["lighti", "enabled"]);
        let _ = tree.update(PropertyTreeEvent::Field {
            path: enabled.clone(),
            slot: 0,
            event: FieldEvent::Pressed,
        });
        let _ = tree.update(PropertyTreeEvent::Field {
            path: enabled,
            slot: 0,
            event: FieldEvent::Released,
        });

        assert_eq!(intensity.value(), Value::Boolean(true));
    }

    #[test]
    fn given_drag_when_cursor_broadcast_then_array_element_scrubs() {
        let controller = Rc::new(SelectionController::new());
        let position = Property::number_array("position", [0.0, 0.0]).build();
        let intensity = Property::number("intensity", 1.0).build();
        let mut tree = EcsPropertyTree::new(
            EcsSelection::new(Rc::clone(&controller)),
            FieldSettings::default(),
        );
        tree.connect();
        controller.select_component(light(&position, &intensity));
        tree.sync();

        let row = path(&["lighti", "position"]);
        tree.cursor_moved(Point::new(0.0, 0.0));
        let _ = tree.update(PropertyTreeEvent::Field {
            path: row,
            slot: 1,
            event: FieldEvent::Pressed,
        });
        tree.cursor_moved(Point::new(10.0, 0.0));
        tree.pointer_released();

        let value = position.element(1).and_then(|value| value.as_number());
        assert!(value.is_some_and(|value| (value - 1.0).abs() < 1e-9));
        assert_eq!(position.element(0), Some(Value::Number(0.0)));
    }

    fn press_and_release(tree: &mut EcsPropertyTree, row: &TreePath) {
        for event in [FieldEvent::Pressed, FieldEvent::Released] {
            let _ = tree.update(PropertyTreeEvent::Field {
                path: row.clone(),
                slot: 0,
                event,
            });
        }
    }

    #[test]
    fn given_open_menu_when_row_selected_or_toggled_then_menu_closes() {
        let controller = Rc::new(SelectionController::new());
        let mode = Property::number("mode", 0.0)
            .schema(Schema::new().with_options(["Off", "Low", "High"]))
            .build();
        let component = ecs::Component::builder("Light")
            .id("light")
            .input(mode.clone())
            .build();
        let mut tree = ecs_tree(&controller);
        controller.select_component(component);
        tree.sync();

        let row = path(&["lighti", "mode"]);
        press_and_release(&mut tree, &row);
        assert!(tree.fields(&row)[0].menu().is_some());

        let _ = tree.update(PropertyTreeEvent::Select(path(&["lighti"])));
        assert!(tree.fields(&row)[0].menu().is_none());

        press_and_release(&mut tree, &row);
        let _ = tree.update(PropertyTreeEvent::Toggle(path(&["lighti"])));
        assert!(tree.fields(&row)[0].menu().is_none());
        assert_eq!(mode.value(), Value::Number(0.0));
    }

    #[test]
    fn given_open_edit_when_dismissed_then_text_is_committed() {
        let controller = Rc::new(SelectionController::new());
        let name = Property::string("name", "lamp").build();
        let component = ecs::Component::builder("Light")
            .id("light")
            .input(name.clone())
            .build();
        let mut tree = ecs_tree(&controller);
        controller.select_component(component);
        tree.sync();

        let row = path(&["lighti", "name"]);
        press_and_release(&mut tree, &row);
        assert!(tree.fields(&row)[0].is_editing());
        let _ = tree.update(PropertyTreeEvent::Field {
            path: row.clone(),
            slot: 0,
            event: FieldEvent::EditChanged(String::from("spot")),
        });

        tree.dismiss();

        assert!(!tree.fields(&row)[0].is_editing());
        assert_eq!(name.value(), Value::String(String::from("spot")));
    }
}
