//! Node graph object model and its selection component.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::observer::{Emitter, Subscription};
use crate::property::Property;

/// Which side of a component a property group sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Inputs,
    Outputs,
}

/// Ordered input or output properties of a graph component.
#[derive(Debug, Clone)]
pub struct PropertyGroup {
    kind: GroupKind,
    properties: Vec<Property>,
}

impl PropertyGroup {
    pub fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
        }
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn is_input_group(&self) -> bool {
        self.kind == GroupKind::Inputs
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

struct ComponentInner {
    id: String,
    type_name: String,
    name: Option<String>,
    ins: PropertyGroup,
    outs: PropertyGroup,
}

/// Graph component with input and output property groups.
#[derive(Clone)]
pub struct Component {
    inner: Rc<ComponentInner>,
}

/// Builder for graph [`Component`]s.
pub struct ComponentBuilder {
    id: Option<String>,
    type_name: String,
    name: Option<String>,
    ins: PropertyGroup,
    outs: PropertyGroup,
}

impl ComponentBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn input(mut self, property: Property) -> Self {
        self.ins.push(property);
        self
    }

    pub fn output(mut self, property: Property) -> Self {
        self.outs.push(property);
        self
    }

    pub fn build(self) -> Component {
        Component {
            inner: Rc::new(ComponentInner {
                id: self.id.unwrap_or_else(crate::new_id),
                type_name: self.type_name,
                name: self.name,
                ins: self.ins,
                outs: self.outs,
            }),
        }
    }
}

impl Component {
    pub fn builder(type_name: impl Into<String>) -> ComponentBuilder {
        ComponentBuilder {
            id: None,
            type_name: type_name.into(),
            name: None,
            ins: PropertyGroup::new(GroupKind::Inputs),
            outs: PropertyGroup::new(GroupKind::Outputs),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Name if set, type name otherwise.
    pub fn display_name(&self) -> &str {
        self.inner
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.inner.type_name)
    }

    pub fn ins(&self) -> &PropertyGroup {
        &self.inner.ins
    }

    pub fn outs(&self) -> &PropertyGroup {
        &self.inner.outs
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("id", &self.inner.id)
            .field("type_name", &self.inner.type_name)
            .finish()
    }
}

struct NodeInner {
    id: String,
    name: Option<String>,
    components: Vec<Component>,
}

/// Graph node owning a list of components.
#[derive(Clone)]
pub struct Node {
    inner: Rc<NodeInner>,
}

impl Node {
    pub fn new(name: Option<&str>, components: Vec<Component>) -> Self {
        Self::with_id(crate::new_id(), name, components)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: Option<&str>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                id: id.into(),
                name: name.map(ToString::to_string),
                components,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Name if set, `"Node"` otherwise.
    pub fn display_name(&self) -> &str {
        self.inner
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Node")
    }

    pub fn components(&self) -> &[Component] {
        &self.inner.components
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}

/// Emitted when an item is added to or removed from a selection set.
#[derive(Debug, Clone)]
pub struct SelectionEvent<T> {
    pub item: T,
    pub add: bool,
}

/// Ordered set of selected items of one kind.
#[derive(Debug)]
pub struct SelectionSet<T> {
    items: RefCell<Vec<T>>,
    events: Emitter<SelectionEvent<T>>,
}

impl<T> SelectionSet<T>
where
    T: Clone + PartialEq + 'static,
{
    pub fn new() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            events: Emitter::new(),
        }
    }

    pub fn on(
        &self,
        callback: impl Fn(&SelectionEvent<T>) + 'static,
    ) -> Subscription {
        self.events.subscribe(callback)
    }

    /// Most recently added item.
    pub fn get(&self) -> Option<T> {
        self.items.borrow().last().cloned()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.borrow().contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Add `item`; returns `false` if it was already selected.
    pub fn add(&self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.borrow_mut().push(item.clone());
        self.events.emit(&SelectionEvent { item, add: true });
        true
    }

    /// Remove `item`; returns `false` if it was not selected.
    pub fn remove(&self, item: &T) -> bool {
        let removed = {
            let mut items = self.items.borrow_mut();
            let Some(position) = items.iter().position(|entry| entry == item)
            else {
                return false;
            };
            items.remove(position)
        };
        self.events.emit(&SelectionEvent {
            item: removed,
            add: false,
        });
        true
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.items.borrow_mut());
        for item in removed {
            self.events.emit(&SelectionEvent { item, add: false });
        }
    }
}

impl<T> Default for SelectionSet<T>
where
    T: Clone + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Selection state of a graph: selected nodes and selected components.
///
/// `select_*` calls are exclusive and clear the other set first.
#[derive(Debug, Default)]
pub struct Selection {
    pub selected_nodes: SelectionSet<Node>,
    pub selected_components: SelectionSet<Component>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_node(&self, node: Node) {
        if self.selected_nodes.contains(&node) && self.selected_nodes.len() == 1
        {
            return;
        }
        self.clear_selection();
        log::debug!("graph node selected: {}", node.id());
        self.selected_nodes.add(node);
    }

    pub fn select_component(&self, component: Component) {
        if self.selected_components.contains(&component)
            && self.selected_components.len() == 1
        {
            return;
        }
        self.clear_selection();
        log::debug!("graph component selected: {}", component.id());
        self.selected_components.add(component);
    }

    pub fn clear_selection(&self) {
        self.selected_components.clear();
        self.selected_nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Component, GroupKind, Node, Selection, SelectionSet};
    use crate::property::Property;

    #[test]
    fn given_component_builder_when_built_then_groups_have_kinds() {
        let component = Component::builder("Light")
            .input(Property::number("intensity", 1.0).build())
            .build();

        assert_eq!(component.ins().kind(), GroupKind::Inputs);
        assert!(component.ins().is_input_group());
        assert!(!component.outs().is_input_group());
        assert_eq!(component.display_name(), "Light");
        assert!(!component.id().is_empty());
    }

    #[test]
    fn given_selection_set_when_added_and_removed_then_events_follow() {
        let set = SelectionSet::<Node>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let _subscription = set.on(move |event| {
            sink.borrow_mut().push((event.item.id().to_string(), event.add));
        });
        let node = Node::with_id("n1", None, vec![]);

        assert!(set.add(node.clone()));
        assert!(!set.add(node.clone()));
        assert_eq!(set.get().map(|n| n.id().to_string()), Some("n1".into()));
        assert!(set.remove(&node));
        assert!(!set.remove(&node));

        assert_eq!(
            *log.borrow(),
            vec![(String::from("n1"), true), (String::from("n1"), false)]
        );
    }

    #[test]
    fn given_selected_node_when_component_selected_then_node_is_removed_first()
    {
        let selection = Selection::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let nodes = Rc::clone(&log);
        let _nodes = selection.selected_nodes.on(move |event| {
            nodes.borrow_mut().push(format!("node:{}", event.add));
        });
        let components = Rc::clone(&log);
        let _components = selection.selected_components.on(move |event| {
            components.borrow_mut().push(format!("component:{}", event.add));
        });

        selection.select_node(Node::with_id("n1", Some("Scene"), vec![]));
        selection.select_component(Component::builder("Light").build());

        assert_eq!(
            *log.borrow(),
            vec![
                String::from("node:true"),
                String::from("node:false"),
                String::from("component:true"),
            ]
        );
        assert!(selection.selected_nodes.get().is_none());
    }
}
