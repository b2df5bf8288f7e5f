use std::rc::Rc;

use knob_model::Subscription;
use knob_model::graph::{Component, Node, PropertyGroup, Selection};

use super::node::{PropertyTreeNode, group_node};
use super::source::{RootSlot, SelectionSource};

/// Tree node for a graph node and all of its components.
pub fn node_tree_node(node: &Node) -> PropertyTreeNode {
    PropertyTreeNode::new(node.id(), node.display_name())
        .with_class("node")
        .with_children(node.components().iter().map(component_node).collect())
}

/// Tree node for a graph component with its `Inputs` and `Outputs` groups.
pub fn component_node(component: &Component) -> PropertyTreeNode {
    let id = component.id();
    PropertyTreeNode::new(id, component.display_name())
        .with_class("component")
        .with_children(vec![
            property_group(format!("{id}i"), "Inputs", component.ins()),
            property_group(format!("{id}o"), "Outputs", component.outs()),
        ])
}

fn property_group(id: String, text: &str, group: &PropertyGroup) -> PropertyTreeNode {
    let class = if group.is_input_group() {
        "inputs"
    } else {
        "outputs"
    };
    group_node(id, text, class, group.properties())
}

/// Root for the current selection: the selected node, else the selected
/// component.
pub fn current_root(selection: &Selection) -> Option<PropertyTreeNode> {
    match selection.selected_nodes.get() {
        Some(node) => Some(node_tree_node(&node)),
        None => selection
            .selected_components
            .get()
            .map(|component| component_node(&component)),
    }
}

/// Follows a graph [`Selection`]; shows the root row.
#[derive(Debug, Clone)]
pub struct GraphSelection {
    selection: Rc<Selection>,
}

impl GraphSelection {
    pub fn new(selection: Rc<Selection>) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl SelectionSource for GraphSelection {
    fn connect(&self, slot: &RootSlot) -> Vec<Subscription> {
        let nodes = slot.clone();
        let components = slot.clone();

        let subscriptions = vec![
            self.selection.selected_nodes.on(move |event| {
                nodes.replace(event.add.then(|| node_tree_node(&event.item)));
            }),
            self.selection.selected_components.on(move |event| {
                components.replace(event.add.then(|| component_node(&event.item)));
            }),
        ];

        slot.replace(current_root(&self.selection));
        subscriptions
    }

    fn include_root(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use knob_model::Property;
    use knob_model::graph::{Component, Node, Selection};

    use super::{component_node, current_root};

    fn oscillator() -> Component {
        Component::builder("Oscillator")
            .id("osc")
            .input(Property::number("frequency", 440.0).build())
            .output(Property::number("signal", 0.0).build())
            .build()
    }

    #[test]
    fn given_graph_component_when_built_then_groups_use_side_classes() {
        let node = component_node(&oscillator());

        let groups = node.child_nodes();
        assert!(groups[0].has_class("inputs"));
        assert!(groups[1].has_class("outputs"));
        assert_eq!(groups[1].id(), "osco");
    }

    #[test]
    fn given_selection_when_root_requested_then_node_wins_over_component() {
        let selection = Selection::new();
        assert!(current_root(&selection).is_none());

        selection.select_component(oscillator());
        let root = current_root(&selection).expect("component selected");
        assert_eq!(root.id(), "osc");

        selection.select_node(Node::with_id("n1", None, vec![oscillator()]));
        let root = current_root(&selection).expect("node selected");
        assert_eq!(root.text(), "Node");
        assert!(root.has_class("node"));
    }
}
