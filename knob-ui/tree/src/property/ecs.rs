use std::rc::Rc;

use knob_model::Subscription;
use knob_model::ecs::{Component, Entity, SelectionController};

use super::node::{PropertyTreeNode, group_node};
use super::source::{RootSlot, SelectionSource};

/// Tree node for an entity and all of its components.
pub fn entity_node(entity: &Entity) -> PropertyTreeNode {
    PropertyTreeNode::new(entity.id(), entity.display_name())
        .with_class("entity")
        .with_children(entity.components().iter().map(component_node).collect())
}

/// Tree node for a component with its `Inputs` and `Outputs` groups.
pub fn component_node(component: &Component) -> PropertyTreeNode {
    let id = component.id();
    PropertyTreeNode::new(id, component.display_name())
        .with_class("component")
        .with_children(vec![
            group_node(
                format!("{id}i"),
                "Inputs",
                "set",
                component.ins().properties(),
            ),
            group_node(
                format!("{id}o"),
                "Outputs",
                "set",
                component.outs().properties(),
            ),
        ])
}

/// Follows an entity-component [`SelectionController`].
#[derive(Debug, Clone)]
pub struct EcsSelection {
    controller: Rc<SelectionController>,
}

impl EcsSelection {
    pub fn new(controller: Rc<SelectionController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }
}

impl SelectionSource for EcsSelection {
    fn connect(&self, slot: &RootSlot) -> Vec<Subscription> {
        let entities = slot.clone();
        let components = slot.clone();

        vec![
            self.controller.on_entity(move |event| {
                entities.replace(event.selected.then(|| entity_node(&event.entity)));
            }),
            self.controller.on_component(move |event| {
                components
                    .replace(event.selected.then(|| component_node(&event.component)));
            }),
        ]
    }
}
