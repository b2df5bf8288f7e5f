//! Entity-component object model and its selection controller.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::observer::{Emitter, Subscription};
use crate::property::Property;

/// Ordered collection of properties on one side of a component.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    properties: Vec<Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.key() == key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

struct ComponentInner {
    id: String,
    type_name: String,
    name: Option<String>,
    ins: PropertySet,
    outs: PropertySet,
}

/// Component attached to an entity: a typed bag of input and output
/// properties.
#[derive(Clone)]
pub struct Component {
    inner: Rc<ComponentInner>,
}

/// Builder for [`Component`].
pub struct ComponentBuilder {
    id: Option<String>,
    type_name: String,
    name: Option<String>,
    ins: PropertySet,
    outs: PropertySet,
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
            ins: PropertySet::new(),
            outs: PropertySet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Name if set, type name otherwise.
    pub fn display_name(&self) -> &str {
        self.name()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.inner.type_name)
    }

    pub fn ins(&self) -> &PropertySet {
        &self.inner.ins
    }

    pub fn outs(&self) -> &PropertySet {
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
            .field("name", &self.inner.name)
            .finish()
    }
}

struct EntityInner {
    id: String,
    name: Option<String>,
    components: Vec<Component>,
}

/// Entity holding an ordered list of components.
#[derive(Clone)]
pub struct Entity {
    inner: Rc<EntityInner>,
}

impl Entity {
    pub fn new(name: Option<&str>, components: Vec<Component>) -> Self {
        Self::with_id(crate::new_id(), name, components)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: Option<&str>,
        components: Vec<Component>,
    ) -> Self {
        Self {
            inner: Rc::new(EntityInner {
                id: id.into(),
                name: name.map(ToString::to_string),
                components,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Name if set, `"Entity"` otherwise.
    pub fn display_name(&self) -> &str {
        self.name().filter(|name| !name.is_empty()).unwrap_or("Entity")
    }

    pub fn components(&self) -> &[Component] {
        &self.inner.components
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("components", &self.inner.components.len())
            .finish()
    }
}

/// Emitted when an entity gains or loses the selection.
#[derive(Debug, Clone)]
pub struct SelectEntityEvent {
    pub entity: Entity,
    pub selected: bool,
}

/// Emitted when a component gains or loses the selection.
#[derive(Debug, Clone)]
pub struct SelectComponentEvent {
    pub component: Component,
    pub selected: bool,
}

/// Tracks the selected entity and component and announces changes.
///
/// Selection is exclusive: selecting an entity deselects the current
/// component and vice versa. Deselection events are emitted before the
/// matching selection event.
#[derive(Debug, Default)]
pub struct SelectionController {
    entity: RefCell<Option<Entity>>,
    component: RefCell<Option<Component>>,
    entity_events: Emitter<SelectEntityEvent>,
    component_events: Emitter<SelectComponentEvent>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_entity(&self) -> Option<Entity> {
        self.entity.borrow().clone()
    }

    pub fn selected_component(&self) -> Option<Component> {
        self.component.borrow().clone()
    }

    pub fn on_entity(
        &self,
        callback: impl Fn(&SelectEntityEvent) + 'static,
    ) -> Subscription {
        self.entity_events.subscribe(callback)
    }

    pub fn on_component(
        &self,
        callback: impl Fn(&SelectComponentEvent) + 'static,
    ) -> Subscription {
        self.component_events.subscribe(callback)
    }

    pub fn select_entity(&self, entity: Entity) {
        if self.entity.borrow().as_ref() == Some(&entity) {
            return;
        }
        self.deselect_component();
        self.deselect_entity();
        log::debug!("entity selected: {}", entity.id());
        *self.entity.borrow_mut() = Some(entity.clone());
        self.entity_events.emit(&SelectEntityEvent {
            entity,
            selected: true,
        });
    }

    pub fn select_component(&self, component: Component) {
        if self.component.borrow().as_ref() == Some(&component) {
            return;
        }
        self.deselect_entity();
        self.deselect_component();
        log::debug!("component selected: {}", component.id());
        *self.component.borrow_mut() = Some(component.clone());
        self.component_events.emit(&SelectComponentEvent {
            component,
            selected: true,
        });
    }

    pub fn deselect_entity(&self) {
        let previous = self.entity.borrow_mut().take();
        if let Some(entity) = previous {
            self.entity_events.emit(&SelectEntityEvent {
                entity,
                selected: false,
            });
        }
    }

    pub fn deselect_component(&self) {
        let previous = self.component.borrow_mut().take();
        if let Some(component) = previous {
            self.component_events.emit(&SelectComponentEvent {
                component,
                selected: false,
            });
        }
    }

    pub fn clear_selection(&self) {
        self.deselect_component();
        self.deselect_entity();
    }
}
