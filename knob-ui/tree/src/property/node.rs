use knob_model::Property;

use crate::model::{TreeNode, TreePath};

/// Node of a property tree: an object, a property group, a path segment or
/// a property leaf.
#[derive(Debug, Clone)]
pub struct PropertyTreeNode {
    id: String,
    text: String,
    classes: Vec<&'static str>,
    children: Vec<PropertyTreeNode>,
    property: Option<Property>,
    expanded: bool,
}

impl PropertyTreeNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            classes: Vec::new(),
            children: Vec::new(),
            property: None,
            expanded: true,
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn with_children(mut self, children: Vec<PropertyTreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[&'static str] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    pub fn child_nodes(&self) -> &[PropertyTreeNode] {
        &self.children
    }

    pub fn property(&self) -> Option<&Property> {
        self.property.as_ref()
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Insert `property` below this node following its dotted path.
    ///
    /// Existing children are reused by text, so properties sharing a path
    /// prefix share the intermediate nodes. The last segment carries the
    /// property and uses the property key as id.
    pub fn insert_property(&mut self, property: &Property) {
        let fragments: Vec<&str> = property.path().split('.').collect();
        let last = fragments.len() - 1;
        let mut node = self;

        for (index, fragment) in fragments.into_iter().enumerate() {
            let position = match node
                .children
                .iter()
                .position(|child| child.text == fragment)
            {
                Some(position) => position,
                None => {
                    let child = if index == last {
                        PropertyTreeNode {
                            property: Some(property.clone()),
                            ..PropertyTreeNode::new(property.key(), fragment)
                        }
                    } else {
                        PropertyTreeNode::new(fragment, fragment)
                    };
                    node.children.push(child);
                    node.children.len() - 1
                },
            };
            node = &mut node.children[position];
        }
    }

    /// Find a descendant by key path; the first segment names a child.
    pub fn descendant_mut(&mut self, path: &[String]) -> Option<&mut Self> {
        let (first, rest) = path.split_first()?;
        let child = self.children.iter_mut().find(|child| &child.id == first)?;
        if rest.is_empty() {
            Some(child)
        } else {
            child.descendant_mut(rest)
        }
    }
}

/// Group node holding the properties of one side of a component.
pub fn group_node<'a>(
    id: String,
    text: &str,
    class: &'static str,
    properties: impl IntoIterator<Item = &'a Property>,
) -> PropertyTreeNode {
    let mut group = PropertyTreeNode::new(id, text).with_class(class);
    for property in properties {
        group.insert_property(property);
    }
    group
}

/// Find a node by key path in a list of top-level nodes.
pub(crate) fn find_mut<'a>(
    nodes: &'a mut [PropertyTreeNode],
    path: &TreePath,
) -> Option<&'a mut PropertyTreeNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.iter_mut().find(|node| &node.id == first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node.descendant_mut(rest)
    }
}

impl TreeNode for PropertyTreeNode {
    fn title(&self) -> &str {
        &self.text
    }

    fn key(&self) -> &str {
        &self.id
    }

    fn children(&self) -> Option<&[Self]> {
        Some(&self.children)
    }

    fn expanded(&self) -> bool {
        self.expanded
    }

    fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use knob_model::Property;

    use super::{PropertyTreeNode, group_node};

    fn texts(node: &PropertyTreeNode) -> Vec<&str> {
        node.child_nodes().iter().map(PropertyTreeNode::text).collect()
    }

    #[test]
    fn given_shared_prefix_when_inserted_then_one_intermediate_node() {
        let b = Property::number("b", 1.0).path("a.b").build();
        let c = Property::number("c", 2.0).path("a.c").build();

        let group = group_node(String::from("gi"), "Inputs", "set", [&b, &c]);

        assert_eq!(texts(&group), vec!["a"]);
        let a = &group.child_nodes()[0];
        assert_eq!(a.id(), "a");
        assert!(a.property().is_none());
        assert_eq!(texts(a), vec!["b", "c"]);
        assert!(
            a.child_nodes()[1]
                .property()
                .is_some_and(|property| property.ptr_eq(&c))
        );
    }

    #[test]
    fn given_single_segment_path_when_inserted_then_leaf_carries_property() {
        let a = Property::boolean("enabled", true).path("a").build();

        let group = group_node(String::from("go"), "Outputs", "set", [&a]);

        assert_eq!(texts(&group), vec!["a"]);
        let leaf = &group.child_nodes()[0];
        assert_eq!(leaf.id(), "enabled");
        assert!(leaf.child_nodes().is_empty());
        assert!(leaf.property().is_some());
    }

    #[test]
    fn given_duplicate_leaf_text_when_inserted_then_first_property_wins() {
        let first = Property::number("x", 1.0).build();
        let second = Property::number("x", 2.0).build();

        let group = group_node(String::from("g"), "Inputs", "set", [&first, &second]);

        assert_eq!(group.child_nodes().len(), 1);
        assert!(
            group.child_nodes()[0]
                .property()
                .is_some_and(|property| property.ptr_eq(&first))
        );
    }

    #[test]
    fn given_key_path_when_searched_then_nested_node_is_found() {
        let b = Property::number("b", 1.0).path("a.b").build();
        let mut group = group_node(String::from("g"), "Inputs", "set", [&b]);

        let found = group
            .descendant_mut(&[String::from("a"), String::from("b")])
            .expect("leaf reachable by key path");

        assert_eq!(found.text(), "b");
    }
}
