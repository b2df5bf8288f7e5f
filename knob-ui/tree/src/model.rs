/// Keys from a top-level row down to a row.
///
/// Sibling keys must be unique for a path to name a single row.
pub type TreePath = Vec<String>;

/// Node of a hierarchy shown by [`TreeView`](crate::TreeView).
pub trait TreeNode {
    fn title(&self) -> &str;
    /// Path segment of the node; the title unless overridden.
    fn key(&self) -> &str {
        self.title()
    }
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
    fn expanded(&self) -> bool;
    fn is_folder(&self) -> bool;
}

/// One row of a flattened tree.
pub struct FlattenedNode<'a, T: TreeNode> {
    /// `0` for top-level rows.
    pub depth: usize,
    pub node: &'a T,
    pub path: TreePath,
}

/// Flatten a tree into a depth-first list of visible rows.
///
/// Rows keep the order of the source slices. Children are included only
/// when `node.is_folder() && node.expanded()`.
pub fn flatten_tree<T: TreeNode>(nodes: &[T]) -> Vec<FlattenedNode<'_, T>> {
    flatten(nodes, true)
}

/// Like [`flatten_tree`], but descends into collapsed folders too.
pub fn flatten_all<T: TreeNode>(nodes: &[T]) -> Vec<FlattenedNode<'_, T>> {
    flatten(nodes, false)
}

fn flatten<T: TreeNode>(
    nodes: &[T],
    visible_only: bool,
) -> Vec<FlattenedNode<'_, T>> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    for node in nodes {
        push_node(node, 0, &mut path, &mut entries, visible_only);
    }
    entries
}

fn push_node<'a, T: TreeNode>(
    node: &'a T,
    depth: usize,
    path: &mut Vec<String>,
    entries: &mut Vec<FlattenedNode<'a, T>>,
    visible_only: bool,
) {
    path.push(node.key().to_string());
    entries.push(FlattenedNode {
        depth,
        node,
        path: path.clone(),
    });

    let descend = node.is_folder() && (node.expanded() || !visible_only);
    if descend {
        if let Some(children) = node.children() {
            for child in children {
                push_node(child, depth + 1, path, entries, visible_only);
            }
        }
    }

    path.pop();
}

#[cfg(test)]
mod tests {
    use super::{FlattenedNode, TreeNode, TreePath, flatten_all, flatten_tree};

    struct Item {
        key: &'static str,
        label: &'static str,
        open: bool,
        items: Vec<Item>,
    }

    fn group(label: &'static str, open: bool, items: Vec<Item>) -> Item {
        Item {
            key: label,
            label,
            open,
            items,
        }
    }

    fn leaf(label: &'static str) -> Item {
        group(label, false, Vec::new())
    }

    impl TreeNode for Item {
        fn title(&self) -> &str {
            self.label
        }

        fn key(&self) -> &str {
            self.key
        }

        fn children(&self) -> Option<&[Self]> {
            Some(&self.items)
        }

        fn expanded(&self) -> bool {
            self.open
        }

        fn is_folder(&self) -> bool {
            !self.items.is_empty()
        }
    }

    fn titles(entries: &[FlattenedNode<'_, Item>]) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.node.label).collect()
    }

    #[test]
    fn given_no_nodes_when_flattened_then_no_rows() {
        assert!(flatten_tree::<Item>(&[]).is_empty());
    }

    #[test]
    fn given_nested_nodes_when_flattened_then_source_order_and_depth_kept() {
        let nodes = vec![
            group(
                "inputs",
                true,
                vec![
                    leaf("speed"),
                    group("offset", false, vec![leaf("x")]),
                    leaf("angle"),
                ],
            ),
            leaf("outputs"),
        ];

        let entries = flatten_tree(&nodes);

        assert_eq!(
            titles(&entries),
            vec!["inputs", "speed", "offset", "angle", "outputs"]
        );
        let depths: Vec<usize> = entries.iter().map(|entry| entry.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn given_keys_differing_from_titles_when_flattened_then_paths_use_keys() {
        let mut inputs = group("Inputs", true, vec![leaf("speed")]);
        inputs.key = "c1i";

        let entries = flatten_tree(std::slice::from_ref(&inputs));

        let expected: TreePath = vec![String::from("c1i"), String::from("speed")];
        assert_eq!(entries[1].path, expected);
    }

    #[test]
    fn given_collapsed_group_when_flattened_all_then_hidden_rows_included() {
        let nodes = vec![group("inputs", false, vec![leaf("speed")])];

        assert_eq!(titles(&flatten_tree(&nodes)), vec!["inputs"]);
        assert_eq!(titles(&flatten_all(&nodes)), vec!["inputs", "speed"]);
    }
}
