//! Tree widgets for knob inspectors.
//!
//! [`TreeView`] renders any [`TreeNode`] hierarchy as indented rows with
//! folder toggles. The [`property`] module builds inspector trees over
//! entity-component and graph selections.

mod model;
pub mod property;
mod view;

pub use model::{FlattenedNode, TreeNode, TreePath, flatten_all, flatten_tree};
pub use view::{TreeMetrics, TreeRow, TreeRowContext, TreeView};
