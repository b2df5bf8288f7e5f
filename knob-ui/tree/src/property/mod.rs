//! Property inspector trees built on [`TreeView`](crate::TreeView).
//!
//! A [`PropertyTree`] follows a selection registry through a
//! [`SelectionSource`]. Selection callbacks record the new root in a
//! [`RootSlot`]; [`PropertyTree::sync`] applies it and rebuilds the embedded
//! [`PropertyField`](knob_ui_field::PropertyField)s.

pub mod ecs;
pub mod graph;
mod node;
mod source;
mod tree;
mod view;

pub use ecs::EcsSelection;
pub use graph::GraphSelection;
pub use node::{PropertyTreeNode, group_node};
pub use source::{RootSlot, SelectionSource};
pub use tree::{EcsPropertyTree, GraphPropertyTree, PropertyTree, PropertyTreeEvent};
pub use view::view;
