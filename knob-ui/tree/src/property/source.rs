use std::cell::RefCell;
use std::rc::Rc;

use knob_model::Subscription;

use super::node::PropertyTreeNode;

/// Pending root change written by selection callbacks.
///
/// Callbacks run inside the selection registry, so they only record the new
/// root; the tree applies it on its next sync.
#[derive(Debug, Clone, Default)]
pub struct RootSlot {
    pending: Rc<RefCell<Option<Option<PropertyTreeNode>>>>,
}

impl RootSlot {
    /// Record a new root; `None` clears the tree.
    pub fn replace(&self, root: Option<PropertyTreeNode>) {
        *self.pending.borrow_mut() = Some(root);
    }

    pub(crate) fn take(&self) -> Option<Option<PropertyTreeNode>> {
        self.pending.borrow_mut().take()
    }
}

/// Selection registry a property tree can follow.
pub trait SelectionSource {
    /// Start observing selection changes, writing each new root into
    /// `slot`. Dropping the returned subscriptions stops observation.
    fn connect(&self, slot: &RootSlot) -> Vec<Subscription>;

    /// Whether the single root row is shown or only its children.
    fn include_root(&self) -> bool {
        false
    }
}
