use std::collections::BTreeSet;

use crate::shape::NodeId;

/// The set of currently-expanded node IDs. A node's children are part of
/// the flat projection iff the node itself is in this set.
#[derive(Debug, Clone, Default)]
pub struct ExpandedSet(BTreeSet<NodeId>);

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.0.contains(id)
    }

    pub fn expand(&mut self, id: NodeId) {
        self.0.insert(id);
    }

    pub fn collapse(&mut self, id: &NodeId) {
        self.0.remove(id);
    }

    pub fn toggle(&mut self, id: NodeId) {
        if self.0.contains(&id) {
            self.0.remove(&id);
        } else {
            self.0.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.0.extend(ids);
    }

    pub fn remove_all(&mut self, ids: &[NodeId]) {
        for id in ids {
            self.0.remove(id);
        }
    }
}
