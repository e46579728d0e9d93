use std::collections::BTreeMap;

/// Stable node identity, assigned by whatever populated the tree shape.
pub type NodeId = String;

/// The tree's skeleton: which nodes exist, who their children are, and in
/// what order. Forests are first-class — `roots` may hold more than one
/// entry, preserved in the order the caller supplied (no independent sort).
///
/// This is the full shape, known synchronously by the caller; it is
/// deliberately separate from the lazily chunk-loaded per-node payload the
/// underlying [`vt_list::List`] fetches, matching the source system's split
/// between tree topology (cheap, usually known upfront) and rich row data
/// (expensive, virtualized).
#[derive(Debug, Clone, Default)]
pub struct TreeShape {
    pub roots: Vec<NodeId>,
    children: BTreeMap<NodeId, Vec<NodeId>>,
    parents: BTreeMap<NodeId, NodeId>,
}

impl TreeShape {
    pub fn new(roots: Vec<NodeId>) -> Self {
        Self {
            roots,
            children: BTreeMap::new(),
            parents: BTreeMap::new(),
        }
    }

    /// Declare `id`'s children, in order. Overwrites any previous entry and
    /// updates the derived parent index.
    pub fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        for child in &children {
            self.parents.insert(child.clone(), id.clone());
        }
        self.children.insert(id, children);
    }

    pub fn has_children(&self, id: &NodeId) -> bool {
        self.children.get(id).is_some_and(|c| !c.is_empty())
    }

    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.parents.get(id)
    }

    /// Every node with at least one child, in no particular order. Used by
    /// `ExpandAll`.
    pub fn nodes_with_children(&self) -> impl Iterator<Item = &NodeId> {
        self.children.iter().filter(|(_, c)| !c.is_empty()).map(|(id, _)| id)
    }

    /// Pre-order DFS of every descendant of `id` (not including `id`
    /// itself), regardless of expansion state — cascading selection must
    /// reach collapsed descendants too.
    pub fn descendants_of(&self, id: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children_of(id).iter().rev().cloned().collect();
        while let Some(next) = stack.pop() {
            for child in self.children_of(&next).iter().rev() {
                stack.push(child.clone());
            }
            out.push(next);
        }
        out
    }
}
