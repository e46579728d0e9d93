use crate::expanded::ExpandedSet;
use crate::shape::{NodeId, TreeShape};

/// One row of the flat projection: the position a node currently occupies
/// in the pre-order traversal, plus enough structural metadata for a
/// renderer to draw indentation and an expand/collapse indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatNode {
    pub node_id: NodeId,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub parent_id: Option<NodeId>,
}

/// Pre-order traversal of `shape` where a node's children are included iff
/// the node is present in `expanded`. This is the entire C8 contract: given
/// the same `(shape, expanded)` snapshot, the result is always identical.
pub fn flatten(shape: &TreeShape, expanded: &ExpandedSet) -> Vec<FlatNode> {
    let mut out = Vec::new();
    for root in &shape.roots {
        visit(shape, expanded, root, 0, None, &mut out);
    }
    out
}

fn visit(
    shape: &TreeShape,
    expanded: &ExpandedSet,
    id: &NodeId,
    depth: usize,
    parent_id: Option<NodeId>,
    out: &mut Vec<FlatNode>,
) {
    let has_children = shape.has_children(id);
    let is_expanded = has_children && expanded.is_expanded(id);
    out.push(FlatNode {
        node_id: id.clone(),
        depth,
        has_children,
        is_expanded,
        parent_id,
    });
    if is_expanded {
        for child in shape.children_of(id) {
            visit(shape, expanded, child, depth + 1, Some(id.clone()), out);
        }
    }
}
