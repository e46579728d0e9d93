use vt_list::{Command, List, ViewportConfig};

use crate::expanded::ExpandedSet;
use crate::flatten::{flatten, FlatNode};
use crate::message::TreeMessage;
use crate::shape::{NodeId, TreeShape};

/// Tree flattener (C8) composed with the list core: `shape`/`expanded`
/// determine the current flat projection, whose length becomes the list's
/// `total` and whose positions become the list's absolute indices. The
/// per-node payload is still fetched lazily through the ordinary
/// `vt-list`/`vt-loader` chunk machinery, keyed by the node's position in
/// the flat projection rather than by node ID.
pub struct TreeView<T> {
    list: List<T>,
    shape: TreeShape,
    expanded: ExpandedSet,
    flat: Vec<FlatNode>,
    /// Off by default. When set, a selection intent against a node also
    /// issues the same intent against every descendant, visible or not.
    pub cascading_selection: bool,
}

impl<T: Default + 'static> TreeView<T> {
    pub fn new(viewport_config: ViewportConfig, shape: TreeShape) -> Self {
        let expanded = ExpandedSet::new();
        let flat = flatten(&shape, &expanded);
        let list = List::new(viewport_config);
        Self { list, shape, expanded, flat, cascading_selection: false }
    }

    /// Tell the list core about the initial flat projection and request its
    /// first chunks. The tree's topology is known synchronously, unlike a
    /// plain list's `Total`, so this takes the place of an initial
    /// `DataTotal` reply rather than waiting on one.
    pub fn bootstrap(&mut self) -> Vec<Command> {
        self.list.set_total(self.flat.len())
    }

    pub fn list(&self) -> &List<T> {
        &self.list
    }

    pub fn shape(&self) -> &TreeShape {
        &self.shape
    }

    pub fn flat(&self) -> &[FlatNode] {
        &self.flat
    }

    pub fn view(&self) -> String {
        self.list.view()
    }

    pub fn update(&mut self, message: TreeMessage<T>) -> Vec<Command> {
        match message {
            TreeMessage::List(inner) => self.list.update(inner),
            TreeMessage::ToggleNode(id) => {
                if self.expanded.is_expanded(&id) {
                    self.collapse_node(id)
                } else {
                    self.expand_node(id)
                }
            }
            TreeMessage::ExpandNode(id) => self.expand_node(id),
            TreeMessage::CollapseNode(id) => self.collapse_node(id),
            TreeMessage::ExpandSubtree(id) => self.expand_subtree(id),
            TreeMessage::CollapseSubtree(id) => self.collapse_subtree(id),
            TreeMessage::ExpandAll => self.expand_all(),
            TreeMessage::CollapseAll => self.collapse_all(),
            TreeMessage::SelectToggleNode(id) => self.select_toggle_node(id),
        }
    }

    fn expand_node(&mut self, id: NodeId) -> Vec<Command> {
        if !self.shape.has_children(&id) || self.expanded.is_expanded(&id) {
            return Vec::new();
        }
        let idx = self.flat_index_of(&id);
        self.expanded.expand(id);
        self.reflatten_preserving_cursor(idx.map(|i| i + 1))
    }

    fn collapse_node(&mut self, id: NodeId) -> Vec<Command> {
        if !self.expanded.is_expanded(&id) {
            return Vec::new();
        }
        let idx = self.flat_index_of(&id);
        self.expanded.collapse(&id);
        self.reflatten_preserving_cursor(idx.map(|i| i + 1))
    }

    fn expand_subtree(&mut self, id: NodeId) -> Vec<Command> {
        let idx = self.flat_index_of(&id);
        let mut ids = vec![id.clone()];
        ids.extend(self.shape.descendants_of(&id));
        let to_expand: Vec<NodeId> = ids.into_iter().filter(|n| self.shape.has_children(n)).collect();
        self.expanded.extend(to_expand);
        self.reflatten_preserving_cursor(idx.map(|i| i + 1))
    }

    fn collapse_subtree(&mut self, id: NodeId) -> Vec<Command> {
        let idx = self.flat_index_of(&id);
        let mut ids = self.shape.descendants_of(&id);
        ids.push(id.clone());
        self.expanded.remove_all(&ids);
        self.reflatten_preserving_cursor(idx.map(|i| i + 1))
    }

    fn expand_all(&mut self) -> Vec<Command> {
        let ids: Vec<NodeId> = self.shape.nodes_with_children().cloned().collect();
        self.expanded.extend(ids);
        self.reflatten_preserving_cursor(Some(0))
    }

    fn collapse_all(&mut self) -> Vec<Command> {
        self.expanded.clear();
        self.reflatten_preserving_cursor(Some(0))
    }

    /// Cascading selection reaches every descendant, including collapsed
    /// ones, per §4.8. Non-cascading mode addresses the node by its current
    /// flat index when visible, falling back to an ID-based command when it
    /// is not (e.g. a deep-linked node the caller knows about but that
    /// isn't currently flattened).
    fn select_toggle_node(&self, id: NodeId) -> Vec<Command> {
        let idx = self.flat_index_of(&id);
        let currently_selected = idx.is_some_and(|i| self.list.is_selected(i));
        let target_state = !currently_selected;

        if !self.cascading_selection {
            return match idx {
                Some(index) => vec![Command::SetSelected { index, selected: target_state }],
                None => vec![Command::SetSelectedById { id, selected: target_state }],
            };
        }

        let mut ids = vec![id.clone()];
        ids.extend(self.shape.descendants_of(&id));
        ids.into_iter()
            .map(|node_id| Command::SetSelectedById { id: node_id, selected: target_state })
            .collect()
    }

    fn flat_index_of(&self, id: &NodeId) -> Option<usize> {
        self.flat.iter().position(|n| &n.node_id == id)
    }

    /// Re-flatten, tell the list about the new total, invalidate cached
    /// chunks past `invalidate_from` (positions after the toggled node may
    /// now refer to different nodes), then re-anchor the cursor onto
    /// whatever node it was pointing at before — or that node's nearest
    /// still-visible ancestor, if the node itself just got tucked inside a
    /// freshly-collapsed subtree.
    fn reflatten_preserving_cursor(&mut self, invalidate_from: Option<usize>) -> Vec<Command> {
        let cursor_node = self.flat.get(self.list.viewport().cursor_index).map(|n| n.node_id.clone());

        self.flat = flatten(&self.shape, &self.expanded);
        let mut commands = self.list.set_total(self.flat.len());
        if let Some(from) = invalidate_from {
            commands.extend(self.list.invalidate_from(from));
        }

        if let Some(node_id) = cursor_node {
            let mut anchor = self.flat_index_of(&node_id);
            let mut ancestor = self.shape.parent_of(&node_id).cloned();
            while anchor.is_none() {
                match ancestor {
                    Some(parent) => {
                        anchor = self.flat_index_of(&parent);
                        ancestor = self.shape.parent_of(&parent).cloned();
                    }
                    None => break,
                }
            }
            if let Some(index) = anchor {
                commands.extend(self.list.set_cursor_preserving_viewport(index));
            }
        }
        commands
    }
}
