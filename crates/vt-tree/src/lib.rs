//! Tree flattener (C8): maintains an [`ExpandedSet`] over a [`TreeShape`] and
//! exposes the current pre-order projection to the list core as its
//! `total`/absolute-index space. Layered entirely on top of `vt-list`; it
//! owns no chunk cache or viewport math of its own.

mod expanded;
mod flatten;
mod message;
mod shape;
mod view;

pub use expanded::ExpandedSet;
pub use flatten::{flatten, FlatNode};
pub use message::TreeMessage;
pub use shape::{NodeId, TreeShape};
pub use view::TreeView;

pub use vt_list::{Command, Item, Message, ViewportConfig};

#[cfg(test)]
mod tests {
    use super::*;

    fn cascading_shape() -> TreeShape {
        let mut shape = TreeShape::new(vec!["a".to_string()]);
        shape.set_children("a".to_string(), vec!["b".to_string(), "c".to_string()]);
        shape.set_children("b".to_string(), vec!["b1".to_string(), "b2".to_string()]);
        shape
    }

    /// Scenario 4: cascading selection against a node with a nested subtree
    /// reaches every descendant, including ones inside a still-collapsed
    /// child, with all of them set to the same target state.
    #[test]
    fn cascading_selection_reaches_every_descendant() {
        let shape = cascading_shape();
        let mut tree: TreeView<u32> = TreeView::new(ViewportConfig::new(8, 8), shape);
        tree.cascading_selection = true;

        let commands = tree.update(TreeMessage::SelectToggleNode("a".to_string()));
        let mut ids: Vec<String> = commands
            .iter()
            .filter_map(|c| match c {
                Command::SetSelectedById { id, selected } if *selected => Some(id.clone()),
                _ => None,
            })
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "b1", "b2", "c"]);
    }

    #[test]
    fn non_cascading_selection_addresses_only_the_node() {
        let shape = cascading_shape();
        let mut tree: TreeView<u32> = TreeView::new(ViewportConfig::new(8, 8), shape);
        let commands = tree.update(TreeMessage::SelectToggleNode("a".to_string()));
        assert_eq!(commands.len(), 1);
    }

    /// Scenario 6: collapsing an expanded folder above the cursor shrinks
    /// the flat total and re-anchors the cursor onto the same node (or its
    /// collapsed parent, if the cursor's node was inside the collapsed
    /// subtree).
    #[test]
    fn collapsing_folder_above_cursor_reanchors_to_same_node() {
        let mut shape = TreeShape::new(vec!["root".to_string()]);
        let folder_children: Vec<String> = (0..30).map(|i| format!("f{i}")).collect();
        shape.set_children("root".to_string(), vec!["folder".to_string(), "after".to_string()]);
        shape.set_children("folder".to_string(), folder_children.clone());

        let mut tree: TreeView<u32> = TreeView::new(ViewportConfig::new(8, 8).with_bounding_area(8, 16), shape);
        tree.bootstrap();
        tree.update(TreeMessage::ExpandNode("root".to_string()));
        tree.update(TreeMessage::ExpandNode("folder".to_string()));
        // flat: root, folder, f0..f29, after -> "after" sits at index 32.
        let after_index = tree.flat().iter().position(|n| n.node_id == "after").unwrap();
        tree.update(TreeMessage::List(Message::JumpTo { index: after_index }));

        tree.update(TreeMessage::CollapseNode("folder".to_string()));

        let new_index = tree.flat().iter().position(|n| n.node_id == "after").unwrap();
        assert_eq!(tree.list().viewport().cursor_index, new_index);
        assert_eq!(tree.flat().len(), 3); // root, folder, after
    }

    #[test]
    fn collapsing_ancestor_of_cursor_reanchors_to_parent() {
        let shape = cascading_shape();
        let mut tree: TreeView<u32> = TreeView::new(ViewportConfig::new(8, 8), shape);
        tree.bootstrap();
        tree.update(TreeMessage::ExpandNode("a".to_string()));
        tree.update(TreeMessage::ExpandNode("b".to_string()));
        let b1_index = tree.flat().iter().position(|n| n.node_id == "b1").unwrap();
        tree.update(TreeMessage::List(Message::JumpTo { index: b1_index }));

        tree.update(TreeMessage::CollapseNode("b".to_string()));

        let b_index = tree.flat().iter().position(|n| n.node_id == "b").unwrap();
        assert_eq!(tree.list().viewport().cursor_index, b_index);
    }

    #[test]
    fn expand_all_then_collapse_all_round_trips() {
        let shape = cascading_shape();
        let mut tree: TreeView<u32> = TreeView::new(ViewportConfig::new(8, 8), shape);
        tree.update(TreeMessage::ExpandAll);
        assert_eq!(tree.flat().len(), 5);
        tree.update(TreeMessage::CollapseAll);
        assert_eq!(tree.flat().len(), 1);
    }
}
