use crate::shape::NodeId;

/// Tree-specific intents layered on top of [`vt_list::Message`]. Anything not
/// listed here (navigation, data lifecycle, plain index-based selection,
/// filter/sort, render-config, focus/blur) goes through
/// [`TreeMessage::List`] untouched.
pub enum TreeMessage<T> {
    List(vt_list::Message<T>),

    ToggleNode(NodeId),
    ExpandNode(NodeId),
    CollapseNode(NodeId),
    ExpandSubtree(NodeId),
    CollapseSubtree(NodeId),
    ExpandAll,
    CollapseAll,

    /// Selection intent addressed at a node rather than an absolute index;
    /// fans out to every descendant when `CascadingSelection` is on.
    SelectToggleNode(NodeId),
}
