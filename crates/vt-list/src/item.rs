/// One row's worth of list state: the caller's opaque payload plus the
/// metadata the data source reports alongside it.
///
/// The data source owns `selected`; the core only ever reads it back out of
/// chunk replies and never flips it locally, matching the selection
/// coordinator's "reconcile, never assume" rule.
#[derive(Debug, Clone)]
pub struct Item<T> {
    pub id: String,
    pub item: T,
    pub selected: bool,
    pub loading: bool,
    pub disabled: bool,
    pub error: Option<String>,
}

impl<T> Item<T> {
    pub fn new(id: impl Into<String>, item: T) -> Self {
        Self {
            id: id.into(),
            item,
            selected: false,
            loading: false,
            disabled: false,
            error: None,
        }
    }
}

/// Read-only derived view over the cache: how many loaded items are
/// currently selected, and whether that count could still be incomplete
/// because part of the dataset hasn't been fetched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub selected_count: usize,
    pub is_partial: bool,
}
