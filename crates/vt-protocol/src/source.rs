use std::future::Future;
use std::pin::Pin;

use crate::error::DataSourceError;
use crate::request::DataRequest;

/// Boxed, `Send`, `'static` future — the shape every [`DataSource`] method
/// returns. The core never awaits these itself; the host runtime drives them
/// to completion and feeds the result back in as a [`crate::Message`]-shaped
/// reply (owned by `vt-list`, which is the only crate that actually
/// dispatches [`crate::Command`] values).
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// One fetched page, carrying back the request that produced it so the
/// validator can check it against the currently active template.
#[derive(Debug, Clone)]
pub struct ChunkReply<T> {
    pub request: DataRequest,
    pub start_index: usize,
    pub items: Vec<T>,
}

/// Which selection operation a [`SelectionReply`] is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOperation {
    SetSelected,
    SetSelectedById,
    SelectAll,
    ClearSelection,
    SelectRange,
}

/// Reply to any selection-mutating command. Selection state is owned by the
/// data source; this reply carries enough information for a renderer that
/// wants to refresh incrementally instead of reloading every chunk.
#[derive(Debug, Clone)]
pub struct SelectionReply {
    pub success: bool,
    pub operation: SelectionOperation,
    pub index: Option<usize>,
    pub id: Option<String>,
    pub selected: bool,
    pub error: Option<String>,
    pub affected_ids: Vec<String>,
}

impl SelectionReply {
    pub fn failure(operation: SelectionOperation, error: impl Into<String>) -> Self {
        Self {
            success: false,
            operation,
            index: None,
            id: None,
            selected: false,
            error: Some(error.into()),
            affected_ids: Vec::new(),
        }
    }
}

/// The async contract between the core and the data provider.
///
/// Every method returns a deferred future; the core itself never calls into
/// storage synchronously (§4.4/§5 of the design doc). `item_id` is the sole
/// exception: it is pure and synchronous because it never touches storage,
/// matching Design Note §9's "no reflection, always a caller-supplied id
/// function" requirement.
pub trait DataSource<T>: Send + Sync {
    fn load_chunk(&self, request: DataRequest) -> BoxFuture<Result<ChunkReply<T>, DataSourceError>>;

    fn get_total(&self) -> BoxFuture<Result<usize, DataSourceError>>;

    /// Semantically identical to `get_total`; kept as a distinct method so a
    /// data source can distinguish "first load" from "external mutation
    /// happened, please recount" in its own telemetry.
    fn refresh_total(&self) -> BoxFuture<Result<usize, DataSourceError>> {
        self.get_total()
    }

    fn set_selected(&self, index: usize, selected: bool) -> BoxFuture<SelectionReply>;
    fn set_selected_by_id(&self, id: String, selected: bool) -> BoxFuture<SelectionReply>;
    fn select_all(&self) -> BoxFuture<SelectionReply>;
    fn clear_selection(&self) -> BoxFuture<SelectionReply>;
    fn select_range(&self, start_id: String, end_id: String) -> BoxFuture<SelectionReply>;

    /// Pure; no command. Must be stable across refreshes for the same
    /// logical item (tree expansion state keys on this).
    fn item_id(&self, item: &T) -> String;
}

/// Deferred effect emitted by the core for the host runtime to schedule.
/// Mirrors [`DataSource`]'s operations one-to-one minus `item_id`, which
/// never needs scheduling.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadChunk(DataRequest),
    GetTotal,
    RefreshTotal,
    SetSelected { index: usize, selected: bool },
    SetSelectedById { id: String, selected: bool },
    SelectAll,
    ClearSelection,
    SelectRange { start_id: String, end_id: String },
}
