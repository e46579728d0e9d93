use vt_protocol::{DataRequest, FilterValue, SelectionReply, SortDirection};
use vt_render::RenderConfig;

use crate::item::Item;

/// Every message the list core's single `update` entry point understands.
/// Route categories mirror the router's dispatch table: navigation, data
/// lifecycle, selection, filter/sort, render-config, focus/blur.
pub enum Message<T> {
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    JumpToStart,
    JumpToEnd,
    JumpTo { index: usize },

    DataTotal { total: usize },
    DataTotalError { error: String },
    DataChunkLoaded { start_index: usize, items: Vec<Item<T>>, request: DataRequest },
    DataChunkError { start_index: usize, error: String, request: DataRequest },
    DataRefresh,

    SelectCurrent,
    SelectToggle { index: usize },
    SelectAll,
    SelectClear,
    SelectRange { start_id: String, end_id: String },
    SelectionResponse(SelectionReply),

    FilterSet { field: String, value: FilterValue },
    FilterClear { field: String },
    FiltersClearAll,
    SortToggle { field: String },
    SortSet { field: String, direction: SortDirection },
    SortAdd { field: String, direction: SortDirection },
    SortRemove { field: String },
    SortsClearAll,

    SetRenderConfig(RenderConfig<T>),

    Focus,
    Blur,
}
