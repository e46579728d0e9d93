use vt_render::BackgroundFn;

use crate::column::{Column, RowFn};

/// Plain-data table configuration: columns, header visibility, the glyph
/// placed between cells, and the optional row/background overrides.
/// Constructed by the caller, replaced atomically on a render-config
/// message — the same shape `vt-render::RenderConfig` takes.
pub struct TableConfig<T> {
    pub columns: Vec<Column<T>>,
    pub show_header: bool,
    pub separator: String,
    pub row_formatter: Option<RowFn<T>>,
    /// Applied to the fully assembled row string; a common use is
    /// highlighting the cursor row via `render_context.is_cursor`.
    pub row_background: Option<BackgroundFn>,
    /// Placed in every cell of a row whose chunk hasn't loaded yet, or that
    /// its data source reported an error for. Same defaults as the content
    /// component of `vt-render`'s `RenderConfig`.
    pub loading_text: String,
    pub error_text: String,
    /// Shown in place of the header and every row when the list's `total`
    /// is zero.
    pub empty_state: String,
}

impl<T> TableConfig<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            show_header: true,
            separator: " ".to_string(),
            row_formatter: None,
            row_background: None,
            loading_text: "…".to_string(),
            error_text: "!".to_string(),
            empty_state: String::new(),
        }
    }
}
