use std::sync::Arc;

use vt_render::{Align, RenderContext};

/// `(item) -> raw cell text`, the default source of a cell's content before
/// width enforcement.
pub type FieldFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// `(item, row_index, render_context) -> cell text`. Overrides `field` when
/// set; receives the same cursor/selection/threshold flags a row formatter
/// in the plain list would.
pub type CellFn<T> = Arc<dyn Fn(&T, usize, &RenderContext) -> String + Send + Sync>;

/// `(cells, row_index, render_context) -> assembled row`. Overrides the
/// default column-separator join when set.
pub type RowFn<T> = Arc<dyn Fn(&[String], usize, &RenderContext) -> String + Send + Sync>;

/// A fixed width in columns, or a weighted share of whatever width is left
/// over after every `Fixed` column (and the separators between columns) is
/// subtracted. Resolved once per render from the table's total width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Fixed(u16),
    Fit(u16),
}

#[derive(Clone)]
pub struct Column<T> {
    pub title: String,
    pub field: FieldFn<T>,
    pub width: ColumnWidth,
    pub align: Align,
    pub padding: usize,
    pub formatter: Option<CellFn<T>>,
}

impl<T> Column<T> {
    pub fn new(title: impl Into<String>, width: ColumnWidth, field: FieldFn<T>) -> Self {
        Self {
            title: title.into(),
            field,
            width,
            align: Align::Left,
            padding: 0,
            formatter: None,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_formatter(mut self, formatter: CellFn<T>) -> Self {
        self.formatter = Some(formatter);
        self
    }
}
