//! Table layer (C9): column/row/header formatting on top of the list core,
//! reusing its navigation, selection and data lifecycle wholesale and
//! replacing only the render step with a fixed-width column pipeline.

mod column;
mod config;
mod error;
mod view;
mod width;

pub use column::{CellFn, Column, ColumnWidth, FieldFn, RowFn};
pub use config::TableConfig;
pub use error::FormatError;
pub use view::TableView;
pub use width::{fit_cell, fit_to_width, resolve_widths};

pub use vt_list::{Command, Item, Message, ViewportConfig};
pub use vt_render::{Align, BackgroundFn, RenderContext};
