use vt_list::{Command, List, Message, ViewportConfig};
use vt_render::RenderContext;

use crate::config::TableConfig;
use crate::error::FormatError;
use crate::width::{fit_cell, resolve_widths};

/// Table layer (C9): a [`List`] with column-aware rendering instead of the
/// cursor/enumerator/content pipeline from `vt-render`. Navigation,
/// selection, data lifecycle, filter/sort and focus messages all pass
/// straight through to the underlying list; only rendering differs.
pub struct TableView<T> {
    list: List<T>,
    config: TableConfig<T>,
    total_width: usize,
}

impl<T: Default + 'static> TableView<T> {
    pub fn new(
        viewport_config: ViewportConfig,
        config: TableConfig<T>,
        total_width: usize,
    ) -> Result<Self, FormatError> {
        if config.columns.is_empty() {
            return Err(FormatError::NoColumns);
        }
        Ok(Self { list: List::new(viewport_config), config, total_width })
    }

    pub fn list(&self) -> &List<T> {
        &self.list
    }

    pub fn set_width(&mut self, total_width: usize) {
        self.total_width = total_width;
    }

    pub fn update(&mut self, message: Message<T>) -> Vec<Command> {
        self.list.update(message)
    }

    pub fn view(&self) -> String {
        if self.list.total() == 0 {
            return self.config.empty_state.clone();
        }
        let widths = resolve_widths(&self.config.columns, self.total_width, self.config.separator.len());
        let mut lines = Vec::new();
        if self.config.show_header {
            lines.push(self.header_line(&widths));
        }
        for index in self.list.visible_range() {
            let slot = self.list.row(index);
            let ctx = self.list.render_context(index, slot);
            lines.push(self.row_line(slot.map(|item| &item.item), index, &ctx, &widths));
        }
        lines.join("\n")
    }

    fn header_line(&self, widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .config
            .columns
            .iter()
            .zip(widths)
            .map(|(column, width)| fit_cell(&column.title, *width, column.align, column.padding))
            .collect();
        cells.join(&self.config.separator)
    }

    fn row_line(&self, item: Option<&T>, row_index: usize, ctx: &RenderContext, widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .config
            .columns
            .iter()
            .zip(widths)
            .map(|(column, width)| {
                let raw = if ctx.loading {
                    self.config.loading_text.clone()
                } else if ctx.error.is_some() {
                    self.config.error_text.clone()
                } else {
                    match (&column.formatter, item) {
                        (Some(formatter), Some(item)) => formatter(item, row_index, ctx),
                        (None, Some(item)) => (column.field)(item),
                        _ => String::new(),
                    }
                };
                fit_cell(&raw, *width, column.align, column.padding)
            })
            .collect();

        let assembled = match &self.config.row_formatter {
            Some(row_formatter) => row_formatter(&cells, row_index, ctx),
            None => cells.join(&self.config.separator),
        };

        match &self.config.row_background {
            Some(background) => background(&assembled, ctx),
            None => assembled,
        }
    }
}
