use std::collections::BTreeSet;

use vt_cache::{Chunk, ChunkCache};
use vt_loader::{accepts, plan};
use vt_protocol::{Command, DataRequest, SortDirection};
use vt_render::{render_row, RenderConfig, RenderContext};
use vt_viewport::{
    cursor_down, cursor_up, jump_to, jump_to_end, jump_to_start, page_down, page_up,
    update_viewport_bounds, ViewportConfig, ViewportState,
};

use crate::item::{Item, SelectionSummary};
use crate::message::Message;

/// Linear virtualized list: composes the viewport calculator, chunk cache,
/// bounding-area loader and row render pipeline behind a single
/// `update`/`view` pair (C7). The list never performs I/O itself; every
/// effectful step is returned as a [`Command`] for the host runtime to
/// schedule and feed back in as a message.
pub struct List<T> {
    viewport_config: ViewportConfig,
    viewport: ViewportState,
    cache: ChunkCache<Item<T>>,
    total: usize,
    template: DataRequest,
    render_config: RenderConfig<T>,
    skip_disabled: bool,
    focused: bool,
    failed_starts: BTreeSet<usize>,
}

impl<T: Default + 'static> List<T> {
    pub fn new(viewport_config: ViewportConfig) -> Self {
        Self {
            viewport_config,
            viewport: ViewportState::empty(),
            cache: ChunkCache::new(),
            total: 0,
            template: DataRequest::new(0, 0, 0),
            render_config: RenderConfig::default(),
            skip_disabled: false,
            focused: false,
            failed_starts: BTreeSet::new(),
        }
    }

    /// Off by default: when set, single-step cursor motion steps past rows
    /// the data source's last-known snapshot marked `disabled` instead of
    /// landing the cursor on them. See the disabled-row-skip supplement.
    pub fn with_skip_disabled(mut self, skip_disabled: bool) -> Self {
        self.skip_disabled = skip_disabled;
        self
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn template(&self) -> &DataRequest {
        &self.template
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Derived, read-only fold over the loaded chunks; cheap, since it reuses
    /// the same chunk listing the bounding-area planner already walks.
    pub fn selection_summary(&self) -> SelectionSummary {
        let mut selected_count = 0usize;
        let mut loaded_count = 0usize;
        for start in self.cache.loaded_starts().collect::<Vec<_>>() {
            if let Some(chunk) = self.cache.chunk_at_start(start) {
                loaded_count += chunk.items.len();
                selected_count += chunk.items.iter().filter(|item| item.selected).count();
            }
        }
        SelectionSummary {
            selected_count,
            is_partial: loaded_count < self.total,
        }
    }

    /// Single entry point: apply one message, returning the commands the
    /// host must schedule. No I/O happens here — every effectful step is a
    /// plain-data [`Command`] the caller is responsible for executing.
    pub fn update(&mut self, message: Message<T>) -> Vec<Command> {
        match message {
            Message::CursorUp => {
                self.viewport = self.step_skipping_disabled(cursor_up);
                self.replan()
            }
            Message::CursorDown => {
                self.viewport = self.step_skipping_disabled(cursor_down);
                self.replan()
            }
            Message::PageUp => {
                self.viewport = page_up(self.viewport, &self.viewport_config, self.total);
                self.replan()
            }
            Message::PageDown => {
                self.viewport = page_down(self.viewport, &self.viewport_config, self.total);
                self.replan()
            }
            Message::JumpToStart => {
                self.viewport = jump_to_start(self.viewport, &self.viewport_config, self.total);
                self.replan()
            }
            Message::JumpToEnd => {
                self.viewport = jump_to_end(self.viewport, &self.viewport_config, self.total);
                self.replan()
            }
            Message::JumpTo { index } => {
                self.viewport = jump_to(self.viewport, &self.viewport_config, self.total, index);
                self.replan()
            }

            Message::DataTotal { total } => self.set_total(total),
            Message::DataTotalError { error } => {
                tracing::warn!(target: "list.total_error", %error, "total fetch failed, showing empty state");
                self.total = 0;
                self.viewport = ViewportState::empty();
                self.cache.clear_all();
                self.failed_starts.clear();
                Vec::new()
            }
            Message::DataChunkLoaded { start_index, items, request } => {
                if !accepts(&request, &self.template) {
                    return Vec::new();
                }
                self.failed_starts.remove(&start_index);
                self.cache.put(Chunk::new(start_index, items, request, 0));
                self.replan()
            }
            Message::DataChunkError { start_index, error, request } => {
                if !accepts(&request, &self.template) {
                    return Vec::new();
                }
                tracing::warn!(target: "list.chunk_error", start_index, %error, "chunk load failed");
                self.cache.unmark_loading(start_index);
                self.failed_starts.insert(start_index);
                Vec::new()
            }
            Message::DataRefresh => self.refresh(),

            Message::SelectCurrent => {
                let index = self.viewport.cursor_index;
                self.select_toggle_command(index)
            }
            Message::SelectToggle { index } => self.select_toggle_command(index),
            Message::SelectAll => vec![Command::SelectAll],
            Message::SelectClear => vec![Command::ClearSelection],
            Message::SelectRange { start_id, end_id } => {
                vec![Command::SelectRange { start_id, end_id }]
            }
            Message::SelectionResponse(reply) => {
                if !reply.success {
                    tracing::warn!(target: "list.selection", error = ?reply.error, "selection intent failed");
                    return Vec::new();
                }
                self.cache.clear_all();
                self.failed_starts.clear();
                self.replan()
            }

            Message::FilterSet { field, value } => {
                self.template.filters.insert(field, value);
                self.refresh()
            }
            Message::FilterClear { field } => {
                self.template.filters.remove(&field);
                self.refresh()
            }
            Message::FiltersClearAll => {
                self.template.filters.clear();
                self.refresh()
            }
            Message::SortToggle { field } => {
                self.toggle_sort(field);
                self.refresh()
            }
            Message::SortSet { field, direction } => {
                self.template.sort_fields = vec![field];
                self.template.sort_directions = vec![direction];
                self.refresh()
            }
            Message::SortAdd { field, direction } => {
                if !self.template.sort_fields.contains(&field) {
                    self.template.sort_fields.push(field);
                    self.template.sort_directions.push(direction);
                }
                self.refresh()
            }
            Message::SortRemove { field } => {
                if let Some(pos) = self.template.sort_fields.iter().position(|f| *f == field) {
                    self.template.sort_fields.remove(pos);
                    self.template.sort_directions.remove(pos);
                }
                self.refresh()
            }
            Message::SortsClearAll => {
                self.template.sort_fields.clear();
                self.template.sort_directions.clear();
                self.refresh()
            }

            Message::SetRenderConfig(config) => {
                self.render_config = config;
                Vec::new()
            }

            Message::Focus => {
                self.focused = true;
                Vec::new()
            }
            Message::Blur => {
                self.focused = false;
                Vec::new()
            }
        }
    }

    /// Render the currently visible window as one string, one line (or more,
    /// for wrapped content) per item, joined with `\n`. An empty dataset
    /// renders the configured `empty_state` string instead (§7/§8: "view
    /// equals the configured empty-state string").
    pub fn view(&self) -> String {
        if self.total == 0 {
            return self.render_config.empty_state.clone();
        }
        let placeholder = T::default();
        let mut lines = Vec::new();
        for index in self.visible_range() {
            let slot = self.row(index);
            let ctx = self.render_context(index, slot);
            let payload = slot.map(|item| &item.item).unwrap_or(&placeholder);
            lines.extend(render_row(&self.render_config, payload, index, &ctx));
        }
        lines.join("\n")
    }

    /// Absolute indices of the rows currently inside the viewport. A
    /// renderer built atop this crate (the table layer, in particular) uses
    /// this instead of reaching into private cache state.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.viewport.viewport_start_index;
        let end = (start + self.viewport_config.height).min(self.total);
        start..end
    }

    /// The reconciled record at an absolute index, if its chunk has
    /// finished loading.
    pub fn row(&self, index: usize) -> Option<&Item<T>> {
        self.cache.get(index)
    }

    /// Build the [`RenderContext`] a formatter at `index` would see, given
    /// whatever is (or isn't) currently loaded there. Exposed so other
    /// render surfaces (the table layer) get the same cursor/threshold/
    /// loading semantics as the row pipeline without duplicating them.
    pub fn render_context(&self, index: usize, slot: Option<&Item<T>>) -> RenderContext {
        let mut ctx = RenderContext {
            is_cursor: index == self.viewport.cursor_index,
            ..RenderContext::default()
        };
        if let Some(item) = slot {
            ctx.is_selected = item.selected;
            ctx.disabled = item.disabled;
            ctx.error = item.error.clone();
        } else {
            let start = self.aligned_start(index);
            if self.failed_starts.contains(&start) {
                ctx.error = Some("chunk load failed".to_string());
            } else {
                ctx.loading = true;
            }
        }
        let viewport_relative = index - self.viewport.viewport_start_index;
        ctx.is_top_threshold = self
            .viewport_config
            .top_threshold
            .is_some_and(|t| t == viewport_relative);
        ctx.is_bottom_threshold = self
            .viewport_config
            .bottom_threshold
            .is_some_and(|t| t == viewport_relative);
        ctx
    }

    fn aligned_start(&self, index: usize) -> usize {
        let chunk_size = self.viewport_config.chunk_size.max(1);
        (index / chunk_size) * chunk_size
    }

    fn select_toggle_command(&self, index: usize) -> Vec<Command> {
        vec![Command::SetSelected { index, selected: !self.is_selected(index) }]
    }

    /// Reconciled selection flag for an already-loaded row; `false` for a
    /// row that hasn't been fetched yet (the data source hasn't told the
    /// core anything about it).
    pub fn is_selected(&self, index: usize) -> bool {
        self.cache.get(index).map(|item| item.selected).unwrap_or(false)
    }

    /// Set `total` directly and re-plan, without bumping the request
    /// generation or touching the cache. Used by the ordinary `DataTotal`
    /// reply and by consumers (the tree flattener) whose notion of `total`
    /// changes independently of the data source's sort/filter template.
    pub fn set_total(&mut self, total: usize) -> Vec<Command> {
        self.total = total;
        self.viewport = update_viewport_bounds(self.viewport, &self.viewport_config, total);
        self.replan()
    }

    /// Move the cursor to an absolute index while leaving
    /// `viewport_start_index` untouched when it is still valid, so a caller
    /// re-anchoring the cursor onto a node that didn't move visually doesn't
    /// also relocate the viewport. Falls back to the normal clamp/re-center
    /// behavior of [`vt_viewport::update_viewport_bounds`] when the index no
    /// longer fits the current window.
    pub fn set_cursor_preserving_viewport(&mut self, index: usize) -> Vec<Command> {
        let next = ViewportState { cursor_index: index, ..self.viewport };
        self.viewport = update_viewport_bounds(next, &self.viewport_config, self.total);
        self.replan()
    }

    /// Evict every cached or in-flight chunk whose range reaches `index` or
    /// beyond, then re-plan. Used when a structural change (tree expand/
    /// collapse) shifts what a given absolute index refers to without the
    /// data source's own generation changing.
    pub fn invalidate_from(&mut self, index: usize) -> Vec<Command> {
        let loaded_starts: Vec<usize> = self.cache.loaded_starts().collect();
        for start in loaded_starts {
            let stale = self
                .cache
                .chunk_at_start(start)
                .is_some_and(|chunk| chunk.end_index >= index);
            if stale {
                self.cache.evict(start);
            }
        }
        let loading_starts: Vec<usize> = self.cache.loading_starts().collect();
        for start in loading_starts {
            if start + self.viewport_config.chunk_size > index {
                self.cache.unmark_loading(start);
            }
        }
        self.failed_starts.retain(|start| start + self.viewport_config.chunk_size <= index);
        self.replan()
    }

    fn toggle_sort(&mut self, field: String) {
        if let Some(pos) = self.template.sort_fields.iter().position(|f| *f == field) {
            match self.template.sort_directions[pos] {
                SortDirection::Asc => self.template.sort_directions[pos] = SortDirection::Desc,
                SortDirection::Desc => {
                    self.template.sort_fields.remove(pos);
                    self.template.sort_directions.remove(pos);
                }
            }
        } else {
            self.template.sort_fields.push(field);
            self.template.sort_directions.push(SortDirection::Asc);
        }
    }

    /// Bump generation, drop every cached chunk, and re-request total +
    /// visible chunks under the new template. Shared by the explicit
    /// `DataRefresh` message and every filter/sort mutation (§4.5: "act as
    /// `DataRefresh`").
    fn refresh(&mut self) -> Vec<Command> {
        self.template.generation += 1;
        self.cache.clear_all();
        self.failed_starts.clear();
        tracing::info!(target: "list.refresh", generation = self.template.generation, "template changed, refreshing");
        self.viewport = update_viewport_bounds(self.viewport, &self.viewport_config, self.total);
        let mut commands = vec![Command::RefreshTotal];
        commands.extend(self.replan());
        commands
    }

    fn replan(&mut self) -> Vec<Command> {
        plan(&mut self.cache, &self.viewport, &self.viewport_config, self.total, &self.template)
    }

    /// Apply `op` once, then, if `skip_disabled` is set, keep applying it in
    /// the same direction while the landed-on row is known to be disabled,
    /// up to one pass over the dataset so an all-disabled window can't loop
    /// forever.
    fn step_skipping_disabled(
        &self,
        op: fn(ViewportState, &ViewportConfig, usize) -> ViewportState,
    ) -> ViewportState {
        let mut state = op(self.viewport, &self.viewport_config, self.total);
        if !self.skip_disabled {
            return state;
        }
        let mut guard = 0;
        while guard < self.total {
            let disabled = self.cache.get(state.cursor_index).map(|item| item.disabled).unwrap_or(false);
            if !disabled {
                break;
            }
            let next = op(state, &self.viewport_config, self.total);
            if next == state {
                break;
            }
            state = next;
            guard += 1;
        }
        state
    }
}
