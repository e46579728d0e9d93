use crate::config::ViewportConfig;
use crate::state::ViewportState;

/// Clamp a prospective `viewport_start_index` into `[0, total - height]`
/// (or `0` when the dataset fits entirely on screen).
fn clamp_start(start: usize, config: &ViewportConfig, total: usize) -> usize {
    if total <= config.height {
        0
    } else {
        start.min(total - config.height)
    }
}

/// The single canonical bounds/flags pass every operation in this module
/// funnels through before returning. This is the only place §3's invariants
/// are established; individual operations only need to get `cursor_index`
/// and a *candidate* `viewport_start_index` roughly right.
pub fn update_viewport_bounds(
    mut state: ViewportState,
    config: &ViewportConfig,
    total: usize,
) -> ViewportState {
    if total == 0 {
        return ViewportState::empty();
    }

    let max_index = total - 1;
    state.cursor_index = state.cursor_index.min(max_index);

    let mut start = clamp_start(state.viewport_start_index, config, total);
    if state.cursor_index < start {
        start = state.cursor_index;
    } else if state.cursor_index >= start + config.height {
        start = state.cursor_index + 1 - config.height;
    }
    start = clamp_start(start, config, total);

    state.viewport_start_index = start;
    state.cursor_viewport_index = state.cursor_index - start;
    state.at_dataset_start = state.cursor_index == 0;
    state.at_dataset_end = state.cursor_index == max_index;
    state.is_at_top_threshold = config
        .top_threshold
        .is_some_and(|t| t == state.cursor_viewport_index);
    state.is_at_bottom_threshold = config
        .bottom_threshold
        .is_some_and(|t| t == state.cursor_viewport_index);

    state
}

pub fn cursor_up(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    if total == 0 || state.cursor_index == 0 {
        return update_viewport_bounds(state, config, total);
    }
    let mut next = state;
    match config.top_threshold {
        Some(threshold) => {
            let would_cross = state.cursor_viewport_index <= threshold;
            let room_to_scroll = state.viewport_start_index > 0;
            if would_cross && room_to_scroll {
                next.viewport_start_index -= 1;
            }
            next.cursor_index -= 1;
        }
        None => {
            if state.cursor_viewport_index == 0 {
                next.viewport_start_index = state.viewport_start_index.saturating_sub(1);
            }
            next.cursor_index -= 1;
        }
    }
    update_viewport_bounds(next, config, total)
}

pub fn cursor_down(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    if total == 0 || state.cursor_index + 1 >= total {
        return update_viewport_bounds(state, config, total);
    }
    let mut next = state;
    match config.bottom_threshold {
        Some(threshold) => {
            let would_cross = state.cursor_viewport_index >= threshold;
            let room_to_scroll = state.viewport_start_index + config.height < total;
            if would_cross && room_to_scroll {
                next.viewport_start_index += 1;
            }
            next.cursor_index += 1;
        }
        None => {
            if state.cursor_viewport_index + 1 >= config.height {
                next.viewport_start_index = state.viewport_start_index + 1;
            }
            next.cursor_index += 1;
        }
    }
    update_viewport_bounds(next, config, total)
}

pub fn page_up(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    if total == 0 {
        return update_viewport_bounds(state, config, total);
    }
    let new_cursor = state.cursor_index.saturating_sub(config.height);
    let target_row = config.top_threshold.unwrap_or(0);
    let start = new_cursor.saturating_sub(target_row);
    let next = ViewportState {
        cursor_index: new_cursor,
        viewport_start_index: start,
        ..state
    };
    update_viewport_bounds(next, config, total)
}

pub fn page_down(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    if total == 0 {
        return update_viewport_bounds(state, config, total);
    }
    let new_cursor = (state.cursor_index + config.height).min(total - 1);
    let target_row = config.bottom_threshold.unwrap_or(config.height - 1);
    let start = new_cursor.saturating_sub(target_row);
    let next = ViewportState {
        cursor_index: new_cursor,
        viewport_start_index: start,
        ..state
    };
    update_viewport_bounds(next, config, total)
}

pub fn jump_to_start(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    let next = ViewportState {
        cursor_index: 0,
        viewport_start_index: 0,
        ..state
    };
    update_viewport_bounds(next, config, total)
}

pub fn jump_to_end(state: ViewportState, config: &ViewportConfig, total: usize) -> ViewportState {
    if total == 0 {
        return ViewportState::empty();
    }
    let cursor_index = total - 1;
    let start = if total <= config.height {
        0
    } else {
        total - config.height
    };
    let next = ViewportState {
        cursor_index,
        viewport_start_index: start,
        ..state
    };
    update_viewport_bounds(next, config, total)
}

pub fn jump_to(
    state: ViewportState,
    config: &ViewportConfig,
    total: usize,
    index: usize,
) -> ViewportState {
    if total == 0 {
        return ViewportState::empty();
    }
    let index = index.min(total - 1);

    let start = if total <= config.height {
        0
    } else if config.top_threshold.is_some_and(|t| index < t) {
        0
    } else if config
        .bottom_threshold
        .is_some_and(|t| index > total.saturating_sub(t + 1))
    {
        total - config.height
    } else {
        let center_offset = config.top_threshold.unwrap_or(config.height / 2);
        index.saturating_sub(center_offset)
    };

    let next = ViewportState {
        cursor_index: index,
        viewport_start_index: start,
        ..state
    };
    update_viewport_bounds(next, config, total)
}
