//! Pure functions mapping `(ViewportState, ViewportConfig, Total, action)` to
//! a new `ViewportState`. No I/O, no side effects, no hidden global state —
//! every navigation message the core understands is one call into this
//! crate.
//!
//! A single canonical implementation lives here; there is intentionally no
//! alternate/legacy navigation path and no direct-method API such as
//! `list.move_up()` — callers only ever go through [`crate::ops`].

mod config;
mod ops;
mod state;

pub use config::ViewportConfig;
pub use ops::{
    cursor_down, cursor_up, jump_to, jump_to_end, jump_to_start, page_down, page_up,
    update_viewport_bounds,
};
pub use state::ViewportState;

#[cfg(test)]
mod tests {
    use super::*;

    fn config(height: usize) -> ViewportConfig {
        ViewportConfig::new(height, 8)
    }

    #[test]
    fn empty_dataset_is_zeroed() {
        let state = update_viewport_bounds(ViewportState::default(), &config(8), 0);
        assert_eq!(state, ViewportState::empty());
    }

    #[test]
    fn initial_state_shows_item_zero() {
        let state = update_viewport_bounds(ViewportState::default(), &config(8), 100);
        assert_eq!(state.cursor_index, 0);
        assert_eq!(state.viewport_start_index, 0);
        assert_eq!(state.cursor_viewport_index, 0);
        assert!(state.at_dataset_start);
        assert!(!state.at_dataset_end);
    }

    #[test]
    fn jump_to_end_places_last_item_at_bottom() {
        let cfg = config(8);
        let state = jump_to_end(ViewportState::default(), &cfg, 100);
        assert_eq!(state.cursor_index, 99);
        assert_eq!(state.viewport_start_index, 92);
        assert_eq!(state.cursor_viewport_index, 7);
        assert!(state.at_dataset_end);
    }

    #[test]
    fn jump_to_end_small_dataset_fills_from_start() {
        let cfg = config(8);
        let state = jump_to_end(ViewportState::default(), &cfg, 5);
        assert_eq!(state.cursor_index, 4);
        assert_eq!(state.viewport_start_index, 0);
        assert_eq!(state.cursor_viewport_index, 4);
    }

    #[test]
    fn jump_to_clamps_out_of_range_index() {
        let cfg = config(8);
        let state = jump_to(ViewportState::default(), &cfg, 100, 9999);
        assert_eq!(state.cursor_index, 99);
    }

    #[test]
    fn jump_to_any_index_lands_cursor_exactly() {
        let cfg = config(8).with_thresholds(Some(2), Some(5));
        for i in 0..100 {
            let state = jump_to(ViewportState::default(), &cfg, 100, i);
            assert_eq!(state.cursor_index, i, "JumpTo({i}) must land the cursor exactly");
        }
    }

    #[test]
    fn thresholds_enabled_lock_cursor_while_scrolling() {
        let cfg = config(10).with_thresholds(Some(2), Some(7));
        let mut state = jump_to(ViewportState::default(), &cfg, 100, 50);
        assert_eq!(state.cursor_viewport_index, 2);
        // Walking up repeatedly should keep the cursor pinned at row 2 once
        // the threshold engages, scrolling the viewport instead.
        for _ in 0..5 {
            state = super::cursor_up(state, &cfg, 100);
            assert_eq!(state.cursor_viewport_index, 2);
        }
        assert_eq!(state.cursor_index, 45);
        assert_eq!(state.viewport_start_index, 43);
    }

    #[test]
    fn thresholds_disabled_scroll_only_at_window_edge() {
        let cfg = config(10);
        let mut state = jump_to(ViewportState::default(), &cfg, 100, 50);
        // cursor lands mid-window; stepping up should move within the window
        // first without touching viewport_start_index.
        let start_before = state.viewport_start_index;
        state = super::cursor_up(state, &cfg, 100);
        assert_eq!(state.viewport_start_index, start_before);
    }

    #[test]
    fn cursor_navigation_is_noop_at_dataset_edges() {
        let cfg = config(8);
        let top = jump_to_start(ViewportState::default(), &cfg, 100);
        let still_top = super::cursor_up(top, &cfg, 100);
        assert_eq!(top, still_top);

        let bottom = jump_to_end(ViewportState::default(), &cfg, 100);
        let still_bottom = super::cursor_down(bottom, &cfg, 100);
        assert_eq!(bottom, still_bottom);
    }

    #[test]
    fn total_zero_makes_every_navigation_a_noop() {
        let cfg = config(8);
        let empty = ViewportState::empty();
        assert_eq!(super::cursor_up(empty, &cfg, 0), empty);
        assert_eq!(super::cursor_down(empty, &cfg, 0), empty);
        assert_eq!(super::page_up(empty, &cfg, 0), empty);
        assert_eq!(super::page_down(empty, &cfg, 0), empty);
        assert_eq!(jump_to_start(empty, &cfg, 0), empty);
        assert_eq!(jump_to_end(empty, &cfg, 0), empty);
        assert_eq!(jump_to(empty, &cfg, 0, 5), empty);
    }

    #[test]
    fn page_down_then_page_up_returns_near_origin() {
        let cfg = config(10);
        let total = 500usize;
        for origin in [0usize, 50, 200, 495] {
            let start = jump_to(ViewportState::default(), &cfg, total, origin);
            let down = super::page_down(start, &cfg, total);
            let back = super::page_up(down, &cfg, total);
            let lower = origin.saturating_sub(cfg.height - 1);
            assert!(
                back.cursor_index <= origin && back.cursor_index >= lower,
                "origin={origin} back={}",
                back.cursor_index
            );
        }
    }

    #[test]
    fn invariants_hold_across_random_walk() {
        let cfg = config(7).with_thresholds(Some(1), Some(5));
        let total = 237usize;
        let mut state = update_viewport_bounds(ViewportState::default(), &cfg, total);
        let moves: [fn(ViewportState, &ViewportConfig, usize) -> ViewportState; 6] = [
            super::cursor_up,
            super::cursor_down,
            super::page_up,
            super::page_down,
            jump_to_start,
            jump_to_end,
        ];
        for step in 0..500 {
            let mv = moves[step % moves.len()];
            state = mv(state, &cfg, total);
            assert!(state.cursor_index < total);
            assert_eq!(
                state.cursor_viewport_index,
                state.cursor_index - state.viewport_start_index
            );
            assert!(state.cursor_viewport_index < cfg.height);
            if total >= cfg.height {
                assert!(state.viewport_start_index + cfg.height <= total);
            } else {
                assert_eq!(state.viewport_start_index, 0);
            }
        }
    }
}
