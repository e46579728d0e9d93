/// Snapshot of cursor/viewport position plus the flags derived from it.
///
/// Invariants (enforced by [`crate::ops::update_viewport_bounds`] at the end
/// of every operation in this crate):
/// 1. `0 <= cursor_index < max(1, total)`, or `total == 0` and the state is
///    the zeroed [`Default`].
/// 2. `cursor_viewport_index == cursor_index - viewport_start_index` and
///    `0 <= cursor_viewport_index < height`.
/// 3. `viewport_start_index + height <= total` whenever `total >= height`;
///    otherwise `viewport_start_index == 0`.
/// 4. A threshold flag holds iff that threshold is enabled and the cursor
///    sits exactly at the corresponding viewport row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub cursor_index: usize,
    pub viewport_start_index: usize,
    pub cursor_viewport_index: usize,
    pub is_at_top_threshold: bool,
    pub is_at_bottom_threshold: bool,
    pub at_dataset_start: bool,
    pub at_dataset_end: bool,
}

impl ViewportState {
    /// The empty, all-zeroed state used whenever `total == 0`.
    pub fn empty() -> Self {
        Self::default()
    }
}
