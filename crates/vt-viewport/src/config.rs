/// Immutable-per-run viewport configuration.
///
/// `top_threshold`/`bottom_threshold` are viewport-relative row positions at
/// which further cursor motion scrolls the viewport instead of moving the
/// cursor within it. The source vocabulary spells "disabled" as `-1`; this
/// crate spells it `None` since that is the idiomatic Rust shape for the same
/// fact and avoids every caller re-deriving a sentinel check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportConfig {
    pub height: usize,
    pub chunk_size: usize,
    pub top_threshold: Option<usize>,
    pub bottom_threshold: Option<usize>,
    pub bounding_area_before: usize,
    pub bounding_area_after: usize,
}

impl ViewportConfig {
    pub fn new(height: usize, chunk_size: usize) -> Self {
        Self {
            height: height.max(1),
            chunk_size: chunk_size.max(1),
            top_threshold: None,
            bottom_threshold: None,
            bounding_area_before: 0,
            bounding_area_after: 0,
        }
    }

    pub fn with_thresholds(mut self, top: Option<usize>, bottom: Option<usize>) -> Self {
        self.top_threshold = top;
        self.bottom_threshold = bottom;
        self
    }

    pub fn with_bounding_area(mut self, before: usize, after: usize) -> Self {
        self.bounding_area_before = before;
        self.bounding_area_after = after;
        self
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(20, 20)
    }
}
