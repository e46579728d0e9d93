use std::ops::Range;

use vt_cache::ChunkCache;
use vt_protocol::{Command, DataRequest};
use vt_viewport::{ViewportConfig, ViewportState};

/// `[max(0, viewport_start - before), min(total, viewport_start + height + after))`
pub fn bounding_range(viewport: &ViewportState, config: &ViewportConfig, total: usize) -> Range<usize> {
    if total == 0 {
        return 0..0;
    }
    let start = viewport
        .viewport_start_index
        .saturating_sub(config.bounding_area_before);
    let end = (viewport.viewport_start_index + config.height + config.bounding_area_after).min(total);
    start..end.max(start)
}

/// Aligned chunk starts covering `range`, stepping by `chunk_size`.
pub fn aligned_chunk_starts(range: Range<usize>, chunk_size: usize) -> Vec<usize> {
    if range.is_empty() || chunk_size == 0 {
        return Vec::new();
    }
    let first = (range.start / chunk_size) * chunk_size;
    let mut starts = Vec::new();
    let mut start = first;
    while start < range.end {
        starts.push(start);
        start += chunk_size;
    }
    starts
}

/// Given the current viewport/config/total and the active request template,
/// emit `LoadChunk` commands for every required-but-missing chunk and evict
/// every loaded chunk outside the bounding area. Mutates `cache` directly for
/// the eviction half (mirrors §4.3: evictions happen immediately, loads are
/// deferred commands).
///
/// Idempotent: calling this twice in a row with unchanged inputs emits no
/// commands the second time, because the first call already marked the
/// requested starts as loading.
pub fn plan<T>(
    cache: &mut ChunkCache<T>,
    viewport: &ViewportState,
    config: &ViewportConfig,
    total: usize,
    template: &DataRequest,
) -> Vec<Command> {
    let range = bounding_range(viewport, config, total);
    let required = aligned_chunk_starts(range.clone(), config.chunk_size);

    let evictable: Vec<usize> = cache
        .loaded_starts()
        .filter(|start| !required.contains(start))
        .collect();
    for start in evictable {
        cache.evict(start);
    }

    let mut commands = Vec::new();
    for start in required {
        if cache.is_loaded(start) || cache.is_loading(start) {
            continue;
        }
        let count = config.chunk_size.min(total.saturating_sub(start));
        if count == 0 {
            continue;
        }
        cache.mark_loading(start);
        let request = template.with_range(start, count);
        tracing::debug!(target: "loader.plan", start, count, "requesting chunk");
        commands.push(Command::LoadChunk(request));
    }
    commands
}
