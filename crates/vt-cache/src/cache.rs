use std::collections::{BTreeMap, BTreeSet};

use crate::chunk::Chunk;

/// In-memory map of loaded chunks keyed by `start_index`, plus the set of
/// starts currently in flight.
///
/// Exclusively owned by the list/tree core; mutated only on reply
/// reconciliation ([`ChunkCache::put`]) or eviction ([`ChunkCache::evict`]).
/// Invariants:
/// * no two chunks overlap;
/// * a chunk is never simultaneously in `loading_set` and present as a
///   complete entry;
/// * [`ChunkCache::clear_all`] is the only action permitted on a generation
///   change, and it empties `loading_set` too.
#[derive(Debug, Default)]
pub struct ChunkCache<T> {
    chunks: BTreeMap<usize, Chunk<T>>,
    loading_set: BTreeSet<usize>,
    clock: u64,
}

impl<T> ChunkCache<T> {
    pub fn new() -> Self {
        Self {
            chunks: BTreeMap::new(),
            loading_set: BTreeSet::new(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.chunks.values().find_map(|chunk| chunk.get(index))
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.chunks.values().any(|chunk| chunk.contains(index))
    }

    pub fn is_loading(&self, start_index: usize) -> bool {
        self.loading_set.contains(&start_index)
    }

    /// Insert or replace a chunk, bumping its access tick and clearing its
    /// start index out of `loading_set`. Overlapping existing chunks are
    /// removed first so the no-overlap invariant always holds.
    pub fn put(&mut self, mut chunk: Chunk<T>) {
        self.loading_set.remove(&chunk.start_index);
        let range = chunk.start_index..chunk.end_index + 1;
        self.chunks.retain(|_, existing| !existing.intersects(range.clone()));
        chunk.loaded_at = self.tick();
        tracing::debug!(
            target: "cache.put",
            start = chunk.start_index,
            end = chunk.end_index,
            "chunk cached"
        );
        self.chunks.insert(chunk.start_index, chunk);
    }

    pub fn evict(&mut self, start_index: usize) {
        if self.chunks.remove(&start_index).is_some() {
            tracing::debug!(target: "cache.evict", start = start_index, "chunk evicted");
        }
    }

    pub fn mark_loading(&mut self, start_index: usize) {
        self.loading_set.insert(start_index);
    }

    pub fn unmark_loading(&mut self, start_index: usize) {
        self.loading_set.remove(&start_index);
    }

    /// The only action permitted on a generation change: drops every chunk
    /// and every in-flight marker so stale replies have nothing to land in.
    pub fn clear_all(&mut self) {
        self.chunks.clear();
        self.loading_set.clear();
        tracing::info!(target: "cache.clear_all", "cache cleared for generation change");
    }

    pub fn loaded_starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks.keys().copied()
    }

    pub fn chunk_at_start(&self, start_index: usize) -> Option<&Chunk<T>> {
        self.chunks.get(&start_index)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn loading_starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.loading_set.iter().copied()
    }

    /// No two cached chunks overlap, and the loading set and the cache's key
    /// set never intersect. Exposed for property tests in downstream crates.
    pub fn check_invariants(&self) -> bool {
        let mut starts: Vec<_> = self.chunks.values().collect();
        starts.sort_by_key(|c| c.start_index);
        let no_overlap = starts.windows(2).all(|w| w[0].end_index < w[1].start_index);
        let disjoint = self
            .chunks
            .keys()
            .all(|start| !self.loading_set.contains(start));
        no_overlap && disjoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vt_protocol::DataRequest;

    fn chunk(start: usize, count: usize) -> Chunk<u32> {
        Chunk::new(
            start,
            (0..count).map(|i| (start + i) as u32).collect(),
            DataRequest::new(start, count, 0),
            0,
        )
    }

    #[test]
    fn put_then_get() {
        let mut cache = ChunkCache::new();
        cache.put(chunk(0, 8));
        assert_eq!(cache.get(3), Some(&3));
        assert!(cache.is_loaded(7));
        assert!(!cache.is_loaded(8));
    }

    #[test]
    fn put_removes_overlapping_chunks() {
        let mut cache = ChunkCache::new();
        cache.put(chunk(0, 8));
        cache.put(chunk(4, 8)); // overlaps [0,7]
        assert!(cache.check_invariants());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_clears_loading_marker() {
        let mut cache: ChunkCache<u32> = ChunkCache::new();
        cache.mark_loading(8);
        cache.put(chunk(8, 8));
        assert!(!cache.is_loading(8));
        assert!(cache.check_invariants());
    }

    #[test]
    fn clear_all_drops_everything() {
        let mut cache = ChunkCache::new();
        cache.put(chunk(0, 8));
        cache.mark_loading(8);
        cache.clear_all();
        assert!(cache.is_empty());
        assert_eq!(cache.loading_starts().count(), 0);
    }

    #[test]
    fn no_overlap_invariant_across_many_inserts() {
        let mut cache = ChunkCache::new();
        for start in (0..200).step_by(8) {
            cache.put(chunk(start, 8));
            assert!(cache.check_invariants());
        }
        assert_eq!(cache.len(), 25);
    }
}
