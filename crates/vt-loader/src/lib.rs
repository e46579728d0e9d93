//! Bounding-area load/evict planning (C3) and stale-reply rejection (C5).
//!
//! Both halves are stateless with respect to the request template: they
//! consult a [`vt_cache::ChunkCache`] and a [`vt_viewport::ViewportState`]
//! they are handed, never anything they remember themselves.

mod bounding;
mod validator;

pub use bounding::{aligned_chunk_starts, bounding_range, plan};
pub use validator::accepts;
