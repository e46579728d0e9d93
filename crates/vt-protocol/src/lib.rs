//! Wire vocabulary shared between the virtualization core and the data
//! provider it is wired against: requests, replies, the deferred command
//! shape, and the async [`DataSource`] contract itself.
//!
//! This crate has no opinion about navigation, caching, or rendering; it only
//! defines the nouns those crates pass across the update/command boundary.

mod error;
mod request;
mod source;

pub use error::DataSourceError;
pub use request::{DataRequest, FilterValue, SortDirection};
pub use source::{BoxFuture, ChunkReply, Command, DataSource, SelectionOperation, SelectionReply};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn req(start: usize, count: usize, generation: u64) -> DataRequest {
        DataRequest::new(start, count, generation)
    }

    #[test]
    fn equivalence_ignores_generation() {
        let a = req(0, 10, 1);
        let b = req(0, 10, 2);
        assert!(a.is_equivalent(&b), "generation must not affect equivalence");
    }

    #[test]
    fn equivalence_respects_start_and_count() {
        let a = req(0, 10, 1);
        let b = req(8, 10, 1);
        assert!(!a.is_equivalent(&b));
    }

    #[test]
    fn template_match_ignores_start_and_count() {
        let mut a = req(0, 10, 3);
        let mut b = req(80, 8, 3);
        a.sort_fields = vec!["name".into()];
        b.sort_fields = vec!["name".into()];
        assert!(a.matches_template(&b));
    }

    #[test]
    fn template_match_rejects_generation_drift() {
        let a = req(0, 10, 3);
        let b = req(0, 10, 4);
        assert!(!a.matches_template(&b));
    }

    #[test]
    fn template_match_rejects_filter_drift() {
        let mut a = req(0, 10, 1);
        let b = req(0, 10, 1);
        let mut filters = BTreeMap::new();
        filters.insert("job".to_string(), FilterValue::Text("Engineer".into()));
        a.filters = filters;
        assert!(!a.matches_template(&b));
    }

    #[test]
    fn with_range_preserves_template() {
        let mut a = req(0, 8, 5);
        a.sort_fields = vec!["age".into()];
        a.sort_directions = vec![SortDirection::Desc];
        let derived = a.with_range(16, 8);
        assert!(a.matches_template(&derived));
        assert_eq!(derived.start, 16);
        assert_eq!(derived.count, 8);
    }
}
