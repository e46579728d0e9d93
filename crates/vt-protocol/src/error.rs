use thiserror::Error;

/// Errors a [`crate::DataSource`] implementor can report back through a
/// deferred command. These never panic the core; see §7/§8 of the design doc
/// for how each variant is surfaced to a renderer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataSourceError {
    #[error("chunk fetch failed: {0}")]
    ChunkFetch(String),
    #[error("total fetch failed: {0}")]
    TotalFetch(String),
}
