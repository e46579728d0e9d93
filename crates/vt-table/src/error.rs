use thiserror::Error;

/// Construction-time validation failures for the table layer. Everything
/// reachable after construction (missing cells, unloaded rows) is handled
/// inline per the render contract; only a malformed [`crate::TableConfig`]
/// is rejected outright.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("table has no columns")]
    NoColumns,
}
