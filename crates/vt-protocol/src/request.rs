use std::collections::BTreeMap;

/// Sort direction for a single sort field.
///
/// The wire vocabulary only ever spells these two strings; the enum exists so
/// callers never pass typos through as silently-ignored sort clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// An opaque filter value. Filters are string-keyed and the core never
/// interprets their contents; evaluation is entirely delegated to the data
/// source. The variants here cover what a filter UI typically needs to hand
/// back without requiring every caller to serialize to a string.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// A request for one page of the dataset under a given sort/filter template.
///
/// Two requests are *equivalent* (see [`DataRequest::is_equivalent`]) iff
/// `start`, `count`, `sort_fields`, `sort_directions`, and `filters` all
/// match; `generation` is deliberately excluded from that comparison. A
/// request *matches the active template* (see [`DataRequest::matches_template`])
/// iff `sort_fields`, `sort_directions`, `filters`, and `generation` match —
/// `start`/`count` are excluded there because a single template produces many
/// requests for different pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRequest {
    pub start: usize,
    pub count: usize,
    pub sort_fields: Vec<String>,
    pub sort_directions: Vec<SortDirection>,
    pub filters: BTreeMap<String, FilterValue>,
    pub generation: u64,
}

impl DataRequest {
    pub fn new(start: usize, count: usize, generation: u64) -> Self {
        Self {
            start,
            count,
            sort_fields: Vec::new(),
            sort_directions: Vec::new(),
            filters: BTreeMap::new(),
            generation,
        }
    }

    /// Returns the inclusive end index this request covers, or `None` for a
    /// zero-length request.
    pub fn end_index(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(self.start + self.count - 1)
        }
    }

    /// Equivalence used to suppress duplicate in-flight chunk loads.
    pub fn is_equivalent(&self, other: &DataRequest) -> bool {
        self.start == other.start
            && self.count == other.count
            && self.sort_fields == other.sort_fields
            && self.sort_directions == other.sort_directions
            && self.filters == other.filters
    }

    /// Template match used by the request validator to accept/reject replies.
    pub fn matches_template(&self, other: &DataRequest) -> bool {
        self.sort_fields == other.sort_fields
            && self.sort_directions == other.sort_directions
            && self.filters == other.filters
            && self.generation == other.generation
    }

    /// Derive a request for a different chunk start/count under the same
    /// sort/filter/generation template.
    pub fn with_range(&self, start: usize, count: usize) -> Self {
        Self {
            start,
            count,
            sort_fields: self.sort_fields.clone(),
            sort_directions: self.sort_directions.clone(),
            filters: self.filters.clone(),
            generation: self.generation,
        }
    }
}
