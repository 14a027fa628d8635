use dnsdrone_domain::{DomainError, ProbeQuery};
use std::sync::Arc;

/// The ordered, non-empty list of queries the scheduler cycles through.
///
/// Built once at startup and shared read-only; cloning is a refcount bump.
#[derive(Debug, Clone)]
pub struct QuerySet {
    queries: Arc<[ProbeQuery]>,
}

impl QuerySet {
    pub fn new(queries: Vec<ProbeQuery>) -> Result<Self, DomainError> {
        if queries.is_empty() {
            return Err(DomainError::EmptyQuerySet);
        }
        Ok(Self {
            queries: queries.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbeQuery> {
        self.queries.iter()
    }
}

/// Cyclic position in a `QuerySet`. Owned by the dispatch loop only.
#[derive(Debug)]
pub struct QueryCursor {
    set: QuerySet,
    position: usize,
}

impl QueryCursor {
    pub fn new(set: QuerySet) -> Self {
        Self { set, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the query at the cursor, then advances, wrapping to 0.
    pub fn next_query(&mut self) -> ProbeQuery {
        let query = self.set.queries[self.position].clone();
        self.position = (self.position + 1) % self.set.len();
        query
    }
}
