use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// A name and record type the prober asks for on every cycle.
/// Uses `Arc<str>` so that each dispatched probe clones it for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl ProbeQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds the query list from a comma separated name list.
    ///
    /// Empty entries are dropped; every name is asked for as an A record.
    pub fn from_name_list(names: &str) -> Vec<ProbeQuery> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| ProbeQuery::new(name, RecordType::A))
            .collect()
    }
}

impl fmt::Display for ProbeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.record_type)
    }
}
