//! dnsdrone domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod probe;
pub mod rcode;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::ProbeQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use probe::{Outcome, ProbeResult, Resolution, ResolutionSignal};
