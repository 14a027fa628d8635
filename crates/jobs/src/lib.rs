pub mod probe_scheduler;
pub mod query_set;
pub mod runner;

pub use probe_scheduler::{ProbeSchedulerJob, SchedulerState};
pub use query_set::{QueryCursor, QuerySet};
pub use runner::JobRunner;
