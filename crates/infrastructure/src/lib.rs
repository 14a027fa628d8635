//! dnsdrone infrastructure: DNS wire handling, resolver adapters, resolver
//! configuration and the atomic metrics store.
pub mod dns;
pub mod metrics;
pub mod system;
