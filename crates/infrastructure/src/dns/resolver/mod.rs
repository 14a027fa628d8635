//! Resolver adapters behind the `ProbeResolver` port.
//!
//! - **System**: the host resolution facility, no explicit timeout
//! - **Nameserver**: a direct UDP exchange with one nameserver, bounded by a timeout

pub mod nameserver;
pub mod system;

pub use nameserver::NameserverResolver;
pub use system::SystemResolver;
