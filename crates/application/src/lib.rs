//! dnsdrone application layer: ports the probe engine depends on, the
//! response classifier and the probe use case.
pub mod ports;
pub mod services;
pub mod use_cases;
