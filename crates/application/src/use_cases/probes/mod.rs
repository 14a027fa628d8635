pub mod execute_probe;

pub use execute_probe::ExecuteProbeUseCase;
