pub mod runtime;
pub mod signals;
pub mod web;

pub use runtime::run_until_exit;
pub use signals::wait_for_shutdown_signal;
pub use web::{bind_metrics_listener, start_web_server};
