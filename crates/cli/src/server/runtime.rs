use std::future::Future;
use tokio::runtime;

/// Runs `app` on a multi-thread runtime and returns as soon as it finishes.
///
/// The runtime is shut down in the background: blocking tasks still inside
/// the host resolver are abandoned, not awaited.
pub fn run_until_exit<F>(app: F) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
{
    let runtime = runtime::Builder::new_multi_thread().enable_all().build()?;
    let result = runtime.block_on(app);
    runtime.shutdown_background();
    result
}
