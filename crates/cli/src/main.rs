//! # dnsdrone
//!
//! Sends DNS queries at a fixed rate and exports what came back on a
//! Prometheus endpoint.

mod bootstrap;
mod cli;
mod di;
mod server;

use clap::Parser;
use dnsdrone_api::AppState;
use dnsdrone_jobs::{JobRunner, ProbeSchedulerJob, QuerySet};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    server::run_until_exit(run(cli::Cli::parse()))
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        qps = config.probe.qps,
        local_resolver = config.probe.local_resolver,
        metrics_bind = %config.metrics.bind_address,
        "Configuration loaded"
    );

    let queries = QuerySet::new(config.queries())?;
    if config.probe.local_resolver {
        let ignored: Vec<String> = queries
            .iter()
            .filter(|q| !q.record_type.is_address())
            .map(|q| q.to_string())
            .collect();
        if !ignored.is_empty() {
            warn!(
                queries = %ignored.join(", "),
                "Host resolver only looks up addresses; record types of these queries are ignored"
            );
        }
    }

    let services = di::ProbeServices::build(&config).await?;
    let shutdown = CancellationToken::new();

    let listener = server::bind_metrics_listener(config.metrics.socket_addr()?).await?;
    let mut web = tokio::spawn(server::start_web_server(
        listener,
        AppState::new(services.metrics.clone()),
        shutdown.clone(),
    ));

    info!(
        "Sending {} queries per second to {}",
        config.probe.qps, services.nameserver
    );

    let scheduler = ProbeSchedulerJob::new(services.probe.clone(), queries, config.probe.period())
        .with_startup_delay(config.probe.delay)
        .with_max_in_flight(config.probe.max_in_flight())
        .with_cancellation(shutdown.clone());
    let jobs = JobRunner::new().with_probe_scheduler(scheduler).start();

    let web_result = tokio::select! {
        signal = server::wait_for_shutdown_signal() => {
            match signal {
                Ok(name) => info!(signal = name, "Got signal, exiting"),
                Err(e) => error!(error = %e, "Failed to listen for shutdown signals, exiting"),
            }
            None
        }
        result = &mut web => Some(result),
    };

    shutdown.cancel();

    let mut dispatched = 0;
    for job in jobs {
        dispatched += job.await?;
    }

    let web_result = match web_result {
        Some(result) => result,
        None => web.await,
    };

    let snapshot = services.metrics.snapshot();
    info!(
        dispatched,
        responses = snapshot.total_responses(),
        lost = snapshot.lost,
        skipped = snapshot.skipped,
        "Probe totals"
    );

    web_result?
}
