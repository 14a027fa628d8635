/// Remote Probe Flow Test
///
/// Tick → cursor → NameserverResolver (UDP) → classify → ProbeMetrics → /metrics

#[path = "../common/mod.rs"]
mod common;
use common::{sample, scrape, TestNameserver};

use dnsdrone_api::{create_api_routes, AppState};
use dnsdrone_application::use_cases::ExecuteProbeUseCase;
use dnsdrone_domain::{ProbeQuery, RecordType};
use dnsdrone_infrastructure::dns::NameserverResolver;
use dnsdrone_infrastructure::metrics::ProbeMetrics;
use dnsdrone_jobs::{ProbeSchedulerJob, QuerySet};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const PERIOD: Duration = Duration::from_millis(40);
const TIMEOUT: Duration = Duration::from_millis(150);

fn queries(names: &[&str]) -> QuerySet {
    QuerySet::new(
        names
            .iter()
            .map(|name| ProbeQuery::new(*name, RecordType::A))
            .collect(),
    )
    .unwrap()
}

async fn run_against_nameserver(names: &[&str], run_for: Duration) -> (Arc<ProbeMetrics>, u64) {
    let server = TestNameserver::start().await.unwrap();
    let metrics = Arc::new(ProbeMetrics::default());
    let resolver = Arc::new(NameserverResolver::new(server.addr(), TIMEOUT));
    let probe = Arc::new(ExecuteProbeUseCase::new(resolver, metrics.clone()));
    let token = CancellationToken::new();

    let handle = Arc::new(
        ProbeSchedulerJob::new(probe, queries(names), PERIOD).with_cancellation(token.clone()),
    )
    .start();

    tokio::time::sleep(run_for).await;
    token.cancel();
    let dispatched = handle.await.unwrap();

    // Let in-flight probes reach their answer or their timeout
    tokio::time::sleep(TIMEOUT * 3).await;
    (metrics, dispatched)
}

// ============================================================================
// Full probe flow
// ============================================================================

#[tokio::test]
async fn test_mixed_outcomes_are_all_accounted_for() {
    // Arrange / Act
    let (metrics, dispatched) = run_against_nameserver(
        &["ok.example", "missing.example", "blackhole.example", "broken.example"],
        Duration::from_millis(700),
    )
    .await;

    // Assert
    let snapshot = metrics.snapshot();
    assert!(dispatched >= 8, "only {} probes dispatched", dispatched);
    assert_eq!(snapshot.requests, dispatched);
    assert_eq!(snapshot.total_responses() + snapshot.lost, snapshot.requests);

    assert!(snapshot.responses_for("NOERROR") >= 2);
    assert!(snapshot.responses_for("NXDOMAIN") >= 2);
    assert!(snapshot.responses_for("SERVFAIL") >= 2);
    assert!(snapshot.lost >= 2);

    // Lost probes never observe latency
    assert_eq!(
        snapshot.request_duration.count,
        snapshot.total_responses()
    );
}

#[tokio::test]
async fn test_unreachable_nameserver_only_counts_lost() {
    let (metrics, dispatched) =
        run_against_nameserver(&["blackhole.example"], Duration::from_millis(300)).await;

    let snapshot = metrics.snapshot();
    assert!(dispatched > 0);
    assert_eq!(snapshot.lost, dispatched);
    assert_eq!(snapshot.total_responses(), 0);
    assert_eq!(snapshot.request_duration.count, 0);
}

#[tokio::test]
async fn test_scrape_after_run() {
    // Arrange
    let (metrics, dispatched) =
        run_against_nameserver(&["ok.example", "missing.example"], Duration::from_millis(300))
            .await;
    let app = create_api_routes(AppState::new(metrics.clone()));

    // Act
    let text = scrape(app, "/metrics").await;

    // Assert
    assert_eq!(sample(&text, "dnsdrone_request_count_total"), Some(dispatched));
    let noerror = sample(&text, "dnsdrone_response_count_total{rcode=\"NOERROR\"}").unwrap();
    let nxdomain = sample(&text, "dnsdrone_response_count_total{rcode=\"NXDOMAIN\"}").unwrap();
    assert_eq!(noerror + nxdomain, dispatched);
    assert_eq!(sample(&text, "dnsdrone_response_lost_count_total"), Some(0));
    assert_eq!(
        sample(&text, "dnsdrone_request_duration_seconds_count"),
        Some(dispatched)
    );
    assert_eq!(
        sample(&text, "dnsdrone_request_duration_seconds_bucket{le=\"+Inf\"}"),
        Some(dispatched)
    );
}
