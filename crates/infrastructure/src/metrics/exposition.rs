//! Prometheus text exposition (format version 0.0.4).

use super::probe_metrics::{MetricsSnapshot, ProbeMetrics};
use std::fmt::Write;

pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const REQUESTS_HELP: &str = "Counter of DNS requests sent";
const RESPONSES_HELP: &str = "Counter of DNS responses";
const LOST_HELP: &str = "Counter of DNS responses lost";
const SKIPPED_HELP: &str = "Counter of DNS requests skipped because too many were in flight";
const DURATION_HELP: &str = "Histogram of the time (in seconds) each request took";

pub fn render_prometheus(metrics: &ProbeMetrics) -> String {
    render_snapshot(metrics.namespace(), &metrics.snapshot())
}

pub fn render_snapshot(namespace: &str, snapshot: &MetricsSnapshot) -> String {
    let mut out = String::with_capacity(2048);

    let name = metric_name(namespace, "request_count_total");
    header(&mut out, &name, REQUESTS_HELP, "counter");
    let _ = writeln!(out, "{name} {}", snapshot.requests);

    let name = metric_name(namespace, "response_count_total");
    header(&mut out, &name, RESPONSES_HELP, "counter");
    for (rcode, count) in &snapshot.responses {
        let _ = writeln!(out, "{name}{{rcode=\"{}\"}} {count}", escape_label(rcode));
    }

    let name = metric_name(namespace, "response_lost_count_total");
    header(&mut out, &name, LOST_HELP, "counter");
    let _ = writeln!(out, "{name} {}", snapshot.lost);

    let name = metric_name(namespace, "request_skipped_total");
    header(&mut out, &name, SKIPPED_HELP, "counter");
    let _ = writeln!(out, "{name} {}", snapshot.skipped);

    let name = metric_name(namespace, "request_duration_seconds");
    header(&mut out, &name, DURATION_HELP, "histogram");
    let histogram = &snapshot.request_duration;
    for (bound, count) in &histogram.buckets {
        let _ = writeln!(out, "{name}_bucket{{le=\"{}\"}} {count}", format_float(*bound));
    }
    let _ = writeln!(out, "{name}_bucket{{le=\"+Inf\"}} {}", histogram.count);
    let _ = writeln!(out, "{name}_sum {}", format_float(histogram.sum));
    let _ = writeln!(out, "{name}_count {}", histogram.count);

    out
}

fn metric_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}_{name}")
    }
}

fn header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} {kind}");
}

fn escape_label(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn format_float(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}
