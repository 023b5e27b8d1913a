use tracing::{debug, trace};

use crate::model::span::Span;
use crate::model::summary::{SpanTimestamp, TraceSummary};
use crate::service::{dedup_endpoints, endpoints_for_span, service_names};

/// Reduces the spans of one trace to a summary.
///
/// Returns `None` when there are no spans or the first span carries no
/// timestamp. Only the first span is probed; later spans without timing
/// are tolerated and simply contribute nothing to the duration.
pub fn summarize(spans: &[Span]) -> Option<TraceSummary> {
    let first = spans.first()?;
    let Some(timestamp) = first.start_us() else {
        debug!(trace_id = %first.trace_id, "skipping trace without a root timestamp");
        return None;
    };

    let endpoints = dedup_endpoints(spans.iter().flat_map(endpoints_for_span))
        .into_iter()
        .cloned()
        .collect();

    let summary = TraceSummary {
        trace_id: first.trace_id.clone(),
        timestamp,
        duration: trace_duration(spans).unwrap_or(0),
        span_timestamps: span_timestamps(spans),
        endpoints,
    };
    trace!(
        trace_id = %summary.trace_id,
        duration_us = summary.duration,
        entries = summary.span_timestamps.len(),
        "summarized trace"
    );
    Some(summary)
}

/// Summarizes each trace in order, dropping those without timing.
pub fn summarize_all<T: AsRef<[Span]>>(traces: &[T]) -> Vec<TraceSummary> {
    traces
        .iter()
        .filter_map(|spans| summarize(spans.as_ref()))
        .collect()
}

/// Wall-clock extent of the trace: earliest start to latest known end.
/// `None` when fewer than two time points are known or the extent does
/// not fit in an `i64`.
pub fn trace_duration(spans: &[Span]) -> Option<i64> {
    let mut points: Vec<i64> = spans
        .iter()
        .flat_map(|span| span.start_us().into_iter().chain(span.end_us()))
        .collect();
    if points.len() < 2 {
        return None;
    }
    points.sort_unstable();
    points[points.len() - 1].checked_sub(points[0])
}

fn span_timestamps(spans: &[Span]) -> Vec<SpanTimestamp> {
    spans
        .iter()
        .flat_map(|span| {
            service_names(span)
                .into_iter()
                .map(move |name| SpanTimestamp {
                    name: name.to_string(),
                    timestamp: span.timestamp,
                    duration: span.duration,
                })
        })
        .collect()
}
