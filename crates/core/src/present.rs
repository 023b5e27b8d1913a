//! Turns trace summaries into display rows.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::display::{DisplayRow, ServiceDuration};
use crate::model::summary::{SpanTimestamp, TraceSummary};
use crate::time::{format_start_ts, micros_to_millis};

/// Builds one display row per summary, in input order.
///
/// `focus_service` selects the service whose share of each trace is
/// reported as `service_percentage`. Bar widths are relative to the
/// slowest trace in `summaries`.
pub fn present(
    focus_service: Option<&str>,
    summaries: &[TraceSummary],
    utc: bool,
) -> Vec<DisplayRow> {
    let Some(max_duration) = summaries.iter().map(|s| s.duration).max() else {
        return Vec::new();
    };
    let max_duration = micros_to_millis(max_duration);
    debug!(
        traces = summaries.len(),
        max_duration_ms = max_duration,
        focus = focus_service.unwrap_or("-"),
        "presenting trace summaries"
    );

    summaries
        .iter()
        .map(|summary| present_one(focus_service, summary, max_duration, utc))
        .collect()
}

fn present_one(
    focus_service: Option<&str>,
    summary: &TraceSummary,
    max_duration: f64,
    utc: bool,
) -> DisplayRow {
    let duration = micros_to_millis(summary.duration);
    let grouped = group_by_service(&summary.span_timestamps);

    let service_time = focus_service
        .and_then(|name| grouped.get(name))
        .map(|stamps| total_service_time(stamps.iter().copied()))
        .unwrap_or(0);

    DisplayRow {
        trace_id: summary.trace_id.clone(),
        start_ts: format_start_ts(summary.timestamp, utc),
        timestamp: summary.timestamp,
        duration,
        duration_str: format!("{duration:.3}ms"),
        service_percentage: percent(service_time as f64, summary.duration as f64),
        span_count: grouped.values().map(Vec::len).sum(),
        service_durations: service_durations(&grouped),
        width: percent(duration, max_duration),
    }
}

fn group_by_service(stamps: &[SpanTimestamp]) -> BTreeMap<&str, Vec<&SpanTimestamp>> {
    let mut grouped: BTreeMap<&str, Vec<&SpanTimestamp>> = BTreeMap::new();
    for stamp in stamps {
        grouped.entry(stamp.name.as_str()).or_default().push(stamp);
    }
    grouped
}

/// Per-service span count and longest span, sorted by service name.
fn service_durations(grouped: &BTreeMap<&str, Vec<&SpanTimestamp>>) -> Vec<ServiceDuration> {
    grouped
        .iter()
        .map(|(name, stamps)| ServiceDuration {
            name: name.to_string(),
            count: stamps.len(),
            max: stamps.iter().filter_map(|s| s.duration).max().unwrap_or(0) / 1000,
        })
        .collect()
}

/// Time covered by one service's spans within a trace, in microseconds.
///
/// Repeatedly takes the earliest remaining span (first one on ties),
/// folds every span nested inside it into it, and adds its extent.
/// Spans that only partially overlap the earliest one are counted on a
/// later pass, so partial overlaps are counted twice. Spans whose end
/// overflows are skipped and the total saturates.
pub fn total_service_time<'a>(stamps: impl IntoIterator<Item = &'a SpanTimestamp>) -> i64 {
    let mut pending: Vec<(i64, i64)> = stamps
        .into_iter()
        .filter_map(|s| {
            let start = s.timestamp?;
            Some((start, start.checked_add(s.duration?)?))
        })
        .collect();

    let mut total: i64 = 0;
    loop {
        let Some((start, end)) = pending.iter().min_by_key(|(start, _)| *start).copied() else {
            break;
        };
        let (current, next): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|(s, e)| *s >= start && *e <= end);
        let end_ts = current.iter().map(|(_, e)| *e).max().unwrap_or(end);
        total = total.saturating_add(end_ts.saturating_sub(start));
        pending = next;
    }
    total
}

/// Truncated integer percentage; zero when `whole` is zero.
fn percent(part: f64, whole: f64) -> i64 {
    let ratio = part / whole * 100.0;
    if ratio.is_finite() { ratio as i64 } else { 0 }
}
