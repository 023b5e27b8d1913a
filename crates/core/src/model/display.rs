use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceDuration {
    pub name: String,
    pub count: usize,
    /// Longest span for the service, in whole milliseconds.
    pub max: i64,
}

/// One trace ready for rendering. Durations are milliseconds and
/// percentages are truncated integers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub trace_id: String,
    pub start_ts: String,
    pub timestamp: i64,
    pub duration: f64,
    pub duration_str: String,
    pub service_percentage: i64,
    pub span_count: usize,
    pub service_durations: Vec<ServiceDuration>,
    pub width: i64,
}
