use serde::{Deserialize, Serialize};

use crate::model::span::Endpoint;

/// Timing of one span as seen by one of the services it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpanTimestamp {
    pub name: String,
    pub timestamp: Option<i64>,
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TraceSummary {
    pub trace_id: String,
    pub timestamp: i64,
    pub duration: i64,
    pub span_timestamps: Vec<SpanTimestamp>,
    pub endpoints: Vec<Endpoint>,
}

impl TraceSummary {
    /// Distinct, sorted service names across the summary's endpoints.
    pub fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .endpoints
            .iter()
            .filter_map(|ep| ep.named_service())
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
