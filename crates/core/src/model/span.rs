use serde::{Deserialize, Serialize};

/// A network participant. Two endpoints are the same only when address,
/// port and service name all match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub port: Option<i32>,
    #[serde(default)]
    pub service_name: Option<String>,
}

impl Endpoint {
    /// Service name when present and non-empty.
    pub fn named_service(&self) -> Option<&str> {
        self.service_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub endpoint: Option<Endpoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BinaryAnnotation {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub endpoint: Option<Endpoint>,
}

/// One call segment. Timestamps and durations are epoch microseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub binary_annotations: Vec<BinaryAnnotation>,
    #[serde(default)]
    pub debug: bool,
}

impl Span {
    /// Start time, treating zero as unset.
    pub fn start_us(&self) -> Option<i64> {
        self.timestamp.filter(|ts| *ts != 0)
    }

    /// End time when both start and a non-zero duration are known and the
    /// sum fits in an `i64`.
    pub fn end_us(&self) -> Option<i64> {
        let start = self.start_us()?;
        let duration = self.duration.filter(|d| *d != 0)?;
        start.checked_add(duration)
    }
}
