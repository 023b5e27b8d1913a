use std::str::FromStr;
use std::time::Duration;

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TracesumError};
use crate::model::display::DisplayRow;
use crate::model::summary::TraceSummary;

/// Row ordering applied after presentation. `Input` leaves rows as
/// presented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Input,
    DurationDesc,
    DurationAsc,
    TsDesc,
}

impl FromStr for SortOrder {
    type Err = TracesumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "duration_desc" => Ok(Self::DurationDesc),
            "duration_asc" => Ok(Self::DurationAsc),
            "ts_desc" => Ok(Self::TsDesc),
            _ => Err(TracesumError::Parse(format!("unknown sort order: {s}"))),
        }
    }
}

pub fn sort_rows(rows: &mut [DisplayRow], order: SortOrder) {
    match order {
        SortOrder::Input => {}
        SortOrder::DurationDesc => rows.sort_by(|a, b| b.duration.total_cmp(&a.duration)),
        SortOrder::DurationAsc => rows.sort_by(|a, b| a.duration.total_cmp(&b.duration)),
        SortOrder::TsDesc => rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
    }
}

#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    service: Option<Pattern>,
    min_duration: Option<Duration>,
}

impl SummaryFilter {
    pub fn new(service_glob: Option<&str>, min_duration: Option<Duration>) -> Result<Self> {
        let service = service_glob
            .map(|glob| {
                Pattern::new(glob).map_err(|e| {
                    TracesumError::InvalidArgument(format!("invalid service glob {glob}: {e}"))
                })
            })
            .transpose()?;
        Ok(Self {
            service,
            min_duration,
        })
    }

    pub fn matches(&self, summary: &TraceSummary) -> bool {
        if let Some(min) = self.min_duration {
            if summary.duration < 0 || (summary.duration as u128) < min.as_micros() {
                return false;
            }
        }
        match &self.service {
            Some(pattern) => summary
                .endpoints
                .iter()
                .filter_map(|ep| ep.named_service())
                .any(|name| pattern.matches(name)),
            None => true,
        }
    }

    pub fn apply(&self, summaries: Vec<TraceSummary>) -> Vec<TraceSummary> {
        summaries.into_iter().filter(|s| self.matches(s)).collect()
    }
}
