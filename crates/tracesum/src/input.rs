use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracesum_core::model::span::Span;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum TraceDocument {
    Many(Vec<Vec<Span>>),
    One(Vec<Span>),
}

/// Reads traces from each path, or stdin when `paths` is empty or `-`.
pub fn load_traces(paths: &[PathBuf]) -> anyhow::Result<Vec<Vec<Span>>> {
    if paths.is_empty() {
        return read_stdin();
    }

    let mut traces = Vec::new();
    for path in paths {
        if path == Path::new("-") {
            traces.extend(read_stdin()?);
            continue;
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed reading {}", path.display()))?;
        let parsed = parse_traces(&raw).with_context(|| format!("failed parsing {}", path.display()))?;
        debug!(path = %path.display(), traces = parsed.len(), "loaded traces");
        traces.extend(parsed);
    }
    Ok(traces)
}

fn read_stdin() -> anyhow::Result<Vec<Vec<Span>>> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed reading stdin")?;
    parse_traces(&raw).context("failed parsing stdin")
}

pub fn parse_traces(raw: &str) -> anyhow::Result<Vec<Vec<Span>>> {
    let doc: TraceDocument = serde_json::from_str(raw)?;
    Ok(match doc {
        TraceDocument::Many(traces) => traces,
        TraceDocument::One(spans) => vec![spans],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trace_list() {
        let traces = parse_traces(r#"[[{"traceId":"a","timestamp":1}],[{"traceId":"b"}]]"#).unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[1][0].trace_id, "b");
    }

    #[test]
    fn parses_single_trace() {
        let traces = parse_traces(r#"[{"traceId":"a","timestamp":1},{"traceId":"a"}]"#).unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].len(), 2);
    }

    #[test]
    fn rejects_non_trace_json() {
        assert!(parse_traces(r#"{"traceId":"a"}"#).is_err());
    }
}
