use tracesum_core::annotation::{CLIENT_RECEIVE, CLIENT_SEND, SERVER_ADDR, SERVER_RECEIVE, SERVER_SEND};
use tracesum_core::model::span::{Annotation, BinaryAnnotation, Endpoint, Span};

/// 2016-02-26T00:51:51Z in epoch microseconds.
pub const BASE_TS: i64 = 1_456_447_911_000_000;

pub fn endpoint(ipv4: &str, port: u16, service: &str) -> Endpoint {
    Endpoint {
        ipv4: Some(ipv4.to_string()),
        port: Some(port.into()),
        service_name: Some(service.to_string()),
    }
}

pub fn annotation(timestamp: i64, value: &str, endpoint: &Endpoint) -> Annotation {
    Annotation {
        timestamp: Some(timestamp),
        value: value.to_string(),
        endpoint: Some(endpoint.clone()),
    }
}

pub fn span(trace_id: &str, id: &str, parent_id: Option<&str>, timestamp: i64, duration: i64) -> Span {
    Span {
        trace_id: trace_id.to_string(),
        name: "call".to_string(),
        id: id.to_string(),
        parent_id: parent_id.map(str::to_string),
        timestamp: Some(timestamp),
        duration: Some(duration),
        ..Span::default()
    }
}

/// A client/server call pair: `web` calls `api`, which calls `db`.
/// The trace lasts `scale * 10` microseconds.
pub fn sample_trace(trace_id: &str, scale: i64) -> Vec<Span> {
    let web = endpoint("10.0.0.1", 8080, "web");
    let api = endpoint("10.0.0.2", 9000, "api");
    let db = endpoint("10.0.0.3", 5432, "db");

    let mut root = span(trace_id, "a1", None, BASE_TS, 10 * scale);
    root.name = "get /orders".to_string();
    root.annotations = vec![
        annotation(BASE_TS, CLIENT_SEND, &web),
        annotation(BASE_TS + scale, SERVER_RECEIVE, &api),
        annotation(BASE_TS + 9 * scale, SERVER_SEND, &api),
        annotation(BASE_TS + 10 * scale, CLIENT_RECEIVE, &web),
    ];

    let mut query = span(trace_id, "b2", Some("a1"), BASE_TS + 2 * scale, 5 * scale);
    query.name = "select orders".to_string();
    query.annotations = vec![
        annotation(BASE_TS + 2 * scale, CLIENT_SEND, &api),
        annotation(BASE_TS + 7 * scale, CLIENT_RECEIVE, &api),
    ];
    query.binary_annotations = vec![BinaryAnnotation {
        key: SERVER_ADDR.to_string(),
        value: serde_json::Value::Bool(true),
        endpoint: Some(db),
    }];

    vec![root, query]
}

/// Serializes traces the way a Zipkin v1 API returns them.
pub fn traces_json(traces: &[Vec<Span>]) -> String {
    serde_json::to_string(traces).unwrap()
}
