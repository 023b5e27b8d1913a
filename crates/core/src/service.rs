//! Endpoint collection and service-name resolution for spans.

use std::collections::HashSet;

use crate::annotation::{
    CLIENT_ADDR, LOCAL_COMPONENT, SERVER_ADDR, is_core_client, is_core_server,
};
use crate::model::span::{Endpoint, Span};

/// Where a candidate service name is read from on a span.
enum Rule {
    BinaryKey(&'static str),
    AnnotationValue(fn(&str) -> bool),
}

/// Most authoritative first: the server's own address, then anything the
/// server logged, then the client's view, then in-process components.
const PRECEDENCE: [Rule; 5] = [
    Rule::BinaryKey(SERVER_ADDR),
    Rule::AnnotationValue(is_core_server),
    Rule::BinaryKey(CLIENT_ADDR),
    Rule::AnnotationValue(is_core_client),
    Rule::BinaryKey(LOCAL_COMPONENT),
];

impl Rule {
    fn find<'a>(&self, span: &'a Span) -> Option<&'a str> {
        match self {
            Rule::BinaryKey(key) => span
                .binary_annotations
                .iter()
                .filter(|b| b.key == *key)
                .find_map(|b| b.endpoint.as_ref().and_then(Endpoint::named_service)),
            Rule::AnnotationValue(is_marker) => span
                .annotations
                .iter()
                .filter(|a| is_marker(&a.value))
                .find_map(|a| a.endpoint.as_ref().and_then(Endpoint::named_service)),
        }
    }
}

/// The single service a span is displayed under, if any rule matches.
pub fn resolve_service_name(span: &Span) -> Option<&str> {
    PRECEDENCE.iter().find_map(|rule| rule.find(span))
}

/// Every endpoint on the span's annotations then binary annotations, in
/// order, nulls skipped. May contain duplicates.
pub fn endpoints_for_span(span: &Span) -> impl Iterator<Item = &Endpoint> {
    span.annotations
        .iter()
        .filter_map(|a| a.endpoint.as_ref())
        .chain(
            span.binary_annotations
                .iter()
                .filter_map(|b| b.endpoint.as_ref()),
        )
}

/// Drops repeated endpoints, keeping the first occurrence.
pub fn dedup_endpoints<'a>(endpoints: impl IntoIterator<Item = &'a Endpoint>) -> Vec<&'a Endpoint> {
    let mut seen = HashSet::new();
    endpoints
        .into_iter()
        .filter(|ep| seen.insert(*ep))
        .collect()
}

/// Service names of every distinct endpoint on the span. Two endpoints
/// naming the same service from different hosts yield the name twice.
pub fn service_names(span: &Span) -> Vec<&str> {
    dedup_endpoints(endpoints_for_span(span))
        .into_iter()
        .filter_map(Endpoint::named_service)
        .collect()
}
