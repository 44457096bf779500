use serde::Serialize;

use crate::helpers::{find_closest_value_within, find_string_ignoring_case};

/// Outcome of a `suggest` lookup. A missing match is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub query: String,
    #[serde(rename = "match")]
    pub matched: Option<String>,
    pub exact: bool,
}

pub fn run(query: &str, candidates: &[String], max_distance: usize) -> Suggestion {
    let exact = find_string_ignoring_case(query, candidates);
    let matched = exact.or_else(|| find_closest_value_within(query, candidates, max_distance));

    tracing::debug!(
        query,
        candidates = candidates.len(),
        matched = ?matched,
        "Resolved suggestion"
    );

    Suggestion {
        query: query.to_owned(),
        matched: matched.map(str::to_owned),
        exact: exact.is_some(),
    }
}
