use strsim::levenshtein;

/// Largest edit distance at which a candidate still counts as a suggestion.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 3;

/// Find the first candidate equal to `query` when both are lowercased.
pub fn find_string_ignoring_case<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
) -> Option<&'a str> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|candidate| candidate.to_lowercase() == query)
}

/// Find the closest candidate within [`DEFAULT_MAX_EDIT_DISTANCE`] edits.
pub fn find_closest_value<'a, S: AsRef<str>>(query: &str, candidates: &'a [S]) -> Option<&'a str> {
    find_closest_value_within(query, candidates, DEFAULT_MAX_EDIT_DISTANCE)
}

/// Find the closest candidate within `max_edit_distance` edits.
///
/// A case-insensitive exact match wins outright. Otherwise candidates are
/// scored by Levenshtein distance on their lowercase forms, and the first
/// candidate with the smallest distance is returned.
pub fn find_closest_value_within<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
    max_edit_distance: usize,
) -> Option<&'a str> {
    if let Some(exact) = find_string_ignoring_case(query, candidates) {
        return Some(exact);
    }

    let query = query.to_lowercase();
    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .map(|candidate| (candidate, levenshtein(&query, &candidate.to_lowercase())))
        .filter(|(_, distance)| *distance <= max_edit_distance)
        // min_by_key keeps the first of several equal minimums
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}
