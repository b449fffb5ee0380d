//! Location normalization used when comparing candidates against user input.

use crate::types::suggestion::Suggestion;

/// Prefixes a user types explicitly when they mean a literal location.
const EXPLICIT_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// Strips the first `www.` (wherever it occurs) and then a leading
/// `http://` or `https://`.
///
/// ```
/// use urlbar_suggest::suggestion::normalize::normalize_location;
///
/// assert_eq!(normalize_location("https://www.example.com/a"), "example.com/a");
/// ```
pub fn normalize_location(location: &str) -> String {
    let location = location.replacen("www.", "", 1);
    let location = location.strip_prefix("http://").unwrap_or(&location);
    let location = location.strip_prefix("https://").unwrap_or(location);
    location.to_string()
}

/// Returns false while the input could still be the start of `http://`,
/// `https://` or `www.`; the user is typing a prefix literally then.
pub fn should_normalize_location(input: &str) -> bool {
    !EXPLICIT_PREFIXES
        .iter()
        .any(|prefix| prefix.starts_with(input))
}

/// Normalized location of the active suggestion (the first one when no index
/// is given), or an empty string.
pub fn get_normalized_suggestion(suggestions: &[Suggestion], active_index: Option<usize>) -> String {
    suggestions
        .get(active_index.unwrap_or(0))
        .map(|s| normalize_location(&s.location))
        .unwrap_or_default()
}
