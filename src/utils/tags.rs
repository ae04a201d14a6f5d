use std::sync::OnceLock;

use regex::Regex;

static SEPARATORS: OnceLock<Regex> = OnceLock::new();

/// Splits the free-text tag field on runs of whitespace and commas
/// (fullwidth ， included) and drops empty pieces.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let separators =
        SEPARATORS.get_or_init(|| Regex::new(r"[\s,，]+").expect("tag separator pattern"));
    separators
        .split(raw)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
