//! Compiled patterns for the lot/block/section grammar

use lazy_static::lazy_static;
use parcel_types::SearchQuery;
use regex::Regex;

lazy_static! {
    /// Hyphen at end-of-line splitting a word across a wrap; the two
    /// fragments rejoin with the hyphen dropped. Unconditional: it will also
    /// fuse unrelated tokens when a wrap lands on a hyphen.
    pub static ref HYPHEN_WRAP: Regex = Regex::new(r"(\w)-\r?\n(\w)").unwrap();

    /// Remaining line breaks collapse to single spaces.
    pub static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();

    /// The full extraction grammar: lot tag ("LT"/"LOT", optional plural),
    /// lot number, block tag + number, section tag + number. Each number may
    /// trail a run of uppercase letters, hyphens, and ampersands (sub-lot
    /// qualifiers); the run is matched and discarded.
    pub static ref LEGAL_TRIPLE: Regex = Regex::new(
        r"(?i)\b(LT|LOT)S?\s*(\d+)[A-Z\-&]*\s*BLK\s*(\d+)[A-Z\-&]*\s*SEC\s*(\d+)[A-Z\-&]*\b"
    )
    .unwrap();
}

/// Build the matcher for a complete query: lot tag + lot number, then block
/// tag + number, then section tag + number, in order, with any amount of
/// intervening text. Numbers match as whole tokens, so lot "1" cannot hit a
/// description carrying "LOT 10". Returns `None` for an incomplete query —
/// incomplete queries never filter.
pub fn query_pattern(query: &SearchQuery) -> Option<Regex> {
    if !query.is_complete() {
        return None;
    }
    let pattern = format!(
        r"(?i)\b(LT|LOT)\s*{}\b.*\bBLK\s*{}\b.*\bSEC\s*{}\b",
        regex::escape(&query.lot),
        regex::escape(&query.block),
        regex::escape(&query.section),
    );
    // escaped field text always assembles into a valid pattern
    Regex::new(&pattern).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_query_builds_no_pattern() {
        assert!(query_pattern(&SearchQuery::default()).is_none());
        assert!(query_pattern(&SearchQuery::new("5", "3", "")).is_none());
        assert!(query_pattern(&SearchQuery::new("", "3", "12")).is_none());
    }

    #[test]
    fn test_pattern_requires_whole_numeric_tokens() {
        let re = query_pattern(&SearchQuery::new("1", "3", "12")).unwrap();
        assert!(re.is_match("LOT 1 BLK 3 SEC 12"));
        assert!(!re.is_match("LOT 10 BLK 3 SEC 12"));
        assert!(!re.is_match("LOT 15 BLK 3 SEC 12"));
    }

    #[test]
    fn test_pattern_is_case_insensitive_and_gap_tolerant() {
        let re = query_pattern(&SearchQuery::new("5", "3", "12")).unwrap();
        assert!(re.is_match("lot 5 blk 3 sec 12"));
        assert!(re.is_match("LT 5 W 20FT BLK 3 WOODLAND LAKES SEC 12"));
    }

    #[test]
    fn test_pattern_requires_tag_order() {
        let re = query_pattern(&SearchQuery::new("5", "3", "12")).unwrap();
        assert!(!re.is_match("SEC 12 BLK 3 LOT 5"));
        assert!(!re.is_match("BLK 3 LOT 5 SEC 12"));
    }

    #[test]
    fn test_query_text_is_escaped() {
        // stray punctuation in a field must not become pattern syntax
        let re = query_pattern(&SearchQuery::new("5.", "3", "12")).unwrap();
        assert!(!re.is_match("LOT 51 BLK 3 SEC 12"));
    }
}
