//! Batch extraction of lot/block/section triples from assessor text exports

use parcel_types::ParcelTriple;

use crate::patterns::{HYPHEN_WRAP, LEGAL_TRIPLE, LINE_BREAK};

/// Undo fixed-width wrapping: join hyphen-broken words, then collapse the
/// remaining line breaks into single spaces. Lossy by construction — a
/// hyphen at end-of-line always joins, whether or not the fragments belong
/// together.
pub fn normalize_corpus(text: &str) -> String {
    let joined = HYPHEN_WRAP.replace_all(text, "$1$2");
    LINE_BREAK.replace_all(&joined, " ").into_owned()
}

/// Scan a raw corpus for the extraction grammar. One triple per
/// non-overlapping match, left to right; spans that do not match are
/// skipped. Never fails on malformed input.
pub fn extract_triples(text: &str) -> Vec<ParcelTriple> {
    let normalized = normalize_corpus(text);
    LEGAL_TRIPLE
        .captures_iter(&normalized)
        .map(|cap| ParcelTriple {
            lot_type: cap[1].to_string(),
            lot: cap[2].to_string(),
            block: cap[3].to_string(),
            section: cap[4].to_string(),
            raw_text: cap[0].to_string(),
        })
        .collect()
}

/// Render triples as the batch CSV artifact: a `lot,block,section` header
/// followed by one record per triple in text order.
pub fn to_csv(triples: &[ParcelTriple]) -> String {
    let mut out = String::from("lot,block,section\n");
    for triple in triples {
        out.push_str(&triple.lot);
        out.push(',');
        out.push_str(&triple.block);
        out.push(',');
        out.push_str(&triple.section);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_lt_tagged_triple() {
        let triples = extract_triples("CONVEYS LT 5 BLK 3 SEC 12 WOODLAND LAKES");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].lot_type, "LT");
        assert_eq!(triples[0].lot, "5");
        assert_eq!(triples[0].block, "3");
        assert_eq!(triples[0].section, "12");
    }

    #[test]
    fn test_keeps_full_lot_number() {
        // "LOT 10" is lot ten, never lot one
        let triples = extract_triples("LOT 10 BLK 3 SEC 12");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].lot, "10");
    }

    #[test]
    fn test_discards_sublot_qualifiers() {
        let triples = extract_triples("LOTS 7A-B BLK 14B SEC 2");
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].lot, "7");
        assert_eq!(triples[0].block, "14");
        assert_eq!(triples[0].section, "2");
    }

    #[test]
    fn test_joins_hyphen_broken_wraps() {
        let text = "DEED FOR LOT 5 BLK 3 SEC 12 OF WOOD-\nLAND LAKES SUBDIVISION";
        let normalized = normalize_corpus(text);
        assert!(normalized.contains("WOODLAND LAKES"));
        assert_eq!(extract_triples(text).len(), 1);
    }

    #[test]
    fn test_collapses_line_breaks_inside_a_triple() {
        let text = "LOT 5\nBLK 3\nSEC 12";
        let triples = extract_triples(text);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].lot, "5");
    }

    #[test]
    fn test_skips_non_matching_spans() {
        let text = "NW QUARTER OF SECTION 9, LOT 4 BLK 2 SEC 6, ACREAGE TRACT 13";
        let triples = extract_triples(text);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].lot, "4");
    }

    #[test]
    fn test_preserves_text_order() {
        let text = "LOT 1 BLK 1 SEC 1 ... LT 2 BLK 2 SEC 2 ... LOT 3 BLK 3 SEC 3";
        let lots: Vec<_> = extract_triples(text)
            .into_iter()
            .map(|t| t.lot)
            .collect();
        assert_eq!(lots, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(extract_triples("").is_empty());
        assert!(extract_triples("no parcels here, only prose").is_empty());
    }

    #[test]
    fn test_csv_contract() {
        let triples = extract_triples("LT 5 BLK 3 SEC 12 AND LOT 6 BLK 3 SEC 12");
        assert_eq!(to_csv(&triples), "lot,block,section\n5,3,12\n6,3,12\n");
    }

    #[test]
    fn test_csv_header_only_for_empty_run() {
        assert_eq!(to_csv(&[]), "lot,block,section\n");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Extraction never panics, whatever the corpus contains
        #[test]
        fn extraction_no_panic(text in "\\PC*") {
            let _ = extract_triples(&text);
        }

        /// A synthetic `LOT L BLK B SEC S` span is recovered exactly
        #[test]
        fn synthetic_triple_recovered(
            l in 1u32..100_000,
            b in 1u32..100_000,
            s in 1u32..100_000,
        ) {
            let text = format!("SOUTH HALF OF LOT {} BLK {} SEC {} TOWNSHIP 40", l, b, s);
            let triples = extract_triples(&text);
            prop_assert_eq!(triples.len(), 1);
            prop_assert_eq!(&triples[0].lot, &l.to_string());
            prop_assert_eq!(&triples[0].block, &b.to_string());
            prop_assert_eq!(&triples[0].section, &s.to_string());
        }

        /// Digit runs are taken whole: lot L0 never comes back as lot L
        #[test]
        fn no_digit_substring_truncation(l in 1u32..10_000) {
            let text = format!("LOT {}0 BLK 3 SEC 12", l);
            let triples = extract_triples(&text);
            prop_assert_eq!(triples.len(), 1);
            prop_assert_eq!(&triples[0].lot, &format!("{}0", l));
        }
    }
}
