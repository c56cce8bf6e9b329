use freqgram::corpus::{normalize_line, NgramKind};
use freqgram::counter::NgramCounts;
use freqgram::reports::TOP_K;
use proptest::prelude::*;

// --- STRATEGIES ---

// Mostly letters and spaces so windows repeat, with some uppercase,
// tabs and non-ASCII thrown in.
fn arb_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \tA-Za-zé,.ß]{0,40}").unwrap()
}

fn arb_corpus() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_line(), 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_line_contribution_matches_length(line in arb_line()) {
        let mut counts = NgramCounts::new();
        counts.add_line(&line);
        let len = normalize_line(&line).chars().count() as u64;

        prop_assert_eq!(counts.unigrams.total(), len);
        prop_assert_eq!(
            counts.stats(NgramKind::Trigrams).1,
            NgramKind::Trigrams.count_in(len as usize) as u64
        );
        prop_assert_eq!(counts.bigrams.total(), len.saturating_sub(1));
        prop_assert_eq!(counts.trigrams.total(), len.saturating_sub(2));
    }

    #[test]
    fn test_normalize_is_idempotent(line in arb_line()) {
        let once = normalize_line(&line);
        prop_assert_eq!(normalize_line(&once), once);
    }

    #[test]
    fn test_table_invariants_hold(corpus in arb_corpus()) {
        let mut counts = NgramCounts::new();
        let mut chars = 0u64;
        let mut bigrams = 0u64;
        let mut trigrams = 0u64;
        for line in &corpus {
            counts.add_line(line);
            let len = normalize_line(line).chars().count() as u64;
            chars += len;
            bigrams += len.saturating_sub(1);
            trigrams += len.saturating_sub(2);
        }

        prop_assert!(counts.unigrams.iter().all(|(_, c)| c >= 1));
        prop_assert!(counts.bigrams.iter().all(|(_, c)| c >= 1));
        prop_assert!(counts.trigrams.iter().all(|(_, c)| c >= 1));

        prop_assert_eq!(counts.unigrams.total(), chars);
        prop_assert_eq!(counts.bigrams.total(), bigrams);
        prop_assert_eq!(counts.trigrams.total(), trigrams);
        prop_assert_eq!(counts.lines(), corpus.len() as u64);

        prop_assert!(counts.bigrams.iter().all(|(k, _)| k.chars().count() == 2));
        prop_assert!(counts.trigrams.iter().all(|(k, _)| k.chars().count() == 3));
    }

    #[test]
    fn test_top_is_sorted_and_capped(corpus in arb_corpus()) {
        let mut counts = NgramCounts::new();
        for line in &corpus {
            counts.add_line(line);
        }

        let top = counts.bigrams.top(TOP_K);
        prop_assert_eq!(top.len(), counts.bigrams.len().min(TOP_K));
        for pair in top.windows(2) {
            let (k1, c1) = pair[0];
            let (k2, c2) = pair[1];
            prop_assert!(c1 > c2 || (c1 == c2 && k1 < k2));
        }

        // Nothing left out ranks above the last printed entry.
        if let Some(&(_, floor)) = top.last() {
            let ranked = counts.bigrams.ranked();
            prop_assert!(ranked.iter().skip(TOP_K).all(|&(_, c)| c <= floor));
        }
    }
}
