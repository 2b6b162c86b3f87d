//! Frequency Counter — most common terms across a filtered corpus.

use std::collections::HashMap;

use serde::Serialize;

/// Number of terms reported in the top-term table.
pub const TOP_TERMS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub term: String,
    pub count: usize,
}

/// Counts tokens and returns the `limit` most frequent, highest count first.
/// Equal counts keep the order in which the terms were first seen.
pub fn top_terms(tokens: &[&str], limit: usize) -> Vec<WordFrequency> {
    // term -> (count, first position)
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        tally.entry(*token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<_> = tally.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(term, (count, _))| WordFrequency {
            term: term.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{corpus_text, tokenize};

    #[test]
    fn test_empty_tokens_give_empty_result() {
        assert!(top_terms(&[], TOP_TERMS).is_empty());
    }

    #[test]
    fn test_counts_sorted_descending() {
        let tokens = ["remote", "great", "remote", "coaching", "remote", "great"];
        let top = top_terms(&tokens, TOP_TERMS);
        let pairs: Vec<_> = top.iter().map(|w| (w.term.as_str(), w.count)).collect();
        assert_eq!(pairs, vec![("remote", 3), ("great", 2), ("coaching", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let tokens = ["zebra", "apple", "mango", "apple", "zebra", "mango"];
        let terms: Vec<_> = top_terms(&tokens, TOP_TERMS)
            .into_iter()
            .map(|w| w.term)
            .collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_result_is_capped_at_limit() {
        let words: Vec<String> = (0..40).map(|i| format!("woord{i:02}")).collect();
        let tokens: Vec<&str> = words.iter().map(String::as_str).collect();
        let top = top_terms(&tokens, TOP_TERMS);
        assert_eq!(top.len(), TOP_TERMS);
        assert_eq!(top[0].term, "woord00");
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_duplicate_postings_rank_shared_terms_first() {
        let text = corpus_text([
            "remote work and great team balance",
            "remote work and great team balance",
        ]);
        let tokens = tokenize(&text);
        let top = top_terms(&tokens, TOP_TERMS);
        let pairs: Vec<_> = top.iter().map(|w| (w.term.as_str(), w.count)).collect();
        assert_eq!(pairs, vec![("remote", 2), ("great", 2), ("balance", 2)]);
    }

    #[test]
    fn test_shared_terms_outrank_singletons() {
        let text = corpus_text([
            "remote work and great team balance",
            "remote work and great colleagues",
        ]);
        let tokens = tokenize(&text);
        let top = top_terms(&tokens, TOP_TERMS);
        assert_eq!(top[0], WordFrequency { term: "remote".into(), count: 2 });
        assert_eq!(top[1], WordFrequency { term: "great".into(), count: 2 });
        assert!(top[2..].iter().all(|w| w.count == 1));
    }
}
