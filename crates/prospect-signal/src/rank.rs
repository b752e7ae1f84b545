//! Candidate ranking and top-K selection

use crate::model::CandidateStock;
use std::cmp::Ordering;

/// Sort candidates and truncate to the top `k` by relevance
///
/// Ordering is fully deterministic: descending relevance, then descending
/// mention count, then ascending ticker. Fewer than `k` candidates returns
/// all of them; no padding, no error.
pub fn select_top_k(mut candidates: Vec<CandidateStock>, k: usize) -> Vec<CandidateStock> {
    candidates.sort_by(compare);
    candidates.truncate(k);
    candidates
}

fn compare(a: &CandidateStock, b: &CandidateStock) -> Ordering {
    b.relevance_score
        .total_cmp(&a.relevance_score)
        .then_with(|| b.mention_count.cmp(&a.mention_count))
        .then_with(|| a.ticker.cmp(&b.ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(ticker: &str, relevance: f64, mentions: usize) -> CandidateStock {
        CandidateStock {
            ticker: ticker.to_string(),
            mention_count: mentions,
            average_sentiment: 0.0,
            relevance_score: relevance,
            rationale: String::new(),
        }
    }

    #[test]
    fn test_output_length_law() {
        let pool = vec![
            candidate("AAA", 0.9, 3),
            candidate("BBB", 0.5, 2),
            candidate("CCC", 0.1, 1),
        ];

        for k in 0..6 {
            let selected = select_top_k(pool.clone(), k);
            assert_eq!(selected.len(), k.min(pool.len()));
        }
    }

    #[test]
    fn test_sorted_by_relevance_descending() {
        let selected = select_top_k(
            vec![
                candidate("LOW", 0.2, 1),
                candidate("HIGH", 0.9, 1),
                candidate("MID", 0.5, 1),
            ],
            3,
        );

        let tickers: Vec<&str> = selected.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["HIGH", "MID", "LOW"]);
        for pair in selected.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_relevance_tie_broken_by_mentions() {
        let selected = select_top_k(
            vec![candidate("FEW", 0.5, 2), candidate("MANY", 0.5, 8)],
            2,
        );
        assert_eq!(selected[0].ticker, "MANY");
        assert_eq!(selected[1].ticker, "FEW");
    }

    #[test]
    fn test_full_tie_broken_by_ticker_ascending() {
        let selected = select_top_k(
            vec![
                candidate("ZM", 0.5, 3),
                candidate("AMD", 0.5, 3),
                candidate("NET", 0.5, 3),
            ],
            3,
        );
        let tickers: Vec<&str> = selected.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AMD", "NET", "ZM"]);
    }

    #[test]
    fn test_fewer_candidates_than_k() {
        let selected = select_top_k(vec![candidate("ONLY", 0.4, 1)], 5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].ticker, "ONLY");
    }

    #[test]
    fn test_empty_input() {
        assert!(select_top_k(Vec::new(), 5).is_empty());
    }
}
