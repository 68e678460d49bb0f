//! Shared similarity helpers for the vector store backends

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use anr_domain::value_objects::{Anime, AnimeMatch, Embedding};

/// Scored item for heap-based top-k selection
///
/// Uses reverse ordering so BinaryHeap acts as a min-heap (smallest scores
/// at top).
#[derive(PartialEq)]
struct ScoredItem {
    score: f32,
    index: usize,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: smallest at top
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm, normalized to [0, 1]
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b: f32 = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}

/// Select the top-k most similar entries, best first
///
/// O(n log k) min-heap selection over the collection; results come back
/// ordered by non-increasing score.
pub(crate) fn top_k_matches(
    entries: &[(Embedding, Anime)],
    query_vector: &[f32],
    limit: usize,
) -> Vec<AnimeMatch> {
    if limit == 0 {
        return Vec::new();
    }

    let query_norm = compute_norm(query_vector);
    let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(limit + 1);

    for (i, (embedding, _anime)) in entries.iter().enumerate() {
        let similarity = cosine_similarity_with_norm(query_vector, &embedding.vector, query_norm);

        if heap.len() < limit {
            heap.push(ScoredItem {
                score: similarity,
                index: i,
            });
        } else if let Some(min) = heap.peek() {
            if similarity > min.score {
                heap.pop();
                heap.push(ScoredItem {
                    score: similarity,
                    index: i,
                });
            }
        }
    }

    let mut items: Vec<_> = heap.into_iter().collect();
    items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    items
        .into_iter()
        .map(|item| AnimeMatch {
            anime: entries[item.index].1.clone(),
            score: f64::from(item.score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, vector: Vec<f32>) -> (Embedding, Anime) {
        (
            Embedding::new(vector, "test"),
            Anime {
                anime_id: id,
                name: format!("anime-{id}"),
                genres: vec!["Action".to_string()],
                anime_type: "TV".to_string(),
                episodes: 12,
                rating: 7.0,
                members: 100,
                synopsis: None,
            },
        )
    }

    #[test]
    fn returns_at_most_k_ordered_by_score() {
        let entries = vec![
            entry(1, vec![1.0, 0.0]),
            entry(2, vec![0.0, 1.0]),
            entry(3, vec![0.9, 0.1]),
        ];
        let matches = top_k_matches(&entries, &[1.0, 0.0], 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].anime.anime_id, 1);
        assert!(matches[0].score >= matches[1].score);
    }

    #[test]
    fn identical_vector_scores_one() {
        let entries = vec![entry(1, vec![0.6, 0.8])];
        let matches = top_k_matches(&entries, &[0.6, 0.8], 1);
        assert!((matches[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let entries = vec![entry(1, vec![1.0])];
        assert!(top_k_matches(&entries, &[1.0], 0).is_empty());
    }

    #[test]
    fn scores_stay_in_unit_range() {
        let entries = vec![entry(1, vec![-1.0, 0.0]), entry(2, vec![1.0, 0.0])];
        for m in top_k_matches(&entries, &[1.0, 0.0], 2) {
            assert!((0.0..=1.0).contains(&m.score));
        }
    }
}
