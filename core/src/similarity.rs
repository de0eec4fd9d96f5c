use crate::catalog::Catalog;
use crate::vectorizer::TermVector;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    /// Catalog slot, distinguishes entries that share a title.
    pub index: usize,
    pub title: String,
    pub score: f64, // percent, 0..=100
}

/// Cosine similarity of two term vectors, scaled to a percentage.
///
/// Similarity against an entry with an all-empty feature vector is defined as 0.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let terms: HashSet<&String> = a.keys().chain(b.keys()).collect();
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for term in terms {
        let x = a.get(term).copied().unwrap_or(0) as f64;
        let y = b.get(term).copied().unwrap_or(0) as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 { return 0.0; }
    (dot / (norm_a.sqrt() * norm_b.sqrt()) * 100.0).clamp(0.0, 100.0)
}

/// Score every slot but `query_index` against it, best first, at most `top_k`.
///
/// Equal scores keep catalog order. Returns an empty list if `query_index` is out of range.
pub fn rank(catalog: &Catalog, query_index: usize, top_k: usize) -> Vec<ScoredResult> {
    let Some(query) = catalog.get(query_index) else { return Vec::new() };
    let mut scored: Vec<ScoredResult> = catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != query_index)
        .map(|(index, e)| ScoredResult { index, title: e.title.clone(), score: cosine_similarity(&query.vector, &e.vector) })
        .collect();
    // sort_by is stable; scores are never NaN so total_cmp matches numeric order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.into_iter().take(top_k).collect()
}
