use crate::catalog::Catalog;
use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use crate::similarity::{rank, ScoredResult};
use parking_lot::Mutex;
use std::sync::Arc;

/// Full ranking for the most recent query slot.
struct CachedRanking {
    index: usize,
    ranked: Arc<Vec<ScoredResult>>,
}

/// Entry point for presentation layers: resolves a title and ranks the catalog against it.
pub struct Recommender {
    catalog: Catalog,
    config: RecommenderConfig,
    last: Mutex<Option<CachedRanking>>,
}

impl Recommender {
    pub fn new(catalog: Catalog, config: RecommenderConfig) -> Self {
        Self { catalog, config, last: Mutex::new(None) }
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn config(&self) -> &RecommenderConfig { &self.config }

    pub fn recommend(&self, query_title: &str) -> Result<Vec<ScoredResult>> {
        self.recommend_top(query_title, self.config.top_k)
    }

    pub fn recommend_top(&self, query_title: &str, top_k: usize) -> Result<Vec<ScoredResult>> {
        let index = self.resolve(query_title)?;
        let ranked = self.ranked_for(index);
        let results: Vec<ScoredResult> = ranked.iter().take(top_k).cloned().collect();
        tracing::debug!(query = query_title, index, results = results.len(), "recommend");
        Ok(results)
    }

    /// Catalog slot for `query_title`, or `NotFound` carrying "did you mean" titles.
    pub fn resolve(&self, query_title: &str) -> Result<usize> {
        self.catalog.find(query_title).ok_or_else(|| {
            let suggestions = self.catalog.titles_containing(query_title, self.config.suggestion_limit);
            RecommendError::not_found(query_title.trim(), suggestions)
        })
    }

    /// Autocomplete candidates for a partially typed title.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.catalog.titles_with_prefix(prefix, self.config.autocomplete_limit)
    }

    fn ranked_for(&self, index: usize) -> Arc<Vec<ScoredResult>> {
        if let Some(hit) = self.last.lock().as_ref().filter(|c| c.index == index) {
            tracing::debug!(index, "ranking cache hit");
            return Arc::clone(&hit.ranked);
        }
        // rank without holding the lock
        let ranked = Arc::new(rank(&self.catalog, index, self.catalog.len()));
        *self.last.lock() = Some(CachedRanking { index, ranked: Arc::clone(&ranked) });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Item;

    fn recommender() -> Recommender {
        let catalog: Catalog = vec![
            Item::new("A").keywords("spy action"),
            Item::new("B").keywords("spy thriller"),
            Item::new("C").keywords("romance"),
        ]
        .into_iter()
        .collect();
        Recommender::new(catalog, RecommenderConfig::default())
    }

    #[test]
    fn configured_top_k_bounds_recommend() {
        let catalog: Catalog = (0..5).map(|i| Item::new(format!("M{i}")).keywords("x")).collect();
        let r = Recommender::new(catalog, RecommenderConfig::default().with_top_k(2));
        assert_eq!(r.recommend("M0").unwrap().len(), 2);
    }

    #[test]
    fn cache_returns_same_results() {
        let r = recommender();
        let first = r.recommend("A").unwrap();
        let again = r.recommend("a").unwrap();
        assert_eq!(first, again);
        let other = r.recommend("B").unwrap();
        assert_eq!(other[0].title, "A");
        assert_eq!(r.recommend("A").unwrap(), first);
    }

    #[test]
    fn repeated_slot_reuses_cached_ranking() {
        let r = recommender();
        let first = r.ranked_for(0);
        assert!(Arc::ptr_eq(&first, &r.ranked_for(0)));
        assert_eq!(r.last.lock().as_ref().map(|c| c.index), Some(0));

        let other = r.ranked_for(1);
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(r.last.lock().as_ref().map(|c| c.index), Some(1));
        // a fresh ranking for the evicted slot is equal but not the cached allocation
        let recomputed = r.ranked_for(0);
        assert!(!Arc::ptr_eq(&first, &recomputed));
        assert_eq!(*first, *recomputed);
    }

    #[test]
    fn per_call_top_k() {
        let r = recommender();
        assert_eq!(r.recommend_top("A", 1).unwrap().len(), 1);
        assert_eq!(r.recommend_top("A", 50).unwrap().len(), 2);
    }

    #[test]
    fn not_found_has_suggestions() {
        let catalog: Catalog = vec![Item::new("The Dark Knight"), Item::new("Dark City")].into_iter().collect();
        let r = Recommender::new(catalog, RecommenderConfig::default());
        match r.recommend(" dark ") {
            Err(RecommendError::NotFound { query, suggestions }) => {
                assert_eq!(query, "dark");
                assert_eq!(suggestions, vec!["The Dark Knight", "Dark City"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
