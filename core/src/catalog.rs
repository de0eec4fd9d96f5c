use crate::config::{FeatureConfig, RecommenderConfig};
use crate::error::Result;
use crate::features::{extract_features_with, Item};
use crate::provider;
use crate::vectorizer::{vectorize_with, TermVector};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub title: String,
    pub vector: TermVector,
}

/// Load-ordered entries. Slot indices are stable for the catalog's lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    folded_titles: Vec<String>, // lower-cased titles, same slots as `entries`
}

impl Catalog {
    pub fn from_items<I>(items: I, cfg: &FeatureConfig) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let entries: Vec<CatalogEntry> = items
            .into_iter()
            .map(|item| CatalogEntry { title: item.title.trim().to_string(), vector: item_vector(&item, cfg) })
            .collect();
        let folded_titles = entries.iter().map(|e| e.title.to_lowercase()).collect();
        let empty_vectors = entries.iter().filter(|e| e.vector.is_empty()).count();
        tracing::info!(entries = entries.len(), empty_vectors, "catalog built");
        Self { entries, folded_titles }
    }

    pub fn load<P: AsRef<Path>>(path: P, cfg: &RecommenderConfig) -> Result<Self> {
        let items = provider::load_items_from_path(path)?;
        Ok(Self::from_items(items, &cfg.features))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> { self.entries.get(index) }
    pub fn entries(&self) -> &[CatalogEntry] { &self.entries }

    /// Index of the first entry whose title equals `title`, ignoring case and surrounding whitespace.
    pub fn find(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        self.folded_titles.iter().position(|t| *t == wanted)
    }

    /// Titles starting with `prefix` (case-insensitive), in catalog order.
    pub fn titles_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.matching_titles(|t| t.starts_with(&prefix), limit)
    }

    /// Titles containing `fragment` (case-insensitive). A blank fragment matches nothing.
    pub fn titles_containing(&self, fragment: &str, limit: usize) -> Vec<String> {
        let fragment = fragment.trim().to_lowercase();
        if fragment.is_empty() { return Vec::new(); }
        self.matching_titles(|t| t.contains(&fragment), limit)
    }

    fn matching_titles<F: Fn(&str) -> bool>(&self, pred: F, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .zip(&self.folded_titles)
            .filter(|(_, folded)| pred(folded.as_str()))
            .take(limit)
            .map(|(e, _)| e.title.clone())
            .collect()
    }
}

/// Feature text with no terms at all yields an empty vector under every split policy,
/// so the zero-norm rule in `cosine_similarity` applies to it.
fn item_vector(item: &Item, cfg: &FeatureConfig) -> TermVector {
    let text = extract_features_with(item, cfg);
    if text.trim().is_empty() { return TermVector::new(); }
    vectorize_with(&text, cfg.split)
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::from_items(iter, &FeatureConfig::default())
    }
}
