use crate::error::Result;
use crate::vectorizer::SplitPolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Controls which item fields feed the feature text and how it is tokenized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Append `director` as a fourth field after keywords, cast and genres.
    pub include_director: bool,
    pub split: SplitPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub top_k: usize,
    /// Max "did you mean" titles attached to a not-found error.
    pub suggestion_limit: usize,
    pub autocomplete_limit: usize,
    pub features: FeatureConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            features: FeatureConfig::default(),
        }
    }
}

impl RecommenderConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RecommenderConfig::default();
        assert_eq!(cfg.top_k, 10);
        assert_eq!(cfg.features.split, SplitPolicy::Collapse);
        assert!(!cfg.features.include_director);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RecommenderConfig::from_json_str(r#"{"top_k": 20, "features": {"split": "literal"}}"#).unwrap();
        assert_eq!(cfg.top_k, 20);
        assert_eq!(cfg.suggestion_limit, 5);
        assert_eq!(cfg.features.split, SplitPolicy::Literal);
        assert!(!cfg.features.include_director);
    }
}
