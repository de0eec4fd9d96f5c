use crate::config::FeatureConfig;
use serde::{Deserialize, Serialize};

/// One catalog record as supplied by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    pub fn keywords(mut self, v: impl Into<String>) -> Self { self.keywords = Some(v.into()); self }
    pub fn cast(mut self, v: impl Into<String>) -> Self { self.cast = Some(v.into()); self }
    pub fn genres(mut self, v: impl Into<String>) -> Self { self.genres = Some(v.into()); self }
    pub fn director(mut self, v: impl Into<String>) -> Self { self.director = Some(v.into()); self }
}

/// Lower-cased `keywords cast genres`, separators kept even when a field is absent.
pub fn extract_features(item: &Item) -> String {
    extract_features_with(item, &FeatureConfig::default())
}

pub fn extract_features_with(item: &Item, cfg: &FeatureConfig) -> String {
    let mut text = format!("{} {} {}", field(&item.keywords), field(&item.cast), field(&item.genres));
    if cfg.include_director {
        text.push(' ');
        text.push_str(field(&item.director));
    }
    text.to_lowercase()
}

fn field(f: &Option<String>) -> &str { f.as_deref().unwrap_or("") }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_in_fixed_order() {
        let item = Item::new("Heat").genres("Crime").keywords("Heist LA").cast("Al Pacino");
        assert_eq!(extract_features(&item), "heist la al pacino crime");
    }

    #[test]
    fn absent_fields_keep_separators() {
        assert_eq!(extract_features(&Item::new("x").cast("Bob")), " bob ");
        assert_eq!(extract_features(&Item::new("x")), "  ");
    }

    #[test]
    fn director_only_when_enabled() {
        let item = Item::new("x").keywords("k").director("Michael Mann");
        assert_eq!(extract_features(&item), "k  ");
        let cfg = FeatureConfig { include_director: true, ..FeatureConfig::default() };
        assert_eq!(extract_features_with(&item, &cfg), "k   michael mann");
    }
}
