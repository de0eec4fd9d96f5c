//! Content-based movie recommendations.
//!
//! Items are reduced to lower-cased feature text (keywords, cast, genres), counted into
//! term vectors once at load time, and ranked against a query item by cosine similarity.

pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod provider;
pub mod recommend;
pub mod similarity;
pub mod vectorizer;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{FeatureConfig, RecommenderConfig};
pub use error::{RecommendError, Result};
pub use features::{extract_features, extract_features_with, Item};
pub use recommend::Recommender;
pub use similarity::{cosine_similarity, rank, ScoredResult};
pub use vectorizer::{vectorize, vectorize_with, SplitPolicy, TermVector};
