use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// No catalog title matches the query after trimming and case folding.
    #[error("movie not found: {query:?}")]
    NotFound { query: String, suggestions: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON error on line {line}: {source}")]
    JsonLine { line: usize, source: serde_json::Error },
}

impl RecommendError {
    pub fn not_found(query: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::NotFound { query: query.into(), suggestions }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
