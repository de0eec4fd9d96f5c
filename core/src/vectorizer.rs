use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Term -> occurrence count for one item's feature text.
pub type TermVector = HashMap<String, u32>;

/// How feature text is cut into terms.
///
/// Feature text always carries a separator per field, so absent fields leave
/// runs of spaces behind. `Literal` splits on every single space and keeps the
/// resulting empty-string terms; `Collapse` drops them before counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitPolicy {
    #[default]
    Collapse,
    Literal,
}

pub fn vectorize(text: &str) -> TermVector {
    vectorize_with(text, SplitPolicy::default())
}

pub fn vectorize_with(text: &str, policy: SplitPolicy) -> TermVector {
    let mut counts = TermVector::new();
    for term in text.split(' ') {
        if policy == SplitPolicy::Collapse && term.is_empty() { continue; }
        *counts.entry(term.to_string()).or_insert(0) += 1;
    }
    counts
}
