//! Metrics collection for classification

use crate::ClassificationResult;
use std::collections::BTreeMap;
use taxon_domain::TypeTag;

/// Counters collected while classifying documents
#[derive(Debug, Clone, Default)]
pub struct ClassifierMetrics {
    /// Documents classified per final type
    pub classified: BTreeMap<TypeTag, usize>,

    /// Results whose label was refined by disambiguation
    pub disambiguated: usize,

    /// Results a schema matched but disambiguation downgraded to unknown
    pub downgraded: usize,

    /// Documents that could not be parsed before classification
    pub unparseable: usize,
}

impl ClassifierMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classification result
    pub fn record(&mut self, result: &ClassificationResult) {
        *self.classified.entry(result.tag).or_insert(0) += 1;
        if result.label.is_some() {
            self.disambiguated += 1;
        }
        if result.was_downgraded() {
            self.downgraded += 1;
        }
    }

    /// Record a document that failed to parse
    pub fn record_unparseable(&mut self) {
        self.unparseable += 1;
    }

    /// Total classified documents
    pub fn total(&self) -> usize {
        self.classified.values().sum()
    }

    /// Documents classified as a given type
    pub fn count(&self, tag: TypeTag) -> usize {
        self.classified.get(&tag).copied().unwrap_or(0)
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        self.classified.clear();
        self.disambiguated = 0;
        self.downgraded = 0;
        self.unparseable = 0;
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Classification Summary".to_string(),
            "======================".to_string(),
            format!("Documents: {}", self.total()),
            format!("Disambiguated: {}", self.disambiguated),
            format!("Downgraded: {}", self.downgraded),
            format!("Unparseable: {}", self.unparseable),
        ];

        if !self.classified.is_empty() {
            lines.push(String::new());
            lines.push("By type:".to_string());
            for (tag, count) in &self.classified {
                lines.push(format!("  {}: {}", tag.label(), count));
            }
        }

        lines.join("\n")
    }
}
