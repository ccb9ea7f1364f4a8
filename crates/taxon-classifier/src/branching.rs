//! Classification service bound to a swappable catalog

use crate::classifier::classify_and_disambiguate;
use crate::{ClassificationResult, ClassifierConfig, ClassifierMetrics, ClassifyError};
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use taxon_catalog::{CatalogHandle, JsonSchemaEngine, SchemaEngine};

/// Routes documents to a type using whichever catalog is installed
///
/// Each call takes a snapshot of the catalog, so a concurrent reload never
/// changes the catalog under a call in progress.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taxon_catalog::{builtin, CatalogHandle};
/// use taxon_classifier::{Branching, ClassifierConfig};
/// use taxon_domain::TypeTag;
///
/// let catalog = builtin::builtin_catalog()?.compile().catalog;
/// let branching = Branching::new(CatalogHandle::with_catalog(catalog), ClassifierConfig::default());
///
/// let result = branching.route(&json!({"data": {"user": {"username": "bob"}}}))?;
/// assert_eq!(result.tag, TypeTag::Profile);
/// assert_eq!(result.label(), "profile-graphql:variable");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Branching<E: SchemaEngine = JsonSchemaEngine> {
    handle: CatalogHandle<E>,
    config: ClassifierConfig,
    metrics: Mutex<ClassifierMetrics>,
}

impl<E: SchemaEngine> Branching<E> {
    /// Create a service reading from `handle`
    pub fn new(handle: CatalogHandle<E>, config: ClassifierConfig) -> Self {
        Self {
            handle,
            config,
            metrics: Mutex::new(ClassifierMetrics::new()),
        }
    }

    /// Handle used to install or replace the catalog
    pub fn handle(&self) -> &CatalogHandle<E> {
        &self.handle
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify and disambiguate one document
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::NoCatalogLoaded`] when no catalog is
    /// installed. A document that matches nothing is not an error; it comes
    /// back as `Unknown`.
    pub fn route(&self, doc: &Value) -> Result<ClassificationResult, ClassifyError> {
        let catalog = self.handle.snapshot().ok_or(ClassifyError::NoCatalogLoaded)?;
        let result = classify_and_disambiguate(doc, &catalog, &self.config);

        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(&result);

        Ok(result)
    }

    /// Count a document the caller failed to parse
    pub fn record_unparseable(&self) {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_unparseable();
    }

    /// Copy of the current metrics
    pub fn metrics(&self) -> ClassifierMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reset metrics counters
    pub fn reset_metrics(&self) {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taxon_catalog::Catalog;
    use taxon_domain::TypeTag;

    #[test]
    fn test_no_catalog_loaded() {
        let branching: Branching = Branching::new(CatalogHandle::empty(), ClassifierConfig::default());
        assert_eq!(
            branching.route(&json!({})).unwrap_err(),
            ClassifyError::NoCatalogLoaded
        );
        assert_eq!(branching.metrics().total(), 0);
    }

    #[test]
    fn test_route_after_install() {
        let branching: Branching = Branching::new(CatalogHandle::empty(), ClassifierConfig::default());
        let catalog = Catalog::from_values([(TypeTag::Inbox, json!({"required": ["threads"]}))])
            .unwrap()
            .compile()
            .catalog;
        branching.handle().install(catalog);

        let result = branching.route(&json!({"threads": []})).unwrap();
        assert_eq!(result.tag, TypeTag::Inbox);

        let result = branching.route(&json!({"other": []})).unwrap();
        assert!(result.is_unknown());

        let metrics = branching.metrics();
        assert_eq!(metrics.count(TypeTag::Inbox), 1);
        assert_eq!(metrics.count(TypeTag::Unknown), 1);
    }

    #[test]
    fn test_reset_metrics() {
        let catalog = Catalog::from_values([(TypeTag::User, json!(true))])
            .unwrap()
            .compile()
            .catalog;
        let branching = Branching::new(CatalogHandle::with_catalog(catalog), ClassifierConfig::default());
        branching.route(&json!(1)).unwrap();
        branching.record_unparseable();
        branching.reset_metrics();

        assert_eq!(branching.metrics().total(), 0);
        assert_eq!(branching.metrics().unparseable, 0);
    }
}
