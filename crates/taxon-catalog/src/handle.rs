//! Shared, swappable reference to the active compiled catalog

use crate::engine::{JsonSchemaEngine, SchemaEngine};
use crate::CompiledCatalog;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Slot holding the catalog that classification calls read from
///
/// Readers take an `Arc` snapshot and keep using it for the whole call.
/// Reloading installs a new, fully compiled catalog by swapping the `Arc`;
/// snapshots taken earlier keep the catalog they started with.
pub struct CatalogHandle<E: SchemaEngine = JsonSchemaEngine> {
    slot: Arc<RwLock<Option<Arc<CompiledCatalog<E>>>>>,
}

impl<E: SchemaEngine> CatalogHandle<E> {
    /// Create a handle with no catalog installed
    pub fn empty() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a handle with `catalog` installed
    pub fn with_catalog(catalog: CompiledCatalog<E>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(Arc::new(catalog)))),
        }
    }

    /// Current catalog, if one is installed
    pub fn snapshot(&self) -> Option<Arc<CompiledCatalog<E>>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install `catalog`, returning the one it replaced
    pub fn install(&self, catalog: CompiledCatalog<E>) -> Option<Arc<CompiledCatalog<E>>> {
        let next = Arc::new(catalog);
        info!("Installing schema catalog with {} entries", next.len());
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(next)
    }

    /// Remove the installed catalog
    pub fn clear(&self) -> Option<Arc<CompiledCatalog<E>>> {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Whether a catalog is installed
    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<E: SchemaEngine> Clone for CatalogHandle<E> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<E: SchemaEngine> Default for CatalogHandle<E> {
    fn default() -> Self {
        Self::empty()
    }
}
