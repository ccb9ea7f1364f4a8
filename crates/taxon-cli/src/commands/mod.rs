//! Command implementations.

pub mod classify;
pub mod extract;
pub mod schemes;

pub use self::classify::execute_classify;
pub use self::extract::execute_extract;
pub use self::schemes::execute_schemes;

use crate::error::Result;
use std::path::Path;
use taxon_catalog::{builtin, source, Catalog};
use tracing::info;

/// Load the catalog from a schema source, or the built-in catalog.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            info!("Loading schema source {}", path.display());
            Ok(source::catalog_from_path(path)?)
        }
        None => {
            info!("No schema source given, using built-in catalog");
            Ok(builtin::builtin_catalog()?)
        }
    }
}
