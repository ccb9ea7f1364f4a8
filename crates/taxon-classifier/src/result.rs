//! Classification result type

use taxon_domain::{Attributes, TypeTag};

/// Outcome of classifying one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Type whose schema accepted the document (`Unknown` if none did)
    pub matched: TypeTag,

    /// Final type after disambiguation
    pub tag: TypeTag,

    /// Label set by disambiguation when it differs from the type's own label
    pub label: Option<&'static str>,

    /// Metadata for downstream stages, in insertion order
    pub attributes: Attributes,
}

impl ClassificationResult {
    /// Result for a document no schema accepted
    pub fn unmatched() -> Self {
        Self {
            matched: TypeTag::Unknown,
            tag: TypeTag::Unknown,
            label: None,
            attributes: Attributes::new(),
        }
    }

    /// Effective label: the disambiguated one, else the type's own
    pub fn label(&self) -> &'static str {
        self.label.unwrap_or_else(|| self.tag.label())
    }

    /// Destination name for the final type
    pub fn route(&self) -> &'static str {
        self.tag.route()
    }

    /// Whether the document ended up as `Unknown`
    pub fn is_unknown(&self) -> bool {
        self.tag.is_unknown()
    }

    /// Whether a schema matched but disambiguation rejected the document
    pub fn was_downgraded(&self) -> bool {
        !self.matched.is_unknown() && self.tag.is_unknown()
    }
}
