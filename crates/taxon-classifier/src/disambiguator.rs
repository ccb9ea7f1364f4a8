//! Structural refinement of types whose schema covers several wire shapes

use taxon_domain::{TreeNode, TypeTag};
use tracing::{debug, warn};

/// Wire shape of a profile document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileVariant {
    /// GraphQL query response, wrapped in `data`
    GraphqlVariable,
    /// Private API info response, wrapped in `user`
    ApiInfo,
    /// Web profile info response, wrapped in `graphql`
    WebInfo,
}

impl ProfileVariant {
    /// Probe order. A document may carry more than one wrapper; the first
    /// one found decides.
    pub const PROBE_ORDER: [ProfileVariant; 3] = [
        ProfileVariant::GraphqlVariable,
        ProfileVariant::ApiInfo,
        ProfileVariant::WebInfo,
    ];

    /// Top-level field that identifies this variant
    pub fn field(&self) -> &'static str {
        match self {
            ProfileVariant::GraphqlVariable => "data",
            ProfileVariant::ApiInfo => "user",
            ProfileVariant::WebInfo => "graphql",
        }
    }

    /// Label written in place of the generic profile label
    pub fn label(&self) -> &'static str {
        match self {
            ProfileVariant::GraphqlVariable => "profile-graphql:variable",
            ProfileVariant::ApiInfo => "profile-api-info:id",
            ProfileVariant::WebInfo => "profile-web-info:username",
        }
    }

    /// First variant whose wrapper field holds an object
    pub fn detect<N: TreeNode + ?Sized>(doc: &N) -> Option<Self> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|variant| doc.has_object_field(variant.field()))
    }

    /// Variant a label names, if any
    pub fn from_label(label: &str) -> Option<Self> {
        Self::PROBE_ORDER
            .into_iter()
            .find(|variant| variant.label() == label)
    }
}

/// Refine a classified type into its final type and label
///
/// Only `Profile` is refined. A document that passed the profile schema but
/// carries none of the known wrappers is downgraded to `Unknown`.
pub fn disambiguate<N: TreeNode + ?Sized>(doc: &N, tag: TypeTag) -> (TypeTag, &'static str) {
    if tag != TypeTag::Profile {
        return (tag, tag.label());
    }

    match ProfileVariant::detect(doc) {
        Some(variant) => {
            debug!(field = variant.field(), label = variant.label(), "Disambiguated profile");
            (TypeTag::Profile, variant.label())
        }
        None => {
            warn!("Profile schema matched but no known wrapper is present, downgrading to unknown");
            (TypeTag::Unknown, TypeTag::Unknown.label())
        }
    }
}
