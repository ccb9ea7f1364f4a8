//! Packaging of extraction matches into emitted documents

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use taxon_domain::{Attributes, SCHEME_TYPE_ATTRIBUTE};

/// How matches are handed downstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// One emitted document per match
    #[default]
    Object,
    /// A single array document holding every match in order
    Array,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::Object => write!(f, "object"),
            TransferMode::Array => write!(f, "array"),
        }
    }
}

impl FromStr for TransferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "object" => Ok(TransferMode::Object),
            "array" => Ok(TransferMode::Array),
            other => Err(format!("Unknown transfer mode: {} (expected object or array)", other)),
        }
    }
}

/// A document ready to be handed downstream
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    /// Emitted document content
    pub document: Value,

    /// Attributes carried with the document
    pub attributes: Attributes,
}

/// Package matches according to `mode`
///
/// Every emission gets `scheme.type` set to `scheme_type`, then inherits the
/// parent's attributes it does not already carry. Zero matches produce no
/// emissions in either mode.
pub fn package(
    matches: &[&Value],
    mode: TransferMode,
    parent: &Attributes,
    scheme_type: &str,
) -> Vec<Emission> {
    if matches.is_empty() {
        return Vec::new();
    }

    let emit = |document: Value| {
        let mut attributes = Attributes::new();
        attributes.insert(SCHEME_TYPE_ATTRIBUTE, scheme_type);
        attributes.inherit_from(parent);
        Emission {
            document,
            attributes,
        }
    };

    match mode {
        TransferMode::Object => matches.iter().map(|&node| emit(node.clone())).collect(),
        TransferMode::Array => {
            let bundle = matches.iter().map(|&node| node.clone()).collect();
            vec![emit(Value::Array(bundle))]
        }
    }
}
