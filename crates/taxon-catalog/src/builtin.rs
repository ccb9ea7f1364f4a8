//! Built-in schemas used when no schema source is configured

use crate::{Catalog, SchemaDocument, SchemaLoadError};
use serde_json::{json, Value};
use taxon_domain::TypeTag;

/// Profile responses in any of their three wrapper shapes:
/// `data.user`, `user`, or `graphql.user`
pub fn profile_schema() -> Value {
    json!({
        "type": "object",
        "anyOf": [
            {
                "required": ["data"],
                "properties": {
                    "data": {
                        "type": "object",
                        "required": ["user"],
                        "properties": { "user": { "type": "object" } }
                    }
                }
            },
            {
                "required": ["user"],
                "properties": { "user": { "type": "object" } }
            },
            {
                "required": ["graphql"],
                "properties": {
                    "graphql": {
                        "type": "object",
                        "required": ["user"],
                        "properties": { "user": { "type": "object" } }
                    }
                }
            }
        ]
    })
}

/// A user record: a username plus an `id` or `pk` identity
///
/// Kept minimal since the extractor runs it against every container node.
pub fn user_schema() -> Value {
    let identity = json!({ "anyOf": [{ "type": "integer" }, { "type": "string" }] });
    json!({
        "type": "object",
        "required": ["username"],
        "properties": {
            "username": { "type": "string" },
            "full_name": { "type": ["string", "null"] },
            "id": identity.clone(),
            "pk": identity
        },
        "anyOf": [
            { "required": ["id"] },
            { "required": ["pk"] }
        ]
    })
}

/// Built-in user schema as a document
pub fn user_document() -> Result<SchemaDocument, SchemaLoadError> {
    SchemaDocument::from_value(TypeTag::User, user_schema())
}

/// Catalog of the built-in schemas: profile first, then user
pub fn builtin_catalog() -> Result<Catalog, SchemaLoadError> {
    Catalog::from_values([
        (TypeTag::Profile, profile_schema()),
        (TypeTag::User, user_schema()),
    ])
}
