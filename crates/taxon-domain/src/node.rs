//! Read-only tree view over parsed documents
//!
//! The classifier's structural probes and the recursive extractor only need
//! to know whether a node is a scalar, an array, or an object, and how to
//! reach its children. [`TreeNode`] captures exactly that, so both work over
//! any document representation. `serde_json::Value` is the one shipped
//! implementation.

use serde_json::Value;

/// Shape of a single document node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Null, boolean, number, or string
    Scalar,
    /// Ordered sequence of nodes
    Array,
    /// Named fields, in document order
    Object,
}

impl NodeKind {
    /// Whether the node can hold children
    pub fn is_container(&self) -> bool {
        !matches!(self, NodeKind::Scalar)
    }
}

/// A node in an immutable document tree
pub trait TreeNode {
    /// Shape of this node
    fn kind(&self) -> NodeKind;

    /// Immediate children: array elements by index, or object field values
    /// in document order. Scalars have none.
    fn children<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self> + 'a>;

    /// Value of a named field, when this node is an object carrying it
    fn field(&self, name: &str) -> Option<&Self>;

    /// Whether this node is an object or array
    fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Whether this node is an object with `name` bound to another object
    fn has_object_field(&self, name: &str) -> bool {
        self.field(name)
            .is_some_and(|child| child.kind() == NodeKind::Object)
    }
}

impl TreeNode for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
            _ => NodeKind::Scalar,
        }
    }

    fn children<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Self> + 'a> {
        match self {
            Value::Array(items) => Box::new(items.iter()),
            Value::Object(fields) => Box::new(fields.values()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }
}
