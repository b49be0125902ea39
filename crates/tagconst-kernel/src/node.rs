//! Node classification.
//!
//! The walker never inspects a JSON value directly. It classifies each node
//! first and acts on the classification; every shape that is neither an
//! object nor a string collapses into [`Node::Other`].

use serde_json::{Map, Value};
use std::fmt;

/// The shape of a JSON value that cannot appear in a tag tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    Array,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Array => "array",
        };
        f.write_str(name)
    }
}

/// A classified view over one JSON value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// Recurse into it.
    Object(&'a Map<String, Value>),
    /// Emit a constant for it. The text itself never reaches the output.
    Leaf(&'a str),
    /// Invalid in a tag tree.
    Other(NodeKind),
}

/// Classify a JSON value.
pub fn classify(value: &Value) -> Node<'_> {
    match value {
        Value::Object(map) => Node::Object(map),
        Value::String(text) => Node::Leaf(text),
        Value::Null => Node::Other(NodeKind::Null),
        Value::Bool(_) => Node::Other(NodeKind::Bool),
        Value::Number(_) => Node::Other(NodeKind::Number),
        Value::Array(_) => Node::Other(NodeKind::Array),
    }
}
