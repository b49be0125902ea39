//! Root selection: narrow a document to the subtree the walk starts from.

use crate::error::TransformError;
use crate::node::{Node, classify};
use serde_json::{Map, Value};

/// Resolve the object the walk starts from.
///
/// With no root (or an empty one) the document itself is used and must be an
/// object. Otherwise `root` is looked up among the top-level keys and its
/// value must be an object.
pub fn resolve_root<'a>(
    document: &'a Value,
    root: Option<&str>,
) -> Result<&'a Map<String, Value>, TransformError> {
    let top_level = match classify(document) {
        Node::Object(map) => map,
        Node::Leaf(_) => {
            return Err(TransformError::MalformedJson(
                "top-level document must be an object, found string".to_string(),
            ));
        }
        Node::Other(kind) => {
            return Err(TransformError::MalformedJson(format!(
                "top-level document must be an object, found {kind}"
            )));
        }
    };

    let Some(root) = root.filter(|root| !root.is_empty()) else {
        return Ok(top_level);
    };

    let subtree = top_level
        .get(root)
        .ok_or_else(|| TransformError::RootNotFound {
            root: root.to_string(),
        })?;

    match classify(subtree) {
        Node::Object(map) => {
            tracing::debug!(root, keys = map.len(), "narrowed document to root");
            Ok(map)
        }
        Node::Leaf(_) => Err(TransformError::InvalidRootShape {
            root: root.to_string(),
            detail: "found string".to_string(),
        }),
        Node::Other(kind) => Err(TransformError::InvalidRootShape {
            root: root.to_string(),
            detail: format!("found {kind}"),
        }),
    }
}
