//! Depth-first walk over a tag tree.

use crate::constant::{Constant, Group};
use crate::error::TransformError;
use crate::naming::format_js_path;
use crate::node::{Node, classify};
use serde_json::{Map, Value};

/// Walk `object`, whose path from the walk start is `prefix`.
///
/// Keys are visited in ascending byte order. Child objects are walked first
/// and their groups precede this level's own group in the returned list.
/// This level contributes a group only when it has at least one string leaf.
/// Any other value shape aborts the whole walk.
pub fn walk(object: &Map<String, Value>, prefix: &[String]) -> Result<Vec<Group>, TransformError> {
    let mut entries: Vec<(&String, &Value)> = object.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut groups = Vec::new();
    let mut constants = Vec::new();

    for (key, value) in entries {
        let path = child_path(prefix, key);
        match classify(value) {
            Node::Object(child) => groups.extend(walk(child, &path)?),
            Node::Leaf(_) => constants.push(Constant::from_path(path.as_slice())),
            Node::Other(kind) => {
                return Err(TransformError::InvalidLeafType {
                    path: format_js_path(path.as_slice()),
                    kind: kind.to_string(),
                });
            }
        }
    }

    if !constants.is_empty() {
        let group = Group::new(prefix, constants);
        tracing::debug!(
            group = %group.name,
            constants = group.constants.len(),
            "emitted group"
        );
        groups.push(group);
    }

    Ok(groups)
}

fn child_path(prefix: &[String], key: &str) -> Vec<String> {
    let mut path = Vec::with_capacity(prefix.len() + 1);
    path.extend_from_slice(prefix);
    path.push(key.to_string());
    path
}
