//! Top-level orchestration: decode, narrow, walk, sort, join.

use crate::constant::Group;
use crate::error::TransformError;
use crate::root::resolve_root;
use crate::walk::walk;
use serde::Serialize;
use serde_json::Value;

/// The sorted result of one transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated {
    pub groups: Vec<Group>,
}

impl Generated {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn constant_count(&self) -> usize {
        self.groups.iter().map(|group| group.constants.len()).sum()
    }

    /// Group bodies separated by one blank line. Empty when there are no
    /// groups.
    pub fn render(&self) -> String {
        self.groups
            .iter()
            .map(Group::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Decode `document`, walk it from `root`, and sort the groups by name.
///
/// The sort is stable, so groups that derive the same name keep walk order.
pub fn generate(document: &[u8], root: Option<&str>) -> Result<Generated, TransformError> {
    let value: Value = serde_json::from_slice(document)
        .map_err(|e| TransformError::MalformedJson(e.to_string()))?;
    let start = resolve_root(&value, root)?;

    let mut groups = walk(start, &[])?;
    groups.sort_by(|a, b| a.name.cmp(&b.name));

    let generated = Generated { groups };
    tracing::debug!(
        groups = generated.group_count(),
        constants = generated.constant_count(),
        "walk complete"
    );
    Ok(generated)
}

/// Produce the constant block text for `document`.
///
/// ```
/// use tagconst_kernel::transform;
///
/// let out = transform(br#"{"errors": {"test": "x", "test2": "x"}}"#, None).unwrap();
/// assert_eq!(out, "\tErrors_Test = \"errors.test\"\n\tErrors_Test2 = \"errors.test2\"");
/// ```
pub fn transform(document: &[u8], root: Option<&str>) -> Result<String, TransformError> {
    generate(document, root).map(|generated| generated.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_truncated_input_is_malformed() {
        for input in ["", "{", "   "] {
            match transform(input.as_bytes(), None) {
                Err(TransformError::MalformedJson(_)) => {}
                other => panic!("expected malformed_json for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_object_yields_empty_string() {
        assert_eq!(transform(b"{}", None).expect("should succeed"), "");
    }

    #[test]
    fn single_leaf() {
        assert_eq!(
            transform(br#"{"error": "x"}"#, None).expect("should succeed"),
            "\tError = \"error\""
        );
    }

    #[test]
    fn hyphenated_leaf() {
        assert_eq!(
            transform(br#"{"error-error": "x"}"#, None).expect("should succeed"),
            "\tError_Error = \"error-error\""
        );
    }

    #[test]
    fn root_scoped_output_drops_the_root_prefix() {
        let doc = br#"{
            "errors": {"test": "x", "test2": "x"},
            "messages": {"test": "x"}
        }"#;
        assert_eq!(
            transform(doc, Some("errors")).expect("should succeed"),
            "\tTest = \"test\"\n\tTest2 = \"test2\""
        );
    }

    #[test]
    fn missing_root_fails() {
        let err = transform(br#"{"errors": {}}"#, Some("nope")).expect_err("should fail");
        assert_eq!(err.kind(), "root_not_found");
    }

    #[test]
    fn groups_sort_by_name_not_walk_order() {
        let generated = generate(
            br#"{"b": {"x": ""}, "a": {"z": {"y": ""}}, "top": ""}"#,
            None,
        )
        .expect("should succeed");
        let names: Vec<&str> = generated.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["", "A_Z", "B"]);
        assert_eq!(generated.group_count(), 3);
        assert_eq!(generated.constant_count(), 3);
    }

    #[test]
    fn output_is_deterministic() {
        let doc = br#"{"z": {"b": "", "a": ""}, "y": "", "m": {"n": {"o": ""}}}"#;
        let first = transform(doc, None).expect("should succeed");
        for _ in 0..5 {
            assert_eq!(transform(doc, None).expect("should succeed"), first);
        }
    }
}
