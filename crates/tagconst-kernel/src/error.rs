//! Error types for tag tree transformation.

/// Errors that abort a transform. None of them leave partial output behind.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The document is blank, syntactically invalid, or not a JSON object.
    #[error("malformed json: {0}")]
    MalformedJson(String),

    /// The root selector names a key the top-level object does not have.
    #[error("root node `{root}` does not exist")]
    RootNotFound { root: String },

    /// The root selector names a value that is not an object.
    #[error("root node `{root}` is not an object: {detail}")]
    InvalidRootShape { root: String, detail: String },

    /// A node below the walk start is neither an object nor a string.
    #[error("invalid leaf at `{path}`: expected object or string, found {kind}")]
    InvalidLeafType { path: String, kind: String },
}

impl TransformError {
    /// Stable failure class for machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedJson(_) => "malformed_json",
            Self::RootNotFound { .. } => "root_not_found",
            Self::InvalidRootShape { .. } => "invalid_root_shape",
            Self::InvalidLeafType { .. } => "invalid_leaf_type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(
            TransformError::MalformedJson("eof".to_string()).kind(),
            "malformed_json"
        );
        assert_eq!(
            TransformError::RootNotFound {
                root: "errors".to_string()
            }
            .kind(),
            "root_not_found"
        );
        assert_eq!(
            TransformError::InvalidLeafType {
                path: "a.b".to_string(),
                kind: "number".to_string()
            }
            .kind(),
            "invalid_leaf_type"
        );
    }

    #[test]
    fn messages_name_the_offending_path() {
        let err = TransformError::InvalidLeafType {
            path: "errors.count".to_string(),
            kind: "number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid leaf at `errors.count`: expected object or string, found number"
        );
    }
}
