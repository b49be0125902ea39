//! Go source rendering for a generated constant block.

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("invalid package name `{0}`: expected a Go identifier")]
    InvalidPackageName(String),
}

/// Check that `package` can be used as a Go package clause.
pub fn validate_package_name(package: &str) -> Result<(), EmitError> {
    let mut chars = package.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|first| first == '_' || first.is_alphabetic());
    let rest_ok = chars.all(|c| c == '_' || c.is_alphabetic() || c.is_numeric());
    if !starts_ok || !rest_ok || GO_KEYWORDS.contains(&package) {
        return Err(EmitError::InvalidPackageName(package.to_string()));
    }
    Ok(())
}

/// Wrap a constant block body in a package clause and `const ( ... )`.
///
/// The file has no trailing newline.
pub fn render_go_file(package: &str, body: &str) -> Result<String, EmitError> {
    validate_package_name(package)?;
    Ok(format!("package {package}\n\nconst (\n{body}\n)"))
}
