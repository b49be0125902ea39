//! Constants and the groups that render them.

use crate::naming::{format_constant_name, format_js_path, quote_go_string};
use serde::Serialize;

/// One generated constant. Name and value come from the same path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub name: String,
    pub value: String,
}

impl Constant {
    /// Derive a constant from the full path to a string leaf.
    pub fn from_path<S: AsRef<str>>(path: &[S]) -> Self {
        Self {
            name: format_constant_name(path),
            value: format_js_path(path),
        }
    }

    /// Render as one definition line: a tab, then `NAME = "value"`.
    pub fn render(&self) -> String {
        format!("\t{} = {}", self.name, quote_go_string(&self.value))
    }
}

/// All constants whose leaves share one parent object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Constant name of the parent object's path; empty at the walk root.
    pub name: String,
    pub constants: Vec<Constant>,
}

impl Group {
    /// Build a group for the object at `path`. Constants keep the order of
    /// the leaf keys they were derived from.
    pub fn new<S: AsRef<str>>(path: &[S], constants: Vec<Constant>) -> Self {
        Self {
            name: format_constant_name(path),
            constants,
        }
    }

    /// Definition lines joined by newlines, no trailing newline.
    pub fn render(&self) -> String {
        self.constants
            .iter()
            .map(Constant::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
