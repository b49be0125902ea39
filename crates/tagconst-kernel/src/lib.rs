//! # tagconst Kernel
//!
//! Turns a nested JSON tag tree into a flat, sorted list of named string
//! constants. Every object level with at least one string leaf becomes one
//! group; each constant's value is the dotted path to its leaf and its name
//! is the same path title-cased and underscore-joined.
//!
//! The kernel is a pure function of its inputs: no global state, no
//! environment lookups. The root selector is always passed explicitly.
//!
//! ## Architecture
//!
//! ```text
//! transform(bytes, root)   ← Decode, narrow, walk, sort, join
//!     │
//! resolve_root             ← Optional subtree selection by top-level key
//!     │
//! walk                     ← Depth-first, sorted keys, one Group per level
//!     │
//! classify → Node          ← Object | Leaf | Other
//!     │
//! Constant / Group         ← Name and value derived from one segment slice
//! ```
//!
//! Loading the document and writing the generated Go file live in
//! [`artifact`] and [`emit`].

pub mod artifact;
pub mod constant;
pub mod emit;
pub mod error;
pub mod naming;
pub mod node;
pub mod root;
pub mod transform;
pub mod walk;

pub use artifact::{ArtifactError, content_digest, read_document, read_existing, write_artifact};
pub use constant::{Constant, Group};
pub use emit::{EmitError, render_go_file, validate_package_name};
pub use error::TransformError;
pub use naming::{format_constant_name, format_js_path};
pub use node::{Node, NodeKind, classify};
pub use root::resolve_root;
pub use transform::{Generated, generate, transform};
pub use walk::walk;
