//! stdbgen compiler: header layout and client code emission.
//!
//! This crate turns a parsed SpacetimeDB module definition into client code:
//! - `layout` - target-agnostic header IR, naming, and dependency ordering
//! - `backend` - the `Backend` trait and the Unreal C++ emitter
//! - `generate` - parse, lay out, and render in one call

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod backend;
pub mod generate;
pub mod layout;

#[cfg(test)]
pub mod test_utils;

pub use backend::{Artifact, Backend, BuiltinMapping, DocumentKind, Reflection, UnrealBackend};
pub use generate::{generate, generate_module};
pub use layout::{Layout, LayoutError, build_layout, layout_reducers};

use stdbgen_core::ParseError;

/// Errors that can occur while generating client code.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
