//! Target-language backends.
//!
//! The layout builder is target-agnostic: it asks a [`Backend`] how to name
//! types, how to map SATS builtins and which reflection markup to attach, then
//! hands finished [`Header`]s back to the backend for rendering.

pub mod unreal;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use stdbgen_core::BuiltinKind;

use crate::layout::{Header, Include, LayoutError, ModuleNames, ReducerStub};

pub use unreal::UnrealBackend;

/// How a SATS builtin is represented in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinMapping {
    /// Natively reflected type.
    Native(&'static str),
    /// Reflected stand-in for a native type the target cannot reflect.
    Substitute {
        ty: &'static str,
        native: &'static str,
    },
    /// Synthesized helper struct, by base name.
    Helper(&'static str),
    Unsupported,
}

/// Reflection markup attached to generated structs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reflection {
    pub specifiers: Vec<String>,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    /// Module's exported types.
    Exported,
    /// Anonymous types and helpers referenced by exported types.
    Inline,
    /// Reducer function declarations.
    Reducers,
}

/// Generated file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

pub trait Backend {
    /// Short identifier used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Target type name for a PascalCase base name.
    fn type_name(&self, base: &str) -> String;

    /// Whether a target type name collides with a type the target already defines.
    fn is_reserved(&self, type_name: &str) -> bool;

    fn builtin(&self, kind: BuiltinKind) -> BuiltinMapping;

    /// Markup for a generated struct in `category`; `None` leaves it unreflected.
    fn reflection(&self, category: &str) -> Option<Reflection>;

    fn includes(&self, document: DocumentKind, names: &ModuleNames) -> Vec<Include>;

    fn header_path(&self, document: DocumentKind, names: &ModuleNames) -> PathBuf;

    fn render_header(&self, header: &Header) -> Result<String, LayoutError>;

    fn render_reducers(&self, names: &ModuleNames, reducers: &[ReducerStub]) -> Vec<Artifact>;
}
