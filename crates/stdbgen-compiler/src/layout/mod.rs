//! Target-agnostic header layout.
//!
//! - `builder` - typespace to exported and inline headers
//! - `reducers` - reducer stubs
//! - `sort` - dependency ordering of header elements
//! - `naming` - generated and reserved-aware type names

mod builder;
mod dump;
mod error;
mod ir;
mod naming;
mod reducers;
mod sort;

#[cfg(test)]
mod naming_tests;

pub use builder::{Layout, ROOT_CATEGORY, build_layout};
pub use error::LayoutError;
pub use ir::{Attribute, ElementKind, Header, HeaderElement, Include, Struct, TaggedUnion};
pub use naming::{ExportedName, ExportedNames, ModuleNames, NameAllocator, make_struct_name};
pub use reducers::{ReducerStub, layout_reducers};
