#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for SpacetimeDB schema code generation.
//!
//! Two layers:
//! - **Model** (`sats`): the Spacetime Algebraic Type System IR and the raw
//!   module definition that references it
//! - **Parser** (`sats::json`): SATS-JSON (`spacetime describe --json`) into the model
//!
//! Case conversion helpers used when turning schema names into identifiers
//! live in `utils`.

pub mod sats;
pub mod utils;


pub use sats::{
    AlgebraicType, BuiltinKind, BuiltinType, ExportedType, ParseError, ProductType,
    ProductTypeElement, RawModuleDef, ReducerDef, ScopedName, SumType, SumTypeVariant, TableDef,
    TypeRef, Typespace,
};
