//! Spacetime Algebraic Type System.
//!
//! This module provides the algebraic type IR for a SpacetimeDB module
//! (`types`) and its SATS-JSON deserialization (`json`).

mod error;
mod json;
mod types;

#[cfg(test)]
mod types_tests;

pub use error::ParseError;
pub use json::parse_algebraic_type;
pub use types::{
    AlgebraicType, BuiltinKind, BuiltinType, ExportedType, ProductType, ProductTypeElement,
    RawModuleDef, ReducerDef, ScopedName, SumType, SumTypeVariant, TableDef, TypeRef, Typespace,
};
