//! Reducer stubs.

use stdbgen_core::utils::to_pascal_case;
use stdbgen_core::{AlgebraicType, ExportedType, ReducerDef};

use super::LayoutError;
use super::builder::{builtin_type_name, reserve_helper_names};
use super::ir::Attribute;
use super::naming::{ExportedNames, ModuleNames, NameAllocator};
use crate::backend::Backend;

/// Client-side declaration of a reducer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReducerStub {
    /// PascalCase function name.
    pub name: String,
    /// Reducer name as declared by the module.
    pub raw_name: String,
    pub params: Vec<Attribute>,
}

/// Lays out one stub per reducer, in declaration order.
///
/// Parameters must be builtins or references to exported types; inline
/// products and sums have no struct to pass.
pub fn layout_reducers(
    module_name: &str,
    reducers: &[ReducerDef],
    exported: &[ExportedType],
    backend: &dyn Backend,
) -> Result<Vec<ReducerStub>, LayoutError> {
    let names = ModuleNames::new(module_name);
    let mut allocator = NameAllocator::new();
    reserve_helper_names(&mut allocator, backend);
    let exported_names = ExportedNames::new(exported, &names, backend, &mut allocator);

    reducers
        .iter()
        .map(|reducer| {
            let params = reducer
                .params
                .elements
                .iter()
                .map(|param| {
                    let raw = match &param.name {
                        Some(name) => name.clone(),
                        None => allocator.anonymous_field(),
                    };
                    let field = to_pascal_case(&raw);
                    match &param.algebraic_type {
                        AlgebraicType::Builtin(builtin) => {
                            let kind = builtin.kind();
                            let ty = builtin_type_name(backend, kind)?;
                            Ok(Attribute::new(field, ty).with_comment(format!("{raw}: {kind}")))
                        }
                        AlgebraicType::Ref(type_ref) => {
                            let target = exported_names.resolve(*type_ref)?;
                            Ok(Attribute::new(field, target.type_name.clone())
                                .with_comment(format!("{raw}: {}", target.raw)))
                        }
                        other => Err(LayoutError::UnsupportedReducerParam {
                            reducer: reducer.name.clone(),
                            param: raw,
                            tag: other.tag(),
                        }),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.context(format!("in reducer '{}'", reducer.name)))?;

            Ok(ReducerStub {
                name: to_pascal_case(&reducer.name),
                raw_name: reducer.name.clone(),
                params,
            })
        })
        .collect()
}
