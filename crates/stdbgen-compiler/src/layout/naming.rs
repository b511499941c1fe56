//! Name generation for modules, exported structs, and anonymous types.

use std::collections::{BTreeSet, HashMap};

use stdbgen_core::utils::to_pascal_case;
use stdbgen_core::{ExportedType, ScopedName, TypeRef};

use super::LayoutError;
use crate::backend::Backend;

/// File and category names derived from the module name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ModuleNames {
    pub module: String,
    pub pascal: String,
    pub exported: String,
    pub inline: String,
    pub reducers: String,
}

impl ModuleNames {
    pub fn new(module: &str) -> Self {
        let pascal = to_pascal_case(module);
        Self {
            module: module.to_string(),
            exported: format!("{pascal}ExportedTypes"),
            inline: format!("{pascal}InlineTypes"),
            reducers: format!("{pascal}Reducers"),
            pascal,
        }
    }
}

/// Target struct name for an exported type.
///
/// Names that collide with a type the backend reserves get the module name
/// appended before prefixing.
pub fn make_struct_name(raw: &str, names: &ModuleNames, backend: &dyn Backend) -> String {
    let base = to_pascal_case(raw);
    let name = backend.type_name(&base);
    if !backend.is_reserved(&name) {
        return name;
    }
    let renamed = backend.type_name(&format!("{base}{}", names.pascal));
    tracing::warn!("'{raw}' collides with reserved type '{name}', emitting '{renamed}'");
    renamed
}

fn unique_struct_name(
    name: &ScopedName,
    names: &ModuleNames,
    backend: &dyn Backend,
    allocator: &mut NameAllocator,
) -> String {
    let plain = make_struct_name(&name.name, names, backend);
    if allocator.reserve(plain.clone()) {
        return plain;
    }

    let scoped = name
        .scope
        .iter()
        .map(String::as_str)
        .chain([name.name.as_str()])
        .collect::<Vec<_>>()
        .join("_");
    let mut candidate = make_struct_name(&scoped, names, backend);
    let mut suffix = 2;
    while allocator.is_used(&candidate) {
        candidate = make_struct_name(&format!("{scoped}_{suffix}"), names, backend);
        suffix += 1;
    }
    tracing::warn!(
        "'{name}' collides with an earlier export named '{plain}', emitting '{candidate}'"
    );
    allocator.reserve(candidate.clone());
    candidate
}

/// Counters for generated names, scoped to one layout run.
#[derive(Debug, Default)]
pub struct NameAllocator {
    used: BTreeSet<String>,
    products: u32,
    sums: u32,
    fields: u32,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a name as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.used.insert(name.into())
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Next inline struct name, e.g. `FProduct00`.
    pub fn product_name(&mut self, backend: &dyn Backend) -> String {
        loop {
            let name = backend.type_name(&format!("Product{:02}", self.products));
            self.products += 1;
            if self.used.insert(name.clone()) {
                return name;
            }
        }
    }

    /// Next tagged union `(base_name, type_name)`, e.g. `("Sum00", "FSum00")`.
    pub fn sum_names(&mut self, backend: &dyn Backend) -> (String, String) {
        loop {
            let base = format!("Sum{:02}", self.sums);
            self.sums += 1;
            let name = backend.type_name(&base);
            if self.used.insert(name.clone()) {
                return (base, name);
            }
        }
    }

    pub fn anonymous_field(&mut self) -> String {
        let name = format!("AnonymousField_{}", self.fields);
        self.fields += 1;
        name
    }
}

/// Exported type reachable through a `Ref`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedName {
    pub raw: String,
    pub type_name: String,
}

/// Resolves typespace indices to exported struct names.
#[derive(Debug, Default)]
pub struct ExportedNames {
    by_ref: HashMap<TypeRef, ExportedName>,
    /// Struct name per exported type, in declaration order.
    ordered: Vec<String>,
}

impl ExportedNames {
    /// Assigns one struct name per export, in declaration order.
    ///
    /// Every name is reserved in `allocator`. An export whose name is already
    /// taken gets its scope folded in (`x::Item` becomes `FXItem`), then a
    /// numeric suffix until the name is free.
    pub fn new(
        exported: &[ExportedType],
        names: &ModuleNames,
        backend: &dyn Backend,
        allocator: &mut NameAllocator,
    ) -> Self {
        let mut resolved = Self::default();
        for export in exported {
            let raw = export.name.name.clone();
            let type_name = unique_struct_name(&export.name, names, backend, allocator);
            resolved.ordered.push(type_name.clone());
            // First export of an index wins.
            resolved
                .by_ref
                .entry(export.ty)
                .or_insert(ExportedName { raw, type_name });
        }
        resolved
    }

    pub fn resolve(&self, type_ref: TypeRef) -> Result<&ExportedName, LayoutError> {
        self.by_ref
            .get(&type_ref)
            .ok_or(LayoutError::DanglingRef(type_ref))
    }

    /// Struct name of the `position`th exported type.
    pub fn struct_name(&self, position: usize) -> Option<&str> {
        self.ordered.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
