//! Translates the typespace into exported and inline headers.

use std::collections::HashSet;

use stdbgen_core::utils::to_pascal_case;
use stdbgen_core::{AlgebraicType, BuiltinKind, ExportedType, ProductType, SumType, Typespace};

use super::ir::{Attribute, Header, Struct, TaggedUnion};
use super::naming::{ExportedNames, ModuleNames, NameAllocator};
use super::LayoutError;
use crate::backend::{Backend, BuiltinMapping, DocumentKind};

/// Category shared by every generated declaration.
pub const ROOT_CATEGORY: &str = "SpacetimeDB";

/// Builtins backed by a synthesized helper struct instead of a native type.
const HELPER_BUILTINS: [BuiltinKind; 2] = [BuiltinKind::U256, BuiltinKind::I256];

/// Headers produced for one module.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Layout {
    pub names: ModuleNames,
    /// One struct per exported type, in export order, plus the nested types
    /// that use exported structs.
    pub exported: Header,
    /// Anonymous structs, tagged unions, and helper structs.
    pub inline: Header,
}

/// Lays out every exported type of a module.
///
/// All exported types must be products. Nested anonymous products and sums
/// are hoisted under generated names: into the inline header, or into the
/// exported header when they use an exported struct.
pub fn build_layout(
    module_name: &str,
    typespace: &Typespace,
    exported: &[ExportedType],
    backend: &dyn Backend,
) -> Result<Layout, LayoutError> {
    let names = ModuleNames::new(module_name);
    tracing::debug!(
        "building {} layout for module '{}' ({} exported types)",
        backend.name(),
        names.module,
        exported.len()
    );
    LayoutBuilder::new(names, typespace, exported, backend).build()
}

/// Target type name for a SATS builtin, warning when the mapping is lossy.
pub(crate) fn builtin_type_name(
    backend: &dyn Backend,
    kind: BuiltinKind,
) -> Result<String, LayoutError> {
    match backend.builtin(kind) {
        BuiltinMapping::Native(ty) => Ok(ty.to_string()),
        BuiltinMapping::Substitute { ty, native } => {
            tracing::warn!(
                "SATS type '{kind}' is emitted as '{ty}': {} cannot reflect '{native}'",
                backend.name()
            );
            Ok(ty.to_string())
        }
        BuiltinMapping::Helper(base) => {
            let name = backend.type_name(base);
            tracing::warn!("SATS type '{kind}' is emitted as helper struct '{name}'");
            Ok(name)
        }
        BuiltinMapping::Unsupported => Err(LayoutError::UnsupportedBuiltin(kind)),
    }
}

/// Reserves the names of the helper structs a backend synthesizes, so no
/// export can take them.
pub(crate) fn reserve_helper_names(allocator: &mut NameAllocator, backend: &dyn Backend) {
    for kind in HELPER_BUILTINS {
        if let BuiltinMapping::Helper(base) = backend.builtin(kind) {
            allocator.reserve(backend.type_name(base));
        }
    }
}

struct LayoutBuilder<'a> {
    names: ModuleNames,
    typespace: &'a Typespace,
    exported_types: &'a [ExportedType],
    backend: &'a dyn Backend,
    exported_names: ExportedNames,
    allocator: NameAllocator,
    exported: Header,
    inline: Header,
    /// Types that must be declared in the exported header: every exported
    /// struct and every nested type that uses one.
    exported_bound: HashSet<String>,
}

impl<'a> LayoutBuilder<'a> {
    fn new(
        names: ModuleNames,
        typespace: &'a Typespace,
        exported_types: &'a [ExportedType],
        backend: &'a dyn Backend,
    ) -> Self {
        let mut allocator = NameAllocator::new();
        reserve_helper_names(&mut allocator, backend);
        let exported_names = ExportedNames::new(exported_types, &names, backend, &mut allocator);
        let exported_bound = exported_names.iter().map(str::to_string).collect();
        let exported = Header::new(names.exported.clone());
        let inline = Header::new(names.inline.clone());
        Self {
            names,
            typespace,
            exported_types,
            backend,
            exported_names,
            allocator,
            exported,
            inline,
            exported_bound,
        }
    }

    fn build(mut self) -> Result<Layout, LayoutError> {
        self.inline.includes = self.backend.includes(DocumentKind::Inline, &self.names);
        self.exported.includes = self.backend.includes(DocumentKind::Exported, &self.names);
        self.add_helper_structs()?;

        for (position, export) in self.exported_types.iter().enumerate() {
            let ty = self
                .typespace
                .get(export.ty)
                .ok_or(LayoutError::DanglingRef(export.ty))?;
            let Some(product) = ty.as_product() else {
                return Err(LayoutError::UnsupportedExport {
                    index: export.ty,
                    tag: ty.tag(),
                });
            };
            let name = self
                .exported_names
                .struct_name(position)
                .ok_or_else(|| {
                    LayoutError::InternalInconsistency(format!(
                        "no struct name allocated for exported type '{}'",
                        export.name
                    ))
                })?
                .to_string();
            let s = self
                .generate_struct(name, product)
                .map_err(|e| e.context(format!("in exported type '{}'", export.name)))?;
            self.exported.add_struct(s);
        }

        Ok(Layout {
            names: self.names,
            exported: self.exported,
            inline: self.inline,
        })
    }

    fn add_helper_structs(&mut self) -> Result<(), LayoutError> {
        for kind in HELPER_BUILTINS {
            let BuiltinMapping::Helper(base) = self.backend.builtin(kind) else {
                continue;
            };
            let value_ty = builtin_type_name(self.backend, BuiltinKind::String)?;
            let mut helper = Struct {
                name: self.backend.type_name(base),
                attributes: vec![Attribute::new("Value", value_ty)],
                comment: Some(format!(
                    "Provides SATS-JSON {kind} support as a decimal string."
                )),
                ..Default::default()
            };
            self.apply_reflection(&mut helper, ROOT_CATEGORY);
            self.inline.add_struct(helper);
        }
        Ok(())
    }

    fn module_category(&self) -> String {
        format!("{ROOT_CATEGORY}|{}", self.names.pascal)
    }

    fn apply_reflection(&self, s: &mut Struct, category: &str) {
        if let Some(reflection) = self.backend.reflection(category) {
            s.is_reflected = true;
            s.specifiers = reflection.specifiers;
            s.metadata = reflection.metadata;
        }
    }

    fn member_name(&mut self, name: Option<&str>) -> String {
        match name {
            Some(name) => name.to_string(),
            None => self.allocator.anonymous_field(),
        }
    }

    fn generate_struct(&mut self, name: String, product: &ProductType) -> Result<Struct, LayoutError> {
        tracing::trace!("laying out struct '{name}'");
        let mut s = Struct {
            name,
            ..Default::default()
        };
        let category = self.module_category();
        self.apply_reflection(&mut s, &category);

        for element in &product.elements {
            let raw = self.member_name(element.name.as_deref());
            let attribute = self
                .generate_member(&raw, &element.algebraic_type)
                .map_err(|e| e.context(format!("in field '{raw}' of '{}'", s.name)))?;
            s.attributes.push(attribute);
        }
        Ok(s)
    }

    fn generate_tagged_union(&mut self, sum: &SumType) -> Result<TaggedUnion, LayoutError> {
        let (base_name, name) = self.allocator.sum_names(self.backend);
        tracing::trace!("laying out tagged union '{name}'");
        let mut union = TaggedUnion {
            base_name,
            name,
            variants: Vec::with_capacity(sum.variants.len()),
            option_tags: Vec::with_capacity(sum.variants.len()),
            is_reflected: self.backend.reflection(ROOT_CATEGORY).is_some(),
            sub_category: self.names.pascal.clone(),
            comment: None,
        };

        for variant in &sum.variants {
            let raw = self.member_name(variant.name.as_deref());
            let attribute = self
                .generate_member(&raw, &variant.algebraic_type)
                .map_err(|e| e.context(format!("in variant '{raw}' of '{}'", union.name)))?;
            union.option_tags.push(attribute.name.clone());
            union.variants.push(attribute);
        }
        Ok(union)
    }

    /// Whether a nested type has a member declared in the exported header.
    /// Such a type is placed there too, since the inline header is included
    /// before any exported struct is defined.
    fn uses_exported(&mut self, name: &str, members: &[Attribute]) -> bool {
        let Some(member) = members.iter().find(|m| self.exported_bound.contains(&m.ty)) else {
            return false;
        };
        tracing::debug!(
            "placing '{name}' in the exported header, member '{}' uses '{}'",
            member.name,
            member.ty
        );
        self.exported_bound.insert(name.to_string());
        true
    }

    /// Attribute for one product element or sum variant. Anonymous nested
    /// types are added to a header before their parent.
    fn generate_member(&mut self, raw: &str, ty: &AlgebraicType) -> Result<Attribute, LayoutError> {
        let field = to_pascal_case(raw);
        match ty {
            AlgebraicType::Product(product) => {
                let name = self.allocator.product_name(self.backend);
                let nested = self.generate_struct(name, product)?;
                let attribute = Attribute::new(field, nested.name.clone());
                if self.uses_exported(&nested.name, &nested.attributes) {
                    self.exported.add_struct(nested);
                } else {
                    self.inline.add_struct(nested);
                }
                Ok(attribute)
            }
            AlgebraicType::Sum(sum) => {
                let nested = self.generate_tagged_union(sum)?;
                let attribute = Attribute::new(field, nested.name.clone());
                if self.uses_exported(&nested.name, &nested.variants) {
                    self.exported.add_tagged_union(nested);
                } else {
                    self.inline.add_tagged_union(nested);
                }
                Ok(attribute)
            }
            AlgebraicType::Ref(type_ref) => {
                let target = self.exported_names.resolve(*type_ref)?;
                Ok(Attribute::new(field, target.type_name.clone())
                    .with_comment(format!("{raw}: {}", target.raw)))
            }
            AlgebraicType::Builtin(builtin) => {
                let kind = builtin.kind();
                let ty = builtin_type_name(self.backend, kind)?;
                Ok(Attribute::new(field, ty).with_comment(format!("{raw}: {kind}")))
            }
        }
    }
}
