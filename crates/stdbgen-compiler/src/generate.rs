//! End-to-end pipeline: SATS-JSON in, generated files out.

use stdbgen_core::RawModuleDef;

use crate::Result;
use crate::backend::{Artifact, Backend, DocumentKind};
use crate::layout::{LayoutError, build_layout, layout_reducers};

/// Parses a module definition and renders every file for `backend`.
///
/// Nothing is returned unless every document renders.
pub fn generate(module_name: &str, json: &str, backend: &dyn Backend) -> Result<Vec<Artifact>> {
    let module = RawModuleDef::from_json(json)?;
    generate_module(module_name, &module, backend)
}

/// Renders every file for an already parsed module definition.
pub fn generate_module(
    module_name: &str,
    module: &RawModuleDef,
    backend: &dyn Backend,
) -> Result<Vec<Artifact>> {
    for table in &module.tables {
        if module.typespace.get(table.product_type_ref).is_none() {
            return Err(LayoutError::DanglingRef(table.product_type_ref)
                .context(format!("in table '{}'", table.name))
                .into());
        }
    }

    let layout = build_layout(module_name, &module.typespace, &module.types, backend)?;
    let reducers = layout_reducers(module_name, &module.reducers, &module.types, backend)?;

    let mut artifacts = vec![
        Artifact::new(
            backend.header_path(DocumentKind::Inline, &layout.names),
            backend.render_header(&layout.inline)?,
        ),
        Artifact::new(
            backend.header_path(DocumentKind::Exported, &layout.names),
            backend.render_header(&layout.exported)?,
        ),
    ];
    artifacts.extend(backend.render_reducers(&layout.names, &reducers));

    tracing::info!(
        "generated {} files for module '{}' ({} exported, {} inline, {} reducers)",
        artifacts.len(),
        layout.names.module,
        layout.exported.elements().len(),
        layout.inline.elements().len(),
        reducers.len()
    );
    Ok(artifacts)
}
