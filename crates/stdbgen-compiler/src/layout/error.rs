use stdbgen_core::{BuiltinKind, TypeRef};

/// Errors raised while laying out headers from a parsed module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("type reference {0} does not resolve to an exported type")]
    DanglingRef(TypeRef),

    #[error(
        "header generation for typespace entries other than 'Product' is not implemented \
         (type {index} is '{tag}')"
    )]
    UnsupportedExport { index: TypeRef, tag: &'static str },

    #[error("SATS builtin type '{0}' has no representation in this backend")]
    UnsupportedBuiltin(BuiltinKind),

    #[error("reducer '{reducer}' parameter '{param}' has an inline {tag} type")]
    UnsupportedReducerParam {
        reducer: String,
        param: String,
        tag: &'static str,
    },

    /// Elements that could not be ordered, sorted by name.
    #[error("cyclic dependency detected between {}", .0.join(", "))]
    CyclicDependency(Vec<String>),

    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LayoutError>,
    },
}

impl LayoutError {
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping every context layer.
    pub fn root(&self) -> &LayoutError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}
