//! Errors produced while decoding SATS-JSON.

use super::types::BuiltinKind;

/// Error during module definition parsing.
///
/// Nested failures are wrapped in [`ParseError::Context`] while unwinding, so
/// the rendered message reads outermost-first, e.g.
///
/// ```text
/// failed to parse typespace: typespace entry 1 ('Product'): while parsing element 0
/// of Product: failed to resolve algebraic type of 'center': expected 'Product',
/// 'Sum', 'Ref' or a builtin type, found 'Vector'
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("failed to parse JSON module definition: {0}")]
    MalformedJson(String),

    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}")]
    UnexpectedShape {
        field: String,
        expected: &'static str,
    },

    #[error("malformed type entry {index}: {reason}")]
    MalformedTypeEntry { index: usize, reason: String },

    #[error("expected 'Product', 'Sum', 'Ref' or a builtin type, found '{0}'")]
    UnknownBuiltin(String),

    /// `Array` and `Map` are recognized but not generated.
    #[error("SATS builtin type '{0}' is not implemented")]
    UnsupportedBuiltin(BuiltinKind),

    #[error(
        "inconsistent number of entries in 'typespace' ({typespace} entries) \
         and 'types' ({exported} entries)"
    )]
    TypeCountMismatch { typespace: usize, exported: usize },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn shape(field: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedShape {
            field: field.into(),
            expected,
        }
    }

    /// Wrap this error with a description of the enclosing node.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping every context layer.
    pub fn root(&self) -> &ParseError {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

pub(crate) trait ResultExt<T> {
    fn context_with(self, f: impl FnOnce() -> String) -> Result<T, ParseError>;
}

impl<T> ResultExt<T> for Result<T, ParseError> {
    fn context_with(self, f: impl FnOnce() -> String) -> Result<T, ParseError> {
        self.map_err(|e| e.context(f()))
    }
}
