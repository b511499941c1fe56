//! Unreal Engine C++ backend.
//!
//! Emits `USTRUCT` declarations for exported and inline types and a
//! `UBlueprintFunctionLibrary` with one static function per reducer.

mod config;
mod emitter;
mod reducers;
mod types;


use std::path::PathBuf;

use indexmap::IndexMap;
use stdbgen_core::BuiltinKind;

use crate::backend::{Artifact, Backend, BuiltinMapping, DocumentKind, Reflection};
use crate::layout::{Header, Include, LayoutError, ModuleNames, ReducerStub};

pub use config::Config;
pub use emitter::Emitter;

#[derive(Clone, Debug, Default)]
pub struct UnrealBackend {
    config: Config,
}

impl UnrealBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Backend for UnrealBackend {
    fn name(&self) -> &'static str {
        "unreal"
    }

    fn type_name(&self, base: &str) -> String {
        format!("F{base}")
    }

    fn is_reserved(&self, type_name: &str) -> bool {
        types::is_reserved(type_name)
    }

    fn builtin(&self, kind: BuiltinKind) -> BuiltinMapping {
        types::builtin(kind)
    }

    fn reflection(&self, category: &str) -> Option<Reflection> {
        let mut metadata = IndexMap::new();
        metadata.insert("Category".to_string(), category.to_string());
        Some(Reflection {
            specifiers: vec!["BlueprintType".to_string()],
            metadata,
        })
    }

    fn includes(&self, document: DocumentKind, names: &ModuleNames) -> Vec<Include> {
        match document {
            DocumentKind::Inline => vec![
                Include::local("CoreMinimal.h"),
                Include::local(format!("{}.generated.h", names.inline)),
            ],
            DocumentKind::Exported => vec![
                Include::local("CoreMinimal.h"),
                Include::local(format!("{}.h", names.inline)),
                Include::local(format!("{}.generated.h", names.exported)),
            ],
            DocumentKind::Reducers => vec![
                Include::local("Kismet/BlueprintFunctionLibrary.h"),
                Include::local("CoreMinimal.h"),
                Include::local(format!("{}.h", names.exported)),
                Include::local(format!("{}.generated.h", names.reducers)),
            ],
        }
    }

    fn header_path(&self, document: DocumentKind, names: &ModuleNames) -> PathBuf {
        let file = match document {
            DocumentKind::Exported => &names.exported,
            DocumentKind::Inline => &names.inline,
            DocumentKind::Reducers => &names.reducers,
        };
        self.config.public_dir.join(format!("{file}.h"))
    }

    fn render_header(&self, header: &Header) -> Result<String, LayoutError> {
        Emitter::new(header, &self.config).emit()
    }

    fn render_reducers(&self, names: &ModuleNames, reducers: &[ReducerStub]) -> Vec<Artifact> {
        self.reducer_artifacts(names, reducers)
    }
}
