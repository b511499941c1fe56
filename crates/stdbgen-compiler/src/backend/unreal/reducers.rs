//! Blueprint function library wrapping the module's reducers.

use crate::backend::{Artifact, Backend, DocumentKind};
use crate::layout::{Include, ModuleNames, ROOT_CATEGORY, ReducerStub};

use super::UnrealBackend;

impl UnrealBackend {
    pub(super) fn reducer_artifacts(
        &self,
        names: &ModuleNames,
        reducers: &[ReducerStub],
    ) -> Vec<Artifact> {
        let header = Artifact::new(
            self.header_path(DocumentKind::Reducers, names),
            self.reducer_header(names, reducers),
        );
        let source = Artifact::new(
            self.config
                .private_dir
                .join(format!("{}.cpp", names.reducers)),
            self.reducer_source(names, reducers),
        );
        vec![header, source]
    }

    fn class_name(names: &ModuleNames) -> String {
        format!("U{}Reducers", names.pascal)
    }

    fn signature(stub: &ReducerStub) -> String {
        stub.params
            .iter()
            .map(|p| format!("const {}& {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn reducer_header(&self, names: &ModuleNames, reducers: &[ReducerStub]) -> String {
        let indent = &self.config.indent;
        let mut out = String::from("#pragma once\n\n");
        for include in self.includes(DocumentKind::Reducers, names) {
            out.push_str(&render_include(&include));
        }
        out.push_str("\n\n");

        out.push_str("UCLASS()\n");
        let api = if self.config.api_macro.is_empty() {
            String::new()
        } else {
            format!("{} ", self.config.api_macro)
        };
        out.push_str(&format!(
            "class {api}{} : public UBlueprintFunctionLibrary {{\n\n",
            Self::class_name(names)
        ));
        out.push_str(&format!("{indent}GENERATED_BODY()\n\npublic:\n\n"));

        for stub in reducers {
            if self.config.emit_comments {
                out.push_str(&format!("{indent}/* Reducer '{}' */\n", stub.raw_name));
            }
            out.push_str(&format!(
                "{indent}UFUNCTION(BlueprintCallable, Category=\"{ROOT_CATEGORY}|{}\")\n",
                names.pascal
            ));
            out.push_str(&format!(
                "{indent}static void {}({});\n\n",
                stub.name,
                Self::signature(stub)
            ));
        }
        out.push_str("};\n");
        out
    }

    fn reducer_source(&self, names: &ModuleNames, reducers: &[ReducerStub]) -> String {
        let indent = &self.config.indent;
        let class = Self::class_name(names);
        let mut out = format!("#include \"Generated/{}.h\"\n", names.reducers);

        for stub in reducers {
            out.push_str(&format!(
                "\nvoid {class}::{}({})\n{{\n",
                stub.name,
                Self::signature(stub)
            ));
            out.push_str(&format!(
                "{indent}// Calls SpacetimeDB reducer '{}'\n}}\n",
                stub.raw_name
            ));
        }
        out
    }
}

pub(super) fn render_include(include: &Include) -> String {
    if include.is_local {
        format!("#include \"{}\"\n", include.path)
    } else {
        format!("#include <{}>\n", include.path)
    }
}
