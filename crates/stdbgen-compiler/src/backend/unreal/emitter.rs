//! Header emission.

use crate::layout::{
    Attribute, ElementKind, Header, LayoutError, ROOT_CATEGORY, Struct, TaggedUnion,
};

use super::Config;
use super::reducers::render_include;

/// Unreal C++ emitter for one header.
pub struct Emitter<'a> {
    header: &'a Header,
    config: &'a Config,
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(header: &'a Header, config: &'a Config) -> Self {
        Self {
            header,
            config,
            output: String::new(),
        }
    }

    /// Emit the header with declarations in dependency order.
    pub fn emit(mut self) -> Result<String, LayoutError> {
        let header = self.header;
        let order = header.sorted_elements()?;

        self.emit_preamble();
        for element in order {
            match element.kind {
                ElementKind::Struct => {
                    let s = header.structs().get(element.index).ok_or_else(|| {
                        LayoutError::InternalInconsistency(format!(
                            "struct element '{}' has no struct at index {}",
                            element.name, element.index
                        ))
                    })?;
                    self.emit_struct(s);
                }
                ElementKind::TaggedUnion => {
                    let u = header.tagged_unions().get(element.index).ok_or_else(|| {
                        LayoutError::InternalInconsistency(format!(
                            "union element '{}' has no union at index {}",
                            element.name, element.index
                        ))
                    })?;
                    self.emit_tagged_union(u);
                }
            }
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        Ok(self.output)
    }

    fn emit_preamble(&mut self) {
        if self.header.pragma_once {
            self.output.push_str("#pragma once\n\n");
        }
        for include in &self.header.includes {
            self.output.push_str(&render_include(include));
        }
        if !self.header.includes.is_empty() {
            self.output.push_str("\n\n");
        }
    }

    fn emit_comment(&mut self, indent: &str, comment: Option<&String>) {
        if !self.config.emit_comments {
            return;
        }
        if let Some(comment) = comment {
            self.output.push_str(&format!("{indent}/* {comment} */\n"));
        }
    }

    fn emit_struct(&mut self, s: &Struct) {
        self.emit_comment("", s.comment.as_ref());
        if s.is_reflected {
            let mut args = s.specifiers.clone();
            args.extend(s.metadata.iter().map(|(k, v)| format!("{k}=\"{v}\"")));
            self.output.push_str(&format!("USTRUCT({})\n", args.join(", ")));
        }
        self.emit_struct_body(&s.name, s.is_reflected, None, &s.attributes);
    }

    fn emit_tagged_union(&mut self, u: &TaggedUnion) {
        let indent = self.config.indent.clone();
        let tag_enum = format!("E{}Tag", u.base_name);

        self.emit_comment("", u.comment.as_ref());
        if u.is_reflected {
            self.output.push_str("UENUM(BlueprintType)\n");
        }
        self.output.push_str(&format!("enum class {tag_enum} : uint8 {{\n"));
        for tag in &u.option_tags {
            self.output.push_str(&format!("{indent}{tag},\n"));
        }
        self.output.push_str("};\n\n");

        if u.is_reflected {
            self.output.push_str(&format!(
                "USTRUCT(BlueprintType, Category=\"{ROOT_CATEGORY}|{}\")\n",
                u.sub_category
            ));
        }
        let tag = Attribute::new("Tag", tag_enum);
        self.emit_struct_body(&u.name, u.is_reflected, Some(&tag), &u.variants);
    }

    fn emit_struct_body(
        &mut self,
        name: &str,
        is_reflected: bool,
        leading: Option<&Attribute>,
        attributes: &[Attribute],
    ) {
        let indent = self.config.indent.clone();
        if self.config.api_macro.is_empty() {
            self.output.push_str(&format!("struct {name} {{\n\n"));
        } else {
            self.output
                .push_str(&format!("struct {} {name} {{\n\n", self.config.api_macro));
        }
        if is_reflected {
            self.output.push_str(&format!("{indent}GENERATED_BODY();\n\n"));
        }
        for attribute in leading.into_iter().chain(attributes) {
            self.emit_comment(&indent, attribute.comment.as_ref());
            if is_reflected {
                self.output
                    .push_str(&format!("{indent}UPROPERTY(BlueprintReadWrite)\n"));
            }
            self.output
                .push_str(&format!("{indent}{} {};\n\n", attribute.ty, attribute.name));
        }
        self.output.push_str("};\n\n\n");
    }
}
