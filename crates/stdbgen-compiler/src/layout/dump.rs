//! Plain-text rendering of a header, for inspection and tests.

use std::fmt::Write;

use super::LayoutError;
use super::ir::{ElementKind, Header};

impl Header {
    /// Renders the header in dependency order, one line per declaration and member.
    pub fn dump(&self) -> Result<String, LayoutError> {
        let mut out = String::new();
        writeln!(out, "header {}", self.file_name).ok();
        for include in &self.includes {
            if include.is_local {
                writeln!(out, "include \"{}\"", include.path).ok();
            } else {
                writeln!(out, "include <{}>", include.path).ok();
            }
        }

        for element in self.sorted_elements()? {
            let (members, tags) = match element.kind {
                ElementKind::Struct => {
                    let s = self.structs().get(element.index).ok_or_else(|| {
                        LayoutError::InternalInconsistency(format!(
                            "struct element '{}' has no struct at index {}",
                            element.name, element.index
                        ))
                    })?;
                    writeln!(out, "struct {}", s.name).ok();
                    (&s.attributes, None)
                }
                ElementKind::TaggedUnion => {
                    let u = self.tagged_unions().get(element.index).ok_or_else(|| {
                        LayoutError::InternalInconsistency(format!(
                            "union element '{}' has no union at index {}",
                            element.name, element.index
                        ))
                    })?;
                    writeln!(out, "union {} ({})", u.name, u.base_name).ok();
                    (&u.variants, Some(&u.option_tags))
                }
            };
            if let Some(tags) = tags {
                writeln!(out, "  tags: {}", tags.join(", ")).ok();
            }
            for member in members {
                match &member.comment {
                    Some(comment) => {
                        writeln!(out, "  {}: {}  // {comment}", member.name, member.ty).ok()
                    }
                    None => writeln!(out, "  {}: {}", member.name, member.ty).ok(),
                };
            }
        }
        Ok(out)
    }
}
