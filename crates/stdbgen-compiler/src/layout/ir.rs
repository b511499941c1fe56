//! Header IR: declarations laid out for a backend.
//!
//! A [`Header`] owns its structs and tagged unions in append-only arenas.
//! [`HeaderElement`]s index into those arenas and name their dependencies by
//! type name only; dependencies are resolved by lookup when the header is
//! sorted, never by reference.

use indexmap::IndexMap;
use serde::Serialize;

/// Named, typed member of a struct or variant of a tagged union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    /// Target type name.
    pub ty: String,
    pub comment: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub is_reflected: bool,
    pub specifiers: Vec<String>,
    /// Ordered `key = value` reflection metadata, e.g. `Category`.
    pub metadata: IndexMap<String, String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedUnion {
    /// Generated base name, e.g. `Sum00`.
    pub base_name: String,
    /// Target type name derived from the base name.
    pub name: String,
    pub variants: Vec<Attribute>,
    /// One discriminant tag per variant, in variant order.
    pub option_tags: Vec<String>,
    pub is_reflected: bool,
    pub sub_category: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    Struct,
    TaggedUnion,
}

/// Node of the declaration dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderElement {
    pub kind: ElementKind,
    /// Index into the struct or tagged-union arena, per `kind`.
    pub index: usize,
    pub name: String,
    /// Type names this element's members refer to.
    pub depends: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Include {
    pub path: String,
    /// Quoted (`"path"`) rather than angle-bracket (`<path>`) include.
    pub is_local: bool,
}

impl Include {
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_local: true,
        }
    }
}

/// One emitted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub file_name: String,
    pub pragma_once: bool,
    pub includes: Vec<Include>,
    structs: Vec<Struct>,
    tagged_unions: Vec<TaggedUnion>,
    elements: Vec<HeaderElement>,
}

impl Header {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            pragma_once: true,
            includes: Vec::new(),
            structs: Vec::new(),
            tagged_unions: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn add_struct(&mut self, s: Struct) {
        self.elements.push(HeaderElement {
            kind: ElementKind::Struct,
            index: self.structs.len(),
            name: s.name.clone(),
            depends: s.attributes.iter().map(|a| a.ty.clone()).collect(),
        });
        self.structs.push(s);
    }

    pub fn add_tagged_union(&mut self, union: TaggedUnion) {
        self.elements.push(HeaderElement {
            kind: ElementKind::TaggedUnion,
            index: self.tagged_unions.len(),
            name: union.name.clone(),
            depends: union.variants.iter().map(|a| a.ty.clone()).collect(),
        });
        self.tagged_unions.push(union);
    }

    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    pub fn tagged_unions(&self) -> &[TaggedUnion] {
        &self.tagged_unions
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[HeaderElement] {
        &self.elements
    }

    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_tagged_union(&self, name: &str) -> Option<&TaggedUnion> {
        self.tagged_unions.iter().find(|u| u.name == name)
    }
}
