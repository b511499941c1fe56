//! SATS type definitions.

use std::fmt;

use serde::Serialize;

/// Index of an entry in a module's [`Typespace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeRef(pub u32);

impl TypeRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A SATS algebraic type.
///
/// Exactly one kind is active per value; the wire format encodes the kind as
/// the single key of a JSON object (`{"Product": {...}}`, `{"U32": []}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AlgebraicType {
    /// Scalar or aggregate builtin.
    Builtin(BuiltinType),
    /// Struct-like: all elements present.
    Product(ProductType),
    /// Tagged union: exactly one variant present.
    Sum(SumType),
    /// Reference to another typespace entry.
    Ref(TypeRef),
}

impl AlgebraicType {
    /// Wire dispatch key for this type.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Builtin(builtin) => builtin.kind().name(),
            Self::Product(_) => "Product",
            Self::Sum(_) => "Sum",
            Self::Ref(_) => "Ref",
        }
    }

    pub fn as_product(&self) -> Option<&ProductType> {
        match self {
            Self::Product(product) => Some(product),
            _ => None,
        }
    }
}

/// Builtin SATS types with their payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BuiltinType {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    I256,
    U256,
    F32,
    F64,
    String,
    Array(Box<AlgebraicType>),
    Map(Box<AlgebraicType>, Box<AlgebraicType>),
}

impl BuiltinType {
    /// Payload-free builtin for `kind`; `None` for `Array` and `Map`.
    pub fn scalar(kind: BuiltinKind) -> Option<Self> {
        let builtin = match kind {
            BuiltinKind::Bool => Self::Bool,
            BuiltinKind::I8 => Self::I8,
            BuiltinKind::U8 => Self::U8,
            BuiltinKind::I16 => Self::I16,
            BuiltinKind::U16 => Self::U16,
            BuiltinKind::I32 => Self::I32,
            BuiltinKind::U32 => Self::U32,
            BuiltinKind::I64 => Self::I64,
            BuiltinKind::U64 => Self::U64,
            BuiltinKind::I128 => Self::I128,
            BuiltinKind::U128 => Self::U128,
            BuiltinKind::I256 => Self::I256,
            BuiltinKind::U256 => Self::U256,
            BuiltinKind::F32 => Self::F32,
            BuiltinKind::F64 => Self::F64,
            BuiltinKind::String => Self::String,
            BuiltinKind::Array | BuiltinKind::Map => return None,
        };
        Some(builtin)
    }

    pub fn kind(&self) -> BuiltinKind {
        match self {
            Self::Bool => BuiltinKind::Bool,
            Self::I8 => BuiltinKind::I8,
            Self::U8 => BuiltinKind::U8,
            Self::I16 => BuiltinKind::I16,
            Self::U16 => BuiltinKind::U16,
            Self::I32 => BuiltinKind::I32,
            Self::U32 => BuiltinKind::U32,
            Self::I64 => BuiltinKind::I64,
            Self::U64 => BuiltinKind::U64,
            Self::I128 => BuiltinKind::I128,
            Self::U128 => BuiltinKind::U128,
            Self::I256 => BuiltinKind::I256,
            Self::U256 => BuiltinKind::U256,
            Self::F32 => BuiltinKind::F32,
            Self::F64 => BuiltinKind::F64,
            Self::String => BuiltinKind::String,
            Self::Array(_) => BuiltinKind::Array,
            Self::Map(..) => BuiltinKind::Map,
        }
    }
}

/// Payload-free builtin tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuiltinKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    I256,
    U256,
    F32,
    F64,
    String,
    Array,
    Map,
}

impl BuiltinKind {
    pub const ALL: [BuiltinKind; 18] = [
        Self::Bool,
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::I128,
        Self::U128,
        Self::I256,
        Self::U256,
        Self::F32,
        Self::F64,
        Self::String,
        Self::Array,
        Self::Map,
    ];

    /// SATS-JSON key for this builtin (case-sensitive).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I8 => "I8",
            Self::U8 => "U8",
            Self::I16 => "I16",
            Self::U16 => "U16",
            Self::I32 => "I32",
            Self::U32 => "U32",
            Self::I64 => "I64",
            Self::U64 => "U64",
            Self::I128 => "I128",
            Self::U128 => "U128",
            Self::I256 => "I256",
            Self::U256 => "U256",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::String => "String",
            Self::Array => "Array",
            Self::Map => "Map",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered sequence of fields; declaration order is emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductType {
    pub elements: Vec<ProductTypeElement>,
}

/// Product field. A missing name marks an anonymous field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTypeElement {
    pub name: Option<String>,
    pub algebraic_type: AlgebraicType,
}

impl ProductTypeElement {
    pub fn new(name: impl Into<String>, algebraic_type: AlgebraicType) -> Self {
        Self {
            name: Some(name.into()),
            algebraic_type,
        }
    }
}

/// Closed choice of variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SumType {
    pub variants: Vec<SumTypeVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SumTypeVariant {
    pub name: Option<String>,
    pub algebraic_type: AlgebraicType,
}

impl SumTypeVariant {
    pub fn new(name: impl Into<String>, algebraic_type: AlgebraicType) -> Self {
        Self {
            name: Some(name.into()),
            algebraic_type,
        }
    }
}

/// Index-addressed table of every type definition in a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Typespace {
    pub types: Vec<AlgebraicType>,
}

impl Typespace {
    pub fn get(&self, type_ref: TypeRef) -> Option<&AlgebraicType> {
        self.types.get(type_ref.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Name with optional namespace scope, e.g. `scope: ["game"], name: "Player"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScopedName {
    pub scope: Vec<String>,
    pub name: String,
}

impl ScopedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scope: Vec::new(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.scope {
            write!(f, "{segment}::")?;
        }
        f.write_str(&self.name)
    }
}

/// Typespace entry given a public name visible to client code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedType {
    pub name: ScopedName,
    pub ty: TypeRef,
    pub custom_ordering: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDef {
    pub name: String,
    pub product_type_ref: TypeRef,
    pub primary_key: Vec<String>,
    /// `User` or `System`, when present.
    pub table_type: Option<String>,
    /// `Public` or `Private`, when present.
    pub table_access: Option<String>,
}

/// Reducer with its inline parameter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReducerDef {
    pub name: String,
    pub params: ProductType,
}

/// Top-level unit produced by `spacetime describe --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawModuleDef {
    pub typespace: Typespace,
    pub tables: Vec<TableDef>,
    pub reducers: Vec<ReducerDef>,
    /// Exported type names, parallel to `typespace.types`.
    pub types: Vec<ExportedType>,
    pub misc_exports: Vec<serde_json::Value>,
    pub row_level_security: Vec<serde_json::Value>,
}
