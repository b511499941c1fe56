//! SATS-JSON deserialization for `spacetime describe --json` output.
//!
//! Every type node is an object with a single key naming its kind
//! (`{"Product": {...}}`, `{"Ref": 3}`, `{"String": []}`). The walker checks
//! that shape at each level instead of deferring to serde's externally tagged
//! enums, so a failure can name the entry, element and enclosing type it
//! occurred in.

use serde_json::{Map, Value};

use super::error::{ParseError, ResultExt};
use super::types::{
    AlgebraicType, BuiltinKind, BuiltinType, ExportedType, ProductType, ProductTypeElement,
    RawModuleDef, ReducerDef, ScopedName, SumType, SumTypeVariant, TableDef, TypeRef, Typespace,
};

type Object = Map<String, Value>;

/// Keys accepted as the variant list of a Sum.
const SUM_VARIANT_KEYS: [&str; 3] = ["variants", "options", "branches"];

impl RawModuleDef {
    /// Parse a module definition from SATS-JSON text.
    ///
    /// Requires `typespace.types`, `tables` and `reducers`; `types`,
    /// `misc_exports` and `row_level_security` are optional. The number of
    /// exported types must match the number of typespace entries.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let root: Value =
            serde_json::from_str(json).map_err(|e| ParseError::MalformedJson(e.to_string()))?;
        let root = as_object(&root, "module definition")?;

        let typespace = parse_typespace(root).context_with(|| "failed to parse typespace".into())?;
        let types =
            parse_exported_types(root).context_with(|| "failed to parse exported types".into())?;

        if typespace.len() != types.len() {
            return Err(ParseError::TypeCountMismatch {
                typespace: typespace.len(),
                exported: types.len(),
            });
        }

        let tables = parse_tables(root).context_with(|| "failed to parse tables".into())?;
        let reducers = parse_reducers(root).context_with(|| "failed to parse reducers".into())?;

        tracing::debug!(
            "parsed module definition: {} types, {} tables, {} reducers",
            typespace.len(),
            tables.len(),
            reducers.len()
        );

        Ok(Self {
            typespace,
            tables,
            reducers,
            types,
            misc_exports: opaque_list(root, "misc_exports")?,
            row_level_security: opaque_list(root, "row_level_security")?,
        })
    }
}

/// Resolve a single-key algebraic type object such as `{"Ref": 0}`.
pub fn parse_algebraic_type(value: &Value) -> Result<AlgebraicType, ParseError> {
    let object = as_object(value, "algebraic_type")?;
    let Some((key, body)) = single_entry(object) else {
        return Err(ParseError::shape(
            "algebraic_type",
            "an object with a single type-kind key",
        ));
    };

    let ty = match key.as_str() {
        "Product" => AlgebraicType::Product(parse_product(body)?),
        "Sum" => AlgebraicType::Sum(parse_sum(body)?),
        "Ref" => AlgebraicType::Ref(parse_type_ref(body, "Ref")?),
        other => AlgebraicType::Builtin(parse_builtin(other)?),
    };
    Ok(ty)
}

// ============================================================================
// Typespace
// ============================================================================

fn parse_typespace(root: &Object) -> Result<Typespace, ParseError> {
    let typespace = object_field(root, "typespace")?;
    let entries = array_field(typespace, "types")?;

    let types = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_typespace_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Typespace { types })
}

fn parse_typespace_entry(index: usize, entry: &Value) -> Result<AlgebraicType, ParseError> {
    let Some(object) = entry.as_object() else {
        return Err(ParseError::MalformedTypeEntry {
            index,
            reason: "expected a JSON object".into(),
        });
    };
    let Some((key, body)) = single_entry(object) else {
        return Err(ParseError::MalformedTypeEntry {
            index,
            reason: format!(
                "expected single key for type kind, found {}",
                object.len()
            ),
        });
    };

    let ty = match key.as_str() {
        "Product" => parse_product(body).map(AlgebraicType::Product),
        "Sum" => parse_sum(body).map(AlgebraicType::Sum),
        "Ref" => {
            return Err(ParseError::MalformedTypeEntry {
                index,
                reason: "Ref entries are not supported at the top level of the typespace".into(),
            });
        }
        other => parse_builtin(other).map(AlgebraicType::Builtin),
    };
    ty.context_with(|| format!("typespace entry {index} ('{key}')"))
}

fn parse_product(body: &Value) -> Result<ProductType, ParseError> {
    let object = as_object(body, "Product")?;
    if object.len() != 1 {
        return Err(ParseError::shape(
            "Product",
            "an object with the single key 'elements'",
        ));
    }
    let items = array_field(object, "elements")?;

    let elements = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (name, algebraic_type) = parse_named_type(item)
                .context_with(|| format!("while parsing element {i} of Product"))?;
            Ok(ProductTypeElement {
                name,
                algebraic_type,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(ProductType { elements })
}

fn parse_sum(body: &Value) -> Result<SumType, ParseError> {
    let object = as_object(body, "Sum")?;
    let Some((key, list)) =
        single_entry(object).filter(|(key, _)| SUM_VARIANT_KEYS.contains(&key.as_str()))
    else {
        return Err(ParseError::shape(
            "Sum",
            "an object with a single 'variants', 'options' or 'branches' key",
        ));
    };
    let items = list
        .as_array()
        .ok_or_else(|| ParseError::shape(key.as_str(), "an array"))?;

    let variants = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let (name, algebraic_type) = parse_named_type(item)
                .context_with(|| format!("while parsing variant {i} of Sum"))?;
            Ok(SumTypeVariant {
                name,
                algebraic_type,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(SumType { variants })
}

/// `{ "name": <optional string>, "algebraic_type": <type> }`
fn parse_named_type(value: &Value) -> Result<(Option<String>, AlgebraicType), ParseError> {
    let object = as_object(value, "element")?;
    if object.len() != 2 {
        return Err(ParseError::shape(
            "element",
            "an object with exactly the fields 'name' and 'algebraic_type'",
        ));
    }

    let name = parse_optional_string(object_field(object, "name")?);
    let ty_value = field(object, "algebraic_type")?;
    let ty = parse_algebraic_type(ty_value).context_with(|| match &name {
        Some(name) => format!("failed to resolve algebraic type of '{name}'"),
        None => "failed to resolve algebraic type of anonymous element".into(),
    })?;

    Ok((name, ty))
}

fn parse_builtin(key: &str) -> Result<BuiltinType, ParseError> {
    let kind =
        BuiltinKind::from_name(key).ok_or_else(|| ParseError::UnknownBuiltin(key.to_string()))?;
    BuiltinType::scalar(kind).ok_or(ParseError::UnsupportedBuiltin(kind))
}

/// Wire optional string: `{"some": "x"}` or `{"none": []}`.
///
/// Any other shape is tolerated with a warning and read as absent.
fn parse_optional_string(object: &Object) -> Option<String> {
    if let Some(value) = object.get("some") {
        if let Some(s) = value.as_str() {
            return Some(s.to_string());
        }
        tracing::warn!("optional string field holds a non-string 'some' value: {value}");
        return None;
    }
    if !object.contains_key("none") {
        tracing::warn!("unexpected JSON object for optional string field");
    }
    None
}

// ============================================================================
// Exported types, tables, reducers
// ============================================================================

fn parse_exported_types(root: &Object) -> Result<Vec<ExportedType>, ParseError> {
    let Some(value) = root.get("types") else {
        return Ok(Vec::new());
    };
    let entries = value
        .as_array()
        .ok_or_else(|| ParseError::shape("types", "an array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_exported_type(entry).context_with(|| format!("exported type {i}")))
        .collect()
}

fn parse_exported_type(value: &Value) -> Result<ExportedType, ParseError> {
    let object = as_object(value, "exported type")?;
    let name_object = object_field(object, "name")?;

    let scope = match name_object.get("scope") {
        Some(scope) => string_list(scope, "scope")?,
        None => Vec::new(),
    };
    let name = string_field(name_object, "name")?;
    let ty = parse_type_ref(field(object, "ty")?, "ty")?;
    let custom_ordering = match object.get("custom_ordering") {
        Some(value) => value
            .as_bool()
            .ok_or_else(|| ParseError::shape("custom_ordering", "a boolean"))?,
        None => false,
    };

    Ok(ExportedType {
        name: ScopedName { scope, name },
        ty,
        custom_ordering,
    })
}

fn parse_tables(root: &Object) -> Result<Vec<TableDef>, ParseError> {
    array_field(root, "tables")?
        .iter()
        .enumerate()
        .map(|(i, table)| parse_table(table).context_with(|| format!("table {i}")))
        .collect()
}

fn parse_table(value: &Value) -> Result<TableDef, ParseError> {
    let object = as_object(value, "table")?;
    let name = string_field(object, "name")?;

    let product_type_ref = parse_type_ref(field(object, "product_type_ref")?, "product_type_ref")
        .context_with(|| format!("table '{name}'"))?;
    let primary_key = match object.get("primary_key") {
        Some(value) => primary_key_columns(value).context_with(|| format!("table '{name}'"))?,
        None => Vec::new(),
    };

    Ok(TableDef {
        name,
        product_type_ref,
        primary_key,
        table_type: object.get("table_type").and_then(unit_variant),
        table_access: object.get("table_access").and_then(unit_variant),
    })
}

/// Primary key columns, given by name or by column index.
fn primary_key_columns(value: &Value) -> Result<Vec<String>, ParseError> {
    let items = value
        .as_array()
        .ok_or_else(|| ParseError::shape("primary_key", "an array"))?;
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_u64() => Ok(n.to_string()),
            _ => Err(ParseError::shape(
                "primary_key",
                "an array of column names or indices",
            )),
        })
        .collect()
}

fn parse_reducers(root: &Object) -> Result<Vec<ReducerDef>, ParseError> {
    array_field(root, "reducers")?
        .iter()
        .enumerate()
        .map(|(i, reducer)| parse_reducer(reducer).context_with(|| format!("reducer {i}")))
        .collect()
}

fn parse_reducer(value: &Value) -> Result<ReducerDef, ParseError> {
    let object = as_object(value, "reducer")?;
    let name = string_field(object, "name")?;
    let params = parse_product(field(object, "params")?)
        .context_with(|| format!("invalid params for reducer '{name}'"))?;

    Ok(ReducerDef { name, params })
}

// ============================================================================
// Field access helpers
// ============================================================================

fn single_entry(object: &Object) -> Option<(&String, &Value)> {
    if object.len() != 1 {
        return None;
    }
    object.iter().next()
}

fn field<'a>(object: &'a Object, name: &str) -> Result<&'a Value, ParseError> {
    object
        .get(name)
        .ok_or_else(|| ParseError::MissingField(name.to_string()))
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::shape(what, "a JSON object"))
}

fn object_field<'a>(object: &'a Object, name: &str) -> Result<&'a Object, ParseError> {
    as_object(field(object, name)?, name)
}

fn array_field<'a>(object: &'a Object, name: &str) -> Result<&'a Vec<Value>, ParseError> {
    field(object, name)?
        .as_array()
        .ok_or_else(|| ParseError::shape(name, "an array"))
}

fn string_field(object: &Object, name: &str) -> Result<String, ParseError> {
    field(object, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ParseError::shape(name, "a string"))
}

fn string_list(value: &Value, name: &str) -> Result<Vec<String>, ParseError> {
    let items = value
        .as_array()
        .ok_or_else(|| ParseError::shape(name, "an array of strings"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ParseError::shape(name, "an array of strings"))
        })
        .collect()
}

fn parse_type_ref(value: &Value, name: &str) -> Result<TypeRef, ParseError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .map(TypeRef)
        .ok_or_else(|| ParseError::shape(name, "a non-negative type index"))
}

/// Payload-free tag object such as `{"User": []}`.
fn unit_variant(value: &Value) -> Option<String> {
    single_entry(value.as_object()?).map(|(key, _)| key.clone())
}

fn opaque_list(root: &Object, name: &str) -> Result<Vec<Value>, ParseError> {
    match root.get(name) {
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(ParseError::shape(name, "an array")),
        None => Ok(Vec::new()),
    }
}
