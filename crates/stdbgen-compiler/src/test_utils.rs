//! Test fixtures for building typespaces by hand.

use stdbgen_core::{
    AlgebraicType, BuiltinType, ExportedType, ProductType, ProductTypeElement, ReducerDef,
    ScopedName, SumType, SumTypeVariant, TypeRef, Typespace,
};

use crate::backend::UnrealBackend;

pub fn builtin(builtin: BuiltinType) -> AlgebraicType {
    AlgebraicType::Builtin(builtin)
}

pub fn type_ref(index: u32) -> AlgebraicType {
    AlgebraicType::Ref(TypeRef(index))
}

/// Product with named elements; an empty name makes the element anonymous.
pub fn product(elements: Vec<(&str, AlgebraicType)>) -> AlgebraicType {
    AlgebraicType::Product(product_type(elements))
}

pub fn product_type(elements: Vec<(&str, AlgebraicType)>) -> ProductType {
    ProductType {
        elements: elements
            .into_iter()
            .map(|(name, ty)| ProductTypeElement {
                name: (!name.is_empty()).then(|| name.to_string()),
                algebraic_type: ty,
            })
            .collect(),
    }
}

pub fn sum(variants: Vec<(&str, AlgebraicType)>) -> AlgebraicType {
    AlgebraicType::Sum(SumType {
        variants: variants
            .into_iter()
            .map(|(name, ty)| SumTypeVariant {
                name: (!name.is_empty()).then(|| name.to_string()),
                algebraic_type: ty,
            })
            .collect(),
    })
}

/// Exports `names[i]` as typespace entry `i`.
pub fn exported(names: &[&str]) -> Vec<ExportedType> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| ExportedType {
            name: ScopedName::new(*name),
            ty: TypeRef(i as u32),
            custom_ordering: true,
        })
        .collect()
}

pub fn typespace(types: Vec<AlgebraicType>) -> Typespace {
    Typespace { types }
}

pub fn reducer(name: &str, params: Vec<(&str, AlgebraicType)>) -> ReducerDef {
    ReducerDef {
        name: name.to_string(),
        params: product_type(params),
    }
}

pub fn unreal() -> UnrealBackend {
    UnrealBackend::default()
}

/// `Point { x: F32, y: F32 }` and `Circle { center: Point, radius: F32 }`.
pub fn point_and_circle() -> (Typespace, Vec<ExportedType>) {
    let types = typespace(vec![
        product(vec![
            ("x", builtin(BuiltinType::F32)),
            ("y", builtin(BuiltinType::F32)),
        ]),
        product(vec![
            ("center", type_ref(0)),
            ("radius", builtin(BuiltinType::F32)),
        ]),
    ]);
    (types, exported(&["Point", "Circle"]))
}

/// SATS-JSON for [`point_and_circle`] plus a `send_message(text: String)` reducer.
pub const POINT_CIRCLE_JSON: &str = r#"{
    "typespace": {
        "types": [
            { "Product": { "elements": [
                { "name": { "some": "x" }, "algebraic_type": { "F32": [] } },
                { "name": { "some": "y" }, "algebraic_type": { "F32": [] } }
            ]}},
            { "Product": { "elements": [
                { "name": { "some": "center" }, "algebraic_type": { "Ref": 0 } },
                { "name": { "some": "radius" }, "algebraic_type": { "F32": [] } }
            ]}}
        ]
    },
    "tables": [],
    "reducers": [
        {
            "name": "send_message",
            "params": { "elements": [
                { "name": { "some": "text" }, "algebraic_type": { "String": [] } }
            ]},
            "lifecycle": { "none": [] }
        }
    ],
    "types": [
        { "name": { "scope": [], "name": "Point" }, "ty": 0, "custom_ordering": true },
        { "name": { "scope": [], "name": "Circle" }, "ty": 1, "custom_ordering": true }
    ],
    "misc_exports": [],
    "row_level_security": []
}"#;
