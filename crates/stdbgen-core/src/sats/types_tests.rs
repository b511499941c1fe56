use super::*;

#[test]
fn builtin_names_round_trip() {
    for kind in BuiltinKind::ALL {
        assert_eq!(BuiltinKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(BuiltinKind::from_name("u32"), None);
    assert_eq!(BuiltinKind::from_name("Ref"), None);
}

#[test]
fn scalar_builtins_have_no_payload() {
    assert_eq!(BuiltinType::scalar(BuiltinKind::U256), Some(BuiltinType::U256));
    assert_eq!(BuiltinType::scalar(BuiltinKind::Array), None);
    assert_eq!(BuiltinType::scalar(BuiltinKind::Map), None);

    let scalars: Vec<_> = BuiltinKind::ALL
        .into_iter()
        .filter_map(BuiltinType::scalar)
        .collect();
    assert_eq!(scalars.len(), BuiltinKind::ALL.len() - 2);
    for builtin in scalars {
        assert_eq!(BuiltinType::scalar(builtin.kind()), Some(builtin.clone()));
    }
}

#[test]
fn aggregate_kind() {
    let array = BuiltinType::Array(Box::new(AlgebraicType::Builtin(BuiltinType::U8)));
    assert_eq!(array.kind(), BuiltinKind::Array);
    assert_eq!(AlgebraicType::Builtin(array).tag(), "Array");
}

#[test]
fn algebraic_type_tags() {
    assert_eq!(AlgebraicType::Product(ProductType::default()).tag(), "Product");
    assert_eq!(AlgebraicType::Sum(SumType::default()).tag(), "Sum");
    assert_eq!(AlgebraicType::Ref(TypeRef(3)).tag(), "Ref");
    assert_eq!(AlgebraicType::Builtin(BuiltinType::I128).tag(), "I128");
}

#[test]
fn typespace_lookup() {
    let typespace = Typespace {
        types: vec![AlgebraicType::Builtin(BuiltinType::Bool)],
    };
    assert!(typespace.get(TypeRef(0)).is_some());
    assert!(typespace.get(TypeRef(1)).is_none());
}

#[test]
fn scoped_name_display() {
    assert_eq!(ScopedName::new("Player").to_string(), "Player");
    let scoped = ScopedName {
        scope: vec!["game".into()],
        name: "Player".into(),
    };
    assert_eq!(scoped.to_string(), "game::Player");
}
