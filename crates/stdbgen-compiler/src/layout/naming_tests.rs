use stdbgen_core::{ExportedType, ScopedName, TypeRef};

use super::{ExportedNames, LayoutError, ModuleNames, NameAllocator, make_struct_name};
use crate::test_utils::{exported, unreal};

#[test]
fn module_names() {
    let names = ModuleNames::new("quickstart-chat");
    assert_eq!(names.pascal, "QuickstartChat");
    assert_eq!(names.exported, "QuickstartChatExportedTypes");
    assert_eq!(names.inline, "QuickstartChatInlineTypes");
    assert_eq!(names.reducers, "QuickstartChatReducers");
    assert_eq!(names.module, "quickstart-chat");
}

#[test]
fn struct_names() {
    let names = ModuleNames::new("arena");
    let backend = unreal();

    assert_eq!(make_struct_name("player", &names, &backend), "FPlayer");
    assert_eq!(make_struct_name("chat_message", &names, &backend), "FChatMessage");
    assert_eq!(make_struct_name("Transform", &names, &backend), "FTransformArena");
    assert_eq!(make_struct_name("string", &names, &backend), "FStringArena");
}

#[test]
fn allocator_counts_independently() {
    let backend = unreal();
    let mut allocator = NameAllocator::new();

    assert_eq!(allocator.product_name(&backend), "FProduct00");
    assert_eq!(
        allocator.sum_names(&backend),
        ("Sum00".to_string(), "FSum00".to_string())
    );
    assert_eq!(allocator.product_name(&backend), "FProduct01");
    assert_eq!(allocator.anonymous_field(), "AnonymousField_0");
    assert_eq!(allocator.anonymous_field(), "AnonymousField_1");
    assert!(allocator.is_used("FProduct01"));
}

#[test]
fn allocator_skips_reserved_names() {
    let backend = unreal();
    let mut allocator = NameAllocator::new();
    assert!(allocator.reserve("FProduct00"));
    assert!(!allocator.reserve("FProduct00"));
    allocator.reserve("FSum00");
    allocator.reserve("FSum01");

    assert_eq!(allocator.product_name(&backend), "FProduct01");
    assert_eq!(
        allocator.sum_names(&backend),
        ("Sum02".to_string(), "FSum02".to_string())
    );
}

#[test]
fn three_digit_counters() {
    let backend = unreal();
    let mut allocator = NameAllocator::new();
    for _ in 0..100 {
        allocator.product_name(&backend);
    }
    assert_eq!(allocator.product_name(&backend), "FProduct100");
}

#[test]
fn exported_names_resolve_by_index() {
    let names = ModuleNames::new("m");
    let mut exports = exported(&["Point", "Circle"]);
    exports[0].ty = TypeRef(4);
    let mut allocator = NameAllocator::new();
    let resolved = ExportedNames::new(&exports, &names, &unreal(), &mut allocator);

    assert_eq!(resolved.resolve(TypeRef(4)).unwrap().type_name, "FPoint");
    assert_eq!(resolved.resolve(TypeRef(1)).unwrap().raw, "Circle");
    assert_eq!(
        resolved.resolve(TypeRef(0)),
        Err(LayoutError::DanglingRef(TypeRef(0)))
    );
    assert_eq!(resolved.struct_name(0), Some("FPoint"));
    assert_eq!(resolved.iter().collect::<Vec<_>>(), ["FPoint", "FCircle"]);
    assert!(allocator.is_used("FCircle"));
}

#[test]
fn colliding_exports_fold_in_scope() {
    let names = ModuleNames::new("m");
    let exports = vec![
        ExportedType {
            name: ScopedName {
                scope: vec!["x".to_string()],
                name: "Item".to_string(),
            },
            ty: TypeRef(0),
            custom_ordering: true,
        },
        ExportedType {
            name: ScopedName {
                scope: vec!["y".to_string()],
                name: "Item".to_string(),
            },
            ty: TypeRef(1),
            custom_ordering: true,
        },
    ];
    let mut allocator = NameAllocator::new();
    let resolved = ExportedNames::new(&exports, &names, &unreal(), &mut allocator);

    assert_eq!(resolved.iter().collect::<Vec<_>>(), ["FItem", "FYItem"]);
    assert_eq!(resolved.resolve(TypeRef(1)).unwrap().type_name, "FYItem");
    assert_eq!(resolved.resolve(TypeRef(1)).unwrap().raw, "Item");
}

#[test]
fn colliding_unscoped_exports_get_suffixes() {
    let names = ModuleNames::new("m");
    let mut allocator = NameAllocator::new();
    let resolved = ExportedNames::new(
        &exported(&["chat_message", "ChatMessage", "chatMessage"]),
        &names,
        &unreal(),
        &mut allocator,
    );

    assert_eq!(
        resolved.iter().collect::<Vec<_>>(),
        ["FChatMessage", "FChatMessage2", "FChatMessage3"]
    );
}

#[test]
fn exports_skip_names_taken_beforehand() {
    let names = ModuleNames::new("m");
    let mut allocator = NameAllocator::new();
    allocator.reserve("FScore");
    let resolved = ExportedNames::new(&exported(&["score"]), &names, &unreal(), &mut allocator);

    assert_eq!(resolved.struct_name(0), Some("FScore2"));
}
