use super::CommandError;
use super::check::{CheckArgs, execute};
use crate::test_utils::{CHAT_JSON, write_schema};

#[test]
fn valid_schema_passes() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "chat.json", CHAT_JSON);

    execute(&CheckArgs {
        schema,
        module: None,
    })
    .unwrap();
}

#[test]
fn dangling_ref_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"{
        "typespace": { "types": [
            { "Product": { "elements": [
                { "name": { "some": "owner" }, "algebraic_type": { "Ref": 5 } }
            ]}}
        ]},
        "tables": [],
        "reducers": [],
        "types": [
            { "name": { "scope": [], "name": "Pet" }, "ty": 0, "custom_ordering": true }
        ]
    }"#;
    let schema = write_schema(dir.path(), "pets.json", json);

    let err = execute(&CheckArgs {
        schema,
        module: None,
    })
    .unwrap_err();

    assert!(matches!(err, CommandError::Generate(_)));
    assert_eq!(
        err.to_string(),
        "layout failed: in exported type 'Pet': in field 'owner' of 'FPet': \
         type reference 5 does not resolve to an exported type"
    );
}

#[test]
fn malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "bad.json", "{ \"typespace\": ");

    let err = execute(&CheckArgs {
        schema,
        module: Some("bad".to_string()),
    })
    .unwrap_err();
    assert!(matches!(err, CommandError::Generate(_)));
}
