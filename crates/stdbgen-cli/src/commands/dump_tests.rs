use std::path::Path;

use super::dump::{DumpArgs, DumpFormat, execute};
use super::module_name_for;
use crate::test_utils::{CHAT_JSON, write_schema};

#[test]
fn layout_dump() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "chat.json", CHAT_JSON);

    let out = execute(&DumpArgs {
        schema,
        module: None,
        format: DumpFormat::Layout,
    })
    .unwrap();

    insta::assert_snapshot!(out, @r#"
    header ChatInlineTypes
    include "CoreMinimal.h"
    include "ChatInlineTypes.generated.h"
    struct FUInt256
      Value: FString
    struct FInt256
      Value: FString
    struct FProduct00
    union FSum00 (Sum00)
      tags: Some, None
      Some: FString  // some: String
      None: FProduct00

    header ChatExportedTypes
    include "CoreMinimal.h"
    include "ChatInlineTypes.h"
    include "ChatExportedTypes.generated.h"
    struct FUser
      Identity: FUInt256  // identity: U256
      Name: FSum00
      Online: bool  // online: Bool
    struct FMessage
      Sender: FUser  // sender: User
      Sent: int64  // sent: U64
      Text: FString  // text: String

    reducers ChatReducers
      SetName(Name: FString)  // set_name
      SendMessage(Text: FString)  // send_message
    "#);
}

#[test]
fn json_dump_is_the_parsed_model() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "chat.json", CHAT_JSON);

    let out = execute(&DumpArgs {
        schema,
        module: None,
        format: DumpFormat::Json,
    })
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["types"][0]["name"]["name"], "User");
    assert_eq!(value["types"][1]["ty"], 1);
    assert_eq!(value["reducers"][1]["name"], "send_message");
    assert_eq!(value["typespace"]["types"].as_array().unwrap().len(), 2);
}

#[test]
fn module_names_for_schema_paths() {
    assert_eq!(module_name_for(Path::new("schemas/chat.json"), None), "chat");
    assert_eq!(module_name_for(Path::new("chat.json"), Some("lobby")), "lobby");
    assert_eq!(module_name_for(Path::new("-"), None), "module");
}
