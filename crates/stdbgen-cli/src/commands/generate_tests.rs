use std::path::{Path, PathBuf};

use super::CommandError;
use super::generate::{GenerateArgs, execute};
use crate::sink::{DirectorySink, StdoutSink};
use crate::test_utils::{CHAT_JSON, write_schema};
use crate::transport::{SchemaFile, SchemaSource, TransportError};

fn args(database: &str) -> GenerateArgs {
    GenerateArgs {
        database: database.to_string(),
        schema: None,
        module: None,
        output: PathBuf::from("."),
        server: None,
        api_macro: None,
        no_comments: false,
        dry_run: false,
    }
}

/// Answers every fetch with fixed text.
struct FixedSource {
    json: &'static str,
    expected_server: Option<&'static str>,
}

impl SchemaSource for FixedSource {
    fn fetch_raw_module_def(
        &self,
        server: Option<&str>,
        _database: &str,
    ) -> Result<String, TransportError> {
        assert_eq!(server, self.expected_server);
        Ok(self.json.to_string())
    }
}

#[test]
fn writes_all_documents() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write_schema(dir.path(), "chat.json", CHAT_JSON);
    let out = dir.path().join("Source/ChatClient");

    let written = execute(
        &args("quickstart-chat"),
        &SchemaFile::new(schema),
        &mut DirectorySink::new(&out),
    )
    .unwrap();

    assert_eq!(
        written,
        [
            Path::new("Public/Generated/QuickstartChatInlineTypes.h"),
            Path::new("Public/Generated/QuickstartChatExportedTypes.h"),
            Path::new("Public/Generated/QuickstartChatReducers.h"),
            Path::new("Private/Generated/QuickstartChatReducers.cpp"),
        ]
    );
    for path in &written {
        assert!(out.join(path).is_file(), "missing {}", path.display());
    }

    let exported =
        std::fs::read_to_string(out.join("Public/Generated/QuickstartChatExportedTypes.h"))
            .unwrap();
    assert!(exported.contains("struct SPACETIMEDBRUNTIME_API FUser {"));
    assert!(exported.contains("    FUser Sender;\n"));
}

#[test]
fn module_flag_and_config_flags() {
    let mut args = args("db-1234");
    args.module = Some("chat".to_string());
    args.server = Some("local".to_string());
    args.api_macro = Some("CHAT_API".to_string());
    args.no_comments = true;

    let source = FixedSource {
        json: CHAT_JSON,
        expected_server: Some("local"),
    };
    let mut buf = Vec::new();
    execute(&args, &source, &mut StdoutSink::new(&mut buf)).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert!(out.contains("// ==> Public/Generated/ChatExportedTypes.h <=="));
    assert!(out.contains("struct CHAT_API FMessage {"));
    assert!(out.contains("class CHAT_API UChatReducers : public UBlueprintFunctionLibrary {"));
    assert!(!out.contains("/* sender: User */"));
}

#[test]
fn nothing_is_written_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    // One typespace entry with no exported name.
    let json = r#"{
        "typespace": { "types": [ { "Product": { "elements": [] } } ] },
        "tables": [],
        "reducers": []
    }"#;
    let schema = write_schema(dir.path(), "broken.json", json);
    let out = dir.path().join("out");

    let err = execute(
        &args("broken"),
        &SchemaFile::new(schema),
        &mut DirectorySink::new(&out),
    )
    .unwrap_err();

    assert!(matches!(err, CommandError::Generate(_)));
    assert!(!out.exists());
}

#[test]
fn transport_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = SchemaFile::new(dir.path().join("absent.json"));

    let err = execute(&args("chat"), &source, &mut StdoutSink::new(Vec::new())).unwrap_err();
    assert!(matches!(err, CommandError::Transport(TransportError::Io { .. })));
}
