use std::path::Path;

use stdbgen_compiler::Artifact;

use super::sink::{ArtifactSink, DirectorySink, StdoutSink, write_all};

fn artifacts() -> Vec<Artifact> {
    vec![
        Artifact::new("Public/Generated/ChatInlineTypes.h", "#pragma once\n"),
        Artifact::new("Private/Generated/ChatReducers.cpp", "// reducers"),
    ]
}

#[test]
fn directory_sink_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());

    write_all(&mut sink, &artifacts()).unwrap();

    let header = dir.path().join("Public/Generated/ChatInlineTypes.h");
    let source = dir.path().join("Private/Generated/ChatReducers.cpp");
    assert_eq!(std::fs::read_to_string(header).unwrap(), "#pragma once\n");
    assert_eq!(std::fs::read_to_string(source).unwrap(), "// reducers");
}

#[test]
fn directory_sink_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path());
    let path = Path::new("Public/Generated/A.h");

    sink.write_artifact(path, "old").unwrap();
    sink.write_artifact(path, "new").unwrap();

    assert_eq!(std::fs::read_to_string(dir.path().join(path)).unwrap(), "new");
}

#[test]
fn write_failure_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    // A file where a directory is expected.
    std::fs::write(dir.path().join("Public"), "").unwrap();
    let mut sink = DirectorySink::new(dir.path());

    let err = write_all(&mut sink, &artifacts()).unwrap_err();
    assert_eq!(err.path, Path::new("Public/Generated/ChatInlineTypes.h"));
    assert!(
        err.to_string()
            .starts_with("failed to write 'Public/Generated/ChatInlineTypes.h': ")
    );
    assert!(!dir.path().join("Private").exists());
}

#[test]
fn stdout_sink_prints_banners() {
    let mut buf = Vec::new();
    write_all(&mut StdoutSink::new(&mut buf), &artifacts()).unwrap();
    let out = String::from_utf8(buf).unwrap();

    insta::assert_snapshot!(out, @r"
    // ==> Public/Generated/ChatInlineTypes.h <==
    #pragma once

    // ==> Private/Generated/ChatReducers.cpp <==
    // reducers
    ");
}
