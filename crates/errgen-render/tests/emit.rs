//! Integration tests for artifact emission.

use std::fs;

use errgen_ingest::{build_table, parse_str};
use errgen_model::BuildOptions;
use errgen_render::{
    DirectorySink, EmissionSink, MemorySink, RenderOptions, TargetLanguage, emit_all, render_all,
};

fn artifacts(language: TargetLanguage) -> Vec<errgen_render::Artifact> {
    let table = build_table(
        parse_str("code|message\nNot Found|resource missing\n").expect("parse"),
        BuildOptions::default(),
    )
    .expect("build");
    render_all(&table, language, &RenderOptions::default())
}

#[test]
fn directory_sink_creates_language_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path().join("output");
    let mut sink = DirectorySink::new(&root);

    let emitted = emit_all(&mut sink, &artifacts(TargetLanguage::Go)).expect("emit");

    assert_eq!(emitted.len(), 3);
    for name in ["Code.go", "Message.go", "ErrorEnum.go"] {
        assert!(root.join("go").join(name).is_file(), "missing {name}");
    }
    let message = fs::read_to_string(root.join("go").join("Message.go")).expect("read");
    assert!(message.contains("\tNOT_FOUND = \"resource missing\"\n"));
    assert_eq!(emitted[1].location, root.join("go").join("Message.go"));
    assert_eq!(emitted[1].bytes, message.len());
}

#[test]
fn directory_sink_overwrites_existing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("python").join("ErrorEnum.py");
    fs::create_dir_all(target.parent().expect("parent")).expect("mkdir");
    fs::write(&target, "stale").expect("seed");

    let mut sink = DirectorySink::new(dir.path());
    emit_all(&mut sink, &artifacts(TargetLanguage::Python)).expect("emit");

    let contents = fs::read_to_string(&target).expect("read");
    assert!(contents.starts_with("from collections import namedtuple\n"));
}

#[test]
fn directory_sink_reports_unwritable_root() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("seed");

    let mut sink = DirectorySink::new(&blocker);
    let err = emit_all(&mut sink, &artifacts(TargetLanguage::Java)).unwrap_err();
    assert!(err.to_string().contains("Code.java"));
}

#[test]
fn memory_sink_keeps_every_language_apart() {
    let mut sink = MemorySink::new();
    emit_all(&mut sink, &artifacts(TargetLanguage::Kotlin)).expect("emit kotlin");
    emit_all(&mut sink, &artifacts(TargetLanguage::JavaScript)).expect("emit js");

    assert_eq!(sink.len(), 6);
    assert!(
        sink.get(TargetLanguage::Kotlin, "ErrorEnum.kt")
            .is_some_and(|text| text.starts_with("enum class ErrorEnum("))
    );
    assert!(sink.get(TargetLanguage::JavaScript, "Code.js").is_some());
    assert!(sink.get(TargetLanguage::Go, "Code.go").is_none());
}

#[test]
fn later_artifact_with_same_name_replaces_earlier() {
    let table = build_table(
        parse_str("code|code\nX|first|second\n").expect("parse"),
        BuildOptions::default(),
    )
    .expect("build");
    let mut sink = MemorySink::new();
    for artifact in render_all(&table, TargetLanguage::Go, &RenderOptions::default()) {
        sink.emit(&artifact).expect("emit");
    }

    assert_eq!(sink.len(), 2);
    let code = sink.get(TargetLanguage::Go, "Code.go").expect("Code.go");
    assert!(code.contains("X = \"first\""));
}
