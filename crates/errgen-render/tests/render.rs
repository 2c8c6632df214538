//! Integration tests for artifact rendering.

use errgen_ingest::{build_table, parse_str};
use errgen_model::{BuildOptions, RecordTable};
use errgen_render::{
    Artifact, ArtifactKind, DEFAULT_GO_PACKAGE, ENUM_ARTIFACT_NAME, RenderOptions, TargetLanguage,
    render_all, render_constants, render_enum,
};

const ERROR_CODES: &str = "code|message\n\
Not Found|resource missing\n\
server error|internal failure\n";

fn table_from(text: &str) -> RecordTable {
    build_table(parse_str(text).expect("parse"), BuildOptions::default()).expect("build")
}

/// Concatenate artifacts with a file-name banner for snapshot comparison.
fn bundle(artifacts: &[Artifact]) -> String {
    artifacts
        .iter()
        .map(|artifact| format!("==> {}\n{}", artifact.file_name(), artifact.contents))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bundle(language: TargetLanguage, options: &RenderOptions) -> String {
    bundle(&render_all(&table_from(ERROR_CODES), language, options))
}

#[test]
fn go_artifacts() {
    insta::assert_snapshot!(render_bundle(TargetLanguage::Go, &RenderOptions::default()));
}

#[test]
fn java_artifacts() {
    let options = RenderOptions::default().with_package(Some("com.example.errors".to_string()));
    insta::assert_snapshot!(render_bundle(TargetLanguage::Java, &options));
}

#[test]
fn kotlin_artifacts() {
    insta::assert_snapshot!(render_bundle(TargetLanguage::Kotlin, &RenderOptions::default()));
}

#[test]
fn python_artifacts() {
    insta::assert_snapshot!(render_bundle(TargetLanguage::Python, &RenderOptions::default()));
}

#[test]
fn javascript_artifacts() {
    insta::assert_snapshot!(render_bundle(
        TargetLanguage::JavaScript,
        &RenderOptions::default()
    ));
}

#[test]
fn render_all_emits_one_artifact_per_attribute_plus_enum() {
    let table = table_from(ERROR_CODES);
    for language in TargetLanguage::ALL {
        let artifacts = render_all(&table, language, &RenderOptions::default());
        let names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Code", "Message", ENUM_ARTIFACT_NAME]);
        assert!(artifacts.iter().all(|a| a.language == language));
    }
}

#[test]
fn message_constants_hold_exactly_the_message_column() {
    let table = table_from(ERROR_CODES);
    let artifact = render_constants(&table, 1, TargetLanguage::Go, &RenderOptions::default())
        .expect("message column");

    let entries: Vec<&str> = artifact
        .contents
        .lines()
        .filter(|line| line.starts_with('\t'))
        .map(str::trim)
        .collect();
    assert_eq!(
        entries,
        vec![
            "NOT_FOUND = \"resource missing\"",
            "SERVER_ERROR = \"internal failure\"",
        ]
    );
}

#[test]
fn enum_fields_follow_attribute_order() {
    let table = table_from("zulu|alpha|mike\nrecord|1|2|3\n");
    let artifact = render_enum(&table, TargetLanguage::Kotlin, &RenderOptions::default());
    assert!(artifact.contents.starts_with(
        "enum class ErrorEnum(val zulu: String, val alpha: String, val mike: String) {\n"
    ));
    assert!(artifact.contents.contains("    RECORD(\"record\", \"1\", \"2\")\n"));
}

#[test]
fn both_renderings_agree_on_record_values() {
    let table = table_from(ERROR_CODES);
    let enum_artifact = render_enum(&table, TargetLanguage::JavaScript, &RenderOptions::default());
    for column in 0..table.attributes().len() {
        let constants =
            render_constants(&table, column, TargetLanguage::JavaScript, &RenderOptions::default())
                .expect("column in range");
        for (record, value) in table.column(column) {
            let literal = TargetLanguage::JavaScript.quote(value);
            assert!(constants.contents.contains(&format!("{record}: {literal},")));
            assert!(enum_artifact.contents.contains(&format!(": {literal}")));
        }
    }
}

#[test]
fn records_render_in_input_order() {
    let table = table_from("k|v\nzeta|1\nalpha|2\nmid|3\n");
    let artifact = render_enum(&table, TargetLanguage::Python, &RenderOptions::default());
    let zeta = artifact.contents.find("ZETA =").expect("ZETA");
    let alpha = artifact.contents.find("ALPHA =").expect("ALPHA");
    let mid = artifact.contents.find("MID =").expect("MID");
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn rendering_is_deterministic() {
    let first = render_bundle(TargetLanguage::Java, &RenderOptions::default());
    let second = render_bundle(TargetLanguage::Java, &RenderOptions::default());
    assert_eq!(first, second);
}

#[test]
fn duplicate_attributes_produce_colliding_names() {
    let table = table_from("code|code\nX|1\n");
    let artifacts = render_all(&table, TargetLanguage::Go, &RenderOptions::default());
    let constant_names: Vec<(&str, usize)> = artifacts
        .iter()
        .filter_map(|a| match &a.kind {
            ArtifactKind::Constants { column, .. } => Some((a.name.as_str(), *column)),
            ArtifactKind::Enum => None,
        })
        .collect();
    assert_eq!(constant_names, vec![("Code", 0), ("Code", 1)]);
}

#[test]
fn values_with_quotes_stay_inside_literals() {
    let table = table_from("code|message\nquoted|say \"no\"\n");
    let artifact = render_constants(&table, 1, TargetLanguage::Java, &RenderOptions::default())
        .expect("message column");
    assert!(
        artifact
            .contents
            .contains("    String QUOTED = \"say \\\"no\\\"\";\n")
    );
}

#[test]
fn go_artifacts_declare_the_same_package() {
    let artifacts = render_all(
        &table_from(ERROR_CODES),
        TargetLanguage::Go,
        &RenderOptions::default(),
    );
    let expected = format!("package {DEFAULT_GO_PACKAGE}\n");
    assert!(
        artifacts
            .iter()
            .all(|artifact| artifact.contents.starts_with(&expected))
    );
}
