//! Combined enum artifact: one record type plus one named instance per record.

use errgen_model::{RecordTable, to_upper_camel};

use crate::common::{Artifact, ArtifactKind, ENUM_ARTIFACT_NAME, RenderOptions, indent};
use crate::language::TargetLanguage;

/// Name of the Python namedtuple backing each enum member.
const PYTHON_RECORD_TYPE: &str = "ErrorRecord";

/// Render the combined enum artifact for `table`.
///
/// Fields follow the attribute order. Instances follow the table order.
pub fn render_enum(
    table: &RecordTable,
    language: TargetLanguage,
    options: &RenderOptions,
) -> Artifact {
    let fields: Vec<String> = table
        .attributes()
        .iter()
        .map(|attribute| language.field_name(attribute))
        .collect();
    let width = fields.len();
    let instances: Vec<(String, Vec<String>)> = table
        .iter()
        .map(|(record, row)| {
            let values = (0..width).map(|index| language.quote(row.value(index))).collect();
            (record.to_string(), values)
        })
        .collect();

    let mut out = options.package_header(language);
    let body = match language {
        TargetLanguage::Go => go_enum(&fields, &instances),
        TargetLanguage::Java => java_enum(table, &fields, &instances),
        TargetLanguage::Kotlin => kotlin_enum(&fields, &instances),
        TargetLanguage::Python => python_enum(&fields, &instances),
        TargetLanguage::JavaScript => javascript_enum(&fields, &instances),
    };
    out.push_str(&body);

    Artifact {
        name: ENUM_ARTIFACT_NAME.to_string(),
        language,
        kind: ArtifactKind::Enum,
        contents: out,
    }
}

fn go_enum(fields: &[String], instances: &[(String, Vec<String>)]) -> String {
    let pad = indent(TargetLanguage::Go);
    let mut out = format!("type {ENUM_ARTIFACT_NAME} struct {{\n");
    for field in fields {
        out.push_str(&format!("{pad}{field} string\n"));
    }
    out.push_str("}\n\nvar (\n");
    for (record, values) in instances {
        out.push_str(&format!(
            "{pad}{record} = {ENUM_ARTIFACT_NAME}{{{}}}\n",
            values.join(", ")
        ));
    }
    out.push_str(")\n");
    out
}

fn java_enum(
    table: &RecordTable,
    fields: &[String],
    instances: &[(String, Vec<String>)],
) -> String {
    let pad = indent(TargetLanguage::Java);
    let mut out = format!("public enum {ENUM_ARTIFACT_NAME} {{\n");
    if instances.is_empty() {
        out.push_str(&format!("{pad};\n"));
    }
    for (index, (record, values)) in instances.iter().enumerate() {
        let separator = if index + 1 < instances.len() { "," } else { ";" };
        out.push_str(&format!("{pad}{record}({}){separator}\n", values.join(", ")));
    }
    out.push('\n');

    for field in fields {
        out.push_str(&format!("{pad}private final String {field};\n"));
    }
    out.push('\n');

    let parameters: Vec<String> = fields.iter().map(|field| format!("String {field}")).collect();
    out.push_str(&format!(
        "{pad}{ENUM_ARTIFACT_NAME}({}) {{\n",
        parameters.join(", ")
    ));
    for field in fields {
        out.push_str(&format!("{pad}{pad}this.{field} = {field};\n"));
    }
    out.push_str(&format!("{pad}}}\n"));

    for (attribute, field) in table.attributes().iter().zip(fields) {
        out.push('\n');
        out.push_str(&format!(
            "{pad}public String get{}() {{\n",
            to_upper_camel(attribute)
        ));
        out.push_str(&format!("{pad}{pad}return {field};\n"));
        out.push_str(&format!("{pad}}}\n"));
    }
    out.push_str("}\n");
    out
}

fn kotlin_enum(fields: &[String], instances: &[(String, Vec<String>)]) -> String {
    let pad = indent(TargetLanguage::Kotlin);
    let parameters: Vec<String> = fields
        .iter()
        .map(|field| format!("val {field}: String"))
        .collect();
    let mut out = format!(
        "enum class {ENUM_ARTIFACT_NAME}({}) {{\n",
        parameters.join(", ")
    );
    for (index, (record, values)) in instances.iter().enumerate() {
        let separator = if index + 1 < instances.len() { "," } else { "" };
        out.push_str(&format!("{pad}{record}({}){separator}\n", values.join(", ")));
    }
    out.push_str("}\n");
    out
}

fn python_enum(fields: &[String], instances: &[(String, Vec<String>)]) -> String {
    let pad = indent(TargetLanguage::Python);
    let quoted_fields: Vec<String> = fields.iter().map(|field| format!("\"{field}\"")).collect();
    let mut out = String::from("from collections import namedtuple\nfrom enum import Enum\n\n");
    out.push_str(&format!(
        "{PYTHON_RECORD_TYPE} = namedtuple(\"{PYTHON_RECORD_TYPE}\", [{}])\n\n\n",
        quoted_fields.join(", ")
    ));
    out.push_str(&format!("class {ENUM_ARTIFACT_NAME}(Enum):\n"));
    for (record, values) in instances {
        out.push_str(&format!(
            "{pad}{record} = {PYTHON_RECORD_TYPE}({})\n",
            values.join(", ")
        ));
    }
    for field in fields {
        out.push('\n');
        out.push_str(&format!("{pad}@property\n"));
        out.push_str(&format!("{pad}def {field}(self):\n"));
        out.push_str(&format!("{pad}{pad}return self.value.{field}\n"));
    }
    out
}

fn javascript_enum(fields: &[String], instances: &[(String, Vec<String>)]) -> String {
    let pad = indent(TargetLanguage::JavaScript);
    let mut out = String::from("module.exports = Object.freeze({\n");
    for (record, values) in instances {
        let members: Vec<String> = fields
            .iter()
            .zip(values)
            .map(|(field, value)| format!("{field}: {value}"))
            .collect();
        out.push_str(&format!(
            "{pad}{record}: Object.freeze({{ {} }}),\n",
            members.join(", ")
        ));
    }
    out.push_str("});\n");
    out
}
