//! Per-attribute constant tables.
//!
//! One artifact per attribute, holding one constant per record that maps the
//! record name to the record's value for that attribute.

use errgen_model::{RecordTable, to_upper_camel};

use crate::common::{Artifact, ArtifactKind, RenderOptions, indent};
use crate::language::TargetLanguage;

/// Render the constant table for the attribute at `column`.
///
/// Returns `None` when `column` is outside the attribute list.
pub fn render_constants(
    table: &RecordTable,
    column: usize,
    language: TargetLanguage,
    options: &RenderOptions,
) -> Option<Artifact> {
    let attribute = table.attributes().get(column)?;
    let name = to_upper_camel(attribute);
    let pad = indent(language);

    let mut out = options.package_header(language);
    match language {
        TargetLanguage::Go => out.push_str("const (\n"),
        TargetLanguage::Java => out.push_str(&format!("public interface {name} {{\n")),
        TargetLanguage::Kotlin => out.push_str(&format!("object {name} {{\n")),
        TargetLanguage::Python => out.push_str(&format!("class {name}:\n")),
        TargetLanguage::JavaScript => out.push_str("module.exports = Object.freeze({\n"),
    }

    for (record, value) in table.column(column) {
        let literal = language.quote(value);
        let line = match language {
            TargetLanguage::Go | TargetLanguage::Python => format!("{record} = {literal}"),
            TargetLanguage::Java => format!("String {record} = {literal};"),
            TargetLanguage::Kotlin => format!("const val {record} = {literal}"),
            TargetLanguage::JavaScript => format!("{record}: {literal},"),
        };
        out.push_str(pad);
        out.push_str(&line);
        out.push('\n');
    }

    match language {
        TargetLanguage::Go => out.push_str(")\n"),
        TargetLanguage::Java | TargetLanguage::Kotlin => out.push_str("}\n"),
        TargetLanguage::Python => {
            if table.is_empty() {
                out.push_str(pad);
                out.push_str("pass\n");
            }
        }
        TargetLanguage::JavaScript => out.push_str("});\n"),
    }

    Some(Artifact {
        name,
        language,
        kind: ArtifactKind::Constants {
            attribute: attribute.to_string(),
            column,
        },
        contents: out,
    })
}
