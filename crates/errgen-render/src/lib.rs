//! errgen rendering library.
//!
//! Turns a [`RecordTable`] into source files for a [`TargetLanguage`]:
//!
//! - **Constants**: one artifact per attribute, mapping each record name to
//!   that attribute's value
//! - **Enum**: one artifact with a record type whose fields are the attributes
//!   and one named instance per record
//!
//! Rendering is pure. Artifacts are written afterwards through an
//! [`EmissionSink`].

mod common;
mod constants;
mod emit;
mod enums;
mod language;

use errgen_model::RecordTable;

pub use common::{
    Artifact, ArtifactKind, DEFAULT_GO_PACKAGE, ENUM_ARTIFACT_NAME, RenderOptions,
};
pub use constants::render_constants;
pub use emit::{DirectorySink, EmissionSink, EmittedArtifact, MemorySink, emit_all};
pub use enums::render_enum;
pub use language::TargetLanguage;

/// Render every artifact for one language: one constant table per attribute
/// in attribute order, then the combined enum.
pub fn render_all(
    table: &RecordTable,
    language: TargetLanguage,
    options: &RenderOptions,
) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = (0..table.attributes().len())
        .filter_map(|column| render_constants(table, column, language, options))
        .collect();
    artifacts.push(render_enum(table, language, options));
    artifacts
}
