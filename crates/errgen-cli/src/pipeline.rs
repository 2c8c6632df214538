//! Generation pipeline with explicit stages.
//!
//! 1. **Ingest**: read the `|`-delimited input and build the record table
//! 2. **Render**: produce every artifact for every requested language
//! 3. **Output**: hand the artifacts to an emission sink
//!
//! All artifacts are rendered before the first one is written, so a failed
//! ingest leaves the output directory untouched.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use errgen_ingest::{load_table, load_table_from_reader};
use errgen_model::{BuildOptions, RecordTable};
use errgen_render::{
    Artifact, DirectorySink, EmissionSink, EmittedArtifact, MemorySink, RenderOptions,
    TargetLanguage, emit_all, render_all,
};

use crate::config::{GenerateConfig, InputSource};
use crate::types::{GenerateResult, LanguageSummary};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the input and build its record table.
pub fn ingest(input: &InputSource, options: BuildOptions) -> Result<RecordTable> {
    let span = info_span!("ingest", source = %input.display_name());
    let _guard = span.enter();
    let start = Instant::now();

    let table = match input {
        InputSource::File(path) => load_table(path, options),
        InputSource::Stdin => {
            load_table_from_reader(io::stdin().lock(), &input.display_name(), options)
        }
    }
    .with_context(|| format!("load records from {}", input.display_name()))?;

    info!(
        attributes = table.attributes().len(),
        records = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Render
// ============================================================================

/// Artifacts for one language.
#[derive(Debug)]
pub struct RenderedLanguage {
    pub language: TargetLanguage,
    pub artifacts: Vec<Artifact>,
}

/// Render every artifact for each language, in the order given.
pub fn render(
    table: &RecordTable,
    languages: &[TargetLanguage],
    options: &RenderOptions,
) -> Vec<RenderedLanguage> {
    let span = info_span!("render", languages = languages.len());
    let _guard = span.enter();
    let start = Instant::now();

    let rendered: Vec<RenderedLanguage> = languages
        .iter()
        .map(|&language| RenderedLanguage {
            language,
            artifacts: render_all(table, language, options),
        })
        .collect();

    info!(
        artifacts = rendered.iter().map(|r| r.artifacts.len()).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "render complete"
    );
    rendered
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Emit rendered artifacts through `sink`.
pub fn output<S: EmissionSink + ?Sized>(
    sink: &mut S,
    rendered: &[RenderedLanguage],
) -> Result<Vec<LanguageSummary>> {
    let span = info_span!("output");
    let _guard = span.enter();
    let start = Instant::now();

    let mut summaries = Vec::with_capacity(rendered.len());
    for entry in rendered {
        let artifacts: Vec<EmittedArtifact> = emit_all(sink, &entry.artifacts)
            .with_context(|| format!("emit {} artifacts", entry.language.label()))?;
        summaries.push(LanguageSummary {
            language: entry.language,
            artifacts,
        });
    }

    info!(
        files = summaries.iter().map(|s| s.artifacts.len()).sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(summaries)
}

/// Run every stage for one resolved configuration.
///
/// Dry runs emit into a [`MemorySink`] and write nothing.
pub fn run(config: &GenerateConfig) -> Result<GenerateResult> {
    let source_name = config.input.display_name();
    let span = info_span!("generate", source = %source_name, dry_run = config.dry_run);
    let _guard = span.enter();

    let table = ingest(&config.input, config.build)?;
    let rendered = render(&table, &config.languages, &config.render);
    let languages = if config.dry_run {
        output(&mut MemorySink::new(), &rendered)?
    } else {
        output(&mut DirectorySink::new(&config.output_dir), &rendered)?
    };

    Ok(GenerateResult {
        source_name,
        output_dir: config.output_dir.clone(),
        attributes: table.attributes().len(),
        records: table.len(),
        languages,
        dry_run: config.dry_run,
    })
}
