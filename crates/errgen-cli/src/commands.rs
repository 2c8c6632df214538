use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::debug;

use errgen_cli::config::{ConfigFile, GenerateConfig, InputSource};
use errgen_cli::pipeline;
use errgen_cli::types::GenerateResult;
use errgen_render::TargetLanguage;

use crate::cli::GenerateArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_languages() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Language"),
        header_cell("Id"),
        header_cell("Extension"),
        header_cell("Field name"),
    ]);
    apply_table_style(&mut table);
    for language in TargetLanguage::ALL {
        table.add_row(vec![
            language.label().to_string(),
            language.id().to_string(),
            format!(".{}", language.extension()),
            language.field_name("error code"),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let config = GenerateConfig::resolve(
        InputSource::from_arg(&args.input),
        &file,
        args.overrides(),
        args.dry_run,
    );
    debug!(
        output_dir = %config.output_dir.display(),
        languages = ?config.languages,
        on_collision = ?config.build.on_collision,
        on_overflow = ?config.build.on_overflow,
        "resolved generate settings"
    );
    pipeline::run(&config).context("generate")
}
