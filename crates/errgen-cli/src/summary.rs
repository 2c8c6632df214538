use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use errgen_cli::types::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    println!("Input: {}", result.source_name);
    if result.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    println!(
        "Records: {} across {} attributes",
        result.records, result.attributes
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Language"),
        header_cell("File"),
        header_cell("Bytes"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_bytes = 0usize;
    for summary in &result.languages {
        for artifact in &summary.artifacts {
            let file_name = artifact
                .location
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| artifact.name.clone());
            table.add_row(vec![
                language_cell(summary.language.label()),
                Cell::new(file_name),
                Cell::new(artifact.bytes),
                written_cell(!result.dry_run),
            ]);
        }
        total_bytes += summary.bytes();
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.artifact_count()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_bytes).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn language_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn written_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
