use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use docsplit_cli::pipeline::SplitOutcome;
use docsplit_model::{MatchKind, Section};

pub fn print_summary(outcome: &SplitOutcome) {
    let segmentation = &outcome.segmentation;
    println!("Input: {}", outcome.input.display());
    println!("Pages: {}", segmentation.page_count());
    if let Some(export) = &outcome.export {
        println!("Output: {}", outcome.output_dir.display());
        if export.written.is_empty() && export.failures.is_empty() {
            println!("No sections to export");
        }
    }
    if let Some(path) = &outcome.report {
        println!("Report: {}", path.display());
    }
    if segmentation.is_empty() {
        println!("Document has no pages");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Pages"),
        header_cell("Range"),
        header_cell("Confidence"),
        header_cell("Kind"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for section in segmentation.sections() {
        table.add_row(vec![
            heading_cell(section),
            Cell::new(section.page_count()),
            Cell::new(page_range(section)),
            confidence_cell(section.confidence),
            kind_cell(section.match_kind),
        ]);
    }
    let matched = segmentation.matched().count();
    let unmatched = segmentation.others().map_or(0, Section::page_count);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(segmentation.page_count()).add_attribute(Attribute::Bold),
        dim_cell(format!("{matched} matched")),
        dim_cell("-"),
        dim_cell(format!("{unmatched} unmatched")),
    ]);
    println!("{table}");

    if let Some(export) = &outcome.export
        && !export.failures.is_empty()
    {
        eprintln!("Errors:");
        for failure in &export.failures {
            eprintln!("- {}: {}", failure.heading, failure.error);
        }
    }
}

/// 1-based page range as shown to users.
fn page_range(section: &Section) -> String {
    if section.start_page == section.end_page {
        format!("{}", section.start_page + 1)
    } else {
        format!("{}-{}", section.start_page + 1, section.end_page + 1)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn heading_cell(section: &Section) -> Cell {
    if section.is_others() {
        Cell::new(&section.heading).fg(Color::DarkGrey)
    } else {
        Cell::new(&section.heading)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

pub fn confidence_cell(confidence: f64) -> Cell {
    Cell::new(format!("{confidence:.0}"))
}

pub fn kind_cell(kind: MatchKind) -> Cell {
    let color = match kind {
        MatchKind::Exact => Color::Green,
        MatchKind::Pattern => Color::Cyan,
        MatchKind::Fuzzy => Color::Yellow,
    };
    Cell::new(kind).fg(color)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
