use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use super::generator::ReportPaths;
use crate::types::{CoarseType, FieldAnalysis};

/// Per-field overview: type, unique and missing counts, findings.
pub fn summary_table(analysis: &FieldAnalysis) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Unique"),
        header_cell("Missing"),
        header_cell("Flagged"),
    ]);

    for profile in &analysis.profiles {
        let flagged = analysis.findings_for(&profile.name).count();
        table.add_row(vec![
            Cell::new(&profile.name),
            type_cell(profile.data_type),
            Cell::new(profile.unique_values),
            Cell::new(profile.missing_values),
            count_cell(flagged),
        ]);
    }

    for index in 2..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn print_summary(analysis: &FieldAnalysis, paths: &ReportPaths) {
    println!("Field Analysis Summary:");
    println!("{}", summary_table(analysis));
    println!();
    println!("Total flagged records: {}", analysis.findings.len());
    println!("Field analysis: {}", paths.field_analysis.display());
    println!("Flagged records: {}", paths.flagged_records.display());
    if let Some(path) = &paths.json_report {
        println!("JSON analysis: {}", path.display());
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn type_cell(data_type: CoarseType) -> Cell {
    let color = match data_type {
        CoarseType::Boolean => Color::Magenta,
        CoarseType::Numeric => Color::Cyan,
        CoarseType::Date => Color::Blue,
        CoarseType::String => Color::Green,
    };
    Cell::new(data_type).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}
