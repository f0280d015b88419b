use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mig_core::DraftTable;
use mig_model::{ANALYSIS_START_YEAR, MergedRecord, Window};

use mig_cli::pipeline::Analysis;

pub fn print_merged_summary(analysis: &Analysis) {
    let stats = &analysis.stats;
    println!(
        "Rows: {} read, {} kept, {} filtered, {} excluded year",
        stats.rows_read, stats.rows_kept, stats.skipped_filter, stats.skipped_excluded_year
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Immigrants"),
        header_cell("Emigrants"),
        header_cell("Net"),
        header_cell("Inductions"),
        header_cell("Window"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in &analysis.merged {
        table.add_row(vec![
            Cell::new(record.year).add_attribute(Attribute::Bold),
            Cell::new(record.immigrants),
            Cell::new(record.emigrants),
            net_cell(record.net_migration),
            Cell::new(record.inductions),
            window_cell(record),
        ]);
    }
    println!("{table}");
}

pub fn print_draft_table(draft: &DraftTable) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Inductions")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (year, inductions) in draft.iter() {
        let year_cell = if year < ANALYSIS_START_YEAR {
            dim_cell(year)
        } else {
            Cell::new(year)
        };
        table.add_row(vec![year_cell, Cell::new(inductions)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn net_cell(value: i64) -> Cell {
    if value < 0 {
        Cell::new(value).fg(Color::Red)
    } else {
        Cell::new(value)
    }
}

fn window_cell(record: &MergedRecord) -> Cell {
    let window = [Window::Korea, Window::Vietnam]
        .into_iter()
        .find(|window| window.contains(record.year));
    match window {
        Some(window) => Cell::new(window.label()).fg(Color::Blue),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
