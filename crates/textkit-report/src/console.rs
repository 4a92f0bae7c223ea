//! Console rendering with `comfy-table`.
//!
//! The output files carry the fixed plain formats from [`crate::format`];
//! the console gets the same data as styled tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use textkit_model::{Conversion, StatisticsSummary, WordFrequency};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn statistics_table(summary: &StatisticsSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Mean"), Cell::new(summary.mean)]);
    table.add_row(vec![Cell::new("Median"), Cell::new(summary.median)]);
    table.add_row(vec![Cell::new("Mode"), Cell::new(summary.mode)]);
    table.add_row(vec![Cell::new("Variance"), Cell::new(summary.variance)]);
    table.add_row(vec![
        Cell::new("Standard Deviation"),
        Cell::new(summary.std_deviation),
    ]);
    table
}

pub fn conversion_table(conversions: &[Conversion]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("NUM"),
        header_cell("BIN"),
        header_cell("HEX"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for conversion in conversions {
        table.add_row(vec![
            Cell::new(conversion.number),
            Cell::new(&conversion.binary),
            Cell::new(&conversion.hexadecimal),
        ]);
    }
    table
}

pub fn word_count_table(frequencies: &[WordFrequency]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("WORD"), header_cell("FREQ")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in frequencies {
        table.add_row(vec![Cell::new(&row.word), Cell::new(row.count)]);
    }
    table
}
