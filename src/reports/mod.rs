use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use impactcalc::format::{format_change, format_currency, format_input, format_number};
use impactcalc::inputs::{InputKey, InputSet};
use impactcalc::model::ComparisonResult;
use impactcalc::projections::{RowComparison, SensitivityPoint, TableRow};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn change_cell(pct: Option<f64>) -> Cell {
    match pct {
        Some(p) if p >= 0.0 => Cell::new(format_change(pct)).fg(Color::Red),
        Some(_) => Cell::new(format_change(pct)).fg(Color::Green),
        None => Cell::new(format_change(pct)),
    }
}

pub fn print_inputs(label: &str, inputs: &InputSet) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Inputs ({})", label)).add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    align_right(&mut table, 1..=1);

    for key in InputKey::iter() {
        table.add_row(vec![
            Cell::new(key.to_string()),
            Cell::new(format_input(key, inputs.get(key))),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_breakdown(rows: &[TableRow], grand_total: f64) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Cases/yr"),
        Cell::new("Cost/Case"),
        Cell::new("Annual Cost").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=4);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.category.to_string()),
            Cell::new(row.group.to_string()),
            Cell::new(format_number(row.cases, 1)),
            Cell::new(format_currency(row.cost_per_case)),
            Cell::new(format_currency(row.total)).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format_currency(grand_total)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}

pub fn print_comparison(cmp: &ComparisonResult) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Comparison vs 2018 Baseline").add_attribute(Attribute::Bold),
        Cell::new("Baseline"),
        Cell::new("Current"),
        Cell::new("Change"),
    ]);
    align_right(&mut table, 1..=3);

    let lines = [
        (
            "Fatal Cancer",
            cmp.baseline.cancer.total.fatal_cost,
            cmp.current.cancer.total.fatal_cost,
        ),
        (
            "Non-Fatal Cancer",
            cmp.baseline.cancer.total.non_fatal_cost,
            cmp.current.cancer.total.non_fatal_cost,
        ),
        ("MSDs", cmp.baseline.msd.total.cost, cmp.current.msd.total.cost),
        (
            "Workforce",
            cmp.baseline.workforce.total,
            cmp.current.workforce.total,
        ),
    ];

    for (name, base, cur) in lines {
        let fmt: fn(f64) -> String = if name == "Workforce" {
            |v: f64| format_number(v, 0)
        } else {
            format_currency
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(fmt(base)),
            Cell::new(fmt(cur)),
            change_cell(impactcalc::model::percent_change(cur, base)),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(format_currency(cmp.baseline.grand_total)),
        Cell::new(format_currency(cmp.current.grand_total)).add_attribute(Attribute::Bold),
        change_cell(cmp.percent_change).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
    println!(
        "Net change: {} ({})",
        cmp.formatted.change, cmp.formatted.percent_change
    );
}

pub fn print_row_comparison(rows: &[RowComparison]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("2018"),
        Cell::new("Current"),
        Cell::new("Change"),
    ]);
    align_right(&mut table, 2..=4);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.category.to_string()),
            Cell::new(row.group.to_string()),
            Cell::new(format_currency(row.baseline_total)),
            Cell::new(format_currency(row.current_total)),
            change_cell(row.percent_change),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_sensitivity(key: InputKey, points: &[SensitivityPoint]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(key.to_string()).add_attribute(Attribute::Bold),
        Cell::new("Total Annual Cost").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=1);

    for p in points {
        table.add_row(vec![
            Cell::new(format_input(key, p.value)),
            Cell::new(format_currency(p.grand_total)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_presets(names: &[String], active: &str) {
    let mut table = new_table();
    table.add_row(vec![Cell::new("Preset").add_attribute(Attribute::Bold)]);
    for name in names {
        let cell = if name == active {
            Cell::new(format!("{} *", name))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(name)
        };
        table.add_row(vec![cell]);
    }
    println!("\n{}", table);
}
