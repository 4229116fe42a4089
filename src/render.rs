//! Text rendering of rates and scenarios for the terminal.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use common::{Comparison, Highlight, Metric, NumberFormat, Scenario, ScenarioResult};

const CURRENCY: &str = "€";

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(labels: &[&str]) -> Vec<Cell> {
    labels.iter().map(|l| Cell::new(l).fg(Color::Cyan)).collect()
}

fn per_hour(format: &NumberFormat, value: f64) -> String {
    format!("{} {}/h", format.format(value), CURRENCY)
}

fn money(format: &NumberFormat, value: f64) -> String {
    format!("{} {}", format.format(value), CURRENCY)
}

fn percent(format: &NumberFormat, fraction: f64) -> String {
    format!("{} %", format.format(fraction * 100.0))
}

/// The five rates of one calculation.
pub fn rates_table(result: &ScenarioResult, format: &NumberFormat) -> Table {
    let mut table = new_table();
    table.set_header(header(&["RATE", "VALUE"]));
    table.add_row(vec![Cell::new("Self-cost rate"), Cell::new(per_hour(format, result.self_cost_rate))]);
    table.add_row(vec![Cell::new("Net rate"), Cell::new(per_hour(format, result.net_rate))]);
    table.add_row(vec![
        Cell::new("Net - self-cost diff."),
        Cell::new(per_hour(format, result.net_minus_self_cost_diff)),
    ]);
    table.add_row(vec![Cell::new("Gross rate"), Cell::new(per_hour(format, result.gross_rate))]);
    table.add_row(vec![
        Cell::new("Redistribution"),
        Cell::new(per_hour(format, result.redistribution_amount)),
    ]);
    table
}

/// One row per scenario, in the order given.
pub fn scenarios_table(scenarios: &[Scenario], format: &NumberFormat) -> Table {
    let mut table = new_table();
    table.set_header(header(&[
        "ID",
        "NAME",
        "DESCRIPTION",
        "WORKERS",
        "COST / WORKER",
        "OVERHEAD",
        "HOURS",
        "MARGIN",
        "VAT",
        "SELF-COST",
        "NET",
        "GROSS",
        "DIFF",
        "REDISTRIBUTION",
        "CREATED",
    ]));

    for s in scenarios {
        table.add_row(vec![
            Cell::new(s.id),
            Cell::new(&s.name),
            Cell::new(s.description.as_deref().unwrap_or_default()),
            Cell::new(s.input.worker_count),
            Cell::new(money(format, s.input.cost_per_worker)),
            Cell::new(money(format, s.input.overhead_cost)),
            Cell::new(format.format(s.input.billable_hours_per_worker)),
            Cell::new(percent(format, s.input.margin_fraction)),
            Cell::new(percent(format, s.input.vat_fraction)),
            Cell::new(per_hour(format, s.result.self_cost_rate)),
            Cell::new(per_hour(format, s.result.net_rate)),
            Cell::new(per_hour(format, s.result.gross_rate)),
            Cell::new(per_hour(format, s.result.net_minus_self_cost_diff)),
            Cell::new(per_hour(format, s.result.redistribution_amount)),
            Cell::new(s.created_at.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    table
}

/// All fields of a single scenario as label/value pairs.
pub fn scenario_details(s: &Scenario, format: &NumberFormat) -> Table {
    let mut table = new_table();
    table.set_header(header(&["FIELD", "VALUE"]));

    let redistribution = if s.input.redistribution_enabled { "enabled" } else { "disabled" };
    let rows: Vec<(&str, String)> = vec![
        ("ID", s.id.to_string()),
        ("Name", s.name.clone()),
        ("Description", s.description.clone().unwrap_or_default()),
        ("Workers", s.input.worker_count.to_string()),
        ("Cost per worker", money(format, s.input.cost_per_worker)),
        ("Overhead", money(format, s.input.overhead_cost)),
        ("Billable hours per worker", format.format(s.input.billable_hours_per_worker)),
        ("Margin", percent(format, s.input.margin_fraction)),
        ("VAT", percent(format, s.input.vat_fraction)),
        ("Redistribution", redistribution.to_string()),
        ("Self-cost rate", per_hour(format, s.result.self_cost_rate)),
        ("Net rate", per_hour(format, s.result.net_rate)),
        ("Gross rate", per_hour(format, s.result.gross_rate)),
        ("Net - self-cost diff.", per_hour(format, s.result.net_minus_self_cost_diff)),
        ("Redistribution amount", per_hour(format, s.result.redistribution_amount)),
        ("Created", s.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    table
}

/// Side-by-side comparison; column maxima are green, minima red.
///
/// The plain input columns come first and are never highlighted.
pub fn comparison_table(scenarios: &[Scenario], comparison: &Comparison, format: &NumberFormat) -> Table {
    let mut table = new_table();

    let mut labels = vec!["ID", "NAME", "Workers", "Hours per worker", "Margin", "VAT"];
    labels.extend(Metric::ALL.iter().map(|m| m.label()));
    table.set_header(header(&labels));

    for s in scenarios {
        let mut row = vec![
            Cell::new(s.id),
            Cell::new(&s.name),
            Cell::new(s.input.worker_count),
            Cell::new(format.format(s.input.billable_hours_per_worker)),
            Cell::new(percent(format, s.input.margin_fraction)),
            Cell::new(percent(format, s.input.vat_fraction)),
        ];
        for metric in Metric::ALL {
            let value = metric.value(s);
            let cell = Cell::new(format.format(value));
            row.push(match comparison.highlight(metric, value) {
                Highlight::Max => cell.fg(Color::Green),
                Highlight::Min => cell.fg(Color::Red),
                Highlight::None => cell,
            });
        }
        table.add_row(row);
    }
    table
}
