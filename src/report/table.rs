use std::fmt::Write;

use crate::core::{ProjectionResult, VarianceProjection};

use super::currency::{Currency, format_money};
use super::locale::Labels;

/// Fixed-width ledger table, one row per projected year.
pub fn render_ledger(result: &ProjectionResult, labels: &Labels, currency: Currency) -> String {
    let cols = &labels.columns;
    let headers = [
        cols.year,
        cols.starting_balance,
        cols.monthly_addition,
        cols.interest_earned,
        cols.ending_balance,
    ];
    let rows: Vec<[String; 5]> = result
        .records
        .iter()
        .map(|r| {
            [
                r.year.to_string(),
                format_money(currency, r.starting_balance),
                format_money(currency, r.monthly_addition),
                format_money(currency, r.interest_earned),
                format_money(currency, r.ending_balance),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let rule_len = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&line);
    out.push('\n');
}

/// Headline final balance per scenario, low to high.
pub fn render_summary(projection: &VarianceProjection, labels: &Labels, currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels.final_balance_section);
    for scenario in projection.scenarios() {
        let value = scenario
            .result
            .final_balance()
            .map(|v| format_money(currency, v))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {} {} ({}%)",
            labels.final_balance.get(scenario.scenario),
            value,
            scenario.annual_rate_percent
        );
    }
    out
}

/// Summary followed by each scenario's ledger under its localized heading.
pub fn render_report(projection: &VarianceProjection, labels: &Labels, currency: Currency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", labels.title);
    out.push_str(&render_summary(projection, labels, currency));
    for scenario in projection.scenarios() {
        let _ = writeln!(out, "\n{}", labels.data_heading.get(scenario.scenario));
        out.push_str(&render_ledger(&scenario.result, labels, currency));
    }
    out
}
