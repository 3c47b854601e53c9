use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    billing::BillingMode,
    history::BillHistoryRecord,
    quantity::cost::Cost,
    report::{BillReport, Breakdown, Party, SinglePayer},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

/// Totals are shown in whole taka, line items with two decimals.
fn total_cell(total: Cost, color: Color) -> Cell {
    Cell::new(total.to_rounded_string())
        .add_attribute(Attribute::Bold)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn amount_cell(amount: impl ToString) -> Cell {
    Cell::new(amount.to_string()).set_alignment(CellAlignment::Right)
}

#[must_use]
pub fn build_report_table(report: &BillReport) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(report.header.title).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} | {}",
            report.header.generated_on.format("%B %-d, %Y"),
            report.header.mode_label,
        ))
        .add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![Cell::new("Total units"), amount_cell(report.summary.total_units)]);
    table.add_row(vec![Cell::new("Average rate"), amount_cell(report.summary.average_rate)]);
    table.add_row(vec![Cell::new("Total bill"), total_cell(report.summary.total_bill, Color::Reset)]);

    match &report.breakdown {
        Breakdown::Single(payer) => add_single_payer_rows(&mut table, payer),
        Breakdown::Dual { owner, tenant } => {
            add_party_rows(&mut table, "Owner payment", owner, Color::Green);
            add_party_rows(&mut table, "Tenant payment", tenant, Color::Cyan);
        }
    }

    table.add_row(vec![Cell::new(&report.footnote).add_attribute(Attribute::Dim)]);
    table
}

fn add_single_payer_rows(table: &mut Table, payer: &SinglePayer) {
    table.add_row(vec![Cell::new("Bill details").add_attribute(Attribute::Bold).fg(Color::Green)]);
    table.add_row(vec![Cell::new("Units consumed"), amount_cell(payer.units)]);
    table.add_row(vec![Cell::new("Energy cost"), amount_cell(payer.energy_cost)]);
    table.add_row(vec![Cell::new("Demand charge"), amount_cell(payer.demand_charge)]);
    table.add_row(vec![
        Cell::new(format!("VAT ({}%)", payer.vat_rate_percent)),
        amount_cell(payer.vat),
    ]);
    table.add_row(vec![Cell::new("Total"), total_cell(payer.total, Color::Green)]);
}

fn add_party_rows(table: &mut Table, title: &str, party: &Party, color: Color) {
    table.add_row(vec![Cell::new(title).add_attribute(Attribute::Bold).fg(color)]);
    table.add_row(vec![Cell::new("Units consumed"), amount_cell(party.units)]);
    table.add_row(vec![Cell::new("Energy cost"), amount_cell(party.energy_cost)]);
    table.add_row(vec![
        Cell::new("Fixed cost (50% demand + VAT)"),
        amount_cell(party.fixed_cost),
    ]);
    table.add_row(vec![Cell::new("Total"), total_cell(party.total, color)]);
}

#[must_use]
pub fn build_history_table(records: &[BillHistoryRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Saved at", "Mode", "Units", "Owner", "Tenant", "Total"]);
    for record in records {
        let tenant_cell = match record.mode {
            BillingMode::Single => Cell::new("—").add_attribute(Attribute::Dim),
            BillingMode::Dual => total_cell(record.tenant_bill, Color::Cyan),
        };
        table.add_row(vec![
            Cell::new(&record.id).add_attribute(Attribute::Dim),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(record.mode.label()),
            amount_cell(record.total_units),
            total_cell(record.owner_bill, Color::Green),
            tenant_cell,
            total_cell(record.total_bill, Color::Reset),
        ]);
    }
    table
}
