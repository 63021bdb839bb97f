use clearance_catalog::fixtures;
use clearance_core::domain::item::{Category, ClearanceItem};
use clearance_core::engine::filter::is_true_clearance;
use clearance_core::engine::urgency::{compute_urgency, UrgencySource};
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct CatalogRow {
    id: String,
    name: String,
    category: Category,
    current_price: f64,
    stock_count: u32,
    days_until_removal: u32,
    derived_urgency: f64,
    catalog_urgency: f64,
    base_discount_pct: f64,
    clearance: bool,
}

impl CatalogRow {
    fn from_item(item: &ClearanceItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category,
            current_price: item.current_price,
            stock_count: item.stock_count,
            days_until_removal: item.days_until_removal,
            derived_urgency: round2(compute_urgency(item)),
            catalog_urgency: item.urgency_score,
            base_discount_pct: round2(item.discount_pct()),
            clearance: is_true_clearance(item, UrgencySource::Derived),
        }
    }
}

pub fn run(category: Option<&str>, json_output: bool) -> CommandResult {
    let category = match category.map(str::parse::<Category>).transpose() {
        Ok(category) => category,
        Err(error) => {
            return CommandResult::failure("catalog", "invalid_argument", error.to_string(), 2)
        }
    };

    let rows: Vec<CatalogRow> = fixtures::clearance_items()
        .iter()
        .filter(|item| category.map_or(true, |category| item.category == category))
        .map(CatalogRow::from_item)
        .collect();

    if json_output {
        return CommandResult::json_report("catalog", 0, &rows);
    }

    CommandResult::report(0, render_human(&rows))
}

fn render_human(rows: &[CatalogRow]) -> String {
    let eligible = rows.iter().filter(|row| row.clearance).count();
    let mut lines = vec![format!("catalog: {} items, {eligible} eligible for clearance", rows.len())];

    for row in rows {
        let marker = if row.clearance { "clearance" } else { "regular" };
        lines.push(format!(
            "- [{marker}] {} {} ({}) ${:.2} stock={} days={} urgency={:.2} discount={:.1}%",
            row.id,
            row.name,
            row.category,
            row.current_price,
            row.stock_count,
            row.days_until_removal,
            row.derived_urgency,
            row.base_discount_pct,
        ));
    }

    lines.join("\n")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
