use std::collections::HashSet;

use clearance_catalog::{CatalogError, CatalogProvider, StaticCatalog};
use clearance_core::config::{AppConfig, LoadOptions};
use clearance_core::domain::item::{Category, ClearanceItem};
use clearance_core::engine::filter::is_true_clearance;
use clearance_core::engine::urgency::UrgencySource;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    if json_output {
        return CommandResult::json_report("doctor", exit_code, &report);
    }

    CommandResult::report(exit_code, render_human(&report))
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    let urgency = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            Some(config.engine.urgency_source)
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            None
        }
    };

    match load_catalog() {
        Ok(items) => {
            checks.push(DoctorCheck {
                name: "catalog_integrity",
                status: CheckStatus::Pass,
                details: format!("{} items valid with unique ids", items.len()),
            });
            checks.push(match urgency {
                Some(urgency) => check_clearance_coverage(&items, urgency),
                None => skipped("clearance_coverage", "configuration did not load"),
            });
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "catalog_integrity",
                status: CheckStatus::Fail,
                details: error,
            });
            checks.push(skipped("clearance_coverage", "catalog did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn load_catalog() -> Result<Vec<ClearanceItem>, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| format!("failed to initialize async runtime: {error}"))?;

    runtime
        .block_on(async {
            let catalog = StaticCatalog::seeded()?;
            catalog.list_items().await
        })
        .map_err(|error: CatalogError| error.to_string())
}

fn check_clearance_coverage(items: &[ClearanceItem], urgency: UrgencySource) -> DoctorCheck {
    let covered: HashSet<Category> = items
        .iter()
        .filter(|item| is_true_clearance(item, urgency))
        .map(|item| item.category)
        .collect();
    let missing: Vec<&str> = Category::ALL
        .iter()
        .filter(|category| !covered.contains(*category))
        .map(|category| category.as_str())
        .collect();

    if missing.is_empty() {
        DoctorCheck {
            name: "clearance_coverage",
            status: CheckStatus::Pass,
            details: format!("every category has clearance candidates ({urgency:?} urgency)"),
        }
    } else {
        DoctorCheck {
            name: "clearance_coverage",
            status: CheckStatus::Fail,
            details: format!("no clearance candidates in: {}", missing.join(", ")),
        }
    }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use clearance_core::domain::item::{Category, ClearanceItem, ItemId};
    use clearance_core::engine::urgency::UrgencySource;

    use super::{check_clearance_coverage, CheckStatus};

    fn item(id: &str, category: Category, current: f64) -> ClearanceItem {
        ClearanceItem {
            id: ItemId::new(id),
            name: id.to_string(),
            original_price: 100.0,
            current_price: current,
            category,
            stock_count: 20,
            days_until_removal: 14,
            urgency_score: 0.1,
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn coverage_fails_for_categories_without_candidates() {
        let items: Vec<ClearanceItem> = Category::ALL
            .iter()
            .enumerate()
            .map(|(index, category)| {
                // only the first category is marked down far enough
                let current = if index == 0 { 50.0 } else { 90.0 };
                item(&format!("i{index}"), *category, current)
            })
            .collect();

        let check = check_clearance_coverage(&items, UrgencySource::Derived);

        assert_eq!(check.status, CheckStatus::Fail);
        assert!(check.details.contains("clothing"));
        assert!(!check.details.contains("electronics"));
    }
}
