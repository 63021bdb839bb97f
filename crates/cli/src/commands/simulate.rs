use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clearance_catalog::StaticCatalog;
use clearance_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use clearance_core::domain::profile::UserProfile;
use clearance_core::domain::recommendation::{PopupDecision, SuppressionReason};
use clearance_core::domain::session::SessionContext;
use clearance_core::engine::ClearanceEngine;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Clone, Debug)]
pub struct SimulateOptions {
    pub requests: u32,
    pub seed: Option<u64>,
    pub page: String,
    pub category: Option<String>,
    pub browsed: Vec<String>,
    pub purchased: Vec<String>,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            requests: 20,
            seed: None,
            page: "home".to_string(),
            category: None,
            browsed: Vec::new(),
            purchased: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct SimulationSummary {
    command: &'static str,
    requests: u32,
    seed: Option<u64>,
    shown: u32,
    suppressed_blocked_page: u32,
    suppressed_draw: u32,
    declined: u32,
    item_counts: BTreeMap<String, u32>,
    mean_discount_pct: Option<f64>,
    mean_timer_seconds: Option<f64>,
    recently_shown: Vec<String>,
}

pub fn run(options: SimulateOptions) -> CommandResult {
    match simulate(options) {
        Ok(summary) => CommandResult::json_report("simulate", 0, &summary),
        Err(error) => CommandResult::failure("simulate", "simulation", format!("{error:#}"), 2),
    }
}

fn simulate(options: SimulateOptions) -> Result<SimulationSummary> {
    let config = AppConfig::load(LoadOptions {
        overrides: ConfigOverrides { rng_seed: options.seed, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    })
    .context("configuration did not load")?;
    let catalog = StaticCatalog::seeded().context("built-in catalog is invalid")?;
    let engine = ClearanceEngine::new(config.engine.clone());

    let mut profile = UserProfile::new("simulated-shopper");
    profile.browsing_history = options.browsed.clone();
    profile.purchase_history = options.purchased.clone();

    let mut summary = SimulationSummary {
        command: "simulate",
        requests: options.requests,
        seed: config.engine.rng_seed,
        ..SimulationSummary::default()
    };
    let mut shown_items = Vec::new();
    let mut discount_total = 0u64;
    let mut timer_total = 0u64;

    for _ in 0..options.requests {
        let mut session = SessionContext::new(options.page.as_str()).with_shown(shown_items.clone());
        if let Some(category) = &options.category {
            session = session.with_target_category(category.as_str());
        }

        match engine.recommend(catalog.items(), &profile, &session)? {
            PopupDecision::Suppressed { reason: SuppressionReason::BlockedPage } => {
                summary.suppressed_blocked_page += 1;
            }
            PopupDecision::Suppressed { reason: SuppressionReason::ProbabilityDraw } => {
                summary.suppressed_draw += 1;
            }
            PopupDecision::NoCandidates => summary.declined += 1,
            PopupDecision::Shown(recommendation) => {
                summary.shown += 1;
                timer_total += u64::from(recommendation.timer_seconds);
                discount_total +=
                    recommendation.discount_percentages.iter().copied().map(u64::from).sum::<u64>();
                for item in recommendation.items {
                    *summary.item_counts.entry(item.id.to_string()).or_default() += 1;
                    shown_items.push(item.id);
                }
            }
        }
    }

    let shown_item_total: u32 = summary.item_counts.values().sum();
    if shown_item_total > 0 {
        summary.mean_discount_pct = Some(discount_total as f64 / f64::from(shown_item_total));
    }
    if summary.shown > 0 {
        summary.mean_timer_seconds = Some(timer_total as f64 / f64::from(summary.shown));
    }
    summary.recently_shown = engine.recently_shown().iter().map(ToString::to_string).collect();

    Ok(summary)
}
