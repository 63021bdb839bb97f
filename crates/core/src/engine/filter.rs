use std::collections::HashSet;

use tracing::debug;

use crate::domain::item::{ClearanceItem, ItemId};
use crate::engine::urgency::UrgencySource;

pub const URGENCY_THRESHOLD: f64 = 0.70;
pub const DISCOUNT_THRESHOLD_PCT: f64 = 40.0;

/// Candidates that survived the clearance filter.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredCandidates<'a> {
    pub items: Vec<&'a ClearanceItem>,
    /// Every qualifying item had already been shown this session, so repeats
    /// were let back in.
    pub repeats_allowed: bool,
}

impl FilteredCandidates<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// True clearance: urgent enough or already marked down deeply enough.
pub fn is_true_clearance(item: &ClearanceItem, urgency: UrgencySource) -> bool {
    urgency.score(item) >= URGENCY_THRESHOLD || item.discount_pct() >= DISCOUNT_THRESHOLD_PCT
}

/// Narrows the catalog to clearance items for one request.
///
/// Items already shown this session are dropped unless that would leave
/// nothing, in which case the full qualifying set is returned again.
pub fn filter_clearance<'a>(
    items: &'a [ClearanceItem],
    target_category: Option<&str>,
    shown_items: &[ItemId],
    urgency: UrgencySource,
) -> FilteredCandidates<'a> {
    let in_category: Vec<&ClearanceItem> = items
        .iter()
        .filter(|item| target_category.map_or(true, |category| item.category.as_str() == category))
        .collect();

    let qualifying: Vec<&ClearanceItem> =
        in_category.iter().copied().filter(|item| is_true_clearance(item, urgency)).collect();

    let shown: HashSet<&ItemId> = shown_items.iter().collect();
    let fresh: Vec<&ClearanceItem> =
        qualifying.iter().copied().filter(|item| !shown.contains(&item.id)).collect();

    debug!(
        event_name = "engine.filter.funnel",
        target_category = target_category.unwrap_or("any"),
        catalog = items.len(),
        in_category = in_category.len(),
        qualifying = qualifying.len(),
        fresh = fresh.len(),
        "clearance filter applied"
    );

    if fresh.is_empty() && !qualifying.is_empty() {
        return FilteredCandidates { items: qualifying, repeats_allowed: true };
    }

    FilteredCandidates { items: fresh, repeats_allowed: false }
}
