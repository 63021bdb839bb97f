use std::cmp::Ordering;
use std::ops::Range;

use rand::Rng;

use crate::domain::item::ClearanceItem;
use crate::domain::profile::CategoryInterest;
use crate::engine::memory::RecentlyShown;
use crate::engine::urgency::UrgencySource;

pub const BROWSED_BOOST: f64 = 0.2;
pub const PURCHASED_BOOST: f64 = 0.3;
pub const RECENTLY_SHOWN_PENALTY: f64 = 0.3;
pub const JITTER: Range<f64> = 0.1..0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredItem<'a> {
    pub score: f64,
    pub item: &'a ClearanceItem,
}

/// Deterministic part of an item's score: urgency plus interest boosts, minus
/// the cross-session repeat penalty.
pub fn base_score(
    item: &ClearanceItem,
    interest: &CategoryInterest,
    recent: &RecentlyShown,
    urgency: UrgencySource,
) -> f64 {
    let mut score = urgency.score(item);

    if interest.browsed(item.category) {
        score += BROWSED_BOOST;
    }
    if interest.purchased(item.category) {
        score += PURCHASED_BOOST;
    }
    if recent.contains(&item.id) {
        score -= RECENTLY_SHOWN_PENALTY;
    }

    score
}

/// Scores every candidate with fresh jitter and orders them best first.
///
/// The sort is stable, so equal scores keep their input order.
pub fn rank<'a, R: Rng + ?Sized>(
    candidates: &[&'a ClearanceItem],
    interest: &CategoryInterest,
    recent: &RecentlyShown,
    urgency: UrgencySource,
    rng: &mut R,
) -> Vec<ScoredItem<'a>> {
    let mut scored: Vec<ScoredItem<'a>> = candidates
        .iter()
        .map(|&item| ScoredItem {
            score: base_score(item, interest, recent, urgency) + rng.gen_range(JITTER),
            item,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
