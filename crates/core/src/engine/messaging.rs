use rand::Rng;

use crate::domain::item::ClearanceItem;
use crate::domain::profile::CategoryInterest;
use crate::engine::urgency::UrgencySource;

pub const MAX_DISCOUNT_PCT: u32 = 70;
pub const URGENCY_BONUS_SCALE: f64 = 15.0;
pub const LOW_STOCK_THRESHOLD: u32 = 2;
pub const ENDING_SOON_DAYS: u32 = 2;
pub const TIMER_MIN_SECS: u32 = 30;
pub const TIMER_SPAN_SECS: u32 = 150;

pub const SUSTAINABILITY_MESSAGES: [&str; 4] = [
    "Help reduce waste by giving this item a new home 🌱",
    "Save money and the planet with this clearance find 🌍",
    "Prevent landfill waste - buy clearance, help Earth 🌿",
    "Sustainable shopping: rescue this item from disposal ♻️",
];

/// Personalised discount: the catalog markdown plus an urgency bonus scaled
/// by category interest, capped at 70 and truncated to whole percent.
pub fn dynamic_discount(
    item: &ClearanceItem,
    interest: &CategoryInterest,
    urgency: UrgencySource,
) -> u32 {
    let urgency_bonus = urgency.score(item) * URGENCY_BONUS_SCALE;
    let total = (item.discount_pct() + urgency_bonus * interest.multiplier(item.category))
        .min(f64::from(MAX_DISCOUNT_PCT));

    total.max(0.0).trunc() as u32
}

/// Low stock wins over an imminent end date.
pub fn urgency_message(item: &ClearanceItem) -> String {
    if item.stock_count <= LOW_STOCK_THRESHOLD {
        format!("Only {} left in stock!", item.stock_count)
    } else if item.days_until_removal <= ENDING_SOON_DAYS {
        let unit = if item.days_until_removal == 1 { "day" } else { "days" };
        format!("Clearance ends in {} {unit}!", item.days_until_removal)
    } else {
        "Limited time clearance deal!".to_string()
    }
}

pub fn sustainability_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUSTAINABILITY_MESSAGES[rng.gen_range(0..SUSTAINABILITY_MESSAGES.len())]
}

/// Countdown between 30 and 180 seconds; more urgent selections get less time.
/// An empty selection gets the full countdown.
pub fn countdown_seconds(urgencies: &[f64]) -> u32 {
    if urgencies.is_empty() {
        return TIMER_MIN_SECS + TIMER_SPAN_SECS;
    }

    let average = urgencies.iter().sum::<f64>() / urgencies.len() as f64;
    let remaining = f64::from(TIMER_SPAN_SECS) * (1.0 - average.clamp(0.0, 1.0));

    (f64::from(TIMER_MIN_SECS) + remaining).trunc() as u32
}
