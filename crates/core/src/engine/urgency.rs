use serde::{Deserialize, Serialize};

use crate::domain::item::ClearanceItem;
use crate::errors::DomainError;

const STOCK_SATURATION: f64 = 10.0;
const DAYS_SATURATION: f64 = 7.0;
const STOCK_WEIGHT: f64 = 0.6;
const TIME_WEIGHT: f64 = 0.4;

/// Urgency in `[0, 1]` derived from stock scarcity and time left on the shelf.
///
/// Each factor saturates to zero once stock reaches 10 units or removal is a
/// week or more away.
pub fn compute_urgency(item: &ClearanceItem) -> f64 {
    let stock_factor = ((STOCK_SATURATION - f64::from(item.stock_count)) / STOCK_SATURATION).max(0.0);
    let time_factor =
        ((DAYS_SATURATION - f64::from(item.days_until_removal)) / DAYS_SATURATION).max(0.0);

    (stock_factor * STOCK_WEIGHT + time_factor * TIME_WEIGHT).min(1.0)
}

/// Where the engine reads an item's urgency from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencySource {
    /// Recompute from stock and days on every use.
    #[default]
    Derived,
    /// Trust the score precomputed by the catalog.
    Catalog,
}

impl UrgencySource {
    pub fn score(self, item: &ClearanceItem) -> f64 {
        match self {
            Self::Derived => compute_urgency(item),
            Self::Catalog => item.urgency_score.clamp(0.0, 1.0),
        }
    }
}

impl std::str::FromStr for UrgencySource {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "derived" => Ok(Self::Derived),
            "catalog" => Ok(Self::Catalog),
            other => Err(DomainError::InvariantViolation(format!(
                "unsupported urgency source `{other}` (expected derived|catalog)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_urgency, UrgencySource};
    use crate::domain::item::fixtures::item;
    use crate::domain::item::Category;

    #[test]
    fn near_empty_stock_and_imminent_removal_is_urgent() {
        let lamp = item("o1", Category::Office, 34.99, 17.99, 1, 1, 0.98);
        let expected = 0.6 * 0.9 + 0.4 * (6.0 / 7.0);

        assert!((compute_urgency(&lamp) - expected).abs() < 1e-12);
    }

    #[test]
    fn saturated_stock_and_days_yield_zero() {
        let plentiful = item("o9", Category::Office, 12.99, 6.99, 18, 9, 0.45);
        assert_eq!(compute_urgency(&plentiful), 0.0);
    }

    #[test]
    fn sold_out_item_due_today_is_maximal() {
        let gone = item("z0", Category::Home, 10.0, 5.0, 0, 0, 1.0);
        assert!((compute_urgency(&gone) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn urgency_stays_in_unit_range_and_never_rises_with_more_supply() {
        for days in 0..15u32 {
            let mut previous = f64::INFINITY;
            for stock in 0..25u32 {
                let urgency = compute_urgency(&item("g", Category::Home, 10.0, 5.0, stock, days, 0.5));
                assert!((0.0..=1.0).contains(&urgency), "stock={stock} days={days}");
                assert!(urgency <= previous, "stock={stock} days={days}");
                previous = urgency;
            }
        }

        for stock in 0..25u32 {
            let mut previous = f64::INFINITY;
            for days in 0..15u32 {
                let urgency = compute_urgency(&item("g", Category::Home, 10.0, 5.0, stock, days, 0.5));
                assert!(urgency <= previous, "stock={stock} days={days}");
                previous = urgency;
            }
        }
    }

    #[test]
    fn repeated_computation_is_stable() {
        let speaker = item("e3", Category::Electronics, 59.99, 29.99, 3, 3, 0.8);
        assert_eq!(compute_urgency(&speaker), compute_urgency(&speaker));
    }

    #[test]
    fn catalog_source_uses_precomputed_score() {
        let speaker = item("e3", Category::Electronics, 59.99, 29.99, 3, 3, 0.8);

        assert_eq!(UrgencySource::Catalog.score(&speaker), 0.8);
        assert_eq!(UrgencySource::Derived.score(&speaker), compute_urgency(&speaker));
    }

    #[test]
    fn urgency_source_parses_config_values() {
        assert_eq!("Catalog".parse::<UrgencySource>().expect("catalog"), UrgencySource::Catalog);
        assert!("static".parse::<UrgencySource>().is_err());
    }
}
