use rand::Rng;

use crate::domain::profile::UserProfile;
use crate::domain::recommendation::SuppressionReason;

/// Pages where a promotional interruption would hurt conversion.
pub const BLOCKED_PAGES: [&str; 3] = ["checkout", "cart", "payment"];

const BASE_PROBABILITY: f64 = 0.7;
const PER_BROWSE_BOOST: f64 = 0.1;
const MAX_PROBABILITY: f64 = 0.9;

pub fn is_blocked_page(current_page: &str) -> bool {
    let page = current_page.trim();
    BLOCKED_PAGES.iter().any(|blocked| blocked.eq_ignore_ascii_case(page))
}

/// Chance that a popup fires on a non-blocked page. Grows with browsing
/// history length, capped at 0.9.
pub fn show_probability(profile: &UserProfile) -> f64 {
    let browsed = profile.browsing_history.len() as f64;
    (BASE_PROBABILITY + PER_BROWSE_BOOST * browsed).min(MAX_PROBABILITY)
}

/// Runs the popup gate. Blocked pages short-circuit without consuming a draw.
pub fn check<R: Rng + ?Sized>(
    profile: &UserProfile,
    current_page: &str,
    rng: &mut R,
) -> Result<(), SuppressionReason> {
    if is_blocked_page(current_page) {
        return Err(SuppressionReason::BlockedPage);
    }

    if rng.gen::<f64>() < show_probability(profile) {
        Ok(())
    } else {
        Err(SuppressionReason::ProbabilityDraw)
    }
}

pub fn should_show_popup<R: Rng + ?Sized>(
    profile: &UserProfile,
    current_page: &str,
    rng: &mut R,
) -> bool {
    check(profile, current_page, rng).is_ok()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{check, should_show_popup, show_probability};
    use crate::domain::profile::UserProfile;
    use crate::domain::recommendation::SuppressionReason;

    #[test]
    fn checkout_pages_never_show_a_popup() {
        let mut rng = StdRng::seed_from_u64(7);
        let heavy_browser = (0..10).fold(UserProfile::new("u-1"), |profile, index| {
            profile.with_browsed(format!("category-{index}"))
        });

        for page in ["checkout", "cart", "payment", "Checkout", " cart "] {
            for profile in [&UserProfile::new("u-0"), &heavy_browser] {
                for _ in 0..200 {
                    assert_eq!(
                        check(profile, page, &mut rng),
                        Err(SuppressionReason::BlockedPage),
                        "page {page}"
                    );
                }
            }
        }
    }

    #[test]
    fn probability_grows_with_history_and_caps() {
        let empty = UserProfile::new("u");
        let one = UserProfile::new("u").with_browsed("home");
        let many = (0..8).fold(UserProfile::new("u"), |profile, _| profile.with_browsed("home"));

        assert!((show_probability(&empty) - 0.7).abs() < 1e-12);
        assert!((show_probability(&one) - 0.8).abs() < 1e-12);
        assert!((show_probability(&many) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn observed_show_rate_tracks_probability() {
        let mut rng = StdRng::seed_from_u64(20_240_611);
        let profile = UserProfile::new("u-stat");
        let draws = 20_000;

        let shown = (0..draws).filter(|_| should_show_popup(&profile, "home", &mut rng)).count();
        let rate = shown as f64 / draws as f64;

        assert!((rate - 0.7).abs() < 0.02, "observed rate {rate}");
    }

    #[test]
    fn seeded_generators_make_the_gate_reproducible() {
        let profile = UserProfile::new("u-seed").with_browsed("office");
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);

        let a: Vec<bool> = (0..64).map(|_| should_show_popup(&profile, "home", &mut first)).collect();
        let b: Vec<bool> =
            (0..64).map(|_| should_show_popup(&profile, "home", &mut second)).collect();

        assert_eq!(a, b);
    }
}
