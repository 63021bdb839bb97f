//! Clearance recommendation engine.
//!
//! A request flows through the popup gate, the clearance filter, the ranker
//! and the diversity selector before discount and messaging metadata is
//! attached. The only shared mutable state is [`EngineState`], held behind a
//! single lock so that ranking, selection and the recent-memory update happen
//! as one unit per request.

pub mod filter;
pub mod gate;
pub mod memory;
pub mod messaging;
pub mod ranking;
pub mod selection;
pub mod urgency;

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::item::{ClearanceItem, ItemId};
use crate::domain::profile::UserProfile;
use crate::domain::recommendation::{PopupDecision, Recommendation};
use crate::domain::session::SessionContext;
use crate::errors::ApplicationError;

pub use filter::{filter_clearance, is_true_clearance, FilteredCandidates};
pub use memory::{RecentlyShown, DEFAULT_RECENT_CAPACITY};
pub use ranking::{rank, ScoredItem};
pub use selection::{select, select_diverse};
pub use urgency::{compute_urgency, UrgencySource};

/// Process-wide mutable state: cross-session recent memory plus the random source.
#[derive(Debug)]
pub struct EngineState {
    recent: RecentlyShown,
    rng: StdRng,
}

impl EngineState {
    pub fn new(recent: RecentlyShown, rng: StdRng) -> Self {
        Self { recent, rng }
    }

    pub fn seeded(recent_capacity: usize, seed: u64) -> Self {
        Self::new(RecentlyShown::new(recent_capacity), StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(recent_capacity: usize) -> Self {
        Self::new(RecentlyShown::new(recent_capacity), StdRng::from_entropy())
    }

    pub fn recent(&self) -> &RecentlyShown {
        &self.recent
    }
}

pub struct ClearanceEngine {
    config: EngineConfig,
    state: Mutex<EngineState>,
}

impl ClearanceEngine {
    pub fn new(config: EngineConfig) -> Self {
        let state = match config.rng_seed {
            Some(seed) => EngineState::seeded(config.recent_capacity, seed),
            None => EngineState::from_entropy(config.recent_capacity),
        };
        Self::with_state(config, state)
    }

    pub fn with_state(config: EngineConfig, state: EngineState) -> Self {
        Self { config, state: Mutex::new(state) }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Oldest first.
    pub fn recently_shown(&self) -> Vec<ItemId> {
        self.lock_state().recent.snapshot()
    }

    pub fn should_show_popup(&self, profile: &UserProfile, current_page: &str) -> bool {
        gate::should_show_popup(profile, current_page, &mut self.lock_state().rng)
    }

    pub fn urgency(&self, item: &ClearanceItem) -> f64 {
        self.config.urgency_source.score(item)
    }

    pub fn discount_for(&self, item: &ClearanceItem, profile: &UserProfile) -> u32 {
        messaging::dynamic_discount(item, &profile.interest(), self.config.urgency_source)
    }

    /// Filter, rank and select up to `count` items, recording the selection in
    /// recent memory. Does not consult the popup gate.
    pub fn select_best_items(
        &self,
        items: &[ClearanceItem],
        profile: &UserProfile,
        session: &SessionContext,
        count: usize,
    ) -> Vec<ClearanceItem> {
        let mut state = self.lock_state();
        self.select_locked(&mut state, items, profile, session, count)
    }

    /// Full popup decision for one request.
    pub fn recommend(
        &self,
        items: &[ClearanceItem],
        profile: &UserProfile,
        session: &SessionContext,
    ) -> Result<PopupDecision, ApplicationError> {
        let mut state = self.lock_state();

        if let Err(reason) = gate::check(profile, &session.current_page, &mut state.rng) {
            debug!(
                event_name = "engine.gate.suppressed",
                user_id = %profile.user_id,
                current_page = %session.current_page,
                reason = ?reason,
                "popup gate declined"
            );
            return Ok(PopupDecision::Suppressed { reason });
        }

        for item in items {
            item.validate()?;
        }

        let selected =
            self.select_locked(&mut state, items, profile, session, self.config.popup_item_count);
        if selected.is_empty() {
            return Ok(PopupDecision::NoCandidates);
        }

        let interest = profile.interest();
        let urgency = self.config.urgency_source;
        let urgencies: Vec<f64> = selected.iter().map(|item| urgency.score(item)).collect();

        let recommendation = Recommendation {
            discount_percentages: selected
                .iter()
                .map(|item| messaging::dynamic_discount(item, &interest, urgency))
                .collect(),
            urgency_messages: selected.iter().map(messaging::urgency_message).collect(),
            sustainability_messages: selected
                .iter()
                .map(|_| messaging::sustainability_message(&mut state.rng).to_string())
                .collect(),
            timer_seconds: messaging::countdown_seconds(&urgencies),
            items: selected,
        };

        Ok(PopupDecision::Shown(recommendation))
    }

    fn select_locked(
        &self,
        state: &mut EngineState,
        items: &[ClearanceItem],
        profile: &UserProfile,
        session: &SessionContext,
        count: usize,
    ) -> Vec<ClearanceItem> {
        let target_category = session.category_filter();
        let urgency = self.config.urgency_source;

        let candidates = filter_clearance(items, target_category, &session.shown_items, urgency);
        if candidates.is_empty() {
            return Vec::new();
        }

        let EngineState { recent, rng } = state;
        let ranked = rank(&candidates.items, &profile.interest(), recent, urgency, rng);
        let selected = select(&ranked, count, target_category, recent);

        debug!(
            event_name = "engine.selection.completed",
            user_id = %profile.user_id,
            candidates = candidates.items.len(),
            repeats_allowed = candidates.repeats_allowed,
            selected = ?selected.iter().map(|item| item.id.as_str()).collect::<Vec<_>>(),
            recent_size = recent.len(),
            "clearance items selected"
        );

        selected.into_iter().cloned().collect()
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
