use std::collections::{HashSet, VecDeque};

use crate::domain::item::ItemId;

pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Bounded, insertion-ordered memory of items recently selected for any session.
///
/// Invariant: `len() <= capacity()`. Eviction always drops the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentlyShown {
    capacity: usize,
    order: VecDeque<ItemId>,
    members: HashSet<ItemId>,
}

impl RecentlyShown {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity + 1),
            members: HashSet::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.members.contains(id)
    }

    /// Records `id` as the newest entry and returns whatever was evicted.
    /// Re-recording an id already held moves it to the newest position.
    pub fn remember(&mut self, id: ItemId) -> Vec<ItemId> {
        if self.members.contains(&id) {
            self.order.retain(|existing| existing != &id);
        } else {
            self.members.insert(id.clone());
        }
        self.order.push_back(id);

        let mut evicted = Vec::new();
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
                evicted.push(oldest);
            }
        }
        evicted
    }

    pub fn remember_all<I>(&mut self, ids: I) -> Vec<ItemId>
    where
        I: IntoIterator<Item = ItemId>,
    {
        ids.into_iter().flat_map(|id| self.remember(id)).collect()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.order.iter()
    }

    pub fn snapshot(&self) -> Vec<ItemId> {
        self.order.iter().cloned().collect()
    }
}

impl Default for RecentlyShown {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::RecentlyShown;
    use crate::domain::item::ItemId;

    fn ids(values: &[&str]) -> Vec<ItemId> {
        values.iter().map(|value| ItemId::new(*value)).collect()
    }

    #[test]
    fn evicts_oldest_entries_first() {
        let mut recent = RecentlyShown::default();
        let evicted = recent.remember_all(ids(&["a", "b", "c", "d", "e", "f", "g"]));

        assert_eq!(evicted, ids(&["a", "b"]));
        assert_eq!(recent.snapshot(), ids(&["c", "d", "e", "f", "g"]));
        assert!(!recent.contains(&ItemId::new("a")));
        assert!(recent.contains(&ItemId::new("g")));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut recent = RecentlyShown::new(5);
        for index in 0..500 {
            recent.remember(ItemId::new(format!("item-{}", index % 37)));
            assert!(recent.len() <= 5);
        }
    }

    #[test]
    fn re_remembering_refreshes_position_without_duplicating() {
        let mut recent = RecentlyShown::new(3);
        recent.remember_all(ids(&["a", "b", "c"]));

        let evicted = recent.remember(ItemId::new("a"));
        assert!(evicted.is_empty());
        assert_eq!(recent.snapshot(), ids(&["b", "c", "a"]));

        let evicted = recent.remember(ItemId::new("d"));
        assert_eq!(evicted, ids(&["b"]));
        assert_eq!(recent.snapshot(), ids(&["c", "a", "d"]));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut recent = RecentlyShown::new(0);
        recent.remember_all(ids(&["a", "b"]));

        assert_eq!(recent.capacity(), 1);
        assert_eq!(recent.snapshot(), ids(&["b"]));
    }
}
