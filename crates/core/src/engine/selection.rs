use std::collections::HashSet;

use crate::domain::item::{Category, ClearanceItem, ItemId};
use crate::engine::memory::RecentlyShown;
use crate::engine::ranking::ScoredItem;

/// Picks up to `count` items from a ranked list, preferring one item per
/// category before filling the rest by rank. A category-targeted request skips
/// the diversity pass.
pub fn select_diverse<'a>(
    ranked: &[ScoredItem<'a>],
    count: usize,
    target_category: Option<&str>,
) -> Vec<&'a ClearanceItem> {
    if target_category.is_some() {
        return ranked.iter().take(count).map(|scored| scored.item).collect();
    }

    let mut selected: Vec<&'a ClearanceItem> = Vec::with_capacity(count);
    let mut selected_ids: HashSet<&ItemId> = HashSet::with_capacity(count);
    let mut used_categories: HashSet<Category> = HashSet::new();

    for scored in ranked {
        if selected.len() >= count {
            break;
        }
        if used_categories.insert(scored.item.category) {
            selected.push(scored.item);
            selected_ids.insert(&scored.item.id);
        }
    }

    for scored in ranked {
        if selected.len() >= count {
            break;
        }
        if selected_ids.insert(&scored.item.id) {
            selected.push(scored.item);
        }
    }

    selected
}

/// Selects items and records them in the cross-session memory.
pub fn select<'a>(
    ranked: &[ScoredItem<'a>],
    count: usize,
    target_category: Option<&str>,
    recent: &mut RecentlyShown,
) -> Vec<&'a ClearanceItem> {
    let selected = select_diverse(ranked, count, target_category);
    recent.remember_all(selected.iter().map(|item| item.id.clone()));
    selected
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{select, select_diverse};
    use crate::domain::item::fixtures::item;
    use crate::domain::item::{Category, ClearanceItem, ItemId};
    use crate::engine::memory::RecentlyShown;
    use crate::engine::ranking::ScoredItem;

    fn ranked(items: &[ClearanceItem]) -> Vec<ScoredItem<'_>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ScoredItem { score: 10.0 - index as f64, item })
            .collect()
    }

    fn catalog() -> Vec<ClearanceItem> {
        vec![
            item("e1", Category::Electronics, 10.0, 5.0, 1, 1, 0.9),
            item("e2", Category::Electronics, 10.0, 5.0, 1, 1, 0.9),
            item("e3", Category::Electronics, 10.0, 5.0, 1, 1, 0.9),
            item("h1", Category::Home, 10.0, 5.0, 1, 1, 0.9),
            item("o1", Category::Office, 10.0, 5.0, 1, 1, 0.9),
        ]
    }

    fn ids(items: &[&ClearanceItem]) -> Vec<String> {
        items.iter().map(|item| item.id.0.clone()).collect()
    }

    #[test]
    fn first_pass_spreads_across_categories() {
        let items = catalog();
        let selected = select_diverse(&ranked(&items), 3, None);

        assert_eq!(ids(&selected), vec!["e1", "h1", "o1"]);
        let categories: HashSet<Category> = selected.iter().map(|item| item.category).collect();
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn second_pass_fills_by_rank_without_duplicates() {
        let items = catalog();
        let selected = select_diverse(&ranked(&items), 4, None);

        assert_eq!(ids(&selected), vec!["e1", "h1", "o1", "e2"]);
    }

    #[test]
    fn targeted_requests_take_top_ranked() {
        let items = catalog();
        let selected = select_diverse(&ranked(&items), 2, Some("electronics"));

        assert_eq!(ids(&selected), vec!["e1", "e2"]);
    }

    #[test]
    fn count_larger_than_input_returns_everything_once() {
        let items = catalog();
        let selected = select_diverse(&ranked(&items), 10, None);

        assert_eq!(selected.len(), items.len());
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_diverse(&[], 3, None).is_empty());
    }

    #[test]
    fn selection_is_recorded_in_recent_memory() {
        let items = catalog();
        let mut recent = RecentlyShown::default();

        let selected = select(&ranked(&items), 3, None, &mut recent);

        assert_eq!(selected.len(), 3);
        assert_eq!(recent.snapshot(), vec![ItemId::new("e1"), ItemId::new("h1"), ItemId::new("o1")]);
    }

    #[test]
    fn recent_memory_stays_bounded_over_many_selections() {
        let items = catalog();
        let mut recent = RecentlyShown::default();

        for _ in 0..50 {
            select(&ranked(&items), 4, None, &mut recent);
            assert!(recent.len() <= 5);
        }
    }
}
