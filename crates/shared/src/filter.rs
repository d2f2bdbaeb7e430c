use std::collections::HashMap;

use crate::models::{is_canonical_rama, GroupRecord, RAMA_ORDER};

/// Sentinel city meaning "no city filter". The empty string is
/// equivalent.
pub const ALL_CITIES: &str = "Todas";

/// The three filter dimensions of the directory view.
///
/// `active_ramas` holds one entry per branch tag observed in the loaded
/// data (restricted to the official vocabulary); a `true` value means
/// the filter is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub selected_city: String,
    pub active_ramas: HashMap<String, bool>,
}

impl FilterCriteria {
    /// Criteria at session start: no text, no city, every branch tag
    /// seen in `groups` present and inactive. Tags outside the official
    /// vocabulary never make it into the filter map.
    pub fn for_groups(groups: &[GroupRecord]) -> Self {
        let mut active_ramas = HashMap::new();
        for group in groups {
            for rama in &group.ramas {
                if is_canonical_rama(rama) {
                    active_ramas.entry(rama.clone()).or_insert(false);
                }
            }
        }
        Self {
            search_term: String::new(),
            selected_city: String::new(),
            active_ramas,
        }
    }

    pub fn has_active_ramas(&self) -> bool {
        self.active_ramas.values().any(|active| *active)
    }

    pub fn active_rama_count(&self) -> usize {
        self.active_ramas.values().filter(|active| **active).count()
    }

    /// Flip one branch filter. Tags not present in the map (never
    /// observed in the data) are ignored.
    pub fn toggle_rama(&mut self, rama: &str) {
        if let Some(active) = self.active_ramas.get_mut(rama) {
            *active = !*active;
        }
    }

    pub fn clear_ramas(&mut self) {
        for active in self.active_ramas.values_mut() {
            *active = false;
        }
    }

    /// Reset all three dimensions. The branch keys survive (they come
    /// from the immutable data set), only the values go inactive.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_city.clear();
        self.clear_ramas();
    }

    pub fn is_default(&self) -> bool {
        self.search_term.is_empty() && self.selected_city.is_empty() && !self.has_active_ramas()
    }
}

fn matches_search(group: &GroupRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    group.nombre.to_lowercase().contains(&term) || group.id.to_string().contains(&term)
}

fn matches_city(group: &GroupRecord, city: &str) -> bool {
    city.is_empty() || city == ALL_CITIES || group.ciudad == city
}

fn matches_ramas(group: &GroupRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.has_active_ramas() {
        return true;
    }
    // OR across active tags; tags the record carries that are missing
    // from the map simply never match.
    group
        .ramas
        .iter()
        .any(|rama| criteria.active_ramas.get(rama).copied().unwrap_or(false))
}

/// The visible subset of `groups` under `criteria`: the AND of the
/// text, city and branch predicates. Pure, and preserves load order —
/// filtering narrows but never reorders.
pub fn compute_visible(groups: &[GroupRecord], criteria: &FilterCriteria) -> Vec<GroupRecord> {
    groups
        .iter()
        .filter(|group| {
            matches_search(group, &criteria.search_term)
                && matches_city(group, &criteria.selected_city)
                && matches_ramas(group, criteria)
        })
        .cloned()
        .collect()
}

/// City choices for the UI: the "all cities" sentinel first, then the
/// distinct cities present in the data, sorted lexicographically.
pub fn city_options(groups: &[GroupRecord]) -> Vec<String> {
    let mut cities: Vec<String> = groups.iter().map(|g| g.ciudad.clone()).collect();
    cities.sort();
    cities.dedup();
    let mut options = vec![ALL_CITIES.to_string()];
    options.extend(cities);
    options
}

/// Branch choices for the UI, in official display order, restricted to
/// tags actually present in the data.
pub fn rama_options(groups: &[GroupRecord]) -> Vec<String> {
    RAMA_ORDER
        .iter()
        .copied()
        .filter(|rama| {
            groups
                .iter()
                .any(|g| g.ramas.iter().any(|r| r.as_str() == *rama))
        })
        .map(str::to_string)
        .collect()
}
