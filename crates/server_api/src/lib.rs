use std::sync::OnceLock;

use shared::{
    domain::{City, Selection},
    protocol::SubmissionResult,
};
use tracing::{debug, info};

const CITY_NAMES: [&str; 20] = [
    "New York",
    "London",
    "Tokyo",
    "Paris",
    "Sydney",
    "Berlin",
    "Rome",
    "Moscow",
    "Dubai",
    "Singapore",
    "Barcelona",
    "Amsterdam",
    "Vienna",
    "Prague",
    "Seoul",
    "Bangkok",
    "Istanbul",
    "Rio de Janeiro",
    "Cape Town",
    "Toronto",
];

pub fn index_route() -> &'static str {
    "/"
}

pub fn toggle_route() -> &'static str {
    "/toggle"
}

pub fn cities_route() -> &'static str {
    "/api/cities"
}

pub fn selection_route() -> &'static str {
    "/api/selection"
}

/// The fixed catalog, in display order. Built once per process.
pub fn list_cities() -> &'static [City] {
    static CATALOG: OnceLock<Vec<City>> = OnceLock::new();
    CATALOG.get_or_init(|| CITY_NAMES.iter().copied().map(City::from).collect())
}

/// Applies one toggle event to the page's selection.
///
/// An absent or empty `city` is a no-op. Names are not checked against the
/// catalog.
pub fn toggle_city(selection: &Selection, city: Option<City>) -> Selection {
    match city.filter(|c| !c.as_str().is_empty()) {
        Some(city) => {
            debug!(%city, was_selected = selection.contains(&city), "toggling city");
            selection.toggled(city)
        }
        None => selection.clone(),
    }
}

/// Counts what was submitted. Nothing is stored.
pub fn submit_selection(selected_cities: &[City]) -> SubmissionResult {
    let count = selected_cities.len();
    info!(count, "selection submitted");
    SubmissionResult {
        message: format!("Saved {count} cities"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Vec<City> {
        names.iter().copied().map(City::from).collect()
    }

    #[test]
    fn catalog_has_twenty_cities_in_stable_order() {
        let first = list_cities();
        let second = list_cities();
        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert_eq!(first[0].as_str(), "New York");
        assert_eq!(first[17].as_str(), "Rio de Janeiro");
        assert_eq!(first[19].as_str(), "Toronto");
    }

    #[test]
    fn submitting_nothing_saves_zero() {
        assert_eq!(submit_selection(&[]).message, "Saved 0 cities");
    }

    #[test]
    fn submitting_three_cities_saves_three() {
        let result = submit_selection(&cities(&["Tokyo", "Paris", "Rome"]));
        assert_eq!(result.message, "Saved 3 cities");
    }

    #[test]
    fn submission_counts_duplicates_and_unknown_names() {
        let result = submit_selection(&cities(&["Rome", "Rome", "Atlantis"]));
        assert_eq!(result.message, "Saved 3 cities");
    }

    #[test]
    fn submitted_count_equals_distinct_cities_toggled_on() {
        let mut selection = Selection::new();
        for name in ["London", "Tokyo", "London", "Seoul", "Paris", "Seoul", "London"] {
            selection = toggle_city(&selection, Some(City::from(name)));
        }
        // London x3 on, Tokyo on, Seoul off, Paris on
        let result = submit_selection(selection.as_slice());
        assert_eq!(result.message, "Saved 3 cities");
    }

    #[test]
    fn empty_or_missing_toggle_is_noop() {
        let selection = Selection::new().toggled("Vienna".into());
        assert_eq!(toggle_city(&selection, None), selection);
        assert_eq!(toggle_city(&selection, Some(City::from(""))), selection);
    }

    #[test]
    fn whitespace_only_city_is_toggled_like_any_name() {
        let selection = Selection::new().toggled("Vienna".into());
        let next = toggle_city(&selection, Some(City::from("  ")));
        assert_eq!(next.as_slice(), &[City::from("Vienna"), City::from("  ")]);
        assert_eq!(toggle_city(&next, Some(City::from("  "))), selection);
    }

    #[test]
    fn every_catalog_city_can_be_toggled_on() {
        let selection = list_cities()
            .iter()
            .cloned()
            .fold(Selection::new(), |acc, city| toggle_city(&acc, Some(city)));
        assert_eq!(selection.as_slice(), list_cities());
    }
}
