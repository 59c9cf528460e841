use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable city. Identity is the exact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(pub String);

impl City {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for City {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for City {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The cities toggled on in one page view.
///
/// Members are unique and kept in the order they were first added. The order
/// only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    cities: Vec<City>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, city: &City) -> bool {
        self.cities.contains(city)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }

    /// Removes `city` if present, otherwise appends it.
    pub fn toggle(&mut self, city: City) {
        if let Some(index) = self.cities.iter().position(|c| *c == city) {
            self.cities.remove(index);
        } else {
            self.cities.push(city);
        }
    }

    /// Reducer form of [`Selection::toggle`]; `self` is left untouched.
    pub fn toggled(&self, city: City) -> Self {
        let mut next = self.clone();
        next.toggle(city);
        next
    }
}

/// Rebuilds a selection from a flat list; later duplicates are dropped.
impl FromIterator<City> for Selection {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut cities: Vec<City> = Vec::new();
        for city in iter {
            if !cities.contains(&city) {
                cities.push(city);
            }
        }
        Self { cities }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new();
        selection.toggle(City::from("Tokyo"));
        assert!(selection.contains(&City::from("Tokyo")));
        selection.toggle(City::from("Tokyo"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_parity_decides_membership() {
        let london = City::from("London");
        for count in 0..7 {
            let mut selection = Selection::new();
            for _ in 0..count {
                selection.toggle(london.clone());
            }
            let occurrences = selection.iter().filter(|c| **c == london).count();
            assert_eq!(occurrences, count % 2, "after {count} toggles");
        }
    }

    #[test]
    fn london_on_off_on_appears_once() {
        let selection = Selection::new()
            .toggled("London".into())
            .toggled("London".into())
            .toggled("London".into());
        assert_eq!(selection.as_slice(), &[City::from("London")]);
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let before = Selection::new().toggled("Paris".into());
        let after = before.toggled("Rome".into());
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn keeps_insertion_order_after_removal() {
        let selection = Selection::new()
            .toggled("Tokyo".into())
            .toggled("Paris".into())
            .toggled("Rome".into())
            .toggled("Paris".into())
            .toggled("Paris".into());
        let names: Vec<&str> = selection.iter().map(City::as_str).collect();
        assert_eq!(names, vec!["Tokyo", "Rome", "Paris"]);
    }

    #[test]
    fn from_iter_drops_duplicates_keeping_first() {
        let selection: Selection = ["Rome", "Tokyo", "Rome"]
            .into_iter()
            .map(City::from)
            .collect();
        let names: Vec<&str> = selection.iter().map(City::as_str).collect();
        assert_eq!(names, vec!["Rome", "Tokyo"]);
    }

    #[test]
    fn toggle_accepts_names_outside_any_catalog() {
        let selection = Selection::new().toggled("Atlantis".into());
        assert!(selection.contains(&City::from("Atlantis")));
    }
}
