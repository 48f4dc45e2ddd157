//! In-memory filters over fetched tables
//!
//! Every filter borrows from the fetched rows and preserves their order
//! unless it sorts explicitly. Filters are independent and compose by
//! applying one after another.

use std::collections::BTreeSet;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::month::MonthKey;
use crate::records::{ArtForm, Destination, TourismRecord};

/// Selector state; `All` disables the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Label shown for the `All` sentinel in selectors
    pub const ALL_LABEL: &'static str = "All";

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => Self::ALL_LABEL,
            Selection::Only(value) => value,
        }
    }
}

/// Rows whose key equals the selection, in their original order
pub fn filter_eq<'a, T, F>(rows: &'a [T], key: F, selection: &Selection) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    rows.iter().filter(|row| selection.matches(key(*row))).collect()
}

/// Sorted distinct values of a key, as listed after "All" in a selector
pub fn distinct_sorted<T, F>(rows: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    rows.iter()
        .map(|row| key(row))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct values of a key in first-seen order
pub fn distinct_in_order<T, F>(rows: &[T], key: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut seen = AHashSet::new();
    rows.iter()
        .map(|row| key(row))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Rows whose `value` is strictly below `cutoff`, sorted descending by
/// `rank` and truncated to `limit`. Ties keep their original order.
pub fn below_threshold_ranked<'a, T, V, R>(
    rows: &'a [T],
    value: V,
    cutoff: f64,
    rank: R,
    limit: usize,
) -> Vec<&'a T>
where
    V: Fn(&T) -> f64,
    R: Fn(&T) -> f64,
{
    let mut selected: Vec<&T> = rows.iter().filter(|row| value(*row) < cutoff).collect();
    selected.sort_by(|a, b| rank(*b).total_cmp(&rank(*a)));
    selected.truncate(limit);
    selected
}

/// Threshold and display limit for the hidden gems list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiddenGemsRule {
    /// Destinations with fewer annual visitors than this qualify
    pub visitor_threshold: i64,
    pub limit: usize,
}

impl Default for HiddenGemsRule {
    fn default() -> Self {
        Self {
            visitor_threshold: 10_000,
            limit: 5,
        }
    }
}

impl HiddenGemsRule {
    /// Lesser-known destinations ranked by significance
    pub fn apply<'a>(&self, destinations: &'a [Destination]) -> Vec<&'a Destination> {
        below_threshold_ranked(
            destinations,
            |d| d.annual_visitors as f64,
            self.visitor_threshold as f64,
            |d| d.significance,
            self.limit,
        )
    }
}

/// State and category selectors of the art forms gallery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtFormFilter {
    pub state: Selection,
    pub category: Selection,
}

impl ArtFormFilter {
    pub fn apply<'a>(&self, art_forms: &'a [ArtForm]) -> Vec<&'a ArtForm> {
        art_forms
            .iter()
            .filter(|row| self.state.matches(&row.state))
            .filter(|row| self.category.matches(&row.category))
            .collect()
    }
}

/// Rows for one site, sorted into month order
pub fn site_series<'a>(records: &'a [TourismRecord], site: &str) -> Vec<&'a TourismRecord> {
    let mut rows = filter_eq(records, |r| r.site_name.as_str(), &Selection::Only(site.to_string()));
    rows.sort_by_key(|r| MonthKey::parse(&r.month));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art_form(name: &str, state: &str, category: &str) -> ArtForm {
        ArtForm {
            art_form: name.into(),
            state: state.into(),
            category: category.into(),
            origin: String::new(),
            materials: String::new(),
            description: String::new(),
            significance: String::new(),
            image_path: None,
            video_url: None,
        }
    }

    fn destination(name: &str, visitors: i64, significance: f64) -> Destination {
        Destination {
            name: name.into(),
            state: "Karnataka".into(),
            category: "Temple".into(),
            latitude: 15.3,
            longitude: 76.4,
            annual_visitors: visitors,
            significance,
            unique_aspect: String::new(),
            best_season: String::new(),
            image_path: None,
        }
    }

    fn sample_art_forms() -> Vec<ArtForm> {
        vec![
            art_form("Blue Pottery", "Rajasthan", "Craft"),
            art_form("Kathakali", "Kerala", "Dance"),
            art_form("Phad", "Rajasthan", "Painting"),
        ]
    }

    #[test]
    fn test_all_selection_returns_rows_unchanged() {
        let rows = sample_art_forms();
        let filtered = filter_eq(&rows, |r| r.state.as_str(), &Selection::All);
        assert_eq!(filtered.len(), rows.len());
        for (kept, original) in filtered.iter().zip(&rows) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_state_selection_keeps_matching_rows_in_order() {
        let rows = sample_art_forms();
        let filtered = filter_eq(&rows, |r| r.state.as_str(), &Selection::Only("Rajasthan".into()));
        let names: Vec<_> = filtered.iter().map(|r| r.art_form.as_str()).collect();
        assert_eq!(names, vec!["Blue Pottery", "Phad"]);
        assert!(filtered.iter().all(|r| r.state == "Rajasthan"));
    }

    #[test]
    fn test_art_form_filters_compose() {
        let rows = sample_art_forms();
        let filter = ArtFormFilter {
            state: Selection::Only("Rajasthan".into()),
            category: Selection::Only("Painting".into()),
        };
        let filtered = filter.apply(&rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].art_form, "Phad");

        assert_eq!(ArtFormFilter::default().apply(&rows).len(), 3);
    }

    #[test]
    fn test_selector_options() {
        let rows = sample_art_forms();
        assert_eq!(distinct_sorted(&rows, |r| r.state.as_str()), vec!["Kerala", "Rajasthan"]);
        assert_eq!(distinct_in_order(&rows, |r| r.state.as_str()), vec!["Rajasthan", "Kerala"]);
        assert_eq!(Selection::All.label(), "All");
    }

    #[test]
    fn test_hidden_gems_scenario() {
        let rows = vec![
            destination("Badami", 500, 7.5),
            destination("Hampi", 20_000, 9.8),
            destination("Pattadakal", 3000, 8.9),
        ];
        let gems = HiddenGemsRule::default().apply(&rows);
        let names: Vec<_> = gems.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Pattadakal", "Badami"]);
    }

    #[test]
    fn test_hidden_gems_properties() {
        let rows: Vec<_> = (0..40)
            .map(|i| destination(&format!("site-{i}"), (i * 397) % 25_000, ((i * 7) % 11) as f64))
            .collect();
        let rule = HiddenGemsRule::default();
        let gems = rule.apply(&rows);

        assert!(gems.len() <= 5);
        assert!(gems.iter().all(|d| d.annual_visitors < rule.visitor_threshold));
        assert!(gems.windows(2).all(|w| w[0].significance >= w[1].significance));
    }

    #[test]
    fn test_site_series_in_month_order() {
        let months = [
            "Mar", "Jan", "Dec", "Feb", "Jun", "Apr", "May", "Aug", "Jul", "Oct", "Sep", "Nov",
        ];
        let mut records: Vec<_> = months
            .iter()
            .enumerate()
            .map(|(i, m)| TourismRecord {
                site_name: "Konark".into(),
                month: (*m).into(),
                visitor_count: i as i64,
            })
            .collect();
        records.insert(4, TourismRecord {
            site_name: "Khajuraho".into(),
            month: "Jan".into(),
            visitor_count: 99,
        });

        let series = site_series(&records, "Konark");
        assert_eq!(series.len(), 12);
        let keys: Vec<_> = series.iter().map(|r| MonthKey::parse(&r.month)).collect();
        assert_eq!(keys, (1..=12).map(MonthKey::Calendar).collect::<Vec<_>>());
    }
}
