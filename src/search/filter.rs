//! Catalog filtering used by the selector and the plant guide
//!
//! A record matches when its name contains the query as a case-insensitive
//! substring. The empty query matches everything.

use super::collate::locale_cmp;
use crate::catalog::PlantRecord;

/// Check whether a plant name matches a query
#[must_use]
pub fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Matching records in catalog order
///
/// This is the view the plant guide shows.
#[must_use]
pub fn filter_in_order<'a>(plants: &'a [PlantRecord], query: &str) -> Vec<&'a PlantRecord> {
    plants
        .iter()
        .filter(|plant| matches_query(&plant.name, query))
        .collect()
}

/// Matching records ordered by name
///
/// This is the view the plant selector shows. The result is always a subset
/// of `plants`, sorted with [`locale_cmp`].
///
/// # Examples
///
/// ```
/// use gardenplan::catalog::PlantRecord;
/// use gardenplan::search::filter_sorted;
///
/// let plants = vec![
///     PlantRecord::new("Basil", "🌿", "herb"),
///     PlantRecord::new("Carrot", "🥕", "root vegetable"),
///     PlantRecord::new("basilisk fern", "🌿", "fern"),
/// ];
/// let names: Vec<&str> = filter_sorted(&plants, "bas")
///     .into_iter()
///     .map(|p| p.name.as_str())
///     .collect();
/// assert_eq!(names, vec!["Basil", "basilisk fern"]);
/// ```
#[must_use]
pub fn filter_sorted<'a>(plants: &'a [PlantRecord], query: &str) -> Vec<&'a PlantRecord> {
    let mut matches = filter_in_order(plants, query);
    matches.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_plants;

    fn names<'a>(records: &[&'a PlantRecord]) -> Vec<&'a str> {
        records.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_matches_query_ignores_case() {
        assert!(matches_query("Basil", "BAS"));
        assert!(matches_query("basilisk fern", "Fern"));
        assert!(matches_query("Carrot", ""));
        assert!(!matches_query("Carrot", "bas"));
    }

    #[test]
    fn test_sorted_scenario() {
        let plants = sample_plants();
        assert_eq!(
            names(&filter_sorted(&plants, "bas")),
            vec!["Basil", "basilisk fern"]
        );
    }

    #[test]
    fn test_empty_query_returns_whole_catalog_sorted() {
        let plants = sample_plants();
        let all = filter_sorted(&plants, "");
        assert_eq!(all.len(), plants.len());
        assert!(
            all.windows(2)
                .all(|w| locale_cmp(&w[0].name, &w[1].name).is_le())
        );
    }

    #[test]
    fn test_no_matches_is_empty() {
        let plants = sample_plants();
        assert!(filter_sorted(&plants, "zzz").is_empty());
        assert!(filter_in_order(&plants, "zzz").is_empty());
    }

    #[test]
    fn test_in_order_keeps_catalog_order() {
        let plants = sample_plants();
        assert_eq!(
            names(&filter_in_order(&plants, "a")),
            vec!["Carrot", "Basil", "basilisk fern", "Kale"]
        );
    }

    #[test]
    fn test_guide_and_selector_views_share_one_predicate() {
        let plants = sample_plants();
        for query in ["", "A", "bAs", "mint", "rn"] {
            let in_order = filter_in_order(&plants, query);
            let expected: Vec<&PlantRecord> = plants
                .iter()
                .filter(|p| matches_query(&p.name, query))
                .collect();
            assert_eq!(in_order, expected, "query {query:?}");

            let mut sorted = filter_sorted(&plants, query);
            sorted.sort_by_key(|p| plants.iter().position(|q| q.name == p.name));
            assert_eq!(sorted, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_filtered_view_is_exactly_the_matching_subset() {
        let plants = sample_plants();
        for query in ["", "a", "BAS", "rot", "fern", "x"] {
            let view = filter_sorted(&plants, query);
            let expected = plants
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&query.to_lowercase()))
                .count();
            assert_eq!(view.len(), expected, "query {query:?}");
            assert!(view.iter().all(|p| matches_query(&p.name, query)));
        }
    }
}
