use std::collections::BTreeSet;

use super::model::AccessDataset;

// ---------------------------------------------------------------------------
// Filter state: selected entities and the focus year
// ---------------------------------------------------------------------------

/// User selections driving every view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Selected entities. Empty means nothing is shown.
    pub entities: BTreeSet<String>,
    /// Year shown in the single-year comparison.
    pub focus_year: Option<i64>,
}

/// Initial selection: `defaults` restricted to entities present in the
/// dataset, focus year set to the latest year.
pub fn init_filter_state<S: AsRef<str>>(dataset: &AccessDataset, defaults: &[S]) -> FilterState {
    let entities = defaults
        .iter()
        .map(AsRef::as_ref)
        .filter(|e| dataset.has_entity(e))
        .map(str::to_string)
        .collect();

    FilterState {
        entities,
        focus_year: dataset.latest_year(),
    }
}

/// Indices of records whose entity is selected, in original order.
pub fn entity_indices(dataset: &AccessDataset, selected: &BTreeSet<String>) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selected.contains(&rec.entity))
        .map(|(i, _)| i)
        .collect()
}

/// Like [`entity_indices`] but also restricted to `year`.
pub fn year_focus_indices(
    dataset: &AccessDataset,
    selected: &BTreeSet<String>,
    year: i64,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.year == year && selected.contains(&rec.entity))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENTITIES;
    use crate::data::model::Record;

    fn dataset() -> AccessDataset {
        AccessDataset::from_records(
            vec![
                Record::new("India", 2010, 76.0),
                Record::new("Brazil", 2010, 98.0),
                Record::new("Chile", 2010, 99.0),
                Record::new("India", 2011, 67.0),
                Record::new("Brazil", 2011, 99.0),
            ],
            Vec::new(),
        )
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_selection_intersects_with_data() {
        let ds = dataset();
        let fs = init_filter_state(&ds, &DEFAULT_ENTITIES[..]);
        assert_eq!(fs.entities, set(&["Brazil", "India"]));
        assert_eq!(fs.focus_year, Some(2011));
    }

    #[test]
    fn test_entity_filter_keeps_original_order() {
        let ds = dataset();
        let idx = entity_indices(&ds, &set(&["Brazil", "India"]));
        assert_eq!(idx, vec![0, 1, 3, 4]);
        assert!(idx
            .iter()
            .all(|&i| ds.records[i].entity != "Chile"));
    }

    #[test]
    fn test_empty_selection_is_empty_view() {
        let ds = dataset();
        assert!(entity_indices(&ds, &BTreeSet::new()).is_empty());
        assert!(year_focus_indices(&ds, &BTreeSet::new(), 2010).is_empty());
    }

    #[test]
    fn test_unknown_entity_matches_nothing() {
        let ds = dataset();
        assert!(entity_indices(&ds, &set(&["Atlantis"])).is_empty());
    }

    #[test]
    fn test_year_focus_matches_both_conditions() {
        let ds = dataset();
        let sel = set(&["Brazil", "India"]);
        let idx = year_focus_indices(&ds, &sel, 2010);
        assert_eq!(idx, vec![0, 1]);
        for i in idx {
            assert_eq!(ds.records[i].year, 2010);
            assert!(sel.contains(&ds.records[i].entity));
        }
        assert!(year_focus_indices(&ds, &sel, 1990).is_empty());
    }
}
