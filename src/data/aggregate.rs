use std::collections::BTreeMap;

use super::model::AccessDataset;

/// Mean access of one entity across all years in a view.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMean {
    pub entity: String,
    pub mean_access: f64,
    /// Number of records averaged.
    pub samples: usize,
}

/// Group the records at `indices` by entity and average their access
/// percentage. Output is sorted by mean ascending; the sort is stable over
/// alphabetical group order, so equal means stay alphabetical.
pub fn mean_by_entity(dataset: &AccessDataset, indices: &[usize]) -> Vec<EntityMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let (sum, n) = groups.entry(rec.entity.as_str()).or_insert((0.0, 0));
        *sum += rec.percent_access;
        *n += 1;
    }

    let mut means: Vec<EntityMean> = groups
        .into_iter()
        .map(|(entity, (sum, n))| EntityMean {
            entity: entity.to_string(),
            mean_access: sum / n as f64,
            samples: n,
        })
        .collect();

    means.sort_by(|a, b| a.mean_access.total_cmp(&b.mean_access));
    means
}
