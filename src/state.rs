use std::sync::Arc;

use crate::assets::LogoAsset;
use crate::color::ColorMap;
use crate::data::aggregate::{mean_by_entity, EntityMean};
use crate::data::filter::{entity_indices, init_filter_state, year_focus_indices, FilterState};
use crate::data::model::AccessDataset;

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Every row set the charts draw from, recomputed from the filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardViews {
    /// Records of the selected entities, all years (line chart, raw table).
    pub entity_rows: Vec<usize>,
    /// Records of the selected entities in the focus year (strip chart).
    pub focus_rows: Vec<usize>,
    /// Per-entity mean over `entity_rows`, ascending (bar chart).
    pub means: Vec<EntityMean>,
}

impl DashboardViews {
    pub fn compute(dataset: &AccessDataset, filters: &FilterState) -> Self {
        let entity_rows = entity_indices(dataset, &filters.entities);
        let focus_rows = match filters.focus_year {
            Some(year) => year_focus_indices(dataset, &filters.entities, year),
            None => Vec::new(),
        };
        let means = mean_by_entity(dataset, &entity_rows);
        DashboardViews {
            entity_rows,
            focus_rows,
            means,
        }
    }
}

/// Display text for a percentage, e.g. `92.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Evolution,
    Average,
    YearFocus,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Evolution,
        DashboardTab::Average,
        DashboardTab::YearFocus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Evolution => "Evolution",
            DashboardTab::Average => "Average per Entity",
            DashboardTab::YearFocus => "Focus on a Year",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared with the load-once cache.
    pub dataset: Arc<AccessDataset>,

    /// Entity and year selections.
    pub filters: FilterState,

    /// Views derived from `filters` (cached until the next change).
    pub views: DashboardViews,

    /// Entity colours shared by all charts.
    pub color_map: ColorMap,

    /// Sidebar branding image or its warning.
    pub logo: LogoAsset,

    /// Text narrowing the sidebar entity list.
    pub entity_search: String,

    pub active_tab: DashboardTab,

    default_entities: Vec<String>,
}

impl AppState {
    /// Build the state for a loaded dataset with the default selection.
    pub fn new(dataset: Arc<AccessDataset>, default_entities: Vec<String>, logo: LogoAsset) -> Self {
        let filters = init_filter_state(&dataset, default_entities.as_slice());
        let views = DashboardViews::compute(&dataset, &filters);
        let color_map = ColorMap::new(&dataset.entities);
        Self {
            dataset,
            filters,
            views,
            color_map,
            logo,
            entity_search: String::new(),
            active_tab: DashboardTab::default(),
            default_entities,
        }
    }

    /// Recompute the derived views after a filter change.
    pub fn refilter(&mut self) {
        self.views = DashboardViews::compute(&self.dataset, &self.filters);
        log::debug!(
            "{} entities selected, {} rows visible, {} in focus year {:?}",
            self.filters.entities.len(),
            self.views.entity_rows.len(),
            self.views.focus_rows.len(),
            self.filters.focus_year
        );
    }

    /// Toggle one entity. Names not present in the dataset are ignored.
    pub fn toggle_entity(&mut self, entity: &str) {
        if !self.dataset.has_entity(entity) {
            return;
        }
        if !self.filters.entities.remove(entity) {
            self.filters.entities.insert(entity.to_string());
        }
        self.refilter();
    }

    /// Select every entity.
    pub fn select_all(&mut self) {
        self.filters.entities = self.dataset.entities.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every entity.
    pub fn select_none(&mut self) {
        self.filters.entities.clear();
        self.refilter();
    }

    /// Back to the default entities and the latest year.
    pub fn reset_defaults(&mut self) {
        self.filters = init_filter_state(&self.dataset, self.default_entities.as_slice());
        self.refilter();
    }

    /// Change the focus year. Years not present in the dataset are ignored.
    pub fn set_focus_year(&mut self, year: i64) {
        if self.dataset.has_year(year) && self.filters.focus_year != Some(year) {
            self.filters.focus_year = Some(year);
            self.refilter();
        }
    }

    /// Entities matching the sidebar search, case-insensitive.
    pub fn searchable_entities(&self) -> Vec<&str> {
        let needle = self.entity_search.trim().to_lowercase();
        self.dataset
            .entities
            .iter()
            .map(String::as_str)
            .filter(|e| needle.is_empty() || e.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENTITIES;
    use crate::data::model::Record;

    fn scenario() -> Arc<AccessDataset> {
        Arc::new(AccessDataset::from_records(
            vec![
                Record::new("Brazil", 2010, 90.0),
                Record::new("Brazil", 2011, 95.0),
                Record::new("Angola", 2010, 40.0),
            ],
            Vec::new(),
        ))
    }

    fn state() -> AppState {
        AppState::new(
            scenario(),
            DEFAULT_ENTITIES.iter().map(|s| s.to_string()).collect(),
            LogoAsset::Missing {
                warning: "Image 'images.png' not found.".into(),
            },
        )
    }

    #[test]
    fn test_scenario_views() {
        let mut st = state();
        assert_eq!(st.filters.focus_year, Some(2011));
        st.set_focus_year(2010);

        let ds = st.dataset.clone();
        assert_eq!(st.views.entity_rows.len(), 3);
        assert_eq!(
            st.views.means,
            vec![
                EntityMean { entity: "Angola".into(), mean_access: 40.0, samples: 1 },
                EntityMean { entity: "Brazil".into(), mean_access: 92.5, samples: 2 },
            ]
        );
        let focus: Vec<(&str, f64)> = st
            .views
            .focus_rows
            .iter()
            .map(|&i| (ds.records[i].entity.as_str(), ds.records[i].percent_access))
            .collect();
        assert_eq!(focus, vec![("Brazil", 90.0), ("Angola", 40.0)]);
    }

    #[test]
    fn test_empty_selection_empties_every_view() {
        let mut st = state();
        st.select_none();
        assert_eq!(st.views, DashboardViews::default());
    }

    #[test]
    fn test_missing_logo_does_not_block_views() {
        let st = state();
        assert!(matches!(st.logo, LogoAsset::Missing { .. }));
        assert!(!st.views.entity_rows.is_empty());
        assert!(!st.views.means.is_empty());
    }

    #[test]
    fn test_selection_constrained_to_options() {
        let mut st = state();
        st.toggle_entity("Atlantis");
        assert!(!st.filters.entities.contains("Atlantis"));

        st.set_focus_year(1850);
        assert_eq!(st.filters.focus_year, Some(2011));

        st.toggle_entity("Brazil");
        assert_eq!(st.views.entity_rows, vec![2]);
        st.toggle_entity("Brazil");
        assert_eq!(st.views.entity_rows, vec![0, 1, 2]);
    }

    #[test]
    fn test_select_all_and_reset() {
        let mut st = state();
        st.select_none();
        st.set_focus_year(2010);
        st.select_all();
        assert_eq!(st.filters.entities.len(), 2);

        st.reset_defaults();
        assert_eq!(st.filters.focus_year, Some(2011));
        assert_eq!(st.views.focus_rows, vec![1]);
    }

    #[test]
    fn test_search_narrows_options_only() {
        let mut st = state();
        st.entity_search = "bra".into();
        assert_eq!(st.searchable_entities(), vec!["Brazil"]);
        assert_eq!(st.filters.entities.len(), 2);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(92.5), "92.5%");
        assert_eq!(format_percent(40.04), "40.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
