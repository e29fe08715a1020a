use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::OnceCell;

use super::loader::load_csv;
use super::model::AccessDataset;
use crate::config::ColumnConfig;

// ---------------------------------------------------------------------------
// Load-once dataset cache
// ---------------------------------------------------------------------------

/// Holds the parsed dataset after the first successful load. Later calls
/// return the same `Arc` without reading the file again; the first path
/// loaded wins for the lifetime of the cache.
#[derive(Debug, Default)]
pub struct DatasetCache {
    cell: OnceCell<Arc<AccessDataset>>,
}

impl DatasetCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached dataset, loading it from `path` on first use.
    /// A failed load leaves the cache empty.
    pub fn get_or_load(&self, path: &Path, columns: &ColumnConfig) -> Result<Arc<AccessDataset>> {
        if let Some(ds) = self.cell.get() {
            log::debug!("dataset cache hit ({} records)", ds.len());
            return Ok(Arc::clone(ds));
        }
        let ds = self.cell.get_or_try_init(|| {
            let ds = load_csv(path, columns)?;
            log::info!(
                "Loaded {} records, {} entities, {} years from {}",
                ds.len(),
                ds.entities.len(),
                ds.years.len(),
                path.display()
            );
            Ok::<_, anyhow::Error>(Arc::new(ds))
        })?;
        Ok(Arc::clone(ds))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

static DATASET: DatasetCache = DatasetCache::new();

/// Process-wide memoized load of the dashboard data file.
pub fn load_dataset(path: &Path, columns: &ColumnConfig) -> Result<Arc<AccessDataset>> {
    DATASET.get_or_load(path, columns)
}
