use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Entities selected when the dashboard first opens.
pub const DEFAULT_ENTITIES: [&str; 5] = ["Brazil", "Angola", "South Africa", "United States", "India"];

/// Source column names of the cleaned CSV.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    /// Country column, renamed to `Entity` on load.
    pub entity_source: String,
    pub year: String,
    pub percent_access: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            entity_source: "Pais".to_string(),
            year: "Ano".to_string(),
            percent_access: "Percentual_Acesso".to_string(),
        }
    }
}

/// Everything the dashboard needs to start. Paths are relative to the
/// working directory, the data file is expected next to the program.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub sidebar_width: f32,
    pub data_file: PathBuf,
    pub logo_file: PathBuf,
    pub columns: ColumnConfig,
    pub default_entities: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_title: "Electricity Access Dashboard".to_string(),
            inner_size: [1280.0, 820.0],
            min_inner_size: [640.0, 420.0],
            sidebar_width: 240.0,
            data_file: PathBuf::from("acesso_eletricidade_limpo.csv"),
            logo_file: PathBuf::from("images.png"),
            columns: ColumnConfig::default(),
            default_entities: DEFAULT_ENTITIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
