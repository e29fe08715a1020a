use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Canonical column labels used everywhere after loading.
pub const ENTITY_COLUMN: &str = "Entity";
pub const YEAR_COLUMN: &str = "Year";
pub const PERCENT_COLUMN: &str = "PercentAccess";

// ---------------------------------------------------------------------------
// CellValue – a single cell in an extra (non-core) column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value for columns the dashboard does not chart
/// but still shows in the raw table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.2}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw CSV cell.
    pub fn guess(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// Electricity access of one entity in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Country or region name.
    pub entity: String,
    pub year: i64,
    /// Percent of the population with electricity access (0–100).
    pub percent_access: f64,
    /// Any other source columns: column_name → value.
    pub extra: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(entity: impl Into<String>, year: i64, percent_access: f64) -> Self {
        Self {
            entity: entity.into(),
            year,
            percent_access,
            extra: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// AccessDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed option lists.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessDataset {
    /// All records, in file order.
    pub records: Vec<Record>,
    /// Sorted distinct entity names.
    pub entities: Vec<String>,
    /// Sorted distinct years.
    pub years: Vec<i64>,
    /// Extra column names in source order.
    pub extra_columns: Vec<String>,
}

impl AccessDataset {
    /// Build the option lists from the loaded records.
    pub fn from_records(records: Vec<Record>, extra_columns: Vec<String>) -> Self {
        let mut entities: BTreeSet<&str> = BTreeSet::new();
        let mut years: BTreeSet<i64> = BTreeSet::new();

        for rec in &records {
            entities.insert(rec.entity.as_str());
            years.insert(rec.year);
        }
        let entities = entities.into_iter().map(str::to_string).collect();
        let years = years.into_iter().collect();

        AccessDataset {
            records,
            entities,
            years,
            extra_columns,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest year present, if any.
    pub fn latest_year(&self) -> Option<i64> {
        self.years.last().copied()
    }

    pub fn has_entity(&self, entity: &str) -> bool {
        self.entities
            .binary_search_by(|e| e.as_str().cmp(entity))
            .is_ok()
    }

    pub fn has_year(&self, year: i64) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lists_sorted_and_distinct() {
        let ds = AccessDataset::from_records(
            vec![
                Record::new("India", 2012, 80.0),
                Record::new("Brazil", 2010, 90.0),
                Record::new("India", 2010, 75.0),
                Record::new("Angola", 2011, 40.0),
            ],
            Vec::new(),
        );

        assert_eq!(ds.entities, vec!["Angola", "Brazil", "India"]);
        assert_eq!(ds.years, vec![2010, 2011, 2012]);
        assert_eq!(ds.latest_year(), Some(2012));
        assert!(ds.has_entity("Brazil"));
        assert!(!ds.has_entity("Chile"));
        assert!(ds.has_year(2011));
        assert!(!ds.has_year(1999));
        // records keep file order
        assert_eq!(ds.records[0].entity, "India");
    }

    #[test]
    fn test_empty_dataset() {
        let ds = AccessDataset::from_records(Vec::new(), Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.latest_year(), None);
        assert!(ds.entities.is_empty());
    }

    #[test]
    fn test_cell_value_guess() {
        assert_eq!(CellValue::guess("BRA"), CellValue::String("BRA".into()));
        assert_eq!(CellValue::guess("42"), CellValue::Integer(42));
        assert_eq!(CellValue::guess("4.5"), CellValue::Float(4.5));
        assert_eq!(CellValue::guess("true"), CellValue::Bool(true));
        assert_eq!(CellValue::guess("  "), CellValue::Null);
        assert_eq!(CellValue::Float(1.0 / 3.0).to_string(), "0.33");
    }
}
