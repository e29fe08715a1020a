use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{AccessDataset, CellValue, Record, ENTITY_COLUMN};
use crate::config::ColumnConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("CSV missing required column '{0}'")]
    MissingColumn(String),

    /// `row` is the 1-based data row (header excluded).
    #[error("CSV row {row}, column '{column}': '{value}' is not a valid number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the electricity-access table from a CSV file.
///
/// Layout: header row with column names. The country column
/// (`columns.entity_source`) is renamed to `Entity`; the year and
/// percentage columns are parsed as numbers. All other columns are kept as
/// extra cells for the raw table.
pub fn load_csv(path: &Path, columns: &ColumnConfig) -> Result<AccessDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening data file {}", path.display()))?;
    read_csv(file, columns).with_context(|| format!("loading {}", path.display()))
}

/// Parse CSV from any reader. Split out of [`load_csv`] for in-memory tests.
pub fn read_csv<R: std::io::Read>(input: R, columns: &ColumnConfig) -> Result<AccessDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let source_headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let renames = [(columns.entity_source.as_str(), ENTITY_COLUMN)];
    let headers = rename_columns(source_headers, &renames);

    let entity_idx = column_index(&headers, ENTITY_COLUMN)?;
    let year_idx = column_index(&headers, &columns.year)?;
    let pct_idx = column_index(&headers, &columns.percent_access)?;

    let extra_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != entity_idx && *i != year_idx && *i != pct_idx)
        .map(|(i, h)| (i, h.clone()))
        .collect();

    let mut records = Vec::new();
    let mut out_of_range = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let row = row_no + 1;
        let record = result.with_context(|| format!("CSV row {row}"))?;

        let entity = record.get(entity_idx).unwrap_or("").trim().to_string();
        let year = parse_year(record.get(year_idx).unwrap_or(""), row, &columns.year)?;
        let percent_access =
            parse_percent(record.get(pct_idx).unwrap_or(""), row, &columns.percent_access)?;

        if !(0.0..=100.0).contains(&percent_access) {
            out_of_range += 1;
        }

        let extra: BTreeMap<String, CellValue> = extra_columns
            .iter()
            .map(|(idx, name)| (name.clone(), CellValue::guess(record.get(*idx).unwrap_or(""))))
            .collect();

        records.push(Record {
            entity,
            year,
            percent_access,
            extra,
        });
    }

    if out_of_range > 0 {
        log::warn!("{out_of_range} rows have an access percentage outside 0–100; kept as-is");
    }

    let extra_names = extra_columns.into_iter().map(|(_, name)| name).collect();
    Ok(AccessDataset::from_records(records, extra_names))
}

/// Apply a `(from, to)` rename table to a header row. Renames whose source
/// column is absent are ignored.
pub fn rename_columns(headers: Vec<String>, renames: &[(&str, &str)]) -> Vec<String> {
    headers
        .into_iter()
        .map(|h| {
            renames
                .iter()
                .find(|(from, _)| *from == h)
                .map(|(_, to)| to.to_string())
                .unwrap_or(h)
        })
        .collect()
}

fn column_index(headers: &[String], name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn invalid(row: usize, column: &str, value: &str) -> DataError {
    DataError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Years are integers; an integral float such as `2010.0` is accepted too.
fn parse_year(s: &str, row: usize, column: &str) -> Result<i64, DataError> {
    let tok = s.trim();
    if let Ok(y) = tok.parse::<i64>() {
        return Ok(y);
    }
    match tok.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(invalid(row, column, tok)),
    }
}

fn parse_percent(s: &str, row: usize, column: &str) -> Result<f64, DataError> {
    let tok = s.trim();
    tok.parse::<f64>().map_err(|_| invalid(row, column, tok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cols() -> ColumnConfig {
        ColumnConfig::default()
    }

    #[test]
    fn test_renames_country_column_to_entity() {
        let csv = "Pais,Codigo,Ano,Percentual_Acesso\n\
                   Brazil,BRA,2010,90.0\n\
                   Brazil,BRA,2011,95.0\n\
                   Angola,AGO,2010,40.0\n";
        let ds = read_csv(csv.as_bytes(), &cols()).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[0], {
            let mut r = Record::new("Brazil", 2010, 90.0);
            r.extra.insert("Codigo".into(), CellValue::String("BRA".into()));
            r
        });
        assert_eq!(ds.records[2].entity, "Angola");
        assert_eq!(ds.extra_columns, vec!["Codigo"]);
        assert!(!ds.extra_columns.iter().any(|c| c == "Pais"));
        assert_eq!(ds.entities, vec!["Angola", "Brazil"]);
        assert_eq!(ds.years, vec![2010, 2011]);
    }

    #[test]
    fn test_already_renamed_file_loads() {
        let csv = "Entity,Ano,Percentual_Acesso\nIndia,2020,99.0\n";
        let ds = read_csv(csv.as_bytes(), &cols()).unwrap();
        assert_eq!(ds.records, vec![Record::new("India", 2020, 99.0)]);
        assert!(ds.extra_columns.is_empty());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "Pais,Ano\nBrazil,2010\n";
        let err = read_csv(csv.as_bytes(), &cols()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::MissingColumn("Percentual_Acesso".into()))
        );
    }

    #[test]
    fn test_invalid_number_reports_row() {
        let csv = "Pais,Ano,Percentual_Acesso\nBrazil,2010,90\nAngola,2010,n/a\n";
        let err = read_csv(csv.as_bytes(), &cols()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DataError>(),
            Some(&DataError::InvalidNumber {
                row: 2,
                column: "Percentual_Acesso".into(),
                value: "n/a".into(),
            })
        );
    }

    #[test]
    fn test_float_year_accepted_when_integral() {
        let csv = "Pais,Ano,Percentual_Acesso\nBrazil,2010.0,90\n";
        let ds = read_csv(csv.as_bytes(), &cols()).unwrap();
        assert_eq!(ds.records[0].year, 2010);

        let csv = "Pais,Ano,Percentual_Acesso\nBrazil,2010.5,90\n";
        assert!(read_csv(csv.as_bytes(), &cols()).is_err());
    }

    #[test]
    fn test_out_of_range_percent_passes_through() {
        let csv = "Pais,Ano,Percentual_Acesso\nBrazil,2010,104.5\n";
        let ds = read_csv(csv.as_bytes(), &cols()).unwrap();
        assert_eq!(ds.records[0].percent_access, 104.5);
    }

    #[test]
    fn test_rename_columns_ignores_absent_source() {
        let headers = vec!["Entity".to_string(), "Ano".to_string()];
        assert_eq!(rename_columns(headers.clone(), &[("Pais", "Entity")]), headers);
    }

    #[test]
    fn test_load_csv_from_disk_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Pais,Ano,Percentual_Acesso").unwrap();
        writeln!(f, "South Africa,2015,86.0").unwrap();
        drop(f);

        let ds = load_csv(&path, &cols()).unwrap();
        assert_eq!(ds.records, vec![Record::new("South Africa", 2015, 86.0)]);

        let missing = dir.path().join("nope.csv");
        assert!(load_csv(&missing, &cols()).is_err());
    }
}
