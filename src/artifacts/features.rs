//! Feature Tables
//!
//! CSV-backed, read-only tables of driving-behavior features.
//! Loaded once at startup and never mutated afterwards.
//!
//! Two layouts share this type:
//! - the raw table, which carries an `insured_no` identifier column plus
//!   the numeric feature columns, and
//! - the scaled table, which carries exactly the classifier's feature
//!   columns and no identifier.

use super::ArtifactError;
use std::io::Read;
use std::path::Path;

/// Name of the identifier column in the raw feature table
pub const IDENTIFIER_COLUMN: &str = "insured_no";

/// Average speed column (km/h)
pub const AVG_SPEED: &str = "avg_speed";

/// Average total acceleration column
pub const AVG_ACC_TOTAL: &str = "avg_acc_total";

/// RPM standard deviation column
pub const STD_RPM: &str = "std_rpm";

/// Binary night-driving indicator column (1 night, 0 day)
pub const DAY_NIGHT_NIGHT: &str = "day_night_night";

/// An ordered, immutable table of numeric feature rows
#[derive(Debug, Clone)]
pub struct FeatureTable {
    /// Column names, excluding the identifier column
    feature_names: Vec<String>,
    /// Identifier per row, present only when the CSV has an `insured_no` column
    insured_nos: Option<Vec<i64>>,
    /// Feature values per row, aligned with `feature_names`
    rows: Vec<Vec<f64>>,
}

impl FeatureTable {
    /// Load a table from a CSV file
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let file = std::fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_reader(file)
    }

    /// Load a table from a CSV string (useful for testing)
    pub fn from_csv_str(data: &str) -> Result<Self, ArtifactError> {
        Self::from_reader(data.as_bytes())
    }

    /// Load a table from any CSV reader
    pub fn from_reader(reader: impl Read) -> Result<Self, ArtifactError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();

        let identifier_index = headers.iter().position(|h| h == IDENTIFIER_COLUMN);

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != identifier_index)
            .map(|(_, name)| name.to_string())
            .collect();

        let mut insured_nos = identifier_index.map(|_| Vec::new());
        let mut rows = Vec::new();

        for (line_num, result) in csv_reader.records().enumerate() {
            // Header occupies line 1
            let line = line_num + 2;
            let record = result?;

            let mut row = Vec::with_capacity(feature_names.len());
            for (idx, field) in record.iter().enumerate() {
                if Some(idx) == identifier_index {
                    let id = field.parse::<i64>().map_err(|_| ArtifactError::BadValue {
                        line,
                        column: IDENTIFIER_COLUMN.to_string(),
                        value: field.to_string(),
                    })?;
                    if let Some(ids) = insured_nos.as_mut() {
                        ids.push(id);
                    }
                } else {
                    let value = field.parse::<f64>().map_err(|_| ArtifactError::BadValue {
                        line,
                        column: headers
                            .get(idx)
                            .unwrap_or("<unknown>")
                            .to_string(),
                        value: field.to_string(),
                    })?;
                    row.push(value);
                }
            }

            if row.len() != feature_names.len() {
                return Err(ArtifactError::RaggedRow {
                    line,
                    expected: feature_names.len(),
                    found: row.len(),
                });
            }

            rows.push(row);
        }

        Ok(Self {
            feature_names,
            insured_nos,
            rows,
        })
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, excluding the identifier column
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Whether the table carries an identifier column
    pub fn has_identifiers(&self) -> bool {
        self.insured_nos.is_some()
    }

    /// All identifiers in row order, if the table has any
    pub fn insured_nos(&self) -> Option<&[i64]> {
        self.insured_nos.as_deref()
    }

    /// Row position of an identifier
    pub fn position_of(&self, insured_no: i64) -> Option<usize> {
        self.insured_nos
            .as_ref()?
            .iter()
            .position(|&id| id == insured_no)
    }

    /// Feature values for a row, aligned with `feature_names`
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Single feature value for a row, by column name
    pub fn value(&self, index: usize, feature: &str) -> Option<f64> {
        let column = self.feature_names.iter().position(|n| n == feature)?;
        self.rows.get(index).map(|r| r[column])
    }
}
