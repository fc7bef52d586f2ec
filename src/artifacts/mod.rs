//! Startup Artifacts
//!
//! The four static artifacts the dashboard loads once at process start:
//! the raw feature table, its pre-scaled counterpart, the serialized
//! classifier, and the fitted scaler. All of them are immutable for the
//! process lifetime; any load or cross-validation failure is fatal.
//!
//! Cross-validation enforces the positional-correspondence invariant: the
//! raw and scaled tables must have identical row counts and the scaled
//! table's columns must match the classifier's feature order exactly, so
//! a row position found in the raw table can index the scaled table
//! directly without re-joining by identifier.

pub mod features;
pub mod model;
pub mod scaler;

pub use features::{
    FeatureTable, AVG_ACC_TOTAL, AVG_SPEED, DAY_NIGHT_NIGHT, IDENTIFIER_COLUMN, STD_RPM,
};
pub use model::Classifier;
pub use scaler::StandardScaler;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating startup artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse {path:?}: {error}")]
    Json { path: PathBuf, error: String },

    #[error("Line {line}: column '{column}' holds non-numeric value '{value}'")]
    BadValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Line {line}: expected {expected} feature values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Feature vector has {found} values, classifier expects {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Feature tables are misaligned: {raw} raw rows vs {scaled} scaled rows")]
    MisalignedTables { raw: usize, scaled: usize },

    #[error("Column mismatch in {artifact}: expected {expected:?}, found {found:?}")]
    ColumnMismatch {
        artifact: &'static str,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Missing '{0}' identifier column in raw feature table")]
    MissingIdentifier(&'static str),

    #[error("Artifact shape error: {0}")]
    BadShape(String),
}

/// File locations of the four startup artifacts
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub features: PathBuf,
    pub features_scaled: PathBuf,
    pub model: PathBuf,
    pub scaler: PathBuf,
}

impl ArtifactPaths {
    /// Conventional file names inside a single artifact directory
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            features: dir.join("features.csv"),
            features_scaled: dir.join("features_scaled.csv"),
            model: dir.join("model.json"),
            scaler: dir.join("scaler.json"),
        }
    }
}

/// The loaded, cross-validated artifact set shared by all handlers
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    features: FeatureTable,
    features_scaled: FeatureTable,
    model: Classifier,
    scaler: StandardScaler,
}

impl ArtifactStore {
    /// Load all four artifacts from disk and cross-validate them
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let features = FeatureTable::from_path(&paths.features)?;
        let features_scaled = FeatureTable::from_path(&paths.features_scaled)?;
        let model = Classifier::from_path(&paths.model)?;
        let scaler = StandardScaler::from_path(&paths.scaler)?;

        let store = Self::from_parts(features, features_scaled, model, scaler)?;

        tracing::info!(
            rows = store.features.len(),
            features = store.model.feature_count(),
            classes = store.model.classes.len(),
            "Artifacts loaded"
        );

        Ok(store)
    }

    /// Assemble a store from already-loaded artifacts, enforcing the
    /// cross-artifact invariants
    pub fn from_parts(
        features: FeatureTable,
        features_scaled: FeatureTable,
        model: Classifier,
        scaler: StandardScaler,
    ) -> Result<Self, ArtifactError> {
        if !features.has_identifiers() {
            return Err(ArtifactError::MissingIdentifier(IDENTIFIER_COLUMN));
        }

        if features.len() != features_scaled.len() {
            return Err(ArtifactError::MisalignedTables {
                raw: features.len(),
                scaled: features_scaled.len(),
            });
        }

        // The scaled table feeds the classifier directly, so its column
        // order must match the coefficient order exactly.
        if features_scaled.feature_names() != model.feature_names.as_slice() {
            return Err(ArtifactError::ColumnMismatch {
                artifact: "scaled feature table",
                expected: model.feature_names.clone(),
                found: features_scaled.feature_names().to_vec(),
            });
        }

        if scaler.feature_names != model.feature_names {
            return Err(ArtifactError::ColumnMismatch {
                artifact: "scaler",
                expected: model.feature_names.clone(),
                found: scaler.feature_names.clone(),
            });
        }

        // The raw table may order its columns differently, but the set must
        // agree with the classifier's.
        let mut raw_columns = features.feature_names().to_vec();
        let mut model_columns = model.feature_names.clone();
        raw_columns.sort();
        model_columns.sort();
        if raw_columns != model_columns {
            return Err(ArtifactError::ColumnMismatch {
                artifact: "raw feature table",
                expected: model.feature_names.clone(),
                found: features.feature_names().to_vec(),
            });
        }

        // Both handler paths address these columns by name.
        for required in [AVG_SPEED, AVG_ACC_TOTAL, STD_RPM, DAY_NIGHT_NIGHT] {
            if !model.feature_names.iter().any(|n| n == required) {
                return Err(ArtifactError::BadShape(format!(
                    "classifier is missing required feature column '{}'",
                    required
                )));
            }
        }

        Ok(Self {
            features,
            features_scaled,
            model,
            scaler,
        })
    }

    /// The raw feature table
    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    /// The pre-scaled feature table, row-aligned with the raw table
    pub fn features_scaled(&self) -> &FeatureTable {
        &self.features_scaled
    }

    /// The trained classifier
    pub fn model(&self) -> &Classifier {
        &self.model
    }

    /// The fitted scaler, used only for manually entered input
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }
}
