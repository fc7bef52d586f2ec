//! Classifier Artifact
//!
//! A serialized multinomial linear classifier exported from the training
//! pipeline: one coefficient row and one intercept per class, over a fixed,
//! ordered set of feature columns. Prediction is the argmax of the per-class
//! decision scores, returned as the class code the training pipeline assigned.

use super::ArtifactError;
use serde::Deserialize;
use std::path::Path;

/// An opaque classifier mapping a feature vector to a class code
#[derive(Debug, Clone, Deserialize)]
pub struct Classifier {
    /// Feature column names, in the order the coefficient rows expect
    pub feature_names: Vec<String>,
    /// Class codes, aligned with `coefficients` and `intercepts`
    pub classes: Vec<i64>,
    /// One coefficient row per class, each aligned with `feature_names`
    pub coefficients: Vec<Vec<f64>>,
    /// One intercept per class
    pub intercepts: Vec<f64>,
}

impl Classifier {
    /// Load a classifier from a JSON artifact
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let classifier: Classifier =
            serde_json::from_str(&content).map_err(|e| ArtifactError::Json {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        classifier.validate()?;
        Ok(classifier)
    }

    /// Check internal shape consistency
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::BadShape(
                "classifier has no classes".to_string(),
            ));
        }

        if self.coefficients.len() != self.classes.len() {
            return Err(ArtifactError::BadShape(format!(
                "classifier has {} classes but {} coefficient rows",
                self.classes.len(),
                self.coefficients.len()
            )));
        }

        if self.intercepts.len() != self.classes.len() {
            return Err(ArtifactError::BadShape(format!(
                "classifier has {} classes but {} intercepts",
                self.classes.len(),
                self.intercepts.len()
            )));
        }

        for (class_idx, row) in self.coefficients.iter().enumerate() {
            if row.len() != self.feature_names.len() {
                return Err(ArtifactError::BadShape(format!(
                    "coefficient row for class {} has {} entries, expected {}",
                    self.classes[class_idx],
                    row.len(),
                    self.feature_names.len()
                )));
            }
        }

        Ok(())
    }

    /// Number of feature columns the classifier expects
    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    /// Predict the class code for a feature vector
    ///
    /// The vector must be aligned with `feature_names`. Ties resolve to the
    /// first class reaching the maximal decision score.
    pub fn predict(&self, features: &[f64]) -> Result<i64, ArtifactError> {
        if features.len() != self.feature_names.len() {
            return Err(ArtifactError::ShapeMismatch {
                expected: self.feature_names.len(),
                found: features.len(),
            });
        }

        let mut best_class = self.classes[0];
        let mut best_score = f64::NEG_INFINITY;

        for (class_idx, (row, intercept)) in self
            .coefficients
            .iter()
            .zip(self.intercepts.iter())
            .enumerate()
        {
            let score: f64 = intercept
                + row
                    .iter()
                    .zip(features.iter())
                    .map(|(coef, x)| coef * x)
                    .sum::<f64>();

            if score > best_score {
                best_score = score;
                best_class = self.classes[class_idx];
            }
        }

        Ok(best_class)
    }
}
