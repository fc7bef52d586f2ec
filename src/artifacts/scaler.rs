//! Scaler Artifact
//!
//! A fitted standard scaler exported from the training pipeline: per-column
//! mean and scale over the classifier's feature columns. Applied only to
//! manually entered input; precomputed rows arrive already scaled.

use super::ArtifactError;
use serde::Deserialize;
use std::path::Path;

/// An opaque transformer mapping a raw feature vector to a normalized one
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScaler {
    /// Feature column names, in the order `mean` and `scale` expect
    pub feature_names: Vec<String>,
    /// Per-column mean subtracted during transform
    pub mean: Vec<f64>,
    /// Per-column divisor applied after centering
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load a scaler from a JSON artifact
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let scaler: StandardScaler =
            serde_json::from_str(&content).map_err(|e| ArtifactError::Json {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        scaler.validate()?;
        Ok(scaler)
    }

    /// Check internal shape consistency
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.mean.len() != self.feature_names.len() {
            return Err(ArtifactError::BadShape(format!(
                "scaler has {} features but {} mean entries",
                self.feature_names.len(),
                self.mean.len()
            )));
        }

        if self.scale.len() != self.feature_names.len() {
            return Err(ArtifactError::BadShape(format!(
                "scaler has {} features but {} scale entries",
                self.feature_names.len(),
                self.scale.len()
            )));
        }

        if let Some(idx) = self.scale.iter().position(|&s| s == 0.0) {
            return Err(ArtifactError::BadShape(format!(
                "scaler has zero scale for column '{}'",
                self.feature_names[idx]
            )));
        }

        Ok(())
    }

    /// Normalize a raw feature vector, column-wise `(x - mean) / scale`
    ///
    /// The vector must be aligned with `feature_names`.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ArtifactError> {
        if features.len() != self.feature_names.len() {
            return Err(ArtifactError::ShapeMismatch {
                expected: self.feature_names.len(),
                found: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
