//! Prediction Service
//!
//! The dashboard's two handler paths over the shared artifact store.
//!
//! - **Lookup**: resolve a user-supplied identifier string to a row
//!   position in the raw feature table, classify the pre-scaled row at the
//!   same position, and report the raw driver indicators. The scaled row is
//!   passed to the classifier as-is; re-scaling it would normalize twice.
//! - **Manual**: build a zero-filled feature vector keyed by column name
//!   from the user's four inputs, scale it, then classify.
//!
//! Both paths are stateless request/response; nothing is cached across
//! interactions.

use crate::artifacts::{
    ArtifactError, ArtifactStore, FeatureTable, AVG_ACC_TOTAL, AVG_SPEED, DAY_NIGHT_NIGHT, STD_RPM,
};
use crate::render;
use std::sync::Arc;
use thiserror::Error;

/// Valid range of the manual speed slider (km/h)
pub const AVG_SPEED_RANGE: (f64, f64) = (0.0, 150.0);

/// Valid range of the manual acceleration slider
pub const AVG_ACC_TOTAL_RANGE: (f64, f64) = (0.5, 1.2);

/// Valid range of the manual RPM standard deviation slider
pub const STD_RPM_RANGE: (f64, f64) = (500.0, 4000.0);

/// Recoverable prediction errors, surfaced as inline warnings
#[derive(Debug, Error)]
pub enum PredictError {
    /// The identifier string does not parse as an integer
    #[error("'{0}' is not a valid insured number")]
    InvalidInput(String),

    /// The identifier is absent from the feature table
    #[error("Insured number {0} was not found in the feature table")]
    NotFound(i64),

    /// Artifact inconsistency discovered at prediction time
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Categorical day/night choice on the manual path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNight {
    Day,
    Night,
}

impl DayNight {
    /// Binary indicator encoding: 1 for night, 0 for day
    pub fn indicator(self) -> f64 {
        match self {
            DayNight::Night => 1.0,
            DayNight::Day => 0.0,
        }
    }
}

/// Manually entered feature values
#[derive(Debug, Clone)]
pub struct ManualInput {
    pub day_night: DayNight,
    pub avg_speed: f64,
    pub avg_acc_total: f64,
    pub std_rpm: f64,
}

/// The outcome of either handler path
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Integer class code returned by the classifier
    pub class_code: i64,
    /// Human-readable class name, "Unknown" for unmapped codes
    pub label: String,
    /// Identifier of the classified row, lookup path only
    pub insured_no: Option<i64>,
    /// Raw average speed backing the indicators and charts
    pub avg_speed: f64,
    /// Raw average acceleration
    pub avg_acc_total: f64,
    /// Raw RPM standard deviation
    pub std_rpm: f64,
}

/// Stateless prediction service over the immutable artifact store
#[derive(Clone)]
pub struct PredictionService {
    artifacts: Arc<ArtifactStore>,
}

impl PredictionService {
    pub fn new(artifacts: Arc<ArtifactStore>) -> Self {
        Self { artifacts }
    }

    /// All known insured identifiers, in table order
    pub fn insured_nos(&self) -> &[i64] {
        self.artifacts.features().insured_nos().unwrap_or(&[])
    }

    /// Look up the precomputed prediction for an identifier string
    pub fn lookup(&self, insured_no_input: &str) -> Result<Prediction, PredictError> {
        let insured_no: i64 = insured_no_input
            .trim()
            .parse()
            .map_err(|_| PredictError::InvalidInput(insured_no_input.trim().to_string()))?;

        let features = self.artifacts.features();
        let position = features
            .position_of(insured_no)
            .ok_or(PredictError::NotFound(insured_no))?;

        // The scaled table is row-aligned with the raw table, so the raw
        // position indexes it directly. Its row is already normalized.
        let scaled_row = self
            .artifacts
            .features_scaled()
            .row(position)
            .ok_or(ArtifactError::MisalignedTables {
                raw: features.len(),
                scaled: self.artifacts.features_scaled().len(),
            })?;

        let class_code = self.artifacts.model().predict(scaled_row)?;

        tracing::debug!(insured_no, position, class_code, "Lookup prediction");

        Ok(Prediction {
            class_code,
            label: render::label_for(class_code).to_string(),
            insured_no: Some(insured_no),
            avg_speed: raw_value(features, position, AVG_SPEED)?,
            avg_acc_total: raw_value(features, position, AVG_ACC_TOTAL)?,
            std_rpm: raw_value(features, position, STD_RPM)?,
        })
    }

    /// Predict from manually entered feature values
    pub fn manual(&self, input: &ManualInput) -> Result<Prediction, PredictError> {
        let model = self.artifacts.model();

        // Zero-filled vector over the classifier's column set, keyed by
        // name so column ordering cannot change the outcome.
        let raw: Vec<f64> = model
            .feature_names
            .iter()
            .map(|name| match name.as_str() {
                AVG_SPEED => input.avg_speed,
                AVG_ACC_TOTAL => input.avg_acc_total,
                STD_RPM => input.std_rpm,
                DAY_NIGHT_NIGHT => input.day_night.indicator(),
                _ => 0.0,
            })
            .collect();

        // Manual input is raw; it must be scaled before classification.
        let scaled = self.artifacts.scaler().transform(&raw)?;
        let class_code = model.predict(&scaled)?;

        tracing::debug!(?input.day_night, class_code, "Manual prediction");

        Ok(Prediction {
            class_code,
            label: render::label_for(class_code).to_string(),
            insured_no: None,
            avg_speed: input.avg_speed,
            avg_acc_total: input.avg_acc_total,
            std_rpm: input.std_rpm,
        })
    }
}

fn raw_value(features: &FeatureTable, position: usize, column: &str) -> Result<f64, PredictError> {
    features.value(position, column).ok_or_else(|| {
        PredictError::Artifact(ArtifactError::BadShape(format!(
            "raw feature table is missing column '{}'",
            column
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::fixtures::*;
    use crate::artifacts::{Classifier, StandardScaler};

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(sample_store()))
    }

    #[test]
    fn test_lookup_known_identifier() {
        let prediction = service().lookup("101").unwrap();
        assert_eq!(prediction.insured_no, Some(101));
        assert!(["Normal", "Reckless", "Aggressive"].contains(&prediction.label.as_str()));
        assert_eq!(prediction.avg_speed, 72.0);
        assert_eq!(prediction.avg_acc_total, 0.81);
        assert_eq!(prediction.std_rpm, 1120.0);
    }

    #[test]
    fn test_lookup_every_identifier_yields_mapped_label() {
        let service = service();
        for &id in service.insured_nos() {
            let prediction = service.lookup(&id.to_string()).unwrap();
            assert!(["Normal", "Reckless", "Aggressive"].contains(&prediction.label.as_str()));
        }
    }

    #[test]
    fn test_lookup_unknown_identifier_is_not_found() {
        let err = service().lookup("999").unwrap_err();
        assert!(matches!(err, PredictError::NotFound(999)));
    }

    #[test]
    fn test_lookup_non_numeric_identifier_is_invalid_input() {
        let err = service().lookup("abc").unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert!(service().lookup(" 102 ").is_ok());
    }

    #[test]
    fn test_manual_night_prediction() {
        let prediction = service()
            .manual(&ManualInput {
                day_night: DayNight::Night,
                avg_speed: 40.0,
                avg_acc_total: 0.9,
                std_rpm: 2000.0,
            })
            .unwrap();

        // Raw inputs flow through unscaled for chart rendering.
        assert_eq!(prediction.avg_speed, 40.0);
        assert_eq!(prediction.avg_acc_total, 0.9);
        assert_eq!(prediction.std_rpm, 2000.0);
        assert_eq!(prediction.insured_no, None);
        assert!(["Normal", "Reckless", "Aggressive"].contains(&prediction.label.as_str()));
    }

    #[test]
    fn test_manual_day_night_encoding_changes_vector() {
        // With a model weighing only the night indicator, day and night
        // inputs must land on opposite classes.
        let features = sample_features();
        let scaled = sample_scaled();
        let model = Classifier {
            feature_names: vec![
                "avg_speed".to_string(),
                "avg_acc_total".to_string(),
                "std_rpm".to_string(),
                "day_night_night".to_string(),
            ],
            classes: vec![0, 1],
            coefficients: vec![vec![0.0, 0.0, 0.0, -1.0], vec![0.0, 0.0, 0.0, 1.0]],
            intercepts: vec![0.0, 0.0],
        };
        let scaler = StandardScaler {
            feature_names: model.feature_names.clone(),
            mean: vec![0.0, 0.0, 0.0, 0.0],
            scale: vec![1.0, 1.0, 1.0, 1.0],
        };
        let service = PredictionService::new(Arc::new(
            ArtifactStore::from_parts(features, scaled, model, scaler).unwrap(),
        ));

        let night = ManualInput {
            day_night: DayNight::Night,
            avg_speed: 40.0,
            avg_acc_total: 0.9,
            std_rpm: 2000.0,
        };
        let day = ManualInput {
            day_night: DayNight::Day,
            ..night.clone()
        };

        assert_eq!(service.manual(&night).unwrap().class_code, 1);
        assert_eq!(service.manual(&day).unwrap().class_code, 0);
    }

    #[test]
    fn test_manual_invariant_under_column_ordering() {
        // Same logical model with its columns permuted must classify the
        // same manual input identically; only the four explicit inputs
        // matter, never their position.
        let input = ManualInput {
            day_night: DayNight::Night,
            avg_speed: 95.0,
            avg_acc_total: 1.1,
            std_rpm: 3200.0,
        };

        let baseline = service().manual(&input).unwrap();
        let permuted = PredictionService::new(Arc::new(permuted_store()));
        let prediction = permuted.manual(&input).unwrap();

        assert_eq!(prediction.class_code, baseline.class_code);
        assert_eq!(prediction.label, baseline.label);
    }

    // sample_store() with every artifact's columns reordered to
    // (std_rpm, day_night_night, avg_speed, avg_acc_total).
    fn permuted_store() -> ArtifactStore {
        let features = crate::artifacts::FeatureTable::from_csv_str(
            "insured_no,std_rpm,day_night_night,avg_speed,avg_acc_total
101,1120,0,72.0,0.81
102,890,1,45.5,0.65
103,2600,0,110.2,1.05",
        )
        .unwrap();
        let scaled = crate::artifacts::FeatureTable::from_csv_str(
            "std_rpm,day_night_night,avg_speed,avg_acc_total
-0.5,1.0,0.2,0.7
-1.1,0.0,-0.9,-0.4
2.2,1.0,1.8,1.5",
        )
        .unwrap();

        let base_model = sample_model();
        let base_scaler = sample_scaler();
        // Column order in sample artifacts: avg_speed(0), avg_acc_total(1),
        // std_rpm(2), day_night_night(3) -> permuted to (2, 3, 0, 1).
        let perm = [2usize, 3, 0, 1];

        let model = Classifier {
            feature_names: perm
                .iter()
                .map(|&i| base_model.feature_names[i].clone())
                .collect(),
            classes: base_model.classes.clone(),
            coefficients: base_model
                .coefficients
                .iter()
                .map(|row| perm.iter().map(|&i| row[i]).collect())
                .collect(),
            intercepts: base_model.intercepts.clone(),
        };
        let scaler = StandardScaler {
            feature_names: model.feature_names.clone(),
            mean: perm.iter().map(|&i| base_scaler.mean[i]).collect(),
            scale: perm.iter().map(|&i| base_scaler.scale[i]).collect(),
        };

        ArtifactStore::from_parts(features, scaled, model, scaler).unwrap()
    }
}
