//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::render::{ChartSpec, IndicatorMetric, LabelPanel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// PREDICTION DTOs
// ============================================

/// Manual prediction request
#[derive(Debug, Clone, Deserialize)]
pub struct ManualPredictRequest {
    /// Driving time: "day" or "night"
    pub day_night: String,
    /// Average speed in km/h (0-150)
    pub avg_speed: f64,
    /// Average total acceleration (0.5-1.2)
    pub avg_acc_total: f64,
    /// RPM standard deviation (500-4000)
    pub std_rpm: f64,
}

/// Prediction response, shared by both handler paths
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Which path produced this prediction: "lookup" or "manual"
    pub source: String,
    /// Identifier of the classified row, lookup path only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured_no: Option<i64>,
    /// Integer class code returned by the classifier
    pub class_code: i64,
    /// Colored panel announcing the predicted driving class
    pub panel: LabelPanel,
    /// Driver indicator metrics, lookup path only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<IndicatorMetric>,
    /// The three driving-behavior chart widgets
    pub charts: Vec<ChartSpec>,
    /// When the prediction was made
    pub predicted_at: DateTime<Utc>,
}

// ============================================
// DRIVER ROSTER DTOs
// ============================================

/// Known insured identifiers
#[derive(Debug, Serialize)]
pub struct DriverListResponse {
    /// Number of precomputed feature rows
    pub total: usize,
    /// All identifiers, in table order
    pub insured_nos: Vec<i64>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Artifact store status
    pub artifacts: String,
    /// Number of precomputed feature rows loaded
    pub drivers: usize,
    /// Number of classifier feature columns
    pub feature_columns: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
