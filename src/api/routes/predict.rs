//! Prediction Routes
//!
//! The dashboard's two prediction modes.
//!
//! - GET /api/v1/predict/driver/:insured_no - Precomputed prediction by identifier
//! - POST /api/v1/predict/manual - On-demand prediction from manual input

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{ManualPredictRequest, PredictionResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::predict::{
    DayNight, ManualInput, Prediction, AVG_ACC_TOTAL_RANGE, AVG_SPEED_RANGE, STD_RPM_RANGE,
};
use crate::render::{self, LabelPanel};

/// GET /api/v1/predict/driver/:insured_no
///
/// Look up the precomputed prediction for an insured identifier.
/// The path segment is taken verbatim, so non-numeric input reaches the
/// lookup path and surfaces as INVALID_INPUT rather than a routing error.
pub async fn predict_by_driver(
    State(state): State<Arc<AppState>>,
    Path(insured_no): Path<String>,
) -> ApiResult<Json<PredictionResponse>> {
    let prediction = state.predictor.lookup(&insured_no)?;

    tracing::info!(
        insured_no = %insured_no.trim(),
        label = %prediction.label,
        "Lookup prediction served"
    );

    Ok(Json(to_response(&prediction, "lookup", true)))
}

/// POST /api/v1/predict/manual
///
/// Predict the driving class from manually entered feature values.
pub async fn predict_manual(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ManualPredictRequest>,
) -> ApiResult<Json<PredictionResponse>> {
    validate_manual_request(&req)?;

    let input = ManualInput {
        day_night: parse_day_night(&req.day_night)?,
        avg_speed: req.avg_speed,
        avg_acc_total: req.avg_acc_total,
        std_rpm: req.std_rpm,
    };

    let prediction = state.predictor.manual(&input)?;

    tracing::info!(label = %prediction.label, "Manual prediction served");

    Ok(Json(to_response(&prediction, "manual", false)))
}

/// Parse day/night choice string
fn parse_day_night(s: &str) -> ApiResult<DayNight> {
    match s.to_lowercase().as_str() {
        "day" => Ok(DayNight::Day),
        "night" => Ok(DayNight::Night),
        _ => Err(ApiError::Validation(format!(
            "Invalid driving time: {}. Use day or night",
            s
        ))),
    }
}

/// Validate manual input ranges
///
/// The dashboard sliders cannot produce out-of-range values, but the HTTP
/// body can carry anything.
fn validate_manual_request(req: &ManualPredictRequest) -> ApiResult<()> {
    check_range("avg_speed", req.avg_speed, AVG_SPEED_RANGE)?;
    check_range("avg_acc_total", req.avg_acc_total, AVG_ACC_TOTAL_RANGE)?;
    check_range("std_rpm", req.std_rpm, STD_RPM_RANGE)?;
    Ok(())
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> ApiResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(ApiError::Validation(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Convert a Prediction into the response body
fn to_response(
    prediction: &Prediction,
    source: &str,
    include_metrics: bool,
) -> PredictionResponse {
    let metrics = if include_metrics {
        render::indicator_metrics(
            prediction.avg_speed,
            prediction.avg_acc_total,
            prediction.std_rpm,
        )
    } else {
        Vec::new()
    };

    PredictionResponse {
        source: source.to_string(),
        insured_no: prediction.insured_no,
        class_code: prediction.class_code,
        panel: LabelPanel::new(&prediction.label),
        metrics,
        charts: render::behavior_charts(
            prediction.avg_speed,
            prediction.avg_acc_total,
            prediction.std_rpm,
        ),
        predicted_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_request() -> ManualPredictRequest {
        ManualPredictRequest {
            day_night: "night".to_string(),
            avg_speed: 40.0,
            avg_acc_total: 0.9,
            std_rpm: 2000.0,
        }
    }

    #[test]
    fn test_parse_day_night() {
        assert!(matches!(parse_day_night("day"), Ok(DayNight::Day)));
        assert!(matches!(parse_day_night("NIGHT"), Ok(DayNight::Night)));
        assert!(parse_day_night("dusk").is_err());
    }

    #[test]
    fn test_validate_manual_request() {
        assert!(validate_manual_request(&manual_request()).is_ok());

        let too_fast = ManualPredictRequest {
            avg_speed: 180.0,
            ..manual_request()
        };
        assert!(validate_manual_request(&too_fast).is_err());

        let low_acc = ManualPredictRequest {
            avg_acc_total: 0.2,
            ..manual_request()
        };
        assert!(validate_manual_request(&low_acc).is_err());

        let nan_rpm = ManualPredictRequest {
            std_rpm: f64::NAN,
            ..manual_request()
        };
        assert!(validate_manual_request(&nan_rpm).is_err());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(check_range("avg_speed", 0.0, AVG_SPEED_RANGE).is_ok());
        assert!(check_range("avg_speed", 150.0, AVG_SPEED_RANGE).is_ok());
        assert!(check_range("std_rpm", 499.9, STD_RPM_RANGE).is_err());
    }

    #[test]
    fn test_manual_response_has_no_metrics() {
        let prediction = Prediction {
            class_code: 1,
            label: "Reckless".to_string(),
            insured_no: None,
            avg_speed: 40.0,
            avg_acc_total: 0.9,
            std_rpm: 2000.0,
        };

        let response = to_response(&prediction, "manual", false);
        assert!(response.metrics.is_empty());
        assert_eq!(response.charts.len(), 3);
        assert_eq!(response.panel.color, "#fff3cd");
    }

    #[test]
    fn test_lookup_response_formats_metrics() {
        let prediction = Prediction {
            class_code: 1,
            label: "Reckless".to_string(),
            insured_no: Some(101),
            avg_speed: 72.0,
            avg_acc_total: 0.81,
            std_rpm: 1120.0,
        };

        let response = to_response(&prediction, "lookup", true);
        assert_eq!(response.insured_no, Some(101));
        assert_eq!(response.metrics[0].value, "72.0");
        assert_eq!(response.metrics[1].value, "0.810");
        assert_eq!(response.metrics[2].value, "1120");
    }
}
