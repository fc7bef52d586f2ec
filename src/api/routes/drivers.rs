//! Driver Roster Routes
//!
//! - GET /api/v1/drivers - List all known insured identifiers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DriverListResponse;
use crate::api::state::AppState;

/// GET /api/v1/drivers
///
/// List every insured identifier with a precomputed feature row.
pub async fn list_drivers(State(state): State<Arc<AppState>>) -> Json<DriverListResponse> {
    let insured_nos = state.predictor.insured_nos().to_vec();

    Json(DriverListResponse {
        total: insured_nos.len(),
        insured_nos,
    })
}
