//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::artifacts::ArtifactStore;
use crate::config::ApiConfig;
use crate::predict::PredictionService;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable startup artifacts
    pub artifacts: Arc<ArtifactStore>,
    /// Prediction service for the two handler paths
    pub predictor: PredictionService,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over a loaded artifact store
    pub fn new(artifacts: Arc<ArtifactStore>, config: ApiConfig) -> Self {
        Self {
            predictor: PredictionService::new(Arc::clone(&artifacts)),
            artifacts,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
