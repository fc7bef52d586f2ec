//! # DriveGuard
//!
//! A full-stack Rust dashboard for predicting driving risk classes from
//! telematics features.
//!
//! ## Features
//!
//! - **Precomputed lookups**: classify any insured driver from the
//!   pre-scaled feature table loaded at startup
//! - **Manual predictions**: scale and classify ad-hoc feature values
//! - **Chart widgets**: speed/RPM gauges and an acceleration bar, served
//!   as descriptors and drawn by the embedded dashboard page
//! - **Single-pass startup**: all four artifacts load once, immutable for
//!   the process lifetime
//!
//! ## Modules
//!
//! - [`artifacts`]: startup artifact loading and cross-validation
//! - [`predict`]: the lookup and manual prediction paths
//! - [`render`]: label panel, indicator metrics, and chart construction
//! - [`api`]: REST API server and embedded dashboard page, with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use driveguard::artifacts::{ArtifactPaths, ArtifactStore};
//! use driveguard::predict::PredictionService;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load the four startup artifacts
//!     let paths = ArtifactPaths::from_dir(Path::new("./data"));
//!     let artifacts = Arc::new(ArtifactStore::load(&paths)?);
//!
//!     // Classify a precomputed driver row
//!     let service = PredictionService::new(artifacts);
//!     let prediction = service.lookup("101")?;
//!
//!     println!("Driver 101 drives {}", prediction.label);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod artifacts;
pub mod config;
pub mod predict;
pub mod render;

// Re-export top-level types for convenience
pub use artifacts::{ArtifactError, ArtifactPaths, ArtifactStore, Classifier, FeatureTable, StandardScaler};

pub use predict::{DayNight, ManualInput, PredictError, Prediction, PredictionService};

pub use render::{ChartKind, ChartSpec, IndicatorMetric, LabelPanel};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, ArtifactsConfig, Config, ConfigError, LoggingConfig};
