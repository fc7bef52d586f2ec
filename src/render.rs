//! Rendering
//!
//! Translates classifier output into the widgets the dashboard page draws:
//! a colored label panel, the driver indicator metrics, and the three
//! driving-behavior charts (speed gauge, acceleration bar, RPM gauge).
//! Everything here is a serializable descriptor; the page renders them
//! client-side.

use serde::Serialize;

/// Class code to human-readable class name
pub fn label_for(class_code: i64) -> &'static str {
    match class_code {
        0 => "Normal",
        1 => "Reckless",
        2 => "Aggressive",
        _ => "Unknown",
    }
}

/// Class name to panel background color
pub fn panel_color(label: &str) -> &'static str {
    match label {
        "Normal" => "#d4edda",
        "Reckless" => "#fff3cd",
        "Aggressive" => "#f8d7da",
        _ => "#e2e3e5",
    }
}

/// The colored panel announcing the predicted driving class
#[derive(Debug, Clone, Serialize)]
pub struct LabelPanel {
    pub label: String,
    pub color: String,
}

impl LabelPanel {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            color: panel_color(label).to_string(),
        }
    }
}

/// Chart widget families the page knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Gauge,
    Bar,
}

/// A single chart widget descriptor
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Color of the gauge bar or bar mark
    pub color: String,
}

impl ChartSpec {
    pub fn gauge(title: &str, value: f64, min: f64, max: f64, color: &str) -> Self {
        Self {
            kind: ChartKind::Gauge,
            title: title.to_string(),
            value,
            min,
            max,
            color: color.to_string(),
        }
    }

    pub fn bar(title: &str, value: f64, min: f64, max: f64, color: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: title.to_string(),
            value,
            min,
            max,
            color: color.to_string(),
        }
    }
}

/// The three driving-behavior charts for a set of raw feature values
pub fn behavior_charts(avg_speed: f64, avg_acc_total: f64, std_rpm: f64) -> Vec<ChartSpec> {
    vec![
        ChartSpec::gauge("Average Speed (km/h)", avg_speed, 0.0, 150.0, "green"),
        ChartSpec::bar("Average Acceleration", avg_acc_total, 0.0, 1.5, "orange"),
        ChartSpec::gauge("Standard Deviation RPM", std_rpm, 0.0, 4000.0, "red"),
    ]
}

/// One formatted driver indicator
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorMetric {
    pub name: String,
    pub title: String,
    pub value: String,
}

/// Driver indicator metrics for a raw feature row
///
/// Speed keeps one decimal, acceleration three, RPM spread none.
pub fn indicator_metrics(avg_speed: f64, avg_acc_total: f64, std_rpm: f64) -> Vec<IndicatorMetric> {
    vec![
        IndicatorMetric {
            name: "avg_speed".to_string(),
            title: "Avg Speed (km/h)".to_string(),
            value: format!("{:.1}", avg_speed),
        },
        IndicatorMetric {
            name: "avg_acc_total".to_string(),
            title: "Avg Acceleration".to_string(),
            value: format!("{:.3}", avg_acc_total),
        },
        IndicatorMetric {
            name: "std_rpm".to_string(),
            title: "Std. Deviation RPM".to_string(),
            value: format!("{:.0}", std_rpm),
        },
    ]
}
