//! Data transfer objects for web responses.
//!
//! Field names follow the published API, which uses display-style keys.

use serde::Serialize;

use crate::store::{TemperatureRow, TemperatureStats};

/// One temperature observation in the tobs report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Temp")]
    pub temp: f64,
}

impl From<TemperatureRow> for TemperatureObservation {
    fn from(row: TemperatureRow) -> Self {
        Self {
            date: row.date,
            temp: row.tobs,
        }
    }
}

/// Temperature summary over a date range.
///
/// Every field is null when no observations fall in the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Min Temp")]
    pub min: Option<f64>,

    #[serde(rename = "Max Temp")]
    pub max: Option<f64>,

    #[serde(rename = "Avg Temp")]
    pub avg: Option<f64>,
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.min_temp,
            max: stats.max_temp,
            avg: stats.avg_temp,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
