//! Typed records for the two stored tables and the rows our queries return.

/// A table whose shape is checked when the store is opened.
pub trait TableSchema {
    /// Table name in the store.
    const TABLE: &'static str;

    /// Columns that must be present. Extra columns are allowed.
    const COLUMNS: &'static [&'static str];
}

/// One daily observation at a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Station identifier (e.g. "USC00519397")
    pub station: String,

    /// Observation date, `YYYY-MM-DD`
    pub date: String,

    /// Precipitation; missing readings are null
    pub prcp: Option<f64>,

    /// Observed temperature
    pub tobs: f64,
}

impl TableSchema for Measurement {
    const TABLE: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];
}

/// Station metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl TableSchema for Station {
    const TABLE: &'static str = "station";
    const COLUMNS: &'static [&'static str] =
        &["station", "name", "latitude", "longitude", "elevation"];
}

/// A precipitation reading within a date window.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
    pub station: String,
}

/// A temperature reading for a single station.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: f64,
}

/// Aggregate temperatures over a date range.
///
/// All fields are `None` when no rows matched, mirroring SQL aggregates
/// over an empty set.
#[derive(Debug, Clone, Copy, PartialEq, Default, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
}

impl TemperatureStats {
    /// Whether the aggregate covered no rows.
    pub fn is_empty(&self) -> bool {
        self.min_temp.is_none() && self.max_temp.is_none() && self.avg_temp.is_none()
    }
}
