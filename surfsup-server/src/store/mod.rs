//! Data access for the observation dataset.
//!
//! The dataset is a pre-existing SQLite file with two tables:
//! `measurement(station, date, prcp, tobs)` and
//! `station(station, name, latitude, longitude, elevation)`.
//! It is opened read-only and its shape is checked once at startup.

mod client;
mod error;
mod models;
mod schema;

#[cfg(test)]
pub(crate) mod fixture;


pub use client::{DEFAULT_DATABASE_PATH, StoreConfig, WeatherStore};
pub use error::StoreError;
pub use models::{
    Measurement, PrecipitationRow, Station, TableSchema, TemperatureRow, TemperatureStats,
};
