//! Read-only SQLite access to the observation dataset.
//!
//! Every query method acquires its own pooled connection and lets it drop
//! before returning, so a connection is released on every exit path and is
//! never held by two requests at once.

use std::path::PathBuf;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use crate::domain::ObsDate;

use super::error::StoreError;
use super::models::{PrecipitationRow, TemperatureRow, TemperatureStats};
use super::schema;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "Resources/hawaii.sqlite";

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

const LATEST_DATE: &str = "SELECT MAX(date) FROM measurement";

const MEASUREMENTS_SINCE: &str = "\
    SELECT date, CAST(prcp AS REAL) AS prcp, station \
    FROM measurement \
    WHERE date >= ? \
    ORDER BY date, station";

const DISTINCT_STATIONS: &str = "SELECT DISTINCT station FROM measurement ORDER BY station";

// Ties go to the lowest station identifier.
const MOST_ACTIVE_STATION: &str = "\
    SELECT station FROM measurement \
    GROUP BY station \
    ORDER BY COUNT(*) DESC, station ASC \
    LIMIT 1";

const STATION_TEMPERATURES_SINCE: &str = "\
    SELECT date, CAST(tobs AS REAL) AS tobs \
    FROM measurement \
    WHERE station = ? AND date >= ? \
    ORDER BY date";

const STATS_SINCE: &str = "\
    SELECT CAST(MIN(tobs) AS REAL) AS min_temp, \
           CAST(MAX(tobs) AS REAL) AS max_temp, \
           AVG(tobs) AS avg_temp \
    FROM measurement \
    WHERE date >= ?";

const STATS_BETWEEN: &str = "\
    SELECT CAST(MIN(tobs) AS REAL) AS min_temp, \
           CAST(MAX(tobs) AS REAL) AS max_temp, \
           AVG(tobs) AS avg_temp \
    FROM measurement \
    WHERE date >= ? AND date <= ?";

/// Configuration for the observation store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite file
    pub path: PathBuf,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    /// Create a config for the given database file with default pool settings.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Set the maximum pool size.
    pub fn with_max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Set the connection acquire timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

/// Read-only handle on the observation dataset.
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct WeatherStore {
    pool: SqlitePool,
}

impl WeatherStore {
    /// Open the store and check its schema.
    ///
    /// The file must already exist; it is opened read-only and never
    /// created or migrated.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(StoreError::Unavailable)?;

        let store = Self { pool };
        {
            let mut conn = store.connection().await?;
            schema::validate(&mut *conn).await?;
        }

        info!(path = %config.path.display(), "Opened observation store");
        Ok(store)
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub(super) async fn connection(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        self.pool.acquire().await.map_err(StoreError::Unavailable)
    }

    /// The most recent observation date across all stations.
    pub async fn latest_measurement_date(&self) -> Result<ObsDate, StoreError> {
        let mut conn = self.connection().await?;
        let latest: Option<String> = sqlx::query_scalar(LATEST_DATE)
            .fetch_one(&mut *conn)
            .await?;

        let latest = latest.ok_or(StoreError::EmptyDataset)?;
        let date = ObsDate::parse(&latest)
            .map_err(|_| StoreError::InvalidStoredDate { value: latest })?;

        debug!(%date, "Latest measurement date");
        Ok(date)
    }

    /// All precipitation readings on or after `floor`, oldest first.
    pub async fn measurements_since(
        &self,
        floor: ObsDate,
    ) -> Result<Vec<PrecipitationRow>, StoreError> {
        let mut conn = self.connection().await?;
        let rows: Vec<PrecipitationRow> = sqlx::query_as(MEASUREMENTS_SINCE)
            .bind(floor.to_string())
            .fetch_all(&mut *conn)
            .await?;

        debug!(%floor, rows = rows.len(), "Fetched measurements");
        Ok(rows)
    }

    /// Every station that has at least one measurement, sorted.
    pub async fn distinct_station_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.connection().await?;
        let stations: Vec<String> = sqlx::query_scalar(DISTINCT_STATIONS)
            .fetch_all(&mut *conn)
            .await?;

        debug!(count = stations.len(), "Fetched station ids");
        Ok(stations)
    }

    /// The station with the most measurements.
    ///
    /// Ties are broken by picking the lowest station identifier.
    pub async fn most_active_station(&self) -> Result<String, StoreError> {
        let mut conn = self.connection().await?;
        let station: Option<String> = sqlx::query_scalar(MOST_ACTIVE_STATION)
            .fetch_optional(&mut *conn)
            .await?;

        let station = station.ok_or(StoreError::EmptyDataset)?;
        debug!(%station, "Most active station");
        Ok(station)
    }

    /// Temperature readings for one station on or after `floor`, oldest first.
    pub async fn temperatures_for_station_since(
        &self,
        station: &str,
        floor: ObsDate,
    ) -> Result<Vec<TemperatureRow>, StoreError> {
        let mut conn = self.connection().await?;
        let rows: Vec<TemperatureRow> = sqlx::query_as(STATION_TEMPERATURES_SINCE)
            .bind(station)
            .bind(floor.to_string())
            .fetch_all(&mut *conn)
            .await?;

        debug!(station, %floor, rows = rows.len(), "Fetched station temperatures");
        Ok(rows)
    }

    /// Minimum, maximum and mean temperature between `floor` and `ceiling`
    /// inclusive, or from `floor` onwards when `ceiling` is `None`.
    ///
    /// An empty range is not an error: every aggregate is `None`.
    pub async fn temperature_stats(
        &self,
        floor: ObsDate,
        ceiling: Option<ObsDate>,
    ) -> Result<TemperatureStats, StoreError> {
        let mut conn = self.connection().await?;
        let stats: TemperatureStats = match ceiling {
            None => {
                sqlx::query_as(STATS_SINCE)
                    .bind(floor.to_string())
                    .fetch_one(&mut *conn)
                    .await?
            }
            Some(ceiling) => {
                sqlx::query_as(STATS_BETWEEN)
                    .bind(floor.to_string())
                    .bind(ceiling.to_string())
                    .fetch_one(&mut *conn)
                    .await?
            }
        };

        if stats.is_empty() {
            debug!(%floor, ?ceiling, "No measurements in range");
        }
        Ok(stats)
    }
}
