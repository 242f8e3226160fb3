//! Throwaway SQLite databases for tests.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{Connection, SqliteConnection};
use tempfile::TempDir;

use super::{Measurement, Station, StoreConfig, WeatherStore};

/// Schema matching the production dataset, including its surrogate ids.
pub(crate) const STANDARD_SCHEMA: &str = "\
    CREATE TABLE measurement (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
    CREATE TABLE station (
        id INTEGER NOT NULL PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );";

/// A database file that lives as long as the fixture.
pub(crate) struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    /// Create a database with the standard schema and the given rows.
    pub(crate) async fn new(stations: &[Station], measurements: &[Measurement]) -> Self {
        let fixture = Self::with_schema(STANDARD_SCHEMA).await;

        let mut conn = fixture.writer().await;
        for s in stations {
            sqlx::query(
                "INSERT INTO station (station, name, latitude, longitude, elevation) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&s.station)
            .bind(&s.name)
            .bind(s.latitude)
            .bind(s.longitude)
            .bind(s.elevation)
            .execute(&mut conn)
            .await
            .unwrap();
        }
        for m in measurements {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(&m.station)
                .bind(&m.date)
                .bind(m.prcp)
                .bind(m.tobs)
                .execute(&mut conn)
                .await
                .unwrap();
        }
        conn.close().await.unwrap();

        fixture
    }

    /// Create a database from arbitrary DDL, with no rows.
    pub(crate) async fn with_schema(ddl: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hawaii.sqlite");
        let fixture = Self { _dir: dir, path };

        let mut conn = fixture.writer().await;
        sqlx::raw_sql(ddl).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();

        fixture
    }

    async fn writer(&self) -> SqliteConnection {
        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        SqliteConnection::connect_with(&options).await.unwrap()
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn config(&self) -> StoreConfig {
        StoreConfig::new(&self.path)
    }

    /// Open the database through the production read-only path.
    pub(crate) async fn open(&self) -> WeatherStore {
        WeatherStore::open(&self.config()).await.unwrap()
    }
}

/// Shorthand for a measurement row.
pub(crate) fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

/// A handful of Hawaiian stations from the real dataset.
pub(crate) fn stations() -> Vec<Station> {
    vec![
        Station {
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            station: "USC00513117".to_string(),
            name: "KANEOHE 838.1, HI US".to_string(),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
        Station {
            station: "USC00519281".to_string(),
            name: "WAIHEE 837.5, HI US".to_string(),
            latitude: 21.45167,
            longitude: -157.84889,
            elevation: 32.9,
        },
    ]
}
