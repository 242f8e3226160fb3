//! Shaping query rows into report structures.
//!
//! Nothing here touches the store; handlers fetch rows and pass them in.

use std::collections::BTreeMap;

use crate::domain::ObsDate;
use crate::store::PrecipitationRow;

/// Length of the trailing window used by the precipitation and tobs reports.
///
/// A flat count of days: a window ending after a 29 February starts one
/// calendar day later than the same date a year earlier.
pub const TRAILING_WINDOW_DAYS: u64 = 365;

/// Precipitation keyed by date, then by station.
///
/// Both levels are ordered so the serialized form is stable.
pub type PrecipitationByDate = BTreeMap<String, BTreeMap<String, Option<f64>>>;

/// First date of the trailing window that ends at `latest`.
pub fn trailing_window_start(latest: ObsDate) -> ObsDate {
    latest.days_before(TRAILING_WINDOW_DAYS)
}

/// Group precipitation readings by date, then station.
///
/// A later row for the same date and station replaces an earlier one.
pub fn precipitation_by_date<I>(rows: I) -> PrecipitationByDate
where
    I: IntoIterator<Item = PrecipitationRow>,
{
    let mut by_date = PrecipitationByDate::new();
    for row in rows {
        by_date
            .entry(row.date)
            .or_default()
            .insert(row.station, row.prcp);
    }
    by_date
}
