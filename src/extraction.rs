use std::str::FromStr;
use csv::StringRecord;
use log::{info, warn};
use thiserror::Error;
use crate::manager_jma::models::{day_column_name, TemperatureTable};
use crate::models::ObservationRecord;

const LOCATION_COLUMN: &str = "地点";
const YEAR_COLUMN: &str = "現在時刻(年)";
const MONTH_COLUMN: &str = "現在時刻(月)";
const DAY_COLUMN: &str = "現在時刻(日)";
const HOUR_COLUMN: &str = "現在時刻(時)";
const MINUTE_COLUMN: &str = "現在時刻(分)";

/// Picks out the maximum temperature and measurement time for a location.
/// The temperature column is chosen by the day of month given in the location's own row.
/// If the location appears more than once the first row is used.
///
/// # Arguments
///
/// * 'table' - the parsed temperature table
/// * 'location' - value of the location column to look for
pub fn extract_observation(table: &TemperatureTable, location: &str) -> Result<ObservationRecord, ExtractError> {
    let location_column = column(table, LOCATION_COLUMN)?;

    let mut rows = table.rows_matching(location_column, location);
    let row = rows.next()
        .ok_or_else(|| ExtractError::NotFoundError(location.to_string()))?;
    let duplicates = rows.count();
    if duplicates > 0 {
        warn!("{} additional rows found for {}, using the first one", duplicates, location);
    }

    let year: i32 = value(row, column(table, YEAR_COLUMN)?, YEAR_COLUMN)?;
    let month: u32 = value(row, column(table, MONTH_COLUMN)?, MONTH_COLUMN)?;
    let day: u32 = value(row, column(table, DAY_COLUMN)?, DAY_COLUMN)?;
    let hour: u32 = value(row, column(table, HOUR_COLUMN)?, HOUR_COLUMN)?;
    let minute: u32 = value(row, column(table, MINUTE_COLUMN)?, MINUTE_COLUMN)?;

    let temp_column_name = day_column_name(day);
    let temp_column = table.day_column(day)
        .ok_or_else(|| ExtractError::MissingColumnError(temp_column_name.clone()))?;
    let temperature: f64 = value(row, temp_column, &temp_column_name)?;
    if !temperature.is_finite() {
        return Err(ExtractError::InvalidValueError(format!("{}: {}", temp_column_name, temperature)));
    }

    let record = ObservationRecord { temperature, year, month, day, hour, minute };
    info!("Observation for {}: {}", location, record);

    Ok(record)
}

fn column(table: &TemperatureTable, name: &str) -> Result<usize, ExtractError> {
    table.column(name).ok_or_else(|| ExtractError::MissingColumnError(name.to_string()))
}

/// Parses a cell, a missing cell in a short row counts as empty
///
/// # Arguments
///
/// * 'row' - the row to read from
/// * 'index' - column index
/// * 'name' - column name, used in errors
fn value<T: FromStr>(row: &StringRecord, index: usize, name: &str) -> Result<T, ExtractError> {
    let raw = row.get(index).unwrap_or("");
    raw.parse::<T>()
        .map_err(|_| ExtractError::InvalidValueError(format!("{}: {:?}", name, raw)))
}

/// Error depicting errors that occur while extracting an observation from the table
///
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("NotFoundError: no data found for {0}")]
    NotFoundError(String),
    #[error("MissingColumnError: {0} is not present in the CSV")]
    MissingColumnError(String),
    #[error("InvalidValueError: {0}")]
    InvalidValueError(String),
}
