use chrono::{Datelike, NaiveDate};
use crate::config::GateParameters;

/// Returns true if the pipeline should run on the given date, i.e. the month is within
/// the configured inclusive month range and the weekday is the configured weekday
///
/// # Arguments
///
/// * 'date' - the date to check, normally today in local time
/// * 'gate' - month range and weekday to run on
pub fn is_target_day(date: NaiveDate, gate: &GateParameters) -> bool {
    (gate.first_month..=gate.last_month).contains(&date.month()) && date.weekday() == gate.weekday
}
