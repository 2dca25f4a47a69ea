use std::collections::BTreeMap;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Suffix of the per day maximum temperature columns, e.g. "15日の最高気温(℃)"
const DAY_COLUMN_SUFFIX: &str = "日の最高気温(℃)";

/// Returns the name of the maximum temperature column for the given day of month
///
/// # Arguments
///
/// * 'day' - day of month
pub fn day_column_name(day: u32) -> String {
    format!("{}{}", day, DAY_COLUMN_SUFFIX)
}

/// The JMA maximum temperature table as published, one row per observation site.
/// Values are kept as raw text, conversion happens when a value is picked out.
pub struct TemperatureTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    day_columns: BTreeMap<u32, usize>,
}

impl TemperatureTable {
    /// Parses CSV text with a header row into a table
    ///
    /// # Arguments
    ///
    /// * 'text' - decoded CSV document
    pub fn from_csv(text: &str) -> Result<TemperatureTable, csv::Error> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<String>>();

        let rows = rdr.records().collect::<Result<Vec<StringRecord>, csv::Error>>()?;

        let day_columns = index_day_columns(&headers);

        Ok(TemperatureTable { headers, rows, day_columns })
    }

    /// Returns the index of the named column
    ///
    /// # Arguments
    ///
    /// * 'name' - column name as given in the header row
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns the index of the maximum temperature column for a day of month
    ///
    /// # Arguments
    ///
    /// * 'day' - day of month
    pub fn day_column(&self, day: u32) -> Option<usize> {
        self.day_columns.get(&day).copied()
    }

    /// Returns all rows where the given column equals the value exactly
    ///
    /// # Arguments
    ///
    /// * 'column' - index of the column to compare
    /// * 'value' - value to look for
    pub fn rows_matching<'a>(&'a self, column: usize, value: &'a str) -> impl Iterator<Item = &'a StringRecord> + 'a {
        self.rows.iter().filter(move |r| r.get(column) == Some(value))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Maps day of month to column index for every header of the form "{day}日の最高気温(℃)"
///
/// # Arguments
///
/// * 'headers' - header row
fn index_day_columns(headers: &[String]) -> BTreeMap<u32, usize> {
    let mut day_columns = BTreeMap::new();

    for (i, h) in headers.iter().enumerate() {
        let Some(day) = h.strip_suffix(DAY_COLUMN_SUFFIX) else { continue };
        match day.parse::<u32>() {
            Ok(d) if (1..=31).contains(&d) => {
                day_columns.entry(d).or_insert(i);
            }
            _ => {}
        }
    }

    day_columns
}
