use std::fmt;

/// Maximum temperature for one site together with the time the feed was measured
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub temperature: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ObservationRecord {
    /// Returns the measurement time as "{year}年{month}月{day}日{hour}時{minute}分 計測"
    ///
    pub fn timing(&self) -> String {
        format!("{}年{}月{}日{}時{}分 計測", self.year, self.month, self.day, self.hour, self.minute)
    }
}

impl fmt::Display for ObservationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}度@{}", self.temperature, self.timing())
    }
}
