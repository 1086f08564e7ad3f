//! Defines [`ForecastRecord`] and [`ForecastSet`], the validated input of the
//! forecast aggregator.

use chrono::NaiveDateTime;

/// Wall-clock format of the `dt_txt` field in forecast payloads.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One forecast slot (typically three hours wide).
///
/// Records are only built by the payload layer after validation, or directly by
/// callers through [`ForecastRecord::new`] / [`ForecastRecord::parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    /// The slot's wall-clock instant. Both the next-day window and the
    /// `HH:MM` label are read from it.
    pub timestamp: NaiveDateTime,
    /// Forecasted temperature in degrees Celsius.
    pub temperature: f64,
    /// The first weather label of the slot, e.g. `"clear sky"`.
    pub condition_description: String,
}

impl ForecastRecord {
    /// Creates a record from an already parsed timestamp.
    pub fn new(
        timestamp: NaiveDateTime,
        temperature: f64,
        condition_description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            condition_description: condition_description.into(),
        }
    }

    /// Creates a record from a `"YYYY-MM-DD HH:MM:SS"` timestamp.
    ///
    /// # Errors
    ///
    /// Returns the [`chrono::ParseError`] if the text does not match [`TIMESTAMP_FORMAT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use forecast_dashboard::ForecastRecord;
    ///
    /// let record = ForecastRecord::parse("2024-07-01 12:00:00", 25.0, "clear sky").unwrap();
    /// assert_eq!(record.timestamp_text(), "2024-07-01 12:00:00");
    /// assert!(ForecastRecord::parse("yesterday", 25.0, "clear sky").is_err());
    /// ```
    pub fn parse(
        timestamp_text: &str,
        temperature: f64,
        condition_description: impl Into<String>,
    ) -> Result<Self, chrono::ParseError> {
        let timestamp = NaiveDateTime::parse_from_str(timestamp_text, TIMESTAMP_FORMAT)?;
        Ok(Self::new(timestamp, temperature, condition_description))
    }

    /// The timestamp rendered with [`TIMESTAMP_FORMAT`].
    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Time of day of the slot truncated to minutes, formatted as `HH:MM`.
    pub fn hour_minute(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// The ordered forecast records of one city's horizon.
///
/// Order is whatever the upstream API delivered (increasing timestamps); the
/// set is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSet {
    records: Vec<ForecastRecord>,
}

impl ForecastSet {
    pub fn new(records: Vec<ForecastRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastRecord> {
        self.records.iter()
    }

    /// First and last timestamp of the set, if any.
    pub fn horizon(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.timestamp, last.timestamp))
    }
}

impl From<Vec<ForecastRecord>> for ForecastSet {
    fn from(records: Vec<ForecastRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a ForecastSet {
    type Item = &'a ForecastRecord;
    type IntoIter = std::slice::Iter<'a, ForecastRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
