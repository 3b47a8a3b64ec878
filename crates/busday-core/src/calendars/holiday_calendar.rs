//! Holiday calendar built from public holiday rules.
//!
//! Calendars can be constructed programmatically or loaded from JSON.
//!
//! # Example
//!
//! ```
//! use busday_core::calendars::{Calendar, HolidayCalendar, PublicHoliday};
//! use busday_core::types::Date;
//! use chrono::Weekday;
//!
//! let cal = HolidayCalendar::new("Sydney")
//!     .with_holiday(PublicHoliday::annual_observed(1, 1).unwrap())
//!     .with_holiday(PublicHoliday::annual(4, 25).unwrap())
//!     .with_holiday(PublicHoliday::nth_weekday(6, Weekday::Mon, 2).unwrap());
//!
//! assert!(!cal.is_business_day(Date::from_ymd(2013, 6, 10).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2013, 6, 11).unwrap()));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::counting::business_days_between_rules;
use super::holidays::{HolidayRule, PublicHoliday};
use super::Calendar;
use crate::error::{BusdayError, BusdayResult};
use crate::types::Date;

/// A named set of public holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<PublicHoliday>,
}

impl HolidayCalendar {
    /// Create a new calendar with no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
        }
    }

    /// Builder-style variant of [`HolidayCalendar::add_holiday`].
    #[must_use]
    pub fn with_holiday(mut self, holiday: PublicHoliday) -> Self {
        self.add_holiday(holiday);
        self
    }

    /// Add a holiday rule.
    pub fn add_holiday(&mut self, holiday: PublicHoliday) {
        self.holidays.push(holiday);
    }

    /// The holiday rules, in insertion order.
    pub fn holidays(&self) -> &[PublicHoliday] {
        &self.holidays
    }

    /// Load a calendar from JSON data.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// {
    ///   "name": "Sydney",
    ///   "holidays": [
    ///     { "type": "annual_observed", "month": 1, "day": 1 },
    ///     { "type": "nth_weekday", "month": 6, "weekday": "Mon", "nth": 2 }
    ///   ]
    /// }
    /// ```
    pub fn from_json(json: &str) -> BusdayResult<Self> {
        let data: CalendarData = serde_json::from_str(json)
            .map_err(|e| BusdayError::calendar_error(format!("Failed to parse JSON: {}", e)))?;
        Self::from_calendar_data(data)
    }

    /// Load a calendar from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> BusdayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BusdayError::calendar_error(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Build a calendar from already-parsed data, validating every rule.
    pub fn from_calendar_data(data: CalendarData) -> BusdayResult<Self> {
        for (index, holiday) in data.holidays.iter().enumerate() {
            holiday.validate().map_err(|e| {
                BusdayError::calendar_error(format!(
                    "Holiday #{} in '{}': {}",
                    index + 1,
                    data.name,
                    e
                ))
            })?;
        }

        log::debug!(
            "loaded holiday calendar '{}' with {} rules",
            data.name,
            data.holidays.len()
        );

        Ok(Self {
            name: data.name,
            holidays: data.holidays,
        })
    }

    /// Export calendar data to a serializable struct.
    pub fn to_calendar_data(&self) -> CalendarData {
        CalendarData {
            name: self.name.clone(),
            holidays: self.holidays.clone(),
        }
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> BusdayResult<String> {
        serde_json::to_string_pretty(&self.to_calendar_data()).map_err(|e| {
            BusdayError::calendar_error(format!("Failed to serialize calendar: {}", e))
        })
    }

    /// Concrete holiday dates strictly between `start` and `end`, sorted and
    /// without duplicates.
    pub fn holidays_between(&self, start: Date, end: Date) -> Vec<Date> {
        let mut dates: Vec<Date> = self
            .holidays
            .iter()
            .flat_map(|rule| rule.dates_between(start, end))
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    /// Counts business days strictly between `first` and `second`.
    ///
    /// Two rules landing on the same weekday each reduce the count.
    pub fn business_days_between(&self, first: Date, second: Date) -> i64 {
        business_days_between_rules(first, second, &self.holidays)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.iter().any(|rule| rule.occurs_on(date))
    }
}

/// Calendar data structure for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar
    pub name: String,

    /// Holiday rules
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sydney() -> HolidayCalendar {
        HolidayCalendar::new("Sydney")
            .with_holiday(PublicHoliday::annual_observed(1, 1).unwrap())
            .with_holiday(PublicHoliday::annual(4, 25).unwrap())
            .with_holiday(PublicHoliday::nth_weekday(6, Weekday::Mon, 2).unwrap())
            .with_holiday(PublicHoliday::annual_observed(12, 25).unwrap())
    }

    #[test]
    fn test_is_business_day() {
        let cal = sydney();

        assert_eq!(cal.name(), "Sydney");
        // Anzac Day 2013, Thursday
        assert!(!cal.is_business_day(date(2013, 4, 25)));
        // Queen's Birthday 2013
        assert!(!cal.is_business_day(date(2013, 6, 10)));
        // New Year 2011 observed on Monday 3rd
        assert!(!cal.is_business_day(date(2011, 1, 3)));
        // Weekend
        assert!(!cal.is_business_day(date(2013, 10, 12)));
        assert!(cal.is_business_day(date(2013, 10, 8)));
    }

    #[test]
    fn test_next_business_day_skips_holidays() {
        let cal = sydney();
        // Sat 8-Jun-2013 -> Tue 11th, skipping Queen's Birthday
        assert_eq!(cal.next_business_day(date(2013, 6, 8)), date(2013, 6, 11));
    }

    #[test]
    fn test_business_days_between() {
        let cal = sydney();
        // Mon 3-Jun to Mon 17-Jun 2013: 9 weekdays, Queen's Birthday excluded
        assert_eq!(cal.business_days_between(date(2013, 6, 3), date(2013, 6, 17)), 8);
        assert_eq!(cal.business_days_between(date(2013, 10, 7), date(2013, 10, 9)), 1);
    }

    #[test]
    fn test_holidays_between() {
        let cal = sydney();
        assert_eq!(
            cal.holidays_between(date(2013, 1, 1), date(2013, 12, 31)),
            vec![date(2013, 4, 25), date(2013, 6, 10), date(2013, 12, 25)]
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let cal = sydney();
        let json = cal.to_json().unwrap();
        let loaded = HolidayCalendar::from_json(&json).unwrap();
        assert_eq!(loaded, cal);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "Test",
            "holidays": [
                { "type": "fixed", "date": "2013-10-08" },
                { "type": "last_weekday", "month": 5, "weekday": "Mon" }
            ]
        }"#;
        let cal = HolidayCalendar::from_json(json).unwrap();
        assert_eq!(cal.holidays().len(), 2);
        assert_eq!(cal.business_days_between(date(2013, 10, 7), date(2013, 10, 9)), 0);
    }

    #[test]
    fn test_from_json_without_holidays() {
        let cal = HolidayCalendar::from_json(r#"{ "name": "Empty" }"#).unwrap();
        assert!(cal.holidays().is_empty());
    }

    #[test]
    fn test_from_json_rejects_invalid_rule() {
        let json = r#"{
            "name": "Broken",
            "holidays": [{ "type": "nth_weekday", "month": 6, "weekday": "Mon", "nth": 7 }]
        }"#;
        let err = HolidayCalendar::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Holiday #1 in 'Broken'"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            HolidayCalendar::from_json("{ not json"),
            Err(BusdayError::CalendarError { .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sydney().to_json().unwrap().as_bytes())
            .unwrap();

        let loaded = HolidayCalendar::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, sydney());
    }

    #[test]
    fn test_from_missing_file() {
        let result = HolidayCalendar::from_json_file("/nonexistent/calendar.json");
        assert!(matches!(result, Err(BusdayError::CalendarError { .. })));
    }
}
