//! Business day calendars and counting.
//!
//! This module provides:
//! - Weekday and business day counting over open date intervals
//! - Rule-based public holiday definitions
//! - Business day calendars built from those rules

mod counting;
mod holiday_calendar;
mod holidays;
pub mod weekend;

pub use counting::{business_days_between, business_days_between_rules, weekdays_between};
pub use holiday_calendar::{CalendarData, HolidayCalendar};
pub use holidays::{HolidayRule, PublicHoliday};
pub use weekend::WEEKEND;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays.
/// Weekends are never business days.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a weekend day or a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Advances a date by a number of business days.
    ///
    /// Negative values move backward.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let (mut remaining, direction) = business_day_steps(days);

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }
}

/// Splits a signed business day offset into a step count and a direction.
fn business_day_steps(days: i32) -> (u32, i64) {
    let direction = if days >= 0 { 1 } else { -1 };
    (days.unsigned_abs(), direction)
}

/// A weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl WeekendCalendar {
    /// Counts business days strictly between two dates.
    #[must_use]
    pub fn business_days_between(&self, first: Date, second: Date) -> i64 {
        weekdays_between(first, second)
    }
}

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}
