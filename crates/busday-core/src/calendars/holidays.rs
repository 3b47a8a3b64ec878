//! Rule-based public holidays.
//!
//! A [`HolidayRule`] expands to the concrete holiday dates it produces inside
//! an interval. [`PublicHoliday`] covers the usual kinds of rule: one-off
//! dates, fixed month/day every year (optionally moved off the weekend), and
//! floating holidays such as "second Monday of June".

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{BusdayError, BusdayResult};
use crate::types::{days_in_month, Date};

/// Trait for anything that expands to holiday dates within an interval.
///
/// `start` and `end` are the bounds handed to the business day counter,
/// passed through unchanged. The counter does not re-check the produced
/// dates against them, so implementations decide whether the bounds are
/// included. Ordering of the result is irrelevant and each call must
/// produce the same dates for the same bounds.
pub trait HolidayRule: Send + Sync {
    /// Returns the holiday dates this rule produces between `start` and `end`.
    fn dates_between(&self, start: Date, end: Date) -> Vec<Date>;
}

impl<T: HolidayRule + ?Sized> HolidayRule for &T {
    fn dates_between(&self, start: Date, end: Date) -> Vec<Date> {
        (**self).dates_between(start, end)
    }
}

impl<T: HolidayRule + ?Sized> HolidayRule for Box<T> {
    fn dates_between(&self, start: Date, end: Date) -> Vec<Date> {
        (**self).dates_between(start, end)
    }
}

/// A public holiday definition.
///
/// All variants produce only dates strictly between the requested bounds.
///
/// # JSON Format
///
/// ```json
/// [
///   { "type": "fixed", "date": "2013-10-08" },
///   { "type": "annual", "month": 4, "day": 25 },
///   { "type": "annual_observed", "month": 1, "day": 1 },
///   { "type": "nth_weekday", "month": 6, "weekday": "Mon", "nth": 2 },
///   { "type": "last_weekday", "month": 5, "weekday": "Mon" }
/// ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PublicHoliday {
    /// A single one-off date.
    Fixed {
        /// The holiday date.
        date: Date,
    },

    /// The same month and day every year, even when it falls on a weekend.
    Annual {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// The same month and day every year, moved to the following Monday
    /// when it falls on a weekend.
    AnnualObserved {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// The nth occurrence of a weekday in a month, e.g. 2nd Monday of June.
    NthWeekday {
        /// Month (1-12).
        month: u32,
        /// Day of week.
        weekday: Weekday,
        /// Occurrence (1-5). Years without that occurrence have no holiday.
        nth: u32,
    },

    /// The last occurrence of a weekday in a month, e.g. last Monday of May.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// Day of week.
        weekday: Weekday,
    },
}

impl PublicHoliday {
    /// Creates a one-off holiday.
    #[must_use]
    pub fn fixed(date: Date) -> Self {
        Self::Fixed { date }
    }

    /// Creates a holiday on the same month and day every year.
    ///
    /// February 29 is accepted and only produces dates in leap years.
    ///
    /// # Errors
    ///
    /// Returns `BusdayError::InvalidHoliday` if the month/day never exists.
    pub fn annual(month: u32, day: u32) -> BusdayResult<Self> {
        let rule = Self::Annual { month, day };
        rule.validate()?;
        Ok(rule)
    }

    /// Creates a yearly holiday that is observed on the following Monday
    /// when it falls on a weekend.
    ///
    /// # Errors
    ///
    /// Returns `BusdayError::InvalidHoliday` if the month/day never exists.
    pub fn annual_observed(month: u32, day: u32) -> BusdayResult<Self> {
        let rule = Self::AnnualObserved { month, day };
        rule.validate()?;
        Ok(rule)
    }

    /// Creates a holiday on the `nth` `weekday` of `month`.
    ///
    /// # Errors
    ///
    /// Returns `BusdayError::InvalidHoliday` if the month is invalid or `nth`
    /// is outside 1-5.
    pub fn nth_weekday(month: u32, weekday: Weekday, nth: u32) -> BusdayResult<Self> {
        let rule = Self::NthWeekday {
            month,
            weekday,
            nth,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Creates a holiday on the last `weekday` of `month`.
    ///
    /// # Errors
    ///
    /// Returns `BusdayError::InvalidHoliday` if the month is invalid.
    pub fn last_weekday(month: u32, weekday: Weekday) -> BusdayResult<Self> {
        let rule = Self::LastWeekday { month, weekday };
        rule.validate()?;
        Ok(rule)
    }

    /// Checks that the rule can produce at least one valid date.
    ///
    /// Constructors call this already; it exists for rules that were
    /// deserialized.
    ///
    /// # Errors
    ///
    /// Returns `BusdayError::InvalidHoliday` describing the first problem found.
    pub fn validate(&self) -> BusdayResult<()> {
        match *self {
            Self::Fixed { .. } => Ok(()),
            Self::Annual { month, day } | Self::AnnualObserved { month, day } => {
                validate_month(month)?;
                // Leap year, so Feb 29 passes
                if day == 0 || day > days_in_month(2000, month) {
                    return Err(BusdayError::invalid_holiday(format!(
                        "day {day} does not exist in month {month}"
                    )));
                }
                Ok(())
            }
            Self::NthWeekday { month, nth, .. } => {
                validate_month(month)?;
                if !(1..=5).contains(&nth) {
                    return Err(BusdayError::invalid_holiday(format!(
                        "nth must be between 1 and 5, got {nth}"
                    )));
                }
                Ok(())
            }
            Self::LastWeekday { month, .. } => validate_month(month),
        }
    }

    /// Returns the date this rule produces for `year`, if any.
    ///
    /// For observed holidays this is the date after moving off the weekend,
    /// which can fall in the following year.
    #[must_use]
    pub fn occurrence(&self, year: i32) -> Option<Date> {
        match *self {
            Self::Fixed { date } => (date.year() == year).then_some(date),
            Self::Annual { month, day } => Date::from_ymd(year, month, day).ok(),
            Self::AnnualObserved { month, day } => {
                let mut date = Date::from_ymd(year, month, day).ok()?;
                while date.is_weekend() {
                    date = date.add_days(1);
                }
                Some(date)
            }
            Self::NthWeekday {
                month,
                weekday,
                nth,
            } => {
                let first = Date::from_ymd(year, month, 1).ok()?;
                let offset = (weekday.num_days_from_monday() + 7
                    - first.weekday().num_days_from_monday())
                    % 7;
                // Unvalidated rules can carry any nth
                let day = nth
                    .checked_sub(1)?
                    .checked_mul(7)?
                    .checked_add(1 + offset)?;
                if day > first.days_in_month() {
                    return None;
                }
                Date::from_ymd(year, month, day).ok()
            }
            Self::LastWeekday { month, weekday } => {
                let last_day = days_in_month(year, month);
                let last = Date::from_ymd(year, month, last_day).ok()?;
                let offset = (last.weekday().num_days_from_monday() + 7
                    - weekday.num_days_from_monday())
                    % 7;
                Some(last.add_days(-i64::from(offset)))
            }
        }
    }

    /// Returns true if the rule produces `date`.
    #[must_use]
    pub fn occurs_on(&self, date: Date) -> bool {
        self.dates_between(date.add_days(-1), date.add_days(1))
            .contains(&date)
    }
}

impl HolidayRule for PublicHoliday {
    fn dates_between(&self, start: Date, end: Date) -> Vec<Date> {
        if start >= end {
            return Vec::new();
        }

        // An observed date can roll over from the previous year.
        let first_year = match self {
            Self::AnnualObserved { .. } => start.year() - 1,
            _ => start.year(),
        };

        (first_year..=end.year())
            .filter_map(|year| self.occurrence(year))
            .filter(|date| date.is_strictly_between(start, end))
            .collect()
    }
}

impl fmt::Display for PublicHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { date } => write!(f, "{date}"),
            Self::Annual { month, day } => write!(f, "every {month:02}-{day:02}"),
            Self::AnnualObserved { month, day } => {
                write!(f, "every {month:02}-{day:02} (observed)")
            }
            Self::NthWeekday {
                month,
                weekday,
                nth,
            } => write!(f, "{} {weekday} of month {month}", ordinal(*nth)),
            Self::LastWeekday { month, weekday } => write!(f, "last {weekday} of month {month}"),
        }
    }
}

fn validate_month(month: u32) -> BusdayResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(BusdayError::invalid_holiday(format!(
            "month must be between 1 and 12, got {month}"
        )))
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
