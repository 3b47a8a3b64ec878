//! The fixed weekend definition.
//!
//! The weekend is two days of a seven-day week and never changes at runtime.

use chrono::Weekday;

/// Days of the week that are never business days.
pub const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// First day of the logical week. Weekday counting aligns on this day.
pub const WEEK_ANCHOR: Weekday = Weekday::Mon;

/// Number of non-weekend days in a full seven-day week.
pub const WEEKDAYS_PER_WEEK: i64 = 7 - WEEKEND.len() as i64;

/// Returns true if `weekday` is a weekend day.
#[inline]
pub fn is_weekend(weekday: Weekday) -> bool {
    WEEKEND.contains(&weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_days() {
        assert!(is_weekend(Weekday::Sat));
        assert!(is_weekend(Weekday::Sun));
        for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert!(!is_weekend(day), "{day} should be a weekday");
        }
    }

    #[test]
    fn test_weekdays_per_week() {
        assert_eq!(WEEKDAYS_PER_WEEK, 5);
        assert!(!is_weekend(WEEK_ANCHOR));
    }
}
