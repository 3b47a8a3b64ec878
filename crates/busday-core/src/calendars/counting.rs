//! Weekday and business day counting over open date intervals.
//!
//! Every count excludes both bounds: between Monday 07-Oct-2013 and
//! Wednesday 09-Oct-2013 there is exactly one weekday. When the second date
//! is on or before the day after the first date the open interval is empty
//! and the count is zero. Inverted ranges are not an error.

use super::holidays::HolidayRule;
use super::weekend::{is_weekend, WEEKDAYS_PER_WEEK, WEEK_ANCHOR};
use crate::types::Date;

/// Counts the weekdays strictly between `first` and `second`.
///
/// Returns 0 when `second <= first + 1 day`, which covers equal, adjacent
/// and inverted dates.
///
/// The count is done in three parts: the partial week from `first + 1` up to
/// the next week anchor, the partial week from the last anchor up to
/// `second`, and the whole weeks between the two anchors. When both dates
/// sit in the same week the anchors cross and the week term goes negative,
/// which cancels the overlap of the two partial weeks.
///
/// # Example
///
/// ```
/// use busday_core::calendars::weekdays_between;
/// use busday_core::types::Date;
///
/// let monday = Date::from_ymd(2013, 10, 7).unwrap();
/// let wednesday = Date::from_ymd(2013, 10, 9).unwrap();
/// assert_eq!(weekdays_between(monday, wednesday), 1);
/// assert_eq!(weekdays_between(wednesday, monday), 0);
/// ```
#[must_use]
pub fn weekdays_between(first: Date, second: Date) -> i64 {
    let mut start = first.add_days(1);
    if start >= second {
        return 0;
    }

    let mut partial = 0;

    // Leading partial week: (first, start anchor)
    while start.weekday() != WEEK_ANCHOR {
        if !is_weekend(start.weekday()) {
            partial += 1;
        }
        start = start.add_days(1);
    }

    // Trailing partial week: [end anchor, second)
    let mut end = second;
    while end.weekday() != WEEK_ANCHOR {
        end = end.add_days(-1);
        if !is_weekend(end.weekday()) {
            partial += 1;
        }
    }

    // Both cursors sit on an anchor, so the span is a whole number of weeks.
    let weeks = start.days_between(&end) / 7;
    let count = weeks * WEEKDAYS_PER_WEEK + partial;

    log::trace!("weekdays between {first} and {second}: {count}");
    count
}

/// Counts the business days strictly between `first` and `second`.
///
/// Starts from [`weekdays_between`] and subtracts one for every holiday that
/// falls on a weekday strictly inside the interval. Holidays are evaluated
/// one by one: a date listed twice is subtracted twice. The result is not
/// floored at zero.
///
/// # Example
///
/// ```
/// use busday_core::calendars::business_days_between;
/// use busday_core::types::Date;
///
/// let monday = Date::from_ymd(2013, 10, 7).unwrap();
/// let wednesday = Date::from_ymd(2013, 10, 9).unwrap();
/// let tuesday = Date::from_ymd(2013, 10, 8).unwrap();
/// assert_eq!(business_days_between(monday, wednesday, &[]), 1);
/// assert_eq!(business_days_between(monday, wednesday, &[tuesday]), 0);
/// ```
#[must_use]
pub fn business_days_between(first: Date, second: Date, holidays: &[Date]) -> i64 {
    let weekdays = weekdays_between(first, second);

    let excluded = holidays
        .iter()
        .filter(|holiday| holiday.is_weekday() && holiday.is_strictly_between(first, second))
        .count() as i64;

    let count = weekdays - excluded;
    log::trace!(
        "business days between {first} and {second}: {count} ({excluded} of {} holidays excluded)",
        holidays.len()
    );
    count
}

/// Counts the business days strictly between `first` and `second`, with
/// holidays described by rules.
///
/// Each rule is asked for its dates between the two bounds and every produced
/// date that falls on a weekday is subtracted. The produced dates are not
/// re-checked against the bounds here: the rule owns its interval semantics.
/// All rules shipped with this crate exclude both bounds.
///
/// # Example
///
/// ```
/// use busday_core::calendars::{business_days_between_rules, PublicHoliday};
/// use busday_core::types::Date;
/// use chrono::Weekday;
///
/// // Second Tuesday of October
/// let rule = PublicHoliday::nth_weekday(10, Weekday::Tue, 2).unwrap();
/// let first = Date::from_ymd(2013, 10, 7).unwrap();
/// let second = Date::from_ymd(2013, 10, 9).unwrap();
/// assert_eq!(business_days_between_rules(first, second, &[rule]), 0);
/// ```
#[must_use]
pub fn business_days_between_rules<'a, I, H>(first: Date, second: Date, rules: I) -> i64
where
    I: IntoIterator<Item = &'a H>,
    H: HolidayRule + ?Sized + 'a,
{
    let weekdays = weekdays_between(first, second);

    // Linear in the number of produced dates, not in rules times days.
    let excluded = rules
        .into_iter()
        .flat_map(|rule| rule.dates_between(first, second))
        .filter(Date::is_weekday)
        .count() as i64;

    let count = weekdays - excluded;
    log::trace!("business days between {first} and {second}: {count} ({excluded} rule dates excluded)");
    count
}
