//! # Busday Core
//!
//! Weekday and business day counting between calendar dates.
//!
//! This crate provides:
//!
//! - **Types**: A `Date` newtype with a derived day of week
//! - **Counting**: Weekdays and business days strictly between two dates
//! - **Holidays**: Flat holiday lists and rule-based public holidays
//! - **Calendars**: Named holiday calendars loadable from JSON
//!
//! ## Counting Policy
//!
//! Both bounds are excluded. When the second date is on or before the day
//! after the first, the interval is empty and every count is zero; this
//! includes inverted ranges, which are not treated as errors. The weekend is
//! fixed to Saturday and Sunday.
//!
//! ## Example
//!
//! ```rust
//! use busday_core::prelude::*;
//!
//! let monday = Date::from_ymd(2013, 10, 7).unwrap();
//! let wednesday = Date::from_ymd(2013, 10, 9).unwrap();
//! let tuesday = Date::from_ymd(2013, 10, 8).unwrap();
//!
//! assert_eq!(weekdays_between(monday, wednesday), 1);
//! assert_eq!(business_days_between(monday, wednesday, &[tuesday]), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        business_days_between, business_days_between_rules, weekdays_between, Calendar,
        HolidayCalendar, HolidayRule, PublicHoliday, WeekendCalendar,
    };
    pub use crate::error::{BusdayError, BusdayResult};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{BusdayError, BusdayResult};
pub use types::Date;
