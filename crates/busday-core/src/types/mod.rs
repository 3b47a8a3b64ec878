//! Domain types for business day calculations.
//!
//! - [`Date`]: Calendar date with a derived day of week

mod date;

pub(crate) use date::days_in_month;
pub use date::Date;
