//! Stay arithmetic: whole-day durations between calendar dates.

use chrono::{Days, NaiveDate};

/// Number of whole days between `check_in` and `check_out`.
///
/// Truncates toward zero like integer division of the elapsed time by one
/// day. Calendar dates carry no time-of-day, so the result is exact.
/// Returns zero or a negative count when check-out is not after check-in;
/// callers decide whether that is acceptable.
pub fn stay_duration_days(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    check_out.signed_duration_since(check_in).num_days()
}

/// The check-out date for a stay of `duration_days` starting at `check_in`.
///
/// Returns `None` if the result would fall outside the supported calendar
/// range.
pub fn check_out_for(check_in: NaiveDate, duration_days: u32) -> Option<NaiveDate> {
    check_in.checked_add_days(Days::new(u64::from(duration_days)))
}
