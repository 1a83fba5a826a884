//! Calendar arithmetic for schedule derivation

use chrono::{Datelike, Days, NaiveDate};

/// Add a whole number of weeks (`weeks * 7` calendar days)
#[must_use]
pub fn add_weeks(date: NaiveDate, weeks: u32) -> NaiveDate {
    date + Days::new(u64::from(weeks) * 7)
}

/// Add calendar months with overflow-forward semantics.
///
/// When the target month is shorter than the source day-of-month, the date
/// rolls forward into the following month instead of clamping:
/// 2024-01-31 plus one month is 2024-03-02 (February 2024 has 29 days), and
/// 2024-05-31 plus nine months is 2025-03-03. This keeps month addition from
/// month-end dates deterministic and matches the behavior the stored records
/// were produced with.
#[must_use]
pub fn add_months_rolling(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    match NaiveDate::from_ymd_opt(year, month, date.day()) {
        Some(due) => due,
        None => {
            // Day-of-month exceeds the target month's length; roll the
            // remainder into the following month.
            let last = last_day_of_month(year, month);
            let overflow = u64::from(date.day() - last);
            NaiveDate::from_ymd_opt(year, month, last).unwrap() + Days::new(overflow)
        }
    }
}

/// Number of days in the given month
fn last_day_of_month(year: i32, month: u32) -> u32 {
    // The first of a month is always a valid date
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next_first.pred_opt().unwrap().day()
}
