//! Schedule derivation and completion aggregation
//!
//! Pure functions over in-memory values: every operation takes an explicit
//! reference date and returns freshly allocated records. Statuses are
//! snapshots as of that reference date; [`recompute_status`] is the explicit
//! re-derivation hook, invoked whenever the caller decides a snapshot is
//! stale.

use crate::models::DoseRecord;
use crate::schedule::calendar::{Calendar, npi_calendar};
use chrono::NaiveDate;
use log::debug;

/// Derive dose records against the built-in NPI calendar.
///
/// Returns exactly one record per configured rule, in table order. See
/// [`Calendar::generate`] for the classification semantics.
#[must_use]
pub fn generate_schedule(date_of_birth: NaiveDate, reference_date: NaiveDate) -> Vec<DoseRecord> {
    generate(npi_calendar(), date_of_birth, reference_date)
}

// Shared derivation behind Calendar::generate and generate_schedule.
pub(crate) fn generate(
    calendar: &Calendar,
    date_of_birth: NaiveDate,
    reference_date: NaiveDate,
) -> Vec<DoseRecord> {
    let schedule: Vec<DoseRecord> = calendar
        .rules()
        .iter()
        .map(|rule| {
            let due_on = rule.offset.apply(date_of_birth);

            if rule.offset.is_birth() && reference_date >= date_of_birth {
                DoseRecord::completed(rule.name.clone(), date_of_birth, due_on)
            } else if reference_date > due_on {
                DoseRecord::overdue(rule.name.clone(), due_on)
            } else {
                DoseRecord::due(rule.name.clone(), due_on)
            }
        })
        .collect();

    debug!(
        "derived {} dose records for birth date {date_of_birth} as of {reference_date}",
        schedule.len()
    );

    schedule
}

/// Re-classify non-completed records as of `reference_date`.
///
/// Completed records pass through untouched; due/overdue is re-derived for
/// the rest. Statuses are otherwise snapshots, so the caller decides when a
/// schedule is refreshed.
#[must_use]
pub fn recompute_status(doses: &[DoseRecord], reference_date: NaiveDate) -> Vec<DoseRecord> {
    doses
        .iter()
        .map(|dose| {
            if dose.is_completed() {
                dose.clone()
            } else if reference_date > dose.due_on {
                DoseRecord::overdue(dose.name.clone(), dose.due_on)
            } else {
                DoseRecord::due(dose.name.clone(), dose.due_on)
            }
        })
        .collect()
}

/// Percentage of completed doses, rounded half away from zero.
///
/// An empty sequence is 0% complete; 3 completed of 7 is 43.
#[must_use]
pub fn completion_rate(doses: &[DoseRecord]) -> u8 {
    if doses.is_empty() {
        return 0;
    }

    let completed = doses.iter().filter(|d| d.is_completed()).count();

    // f64::round rounds half away from zero
    ((completed as f64 / doses.len() as f64) * 100.0).round() as u8
}
