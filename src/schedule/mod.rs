//! Immunization schedule derivation
//!
//! The schedule engine is pure computation: given a date of birth, a
//! reference date, and a calendar of dose rules, it derives dose records
//! with due dates and status classification. Nothing here reads the wall
//! clock or touches mutable process state; callers supply the reference
//! date, which keeps derivation deterministic and safe to invoke from any
//! thread.

pub mod calendar;
pub mod dates;
pub mod engine;

pub use calendar::{Calendar, DoseOffset, DoseRule, npi_calendar};
pub use engine::{completion_rate, generate_schedule, recompute_status};
