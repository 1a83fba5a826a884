//! A Rust library for deriving infant immunization schedules from a national
//! immunization calendar, with per-dose status classification, completion
//! tracking, and cohort analytics.
//!
//! The schedule engine is pure: given a date of birth and an explicit
//! reference date it derives one dose record per calendar rule. Everything
//! time-dependent takes the reference date as a parameter; nothing in the
//! library reads the wall clock.

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use error::{Result, VaxTrackError};
pub use models::{Child, ChildCollection, DoseRecord, DoseStatus, Gender};

// Schedule engine
pub use schedule::{Calendar, DoseOffset, DoseRule, npi_calendar};
pub use schedule::{completion_rate, generate_schedule, recompute_status};

// Cohort analytics
pub use analysis::{
    CohortSummary, cohort_summary, overdue_hotspots, priority_children, vaccine_compliance,
};

// Session store
pub use store::{MemoryStore, Store};
