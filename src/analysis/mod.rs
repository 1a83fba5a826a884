//! Cohort analytics over registered children
//!
//! Read-only aggregations consumed by dashboards and reports. These depend
//! only on the dose-record shape, never on how a schedule was derived.

pub mod coverage;

pub use coverage::{
    CohortSummary, PriorityChild, VaccineCompliance, caregiver_distribution, cohort_summary,
    overdue_hotspots, priority_children, vaccine_compliance,
};
