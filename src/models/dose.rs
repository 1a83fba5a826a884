//! Dose record model
//!
//! A dose record is the per-child instantiation of a calendar rule: the
//! rule-derived due date, the status classification as of some reference
//! date, and the administration date once the dose has been given.
//!
//! Invariant: `administered_on` is `Some` exactly when the status is
//! completed. The constructors below enforce this by construction.

use crate::models::types::DoseStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled dose for a child
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseRecord {
    /// Vaccine/dose name, copied from the calendar rule
    pub name: String,
    /// Date the dose was administered, present only when completed
    pub administered_on: Option<NaiveDate>,
    /// Status as of the reference date the record was last derived at
    pub status: DoseStatus,
    /// Rule-derived due date, present regardless of status
    pub due_on: NaiveDate,
}

impl DoseRecord {
    /// Create a record for a dose that is not yet due
    #[must_use]
    pub const fn due(name: String, due_on: NaiveDate) -> Self {
        Self {
            name,
            administered_on: None,
            status: DoseStatus::Due,
            due_on,
        }
    }

    /// Create a record for a dose whose due date has passed
    #[must_use]
    pub const fn overdue(name: String, due_on: NaiveDate) -> Self {
        Self {
            name,
            administered_on: None,
            status: DoseStatus::Overdue,
            due_on,
        }
    }

    /// Create a record for an administered dose
    #[must_use]
    pub const fn completed(name: String, administered_on: NaiveDate, due_on: NaiveDate) -> Self {
        Self {
            name,
            administered_on: Some(administered_on),
            status: DoseStatus::Completed,
            due_on,
        }
    }

    /// Whether the dose has been administered
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, DoseStatus::Completed)
    }

    /// Whether the dose is overdue
    #[must_use]
    pub const fn is_overdue(&self) -> bool {
        matches!(self.status, DoseStatus::Overdue)
    }

    /// Mark the dose administered on the given date
    pub fn mark_administered(&mut self, date: NaiveDate) {
        self.status = DoseStatus::Completed;
        self.administered_on = Some(date);
    }

    /// Check the administration/status invariant
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.administered_on.is_some() == matches!(self.status, DoseStatus::Completed)
    }
}
