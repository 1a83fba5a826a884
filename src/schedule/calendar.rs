//! The national immunization calendar
//!
//! A calendar is the fixed, ordered table of dose rules: vaccine name plus
//! an offset from birth. The built-in table is the Nigerian NPI infant
//! schedule; deployments can load a replacement table from configuration.
//! The table is read-only for the lifetime of the process — changing the
//! national calendar means supplying a different table, not changing the
//! derivation algorithm.

use crate::error::{Result, VaxTrackError};
use crate::models::DoseRecord;
use crate::schedule::dates::{add_months_rolling, add_weeks};
use crate::schedule::engine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Offset from the date of birth at which a dose becomes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseOffset {
    /// Due `n` weeks after birth
    Weeks(u32),
    /// Due `n` calendar months after birth
    Months(u32),
}

impl DoseOffset {
    /// Whether this is an at-birth dose
    #[must_use]
    pub const fn is_birth(self) -> bool {
        matches!(self, Self::Weeks(0) | Self::Months(0))
    }

    /// Nominal length in days, used only to check table ordering
    #[must_use]
    pub const fn nominal_days(self) -> u32 {
        match self {
            Self::Weeks(n) => n * 7,
            Self::Months(n) => n * 30,
        }
    }

    /// Apply the offset to a date of birth
    #[must_use]
    pub fn apply(self, date_of_birth: NaiveDate) -> NaiveDate {
        match self {
            Self::Weeks(n) => add_weeks(date_of_birth, n),
            Self::Months(n) => add_months_rolling(date_of_birth, n),
        }
    }
}

/// A configured (vaccine name, offset) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseRule {
    /// Vaccine/dose name, e.g. "OPV (2nd dose)"
    pub name: String,
    /// Offset from birth at which the dose is due
    pub offset: DoseOffset,
}

impl DoseRule {
    /// Create a rule
    #[must_use]
    pub fn new(name: impl Into<String>, offset: DoseOffset) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }
}

/// An ordered, validated dose-rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Calendar {
    /// Rules in non-decreasing offset order
    rules: Vec<DoseRule>,
}

impl Calendar {
    /// Create a calendar, rejecting tables not in non-decreasing offset order
    pub fn new(rules: Vec<DoseRule>) -> Result<Self> {
        let ordered = rules
            .windows(2)
            .all(|pair| pair[0].offset.nominal_days() <= pair[1].offset.nominal_days());

        if !ordered {
            return Err(VaxTrackError::Calendar(
                "dose rules must be ordered by non-decreasing offset".to_string(),
            ));
        }

        Ok(Self { rules })
    }

    /// The built-in Nigerian NPI infant schedule
    #[must_use]
    pub fn npi() -> Self {
        use DoseOffset::{Months, Weeks};

        // Authored in table order: birth, 6, 10, 14 weeks, 9 months
        let rules = vec![
            DoseRule::new("BCG", Weeks(0)),
            DoseRule::new("Hepatitis B (1st dose)", Weeks(0)),
            DoseRule::new("OPV (1st dose)", Weeks(6)),
            DoseRule::new("Pentavalent (1st dose)", Weeks(6)),
            DoseRule::new("PCV (1st dose)", Weeks(6)),
            DoseRule::new("OPV (2nd dose)", Weeks(10)),
            DoseRule::new("Pentavalent (2nd dose)", Weeks(10)),
            DoseRule::new("PCV (2nd dose)", Weeks(10)),
            DoseRule::new("OPV (3rd dose)", Weeks(14)),
            DoseRule::new("Pentavalent (3rd dose)", Weeks(14)),
            DoseRule::new("PCV (3rd dose)", Weeks(14)),
            DoseRule::new("IPV", Weeks(14)),
            DoseRule::new("Measles (1st dose)", Months(9)),
            DoseRule::new("Yellow Fever", Months(9)),
        ];

        Self { rules }
    }

    /// Rules in table order
    #[must_use]
    pub fn rules(&self) -> &[DoseRule] {
        &self.rules
    }

    /// Number of configured rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Derive the dose records for a child born on `date_of_birth`, as of
    /// `reference_date`.
    ///
    /// Returns exactly one record per rule, in table order. At-birth rules
    /// with `reference_date >= date_of_birth` come back completed with the
    /// birth date as administration date. Any other rule is overdue when
    /// `reference_date` is strictly after its due date, otherwise due; a
    /// dose whose due date equals the reference date is due, not overdue.
    /// A date of birth in the future therefore yields an all-due schedule.
    #[must_use]
    pub fn generate(&self, date_of_birth: NaiveDate, reference_date: NaiveDate) -> Vec<DoseRecord> {
        engine::generate(self, date_of_birth, reference_date)
    }
}

/// Process-wide read-only NPI calendar, initialized on first use
static NPI: LazyLock<Calendar> = LazyLock::new(Calendar::npi);

/// The process-wide NPI calendar
#[must_use]
pub fn npi_calendar() -> &'static Calendar {
    &NPI
}
