//! Child entity model
//!
//! This module contains the Child model, which represents a registered child
//! with their immunization history. Dose records are created once at
//! registration from the calendar and the child's date of birth; later
//! mutation (marking a dose administered, refreshing statuses) re-invokes
//! the completion-rate reducer so the aggregate stays in sync.

use crate::models::collections::{EntityModel, ModelCollection};
use crate::models::dose::DoseRecord;
use crate::models::types::Gender;
use crate::schedule::{self, Calendar};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A registered child with immunization history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    /// Unique child identifier
    pub id: u32,
    /// Full name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Name of the registering caregiver
    pub caregiver_name: String,
    /// Caregiver phone number
    pub phone_number: String,
    /// Ordered dose records, one per calendar rule
    pub doses: Vec<DoseRecord>,
    /// Percentage of doses completed, kept in sync on mutation
    pub completion_rate: u8,
}

impl Child {
    /// Register a new child, deriving the initial schedule from the calendar
    #[must_use]
    pub fn register(
        id: u32,
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        calendar: &Calendar,
        reference_date: NaiveDate,
    ) -> Self {
        let doses = calendar.generate(date_of_birth, reference_date);
        let completion_rate = schedule::completion_rate(&doses);

        Self {
            id,
            name: name.into(),
            date_of_birth,
            gender,
            caregiver_name: String::new(),
            phone_number: String::new(),
            doses,
            completion_rate,
        }
    }

    /// Set caregiver details
    #[must_use]
    pub fn with_caregiver(
        mut self,
        caregiver_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        self.caregiver_name = caregiver_name.into();
        self.phone_number = phone_number.into();
        self
    }

    /// Mark the named dose administered and re-derive the completion rate.
    ///
    /// Returns `false` when no dose with that name is scheduled.
    pub fn mark_dose_administered(&mut self, dose_name: &str, date: NaiveDate) -> bool {
        let Some(dose) = self.doses.iter_mut().find(|d| d.name == dose_name) else {
            return false;
        };

        dose.mark_administered(date);
        self.completion_rate = schedule::completion_rate(&self.doses);
        true
    }

    /// Re-classify non-completed doses as of a reference date
    pub fn refresh_statuses(&mut self, reference_date: NaiveDate) {
        self.doses = schedule::recompute_status(&self.doses, reference_date);
        self.completion_rate = schedule::completion_rate(&self.doses);
    }

    /// Whether any dose is overdue
    #[must_use]
    pub fn has_overdue(&self) -> bool {
        self.doses.iter().any(DoseRecord::is_overdue)
    }

    /// Number of overdue doses
    #[must_use]
    pub fn overdue_count(&self) -> usize {
        self.doses.iter().filter(|d| d.is_overdue()).count()
    }

    /// The earliest non-completed dose, if any
    #[must_use]
    pub fn next_due(&self) -> Option<&DoseRecord> {
        self.doses
            .iter()
            .filter(|d| !d.is_completed())
            .min_by_key(|d| d.due_on)
    }

    /// Whether every scheduled dose has been administered
    #[must_use]
    pub fn is_fully_immunized(&self) -> bool {
        !self.doses.is_empty() && self.doses.iter().all(DoseRecord::is_completed)
    }

    /// Age in completed weeks at the reference date; `None` before birth
    #[must_use]
    pub fn age_in_weeks_at(&self, reference_date: &NaiveDate) -> Option<i64> {
        (*reference_date >= self.date_of_birth)
            .then(|| (*reference_date - self.date_of_birth).num_weeks())
    }
}

// Implement EntityModel trait
impl EntityModel for Child {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// A collection of children that can be efficiently queried
#[derive(Debug, Default)]
pub struct ChildCollection {
    /// Children indexed by id
    children: FxHashMap<u32, Arc<Child>>,
}

impl ChildCollection {
    /// Create a new empty `ChildCollection`
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: FxHashMap::default(),
        }
    }

    /// Create a collection from registered children
    #[must_use]
    pub fn from_children(children: Vec<Child>) -> Self {
        let mut collection = Self::new();
        collection.add_all(children);
        collection
    }

    /// Insert an already-shared child, replacing any record with the same id
    pub fn insert(&mut self, child: Arc<Child>) {
        self.children.insert(child.id, child);
    }

    /// Children with at least one overdue dose
    #[must_use]
    pub fn with_overdue(&self) -> Vec<Arc<Child>> {
        self.filter(Child::has_overdue)
    }

    /// Children whose schedule is fully completed
    #[must_use]
    pub fn fully_immunized(&self) -> Vec<Arc<Child>> {
        self.filter(Child::is_fully_immunized)
    }

    /// Children registered by the named caregiver
    #[must_use]
    pub fn children_of(&self, caregiver_name: &str) -> Vec<Arc<Child>> {
        self.filter(|child| child.caregiver_name == caregiver_name)
    }
}

// Implement ModelCollection trait
impl ModelCollection<Child> for ChildCollection {
    fn add(&mut self, child: Child) {
        self.children.insert(child.id, Arc::new(child));
    }

    fn get(&self, id: &u32) -> Option<Arc<Child>> {
        self.children.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<Child>> {
        self.children.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.children.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<Child>>
    where
        F: Fn(&Child) -> bool,
    {
        self.children
            .values()
            .filter(|child| predicate(child))
            .cloned()
            .collect()
    }
}
