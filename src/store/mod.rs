//! Session store for children and notifications
//!
//! The store is the mutation owner around the pure schedule engine: every
//! change to a child's dose records goes through it, so the completion rate
//! stays in sync and overdue transitions surface as notifications. Data is
//! held for the session only; a durable implementation would persist on each
//! mutation behind the same trait.

use crate::error::{Result, VaxTrackError};
use crate::models::{
    Child, ChildCollection, Gender, ModelCollection, Notification, NotificationKind,
};
use crate::schedule::Calendar;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

/// Repository seam between the schedule engine and the surrounding
/// application
pub trait Store {
    /// Register a child and derive their initial schedule
    fn register_child(
        &mut self,
        name: &str,
        date_of_birth: NaiveDate,
        gender: Gender,
        caregiver_name: &str,
        phone_number: &str,
        reference_date: NaiveDate,
    ) -> Result<Arc<Child>>;

    /// Record an administered dose and re-derive the completion rate
    fn record_administration(
        &mut self,
        child_id: u32,
        dose_name: &str,
        administered_on: NaiveDate,
    ) -> Result<Arc<Child>>;

    /// Re-classify every child's doses as of `reference_date`, returning the
    /// number of doses that newly became overdue
    fn refresh(&mut self, reference_date: NaiveDate) -> Result<usize>;

    /// Fetch a child by id
    fn child(&self, child_id: u32) -> Option<Arc<Child>>;

    /// All registered children
    fn children(&self) -> Vec<Arc<Child>>;

    /// Drain pending notifications, oldest first
    fn take_notifications(&mut self) -> Vec<Notification>;
}

/// In-memory, session-scoped store
#[derive(Debug)]
pub struct MemoryStore {
    calendar: Calendar,
    children: ChildCollection,
    notifications: Vec<Notification>,
    next_child_id: u32,
    next_notification_id: u32,
}

impl MemoryStore {
    /// Create a store over the given calendar
    #[must_use]
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar,
            children: ChildCollection::new(),
            notifications: Vec::new(),
            next_child_id: 1,
            next_notification_id: 1,
        }
    }

    /// Create a store over the built-in NPI calendar
    #[must_use]
    pub fn with_npi_calendar() -> Self {
        Self::new(Calendar::npi())
    }

    /// The calendar this store derives schedules from
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    fn push_notification(&mut self, message: String, kind: NotificationKind, urgent: bool) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications
            .push(Notification::new(id, message, kind, urgent));
    }
}

impl Store for MemoryStore {
    fn register_child(
        &mut self,
        name: &str,
        date_of_birth: NaiveDate,
        gender: Gender,
        caregiver_name: &str,
        phone_number: &str,
        reference_date: NaiveDate,
    ) -> Result<Arc<Child>> {
        let id = self.next_child_id;
        self.next_child_id += 1;

        let child = Child::register(id, name, date_of_birth, gender, &self.calendar, reference_date)
            .with_caregiver(caregiver_name, phone_number);

        info!(
            "registered child {id} ({name}), {} scheduled doses, completion {}%",
            child.doses.len(),
            child.completion_rate
        );
        self.push_notification(
            format!("{name} was registered with {} scheduled doses", child.doses.len()),
            NotificationKind::Info,
            false,
        );

        let child = Arc::new(child);
        self.children.insert(child.clone());
        Ok(child)
    }

    fn record_administration(
        &mut self,
        child_id: u32,
        dose_name: &str,
        administered_on: NaiveDate,
    ) -> Result<Arc<Child>> {
        let Some(existing) = self.children.get(&child_id) else {
            return Err(VaxTrackError::Store(format!("unknown child id {child_id}")));
        };

        let mut child = (*existing).clone();
        if !child.mark_dose_administered(dose_name, administered_on) {
            return Err(VaxTrackError::Store(format!(
                "no dose named {dose_name:?} scheduled for child {child_id}"
            )));
        }

        info!(
            "recorded {dose_name} for child {child_id}, completion now {}%",
            child.completion_rate
        );

        let child = Arc::new(child);
        self.children.insert(child.clone());
        Ok(child)
    }

    fn refresh(&mut self, reference_date: NaiveDate) -> Result<usize> {
        let mut newly_overdue = 0;

        for existing in self.children.all() {
            let before = existing.overdue_count();

            let mut child = (*existing).clone();
            child.refresh_statuses(reference_date);

            let after = child.overdue_count();
            if after > before {
                newly_overdue += after - before;
                self.push_notification(
                    format!("{}'s vaccination is overdue", child.name),
                    NotificationKind::Alert,
                    true,
                );
            }

            self.children.insert(Arc::new(child));
        }

        if newly_overdue > 0 {
            warn!("{newly_overdue} doses became overdue as of {reference_date}");
        }
        Ok(newly_overdue)
    }

    fn child(&self, child_id: u32) -> Option<Arc<Child>> {
        self.children.get(&child_id)
    }

    fn children(&self) -> Vec<Arc<Child>> {
        self.children.all()
    }

    fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
