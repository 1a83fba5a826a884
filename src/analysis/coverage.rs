//! Cross-child coverage statistics
//!
//! Aggregations over many children at once: headline cohort numbers,
//! per-vaccine compliance, overdue hotspots, and priority rankings. The
//! cohort-wide pass runs on rayon so clinic-scale cohorts aggregate in
//! parallel.

use crate::models::Child;
use itertools::Itertools;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Headline cohort statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CohortSummary {
    /// Number of registered children
    pub total_children: usize,
    /// Mean completion rate across the cohort, rounded
    pub average_completion: u8,
    /// Children with at least one overdue dose
    pub children_with_overdue: usize,
    /// Children whose schedule is fully completed
    pub completed_schedules: usize,
}

/// Summarize a cohort; an empty cohort is all zeros
#[must_use]
pub fn cohort_summary(children: &[Child]) -> CohortSummary {
    if children.is_empty() {
        return CohortSummary {
            total_children: 0,
            average_completion: 0,
            children_with_overdue: 0,
            completed_schedules: 0,
        };
    }

    let (rate_sum, overdue, completed) = children
        .par_iter()
        .map(|child| {
            (
                u32::from(child.completion_rate),
                usize::from(child.has_overdue()),
                usize::from(child.is_fully_immunized()),
            )
        })
        .reduce(
            || (0, 0, 0),
            |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2),
        );

    CohortSummary {
        total_children: children.len(),
        average_completion: (f64::from(rate_sum) / children.len() as f64).round() as u8,
        children_with_overdue: overdue,
        completed_schedules: completed,
    }
}

/// Completion percentage for a single vaccine across the cohort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VaccineCompliance {
    /// Vaccine name as configured in the calendar
    pub name: String,
    /// Children with the dose completed, as a rounded percentage of
    /// children that have it scheduled
    pub percent: u8,
}

/// Per-vaccine completion percentages.
///
/// A vaccine nobody has scheduled reports 0.
#[must_use]
pub fn vaccine_compliance(children: &[Child], names: &[&str]) -> Vec<VaccineCompliance> {
    names
        .iter()
        .map(|&name| {
            let scheduled = children
                .iter()
                .filter(|c| c.doses.iter().any(|d| d.name == name))
                .count();
            let completed = children
                .iter()
                .filter(|c| c.doses.iter().any(|d| d.name == name && d.is_completed()))
                .count();

            let percent = if scheduled == 0 {
                0
            } else {
                ((completed as f64 / scheduled as f64) * 100.0).round() as u8
            };

            VaccineCompliance {
                name: name.to_string(),
                percent,
            }
        })
        .collect()
}

/// Overdue counts per vaccine, highest first.
///
/// Ties break on the vaccine name so the ordering is deterministic.
#[must_use]
pub fn overdue_hotspots(children: &[Child], limit: usize) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for child in children {
        for dose in &child.doses {
            if dose.is_overdue() {
                *counts.entry(dose.name.as_str()).or_default() += 1;
            }
        }
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .take(limit)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}

/// A child ranked by overdue burden
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityChild {
    /// Child identifier
    pub id: u32,
    /// Child name
    pub name: String,
    /// Number of overdue doses
    pub overdue_count: usize,
    /// Current completion rate
    pub completion_rate: u8,
}

/// Children with overdue doses, most overdue first.
///
/// Children without overdue doses are excluded; ties break on the child's
/// name.
#[must_use]
pub fn priority_children(children: &[Child], limit: usize) -> Vec<PriorityChild> {
    children
        .iter()
        .map(|child| PriorityChild {
            id: child.id,
            name: child.name.clone(),
            overdue_count: child.overdue_count(),
            completion_rate: child.completion_rate,
        })
        .filter(|p| p.overdue_count > 0)
        .sorted_by(|a, b| {
            b.overdue_count
                .cmp(&a.overdue_count)
                .then_with(|| a.name.cmp(&b.name))
        })
        .take(limit)
        .collect()
}

/// Children counted per caregiver, largest first
#[must_use]
pub fn caregiver_distribution(children: &[Child], limit: usize) -> Vec<(String, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for child in children {
        *counts.entry(child.caregiver_name.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .take(limit)
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
