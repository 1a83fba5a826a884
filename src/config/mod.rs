//! Configuration for the tracker
//!
//! The dose-rule table is a configuration artifact: deployments follow the
//! built-in NPI calendar unless a replacement table is supplied from disk.

use crate::error::Result;
use crate::schedule::{Calendar, DoseRule};
use std::fs;
use std::path::Path;

/// Configuration for schedule derivation and reporting
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Dose-rule table used for schedule derivation
    pub calendar: Calendar,
    /// Number of entries in hotspot and priority listings
    pub report_limit: usize,
    /// Vaccines highlighted in compliance reporting
    pub compliance_vaccines: Vec<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            calendar: Calendar::npi(),
            report_limit: 5,
            compliance_vaccines: vec![
                "BCG".to_string(),
                "Pentavalent (1st dose)".to_string(),
                "Pentavalent (2nd dose)".to_string(),
                "Pentavalent (3rd dose)".to_string(),
                "Measles (1st dose)".to_string(),
            ],
        }
    }
}

/// Load a dose-rule table from a JSON file.
///
/// The file holds an array of rules in table order; out-of-order tables are
/// rejected.
pub fn load_calendar(path: &Path) -> Result<Calendar> {
    let raw = fs::read_to_string(path)?;
    let rules: Vec<DoseRule> = serde_json::from_str(&raw)?;
    Calendar::new(rules)
}
