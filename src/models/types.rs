//! Shared enumerations for the vaccination data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single scheduled dose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoseStatus {
    /// The dose has been administered
    Completed,
    /// The dose has not been administered and its due date has not passed
    Due,
    /// The due date has passed without administration
    Overdue,
}

impl fmt::Display for DoseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Due => write!(f, "due"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// Gender of a registered child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}
