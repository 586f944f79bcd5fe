//! Language and project size profiles
//!
//! A language profile gives lines of code per function point; a size profile
//! gives workload days per function point. Both are keyed by name,
//! case-insensitively.

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceError;

/// Lines of code per function point for one implementation language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub name: String,
    pub lines_per_point: u32,
}

/// Workload days per function point for one project size category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSizeProfile {
    pub name: String,
    pub days_per_point: u32,
}

/// Language lookup table
#[derive(Debug, Clone)]
pub struct LanguageTable {
    rows: Vec<LanguageProfile>,
}

impl LanguageTable {
    pub fn new(rows: Vec<LanguageProfile>) -> Self {
        Self { rows }
    }

    /// Lines of code per function point for the named language
    pub fn lookup(&self, name: &str) -> Result<u32, ReferenceError> {
        self.rows
            .iter()
            .find(|row| row.name.eq_ignore_ascii_case(name))
            .map(|row| row.lines_per_point)
            .ok_or_else(|| ReferenceError::UnknownLanguage(name.to_string()))
    }
}

/// Project size lookup table
#[derive(Debug, Clone)]
pub struct SizeTable {
    rows: Vec<ProjectSizeProfile>,
}

impl SizeTable {
    /// Build a table, rejecting profiles with a zero workload
    pub fn new(rows: Vec<ProjectSizeProfile>) -> Result<Self, ReferenceError> {
        if let Some(row) = rows.iter().find(|row| row.days_per_point == 0) {
            return Err(ReferenceError::InvalidProfile {
                name: row.name.clone(),
                reason: "days_per_point must be positive".to_string(),
            });
        }
        Ok(Self { rows })
    }

    /// Workload days per function point for the named size category
    pub fn lookup(&self, name: &str) -> Result<u32, ReferenceError> {
        self.rows
            .iter()
            .find(|row| row.name.eq_ignore_ascii_case(name))
            .map(|row| row.days_per_point)
            .ok_or_else(|| ReferenceError::UnknownSizeCategory(name.to_string()))
    }
}
