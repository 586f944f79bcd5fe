//! COCOMO coefficient table
//!
//! Four named coefficients per project type. A and B scale simple effort
//! from KLOC, C and D derive development time from intermediate effort.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::reference::ReferenceError;

/// COCOMO project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Small team, familiar problem domain
    Organic,
    /// Between organic and embedded
    SemiDetached,
    /// Tight hardware, software and operational constraints
    Embedded,
}

impl Default for ProjectType {
    fn default() -> Self {
        ProjectType::Organic
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Organic => write!(f, "organic"),
            ProjectType::SemiDetached => write!(f, "semi_detached"),
            ProjectType::Embedded => write!(f, "embedded"),
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organic" => Ok(ProjectType::Organic),
            "semi_detached" | "semi-detached" => Ok(ProjectType::SemiDetached),
            "embedded" => Ok(ProjectType::Embedded),
            _ => Err(format!("Unknown project type: {}", s)),
        }
    }
}

/// Coefficient identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoefficientName {
    A,
    B,
    C,
    D,
}

impl fmt::Display for CoefficientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoefficientName::A => write!(f, "A"),
            CoefficientName::B => write!(f, "B"),
            CoefficientName::C => write!(f, "C"),
            CoefficientName::D => write!(f, "D"),
        }
    }
}

/// One reference row: (project type, name) -> value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coefficient {
    pub project_type: ProjectType,
    pub name: CoefficientName,
    pub value: f64,
}

/// Coefficient lookup table (12 rows: 3 project types x 4 names)
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    rows: Vec<Coefficient>,
}

impl CoefficientTable {
    pub fn new(rows: Vec<Coefficient>) -> Self {
        Self { rows }
    }

    /// Resolve a coefficient value for a project type
    pub fn lookup(
        &self,
        project_type: ProjectType,
        name: CoefficientName,
    ) -> Result<f64, ReferenceError> {
        self.rows
            .iter()
            .find(|row| row.project_type == project_type && row.name == name)
            .map(|row| row.value)
            .ok_or(ReferenceError::MissingCoefficient { project_type, name })
    }
}
