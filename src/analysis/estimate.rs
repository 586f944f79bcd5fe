//! Project estimate aggregate
//!
//! Bundles every derived metric of the two estimation methods into one
//! serializable record for the presentation layer. Built fresh on every call;
//! nothing is cached between reads.

use serde::{Deserialize, Serialize};

use crate::analysis::{cocomo, function_points, EstimateError};
use crate::entities::Project;
use crate::reference::ReferenceData;

/// All derived metrics of a project, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    /// Sum of raw function points over the project's functions
    pub raw_function_points: u32,

    /// Adjustment factor times raw function points
    pub net_function_points: i64,

    /// Estimated size in thousands of lines of code
    pub kloc: f64,

    /// Raw workload in person-days from the size profile
    pub workload_days: i64,

    /// Raw workload in 30-day months
    pub workload_months: f64,

    /// Simple COCOMO effort in person-months
    pub simple_effort: f64,

    /// Simple effort adjusted by the 15 cost driver multipliers
    pub intermediate_effort: f64,

    /// Development time in months
    pub development_time: f64,
}

impl ProjectEstimate {
    /// Compute every metric for a project against a reference dataset
    ///
    /// Either the whole record computes or the first failure is returned;
    /// there are no partial results.
    pub fn compute(project: &Project, reference: &ReferenceData) -> Result<Self, EstimateError> {
        Ok(Self {
            raw_function_points: function_points::project_raw_points(project, reference)?,
            net_function_points: function_points::project_net_points(project, reference)?,
            kloc: function_points::estimated_kloc(project, reference)?,
            workload_days: function_points::raw_workload_days(project, reference)?,
            workload_months: function_points::workload_months(project, reference)?,
            simple_effort: cocomo::simple_effort(project, reference)?,
            intermediate_effort: cocomo::intermediate_effort(project, reference)?,
            development_time: cocomo::development_time(project, reference)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Function;
    use crate::reference::{FunctionType, ProjectType};

    #[test]
    fn test_compute_fills_every_field() {
        let reference = ReferenceData::builtin().unwrap();
        let mut project =
            Project::new("demo", ProjectType::Organic, "pascal", "medium", "Author");
        project.add_function(Function::new("entry", FunctionType::Input, 1, 3));

        let estimate = project.estimate(&reference).unwrap();

        assert_eq!(estimate.raw_function_points, 3);
        assert_eq!(estimate.net_function_points, 3);
        assert!((estimate.kloc - 0.273).abs() < 1e-12);
        assert_eq!(estimate.workload_days, 30);
        assert!(estimate.simple_effort > 0.0);
        assert_eq!(estimate.intermediate_effort, estimate.simple_effort);
        assert!(estimate.development_time > 0.0);
    }

    #[test]
    fn test_compute_fails_atomically() {
        let reference = ReferenceData::builtin().unwrap();
        let mut project =
            Project::new("demo", ProjectType::Organic, "klingon", "medium", "Author");
        project.add_function(Function::new("entry", FunctionType::Input, 1, 3));

        // Unknown language: the whole estimate fails, no partial record.
        assert!(project.estimate(&reference).is_err());
    }

    #[test]
    fn test_estimate_roundtrip() {
        let reference = ReferenceData::builtin().unwrap();
        let mut project =
            Project::new("demo", ProjectType::Embedded, "c", "large", "Author");
        project.add_function(Function::new("report", FunctionType::Output, 2, 7));

        let estimate = project.estimate(&reference).unwrap();
        let yaml = serde_yml::to_string(&estimate).unwrap();
        let parsed: ProjectEstimate = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(parsed, estimate);
    }
}
